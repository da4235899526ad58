//! Storefront session
//!
//! Drives one order page: every input event re-prices the form from
//! scratch, and submitting shows the confirmation toast and resets the
//! form to its defaults.

use std::time::Instant;

use printshop_common::{OrderSelection, PriceBreakdown};
use tracing::{debug, info};

use crate::chrome::{scroll_top_visible, DEFAULT_SCROLL_TOP_THRESHOLD};
use crate::config::StorefrontConfig;
use crate::form::FormData;
use crate::pricing::PricingEngine;
use crate::summary::SummaryView;
use crate::toast::{Toast, ToastState, ToastTiming};

/// One order page
#[derive(Debug)]
pub struct Storefront {
    engine: PricingEngine,
    defaults: FormData,
    form: FormData,
    breakdown: PriceBreakdown,
    summary: SummaryView,
    toast: Option<Toast>,
    toast_timing: ToastTiming,
    scroll_top_threshold: f64,
}

impl Storefront {
    /// Open the page with the form's default values and price them
    pub fn new(engine: PricingEngine, defaults: FormData) -> Self {
        let breakdown = engine.quote(&OrderSelection::from(&defaults));
        let summary = SummaryView::render(&breakdown);
        Self {
            engine,
            form: defaults.clone(),
            defaults,
            breakdown,
            summary,
            toast: None,
            toast_timing: ToastTiming::default(),
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
        }
    }

    /// Open the page with toast timing and scroll threshold from config
    pub fn from_config(
        engine: PricingEngine,
        defaults: FormData,
        config: &StorefrontConfig,
    ) -> Self {
        let mut storefront =
            Self::new(engine, defaults).with_toast_timing(config.toast_timing());
        storefront.scroll_top_threshold = config.scroll_top_threshold;
        storefront
    }

    /// Override the confirmation toast timeline
    pub fn with_toast_timing(mut self, timing: ToastTiming) -> Self {
        self.toast_timing = timing;
        self
    }

    /// Input or change event: take the new form state and re-price it
    pub fn update(&mut self, form: FormData) -> &SummaryView {
        self.form = form;
        self.reprice()
    }

    /// Submit the order: show the toast, reset the form, re-price
    pub fn submit(&mut self, now: Instant) -> &SummaryView {
        info!(
            total = %self.breakdown.total,
            copies = self.breakdown.copies,
            "Order submitted"
        );
        self.toast = Some(Toast::order_received(now, self.toast_timing));
        self.form = self.defaults.clone();
        self.reprice()
    }

    /// Advance the toast; returns its state, or `None` once it is gone
    pub fn tick(&mut self, now: Instant) -> Option<ToastState> {
        let state = self.toast.as_ref()?.state_at(now);
        if state == ToastState::Removed {
            debug!("Toast removed");
            self.toast = None;
        }
        Some(state)
    }

    /// Scroll event: whether the scroll-to-top button shows at `scroll_y`
    pub fn scroll_top_visible(&self, scroll_y: f64) -> bool {
        scroll_top_visible(scroll_y, self.scroll_top_threshold)
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn breakdown(&self) -> &PriceBreakdown {
        &self.breakdown
    }

    pub fn summary(&self) -> &SummaryView {
        &self.summary
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    fn reprice(&mut self) -> &SummaryView {
        self.breakdown = self.engine.quote(&OrderSelection::from(&self.form));
        self.summary = SummaryView::render(&self.breakdown);
        &self.summary
    }
}
