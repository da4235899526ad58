//! Submission confirmation toast
//!
//! A toast walks through a fixed timeline measured from its creation:
//!
//! ```text
//! Pending --show_delay--> Visible --visible_until--> Hiding --fade_out--> Removed
//! ```
//!
//! `Pending` and `Hiding` are both off-screen; `Hiding` is the fade-out
//! before the element is dropped. State is a pure function of elapsed time.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

pub const RECEIVED_TITLE: &str = "Project received!";
pub const RECEIVED_BODY: &str =
    "Our production specialists will reach out shortly to confirm timelines and collect files.";

/// Toast lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastState {
    /// Created, not yet shown
    Pending,
    Visible,
    /// Fading out
    Hiding,
    /// Gone; the owner should drop it
    Removed,
}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        matches!(self, ToastState::Visible)
    }
}

/// Toast timeline, relative to creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub show_delay: Duration,
    /// When the toast starts hiding
    pub visible_until: Duration,
    pub fade_out: Duration,
}

impl ToastTiming {
    pub const DEFAULT_SHOW_DELAY: Duration = Duration::from_millis(50);
    pub const DEFAULT_VISIBLE_UNTIL: Duration = Duration::from_millis(5000);
    pub const DEFAULT_FADE_OUT: Duration = Duration::from_millis(300);

    /// Default timing with a custom on-screen deadline
    pub fn with_visible_until(visible_until: Duration) -> Self {
        Self {
            visible_until,
            ..Self::default()
        }
    }

    /// Time from creation until removal
    pub fn lifetime(&self) -> Duration {
        self.visible_until.max(self.show_delay) + self.fade_out
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            show_delay: Self::DEFAULT_SHOW_DELAY,
            visible_until: Self::DEFAULT_VISIBLE_UNTIL,
            fade_out: Self::DEFAULT_FADE_OUT,
        }
    }
}

/// A confirmation toast
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub body: String,
    created_at: Instant,
    timing: ToastTiming,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: Instant,
        timing: ToastTiming,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            created_at,
            timing,
        }
    }

    /// The "project received" confirmation shown after submitting an order
    pub fn order_received(created_at: Instant, timing: ToastTiming) -> Self {
        Self::new(RECEIVED_TITLE, RECEIVED_BODY, created_at, timing)
    }

    pub fn timing(&self) -> ToastTiming {
        self.timing
    }

    /// State at `now`. Times before creation read as `Pending`.
    pub fn state_at(&self, now: Instant) -> ToastState {
        let elapsed = now.saturating_duration_since(self.created_at);
        let hide_at = self.timing.visible_until.max(self.timing.show_delay);

        if elapsed < self.timing.show_delay {
            ToastState::Pending
        } else if elapsed < hide_at {
            ToastState::Visible
        } else if elapsed < hide_at + self.timing.fade_out {
            ToastState::Hiding
        } else {
            ToastState::Removed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_default_timeline() {
        let t0 = Instant::now();
        let toast = Toast::order_received(t0, ToastTiming::default());

        assert_eq!(toast.state_at(t0), ToastState::Pending);
        assert_eq!(toast.state_at(t0 + ms(49)), ToastState::Pending);
        assert_eq!(toast.state_at(t0 + ms(50)), ToastState::Visible);
        assert_eq!(toast.state_at(t0 + ms(4999)), ToastState::Visible);
        assert_eq!(toast.state_at(t0 + ms(5000)), ToastState::Hiding);
        assert_eq!(toast.state_at(t0 + ms(5299)), ToastState::Hiding);
        assert_eq!(toast.state_at(t0 + ms(5300)), ToastState::Removed);
    }

    #[test]
    fn test_before_creation_is_pending() {
        let t0 = Instant::now();
        let toast = Toast::order_received(t0 + ms(100), ToastTiming::default());
        assert_eq!(toast.state_at(t0), ToastState::Pending);
    }

    #[test]
    fn test_visible_until_shorter_than_show_delay() {
        let t0 = Instant::now();
        let toast = Toast::order_received(t0, ToastTiming::with_visible_until(ms(10)));

        assert_eq!(toast.state_at(t0 + ms(50)), ToastState::Hiding);
        assert_eq!(toast.state_at(t0 + ms(350)), ToastState::Removed);
        assert_eq!(toast.timing().lifetime(), ms(350));
    }

    #[test]
    fn test_message() {
        let toast = Toast::order_received(Instant::now(), ToastTiming::default());
        assert_eq!(toast.title, "Project received!");
        assert!(toast.body.contains("production specialists"));
        assert!(!ToastState::Hiding.is_visible());
        assert!(ToastState::Visible.is_visible());
    }
}
