//! Page chrome around the order form

use chrono::{DateTime, Datelike, TimeZone};

/// Scroll offset past which the scroll-to-top button appears
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 400.0;

/// Whether the scroll-to-top button should be shown
pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Year printed in the footer
pub fn footer_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.year()
}
