//! Navbar scroll styling rule.

use crate::config::SiteConfig;

/// CSS class toggled on `#navbar`.
pub const SCROLLED_CLASS: &str = "scrolled";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarScroll {
    threshold_px: f64,
}

impl Default for NavbarScroll {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl NavbarScroll {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            threshold_px: config.navbar_scroll_threshold_px,
        }
    }

    #[must_use]
    pub const fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// Whether the navbar should carry the scrolled style at `scroll_y`.
    ///
    /// Strictly greater: sitting exactly on the threshold is not scrolled.
    #[must_use]
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold_px
    }
}
