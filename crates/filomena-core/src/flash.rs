//! Flash message auto-dismiss timeline.
//!
//! Each message runs the same two-step timeline, measured from the moment it
//! was scheduled:
//!
//! ```text
//!   0 ────────── dismiss_after ────────── dismiss_after + fade
//!   │  Visible   │        Fading          │  Removed
//! ```
//!
//! Timelines are independent and cannot be cancelled; a message whose page
//! goes away simply never reaches `Removed`.

use std::time::Duration;

use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashTimeline {
    dismiss_after: Duration,
    fade: Duration,
}

impl Default for FlashTimeline {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl FlashTimeline {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            dismiss_after: Duration::from_millis(config.flash_dismiss_delay_ms),
            fade: Duration::from_millis(config.flash_fade_ms),
        }
    }

    /// Delay from scheduling until the element leaves the page.
    #[must_use]
    pub fn removed_after(&self) -> Duration {
        self.dismiss_after.saturating_add(self.fade)
    }

    /// Inline `transition` value applied when the fade starts.
    #[must_use]
    pub fn transition_css(&self) -> String {
        format!("opacity {}ms", self.fade.as_millis())
    }

    /// Timer delays for the host in whole milliseconds: (until fade, fade).
    #[must_use]
    pub fn timer_delays_ms(&self) -> (u32, u32) {
        (millis_u32(self.dismiss_after), millis_u32(self.fade))
    }
}

fn millis_u32(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
