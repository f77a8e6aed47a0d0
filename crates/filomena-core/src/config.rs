//! Page behaviour tuning.
//!
//! Every field has a default that reproduces the live site, so an empty
//! config (or none at all) is always valid. Hosts that want different
//! timings pass a JSON object with any subset of the fields below.

use std::time::Duration;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::error::Result;

/// Scroll offset (px) past which the navbar switches to its scrolled style.
pub const DEFAULT_NAVBAR_SCROLL_THRESHOLD_PX: f64 = 60.0;
/// Delay before a flash message starts fading.
pub const DEFAULT_FLASH_DISMISS_DELAY_MS: u64 = 4000;
/// Fade duration; the message is removed once the fade completes.
pub const DEFAULT_FLASH_FADE_MS: u64 = 500;
/// Fraction of a reveal target that must be visible before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

const MAX_FLASH_DISMISS_DELAY_MS: u64 = 600_000;
const MAX_FLASH_FADE_MS: u64 = 10_000;

/// Minimum severity forwarded to the browser console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    #[must_use]
    pub const fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error => LevelFilter::ERROR,
            Self::Off => LevelFilter::OFF,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navbar_scroll_threshold_px: f64,
    pub flash_dismiss_delay_ms: u64,
    pub flash_fade_ms: u64,
    pub reveal_threshold: f64,
    pub currency_symbol: String,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold_px: DEFAULT_NAVBAR_SCROLL_THRESHOLD_PX,
            flash_dismiss_delay_ms: DEFAULT_FLASH_DISMISS_DELAY_MS,
            flash_fade_ms: DEFAULT_FLASH_FADE_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config object and clamp it with [`SiteConfig::validated`].
    ///
    /// A blank string yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    #[must_use]
    pub fn with_navbar_threshold(mut self, px: f64) -> Self {
        self.navbar_scroll_threshold_px = px;
        self
    }

    #[must_use]
    pub fn with_flash_timing(mut self, dismiss_delay: Duration, fade: Duration) -> Self {
        self.flash_dismiss_delay_ms = millis_u64(dismiss_delay);
        self.flash_fade_ms = millis_u64(fade);
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Clamp values to ranges the page can honour.
    ///
    /// - navbar threshold: finite and non-negative, otherwise the default
    /// - flash delay: at most 10 minutes
    /// - flash fade: at most 10 seconds
    /// - reveal threshold: `0.0..=1.0`, non-finite falls back to the default
    /// - blank currency symbol falls back to `€`
    #[must_use]
    pub fn validated(mut self) -> Self {
        if !self.navbar_scroll_threshold_px.is_finite() || self.navbar_scroll_threshold_px < 0.0 {
            self.navbar_scroll_threshold_px = DEFAULT_NAVBAR_SCROLL_THRESHOLD_PX;
        }
        self.flash_dismiss_delay_ms = self.flash_dismiss_delay_ms.min(MAX_FLASH_DISMISS_DELAY_MS);
        self.flash_fade_ms = self.flash_fade_ms.min(MAX_FLASH_FADE_MS);
        self.reveal_threshold = if self.reveal_threshold.is_finite() {
            self.reveal_threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };
        if self.currency_symbol.trim().is_empty() {
            self.currency_symbol = DEFAULT_CURRENCY_SYMBOL.to_owned();
        }
        self
    }
}

fn millis_u64(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
