//! Nightly rates and price quotes.
//!
//! Rates arrive as `data-price` attribute strings rendered by the server.
//! Depending on locale they may read `"50.00"` or `"50,00"`; both parse
//! to the leading numeric prefix (50), the same reading a browser's
//! `parseFloat` gives.

use crate::error::{Result, SiteError};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct NightlyRate(f64);

impl NightlyRate {
    pub const ZERO: Self = Self(0.0);

    /// Wrap a finite per-night amount.
    #[must_use]
    pub fn new(per_night: f64) -> Option<Self> {
        per_night.is_finite().then_some(Self(per_night))
    }

    #[must_use]
    pub const fn per_night(self) -> f64 {
        self.0
    }

    /// Read a rate that may be missing or malformed; both fall back to zero.
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(parse_leading_number)
            .and_then(Self::new)
            .unwrap_or(Self::ZERO)
    }

    /// Read a rate the page cannot work without.
    ///
    /// # Errors
    ///
    /// [`SiteError::MissingRate`] when the attribute is absent,
    /// [`SiteError::InvalidRate`] when it holds no leading number.
    pub fn parse_required(element: &str, raw: Option<&str>) -> Result<Self> {
        let raw = raw.ok_or_else(|| SiteError::missing_rate(element))?;
        parse_leading_number(raw)
            .and_then(Self::new)
            .ok_or_else(|| SiteError::invalid_rate(element, raw))
    }

    #[must_use]
    pub fn quote(self, nights: u32) -> PriceQuote {
        PriceQuote {
            nights,
            total: f64::from(nights) * self.0,
        }
    }
}

/// Price of a stay. Subtotal equals total; no taxes or fees are modelled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    nights: u32,
    total: f64,
}

impl PriceQuote {
    #[must_use]
    pub const fn nights(&self) -> u32 {
        self.nights
    }

    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Total with exactly two decimals, e.g. `"150.00"`.
    #[must_use]
    pub fn total_fixed(&self) -> String {
        format!("{:.2}", self.total)
    }

    /// Total prefixed with a currency symbol, e.g. `"€150.00"`.
    #[must_use]
    pub fn total_with_currency(&self, symbol: &str) -> String {
        format!("{symbol}{:.2}", self.total)
    }
}

/// Longest leading decimal literal of `raw` (after leading whitespace).
fn parse_leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}
