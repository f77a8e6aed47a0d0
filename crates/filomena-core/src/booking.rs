//! Booking-form sidebar summary.
//!
//! The summary mirrors the check-in/check-out/guests inputs. It only ever
//! moves forward: when the current dates do not form a stay, the previous
//! display is left as it was instead of being blanked.

use tracing::trace;

use crate::config::SiteConfig;
use crate::date::{self, CheckOutFloor};
use crate::pricing::NightlyRate;

/// Raw control values read at the moment of recomputation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingInputs<'a> {
    pub check_in: &'a str,
    pub check_out: &'a str,
    /// Guest count input value, `None` when the form has no such control.
    pub guests: Option<&'a str>,
    /// `data-price` of the room price element, re-read on every change.
    pub price_attribute: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummaryView {
    pub nights: u32,
    /// Currency-prefixed total, e.g. `"€150.00"`.
    pub total: String,
    /// Guest count to display verbatim; `None` leaves the field untouched.
    pub guests: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    currency_symbol: String,
}

impl Default for BookingSummary {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl BookingSummary {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    /// View to display for the given inputs, or `None` to keep the current one.
    #[must_use]
    pub fn recompute(&self, inputs: &BookingInputs<'_>) -> Option<BookingSummaryView> {
        let rate = NightlyRate::parse_lenient(inputs.price_attribute);
        let Some(nights) = date::night_count(inputs.check_in, inputs.check_out) else {
            trace!(
                check_in = inputs.check_in,
                check_out = inputs.check_out,
                "booking summary unchanged"
            );
            return None;
        };
        let quote = rate.quote(nights);
        Some(BookingSummaryView {
            nights,
            total: quote.total_with_currency(&self.currency_symbol),
            guests: inputs.guests.map(str::to_owned),
        })
    }

    /// Constraint to apply to check-out after check-in changed.
    #[must_use]
    pub fn check_in_changed(&self, check_in: &str, check_out: &str) -> CheckOutFloor {
        date::floor_check_out(check_in, check_out)
    }
}
