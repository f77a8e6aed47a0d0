//! Room-detail price calculator.
//!
//! Unlike the booking summary, the calculator hides its panel as soon as the
//! dates stop forming a stay, and it cannot be built without a nightly rate.

use tracing::debug;

use crate::date::{self, CheckOutFloor};
use crate::error::Result;
use crate::pricing::NightlyRate;

/// Id of the element carrying the required `data-price` attribute.
pub const RATE_ELEMENT_ID: &str = "pricePerNight";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub nights: u32,
    pub subtotal: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorView {
    /// A date is not chosen yet; leave the panel as it is.
    Unchanged,
    /// The dates do not form a stay; hide the panel.
    Hidden,
    /// Fill in and show the panel.
    Shown(PriceBreakdown),
}

/// Result of a check-in change: the check-out floor plus the panel update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInOutcome {
    pub floor: CheckOutFloor,
    pub view: CalculatorView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceCalculator {
    rate: NightlyRate,
}

impl PriceCalculator {
    #[must_use]
    pub const fn new(rate: NightlyRate) -> Self {
        Self { rate }
    }

    /// Build from the raw `data-price` value of `#pricePerNight`.
    ///
    /// # Errors
    ///
    /// Fails when the attribute is missing or not a number.
    pub fn from_price_attribute(raw: Option<&str>) -> Result<Self> {
        let rate = NightlyRate::parse_required(RATE_ELEMENT_ID, raw)?;
        debug!(rate = rate.per_night(), "price calculator ready");
        Ok(Self::new(rate))
    }

    #[must_use]
    pub const fn rate(&self) -> NightlyRate {
        self.rate
    }

    #[must_use]
    pub fn recompute(&self, check_in: &str, check_out: &str) -> CalculatorView {
        if check_in.is_empty() || check_out.is_empty() {
            return CalculatorView::Unchanged;
        }
        let Some(nights) = date::night_count(check_in, check_out) else {
            return CalculatorView::Hidden;
        };
        let quote = self.rate.quote(nights);
        let total = quote.total_fixed();
        CalculatorView::Shown(PriceBreakdown {
            nights,
            subtotal: total.clone(),
            total,
        })
    }

    /// Floor check-out to the new check-in, then recompute.
    ///
    /// A cleared check-out hides the panel; the recompute that follows sees
    /// an empty check-out and leaves it hidden.
    #[must_use]
    pub fn check_in_changed(&self, check_in: &str, check_out: &str) -> CheckInOutcome {
        let floor = date::floor_check_out(check_in, check_out);
        let view = if floor.clear_check_out {
            CalculatorView::Hidden
        } else {
            self.recompute(check_in, check_out)
        };
        CheckInOutcome { floor, view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use pretty_assertions::assert_eq;

    fn calculator() -> PriceCalculator {
        PriceCalculator::from_price_attribute(Some("50.00")).unwrap()
    }

    #[test]
    fn missing_rate_is_fatal() {
        let err = PriceCalculator::from_price_attribute(None).unwrap_err();
        assert!(matches!(err, SiteError::MissingRate { .. }));
    }

    #[test]
    fn unparseable_rate_is_fatal() {
        let err = PriceCalculator::from_price_attribute(Some("tbd")).unwrap_err();
        assert!(matches!(err, SiteError::InvalidRate { .. }));
    }

    #[test]
    fn valid_stay_shows_breakdown() {
        assert_eq!(
            calculator().recompute("2024-06-01", "2024-06-04"),
            CalculatorView::Shown(PriceBreakdown {
                nights: 3,
                subtotal: "150.00".to_owned(),
                total: "150.00".to_owned(),
            })
        );
    }

    #[test]
    fn empty_dates_leave_panel_alone() {
        assert_eq!(calculator().recompute("", "2024-06-04"), CalculatorView::Unchanged);
        assert_eq!(calculator().recompute("2024-06-01", ""), CalculatorView::Unchanged);
    }

    #[test]
    fn non_positive_stay_hides_panel() {
        assert_eq!(
            calculator().recompute("2024-06-04", "2024-06-04"),
            CalculatorView::Hidden
        );
        assert_eq!(
            calculator().recompute("2024-06-04", "2024-06-01"),
            CalculatorView::Hidden
        );
    }

    #[test]
    fn check_in_past_check_out_clears_and_hides() {
        let outcome = calculator().check_in_changed("2024-06-05", "2024-06-04");
        assert_eq!(outcome.floor.min, "2024-06-05");
        assert!(outcome.floor.clear_check_out);
        assert_eq!(outcome.view, CalculatorView::Hidden);
    }

    #[test]
    fn check_in_before_check_out_recomputes() {
        let outcome = calculator().check_in_changed("2024-06-02", "2024-06-04");
        assert!(!outcome.floor.clear_check_out);
        assert!(matches!(
            outcome.view,
            CalculatorView::Shown(PriceBreakdown { nights: 2, .. })
        ));
    }
}
