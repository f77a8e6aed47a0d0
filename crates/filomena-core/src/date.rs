//! Calendar dates as exchanged with `<input type="date">`.
//!
//! Date inputs expose their value as an ISO `YYYY-MM-DD` string, or an empty
//! string when nothing is selected. Nights are counted on calendar dates, so
//! daylight-saving transitions never shift the result.

use chrono::NaiveDate;

const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date-input value. Empty or malformed values yield `None`.
#[must_use]
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).ok()
}

/// Format a date the way a date input's `value`/`min` expects it.
#[must_use]
pub fn format_input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// Positive night count between two date-input values.
///
/// Returns `None` when either value is empty or malformed, or when
/// check-out is not strictly after check-in.
#[must_use]
pub fn night_count(check_in: &str, check_out: &str) -> Option<u32> {
    StayDates::parse(check_in, check_out).map(StayDates::nights)
}

/// A validated stay: check-out is strictly after check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    #[must_use]
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Option<Self> {
        (check_out > check_in).then_some(Self {
            check_in,
            check_out,
        })
    }

    #[must_use]
    pub fn parse(check_in: &str, check_out: &str) -> Option<Self> {
        Self::new(parse_input_date(check_in)?, parse_input_date(check_out)?)
    }

    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Whole nights in the stay. Always at least 1.
    #[must_use]
    pub fn nights(self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

/// What a check-in change does to the check-out input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutFloor {
    /// New `min` for the check-out input (the check-in value, verbatim).
    pub min: String,
    /// The current check-out is no longer after check-in and must be cleared.
    pub clear_check_out: bool,
}

/// Floor the check-out input to a freshly chosen check-in.
///
/// An empty check-out is never cleared. Values that both parse are compared
/// as dates; otherwise they are compared as ISO strings, which orders
/// well-formed input values the same way.
#[must_use]
pub fn floor_check_out(check_in: &str, check_out: &str) -> CheckOutFloor {
    let clear_check_out = !check_out.is_empty()
        && match (parse_input_date(check_in), parse_input_date(check_out)) {
            (Some(start), Some(end)) => end <= start,
            _ => check_out <= check_in,
        };
    CheckOutFloor {
        min: check_in.to_owned(),
        clear_check_out,
    }
}
