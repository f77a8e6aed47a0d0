#![forbid(unsafe_code)]

//! Host-independent page behaviour for the Hotel Santa Filomena site.
//!
//! Everything in this crate is deterministic and free of DOM access so it can
//! be exercised by native tests. The `filomena-web` crate owns the DOM and
//! feeds raw input values (attribute strings, scroll offsets, key names)
//! into the types defined here, then applies the returned views.
//!
//! Design goals:
//! - **Host-driven**: the embedding page pushes events; nothing here blocks,
//!   spawns, or reads a clock.
//! - **String in, view out**: inputs are the raw values a form control
//!   exposes, outputs are the exact text the page should display.
//! - **One owner per page**: each controller is a plain value owned by the
//!   page that created it.

pub mod booking;
pub mod calculator;
pub mod config;
pub mod date;
pub mod error;
pub mod flash;
pub mod lightbox;
pub mod navbar;
pub mod pricing;
pub mod reveal;

pub use booking::{BookingInputs, BookingSummary, BookingSummaryView};
pub use calculator::{CalculatorView, CheckInOutcome, PriceBreakdown, PriceCalculator};
pub use config::{LogLevel, SiteConfig};
pub use date::{CheckOutFloor, StayDates};
pub use error::{Result, SiteError};
pub use flash::FlashTimeline;
pub use lightbox::{Gallery, Lightbox, LightboxCommand, LightboxFrame, LightboxKey, LightboxState};
pub use navbar::NavbarScroll;
pub use pricing::{NightlyRate, PriceQuote};
pub use reveal::RevealTracker;
