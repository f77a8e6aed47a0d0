#![forbid(unsafe_code)]

//! WASM page controllers for the Hotel Santa Filomena site.
//!
//! This crate binds [`filomena_core`] to the site's markup through
//! `wasm-bindgen` and `web-sys`. Each page type gets one controller object,
//! mounted once the document has been parsed:
//!
//! - [`ChromePage`]: navbar scroll style, hamburger menu, flash messages,
//!   scroll reveal. Present on every page.
//! - [`BookingFormPage`]: the booking sidebar summary.
//! - [`RoomDetailPage`]: the gallery lightbox and the price calculator.
//!
//! Loading the module wires nothing beyond the panic hook. The page's loader
//! script calls `await boot()` once and keeps the returned [`Site`]; `boot`
//! itself defers to `DOMContentLoaded`, so it may run from the document head.
//! The individual `mount*` functions exist for pages that want finer control.
//! Dropping a controller (or calling `destroy()`) detaches its listeners.

pub mod logging;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    BookingFormPage, ChromePage, RoomDetailPage, Site, boot, mount_booking_form, mount_chrome,
    mount_room_detail,
};
