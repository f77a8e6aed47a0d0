//! `wasm-bindgen` exports.
//!
//! Only compiled on `wasm32` targets.

mod booking;
mod chrome;
mod dom;
mod room_detail;

pub use booking::BookingFormPage;
pub use chrome::ChromePage;
pub use room_detail::RoomDetailPage;

use filomena_core::SiteConfig;
use js_sys::Array;
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::logging;

/// Module start: only the panic hook. Controllers are mounted by [`boot`].
#[wasm_bindgen(start)]
pub fn start() {
    logging::install_panic_hook();
}

/// Parse the host config, install logging and fetch the document.
fn prepare(config: Option<String>) -> Result<(Document, SiteConfig), JsValue> {
    logging::install_panic_hook();
    let config = dom::site_config(config)?;
    logging::init(config.log_level);
    Ok((dom::document()?, config))
}

#[wasm_bindgen(js_name = mountChrome)]
pub fn mount_chrome(config: Option<String>) -> Result<ChromePage, JsValue> {
    let (document, config) = prepare(config)?;
    chrome::mount(&document, &config)
}

#[wasm_bindgen(js_name = mountBookingForm)]
pub fn mount_booking_form(config: Option<String>) -> Result<BookingFormPage, JsValue> {
    let (document, config) = prepare(config)?;
    Ok(booking::mount(&document, &config))
}

/// Mount the room detail controller.
///
/// Throws when `#pricePerNight` has no usable `data-price`; the lightbox
/// stays wired in that case.
#[wasm_bindgen(js_name = mountRoomDetail)]
pub fn mount_room_detail(config: Option<String>) -> Result<RoomDetailPage, JsValue> {
    let (document, config) = prepare(config)?;
    room_detail::mount(&document, &config)
}

/// Every controller that found its page, mounted by [`boot`].
#[wasm_bindgen]
pub struct Site {
    chrome: ChromePage,
    booking: Option<BookingFormPage>,
    room_detail: Option<RoomDetailPage>,
    errors: Vec<String>,
}

impl Site {
    fn mount(document: &Document, config: &SiteConfig) -> Result<Self, JsValue> {
        let chrome = chrome::mount(document, config)?;

        let booking = ["id_check_in", "roomPriceMeta"]
            .iter()
            .any(|id| dom::has_id(document, id))
            .then(|| booking::mount(document, config));

        let mut errors = Vec::new();
        let room_detail = if ["lightbox", "checkIn", "pricePerNight"]
            .iter()
            .any(|id| dom::has_id(document, id))
        {
            match room_detail::mount(document, config) {
                Ok(page) => Some(page),
                Err(err) => {
                    let message = err
                        .dyn_ref::<js_sys::Error>()
                        .map_or_else(|| format!("{err:?}"), |e| String::from(e.message()));
                    error!(%message, "room detail failed to mount");
                    errors.push(message);
                    None
                }
            }
        } else {
            None
        };

        debug!(
            booking = booking.is_some(),
            room_detail = room_detail.is_some(),
            "site booted"
        );
        Ok(Self {
            chrome,
            booking,
            room_detail,
            errors,
        })
    }
}

#[wasm_bindgen]
impl Site {
    #[wasm_bindgen(js_name = hasBookingForm)]
    pub fn has_booking_form(&self) -> bool {
        self.booking.is_some()
    }

    #[wasm_bindgen(js_name = hasRoomDetail)]
    pub fn has_room_detail(&self) -> bool {
        self.room_detail.is_some()
    }

    /// Messages of controllers that failed to mount.
    #[wasm_bindgen(js_name = mountErrors)]
    pub fn mount_errors(&self) -> Array {
        self.errors.iter().map(|e| JsValue::from_str(e)).collect()
    }

    #[wasm_bindgen(js_name = flashCount)]
    pub fn flash_count(&self) -> u32 {
        self.chrome.flash_count()
    }

    #[wasm_bindgen(js_name = openLightbox)]
    pub fn open_lightbox(&self, index: i32) {
        if let Some(page) = &self.room_detail {
            page.open_lightbox(index);
        }
    }

    #[wasm_bindgen(js_name = closeLightbox)]
    pub fn close_lightbox(&self) {
        if let Some(page) = &self.room_detail {
            page.close_lightbox();
        }
    }

    #[wasm_bindgen(js_name = changeLightbox)]
    pub fn change_lightbox(&self, direction: i32) {
        if let Some(page) = &self.room_detail {
            page.change_lightbox(direction);
        }
    }

    #[wasm_bindgen(js_name = isLightboxOpen)]
    pub fn is_lightbox_open(&self) -> bool {
        self.room_detail
            .as_ref()
            .is_some_and(RoomDetailPage::is_lightbox_open)
    }

    pub fn destroy(&mut self) {
        self.chrome.destroy();
        if let Some(page) = &mut self.booking {
            page.destroy();
        }
        if let Some(page) = &mut self.room_detail {
            page.destroy();
        }
    }
}

/// Wait for the document to be parsed, then mount every controller whose
/// anchor element is on the page.
#[wasm_bindgen]
pub async fn boot(config: Option<String>) -> Result<Site, JsValue> {
    let (document, config) = prepare(config)?;
    dom::dom_content_loaded(&document).await?;
    Site::mount(&document, &config)
}
