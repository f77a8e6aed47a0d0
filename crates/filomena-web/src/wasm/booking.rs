//! Booking form: keeps the sidebar summary in step with the form inputs.

use std::rc::Rc;

use filomena_core::{BookingInputs, BookingSummary, SiteConfig};
use gloo::events::EventListener;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement};

use super::dom;

#[wasm_bindgen]
pub struct BookingFormPage {
    listeners: Vec<EventListener>,
    form: Rc<BookingForm>,
}

#[wasm_bindgen]
impl BookingFormPage {
    /// Re-run the summary against the current input values.
    pub fn refresh(&self) {
        self.form.update_summary();
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
    }
}

struct BookingForm {
    summary: BookingSummary,
    check_in: Option<HtmlInputElement>,
    check_out: Option<HtmlInputElement>,
    guests: Option<HtmlInputElement>,
    summary_nights: Option<Element>,
    summary_total: Option<Element>,
    summary_guests: Option<Element>,
    price_meta: Option<Element>,
}

impl BookingForm {
    fn from_document(document: &Document, config: &SiteConfig) -> Self {
        Self {
            summary: BookingSummary::new(config),
            check_in: dom::by_id(document, "id_check_in"),
            check_out: dom::by_id(document, "id_check_out"),
            guests: dom::by_id(document, "id_guests"),
            summary_nights: dom::by_id(document, "summaryNights"),
            summary_total: dom::by_id(document, "summaryTotal"),
            summary_guests: dom::by_id(document, "summaryGuests"),
            price_meta: dom::by_id(document, "roomPriceMeta"),
        }
    }

    fn update_summary(&self) {
        let (Some(check_in), Some(check_out), Some(price_meta)) =
            (&self.check_in, &self.check_out, &self.price_meta)
        else {
            return;
        };
        let check_in = check_in.value();
        let check_out = check_out.value();
        let guests = self.guests.as_ref().map(HtmlInputElement::value);
        let price = price_meta.get_attribute("data-price");

        let Some(view) = self.summary.recompute(&BookingInputs {
            check_in: &check_in,
            check_out: &check_out,
            guests: guests.as_deref(),
            price_attribute: price.as_deref(),
        }) else {
            return;
        };

        debug!(nights = view.nights, total = %view.total, "booking summary updated");
        dom::set_text(self.summary_nights.as_ref(), &view.nights.to_string());
        dom::set_text(self.summary_total.as_ref(), &view.total);
        if let Some(guests) = &view.guests {
            dom::set_text(self.summary_guests.as_ref(), guests);
        }
    }

    fn on_check_in_change(&self) {
        if let (Some(check_in), Some(check_out)) = (&self.check_in, &self.check_out) {
            let floor = self
                .summary
                .check_in_changed(&check_in.value(), &check_out.value());
            check_out.set_min(&floor.min);
            if floor.clear_check_out {
                debug!(min = %floor.min, "check-out cleared");
                check_out.set_value("");
            }
        }
        self.update_summary();
    }
}

pub(crate) fn mount(document: &Document, config: &SiteConfig) -> BookingFormPage {
    let form = Rc::new(BookingForm::from_document(document, config));
    let today = dom::today();
    for input in [&form.check_in, &form.check_out].into_iter().flatten() {
        input.set_min(&today);
    }

    let mut listeners = Vec::new();
    if let Some(check_in) = &form.check_in {
        let form = Rc::clone(&form);
        listeners.push(EventListener::new(check_in, "change", move |_| {
            form.on_check_in_change();
        }));
    }
    for input in [&form.check_out, &form.guests].into_iter().flatten() {
        let form = Rc::clone(&form);
        listeners.push(EventListener::new(input, "change", move |_| {
            form.update_summary();
        }));
    }

    // Pre-filled values (e.g. after a failed submit) show straight away.
    form.update_summary();
    debug!(listeners = listeners.len(), "booking form mounted");
    BookingFormPage { listeners, form }
}
