//! Room detail page: gallery lightbox and price calculator.
//!
//! The two halves are independent. The lightbox is wired first so that a
//! page with a broken price attribute still has a working gallery.

use std::cell::RefCell;
use std::rc::Rc;

use filomena_core::calculator::RATE_ELEMENT_ID;
use filomena_core::{
    CalculatorView, Gallery, Lightbox, LightboxCommand, LightboxFrame, LightboxKey,
    PriceCalculator, SiteConfig,
};
use gloo::events::EventListener;
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement, KeyboardEvent, Node};

use super::dom;

const GALLERY_ITEM_SELECTOR: &str = ".room-gallery__item";
const LIGHTBOX_OPEN_CLASS: &str = "open";

#[wasm_bindgen]
pub struct RoomDetailPage {
    listeners: Vec<EventListener>,
    lightbox: Option<Rc<LightboxController>>,
    calculator: Option<Rc<CalculatorForm>>,
}

#[wasm_bindgen]
impl RoomDetailPage {
    #[wasm_bindgen(js_name = openLightbox)]
    pub fn open_lightbox(&self, index: i32) {
        if let Some(lightbox) = &self.lightbox {
            lightbox.open(i64::from(index));
        }
    }

    #[wasm_bindgen(js_name = closeLightbox)]
    pub fn close_lightbox(&self) {
        if let Some(lightbox) = &self.lightbox {
            lightbox.close();
        }
    }

    #[wasm_bindgen(js_name = changeLightbox)]
    pub fn change_lightbox(&self, direction: i32) {
        if let Some(lightbox) = &self.lightbox {
            lightbox.navigate(i64::from(direction));
        }
    }

    #[wasm_bindgen(js_name = isLightboxOpen)]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox
            .as_ref()
            .is_some_and(|lightbox| lightbox.state.borrow().is_open())
    }

    #[wasm_bindgen(js_name = galleryLength)]
    pub fn gallery_length(&self) -> u32 {
        self.lightbox.as_ref().map_or(0, |lightbox| {
            u32::try_from(lightbox.state.borrow().gallery().len()).unwrap_or(u32::MAX)
        })
    }

    /// Re-run the price calculator against the current date inputs.
    #[wasm_bindgen(js_name = refreshPrice)]
    pub fn refresh_price(&self) {
        if let Some(calculator) = &self.calculator {
            calculator.on_check_out_change();
        }
    }

    /// Detach listeners. An open lightbox is closed first so page scrolling
    /// is restored.
    pub fn destroy(&mut self) {
        if self.is_lightbox_open() {
            self.close_lightbox();
        }
        self.listeners.clear();
    }
}

/// Lightbox state plus the elements it paints.
struct LightboxController {
    state: RefCell<Lightbox>,
    root: HtmlElement,
    image: Option<HtmlImageElement>,
    counter: Option<Element>,
    body: Option<HtmlElement>,
}

impl LightboxController {
    fn open(&self, index: i64) {
        let command = self.state.borrow_mut().open(index);
        if let Some(command) = command {
            self.apply(command);
        }
    }

    fn close(&self) {
        let command = self.state.borrow_mut().close();
        self.apply(command);
    }

    fn navigate(&self, direction: i64) {
        let command = self.state.borrow_mut().navigate(direction);
        if let Some(command) = command {
            self.apply(command);
        }
    }

    fn key(&self, key: &str) {
        let Some(key) = LightboxKey::from_dom_key(key) else {
            return;
        };
        let command = self.state.borrow_mut().handle_key(key);
        if let Some(command) = command {
            self.apply(command);
        }
    }

    fn apply(&self, command: LightboxCommand) {
        match command {
            LightboxCommand::Show(frame) => {
                self.paint(&frame);
                dom::toggle_class(&self.root, LIGHTBOX_OPEN_CLASS, true);
                if let Some(body) = &self.body {
                    dom::set_style(body, "overflow", "hidden");
                }
            }
            LightboxCommand::Render(frame) => self.paint(&frame),
            LightboxCommand::Hide => {
                dom::toggle_class(&self.root, LIGHTBOX_OPEN_CLASS, false);
                if let Some(body) = &self.body {
                    dom::clear_style(body, "overflow");
                }
            }
        }
    }

    fn paint(&self, frame: &LightboxFrame) {
        if let Some(image) = &self.image {
            image.set_src(&frame.src);
        }
        dom::set_text(self.counter.as_ref(), &frame.caption());
    }
}

fn mount_lightbox(
    document: &Document,
    listeners: &mut Vec<EventListener>,
) -> Result<Option<Rc<LightboxController>>, JsValue> {
    let items = dom::query_all(document, GALLERY_ITEM_SELECTOR)?;
    let sources: Vec<Option<String>> = items
        .iter()
        .map(|item| item.get_attribute("data-src"))
        .collect();
    let gallery = Gallery::from_sources(sources.iter().cloned());

    let Some(root) = dom::by_id::<HtmlElement>(document, "lightbox") else {
        return Ok(None);
    };
    let controller = Rc::new(LightboxController {
        state: RefCell::new(Lightbox::new(gallery)),
        root,
        image: dom::by_id(document, "lightboxImg"),
        counter: dom::by_id(document, "lightboxCounter"),
        body: document.body(),
    });

    // Thumbnails open their own position; items without a source are skipped.
    let with_source = items.iter().zip(&sources).filter(|(_, src)| src.is_some());
    for (index, (item, _)) in with_source.enumerate() {
        let controller = Rc::clone(&controller);
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        listeners.push(EventListener::new(item, "click", move |_| {
            controller.open(index);
        }));
    }

    {
        let controller = Rc::clone(&controller);
        let root = controller.root.clone();
        listeners.push(EventListener::new(&root, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|target| dom::same_node(&controller.root, &target));
            if on_backdrop {
                controller.close();
            }
        }));
    }

    {
        let controller = Rc::clone(&controller);
        listeners.push(EventListener::new(document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                controller.key(&event.key());
            }
        }));
    }

    debug!(images = controller.state.borrow().gallery().len(), "lightbox mounted");
    Ok(Some(controller))
}

/// Calculator plus the inputs and panel it drives.
struct CalculatorForm {
    calculator: PriceCalculator,
    check_in: HtmlInputElement,
    check_out: HtmlInputElement,
    summary: Option<HtmlElement>,
    night_count: Option<Element>,
    subtotal: Option<Element>,
    total: Option<Element>,
}

impl CalculatorForm {
    fn on_check_in_change(&self) {
        let outcome = self
            .calculator
            .check_in_changed(&self.check_in.value(), &self.check_out.value());
        self.check_out.set_min(&outcome.floor.min);
        if outcome.floor.clear_check_out {
            debug!(min = %outcome.floor.min, "check-out cleared");
            self.check_out.set_value("");
        }
        self.apply(outcome.view);
    }

    fn on_check_out_change(&self) {
        let view = self
            .calculator
            .recompute(&self.check_in.value(), &self.check_out.value());
        self.apply(view);
    }

    fn apply(&self, view: CalculatorView) {
        match view {
            CalculatorView::Unchanged => {}
            CalculatorView::Hidden => self.set_summary_display("none"),
            CalculatorView::Shown(breakdown) => {
                dom::set_text(self.night_count.as_ref(), &breakdown.nights.to_string());
                dom::set_text(self.subtotal.as_ref(), &breakdown.subtotal);
                dom::set_text(self.total.as_ref(), &breakdown.total);
                self.set_summary_display("block");
            }
        }
    }

    fn set_summary_display(&self, display: &str) {
        if let Some(summary) = &self.summary {
            dom::set_style(summary, "display", display);
        }
    }
}

fn mount_calculator(
    document: &Document,
    listeners: &mut Vec<EventListener>,
) -> filomena_core::Result<Option<Rc<CalculatorForm>>> {
    let rate = dom::by_id::<Element>(document, RATE_ELEMENT_ID)
        .and_then(|element| element.get_attribute("data-price"));
    let calculator = PriceCalculator::from_price_attribute(rate.as_deref())?;

    let (Some(check_in), Some(check_out)) = (
        dom::by_id::<HtmlInputElement>(document, "checkIn"),
        dom::by_id::<HtmlInputElement>(document, "checkOut"),
    ) else {
        return Ok(None);
    };

    let today = dom::today();
    check_in.set_min(&today);
    check_out.set_min(&today);

    let form = Rc::new(CalculatorForm {
        calculator,
        check_in,
        check_out,
        summary: dom::by_id(document, "priceSummary"),
        night_count: dom::by_id(document, "nightCount"),
        subtotal: dom::by_id(document, "subtotal"),
        total: dom::by_id(document, "totalPrice"),
    });

    {
        let handler = Rc::clone(&form);
        listeners.push(EventListener::new(&form.check_in, "change", move |_| {
            handler.on_check_in_change();
        }));
    }
    {
        let handler = Rc::clone(&form);
        listeners.push(EventListener::new(&form.check_out, "change", move |_| {
            handler.on_check_out_change();
        }));
    }
    Ok(Some(form))
}

pub(crate) fn mount(document: &Document, _config: &SiteConfig) -> Result<RoomDetailPage, JsValue> {
    let mut listeners = Vec::new();
    let lightbox = mount_lightbox(document, &mut listeners)?;

    let calculator = match mount_calculator(document, &mut listeners) {
        Ok(calculator) => calculator,
        Err(err) => {
            error!(%err, "room detail price calculator unavailable");
            // The gallery stays usable for the rest of the page's life.
            for listener in listeners {
                listener.forget();
            }
            return Err(dom::js_error(err));
        }
    };

    debug!(listeners = listeners.len(), "room detail mounted");
    Ok(RoomDetailPage {
        listeners,
        lightbox,
        calculator,
    })
}
