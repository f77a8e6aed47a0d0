//! Small DOM helpers shared by the page controllers.

use std::fmt::Display;

use filomena_core::SiteConfig;
use filomena_core::date::format_input_date;
use gloo::events::EventListener;
use js_sys::Promise;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Node, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| js_error("no global `window`"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| js_error("window has no document"))
}

/// Wrap a message in a JS `Error` so hosts get a stack trace.
pub(crate) fn js_error(message: impl Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

pub(crate) fn site_config(json: Option<String>) -> Result<SiteConfig, JsValue> {
    SiteConfig::from_json(json.as_deref().unwrap_or_default()).map_err(js_error)
}

/// Look up an optional element by id. Absent elements disable the feature
/// that needs them; a present element of the wrong type is logged.
pub(crate) fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let Some(element) = document.get_element_by_id(id) else {
        debug!(id, "element not on page");
        return None;
    };
    match element.dyn_into::<T>() {
        Ok(element) => Some(element),
        Err(_) => {
            warn!(id, "element has an unexpected type");
            None
        }
    }
}

pub(crate) fn has_id(document: &Document, id: &str) -> bool {
    document.get_element_by_id(id).is_some()
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn same_node(a: &Node, b: &Node) -> bool {
    a.is_same_node(Some(b))
}

pub(crate) fn set_text(element: Option<&Element>, text: &str) {
    if let Some(element) = element {
        element.set_text_content(Some(text));
    }
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn!(property, value, ?err, "style update failed");
    }
}

pub(crate) fn clear_style(element: &HtmlElement, property: &str) {
    if let Err(err) = element.style().remove_property(property) {
        warn!(property, ?err, "style reset failed");
    }
}

pub(crate) fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        warn!(class, ?err, "class toggle failed");
    }
}

/// Today's date in UTC as a date-input value.
pub(crate) fn today() -> String {
    format_input_date(chrono::Utc::now().date_naive())
}

/// Resolve once the document has been parsed.
pub(crate) async fn dom_content_loaded(document: &Document) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = Promise::new(&mut |resolve, _reject| {
        EventListener::once(document, "DOMContentLoaded", move |_| {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        })
        .forget();
    });
    JsFuture::from(promise).await.map(|_| ())
}
