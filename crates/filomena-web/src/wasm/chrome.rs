//! Global chrome: navbar, hamburger menu, flash messages, scroll reveal.

use std::cell::RefCell;
use std::rc::Rc;

use filomena_core::navbar::SCROLLED_CLASS;
use filomena_core::reveal::REVEALED_CLASS;
use filomena_core::{FlashTimeline, NavbarScroll, RevealTracker, SiteConfig};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::dom;

const MENU_OPEN_CLASS: &str = "open";
const FLASH_SELECTOR: &str = ".message-alert";
const REVEAL_SELECTOR: &str = ".reveal";

/// Site-wide chrome controller, present on every page.
#[wasm_bindgen]
pub struct ChromePage {
    listeners: Vec<EventListener>,
    reveal: Option<RevealObserver>,
    flash_count: u32,
}

#[wasm_bindgen]
impl ChromePage {
    /// Number of flash messages scheduled for dismissal at mount.
    #[wasm_bindgen(js_name = flashCount)]
    pub fn flash_count(&self) -> u32 {
        self.flash_count
    }

    /// Detach listeners and stop observing reveal targets. Pending flash
    /// timers still fire.
    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.reveal = None;
    }
}

pub(crate) fn mount(document: &Document, config: &SiteConfig) -> Result<ChromePage, JsValue> {
    let window = dom::window()?;
    let mut listeners = Vec::new();

    if let Some(navbar) = dom::by_id::<Element>(document, "navbar") {
        let rule = NavbarScroll::new(config);
        debug!(threshold_px = rule.threshold_px(), "navbar scroll styling");
        let scroll_window = window.clone();
        let apply = move || {
            let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
            dom::toggle_class(&navbar, SCROLLED_CLASS, rule.is_scrolled(scroll_y));
        };
        // A page restored mid-scroll must start styled.
        apply();
        // gloo listeners are passive by default.
        listeners.push(EventListener::new(&window, "scroll", move |_| apply()));
    }

    if let (Some(hamburger), Some(nav_links)) = (
        dom::by_id::<Element>(document, "hamburger"),
        dom::by_id::<Element>(document, "navLinks"),
    ) {
        listeners.push(EventListener::new(&hamburger, "click", move |_| {
            if let Err(err) = nav_links.class_list().toggle(MENU_OPEN_CLASS) {
                warn!(?err, "menu toggle failed");
            }
        }));
    }

    let (flash_count, reveal) = match mount_timers_and_observers(document, config) {
        Ok(observers) => observers,
        Err(err) => {
            warn!(?err, "chrome partially mounted");
            // Navbar and menu stay bound for the rest of the page's life.
            for listener in listeners {
                listener.forget();
            }
            return Err(err);
        }
    };

    debug!(
        listeners = listeners.len(),
        flash_count,
        reveal_targets = reveal.as_ref().map_or(0, RevealObserver::len),
        "chrome mounted"
    );
    Ok(ChromePage {
        listeners,
        reveal,
        flash_count,
    })
}

fn mount_timers_and_observers(
    document: &Document,
    config: &SiteConfig,
) -> Result<(u32, Option<RevealObserver>), JsValue> {
    let flash_count = schedule_flash_dismissal(document, FlashTimeline::new(config))?;
    let reveal = RevealObserver::observe(document, config.reveal_threshold)?;
    Ok((flash_count, reveal))
}

/// One fire-and-forget timer chain per message.
fn schedule_flash_dismissal(document: &Document, timeline: FlashTimeline) -> Result<u32, JsValue> {
    let (fade_after_ms, fade_ms) = timeline.timer_delays_ms();
    let transition = timeline.transition_css();
    let mut count = 0;
    for message in dom::query_all(document, FLASH_SELECTOR)? {
        let Ok(message) = message.dyn_into::<HtmlElement>() else {
            continue;
        };
        let transition = transition.clone();
        Timeout::new(fade_after_ms, move || {
            dom::set_style(&message, "transition", &transition);
            dom::set_style(&message, "opacity", "0");
            Timeout::new(fade_ms, move || message.remove()).forget();
        })
        .forget();
        count += 1;
    }
    if count > 0 {
        debug!(count, removed_after = ?timeline.removed_after(), "flash dismissal scheduled");
    }
    Ok(count)
}

/// `IntersectionObserver` driving one-shot reveals.
struct RevealObserver {
    observer: IntersectionObserver,
    targets: Rc<Vec<Element>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn observe(document: &Document, threshold: f64) -> Result<Option<Self>, JsValue> {
        let targets = dom::query_all(document, REVEAL_SELECTOR)?;
        if targets.is_empty() {
            return Ok(None);
        }
        let targets = Rc::new(targets);
        let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));

        let callback = {
            let targets = Rc::clone(&targets);
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();
                        let Some(index) = targets.iter().position(|el| dom::same_node(el, &target))
                        else {
                            continue;
                        };
                        let mut tracker = tracker.borrow_mut();
                        if tracker.on_visibility(index, entry.is_intersecting()) {
                            debug!(
                                index,
                                revealed = tracker.revealed_count(),
                                targets = tracker.len(),
                                "reveal target shown"
                            );
                            if let Err(err) = target.class_list().add_1(REVEALED_CLASS) {
                                warn!(index, ?err, "reveal failed");
                            }
                            observer.unobserve(&target);
                        }
                    }
                    if tracker.borrow().is_complete() {
                        observer.disconnect();
                    }
                },
            )
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in targets.iter() {
            observer.observe(target);
        }
        Ok(Some(Self {
            observer,
            targets,
            _callback: callback,
        }))
    }

    fn len(&self) -> usize {
        self.targets.len()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
