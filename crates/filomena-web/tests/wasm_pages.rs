#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

use filomena_web::{boot, mount_booking_form, mount_chrome, mount_room_detail};
use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, HtmlInputElement, KeyboardEvent,
    KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn render(html: &str) -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(html);
    document
}

fn input(document: &Document, id: &str) -> HtmlInputElement {
    document.get_element_by_id(id).unwrap().dyn_into().unwrap()
}

fn text(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn change(input: &HtmlInputElement, value: &str) {
    input.set_value(value);
    input.dispatch_event(&Event::new("change").unwrap()).unwrap();
}

fn press(document: &Document, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&event).unwrap();
}

fn has_class(document: &Document, id: &str, class: &str) -> bool {
    document
        .get_element_by_id(id)
        .unwrap()
        .class_list()
        .contains(class)
}

fn body_overflow(document: &Document) -> String {
    document
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

/// UTC calendar date, as `Date.prototype.toISOString` reports it.
fn utc_today() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())[..10].to_owned()
}

async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

const BOOKING_FORM: &str = r#"
  <form>
    <input type="date" id="id_check_in">
    <input type="date" id="id_check_out">
    <input type="number" id="id_guests" value="2">
    <select id="roomSelect"><option>Camera Doppia</option></select>
  </form>
  <aside>
    <span id="roomPriceMeta" data-price="50.00"></span>
    <span id="summaryNights">-</span>
    <span id="summaryTotal">-</span>
    <span id="summaryGuests">-</span>
  </aside>
"#;

#[wasm_bindgen_test]
fn booking_summary_tracks_dates_and_guests() {
    let document = render(BOOKING_FORM);
    let _page = mount_booking_form(None).unwrap();

    let check_in = input(&document, "id_check_in");
    let check_out = input(&document, "id_check_out");
    assert_eq!(check_in.min(), utc_today());
    assert_eq!(check_out.min(), utc_today());

    change(&check_in, "2024-06-01");
    assert_eq!(check_out.min(), "2024-06-01");
    assert_eq!(text(&document, "summaryNights"), "-");

    change(&check_out, "2024-06-04");
    assert_eq!(text(&document, "summaryNights"), "3");
    assert_eq!(text(&document, "summaryTotal"), "€150.00");
    assert_eq!(text(&document, "summaryGuests"), "2");

    change(&input(&document, "id_guests"), "3");
    assert_eq!(text(&document, "summaryGuests"), "3");
}

#[wasm_bindgen_test]
fn booking_check_in_after_check_out_clears_it_and_keeps_summary() {
    let document = render(BOOKING_FORM);
    let _page = mount_booking_form(None).unwrap();
    let check_in = input(&document, "id_check_in");
    let check_out = input(&document, "id_check_out");

    change(&check_in, "2024-06-01");
    change(&check_out, "2024-06-04");
    change(&check_in, "2024-06-04");

    assert_eq!(check_out.value(), "");
    assert_eq!(check_out.min(), "2024-06-04");
    // Previous display is left untouched.
    assert_eq!(text(&document, "summaryNights"), "3");
}

#[wasm_bindgen_test]
fn booking_summary_uses_prefilled_values_and_zero_rate() {
    let document = render(
        r#"
        <input type="date" id="id_check_in" value="2024-06-01">
        <input type="date" id="id_check_out" value="2024-06-03">
        <span id="roomPriceMeta"></span>
        <span id="summaryNights"></span>
        <span id="summaryTotal"></span>
        "#,
    );
    let _page = mount_booking_form(None).unwrap();
    assert_eq!(text(&document, "summaryNights"), "2");
    assert_eq!(text(&document, "summaryTotal"), "€0.00");
}

const ROOM_DETAIL: &str = r#"
  <div class="room-gallery">
    <div class="room-gallery__item" id="thumb0" data-src="/media/rooms/a.jpg"></div>
    <div class="room-gallery__item" id="thumb1" data-src="/media/rooms/b.jpg"></div>
    <div class="room-gallery__item" id="thumb2" data-src="/media/rooms/c.jpg"></div>
  </div>
  <div id="lightbox">
    <div class="lightbox__content" id="lightboxContent">
      <img id="lightboxImg">
      <span id="lightboxCounter"></span>
    </div>
  </div>
  <span id="pricePerNight" data-price="120.00"></span>
  <input type="date" id="checkIn">
  <input type="date" id="checkOut">
  <div id="priceSummary" style="display: none">
    <span id="nightCount"></span>
    <span id="subtotal"></span>
    <span id="totalPrice"></span>
  </div>
"#;

fn lightbox_src(document: &Document) -> String {
    document
        .get_element_by_id("lightboxImg")
        .unwrap()
        .dyn_into::<HtmlImageElement>()
        .unwrap()
        .src()
}

#[wasm_bindgen_test]
fn lightbox_opens_navigates_and_closes() {
    let document = render(ROOM_DETAIL);
    let page = mount_room_detail(None).unwrap();
    assert_eq!(page.gallery_length(), 3);

    page.open_lightbox(1);
    assert!(page.is_lightbox_open());
    assert!(has_class(&document, "lightbox", "open"));
    assert_eq!(body_overflow(&document), "hidden");
    assert!(lightbox_src(&document).ends_with("/media/rooms/b.jpg"));
    assert_eq!(text(&document, "lightboxCounter"), "2 / 3");

    page.change_lightbox(1);
    page.change_lightbox(1);
    assert_eq!(text(&document, "lightboxCounter"), "1 / 3");

    page.change_lightbox(-1);
    assert_eq!(text(&document, "lightboxCounter"), "3 / 3");

    page.close_lightbox();
    assert!(!page.is_lightbox_open());
    assert!(!has_class(&document, "lightbox", "open"));
    assert_eq!(body_overflow(&document), "");

    page.close_lightbox();
    assert!(!page.is_lightbox_open());
}

#[wasm_bindgen_test]
fn lightbox_keyboard_and_backdrop() {
    let document = render(ROOM_DETAIL);
    let page = mount_room_detail(None).unwrap();

    press(&document, "ArrowRight");
    assert!(!page.is_lightbox_open());
    assert_eq!(text(&document, "lightboxCounter"), "");

    let thumb: HtmlElement = document.get_element_by_id("thumb2").unwrap().dyn_into().unwrap();
    thumb.click();
    assert!(page.is_lightbox_open());
    assert_eq!(text(&document, "lightboxCounter"), "3 / 3");

    press(&document, "ArrowRight");
    assert_eq!(text(&document, "lightboxCounter"), "1 / 3");
    press(&document, "ArrowLeft");
    assert_eq!(text(&document, "lightboxCounter"), "3 / 3");

    // Clicks inside the content do not close.
    let content: HtmlElement = document
        .get_element_by_id("lightboxContent")
        .unwrap()
        .dyn_into()
        .unwrap();
    content.click();
    assert!(page.is_lightbox_open());

    let backdrop: HtmlElement = document.get_element_by_id("lightbox").unwrap().dyn_into().unwrap();
    backdrop.click();
    assert!(!page.is_lightbox_open());

    thumb.click();
    press(&document, "Escape");
    assert!(!page.is_lightbox_open());
}

fn summary_display(document: &Document) -> String {
    document
        .get_element_by_id("priceSummary")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

#[wasm_bindgen_test]
fn calculator_shows_and_hides_summary() {
    let document = render(ROOM_DETAIL);
    let _page = mount_room_detail(None).unwrap();
    let check_in = input(&document, "checkIn");
    let check_out = input(&document, "checkOut");
    assert_eq!(check_in.min(), utc_today());
    assert_eq!(check_out.min(), utc_today());

    change(&check_in, "2024-06-01");
    assert_eq!(summary_display(&document), "none");

    change(&check_out, "2024-06-04");
    assert_eq!(summary_display(&document), "block");
    assert_eq!(text(&document, "nightCount"), "3");
    assert_eq!(text(&document, "subtotal"), "360.00");
    assert_eq!(text(&document, "totalPrice"), "360.00");

    change(&check_in, "2024-06-05");
    assert_eq!(check_out.value(), "");
    assert_eq!(check_out.min(), "2024-06-05");
    assert_eq!(summary_display(&document), "none");
}

#[wasm_bindgen_test]
fn destroy_restores_scrolling_and_detaches_thumbnails() {
    let document = render(ROOM_DETAIL);
    let mut page = mount_room_detail(None).unwrap();
    page.open_lightbox(0);
    assert_eq!(body_overflow(&document), "hidden");

    page.destroy();
    assert!(!page.is_lightbox_open());
    assert!(!has_class(&document, "lightbox", "open"));
    assert_eq!(body_overflow(&document), "");

    let thumb: HtmlElement = document.get_element_by_id("thumb1").unwrap().dyn_into().unwrap();
    thumb.click();
    assert!(!page.is_lightbox_open());
    assert!(!has_class(&document, "lightbox", "open"));
}

#[wasm_bindgen_test]
fn calculator_without_rate_throws_but_lightbox_works() {
    let document = render(&ROOM_DETAIL.replace(r#" data-price="120.00""#, ""));
    let err = mount_room_detail(None).err().unwrap();
    let message = err.dyn_into::<js_sys::Error>().unwrap().message();
    assert_eq!(
        String::from(message),
        "required price attribute missing on #pricePerNight"
    );

    let thumb: HtmlElement = document.get_element_by_id("thumb0").unwrap().dyn_into().unwrap();
    thumb.click();
    assert!(has_class(&document, "lightbox", "open"));
    assert_eq!(text(&document, "lightboxCounter"), "1 / 3");
    press(&document, "Escape");
    assert!(!has_class(&document, "lightbox", "open"));
}

#[wasm_bindgen_test]
fn empty_gallery_never_opens() {
    let document = render(
        r#"<div id="lightbox"><img id="lightboxImg"><span id="lightboxCounter"></span></div>
           <span id="pricePerNight" data-price="80"></span>"#,
    );
    let page = mount_room_detail(None).unwrap();
    page.open_lightbox(0);
    assert!(!page.is_lightbox_open());
    assert!(!has_class(&document, "lightbox", "open"));
}

#[wasm_bindgen_test]
fn menu_toggle_and_navbar_scroll() {
    let document = render(
        r#"<nav id="navbar"><button id="hamburger"></button><ul id="navLinks"></ul></nav>
           <div style="height: 5000px"></div>"#,
    );
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 200.0);
    let _page = mount_chrome(None).unwrap();
    assert!(has_class(&document, "navbar", "scrolled"));

    window.scroll_to_with_x_and_y(0.0, 0.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert!(!has_class(&document, "navbar", "scrolled"));

    let hamburger: HtmlElement = document.get_element_by_id("hamburger").unwrap().dyn_into().unwrap();
    hamburger.click();
    assert!(has_class(&document, "navLinks", "open"));
    hamburger.click();
    assert!(!has_class(&document, "navLinks", "open"));
}

#[wasm_bindgen_test]
fn chrome_keeps_menu_bound_when_reveal_observer_fails() {
    let document = render(
        r#"<nav id="navbar"><button id="hamburger"></button><ul id="navLinks"></ul></nav>
           <section class="reveal" id="hero">Welcome</section>"#,
    );
    let global = js_sys::global();
    let name = JsValue::from_str("IntersectionObserver");
    let original = js_sys::Reflect::get(&global, &name).unwrap();
    let failing = js_sys::Function::new_no_args("throw new Error('observer unavailable')");
    js_sys::Reflect::set(&global, &name, &failing).unwrap();
    let mounted = mount_chrome(None);
    js_sys::Reflect::set(&global, &name, &original).unwrap();
    assert!(mounted.is_err());

    let hamburger: HtmlElement = document.get_element_by_id("hamburger").unwrap().dyn_into().unwrap();
    hamburger.click();
    assert!(has_class(&document, "navLinks", "open"));
}

#[wasm_bindgen_test]
async fn flash_messages_fade_then_leave() {
    let document = render(
        r#"<div class="message-alert" id="flash1">Booking received</div>
           <div class="message-alert" id="flash2">Check your email</div>"#,
    );
    let config = r#"{"flash_dismiss_delay_ms": 40, "flash_fade_ms": 40}"#;
    let page = mount_chrome(Some(config.to_owned())).unwrap();
    assert_eq!(page.flash_count(), 2);

    let flash = |id: &str| document.get_element_by_id(id);
    let opacity = |el: Element| {
        el.dyn_into::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("opacity")
            .unwrap()
    };

    assert_eq!(opacity(flash("flash1").unwrap()), "");
    sleep(60).await;
    assert_eq!(opacity(flash("flash1").unwrap()), "0");
    assert_eq!(opacity(flash("flash2").unwrap()), "0");
    sleep(100).await;
    assert!(flash("flash1").is_none());
    assert!(flash("flash2").is_none());
}

#[wasm_bindgen_test]
async fn reveal_targets_get_revealed_once_visible() {
    let document = render(r#"<section class="reveal" id="hero" style="height: 50px">Welcome</section>"#);
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    let _page = mount_chrome(None).unwrap();

    let mut revealed = false;
    for _ in 0..20 {
        sleep(50).await;
        if has_class(&document, "hero", "revealed") {
            revealed = true;
            break;
        }
    }
    assert!(revealed);
}

#[wasm_bindgen_test]
async fn boot_mounts_controllers_for_the_page() {
    let document = render(ROOM_DETAIL);
    let site = boot(None).await.unwrap();
    assert!(site.has_room_detail());
    assert!(!site.has_booking_form());
    assert_eq!(site.mount_errors().length(), 0);

    site.open_lightbox(0);
    assert!(site.is_lightbox_open());
    assert_eq!(text(&document, "lightboxCounter"), "1 / 3");
    site.close_lightbox();
    assert!(!site.is_lightbox_open());
}

#[wasm_bindgen_test]
async fn boot_reports_room_detail_failures() {
    render(&ROOM_DETAIL.replace(r#" data-price="120.00""#, ""));
    let site = boot(None).await.unwrap();
    assert!(!site.has_room_detail());
    assert_eq!(site.mount_errors().length(), 1);
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    render("");
    assert!(mount_chrome(Some("{oops".to_owned())).is_err());
}
