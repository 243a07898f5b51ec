#![cfg(target_arch = "wasm32")]

use campaign_frontend::pages::landing::Landing;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::js_sys::{Function, Reflect};
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

async fn mount() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    yew::Renderer::<Landing>::with_root(root.clone()).render();
    settle().await;
    root
}

async fn settle() {
    TimeoutFuture::new(50).await;
}

/// Polls `check` until it holds or about two seconds pass.
async fn wait_for(mut check: impl FnMut() -> bool) -> bool {
    for _ in 0..40 {
        if check() {
            return true;
        }
        settle().await;
    }
    check()
}

/// Replaces `window.alert` with a counter so submissions do not block.
fn stub_alert() {
    let window = web_sys::window().unwrap();
    let counter = Function::new_with_args("message", "window.alertCount = (window.alertCount || 0) + 1;");
    Reflect::set(&window, &JsValue::from_str("alertCount"), &JsValue::from_f64(0.0)).unwrap();
    Reflect::set(&window, &JsValue::from_str("alert"), &counter).unwrap();
}

fn alert_count() -> f64 {
    let window = web_sys::window().unwrap();
    Reflect::get(&window, &JsValue::from_str("alertCount")).unwrap().as_f64().unwrap_or(0.0)
}

async fn scroll_window_to(y: f64) {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, y);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    settle().await;
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

fn find<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {selector}"))
        .dyn_into::<T>()
        .unwrap()
}

fn bubbling(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

async fn type_into(root: &Element, selector: &str, value: &str) {
    let field: HtmlElement = find(root, selector);
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
    field.dispatch_event(&bubbling("input")).unwrap();
    settle().await;
}

fn value_of(root: &Element, selector: &str) -> String {
    let field: HtmlElement = find(root, selector);
    match field.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.value(),
        None => field.unchecked_into::<HtmlTextAreaElement>().value(),
    }
}

#[wasm_bindgen_test]
async fn renders_fixed_card_counts() {
    let root = mount().await;
    assert_eq!(count(&root, ".vision-card"), 9);
    assert_eq!(count(&root, ".achievement-card"), 3);
    assert_eq!(count(&root, ".testimonial-card"), 2);
}

#[wasm_bindgen_test]
async fn every_nav_anchor_has_a_section() {
    let root = mount().await;
    for id in ["about", "vision", "video", "achievements", "testimonials", "contact"] {
        assert!(root.query_selector(&format!("section#{id}")).unwrap().is_some(), "no #{id}");
        assert!(root.query_selector(&format!(".nav-links a[href='#{id}']")).unwrap().is_some());
        assert!(root.query_selector(&format!(".quick-links a[href='#{id}']")).unwrap().is_some());
    }
}

#[wasm_bindgen_test]
async fn nav_starts_unscrolled_at_top() {
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    let root = mount().await;
    let nav: Element = find(&root, "nav.top-nav");
    assert!(!nav.class_list().contains("scrolled"));
    let bar: Element = find(&root, ".scroll-progress");
    assert!(bar.get_attribute("style").unwrap().contains("scaleX("));
}

#[wasm_bindgen_test]
async fn nav_switches_style_only_past_fifty_pixels() {
    let root = mount().await;
    let nav: Element = find(&root, "nav.top-nav");

    scroll_window_to(50.0).await;
    assert_eq!(web_sys::window().unwrap().scroll_y().unwrap(), 50.0);
    assert!(!nav.class_list().contains("scrolled"));

    scroll_window_to(120.0).await;
    assert!(nav.class_list().contains("scrolled"));

    scroll_window_to(0.0).await;
    assert!(!nav.class_list().contains("scrolled"));
}

#[wasm_bindgen_test]
async fn reveal_plays_once_and_stays() {
    scroll_window_to(0.0).await;
    let root = mount().await;
    // the newest page is appended last, so its contact section is below the fold
    let section: Element = find(&root, "#contact .reveal");
    assert!(!section.class_list().contains("revealed"));

    section.scroll_into_view();
    assert!(wait_for(|| section.class_list().contains("revealed")).await);

    scroll_window_to(0.0).await;
    settle().await;
    assert!(section.class_list().contains("revealed"));
}

#[wasm_bindgen_test]
async fn video_frame_allows_fullscreen() {
    let root = mount().await;
    let frame: Element = find(&root, "#video iframe");
    assert!(frame.has_attribute("allowfullscreen"));
}

#[wasm_bindgen_test]
async fn nav_link_closes_mobile_menu() {
    let root = mount().await;
    assert_eq!(count(&root, ".mobile-menu"), 0);

    find::<HtmlElement>(&root, ".burger-menu").click();
    settle().await;
    assert_eq!(count(&root, ".mobile-menu"), 1);

    find::<HtmlElement>(&root, ".mobile-menu a[href='#vision']").click();
    settle().await;
    assert_eq!(count(&root, ".mobile-menu"), 0);
}

#[wasm_bindgen_test]
async fn footer_quick_link_closes_mobile_menu() {
    let root = mount().await;
    find::<HtmlElement>(&root, ".burger-menu").click();
    settle().await;
    assert_eq!(count(&root, ".mobile-menu"), 1);

    find::<HtmlElement>(&root, ".quick-links a[href='#contact']").click();
    settle().await;
    assert_eq!(count(&root, ".mobile-menu"), 0);
}

#[wasm_bindgen_test]
async fn typing_updates_only_that_field() {
    let root = mount().await;
    type_into(&root, "#name", "Sita").await;
    assert_eq!(value_of(&root, "#name"), "Sita");
    assert_eq!(value_of(&root, "#email"), "");
    assert_eq!(value_of(&root, "#message"), "");

    type_into(&root, "#message", "More books please").await;
    assert_eq!(value_of(&root, "#name"), "Sita");
    assert_eq!(value_of(&root, "#email"), "");
    assert_eq!(value_of(&root, "#message"), "More books please");
}

#[wasm_bindgen_test]
async fn incomplete_submission_keeps_the_draft() {
    let root = mount().await;
    type_into(&root, "#name", "Sita").await;
    type_into(&root, "#message", "Hello").await;

    stub_alert();
    let submit = bubbling("submit");
    find::<Element>(&root, "form.contact-form").dispatch_event(&submit).unwrap();
    settle().await;

    assert!(submit.default_prevented());
    assert_eq!(value_of(&root, "#name"), "Sita");
    assert_eq!(value_of(&root, "#message"), "Hello");
    assert_eq!(alert_count(), 0.0);
}

#[wasm_bindgen_test]
async fn complete_submission_clears_and_acknowledges_once() {
    let root = mount().await;
    type_into(&root, "#name", "Sita").await;
    type_into(&root, "#email", "sita@example.com").await;
    type_into(&root, "#message", "More books please").await;

    stub_alert();
    let submit = bubbling("submit");
    find::<Element>(&root, "form.contact-form").dispatch_event(&submit).unwrap();
    settle().await;

    assert!(submit.default_prevented());
    assert_eq!(value_of(&root, "#name"), "");
    assert_eq!(value_of(&root, "#email"), "");
    assert_eq!(value_of(&root, "#message"), "");
    assert_eq!(alert_count(), 1.0);
}
