#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};
use yew::prelude::*;
use yew::AppHandle;
use yew_router::prelude::*;

use webdevmastery::components::accordion::AccordionItem;
use webdevmastery::pages::landing::LandingPage;
use webdevmastery::scroll::ScrollSubscription;

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Harness)]
fn harness() -> Html {
    html! {
        <BrowserRouter>
            <LandingPage />
        </BrowserRouter>
    }
}

async fn settle() {
    TimeoutFuture::new(50).await;
}

async fn mount<C>() -> (AppHandle<C>, Element)
where
    C: BaseComponent,
    C::Properties: Default,
{
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    let handle = yew::Renderer::<C>::with_root(root.clone()).render();
    settle().await;
    (handle, root)
}

async fn mount_landing() -> (AppHandle<Harness>, Element) {
    mount::<Harness>().await
}

fn elements(root: &Element, selector: &str) -> Vec<Element> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn texts(root: &Element, selector: &str) -> Vec<String> {
    elements(root, selector)
        .iter()
        .map(|el| el.text_content().unwrap_or_default())
        .collect()
}

fn open_items(root: &Element) -> Vec<String> {
    elements(root, ".accordion-item.open")
        .iter()
        .map(|el| el.id())
        .collect()
}

async fn click(root: &Element, selector: &str, index: usize) {
    let target = elements(root, selector)
        .remove(index)
        .dyn_into::<HtmlElement>()
        .unwrap();
    target.click();
    settle().await;
}

async fn scroll_to(offset: f64) {
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, offset);
    dispatch_scroll();
    settle().await;
}

fn dispatch_scroll() {
    let window = web_sys::window().unwrap();
    window
        .dispatch_event(&Event::new("scroll").unwrap())
        .unwrap();
}

#[wasm_bindgen_test]
async fn feature_grid_renders_in_declaration_order() {
    let (handle, root) = mount_landing().await;

    assert_eq!(
        texts(&root, ".feature-card .card-title"),
        [
            "HTML5 & CSS3",
            "JavaScript & ES6+",
            "React & Next.js",
            "Node.js & Express",
            "Database & ORM",
            "Deployment & DevOps",
        ]
    );

    handle.destroy();
}

#[wasm_bindgen_test]
async fn testimonials_render_in_order() {
    let (handle, root) = mount_landing().await;

    assert_eq!(
        texts(&root, ".testimonial-name"),
        ["- Sarah L.", "- Michael R."]
    );

    handle.destroy();
}

#[wasm_bindgen_test]
async fn pricing_card_shows_fixed_price_and_five_bullets() {
    let (handle, root) = mount_landing().await;

    assert_eq!(texts(&root, ".pricing-price"), ["$1,999"]);
    assert_eq!(elements(&root, ".pricing-bullets li").len(), 5);

    handle.destroy();
}

#[wasm_bindgen_test]
async fn faq_accordion_keeps_at_most_one_item_open() {
    let (handle, root) = mount_landing().await;

    assert_eq!(elements(&root, ".accordion-item").len(), 4);
    assert!(open_items(&root).is_empty());

    click(&root, ".accordion-trigger", 0).await;
    assert_eq!(open_items(&root), ["item-0"]);

    click(&root, ".accordion-trigger", 2).await;
    assert_eq!(open_items(&root), ["item-2"]);

    // Clicking the open item collapses it.
    click(&root, ".accordion-trigger", 2).await;
    assert!(open_items(&root).is_empty());

    handle.destroy();
}

#[wasm_bindgen_test]
async fn nav_starts_transparent() {
    let (handle, root) = mount_landing().await;

    assert_eq!(elements(&root, ".site-nav--transparent").len(), 1);
    assert!(elements(&root, ".site-nav--translucent").is_empty());

    handle.destroy();
}

#[wasm_bindgen_test]
async fn mobile_menu_toggles_sheet() {
    let (handle, root) = mount_landing().await;

    assert!(elements(&root, ".sheet").is_empty());
    click(&root, ".burger-menu", 0).await;
    assert_eq!(elements(&root, ".sheet .nav-link").len(), 4);

    click(&root, ".sheet .nav-link", 0).await;
    assert!(elements(&root, ".sheet").is_empty());

    handle.destroy();
}

#[wasm_bindgen_test]
async fn nav_switches_variant_across_scroll_threshold() {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    body.style().set_property("min-height", "5000px").unwrap();
    let (handle, root) = mount_landing().await;

    scroll_to(21.0).await;
    assert_eq!(elements(&root, ".site-nav--translucent").len(), 1);
    assert!(elements(&root, ".site-nav--transparent").is_empty());

    scroll_to(20.0).await;
    assert_eq!(elements(&root, ".site-nav--transparent").len(), 1);
    assert!(elements(&root, ".site-nav--translucent").is_empty());

    scroll_to(0.0).await;
    handle.destroy();
    body.style().remove_property("min-height").unwrap();
}

#[wasm_bindgen_test]
async fn burger_menu_only_shows_on_narrow_viewports() {
    let (handle, root) = mount_landing().await;
    let window = web_sys::window().unwrap();

    let burger = elements(&root, ".burger-menu").remove(0);
    let display = window
        .get_computed_style(&burger)
        .unwrap()
        .unwrap()
        .get_property_value("display")
        .unwrap();
    let wide = window.inner_width().unwrap().as_f64().unwrap() > 768.0;
    assert_eq!(display, if wide { "none" } else { "inline-flex" });

    handle.destroy();
}

#[function_component(LoneAccordionItem)]
fn lone_accordion_item() -> Html {
    html! {
        <AccordionItem value="item-0" trigger="Where is my accordion?">
            <p>{"Nowhere."}</p>
        </AccordionItem>
    }
}

#[wasm_bindgen_test]
async fn accordion_item_without_accordion_renders_nothing() {
    let (handle, root) = mount::<LoneAccordionItem>().await;

    assert!(elements(&root, ".accordion-item").is_empty());

    handle.destroy();
}

#[wasm_bindgen_test]
fn dropping_subscription_stops_delivery() {
    let window = web_sys::window().unwrap();
    let calls = Rc::new(Cell::new(0u32));

    let subscription = {
        let calls = calls.clone();
        ScrollSubscription::new(&window, move |_| calls.set(calls.get() + 1)).unwrap()
    };

    dispatch_scroll();
    assert_eq!(calls.get(), 1);

    drop(subscription);
    dispatch_scroll();
    assert_eq!(calls.get(), 1);
}
