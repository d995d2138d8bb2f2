//! Browser tests for the DOM surface
//!
//! Run with `wasm-pack test --headless --firefox crates/folio-web`.

#![cfg(target_arch = "wasm32")]

use folio_core::markup::MobileDetailFragment;
use folio_core::nav::{mount_nav, CLOSE_NAV_ID};
use folio_core::tween::{StyleProp, StyleValue};
use folio_core::{InsertPosition, ProjectId, ProjectLinks, ProjectRecord, Surface, Target, ViewportMode};
use folio_web::DomSurface;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_card(document: &Document, id: &str) {
    let html = format!(r#"<div class="project" data-id="{id}">{id}</div>"#);
    document.body().unwrap().insert_adjacent_html("beforeend", &html).unwrap();
}

fn inline(document: &Document, target: &Target, prop: StyleProp) -> String {
    let element = document.query_selector(&target.selector()).unwrap().unwrap();
    let html = element.dyn_into::<HtmlElement>().unwrap();
    html.style().get_property_value(prop.css_name()).unwrap()
}

#[wasm_bindgen_test]
fn test_set_style_on_card() {
    let document = document();
    add_card(&document, "WebA");
    let mut surface = DomSurface::new(document.clone());
    let card = Target::Card(ProjectId::from("WebA"));

    surface.set_style(&card, StyleProp::Visibility, &StyleValue::Keyword("hidden"));
    surface.set_style(&card, StyleProp::Width, &StyleValue::percent(35.0));

    assert_eq!(inline(&document, &card, StyleProp::Visibility), "hidden");
    assert_eq!(inline(&document, &card, StyleProp::Width), "35%");
}

#[wasm_bindgen_test]
fn test_insert_mobile_fragment() {
    let document = document();
    add_card(&document, "WebB");
    let mut surface = DomSurface::new(document.clone());
    let record = ProjectRecord {
        title: "Proj B".to_string(),
        description: "Short".to_string(),
        links: ProjectLinks::default(),
    };
    let fragment = MobileDetailFragment::new(&ProjectId::from("WebB"), &record, 200);

    surface.insert_html(
        &Target::Card(ProjectId::from("WebB")),
        InsertPosition::AfterEnd,
        &fragment.render(),
    );

    let info = Target::MobileInfo(ProjectId::from("WebB"));
    assert_eq!(inline(&document, &info, StyleProp::Display), "none");
    assert_eq!(inline(&document, &info, StyleProp::Height), "0px");
}

#[wasm_bindgen_test]
fn test_missing_element_is_ignored() {
    let mut surface = DomSurface::new(document());
    let missing = Target::Card(ProjectId::from("Nowhere"));

    surface.set_style(&missing, StyleProp::Display, &StyleValue::Keyword("none"));
    surface.set_text(&missing, "text");
    assert!((surface.natural_height(&missing) - 0.0).abs() < 0.001);
}

#[wasm_bindgen_test]
fn test_mount_nav_beside_hamburger_bar() {
    let document = document();
    document
        .body()
        .unwrap()
        .insert_adjacent_html(
            "beforeend",
            r#"<header id="hamburgerBar" style="display: none;"><span id="hamburger">=</span></header>"#,
        )
        .unwrap();
    let mut surface = DomSurface::new(document.clone());

    mount_nav(ViewportMode::Narrow, &mut surface);

    let bar = document.get_element_by_id("hamburgerBar").unwrap();
    let style = bar.dyn_into::<HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("display").unwrap(), "flex");

    let bar = document.get_element_by_id("hamburgerBar").unwrap();
    let drawer = bar.next_element_sibling().unwrap();
    assert!(drawer.class_list().contains("nav-small"));
    assert!(document.get_element_by_id(CLOSE_NAV_ID).is_some());
    assert!(document.get_element_by_id("aboutBtn").is_some());
}
