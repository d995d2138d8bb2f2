//! Browser document surface

use folio_core::tween::{StyleProp, StyleValue};
use folio_core::{InsertPosition, Surface, Target};
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, SvgElement,
};

/// Inline style of an HTML or SVG element
pub(crate) fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(SvgElement::style)
}

/// [`Surface`] backed by the live document
///
/// Elements are looked up by selector on every call. A missing element is
/// logged and the write dropped, so one absent node cannot stop the page.
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, target: &Target) -> Option<Element> {
        let selector = target.selector();
        match self.document.query_selector(&selector) {
            Ok(Some(element)) if target.is_parent_lookup() => {
                let parent = element.parent_element();
                if parent.is_none() {
                    log::warn!("[dom] no parent for {}", selector);
                }
                parent
            }
            Ok(Some(element)) => Some(element),
            Ok(None) => {
                log::warn!("[dom] no element for {}", selector);
                None
            }
            Err(err) => {
                log::warn!("[dom] bad selector {}: {:?}", selector, err);
                None
            }
        }
    }
}

impl Surface for DomSurface {
    fn set_style(&mut self, target: &Target, prop: StyleProp, value: &StyleValue) {
        let Some(element) = self.element(target) else {
            return;
        };
        let Some(style) = inline_style(&element) else {
            return;
        };
        if let Err(err) = style.set_property(prop.css_name(), &value.to_css()) {
            log::warn!("[dom] failed to set {}: {:?}", prop.css_name(), err);
        }
    }

    fn set_text(&mut self, target: &Target, text: &str) {
        if let Some(element) = self.element(target) {
            element.set_text_content(Some(text));
        }
    }

    fn set_href(&mut self, target: &Target, href: &str) {
        if let Some(element) = self.element(target) {
            if let Err(err) = element.set_attribute("href", href) {
                log::warn!("[dom] failed to set href: {:?}", err);
            }
        }
    }

    fn natural_height(&self, target: &Target) -> f32 {
        self.element(target)
            .map(|element| element.scroll_height() as f32)
            .unwrap_or(0.0)
    }

    fn insert_html(&mut self, anchor: &Target, position: InsertPosition, html: &str) {
        if let Some(element) = self.element(anchor) {
            if let Err(err) = element.insert_adjacent_html(position.as_str(), html) {
                log::warn!("[dom] failed to insert markup: {:?}", err);
            }
        }
    }

    fn scroll_to(&mut self, anchor: &str) {
        let Some(element) = self.document.get_element_by_id(anchor) else {
            log::warn!("[dom] no section #{}", anchor);
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
