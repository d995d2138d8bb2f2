//! Layout sampling and hobby block sizing

use folio_core::geometry::half_height;
use folio_core::tween::{StyleProp, StyleValue};
use folio_core::{CardLayout, FolioError, PageLayout, Rect, Result, ViewportMode};
use web_sys::{Document, Element};

use crate::dom::inline_style;

fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.x() as f32, r.y() as f32, r.width() as f32, r.height() as f32)
}

fn require_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FolioError::MissingElement(format!("#{id}")))
}

fn elements_by_class(document: &Document, class: &str) -> Vec<Element> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length()).filter_map(|i| collection.item(i)).collect()
}

/// Snapshot the geometry the disclosure chains are built from
///
/// The title region is only the cards' destination in the wide layout, so
/// it is required there and ignored otherwise.
pub(crate) fn sample(document: &Document, mode: ViewportMode) -> Result<PageLayout> {
    let mut cards = Vec::new();
    for (index, element) in elements_by_class(document, "project").iter().enumerate() {
        let id = element
            .get_attribute("data-id")
            .ok_or_else(|| FolioError::MissingElement(format!(".project[{index}] data-id")))?;
        let parent_width = element
            .parent_element()
            .map(|parent| parent.client_width() as f32)
            .unwrap_or(0.0);
        cards.push(CardLayout::new(id, rect_of(element), parent_width));
    }

    let title_region = match mode {
        ViewportMode::Wide => rect_of(&require_id(document, "projectTitle")?),
        ViewportMode::Narrow => Rect::ZERO,
    };
    let body_width = document
        .body()
        .map(|body| body.get_bounding_client_rect().width() as f32)
        .unwrap_or(0.0);

    Ok(PageLayout {
        cards,
        title_region,
        body_width,
    })
}

fn set_half_height(element: &Element, container_height: i32) {
    let Some(style) = inline_style(element) else {
        return;
    };
    let value = StyleValue::px(half_height(container_height as f32)).to_css();
    for prop in [StyleProp::MinHeight, StyleProp::MaxHeight] {
        if let Err(err) = style.set_property(prop.css_name(), &value) {
            log::warn!("[layout] failed to size hobby block: {:?}", err);
        }
    }
}

/// Size the hobby block to half its container, and each icon to half the block
pub(crate) fn size_hobbies(document: &Document) -> Result<()> {
    let wrapper = require_id(document, "hobbiesWrapper")?;
    let container = elements_by_class(document, "hobbies-container")
        .into_iter()
        .next()
        .ok_or_else(|| FolioError::MissingElement(".hobbies-container".to_string()))?;

    set_half_height(&wrapper, container.client_height());
    let wrapper_height = wrapper.client_height();
    for icon in elements_by_class(document, "hobby-svg") {
        set_half_height(&icon, wrapper_height);
    }
    Ok(())
}
