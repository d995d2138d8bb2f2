//! In-memory document surface

use std::collections::HashMap;

use crate::surface::{InsertPosition, Surface, Target};
use crate::tween::{StyleProp, StyleValue};

/// Surface that records the latest value written to each element
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    styles: HashMap<(Target, StyleProp), StyleValue>,
    texts: HashMap<Target, String>,
    hrefs: HashMap<Target, String>,
    natural_heights: HashMap<Target, f32>,
    inserted: Vec<(Target, InsertPosition, String)>,
    scrolls: Vec<String>,
}

impl RecordingSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `height` as the content height of `target`
    pub fn with_natural_height(mut self, target: Target, height: f32) -> Self {
        self.natural_heights.insert(target, height);
        self
    }

    /// Last style written for a property
    pub fn style(&self, target: &Target, prop: StyleProp) -> Option<&StyleValue> {
        self.styles.get(&(target.clone(), prop))
    }

    /// Current text content (empty if never written)
    pub fn text(&self, target: &Target) -> &str {
        self.texts.get(target).map(String::as_str).unwrap_or("")
    }

    /// Current href (empty if never written)
    pub fn href(&self, target: &Target) -> &str {
        self.hrefs.get(target).map(String::as_str).unwrap_or("")
    }

    /// Markup injected so far, in order
    pub fn inserted(&self) -> &[(Target, InsertPosition, String)] {
        &self.inserted
    }

    /// Anchors scrolled to, in order
    pub fn scrolls(&self) -> &[String] {
        &self.scrolls
    }
}

impl Surface for RecordingSurface {
    fn set_style(&mut self, target: &Target, prop: StyleProp, value: &StyleValue) {
        self.styles.insert((target.clone(), prop), value.clone());
    }

    fn set_text(&mut self, target: &Target, text: &str) {
        self.texts.insert(target.clone(), text.to_string());
    }

    fn set_href(&mut self, target: &Target, href: &str) {
        self.hrefs.insert(target.clone(), href.to_string());
    }

    fn natural_height(&self, target: &Target) -> f32 {
        self.natural_heights.get(target).copied().unwrap_or(0.0)
    }

    fn insert_html(&mut self, anchor: &Target, position: InsertPosition, html: &str) {
        self.inserted.push((anchor.clone(), position, html.to_string()));
    }

    fn scroll_to(&mut self, anchor: &str) {
        self.scrolls.push(anchor.to_string());
    }
}
