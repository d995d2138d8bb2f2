//! Layout snapshots and the offsets derived from them
//!
//! The browser layout engine is sampled once at load into a [`PageLayout`];
//! everything here is pure arithmetic over that snapshot.

use crate::catalog::ProjectId;
use crate::math::{Rect, Vec2};

/// A card's sampled geometry
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    /// Project id from the card's `data-id`
    pub id: ProjectId,
    /// Bounding client rect of the card
    pub rect: Rect,
    /// Client width of the card's parent container
    pub parent_width: f32,
}

impl CardLayout {
    /// Create a card layout
    pub fn new(id: impl Into<ProjectId>, rect: Rect, parent_width: f32) -> Self {
        Self {
            id: id.into(),
            rect,
            parent_width,
        }
    }
}

/// Geometry sampled from the document at load
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    /// Cards in document order
    pub cards: Vec<CardLayout>,
    /// Bounding rect of the title/detail region (the cards' destination)
    pub title_region: Rect,
    /// Width of the document body
    pub body_width: f32,
}

/// Displacement that moves a card onto the title region
///
/// The x component centers the card horizontally within its parent; the y
/// component lifts its top edge to the destination's top edge.
pub fn card_offset(card: Rect, parent_width: f32, destination_top: f32) -> Vec2 {
    let x = parent_width / 2.0 - card.center().x;
    let y = destination_top - card.top();
    Vec2::new(x, y)
}

/// Round to two decimal places
///
/// Scales through the decimal representation rather than multiplying by 100,
/// so values such as `1.005` round up to `1.01`.
pub fn round_to_two(num: f64) -> f64 {
    if !num.is_finite() {
        return num;
    }
    format!("{num}e2")
        .parse::<f64>()
        .map(|scaled| (scaled + 0.5).floor() / 100.0)
        .unwrap_or(num)
}

/// Width of the collapsed title region as a percentage of the body
pub fn panel_rest_width_percent(title_width: f32, body_width: f32) -> f32 {
    if body_width <= 0.0 {
        return 100.0;
    }
    (round_to_two(f64::from(title_width) / f64::from(body_width)) * 100.0) as f32
}

/// Half of a container height, used to size the hobby block and its icons
#[inline]
pub fn half_height(container_height: f32) -> f32 {
    container_height / 2.0
}
