//! Style properties and values written by chains

use crate::math::Vec2;

/// Inline style properties the page animates or toggles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Transform,
    Visibility,
    Display,
    Width,
    Height,
    MinHeight,
    MaxHeight,
    BorderRadius,
    Color,
    BackgroundColor,
    BoxShadow,
    Overflow,
}

impl StyleProp {
    /// CSS property name
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProp::Transform => "transform",
            StyleProp::Visibility => "visibility",
            StyleProp::Display => "display",
            StyleProp::Width => "width",
            StyleProp::Height => "height",
            StyleProp::MinHeight => "min-height",
            StyleProp::MaxHeight => "max-height",
            StyleProp::BorderRadius => "border-radius",
            StyleProp::Color => "color",
            StyleProp::BackgroundColor => "background-color",
            StyleProp::BoxShadow => "box-shadow",
            StyleProp::Overflow => "overflow",
        }
    }
}

/// A CSS length
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
    Em(f32),
    /// Content-sized; resolved to pixels while a tween runs
    Auto,
}

/// A value for a [`StyleProp`]
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Length(Length),
    /// `translate(x, y)` in pixels
    Translate(Vec2),
    /// Any other literal (`hidden`, `block`, colors, shadows)
    Keyword(&'static str),
}

impl StyleValue {
    /// Pixel length
    pub const fn px(v: f32) -> Self {
        StyleValue::Length(Length::Px(v))
    }

    /// Percentage length
    pub const fn percent(v: f32) -> Self {
        StyleValue::Length(Length::Percent(v))
    }

    /// Em length
    pub const fn em(v: f32) -> Self {
        StyleValue::Length(Length::Em(v))
    }

    /// Content-sized length
    pub const AUTO: StyleValue = StyleValue::Length(Length::Auto);

    /// Check if this value must be measured before it can be interpolated
    pub fn is_auto(&self) -> bool {
        matches!(self, StyleValue::Length(Length::Auto))
    }

    /// Serialize to a CSS value string
    pub fn to_css(&self) -> String {
        match self {
            StyleValue::Length(Length::Px(v)) => format!("{v}px"),
            StyleValue::Length(Length::Percent(v)) => format!("{v}%"),
            StyleValue::Length(Length::Em(v)) => format!("{v}em"),
            StyleValue::Length(Length::Auto) => "auto".to_string(),
            StyleValue::Translate(v) => format!("translate({}px, {}px)", v.x, v.y),
            StyleValue::Keyword(k) => (*k).to_string(),
        }
    }

    /// Interpolate between two values of the same kind
    ///
    /// Returns `None` when the values cannot be blended (different units or
    /// keywords); callers then switch discretely.
    pub fn lerp(from: &StyleValue, to: &StyleValue, t: f32) -> Option<StyleValue> {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        match (from, to) {
            (StyleValue::Length(Length::Px(a)), StyleValue::Length(Length::Px(b))) => Some(StyleValue::px(mix(*a, *b))),
            (StyleValue::Length(Length::Percent(a)), StyleValue::Length(Length::Percent(b))) => {
                Some(StyleValue::percent(mix(*a, *b)))
            }
            (StyleValue::Length(Length::Em(a)), StyleValue::Length(Length::Em(b))) => Some(StyleValue::em(mix(*a, *b))),
            (StyleValue::Translate(a), StyleValue::Translate(b)) => Some(StyleValue::Translate(Vec2::lerp(*a, *b, t))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_value_css() {
        assert_eq!(StyleValue::px(12.5).to_css(), "12.5px");
        assert_eq!(StyleValue::percent(50.0).to_css(), "50%");
        assert_eq!(StyleValue::em(1.0).to_css(), "1em");
        assert_eq!(StyleValue::AUTO.to_css(), "auto");
        assert_eq!(StyleValue::Translate(Vec2::new(10.0, -4.0)).to_css(), "translate(10px, -4px)");
        assert_eq!(StyleValue::Keyword("hidden").to_css(), "hidden");
    }

    #[test]
    fn test_style_value_lerp() {
        let mid = StyleValue::lerp(&StyleValue::percent(0.0), &StyleValue::percent(50.0), 0.5).unwrap();
        assert_eq!(mid, StyleValue::percent(25.0));

        let moved = StyleValue::lerp(
            &StyleValue::Translate(Vec2::ZERO),
            &StyleValue::Translate(Vec2::new(100.0, -200.0)),
            0.25,
        )
        .unwrap();
        assert_eq!(moved, StyleValue::Translate(Vec2::new(25.0, -50.0)));
    }

    #[test]
    fn test_style_value_lerp_mismatch() {
        assert!(StyleValue::lerp(&StyleValue::px(0.0), &StyleValue::percent(10.0), 0.5).is_none());
        assert!(StyleValue::lerp(&StyleValue::Keyword("none"), &StyleValue::Keyword("block"), 0.5).is_none());
    }

    #[test]
    fn test_style_prop_names() {
        assert_eq!(StyleProp::BorderRadius.css_name(), "border-radius");
        assert_eq!(StyleProp::BackgroundColor.css_name(), "background-color");
    }
}
