//! The document contract
//!
//! [`Surface`] is everything the controllers may do to the page. The browser
//! implementation lives in the web crate; tests use
//! [`RecordingSurface`](crate::testing::RecordingSurface).

use crate::catalog::ProjectId;
use crate::tween::{StyleProp, StyleValue};

/// Elements the page reads or writes
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// A project card (`.project[data-id=...]`)
    Card(ProjectId),
    /// A card's injected mobile detail block
    MobileInfo(ProjectId),
    /// The desktop title/detail region the cards fly to
    TitleRegion,
    /// Text label inside the title region
    TitleLabel,
    /// Wrapper around the description and links
    InfoWrapper,
    Description,
    GithubLink,
    InfoLink,
    WebLink,
    /// The hamburger control
    Hamburger,
    /// Bar holding the hamburger control, found as its parent
    HamburgerBar,
    /// Narrow-layout nav drawer
    NavDrawer,
    Body,
}

impl Target {
    /// CSS selector the lookup starts from
    ///
    /// For targets with [`Target::is_parent_lookup`] the element is the
    /// parent of the match.
    pub fn selector(&self) -> String {
        match self {
            Target::Card(id) => format!(".project[data-id=\"{id}\"]"),
            Target::MobileInfo(id) => format!("#info{id}"),
            Target::TitleRegion => "#projectTitle".to_string(),
            Target::TitleLabel => "#titleSpan".to_string(),
            Target::InfoWrapper => "#projectInfoWrapper".to_string(),
            Target::Description => "#descriptionP".to_string(),
            Target::GithubLink => "#githubLink".to_string(),
            Target::InfoLink => "#infoLink".to_string(),
            Target::WebLink => "#webLink".to_string(),
            Target::Hamburger | Target::HamburgerBar => "#hamburger".to_string(),
            Target::NavDrawer => ".nav-small".to_string(),
            Target::Body => "body".to_string(),
        }
    }

    /// Whether the element is the parent of the selector's match
    pub fn is_parent_lookup(&self) -> bool {
        matches!(self, Target::HamburgerBar)
    }
}

/// Where injected markup lands relative to its anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertPosition {
    /// Immediately before the anchor element
    BeforeBegin,
    /// Immediately after the anchor element
    AfterEnd,
}

impl InsertPosition {
    /// Name accepted by `insertAdjacentHTML`
    pub fn as_str(self) -> &'static str {
        match self {
            InsertPosition::BeforeBegin => "beforebegin",
            InsertPosition::AfterEnd => "afterend",
        }
    }
}

/// Operations the controllers perform on the document
pub trait Surface {
    /// Write an inline style
    fn set_style(&mut self, target: &Target, prop: StyleProp, value: &StyleValue);

    /// Replace an element's text content
    fn set_text(&mut self, target: &Target, text: &str);

    /// Set a link's `href`
    fn set_href(&mut self, target: &Target, href: &str);

    /// Height the element takes when sized to its content (px)
    fn natural_height(&self, target: &Target) -> f32;

    /// Inject markup next to an element
    fn insert_html(&mut self, anchor: &Target, position: InsertPosition, html: &str);

    /// Smooth-scroll to the element with the given id
    fn scroll_to(&mut self, anchor: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_selectors() {
        assert_eq!(Target::Card(ProjectId::from("ACNH")).selector(), ".project[data-id=\"ACNH\"]");
        assert_eq!(Target::MobileInfo(ProjectId::from("Kibble")).selector(), "#infoKibble");
        assert_eq!(Target::TitleRegion.selector(), "#projectTitle");
        assert_eq!(Target::NavDrawer.selector(), ".nav-small");
    }

    #[test]
    fn test_hamburger_bar_is_parent_of_hamburger() {
        assert_eq!(Target::HamburgerBar.selector(), Target::Hamburger.selector());
        assert!(Target::HamburgerBar.is_parent_lookup());
        assert!(!Target::Hamburger.is_parent_lookup());
        assert!(!Target::TitleRegion.is_parent_lookup());
    }

    #[test]
    fn test_insert_position_names() {
        assert_eq!(InsertPosition::BeforeBegin.as_str(), "beforebegin");
        assert_eq!(InsertPosition::AfterEnd.as_str(), "afterend");
    }
}
