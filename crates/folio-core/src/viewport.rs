//! Viewport mode selection

/// Layout mode, chosen once at load and never re-evaluated
///
/// - **Wide**: static horizontal nav, cards fly into a shared detail panel
/// - **Narrow**: drawer nav, each card expands its own inline detail block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    /// Desktop layout
    Wide,
    /// Mobile layout
    Narrow,
}

impl ViewportMode {
    /// Map the narrow-layout media query result to a mode
    #[inline]
    pub fn from_narrow_match(matches: bool) -> Self {
        if matches {
            ViewportMode::Narrow
        } else {
            ViewportMode::Wide
        }
    }

    /// Check if this is the mobile layout
    #[inline]
    pub fn is_narrow(&self) -> bool {
        matches!(self, ViewportMode::Narrow)
    }
}
