//! Navigation
//!
//! The wide layout gets a static bar; the narrow layout gets a drawer that
//! slides in from the side and locks page scrolling while open.

use crate::config::SiteConfig;
use crate::markup::nav_markup;
use crate::surface::{InsertPosition, Surface, Target};
use crate::tween::{Chain, ChainId, Ease, StyleProp, StyleValue, TweenDriver};
use crate::viewport::ViewportMode;

/// Id of the drawer's close control
pub const CLOSE_NAV_ID: &str = "closeNav";

/// Page sections reachable from the nav
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavDestination {
    About,
    Services,
    Projects,
    Contact,
}

impl NavDestination {
    /// All destinations in nav order
    pub const ALL: [NavDestination; 4] = [
        NavDestination::About,
        NavDestination::Services,
        NavDestination::Projects,
        NavDestination::Contact,
    ];

    /// Id of the section element to scroll to
    pub fn anchor(self) -> &'static str {
        match self {
            NavDestination::About => "about",
            NavDestination::Services => "whatIDo",
            NavDestination::Projects => "projects",
            NavDestination::Contact => "contact",
        }
    }

    /// Id of the nav button
    pub fn button_id(self) -> &'static str {
        match self {
            NavDestination::About => "aboutBtn",
            NavDestination::Services => "servicesBtn",
            NavDestination::Projects => "projectsBtn",
            NavDestination::Contact => "contactBtn",
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            NavDestination::About => "About",
            NavDestination::Services => "Services",
            NavDestination::Projects => "Projects",
            NavDestination::Contact => "Contact",
        }
    }

    /// Look up a destination by its button id
    pub fn from_button_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dest| dest.button_id() == id)
    }
}

/// Inject the nav for `mode` next to the hamburger bar
pub fn mount_nav(mode: ViewportMode, surface: &mut dyn Surface) {
    let markup = nav_markup(mode);
    match mode {
        ViewportMode::Wide => {
            surface.set_style(&Target::HamburgerBar, StyleProp::Display, &StyleValue::Keyword("none"));
            surface.insert_html(&Target::HamburgerBar, InsertPosition::BeforeBegin, &markup);
        }
        ViewportMode::Narrow => {
            surface.set_style(&Target::HamburgerBar, StyleProp::Display, &StyleValue::Keyword("flex"));
            surface.insert_html(&Target::HamburgerBar, InsertPosition::AfterEnd, &markup);
        }
    }
}

/// Drawer visibility
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

/// The narrow-layout nav drawer
#[derive(Clone, Debug)]
pub struct NavDrawer {
    state: DrawerState,
    chain: ChainId,
}

impl NavDrawer {
    /// Register the slide chain; the drawer starts closed
    pub fn build(config: &SiteConfig, driver: &mut dyn TweenDriver) -> Self {
        let chain = Chain::new()
            .set(
                Target::NavDrawer,
                StyleProp::Display,
                StyleValue::Keyword("none"),
                StyleValue::Keyword("block"),
            )
            .tween(
                Target::NavDrawer,
                StyleProp::Width,
                StyleValue::percent(0.0),
                StyleValue::percent(config.drawer_width_percent),
                config.nav_duration_ms,
                Ease::Linear,
            );
        Self {
            state: DrawerState::Closed,
            chain: driver.create(chain),
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    /// Handle of the slide chain
    pub fn chain(&self) -> ChainId {
        self.chain
    }

    /// Lock scrolling and slide the drawer in
    pub fn open(&mut self, driver: &mut dyn TweenDriver, surface: &mut dyn Surface) {
        if self.is_open() {
            return;
        }
        self.state = DrawerState::Open;
        surface.set_style(&Target::Body, StyleProp::Overflow, &StyleValue::Keyword("hidden"));
        driver.play(self.chain);
        log::debug!("[nav] drawer open");
    }

    /// Unlock scrolling and slide the drawer out
    pub fn close(&mut self, driver: &mut dyn TweenDriver, surface: &mut dyn Surface) {
        if !self.is_open() {
            return;
        }
        self.state = DrawerState::Closed;
        surface.set_style(&Target::Body, StyleProp::Overflow, &StyleValue::Keyword("unset"));
        driver.reverse(self.chain);
        log::debug!("[nav] drawer closed");
    }
}
