//! Project disclosure
//!
//! Clicking a card discloses its project. The wide layout flies the card
//! into the title region and then expands a shared detail panel
//! ([`DesktopDisclosure`]); the narrow layout expands a detail block injected
//! under each card ([`MobileDisclosure`]). The variant is picked once at
//! startup and never changes.

mod desktop;
mod mobile;
mod panel;

pub use desktop::{CardState, DesktopDisclosure};
pub use mobile::{MobileCardState, MobileDisclosure, Treatment};
pub use panel::{DetailPanel, DisplayFields};

use crate::catalog::{Catalog, ProjectId};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::geometry::PageLayout;
use crate::surface::Surface;
use crate::tween::TweenDriver;
use crate::viewport::ViewportMode;

/// Whether a card's project is currently shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisclosureState {
    Open,
    #[default]
    Closed,
}

/// Collaborators a strategy works through
pub struct DisclosureContext<'a> {
    pub catalog: &'a Catalog,
    pub driver: &'a mut dyn TweenDriver,
    pub surface: &'a mut dyn Surface,
}

/// Behavior shared by the desktop and mobile paths
pub trait DisclosureStrategy {
    /// Handle a click on a card
    fn activate(&mut self, id: &ProjectId, ctx: &mut DisclosureContext<'_>) -> Result<()>;

    /// Handle the forward completion of the chain carrying `id`
    fn chain_completed(&mut self, id: &ProjectId, ctx: &mut DisclosureContext<'_>) -> Result<()>;

    /// Check if a card's project is shown
    fn is_open(&self, id: &ProjectId) -> bool;
}

/// The disclosure strategy selected for this page
#[derive(Debug)]
pub enum Disclosure {
    Desktop(DesktopDisclosure),
    Mobile(MobileDisclosure),
}

impl Disclosure {
    /// Build the strategy for `mode`, creating every chain it needs
    pub fn build(
        mode: ViewportMode,
        layout: &PageLayout,
        config: &SiteConfig,
        ctx: &mut DisclosureContext<'_>,
    ) -> Result<Self> {
        Ok(match mode {
            ViewportMode::Wide => Disclosure::Desktop(DesktopDisclosure::build(layout, config, &mut *ctx.driver)),
            ViewportMode::Narrow => Disclosure::Mobile(MobileDisclosure::build(layout, config, ctx)?),
        })
    }

    /// Desktop state, if this is the wide layout
    pub fn as_desktop(&self) -> Option<&DesktopDisclosure> {
        match self {
            Disclosure::Desktop(desktop) => Some(desktop),
            Disclosure::Mobile(_) => None,
        }
    }

    /// Mutable desktop state, if this is the wide layout
    pub fn as_desktop_mut(&mut self) -> Option<&mut DesktopDisclosure> {
        match self {
            Disclosure::Desktop(desktop) => Some(desktop),
            Disclosure::Mobile(_) => None,
        }
    }

    /// Mobile state, if this is the narrow layout
    pub fn as_mobile(&self) -> Option<&MobileDisclosure> {
        match self {
            Disclosure::Desktop(_) => None,
            Disclosure::Mobile(mobile) => Some(mobile),
        }
    }
}

impl DisclosureStrategy for Disclosure {
    fn activate(&mut self, id: &ProjectId, ctx: &mut DisclosureContext<'_>) -> Result<()> {
        match self {
            Disclosure::Desktop(desktop) => desktop.activate(id, ctx),
            Disclosure::Mobile(mobile) => mobile.activate(id, ctx),
        }
    }

    fn chain_completed(&mut self, id: &ProjectId, ctx: &mut DisclosureContext<'_>) -> Result<()> {
        match self {
            Disclosure::Desktop(desktop) => desktop.chain_completed(id, ctx),
            Disclosure::Mobile(mobile) => mobile.chain_completed(id, ctx),
        }
    }

    fn is_open(&self, id: &ProjectId) -> bool {
        match self {
            Disclosure::Desktop(desktop) => desktop.is_open(id),
            Disclosure::Mobile(mobile) => mobile.is_open(id),
        }
    }
}
