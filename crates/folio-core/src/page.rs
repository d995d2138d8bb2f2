//! Page engine
//!
//! Owns everything the page needs between events: the catalog, the tween
//! engine, the disclosure strategy and (narrow layout only) the nav drawer.
//! Event handlers call into [`Page`]; the frame loop calls [`Page::tick`].

use crate::catalog::{Catalog, ProjectId};
use crate::config::SiteConfig;
use crate::disclosure::{Disclosure, DisclosureContext, DisclosureStrategy};
use crate::error::{FolioError, Result};
use crate::geometry::PageLayout;
use crate::nav::{NavDestination, NavDrawer};
use crate::surface::Surface;
use crate::tween::{ChainEvent, TweenEngine};
use crate::viewport::ViewportMode;

/// Interactive state of the portfolio page
#[derive(Debug)]
pub struct Page {
    mode: ViewportMode,
    config: SiteConfig,
    catalog: Catalog,
    tweens: TweenEngine,
    disclosure: Disclosure,
    drawer: Option<NavDrawer>,
}

impl Page {
    /// Build every chain for `mode`
    ///
    /// The nav must already be mounted ([`mount_nav`](crate::nav::mount_nav))
    /// when `layout` is sampled, since injecting it moves the cards. Fails if
    /// the layout contains a card the catalog does not know.
    pub fn init(
        catalog: Catalog,
        config: SiteConfig,
        mode: ViewportMode,
        layout: &PageLayout,
        surface: &mut dyn Surface,
    ) -> Result<Self> {
        if let Some(card) = layout.cards.iter().find(|card| !catalog.contains(&card.id)) {
            return Err(FolioError::UnknownProject(card.id.clone()));
        }

        let mut tweens = TweenEngine::new();
        let disclosure = {
            let mut ctx = DisclosureContext {
                catalog: &catalog,
                driver: &mut tweens,
                surface,
            };
            Disclosure::build(mode, layout, &config, &mut ctx)?
        };
        let drawer = mode.is_narrow().then(|| NavDrawer::build(&config, &mut tweens));

        log::info!("[page] initialized {:?} layout with {} cards", mode, layout.cards.len());
        Ok(Self {
            mode,
            config,
            catalog,
            tweens,
            disclosure,
            drawer,
        })
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn disclosure(&self) -> &Disclosure {
        &self.disclosure
    }

    pub fn drawer(&self) -> Option<&NavDrawer> {
        self.drawer.as_ref()
    }

    pub fn tweens(&self) -> &TweenEngine {
        &self.tweens
    }

    /// Handle a click on a project card
    pub fn activate_card(&mut self, id: &ProjectId, surface: &mut dyn Surface) -> Result<()> {
        let mut ctx = DisclosureContext {
            catalog: &self.catalog,
            driver: &mut self.tweens,
            surface,
        };
        self.disclosure.activate(id, &mut ctx)
    }

    /// Handle a click on the title region (wide layout only)
    pub fn title_clicked(&mut self, surface: &mut dyn Surface) {
        if let Some(desktop) = self.disclosure.as_desktop_mut() {
            desktop.title_clicked(&mut self.tweens, surface);
        }
    }

    /// Handle the pointer entering or leaving the title region
    pub fn title_hover(&self, entered: bool, surface: &mut dyn Surface) {
        if let Some(desktop) = self.disclosure.as_desktop() {
            desktop.title_hover(entered, surface);
        }
    }

    /// Slide the nav drawer in (narrow layout only)
    pub fn open_drawer(&mut self, surface: &mut dyn Surface) {
        if let Some(drawer) = self.drawer.as_mut() {
            drawer.open(&mut self.tweens, surface);
        }
    }

    /// Slide the nav drawer out (narrow layout only)
    pub fn close_drawer(&mut self, surface: &mut dyn Surface) {
        if let Some(drawer) = self.drawer.as_mut() {
            drawer.close(&mut self.tweens, surface);
        }
    }

    /// Scroll to a section, closing the drawer first on the narrow layout
    pub fn navigate(&mut self, dest: NavDestination, surface: &mut dyn Surface) {
        self.close_drawer(surface);
        surface.scroll_to(dest.anchor());
    }

    /// Advance animations to `now_ms` and dispatch completions
    ///
    /// Returns whether any chain is still running. A completion handler that
    /// fails is logged; the remaining events of the frame are still dispatched.
    pub fn tick(&mut self, now_ms: f64, surface: &mut dyn Surface) -> bool {
        let events = self.tweens.tick(now_ms, surface);
        for event in events {
            if let ChainEvent::Completed { payload: Some(id), .. } = event {
                let mut ctx = DisclosureContext {
                    catalog: &self.catalog,
                    driver: &mut self.tweens,
                    surface: &mut *surface,
                };
                if let Err(err) = self.disclosure.chain_completed(&id, &mut ctx) {
                    log::error!("[page] completion of {} failed: {}", id, err);
                }
            }
        }
        self.tweens.is_animating()
    }

    /// Check if any chain is running
    pub fn is_animating(&self) -> bool {
        self.tweens.is_animating()
    }
}
