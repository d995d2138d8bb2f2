//! Desktop disclosure: cards fly to the title region

use std::collections::HashMap;

use crate::catalog::ProjectId;
use crate::config::SiteConfig;
use crate::error::{FolioError, Result};
use crate::geometry::{card_offset, panel_rest_width_percent, CardLayout, PageLayout};
use crate::math::Vec2;
use crate::surface::{Surface, Target};
use crate::tween::{Chain, ChainId, Ease, StyleProp, StyleValue, TweenDriver};

use super::{DetailPanel, DisclosureContext, DisclosureState, DisclosureStrategy};

/// Label shown on the title region while a card is open
pub const CLOSE_LABEL: &str = "Close";

/// Per-card disclosure state
#[derive(Clone, Debug)]
pub struct CardState {
    pub id: ProjectId,
    pub disclosure: DisclosureState,
    /// Flight chain, built once at load
    pub chain: ChainId,
}

/// Wide-layout controller
///
/// At most one card is open. Opening a card while another is open closes the
/// other first; the panel is revealed only when the new card's flight
/// completes.
#[derive(Debug)]
pub struct DesktopDisclosure {
    /// Card ids in document order
    order: Vec<ProjectId>,
    cards: HashMap<ProjectId, CardState>,
    panel: DetailPanel,
}

impl DesktopDisclosure {
    /// Build every card's flight chain plus the panel chain
    pub fn build(layout: &PageLayout, config: &SiteConfig, driver: &mut dyn TweenDriver) -> Self {
        let destination_top = layout.title_region.top();
        let mut order = Vec::with_capacity(layout.cards.len());
        let mut cards = HashMap::with_capacity(layout.cards.len());

        for card in &layout.cards {
            let chain = driver.create(flight_chain(card, destination_top, config));
            order.push(card.id.clone());
            cards.insert(
                card.id.clone(),
                CardState {
                    id: card.id.clone(),
                    disclosure: DisclosureState::Closed,
                    chain,
                },
            );
        }

        let rest_width = panel_rest_width_percent(layout.title_region.width, layout.body_width);
        let panel = DetailPanel::build(rest_width, config, driver);
        log::debug!("[disclosure] desktop ready with {} cards", order.len());

        Self { order, cards, panel }
    }

    /// The open card, if any
    pub fn open_card(&self) -> Option<&ProjectId> {
        self.order
            .iter()
            .find(|id| self.state_of(id) == Some(DisclosureState::Open))
    }

    /// Disclosure state of a card
    pub fn state_of(&self, id: &ProjectId) -> Option<DisclosureState> {
        self.cards.get(id).map(|card| card.disclosure)
    }

    /// Card state by id
    pub fn card(&self, id: &ProjectId) -> Option<&CardState> {
        self.cards.get(id)
    }

    /// Cards in document order
    pub fn cards(&self) -> impl Iterator<Item = &CardState> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    pub fn panel(&self) -> &DetailPanel {
        &self.panel
    }

    /// Close the open card, if any, and put the panel back at rest
    ///
    /// The card's flight is reversed, not awaited.
    pub fn close_open_card(&mut self, driver: &mut dyn TweenDriver, surface: &mut dyn Surface) {
        let Some(id) = self.open_card().cloned() else {
            return;
        };
        if let Some(card) = self.cards.get_mut(&id) {
            card.disclosure = DisclosureState::Closed;
            driver.reverse(card.chain);
        }
        self.panel.hide(driver, surface);
        log::debug!("[disclosure] closed {}", id);
    }

    /// Show `id` in the detail panel
    pub fn reveal_detail_panel(&mut self, id: &ProjectId, ctx: &mut DisclosureContext<'_>) -> Result<()> {
        let record = ctx.catalog.require(id)?;
        self.panel.show(id, record, &mut *ctx.driver, &mut *ctx.surface);
        log::debug!("[disclosure] revealed {}", id);
        Ok(())
    }

    /// Handle a click on the title region
    pub fn title_clicked(&mut self, driver: &mut dyn TweenDriver, surface: &mut dyn Surface) {
        self.close_open_card(driver, surface);
        surface.set_text(&Target::TitleLabel, "");
    }

    /// Label the title region should show on hover enter or leave
    pub fn hover_label(&self, entered: bool) -> &str {
        if entered && self.open_card().is_some() {
            CLOSE_LABEL
        } else {
            self.panel.fields().title.as_str()
        }
    }

    /// Update the title label for a hover enter or leave
    pub fn title_hover(&self, entered: bool, surface: &mut dyn Surface) {
        surface.set_text(&Target::TitleLabel, self.hover_label(entered));
    }
}

impl DisclosureStrategy for DesktopDisclosure {
    fn activate(&mut self, id: &ProjectId, ctx: &mut DisclosureContext<'_>) -> Result<()> {
        let state = self
            .state_of(id)
            .ok_or_else(|| FolioError::UnknownProject(id.clone()))?;

        if self.open_card().is_some_and(|open| open != id) {
            self.close_open_card(&mut *ctx.driver, &mut *ctx.surface);
        }

        if state == DisclosureState::Closed {
            if let Some(card) = self.cards.get_mut(id) {
                card.disclosure = DisclosureState::Open;
                ctx.driver.play(card.chain);
                log::debug!("[disclosure] opening {}", id);
            }
        }
        Ok(())
    }

    fn chain_completed(&mut self, id: &ProjectId, ctx: &mut DisclosureContext<'_>) -> Result<()> {
        if self.state_of(id) != Some(DisclosureState::Open) {
            log::warn!("[disclosure] ignoring completion for {} (not open)", id);
            return Ok(());
        }
        self.reveal_detail_panel(id, ctx)
    }

    fn is_open(&self, id: &ProjectId) -> bool {
        self.state_of(id) == Some(DisclosureState::Open)
    }
}

/// Slide the card onto the title region, then hide it
fn flight_chain(card: &CardLayout, destination_top: f32, config: &SiteConfig) -> Chain {
    let offset = card_offset(card.rect, card.parent_width, destination_top);
    let target = Target::Card(card.id.clone());
    Chain::with_payload(card.id.clone())
        .tween(
            target.clone(),
            StyleProp::Transform,
            StyleValue::Translate(Vec2::ZERO),
            StyleValue::Translate(offset),
            config.anim_duration_ms,
            Ease::Linear,
        )
        .set(
            target,
            StyleProp::Visibility,
            StyleValue::Keyword("visible"),
            StyleValue::Keyword("hidden"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ProjectLinks, ProjectRecord};
    use crate::math::Rect;
    use crate::testing::{DriverCall, RecordingSurface, ScriptedDriver};

    fn layout() -> PageLayout {
        PageLayout {
            cards: vec![
                CardLayout::new("A", Rect::new(100.0, 600.0, 200.0, 150.0), 1000.0),
                CardLayout::new("B", Rect::new(400.0, 600.0, 200.0, 150.0), 1000.0),
            ],
            title_region: Rect::new(50.0, 100.0, 350.0, 60.0),
            body_width: 1000.0,
        }
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for (id, title) in [("A", "Proj A"), ("B", "Proj B")] {
            let record = ProjectRecord {
                title: title.to_string(),
                description: format!("About {title}"),
                links: ProjectLinks {
                    github: "g".to_string(),
                    info: "i".to_string(),
                    web: "w".to_string(),
                },
            };
            catalog.insert(ProjectId::from(id), record).unwrap();
        }
        catalog
    }

    struct Fixture {
        catalog: Catalog,
        driver: ScriptedDriver,
        surface: RecordingSurface,
        desktop: DesktopDisclosure,
    }

    impl Fixture {
        fn new() -> Self {
            let mut driver = ScriptedDriver::new();
            let desktop = DesktopDisclosure::build(&layout(), &SiteConfig::default(), &mut driver);
            driver.clear_calls();
            Self {
                catalog: catalog(),
                driver,
                surface: RecordingSurface::new(),
                desktop,
            }
        }

        fn activate(&mut self, id: &str) -> Result<()> {
            let mut ctx = DisclosureContext {
                catalog: &self.catalog,
                driver: &mut self.driver,
                surface: &mut self.surface,
            };
            self.desktop.activate(&ProjectId::from(id), &mut ctx)
        }

        fn complete(&mut self, id: &str) -> Result<()> {
            let mut ctx = DisclosureContext {
                catalog: &self.catalog,
                driver: &mut self.driver,
                surface: &mut self.surface,
            };
            self.desktop.chain_completed(&ProjectId::from(id), &mut ctx)
        }

        fn chain(&self, id: &str) -> ChainId {
            self.desktop.card(&ProjectId::from(id)).unwrap().chain
        }
    }

    #[test]
    fn test_flight_chain_targets_title_region() {
        let fx = Fixture::new();
        let chain = fx.driver.chain(fx.chain("A")).unwrap();

        assert_eq!(chain.payload(), Some(&ProjectId::from("A")));
        // Center 200 moves to parent center 500; top 600 rises to 100
        assert_eq!(chain.steps()[0].to, StyleValue::Translate(Vec2::new(300.0, -500.0)));
        assert_eq!(chain.steps()[1].to, StyleValue::Keyword("hidden"));
        assert!((fx.desktop.panel().rest_width_percent() - 35.0).abs() < 0.001);
    }

    #[test]
    fn test_activate_opens_and_plays() {
        let mut fx = Fixture::new();
        fx.activate("A").unwrap();

        assert!(fx.desktop.is_open(&ProjectId::from("A")));
        assert_eq!(fx.driver.calls(), &[DriverCall::Play(fx.chain("A"))]);
        assert!(!fx.desktop.panel().is_visible());
    }

    #[test]
    fn test_activate_open_card_is_noop() {
        let mut fx = Fixture::new();
        fx.activate("A").unwrap();
        fx.driver.clear_calls();

        fx.activate("A").unwrap();
        assert!(fx.driver.calls().is_empty());
        assert!(fx.desktop.is_open(&ProjectId::from("A")));
    }

    #[test]
    fn test_activate_other_closes_first() {
        let mut fx = Fixture::new();
        fx.activate("A").unwrap();
        fx.complete("A").unwrap();
        fx.driver.clear_calls();

        fx.activate("B").unwrap();
        let panel = fx.desktop.panel().chain();
        assert_eq!(
            fx.driver.calls(),
            &[
                DriverCall::Reverse(fx.chain("A")),
                DriverCall::Pause(panel),
                DriverCall::Reset(panel),
                DriverCall::Play(fx.chain("B")),
            ]
        );
        assert_eq!(fx.desktop.open_card(), Some(&ProjectId::from("B")));
        assert!(!fx.desktop.panel().is_visible());
    }

    #[test]
    fn test_completion_reveals_panel() {
        let mut fx = Fixture::new();
        fx.activate("A").unwrap();
        fx.complete("A").unwrap();

        let panel = fx.desktop.panel();
        assert_eq!(panel.current(), Some(&ProjectId::from("A")));
        assert_eq!(panel.fields().title, "Proj A");
        assert_eq!(fx.surface.text(&Target::TitleLabel), "Proj A");
        assert_eq!(fx.surface.href(&Target::WebLink), "w");
        assert_eq!(
            fx.driver.calls().last(),
            Some(&DriverCall::Play(panel.chain()))
        );
    }

    #[test]
    fn test_stale_completion_ignored() {
        let mut fx = Fixture::new();
        fx.activate("A").unwrap();
        fx.activate("B").unwrap();
        fx.complete("A").unwrap();

        assert!(!fx.desktop.panel().is_visible());
        assert_eq!(fx.surface.text(&Target::TitleLabel), "");
    }

    #[test]
    fn test_unknown_card_is_error() {
        let mut fx = Fixture::new();
        assert!(matches!(fx.activate("Z"), Err(FolioError::UnknownProject(_))));
    }

    #[test]
    fn test_hover_label() {
        let mut fx = Fixture::new();
        assert_eq!(fx.desktop.hover_label(true), "");

        fx.activate("A").unwrap();
        assert_eq!(fx.desktop.hover_label(true), CLOSE_LABEL);
        fx.complete("A").unwrap();
        assert_eq!(fx.desktop.hover_label(false), "Proj A");
    }

    #[test]
    fn test_title_click_closes() {
        let mut fx = Fixture::new();
        fx.activate("A").unwrap();
        fx.complete("A").unwrap();

        fx.desktop.title_clicked(&mut fx.driver, &mut fx.surface);
        assert!(fx.desktop.open_card().is_none());
        assert_eq!(fx.surface.text(&Target::TitleLabel), "");
        assert_eq!(fx.surface.text(&Target::Description), "");
        assert_eq!(fx.surface.href(&Target::GithubLink), "");
    }
}
