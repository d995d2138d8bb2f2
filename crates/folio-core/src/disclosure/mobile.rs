//! Mobile disclosure: each card toggles its own detail block

use std::collections::HashMap;

use crate::catalog::ProjectId;
use crate::config::SiteConfig;
use crate::error::{FolioError, Result};
use crate::geometry::PageLayout;
use crate::markup::MobileDetailFragment;
use crate::surface::{InsertPosition, Surface, Target};
use crate::tween::{Chain, ChainId, Ease, StyleProp, StyleValue, TweenDriver};

use super::{DisclosureContext, DisclosureStrategy};

const ACCENT: &str = "hsl(317 100% 54%)";
const ACCENT_GLOW: &str = "0 0 1em 0.1em hsl(317 100% 54%)";

/// Card colors for the expanded and collapsed states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Treatment {
    /// Filled with the accent color and glowing
    Active,
    /// Accent-colored text on a transparent card
    Idle,
}

impl Treatment {
    /// Style writes that apply this treatment
    pub fn styles(self) -> [(StyleProp, StyleValue); 3] {
        match self {
            Treatment::Active => [
                (StyleProp::Color, StyleValue::Keyword("black")),
                (StyleProp::BackgroundColor, StyleValue::Keyword(ACCENT)),
                (StyleProp::BoxShadow, StyleValue::Keyword(ACCENT_GLOW)),
            ],
            Treatment::Idle => [
                (StyleProp::Color, StyleValue::Keyword(ACCENT)),
                (StyleProp::BackgroundColor, StyleValue::Keyword("transparent")),
                (StyleProp::BoxShadow, StyleValue::Keyword("none")),
            ],
        }
    }

    fn apply(self, card: &Target, surface: &mut dyn Surface) {
        for (prop, value) in self.styles() {
            surface.set_style(card, prop, &value);
        }
    }
}

/// Per-card mobile state
#[derive(Clone, Copy, Debug)]
pub struct MobileCardState {
    pub expanded: bool,
    pub chain: ChainId,
}

/// Narrow-layout controller; cards expand independently
#[derive(Debug, Default)]
pub struct MobileDisclosure {
    cards: HashMap<ProjectId, MobileCardState>,
}

impl MobileDisclosure {
    /// Inject a detail block after every card and build its chain
    pub fn build(layout: &PageLayout, config: &SiteConfig, ctx: &mut DisclosureContext<'_>) -> Result<Self> {
        let mut cards = HashMap::with_capacity(layout.cards.len());
        for card in &layout.cards {
            let record = ctx.catalog.require(&card.id)?;
            let fragment = MobileDetailFragment::new(&card.id, record, config.max_mobile_chars);
            ctx.surface
                .insert_html(&Target::Card(card.id.clone()), InsertPosition::AfterEnd, &fragment.render());

            let chain = ctx.driver.create(expand_chain(&card.id, config));
            cards.insert(card.id.clone(), MobileCardState { expanded: false, chain });
        }
        log::debug!("[disclosure] mobile ready with {} cards", cards.len());
        Ok(Self { cards })
    }

    /// Check if a card's detail block is expanded
    pub fn is_expanded(&self, id: &ProjectId) -> bool {
        self.cards.get(id).is_some_and(|card| card.expanded)
    }

    /// Card state by id
    pub fn card(&self, id: &ProjectId) -> Option<&MobileCardState> {
        self.cards.get(id)
    }
}

impl DisclosureStrategy for MobileDisclosure {
    fn activate(&mut self, id: &ProjectId, ctx: &mut DisclosureContext<'_>) -> Result<()> {
        let card = self
            .cards
            .get_mut(id)
            .ok_or_else(|| FolioError::UnknownProject(id.clone()))?;

        card.expanded = !card.expanded;
        let target = Target::Card(id.clone());
        if card.expanded {
            Treatment::Active.apply(&target, &mut *ctx.surface);
            ctx.driver.play(card.chain);
        } else {
            Treatment::Idle.apply(&target, &mut *ctx.surface);
            ctx.driver.reverse(card.chain);
        }
        log::debug!("[disclosure] {} expanded={}", id, card.expanded);
        Ok(())
    }

    fn chain_completed(&mut self, _id: &ProjectId, _ctx: &mut DisclosureContext<'_>) -> Result<()> {
        Ok(())
    }

    fn is_open(&self, id: &ProjectId) -> bool {
        self.is_expanded(id)
    }
}

/// Unhide the block, then grow it to its content height
fn expand_chain(id: &ProjectId, config: &SiteConfig) -> Chain {
    let target = Target::MobileInfo(id.clone());
    Chain::new()
        .set(
            target.clone(),
            StyleProp::Display,
            StyleValue::Keyword("none"),
            StyleValue::Keyword("block"),
        )
        .tween(
            target,
            StyleProp::Height,
            StyleValue::px(0.0),
            StyleValue::AUTO,
            config.mobile_anim_duration_ms,
            Ease::Linear,
        )
}
