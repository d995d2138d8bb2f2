//! Desktop detail panel

use crate::catalog::{ProjectId, ProjectRecord};
use crate::config::SiteConfig;
use crate::surface::{Surface, Target};
use crate::tween::{Chain, ChainId, Ease, StyleProp, StyleValue, TweenDriver};

/// Text and links currently shown in the panel
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayFields {
    pub title: String,
    pub description: String,
    pub github: String,
    pub info: String,
    pub web: String,
}

impl DisplayFields {
    fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            github: record.links.github.clone(),
            info: record.links.info.clone(),
            web: record.links.web.clone(),
        }
    }

    fn write(&self, surface: &mut dyn Surface) {
        surface.set_text(&Target::TitleLabel, &self.title);
        surface.set_text(&Target::Description, &self.description);
        surface.set_href(&Target::GithubLink, &self.github);
        surface.set_href(&Target::InfoLink, &self.info);
        surface.set_href(&Target::WebLink, &self.web);
    }
}

/// The single detail panel shared by all cards
///
/// Visible exactly while `current` names a project.
#[derive(Clone, Debug)]
pub struct DetailPanel {
    current: Option<ProjectId>,
    fields: DisplayFields,
    chain: ChainId,
    rest_width_percent: f32,
}

impl DetailPanel {
    /// Create the panel and register its expansion chain
    pub fn build(rest_width_percent: f32, config: &SiteConfig, driver: &mut dyn TweenDriver) -> Self {
        let chain = driver.create(expansion_chain(rest_width_percent, config));
        Self {
            current: None,
            fields: DisplayFields::default(),
            chain,
            rest_width_percent,
        }
    }

    /// Check if the panel is showing a project
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Project being shown
    pub fn current(&self) -> Option<&ProjectId> {
        self.current.as_ref()
    }

    pub fn fields(&self) -> &DisplayFields {
        &self.fields
    }

    /// Handle of the expansion chain
    pub fn chain(&self) -> ChainId {
        self.chain
    }

    /// Collapsed width of the title region (% of the body)
    pub fn rest_width_percent(&self) -> f32 {
        self.rest_width_percent
    }

    /// Fill the panel from `record` and expand it from the start
    pub(crate) fn show(
        &mut self,
        id: &ProjectId,
        record: &ProjectRecord,
        driver: &mut dyn TweenDriver,
        surface: &mut dyn Surface,
    ) {
        self.current = Some(id.clone());
        self.fields = DisplayFields::from_record(record);
        self.fields.write(surface);
        driver.restart(self.chain);
    }

    /// Stop the expansion, clear every field and put the styles back at rest
    pub(crate) fn hide(&mut self, driver: &mut dyn TweenDriver, surface: &mut dyn Surface) {
        driver.pause(self.chain);
        driver.reset(self.chain);
        self.current = None;
        self.fields = DisplayFields::default();
        self.fields.write(surface);

        surface.set_style(&Target::InfoWrapper, StyleProp::Display, &StyleValue::Keyword("none"));
        surface.set_style(&Target::InfoWrapper, StyleProp::Height, &StyleValue::px(0.0));
        surface.set_style(&Target::TitleRegion, StyleProp::Visibility, &StyleValue::Keyword("hidden"));
        surface.set_style(
            &Target::TitleRegion,
            StyleProp::Width,
            &StyleValue::percent(self.rest_width_percent),
        );
        surface.set_style(&Target::TitleRegion, StyleProp::BorderRadius, &StyleValue::em(1.0));
    }
}

/// Show the region, widen it, square its corners, then open the wrapper
fn expansion_chain(rest_width_percent: f32, config: &SiteConfig) -> Chain {
    Chain::new()
        .set(
            Target::TitleRegion,
            StyleProp::Visibility,
            StyleValue::Keyword("hidden"),
            StyleValue::Keyword("visible"),
        )
        .tween(
            Target::TitleRegion,
            StyleProp::Width,
            StyleValue::percent(rest_width_percent),
            StyleValue::percent(100.0),
            config.anim_duration_ms,
            Ease::Power1Out,
        )
        .tween(
            Target::TitleRegion,
            StyleProp::BorderRadius,
            StyleValue::em(1.0),
            StyleValue::em(0.0),
            config.radius_duration_ms,
            Ease::Linear,
        )
        .set(
            Target::InfoWrapper,
            StyleProp::Display,
            StyleValue::Keyword("none"),
            StyleValue::Keyword("block"),
        )
        .tween(
            Target::InfoWrapper,
            StyleProp::Height,
            StyleValue::px(0.0),
            StyleValue::AUTO,
            config.anim_duration_ms,
            Ease::Power1Out,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DriverCall, RecordingSurface, ScriptedDriver};

    #[test]
    fn test_expansion_chain_order() {
        let chain = expansion_chain(35.0, &SiteConfig::default());
        let steps: Vec<(&Target, StyleProp)> = chain.steps().iter().map(|s| (&s.target, s.prop)).collect();

        assert_eq!(
            steps,
            vec![
                (&Target::TitleRegion, StyleProp::Visibility),
                (&Target::TitleRegion, StyleProp::Width),
                (&Target::TitleRegion, StyleProp::BorderRadius),
                (&Target::InfoWrapper, StyleProp::Display),
                (&Target::InfoWrapper, StyleProp::Height),
            ]
        );
        assert!((chain.duration_ms() - 1100.0).abs() < 0.001);
        assert_eq!(chain.steps()[1].from, StyleValue::percent(35.0));
        assert!(chain.steps()[4].to.is_auto());
    }

    #[test]
    fn test_hide_resets_chain_and_styles() {
        let mut driver = ScriptedDriver::new();
        let mut surface = RecordingSurface::new();
        let mut panel = DetailPanel::build(35.0, &SiteConfig::default(), &mut driver);
        driver.clear_calls();

        panel.hide(&mut driver, &mut surface);

        assert_eq!(driver.calls(), &[DriverCall::Pause(panel.chain()), DriverCall::Reset(panel.chain())]);
        assert!(!panel.is_visible());
        assert_eq!(panel.fields(), &DisplayFields::default());
        assert_eq!(
            surface.style(&Target::TitleRegion, StyleProp::Width),
            Some(&StyleValue::percent(35.0))
        );
        assert_eq!(
            surface.style(&Target::InfoWrapper, StyleProp::Display),
            Some(&StyleValue::Keyword("none"))
        );
    }
}
