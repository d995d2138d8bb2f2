//! Site configuration
//!
//! Timings and limits for the page. Every field has a default, so a JSON
//! override only needs to name the values it changes.

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Duration of the card flight and panel expansion in milliseconds
pub const ANIM_DURATION_MS: u32 = 500;

/// Duration of the mobile detail expansion in milliseconds
pub const MOBILE_ANIM_DURATION_MS: u32 = 100;

/// Duration of the panel corner flattening in milliseconds
pub const RADIUS_DURATION_MS: u32 = 100;

/// Duration of the nav drawer slide in milliseconds
pub const NAV_DURATION_MS: u32 = 300;

/// Drawer width when open, as a percentage of the viewport
pub const DRAWER_WIDTH_PERCENT: f32 = 50.0;

/// Character budget for mobile descriptions
pub const MAX_MOBILE_CHARS: usize = 200;

/// Media query selecting the narrow (mobile) layout
pub const NARROW_QUERY: &str = "(max-width: 1000px)";

/// Tunable site settings
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub anim_duration_ms: u32,
    pub mobile_anim_duration_ms: u32,
    pub radius_duration_ms: u32,
    pub nav_duration_ms: u32,
    pub drawer_width_percent: f32,
    pub max_mobile_chars: usize,
    pub narrow_query: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            anim_duration_ms: ANIM_DURATION_MS,
            mobile_anim_duration_ms: MOBILE_ANIM_DURATION_MS,
            radius_duration_ms: RADIUS_DURATION_MS,
            nav_duration_ms: NAV_DURATION_MS,
            drawer_width_percent: DRAWER_WIDTH_PERCENT,
            max_mobile_chars: MAX_MOBILE_CHARS,
            narrow_query: NARROW_QUERY.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) config override
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FolioError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.anim_duration_ms, 500);
        assert_eq!(config.mobile_anim_duration_ms, 100);
        assert!(config.mobile_anim_duration_ms < config.anim_duration_ms);
        assert_eq!(config.max_mobile_chars, 200);
        assert_eq!(config.narrow_query, "(max-width: 1000px)");
    }

    #[test]
    fn test_config_partial_override() {
        let config = SiteConfig::from_json(r#"{"nav_duration_ms": 450}"#).unwrap();
        assert_eq!(config.nav_duration_ms, 450);
        assert_eq!(config.anim_duration_ms, ANIM_DURATION_MS);
    }

    #[test]
    fn test_config_bad_json() {
        assert!(matches!(SiteConfig::from_json("[1, 2"), Err(FolioError::Config(_))));
    }
}
