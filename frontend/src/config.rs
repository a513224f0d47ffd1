use log::{info, warn};
use serde::Deserialize;

/// Id of the inline `<script type="application/json">` carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn environment() -> &'static str {
    "development"
}

#[cfg(not(debug_assertions))]
pub fn environment() -> &'static str {
    "production"
}

/// Feature gates and tuning for the page behaviours.
///
/// Every field has a default, so a page can override any subset of them.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub notifications: bool,
    pub progress_bar: bool,
    pub cursor_trail: bool,
    pub tilt_cards: bool,
    pub parallax_speed: f64,
    /// Added to the scroll position before matching it against sections.
    pub nav_offset: f64,
    /// How far (px) above the viewport bottom an element must be before it reveals.
    pub reveal_offset: f64,
    pub reveal_stagger_ms: u32,
    pub scroll_top_threshold: f64,
    pub navbar_scrolled_threshold: f64,
    pub counter_duration_ms: u32,
    pub toast_duration_ms: u32,
    pub toast_exit_ms: u32,
    pub typing_speed_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            notifications: true,
            progress_bar: false,
            cursor_trail: false,
            tilt_cards: true,
            parallax_speed: 0.5,
            nav_offset: 100.0,
            reveal_offset: 100.0,
            reveal_stagger_ms: 100,
            scroll_top_threshold: 300.0,
            navbar_scrolled_threshold: 50.0,
            counter_duration_ms: 2000,
            toast_duration_ms: 5000,
            toast_exit_ms: 500,
            typing_speed_ms: 100,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads overrides from the page, falling back to defaults when the
    /// element is missing or its JSON does not parse.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => {
                    info!("Loaded site config from #{}", CONFIG_ELEMENT_ID);
                    config
                }
                Err(e) => {
                    warn!("Invalid site config, using defaults: {}", e);
                    Self::default()
                }
            },
            _ => {
                info!("No site config on page, using defaults ({})", environment());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_gate_optional_features_off() {
        let config = SiteConfig::default();
        assert!(config.notifications);
        assert!(!config.progress_bar);
        assert!(!config.cursor_trail);
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.toast_exit_ms, 500);
        assert_eq!(config.parallax_speed, 0.5);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{ "progress_bar": true, "nav_offset": 80 }"#).unwrap();
        assert!(config.progress_bar);
        assert_eq!(config.nav_offset, 80.0);
        assert_eq!(config.scroll_top_threshold, 300.0);
        assert!(config.notifications);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SiteConfig::from_json("{ progress_bar: yes").is_err());
        assert!(SiteConfig::from_json(r#"{ "progress_bar": "yes" }"#).is_err());
    }
}
