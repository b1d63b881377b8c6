use crate::{
    constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS},
    localization::{labels_for, Labels},
    shapes::{enums::LanguageEnum, keybinding::KeyBindings},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Process-wide configuration, built once at startup and handed to every
/// screen that needs it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub language: LanguageEnum,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            language: LanguageEnum::default(),
            keybindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn labels(&self) -> &'static Labels {
        labels_for(self.language)
    }

    /// Applies the api url override, ignoring blank values.
    pub fn with_api_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let settings: Settings = toml::from_str("language = \"pt-br\"").unwrap();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.timeout(), Duration::from_secs(20));
        assert_eq!(settings.language, LanguageEnum::PtBr);
    }

    #[test]
    fn blank_override_is_ignored() {
        let settings = Settings::default().with_api_url_override(Some("  ".into()));
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        let settings = Settings::default().with_api_url_override(Some("http://localhost:8000/api".into()));
        assert_eq!(settings.api_url, "http://localhost:8000/api");
    }
}
