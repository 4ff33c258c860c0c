//! User settings stored as settings.json in the app data directory

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Collection sources (URL or file path)
    pub projects_source: String,
    pub articles_source: String,
    pub timeline_source: String,

    // Pagination
    pub projects_page_size: usize,
    pub articles_page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            projects_source: DEFAULT_PROJECTS_SOURCE.to_string(),
            articles_source: DEFAULT_ARTICLES_SOURCE.to_string(),
            timeline_source: DEFAULT_TIMELINE_SOURCE.to_string(),
            projects_page_size: DEFAULT_PAGE_SIZE,
            articles_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        let mut settings: Settings = match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<Settings>(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        };
        settings.sanitize();
        settings
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Override sources from the environment. Applied to a per-run copy so
    /// overrides never end up in settings.json.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let overrides = [
            (ENV_PROJECTS_SOURCE, &mut self.projects_source),
            (ENV_ARTICLES_SOURCE, &mut self.articles_source),
            (ENV_TIMELINE_SOURCE, &mut self.timeline_source),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                info!(key, source = %value, "Source overridden from environment");
                *slot = value;
            }
        }
    }

    fn sanitize(&mut self) {
        self.projects_page_size = self.projects_page_size.max(1);
        self.articles_page_size = self.articles_page_size.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1280.0),
            window_h: Some(720.0),
            projects_source: "https://example.com/projects.json".into(),
            articles_page_size: 9,
            ..Default::default()
        };
        settings.save(dir.path());

        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn partial_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"projects_page_size": 0}"#).unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.projects_page_size, 1);
        assert_eq!(loaded.articles_page_size, DEFAULT_PAGE_SIZE);

        std::fs::write(dir.path().join("settings.json"), "{ broken").unwrap();
        assert_eq!(Settings::load(dir.path()).projects_page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn env_overrides_replace_sources() {
        let mut settings = Settings::default();
        settings.apply_env_overrides(|key| match key {
            ENV_ARTICLES_SOURCE => Some("https://example.com/articles.json".into()),
            ENV_TIMELINE_SOURCE => Some("   ".into()),
            _ => None,
        });
        assert_eq!(settings.projects_source, DEFAULT_PROJECTS_SOURCE);
        assert_eq!(settings.articles_source, "https://example.com/articles.json");
        assert_eq!(settings.timeline_source, DEFAULT_TIMELINE_SOURCE);
    }
}
