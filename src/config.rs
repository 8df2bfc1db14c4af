use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PANEL_WIDTH: f32 = 556.0;
const PANEL_WIDTH_ENV: &str = "ARTICLE_PARAMS_PANEL_WIDTH";

#[derive(Debug, Default, Serialize, Deserialize)]
/// Persisted window settings. Article parameters are not stored here.
pub struct AppConfig {
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
    pub panel_width: Option<f32>,
}

impl AppConfig {
    /// Returns the user config file path, if a config directory is available.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("article-params").join("config.toml"))
    }

    /// Loads config from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring malformed config file");
            Self::default()
        })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Panel width from the environment, then the config file.
    pub fn resolve_panel_width(&self) -> f32 {
        let from_env = std::env::var(PANEL_WIDTH_ENV).ok();
        resolve_panel_width(from_env.as_deref(), self.panel_width)
    }
}

fn resolve_panel_width(env: Option<&str>, configured: Option<f32>) -> f32 {
    env.and_then(|raw| raw.trim().parse::<f32>().ok())
        .or(configured)
        .filter(|w| w.is_finite() && *w >= 200.0)
        .unwrap_or(DEFAULT_PANEL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_known_keys() {
        let config = AppConfig::parse("window_width = 1024.0\npanel_width = 400.0\n");
        assert_eq!(config.window_width, Some(1024.0));
        assert_eq!(config.window_height, None);
        assert_eq!(config.panel_width, Some(400.0));
    }

    #[test]
    fn parse_falls_back_to_defaults_on_garbage() {
        let config = AppConfig::parse("window_width = \"wide\"");
        assert_eq!(config.window_width, None);
    }

    #[test]
    fn env_width_wins_over_config() {
        assert_eq!(resolve_panel_width(Some("480"), Some(400.0)), 480.0);
        assert_eq!(resolve_panel_width(Some("nope"), Some(400.0)), 400.0);
        assert_eq!(resolve_panel_width(None, None), DEFAULT_PANEL_WIDTH);
    }

    #[test]
    fn too_narrow_width_uses_default() {
        assert_eq!(resolve_panel_width(None, Some(50.0)), DEFAULT_PANEL_WIDTH);
    }
}
