use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::context::{Language, Theme};
use crate::logic::navigation::PAGE_SIZE;
use crate::widget::WidgetTimings;

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Without a backend the client runs on built-in demo data
    #[serde(default)]
    pub backend: Option<BackendConfig>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default = "default_support_url")]
    pub support_url: String,
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

fn default_support_url() -> String {
    "https://ceka.co.ke/support".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: None,
            language: Language::default(),
            theme: Theme::default(),
            vim_mode: false,
            page_size: default_page_size(),
            widget: WidgetConfig::default(),
            support_url: default_support_url(),
        }
    }
}

/// Widget delays in milliseconds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub show_after_ms: u64,
    pub pulse_after_ms: u64,
    pub idle_after_ms: u64,
    pub budget_ms: u64,
    pub tick_every_ms: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        let t = WidgetTimings::default();
        Self {
            show_after_ms: t.show_after.as_millis() as u64,
            pulse_after_ms: t.pulse_after.as_millis() as u64,
            idle_after_ms: t.idle_after.as_millis() as u64,
            budget_ms: t.budget.as_millis() as u64,
            tick_every_ms: t.tick_every.as_millis() as u64,
        }
    }
}

impl WidgetConfig {
    pub fn timings(&self) -> Result<WidgetTimings> {
        let timings = WidgetTimings {
            show_after: Duration::from_millis(self.show_after_ms),
            pulse_after: Duration::from_millis(self.pulse_after_ms),
            idle_after: Duration::from_millis(self.idle_after_ms),
            budget: Duration::from_millis(self.budget_ms),
            tick_every: Duration::from_millis(self.tick_every_ms),
        };
        timings.validate().context("Invalid widget config")?;
        Ok(timings)
    }
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(contents).context("Failed to parse config YAML")?;
        if config.page_size == 0 {
            anyhow::bail!("page_size must be positive");
        }
        config.widget.timings()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&contents).with_context(|| format!("In config {}", path.display()))
    }

    /// Load from the resolved path, or built-in defaults when no file exists
    pub fn load_or_default(cli_path: Option<&str>) -> Result<(Self, Option<PathBuf>)> {
        match get_config_path(cli_path)? {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit CLI path must exist; the platform and local locations are
/// optional.
pub fn get_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/ceka/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("ceka").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::TimingsError;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert!(config.backend.is_none());
        assert_eq!(config.language, Language::English);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.page_size, PAGE_SIZE);
        assert_eq!(config.widget.timings().unwrap(), WidgetTimings::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
backend:
  url: https://example.supabase.co
  anon_key: anon
language: sw
theme: light
vim_mode: true
widget:
  show_after_ms: 1000
"#;
        let config = Config::from_yaml(yaml).unwrap();
        let backend = config.backend.unwrap();
        assert_eq!(backend.url, "https://example.supabase.co");
        assert_eq!(config.language, Language::Swahili);
        assert_eq!(config.theme, Theme::Light);
        assert!(config.vim_mode);

        let timings = config.widget.timings().unwrap();
        assert_eq!(timings.show_after, Duration::from_secs(1));
        assert_eq!(timings.pulse_after, Duration::from_secs(12));
    }

    #[test]
    fn test_unordered_widget_delays_rejected() {
        let yaml = "widget:\n  show_after_ms: 20000\n  pulse_after_ms: 10000\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TimingsError>(),
            Some(&TimingsError::ShowAfterPulse)
        );
        assert!(format!("{:#}", err).contains("Invalid widget config"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(Config::from_yaml("page_size: 0").is_err());
    }

    #[test]
    fn test_missing_cli_path_is_error() {
        assert!(get_config_path(Some("/definitely/not/here.yaml")).is_err());
    }
}
