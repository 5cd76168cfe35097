//! Application settings, loaded from an optional `config/mignon.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analytics::AnalyticsSettings;
use crate::i18n::Lang;
use crate::votes;

/// Storefront URL offered by the share action.
pub const DEFAULT_SHARE_URL: &str = "https://tenjin.mignon-mini-croissant.com";

/// Top-level settings. Every field is optional; a kiosk with no config file
/// runs on defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Startup language code (`JP`, `en-US`, `zh`, …); unknown values fall
    /// back to Japanese.
    #[serde(default)]
    pub language: Option<String>,
    /// Directory holding the vote ledger. Relative paths are resolved
    /// against the working directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// URL shown by the share action.
    #[serde(default)]
    pub share_url: Option<String>,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
}

impl AppSettings {
    /// Reads settings from `config/mignon.toml` under `root`.
    ///
    /// A missing file yields defaults. A malformed file is an error — unlike
    /// the vote ledger, a broken config deserves a loud startup failure
    /// rather than silently running misconfigured.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join("config/mignon.toml");
        if config_path.exists() {
            let raw = fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read settings: {}", config_path.display()))?;
            let parsed: AppSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse settings: {}", config_path.display()))?;
            Ok(parsed.normalize(root))
        } else {
            Ok(Self::default().normalize(root))
        }
    }

    /// Resolves relative paths against `root` and fills in the data dir.
    fn normalize(mut self, root: &Path) -> Self {
        let data_dir = self.data_dir.take().unwrap_or_else(|| PathBuf::from("data"));
        self.data_dir = Some(if data_dir.is_relative() {
            root.join(data_dir)
        } else {
            data_dir
        });
        self
    }

    pub fn language(&self) -> Lang {
        self.language.as_deref().and_then(Lang::parse).unwrap_or_default()
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("data"))
            .join(votes::LEDGER_FILE)
    }

    pub fn share_url(&self) -> &str {
        self.share_url.as_deref().unwrap_or(DEFAULT_SHARE_URL)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = TempDir::new().expect("tempdir should create");
        let settings = AppSettings::load(dir.path()).expect("defaults should load");
        assert_eq!(settings.language(), Lang::Jp);
        assert_eq!(settings.share_url(), DEFAULT_SHARE_URL);
        assert_eq!(
            settings.ledger_path(),
            dir.path().join("data").join(votes::LEDGER_FILE)
        );
    }

    #[test]
    fn full_config_parses() {
        let dir = TempDir::new().expect("tempdir should create");
        fs::create_dir_all(dir.path().join("config")).expect("config dir should create");
        fs::write(
            dir.path().join("config/mignon.toml"),
            r#"
language = "en"
data_dir = "kiosk-data"
share_url = "https://example.test/menu"

[analytics]
measurement_id = "G-TESTTEST"
api_secret = "secret"
"#,
        )
        .expect("config should write");

        let settings = AppSettings::load(dir.path()).expect("config should load");
        assert_eq!(settings.language(), Lang::En);
        assert_eq!(settings.share_url(), "https://example.test/menu");
        assert_eq!(
            settings.ledger_path(),
            dir.path().join("kiosk-data").join(votes::LEDGER_FILE)
        );
        assert_eq!(settings.analytics.measurement_id.as_deref(), Some("G-TESTTEST"));
    }

    #[test]
    fn unknown_language_falls_back_to_japanese() {
        let settings = AppSettings {
            language: Some(String::from("fr")),
            ..AppSettings::default()
        };
        assert_eq!(settings.language(), Lang::Jp);
    }

    #[test]
    fn malformed_config_is_a_startup_error() {
        let dir = TempDir::new().expect("tempdir should create");
        fs::create_dir_all(dir.path().join("config")).expect("config dir should create");
        fs::write(dir.path().join("config/mignon.toml"), "language = [broken")
            .expect("config should write");
        assert!(AppSettings::load(dir.path()).is_err());
    }
}
