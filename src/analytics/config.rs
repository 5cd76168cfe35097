//! The `[analytics]` section of `config/mignon.toml`.

use std::env;

use serde::{Deserialize, Serialize};

/// Default GA4 Measurement Protocol collection endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.google-analytics.com/mp/collect";

/// Client id reported when none is configured. One kiosk is one client;
/// per-viewer identity is deliberately out of scope.
pub const DEFAULT_CLIENT_ID: &str = "mignon-kiosk";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSettings {
    /// Master switch; defaults to on, but without a measurement id the
    /// manager still falls back to the log sink.
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub measurement_id: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Override for the collection endpoint, mainly for tests and staging.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

impl AnalyticsSettings {
    /// Fills unset credentials from the environment. The web build reads its
    /// measurement id from the build environment the same way.
    pub fn with_env_fallback(mut self) -> Self {
        if self.measurement_id.is_none()
            && let Ok(id) = env::var("MIGNON_GA_MEASUREMENT_ID")
            && !id.is_empty()
        {
            self.measurement_id = Some(id);
        }
        if self.api_secret.is_none()
            && let Ok(secret) = env::var("MIGNON_GA_API_SECRET")
            && !secret.is_empty()
        {
            self.api_secret = Some(secret);
        }
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn client_id(&self) -> &str {
        self.client_id.as_deref().unwrap_or(DEFAULT_CLIENT_ID)
    }

    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}
