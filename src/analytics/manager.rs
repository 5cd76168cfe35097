//! Sink selection and the fire-and-forget tracking entry point.

use log::{debug, info, warn};

use crate::analytics::config::AnalyticsSettings;
use crate::analytics::event::TrackEvent;
use crate::analytics::providers::http::HttpSink;
use crate::analytics::providers::log::LogSink;
use crate::analytics::providers::AnalyticsSink;

/// Delivery results reported back by a sink. Drained on tick; these only
/// ever reach the log, never the viewer.
#[derive(Debug)]
pub enum DeliveryEvent {
    /// The named event was accepted by the collection endpoint.
    Delivered(&'static str),
    /// Delivery failed; the event is dropped, not retried.
    Failed(String),
}

/// Owns the active sink and shields the rest of the app from it.
pub struct AnalyticsManager {
    sink: Box<dyn AnalyticsSink>,
}

impl AnalyticsManager {
    /// Picks the sink for this run: GA4 over HTTP when a measurement id is
    /// configured and tracking is enabled, otherwise the log sink — the
    /// terminal counterpart of the web build skipping GA init when its
    /// measurement id is unset.
    pub fn bootstrap(settings: AnalyticsSettings) -> Self {
        let settings = settings.with_env_fallback();
        let sink: Box<dyn AnalyticsSink> = match settings.measurement_id.clone() {
            Some(id) if settings.enabled() => {
                info!("analytics: GA4 sink active for {id}");
                Box::new(HttpSink::new(&settings, id))
            }
            Some(_) => {
                info!("analytics: disabled by configuration; events go to the log only");
                Box::new(LogSink)
            }
            None => {
                info!("analytics: measurement id not set; events go to the log only");
                Box::new(LogSink)
            }
        };
        Self { sink }
    }

    /// Hands an event to the sink. Never blocks on delivery and never fails
    /// the interaction that produced the event; a sink refusal is logged.
    pub async fn track(&mut self, event: TrackEvent) {
        debug!("track {} {:?}", event.name, event.params);
        if let Err(err) = self.sink.send(event).await {
            warn!("analytics sink rejected event: {err:#}");
        }
    }

    /// Non-blocking poll for delivery results, drained by the app tick.
    pub fn poll_event(&mut self) -> Option<DeliveryEvent> {
        self.sink.poll_event()
    }

    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_without_measurement_id_uses_the_log_sink() {
        let manager = AnalyticsManager::bootstrap(AnalyticsSettings::default());
        assert_eq!(manager.sink_name(), "log");
    }

    #[test]
    fn bootstrap_with_measurement_id_uses_ga4() {
        let settings = AnalyticsSettings {
            measurement_id: Some(String::from("G-TESTTEST")),
            ..AnalyticsSettings::default()
        };
        let manager = AnalyticsManager::bootstrap(settings);
        assert_eq!(manager.sink_name(), "ga4");
    }

    #[test]
    fn disabled_overrides_a_configured_measurement_id() {
        let settings = AnalyticsSettings {
            enabled: Some(false),
            measurement_id: Some(String::from("G-TESTTEST")),
            ..AnalyticsSettings::default()
        };
        let manager = AnalyticsManager::bootstrap(settings);
        assert_eq!(manager.sink_name(), "log");
    }

    #[tokio::test]
    async fn log_sink_tracking_is_infallible() {
        let mut manager = AnalyticsManager::bootstrap(AnalyticsSettings::default());
        manager
            .track(TrackEvent::new("vote").with("item_key", "matcha"))
            .await;
        assert!(manager.poll_event().is_none());
    }
}
