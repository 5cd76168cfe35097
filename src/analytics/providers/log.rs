//! Log-only sink, active when no measurement id is configured.

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::analytics::event::TrackEvent;
use crate::analytics::manager::DeliveryEvent;

use super::AnalyticsSink;

/// Writes each event to the application log and drops it. Keeps the event
/// wiring observable on kiosks that never ship data anywhere.
pub struct LogSink;

#[async_trait]
impl AnalyticsSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    async fn send(&mut self, event: TrackEvent) -> Result<()> {
        if event.params.is_empty() {
            info!("event {}", event.name);
        } else {
            info!("event {} {:?}", event.name, event.params);
        }
        Ok(())
    }

    fn poll_event(&mut self) -> Option<DeliveryEvent> {
        None
    }
}
