//! GA4 Measurement Protocol sink.
//!
//! `send` spawns the actual HTTP call and returns immediately; the spawned
//! task reports the outcome over an mpsc channel that `poll_event` drains.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::analytics::config::AnalyticsSettings;
use crate::analytics::event::TrackEvent;
use crate::analytics::manager::DeliveryEvent;

use super::AnalyticsSink;

pub struct HttpSink {
    info: CollectInfo,
    client: Client,
    events_tx: UnboundedSender<DeliveryEvent>,
    events_rx: UnboundedReceiver<DeliveryEvent>,
}

/// Connection details cloned into each dispatch task.
#[derive(Clone)]
struct CollectInfo {
    endpoint: String,
    measurement_id: String,
    api_secret: Option<String>,
    client_id: String,
}

impl HttpSink {
    /// Builds the sink. The caller guarantees a measurement id is present.
    pub fn new(settings: &AnalyticsSettings, measurement_id: String) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            info: CollectInfo {
                endpoint: settings.endpoint().to_string(),
                measurement_id,
                api_secret: settings.api_secret.clone(),
                client_id: settings.client_id().to_string(),
            },
            client: Client::new(),
            events_tx: tx,
            events_rx: rx,
        }
    }
}

#[async_trait]
impl AnalyticsSink for HttpSink {
    fn name(&self) -> &str {
        "ga4"
    }

    async fn send(&mut self, event: TrackEvent) -> Result<()> {
        let tx = self.events_tx.clone();
        let info = self.info.clone();
        let client = self.client.clone();
        tokio::spawn(async move {
            let name = event.name;
            match dispatch_event(info, client, event).await {
                Ok(()) => {
                    let _ = tx.send(DeliveryEvent::Delivered(name));
                }
                Err(err) => {
                    let _ = tx.send(DeliveryEvent::Failed(format!("{name}: {err:#}")));
                }
            }
        });
        Ok(())
    }

    fn poll_event(&mut self) -> Option<DeliveryEvent> {
        self.events_rx.try_recv().ok()
    }
}

/// Collection URL with the measurement credentials as query parameters.
fn collect_url(info: &CollectInfo) -> String {
    let mut url = format!("{}?measurement_id={}", info.endpoint, info.measurement_id);
    if let Some(secret) = &info.api_secret {
        url.push_str("&api_secret=");
        url.push_str(secret);
    }
    url
}

async fn dispatch_event(info: CollectInfo, client: Client, event: TrackEvent) -> Result<()> {
    let payload = models::CollectPayload {
        client_id: &info.client_id,
        events: vec![&event],
    };
    let response = client
        .post(collect_url(&info))
        .json(&payload)
        .send()
        .await
        .context("GA collect call failed")?;

    // The Measurement Protocol answers 2xx for accepted batches.
    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(anyhow!("GA responded {status}: {text}"));
    }
    Ok(())
}

mod models {
    use serde::Serialize;

    use crate::analytics::event::TrackEvent;

    /// Request body of a Measurement Protocol collect call.
    #[derive(Serialize)]
    pub struct CollectPayload<'a> {
        pub client_id: &'a str,
        pub events: Vec<&'a TrackEvent>,
    }
}
