//! Concrete analytics sinks.
//!
//! Each submodule implements [`AnalyticsSink`] for one delivery mechanism;
//! the manager picks one at startup and the rest of the app only ever sees
//! the trait.

/// `http` module: GA4 Measurement Protocol delivery over HTTPS.
pub mod http;
/// `log` module: local-log delivery, used when no measurement id is set.
pub mod log;

use anyhow::Result;
use async_trait::async_trait;

use crate::analytics::event::TrackEvent;
use crate::analytics::manager::DeliveryEvent;

/// Behavior every analytics sink provides.
///
/// `send` must hand the event off without blocking on network I/O —
/// implementations spawn their real work and report back through
/// `poll_event`, which the app drains on tick.
#[async_trait]
pub trait AnalyticsSink: Send {
    /// Sink name for logs.
    fn name(&self) -> &str;

    /// Accepts an event for delivery. A returned error means the sink could
    /// not even queue the event; it never reflects delivery failure.
    async fn send(&mut self, event: TrackEvent) -> Result<()>;

    /// Non-blocking poll for a delivery result, `None` when idle.
    fn poll_event(&mut self) -> Option<DeliveryEvent>;
}
