//! Fire-and-forget analytics for storefront interactions.
//!
//! Voting, language switches, navigation and shares each emit a
//! [`TrackEvent`]. Delivery is best-effort by contract: handing an event to
//! the active sink never blocks the interaction that produced it and never
//! surfaces a failure to the viewer — delivery results flow back over a
//! channel and end up in the log.

/// `config` module: the `[analytics]` settings section and its environment
/// fallback.
pub mod config;

/// `event` module: the tracked-event value handed to sinks.
pub mod event;

/// `manager` module: sink selection at startup and the fire-and-forget
/// `track` entry point.
pub mod manager;

/// `providers` module: concrete sink implementations (GA4 over HTTP, log).
pub mod providers;

pub use config::AnalyticsSettings;
pub use event::TrackEvent;
pub use manager::{AnalyticsManager, DeliveryEvent};
