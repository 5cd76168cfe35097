use log::{debug, warn};

use super::App;
use crate::analytics::DeliveryEvent;

// Implementation block for tick-related logic in the App.
impl App {
    /// Called on every tick of the application loop.
    ///
    /// Expires the toast and drains analytics delivery results into the
    /// log — delivery is best-effort and never becomes UI state.
    pub(crate) fn on_tick(&mut self) {
        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = std::time::Instant::now();
        }

        if let Some(toast) = &self.toast
            && toast.expired()
        {
            self.toast = None;
        }

        while let Some(event) = self.analytics.poll_event() {
            match event {
                DeliveryEvent::Delivered(name) => debug!("analytics delivered {name}"),
                DeliveryEvent::Failed(message) => warn!("analytics delivery failed: {message}"),
            }
        }
    }
}
