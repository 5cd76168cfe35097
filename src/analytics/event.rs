//! The tracked-event value shared by every sink.

use std::collections::BTreeMap;

use serde::Serialize;

/// One tracked interaction: an event name and flat string parameters,
/// matching the storefront's event vocabulary (`vote`, `lang_change`,
/// `nav_click`, `share_click`, `share_copy_link`, `view_click`).
#[derive(Debug, Clone, Serialize)]
pub struct TrackEvent {
    pub name: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<&'static str, String>,
}

impl TrackEvent {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: BTreeMap::new(),
        }
    }

    /// Adds one parameter, builder style.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.insert(key, value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_parameters() {
        let event = TrackEvent::new("vote")
            .with("item_key", "matcha")
            .with("lang", "JP");
        assert_eq!(event.name, "vote");
        assert_eq!(event.params.get("item_key").map(String::as_str), Some("matcha"));
        assert_eq!(event.params.get("lang").map(String::as_str), Some("JP"));
    }

    #[test]
    fn empty_params_are_omitted_from_json() {
        let json = serde_json::to_string(&TrackEvent::new("share_click"))
            .expect("event should serialize");
        assert_eq!(json, r#"{"name":"share_click"}"#);
    }
}
