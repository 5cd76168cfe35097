use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};

use super::App;
use crate::analytics::AnalyticsManager;
use crate::catalog::{self, SectionKind};
use crate::config::AppSettings;
use crate::definitions::{HitRegistry, Selection};
use crate::votes::VoteStore;

impl App {
    /// Creates the application state from loaded settings.
    ///
    /// Opens the vote ledger, seeds the per-card counters from it and
    /// bootstraps the analytics sink.
    pub fn new(settings: AppSettings) -> Result<Self> {
        debug!("initializing app, ledger at {}", settings.ledger_path().display());

        let lang = settings.language();
        let votes = VoteStore::open(settings.ledger_path());

        // One read per card at startup; afterwards the displayed counters
        // advance optimistically and only increments touch storage.
        let mut displayed_votes = HashMap::new();
        for item in catalog::menu().all() {
            displayed_votes.insert(item.key, votes.count(item.key));
        }

        let analytics = AnalyticsManager::bootstrap(settings.analytics.clone());
        info!("analytics sink: {}", analytics.sink_name());

        Ok(Self {
            should_quit: false,
            lang,
            selection: Selection::new(SectionKind::Seasonal),
            status_message: lang.ui().footer_hint().to_string(),
            toast: None,
            overlay: None,
            hits: HitRegistry::default(),
            grid_columns: 1,
            scroll_row: 0,
            share_url: settings.share_url().to_string(),
            displayed_votes,
            votes,
            analytics,
            last_tick: Instant::now(),
            tick_rate: Duration::from_millis(250),
        })
    }
}
