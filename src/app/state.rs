//! Defines the core state structures for the application.
//!
//! The central `App` struct is the single source of truth: the render pass
//! reads it (and registers hit areas back into it), the input handlers
//! mutate it.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::analytics::AnalyticsManager;
use crate::catalog::{self, Catalog, MenuItem, SectionKind};
use crate::definitions::{HitRegistry, Selection, Toast};
use crate::i18n::Lang;
use crate::votes::VoteStore;

/// The main application state.
pub struct App {
    /// Flag to indicate the application should quit.
    pub should_quit: bool,
    /// The active language. Exactly one at any time; every content lookup
    /// is parameterized by it.
    pub lang: Lang,
    /// The card the cursor is on. Its section is also the one displayed.
    pub selection: Selection,
    /// The message currently displayed in the status bar.
    pub status_message: String,
    /// Transient bottom-right notification, if any.
    pub toast: Option<Toast>,
    /// The currently active overlay, if any.
    pub overlay: Option<OverlayState>,
    /// Mouse hit areas, rebuilt by every render pass.
    pub hits: HitRegistry,
    /// Card columns of the current grid. Written by the render pass, read
    /// by vertical keyboard navigation.
    pub grid_columns: usize,
    /// First visible card row of the active section; the render pass keeps
    /// the selection inside the window.
    pub scroll_row: usize,
    /// URL offered by the share action.
    pub share_url: String,
    /// Optimistic per-item counters shown on the cards. Seeded from the
    /// persisted ledger at startup and advanced on every vote regardless of
    /// whether the persist succeeds (see DESIGN.md).
    pub displayed_votes: HashMap<&'static str, u64>,

    // --- Collaborators ---
    pub(crate) votes: VoteStore,
    pub(crate) analytics: AnalyticsManager,

    // --- Internal ---
    pub(crate) last_tick: Instant,
    pub(crate) tick_rate: Duration,
}

/// Modal overlays drawn above the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// The "please order at the counter" notice behind the view action.
    OrderNotice,
}

impl App {
    pub fn catalog(&self) -> &'static Catalog {
        catalog::menu()
    }

    pub fn active_section(&self) -> SectionKind {
        self.selection.section
    }

    /// The item under the cursor, if the section is non-empty.
    pub fn selected_item(&self) -> Option<&'static MenuItem> {
        self.catalog()
            .section(self.selection.section)
            .get(self.selection.index)
    }

    /// The optimistic counter rendered on a card.
    pub fn displayed_count(&self, key: &str) -> u64 {
        self.displayed_votes.get(key).copied().unwrap_or(0)
    }
}
