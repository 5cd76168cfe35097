//! Shared UI types: card selection, mouse hit-testing and toasts.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::catalog::SectionKind;
use crate::i18n::Lang;

/// The card the keyboard cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub section: SectionKind,
    pub index: usize,
}

impl Selection {
    pub fn new(section: SectionKind) -> Self {
        Self { section, index: 0 }
    }
}

/// Everything the mouse can land on. Areas are registered while rendering
/// and hit-tested when a click arrives, so the handler never re-derives
/// layout math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Nav(SectionKind),
    LangButton(Lang),
    Share,
    Card(SectionKind, usize),
    VoteButton(SectionKind, usize),
    ViewButton(SectionKind, usize),
}

#[derive(Debug, Default)]
pub struct HitRegistry {
    entries: Vec<(HitTarget, Rect)>,
}

impl HitRegistry {
    /// Dropped and rebuilt at the start of every render pass.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn register(&mut self, target: HitTarget, area: Rect) {
        self.entries.push((target, area));
    }

    /// Topmost target under the cursor; later registrations win so widgets
    /// drawn on top of a card (its vote pill) shadow the card itself.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.entries
            .iter()
            .rev()
            .find(|(_, rect)| rect_contains(rect, column, row))
            .map(|(target, _)| *target)
    }
}

/// Transient bottom-right notification, the terminal counterpart of the
/// page's "link copied" chip.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    expires_at: Instant,
}

/// Toast lifetime, matching the page's 1.6 s copied-state timeout.
pub const TOAST_TTL: Duration = Duration::from_millis(1600);

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

pub fn rect_contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_prefers_later_registrations() {
        let mut hits = HitRegistry::default();
        let card = Rect::new(0, 0, 30, 5);
        let pill = Rect::new(20, 1, 8, 1);
        hits.register(HitTarget::Card(SectionKind::Classic, 0), card);
        hits.register(HitTarget::VoteButton(SectionKind::Classic, 0), pill);

        assert_eq!(
            hits.hit_test(21, 1),
            Some(HitTarget::VoteButton(SectionKind::Classic, 0))
        );
        assert_eq!(
            hits.hit_test(2, 3),
            Some(HitTarget::Card(SectionKind::Classic, 0))
        );
        assert_eq!(hits.hit_test(50, 0), None);
    }
}
