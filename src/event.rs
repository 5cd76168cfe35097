use crossterm::event::{Event as CrosstermEvent, KeyEvent, MouseEvent};

/// Application events fed to the main loop.
#[derive(Debug)]
pub enum Event {
    /// Periodic housekeeping pulse.
    Tick,
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal resized; the card grid reflows on the next draw.
    Resize,
}

impl Event {
    /// Maps a terminal event to an application event, dropping the kinds the
    /// storefront does not care about (focus changes, bracketed paste).
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) => Some(Event::Key(key)),
            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
            CrosstermEvent::Resize(..) => Some(Event::Resize),
            _ => None,
        }
    }
}
