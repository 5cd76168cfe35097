use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, CommandAction};
use crate::catalog::SectionKind;
use crate::i18n::Lang;

impl App {
    /// The main entry point for handling keyboard events.
    ///
    /// Routes the key to the overlay when one is open, then to the global
    /// shortcuts, then to card navigation.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Overlays capture all input.
        if self.overlay.is_some() {
            self.handle_overlay_key(key);
            return;
        }

        if self.handle_global_shortcuts(key).await {
            return;
        }

        self.handle_card_key(key).await;
    }

    /// Any dismissal key closes the notice; everything else is swallowed.
    fn handle_overlay_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('o') => {
                self.overlay = None;
            }
            _ => {}
        }
    }

    /// Handles global shortcuts. Returns `true` if the key was handled.
    async fn handle_global_shortcuts(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            // Ctrl+C / Ctrl+Q / q: quit
            (KeyCode::Char('c') | KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.execute_action(CommandAction::Quit).await;
            }
            (KeyCode::Char('q'), _) => {
                self.execute_action(CommandAction::Quit).await;
            }
            // s: share
            (KeyCode::Char('s'), _) => {
                self.execute_action(CommandAction::Share).await;
            }
            // l cycles the language, 1-4 pick one directly.
            (KeyCode::Char('l'), _) => {
                self.execute_action(CommandAction::CycleLanguage).await;
            }
            (KeyCode::Char('1'), _) => {
                self.execute_action(CommandAction::SetLanguage(Lang::Jp)).await;
            }
            (KeyCode::Char('2'), _) => {
                self.execute_action(CommandAction::SetLanguage(Lang::En)).await;
            }
            (KeyCode::Char('3'), _) => {
                self.execute_action(CommandAction::SetLanguage(Lang::Cn)).await;
            }
            (KeyCode::Char('4'), _) => {
                self.execute_action(CommandAction::SetLanguage(Lang::Kr)).await;
            }
            // Tab: jump to the other menu section
            (KeyCode::Tab, _) => {
                let other = match self.active_section() {
                    SectionKind::Seasonal => SectionKind::Classic,
                    SectionKind::Classic => SectionKind::Seasonal,
                };
                self.execute_action(CommandAction::FocusSection(other)).await;
            }
            _ => return false,
        }
        true
    }

    /// Handles selection movement and the per-card actions.
    async fn handle_card_key(&mut self, key: KeyEvent) {
        let columns = self.grid_columns.max(1) as isize;
        match key.code {
            KeyCode::Left => self.move_selection(-1),
            KeyCode::Right => self.move_selection(1),
            KeyCode::Up => self.move_selection(-columns),
            KeyCode::Down => self.move_selection(columns),
            KeyCode::Home => self.selection.index = 0,
            KeyCode::End => {
                let len = self.catalog().section(self.selection.section).len();
                self.selection.index = len.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char('v') => {
                self.execute_action(CommandAction::Vote).await;
            }
            KeyCode::Char('o') => {
                self.execute_action(CommandAction::View).await;
            }
            _ => {}
        }
    }

    /// Moves the card cursor within the active section, clamped at both ends.
    fn move_selection(&mut self, delta: isize) {
        let len = self.catalog().section(self.selection.section).len();
        if len == 0 {
            return;
        }
        let next = (self.selection.index as isize + delta).clamp(0, len as isize - 1);
        self.selection.index = next as usize;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use tempfile::TempDir;

    use super::*;
    use crate::config::AppSettings;

    fn test_app(dir: &TempDir) -> App {
        let settings = AppSettings {
            data_dir: Some(dir.path().to_path_buf()),
            ..AppSettings::default()
        };
        App::new(settings).expect("app should initialize")
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[tokio::test]
    async fn arrows_clamp_at_section_bounds() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut app = test_app(&dir);
        app.execute_action(CommandAction::SelectCard(SectionKind::Classic, 0))
            .await;
        app.grid_columns = 3;

        app.handle_key(press(KeyCode::Left)).await;
        assert_eq!(app.selection.index, 0);

        app.handle_key(press(KeyCode::Down)).await;
        assert_eq!(app.selection.index, 3);

        app.handle_key(press(KeyCode::End)).await;
        assert_eq!(app.selection.index, 7);
        app.handle_key(press(KeyCode::Right)).await;
        assert_eq!(app.selection.index, 7);
    }

    #[tokio::test]
    async fn tab_toggles_sections() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut app = test_app(&dir);
        assert_eq!(app.active_section(), SectionKind::Seasonal);
        app.handle_key(press(KeyCode::Tab)).await;
        assert_eq!(app.active_section(), SectionKind::Classic);
        app.handle_key(press(KeyCode::Tab)).await;
        assert_eq!(app.active_section(), SectionKind::Seasonal);
    }

    #[tokio::test]
    async fn enter_votes_for_the_selected_card() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut app = test_app(&dir);
        app.handle_key(press(KeyCode::Enter)).await;
        assert_eq!(app.displayed_count("matcha"), 1);
    }

    #[tokio::test]
    async fn overlay_swallows_navigation_and_closes_on_escape() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut app = test_app(&dir);
        app.handle_key(press(KeyCode::Char('o'))).await;
        assert!(app.overlay.is_some());

        // Navigation is captured while the notice is open.
        app.handle_key(press(KeyCode::Right)).await;
        assert_eq!(app.selection.index, 0);

        app.handle_key(press(KeyCode::Esc)).await;
        assert!(app.overlay.is_none());
    }

    #[tokio::test]
    async fn q_quits() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut app = test_app(&dir);
        app.handle_key(press(KeyCode::Char('q'))).await;
        assert!(app.should_quit);
    }
}
