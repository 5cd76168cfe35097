use log::debug;

use super::{App, OverlayState};
use crate::analytics::TrackEvent;
use crate::catalog::SectionKind;
use crate::definitions::{Selection, Toast};
use crate::i18n::{self, Field, Lang};

/// Everything the UI can ask the app to do, from any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Vote for the selected card.
    Vote,
    /// Show the order-at-the-counter notice for the selected card.
    View,
    /// Share the storefront link.
    Share,
    CycleLanguage,
    SetLanguage(Lang),
    FocusSection(SectionKind),
    SelectCard(SectionKind, usize),
    Quit,
}

impl App {
    /// The single source of truth for executing a `CommandAction`.
    pub(crate) async fn execute_action(&mut self, action: CommandAction) {
        debug!("executing action {:?}", action);
        match action {
            CommandAction::Vote => self.perform_vote().await,
            CommandAction::View => self.perform_view().await,
            CommandAction::Share => self.perform_share().await,
            CommandAction::CycleLanguage => self.set_language(self.lang.next()).await,
            CommandAction::SetLanguage(lang) => self.set_language(lang).await,
            CommandAction::FocusSection(section) => self.focus_section(section).await,
            CommandAction::SelectCard(section, index) => {
                self.selection = Selection { section, index };
            }
            CommandAction::Quit => self.should_quit = true,
        }
    }

    async fn perform_vote(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let key = item.key;

        // Optimistic: the visible counter advances before persistence runs
        // and regardless of its outcome.
        let shown = {
            let count = self.displayed_votes.entry(key).or_insert(0);
            *count += 1;
            *count
        };
        let persisted = self.votes.increment(key);
        if persisted != shown {
            debug!("vote counters diverged for {key}: shown {shown}, persisted {persisted}");
        }

        let name = i18n::resolve(item, Field::Name, self.lang);
        self.status_message = format!("{} {} 👍 {}", self.lang.ui().vote_label(), name, shown);
        self.analytics
            .track(
                TrackEvent::new("vote")
                    .with("item_key", key)
                    .with("lang", self.lang.code()),
            )
            .await;
    }

    async fn perform_view(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        self.overlay = Some(OverlayState::OrderNotice);
        self.analytics
            .track(
                TrackEvent::new("view_click")
                    .with("item_key", item.key)
                    .with("lang", self.lang.code()),
            )
            .await;
    }

    async fn perform_share(&mut self) {
        self.analytics
            .track(TrackEvent::new("share_click").with("lang", self.lang.code()))
            .await;
        // No share sheet in a terminal: surface the link in a toast with the
        // localized confirmation, like the page's clipboard fallback.
        self.toast = Some(Toast::new(format!(
            "{} — {}",
            self.lang.ui().copied(),
            self.share_url
        )));
        self.analytics.track(TrackEvent::new("share_copy_link")).await;
    }

    async fn set_language(&mut self, lang: Lang) {
        self.lang = lang;
        self.status_message = lang.ui().footer_hint().to_string();
        self.analytics
            .track(TrackEvent::new("lang_change").with("to", lang.code()))
            .await;
    }

    async fn focus_section(&mut self, section: SectionKind) {
        self.analytics
            .track(
                TrackEvent::new("nav_click")
                    .with("target", section.target())
                    .with("lang", self.lang.code()),
            )
            .await;
        if self.selection.section != section {
            self.selection = Selection::new(section);
            self.scroll_row = 0;
        }
    }
}

#[cfg(test)]
mod tests {
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

    #[tokio::test]
    async fn voting_advances_displayed_and_persisted_counts() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut app = test_app(&dir);

        // Startup selection is the first seasonal card.
        assert_eq!(app.selected_item().map(|item| item.key), Some("matcha"));
        assert_eq!(app.displayed_count("matcha"), 0);

        app.execute_action(CommandAction::Vote).await;
        app.execute_action(CommandAction::Vote).await;
        assert_eq!(app.displayed_count("matcha"), 2);
        assert_eq!(app.votes.count("matcha"), 2);
        assert_eq!(app.votes.count("plain"), 0);
    }

    #[tokio::test]
    async fn persisted_counts_are_picked_up_on_restart() {
        let dir = TempDir::new().expect("tempdir should create");
        {
            let mut app = test_app(&dir);
            app.execute_action(CommandAction::Vote).await;
        }
        let app = test_app(&dir);
        assert_eq!(app.displayed_count("matcha"), 1);
    }

    #[tokio::test]
    async fn language_switch_relocalizes_the_status_hint() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut app = test_app(&dir);
        assert_eq!(app.lang, Lang::Jp);

        app.execute_action(CommandAction::SetLanguage(Lang::Kr)).await;
        assert_eq!(app.lang, Lang::Kr);
        assert_eq!(app.status_message, Lang::Kr.ui().footer_hint());

        app.execute_action(CommandAction::CycleLanguage).await;
        assert_eq!(app.lang, Lang::Jp);
    }

    #[tokio::test]
    async fn share_raises_a_toast_with_the_link() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut app = test_app(&dir);
        app.execute_action(CommandAction::Share).await;
        let toast = app.toast.as_ref().expect("share should raise a toast");
        assert!(toast.message.contains(&app.share_url));
    }

    #[tokio::test]
    async fn view_opens_the_order_notice() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut app = test_app(&dir);
        app.execute_action(CommandAction::View).await;
        assert_eq!(app.overlay, Some(OverlayState::OrderNotice));
    }

    #[tokio::test]
    async fn section_focus_resets_the_cursor() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut app = test_app(&dir);
        app.execute_action(CommandAction::SelectCard(SectionKind::Classic, 3))
            .await;
        app.execute_action(CommandAction::FocusSection(SectionKind::Seasonal))
            .await;
        assert_eq!(app.selection, Selection::new(SectionKind::Seasonal));
    }
}
