use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use log::debug;

use super::{App, CommandAction};
use crate::definitions::HitTarget;

impl App {
    /// Routes a mouse event through the hit areas registered by the last
    /// render pass.
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        // Any click dismisses an open notice.
        if self.overlay.is_some() {
            self.overlay = None;
            return;
        }

        let Some(target) = self.hits.hit_test(mouse.column, mouse.row) else {
            return;
        };
        debug!("mouse hit {:?}", target);

        match target {
            HitTarget::Nav(section) => {
                self.execute_action(CommandAction::FocusSection(section)).await;
            }
            HitTarget::LangButton(lang) => {
                self.execute_action(CommandAction::SetLanguage(lang)).await;
            }
            HitTarget::Share => {
                self.execute_action(CommandAction::Share).await;
            }
            HitTarget::Card(section, index) => {
                self.execute_action(CommandAction::SelectCard(section, index)).await;
            }
            HitTarget::VoteButton(section, index) => {
                self.execute_action(CommandAction::SelectCard(section, index)).await;
                self.execute_action(CommandAction::Vote).await;
            }
            HitTarget::ViewButton(section, index) => {
                self.execute_action(CommandAction::SelectCard(section, index)).await;
                self.execute_action(CommandAction::View).await;
            }
        }
    }
}
