use super::{App, Screen};
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Actions every screen and modal handles the same way
        match action {
            Action::ForceQuit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                return false;
            }
            Action::Resize(_w, h) => {
                self.visible_rows = (h as usize).saturating_sub(6);
                return false;
            }
            _ => {}
        }

        // Quit confirmation modal: q confirms, Esc cancels, Ctrl+S saves first
        if self.confirm_quit {
            match action {
                Action::SaveConfig => self.save_config(),
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                _ => {}
            }
            return false;
        }

        // Help overlay swallows everything but its own dismissal
        if self.show_help {
            match action {
                Action::ToggleHelp | Action::NavigateBack => self.show_help = false,
                Action::Quit => self.confirm_quit = true,
                _ => {}
            }
            return false;
        }

        match self.screen {
            Screen::FilePicker => self.handle_file_picker_action(action),
            Screen::Browser => self.handle_browser_action(action),
        }
        false
    }

    fn handle_browser_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::PreviousPaper => {
                if self.paper_shown() && self.browser.go_to_previous() {
                    self.reset_card_view();
                }
            }
            Action::NextPaper => {
                if self.paper_shown() && self.browser.go_to_next() {
                    self.reset_card_view();
                }
            }
            Action::MoveDown => {
                let max = self.cursor_sections().len().saturating_sub(1);
                self.section_cursor = (self.section_cursor + 1).min(max);
                self.follow_cursor = true;
            }
            Action::MoveUp => {
                let max = self.cursor_sections().len().saturating_sub(1);
                self.section_cursor = self.section_cursor.min(max).saturating_sub(1);
                self.follow_cursor = true;
            }
            Action::GoTop => {
                self.section_cursor = 0;
                self.card_scroll = 0;
                self.follow_cursor = true;
            }
            Action::GoBottom => {
                self.section_cursor = self.cursor_sections().len().saturating_sub(1);
                self.follow_cursor = true;
            }
            Action::ToggleSection | Action::DrillIn => {
                if let Some(section) = self.cursor_section() {
                    self.browser.toggle_section(section);
                    self.follow_cursor = true;
                }
            }
            Action::ScrollDown => {
                self.card_scroll = self.card_scroll.saturating_add(1);
                self.follow_cursor = false;
            }
            Action::ScrollUp => {
                self.card_scroll = self.card_scroll.saturating_sub(1);
                self.follow_cursor = false;
            }
            Action::PageDown => {
                let page = self.visible_rows.max(1) as u16;
                self.card_scroll = self.card_scroll.saturating_add(page);
                self.follow_cursor = false;
            }
            Action::PageUp => {
                let page = self.visible_rows.max(1) as u16;
                self.card_scroll = self.card_scroll.saturating_sub(page);
                self.follow_cursor = false;
            }
            Action::ToggleTheme => self.toggle_theme(),
            Action::OpenFilePicker => {
                self.file_picker.refresh_entries();
                self.screen = Screen::FilePicker;
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::SaveConfig => self.save_config(),
            _ => {}
        }
    }

    pub(super) fn toggle_theme(&mut self) {
        let mode = self.browser.toggle_dark_mode();
        self.config_state.theme = mode;
        self.config_state.dirty = true;
        tracing::debug!(theme = mode.name(), "theme toggled");
    }
}
