use super::{App, Screen};
use crate::action::Action;

impl App {
    /// Handle input while on the file picker screen.
    pub(super) fn handle_file_picker_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::NavigateBack => {
                self.screen = Screen::Browser;
            }
            Action::MoveDown => {
                let max = self.file_picker.entries.len().saturating_sub(1);
                if self.file_picker.cursor < max {
                    self.file_picker.cursor += 1;
                }
            }
            Action::MoveUp => {
                self.file_picker.cursor = self.file_picker.cursor.saturating_sub(1);
            }
            Action::PageDown => {
                let page = self.visible_rows.max(1);
                let max = self.file_picker.entries.len().saturating_sub(1);
                self.file_picker.cursor = (self.file_picker.cursor + page).min(max);
            }
            Action::PageUp => {
                let page = self.visible_rows.max(1);
                self.file_picker.cursor = self.file_picker.cursor.saturating_sub(page);
            }
            Action::GoTop => {
                self.file_picker.cursor = 0;
            }
            Action::GoBottom => {
                self.file_picker.cursor = self.file_picker.entries.len().saturating_sub(1);
            }
            Action::DrillIn | Action::ToggleSection => {
                // Enter on a directory opens it, on a .json file loads it
                let Some(entry) = self.file_picker.selected().cloned() else {
                    return;
                };
                if entry.is_dir {
                    self.file_picker.enter_directory();
                } else if entry.is_json {
                    if self.config_state.start_dir.as_ref() != Some(&self.file_picker.current_dir)
                    {
                        self.config_state.start_dir = Some(self.file_picker.current_dir.clone());
                        self.config_state.dirty = true;
                    }
                    self.start_load(entry.path);
                }
            }
            Action::ToggleTheme => self.toggle_theme(),
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::SaveConfig => self.save_config(),
            _ => {}
        }
    }
}
