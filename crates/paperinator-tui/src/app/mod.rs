mod loading;
mod update;
mod update_file_picker;

use std::path::{Path, PathBuf};

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tokio::sync::mpsc;
use unicode_width::UnicodeWidthStr;

use paperinator_core::{Content, PaperBrowser, Section};

use crate::config_file;
use crate::model::config::ConfigState;
use crate::theme::Theme;
use crate::tui_event::LoadEvent;

/// Which screen is currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Browser,
    FilePicker,
}

/// State for the file picker screen.
#[derive(Debug, Clone)]
pub struct FilePickerState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory (dirs first, then files).
    pub entries: Vec<FileEntry>,
    /// Cursor position in the entries list.
    pub cursor: usize,
}

/// A single entry in the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_json: bool,
}

impl FilePickerState {
    pub fn new(start_dir: PathBuf) -> Self {
        let mut state = Self {
            current_dir: start_dir,
            entries: Vec::new(),
            cursor: 0,
        };
        state.refresh_entries();
        state
    }

    /// Refresh the entries list from the current directory.
    pub fn refresh_entries(&mut self) {
        let mut entries = Vec::new();

        // Parent directory entry
        if let Some(parent) = self.current_dir.parent() {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
                is_json: false,
            });
        }

        match std::fs::read_dir(&self.current_dir) {
            Ok(read_dir) => {
                let mut dirs = Vec::new();
                let mut files = Vec::new();

                for entry in read_dir.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().to_string();

                    // Skip hidden files/dirs
                    if name.starts_with('.') {
                        continue;
                    }

                    if path.is_dir() {
                        dirs.push(FileEntry {
                            name,
                            path,
                            is_dir: true,
                            is_json: false,
                        });
                    } else {
                        let is_json = path
                            .extension()
                            .and_then(|e| e.to_str())
                            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
                        files.push(FileEntry {
                            name,
                            path,
                            is_dir: false,
                            is_json,
                        });
                    }
                }

                dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

                entries.extend(dirs);
                entries.extend(files);
            }
            Err(e) => {
                tracing::warn!(dir = %self.current_dir.display(), error = %e, "cannot list directory");
            }
        }

        self.entries = entries;
        self.cursor = 0;
    }

    pub fn selected(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    /// Enter the directory at cursor, or return false if not a directory.
    pub fn enter_directory(&mut self) -> bool {
        if let Some(entry) = self.entries.get(self.cursor)
            && entry.is_dir
        {
            self.current_dir = entry.path.clone();
            self.refresh_entries();
            return true;
        }
        false
    }
}

/// Main application state.
pub struct App {
    pub screen: Screen,
    pub browser: PaperBrowser,
    /// Index into the visible section headers of the current paper.
    pub section_cursor: usize,
    /// First row of the paper card shown.
    pub card_scroll: u16,
    /// Scroll so the section cursor stays on screen (cleared by manual scrolling).
    pub follow_cursor: bool,
    /// Height of the visible card area (set on resize/render, used for paging).
    pub visible_rows: usize,
    pub tick: usize,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    /// One-line message shown in the footer until the next load or save.
    pub status: Option<String>,
    /// File the displayed collection came from.
    pub loaded_path: Option<PathBuf>,
    /// File whose read is in flight.
    pub pending_path: Option<PathBuf>,
    pub file_picker: FilePickerState,
    pub config_state: ConfigState,
    /// Where Ctrl+S writes the config.
    pub config_path: Option<PathBuf>,
    /// Channel read completions are sent on; `None` when no runtime is driving reads.
    pub load_tx: Option<mpsc::UnboundedSender<LoadEvent>>,
}

impl App {
    pub fn new(config_state: ConfigState) -> Self {
        let start_dir = config_state
            .start_dir
            .clone()
            .filter(|d| d.is_dir())
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            screen: Screen::Browser,
            browser: PaperBrowser::new(config_state.theme),
            section_cursor: 0,
            card_scroll: 0,
            follow_cursor: true,
            visible_rows: 20,
            tick: 0,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            status: None,
            loaded_path: None,
            pending_path: None,
            file_picker: FilePickerState::new(start_dir),
            config_state,
            config_path: config_file::config_path(),
            load_tx: None,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.browser.theme())
    }

    /// Whether a paper (rather than loading/error/empty) is on screen.
    pub fn paper_shown(&self) -> bool {
        matches!(self.browser.content(), Content::Paper { .. })
    }

    /// Section headers the cursor can land on. A collapsed card only shows its
    /// title, so only `Root` is reachable then.
    pub fn cursor_sections(&self) -> Vec<Section> {
        match self.browser.content() {
            Content::Paper { paper, .. } => {
                if self.browser.is_expanded(Section::Root) {
                    Section::visible_for(paper)
                } else {
                    vec![Section::Root]
                }
            }
            _ => Vec::new(),
        }
    }

    /// Section under the cursor, clamped to what is visible.
    pub fn cursor_section(&self) -> Option<Section> {
        let sections = self.cursor_sections();
        let last = sections.len().checked_sub(1)?;
        sections.get(self.section_cursor.min(last)).copied()
    }

    /// Back to the top of a freshly shown paper.
    pub(super) fn reset_card_view(&mut self) {
        self.section_cursor = 0;
        self.card_scroll = 0;
        self.follow_cursor = true;
    }

    /// Persist theme and picker directory to the config file.
    pub(super) fn save_config(&mut self) {
        self.config_state.theme = self.browser.theme();
        self.config_state.start_dir = Some(self.file_picker.current_dir.clone());

        let Some(path) = self.config_path.clone() else {
            self.status = Some("Could not determine config directory".to_string());
            return;
        };
        let file_cfg = config_file::from_config_state(&self.config_state);
        match config_file::save_config(&file_cfg, &path) {
            Ok(saved) => {
                tracing::info!(path = %saved.display(), "config saved");
                self.config_state.dirty = false;
                self.status = Some(format!("Config saved to {}", saved.display()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "config save failed");
                self.status = Some(e);
            }
        }
    }

    /// Name shown for a file in the header and status line.
    fn short_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }

    /// Top bar: app title on the left, loaded file and theme glyph on the right.
    fn build_header(&self, theme: &Theme, width: u16) -> Line<'static> {
        let title = " PAPERINATOR ";
        let subtitle = " Academic Paper Viewer";
        let file = self
            .pending_path
            .as_deref()
            .or(self.loaded_path.as_deref())
            .map(Self::short_name)
            .unwrap_or_default();
        let right = format!("{}  {} ", file, theme.mode_glyph());

        let used = title.width() + subtitle.width() + right.width();
        let pad = (width as usize).saturating_sub(used);

        Line::from(vec![
            Span::styled(title, theme.header_style()),
            Span::styled(
                subtitle,
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(pad)),
            Span::styled(right, Style::default().fg(theme.mode_icon)),
        ])
    }

    /// Render the current screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let theme = self.theme();
        let area = f.area();
        f.render_widget(Block::default().style(theme.background_style()), area);

        if area.height < 3 {
            return;
        }

        let header_area = Rect { height: 1, ..area };
        let footer_area = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        let body_area = Rect {
            y: area.y + 1,
            height: area.height - 2,
            ..area
        };

        f.render_widget(
            Paragraph::new(self.build_header(&theme, area.width)),
            header_area,
        );

        match self.screen {
            Screen::Browser => {
                crate::view::browser::render_in(f, self, &theme, body_area, footer_area)
            }
            Screen::FilePicker => {
                crate::view::file_picker::render_in(f, self, &theme, body_area, footer_area)
            }
        }

        if let Some(status) = &self.status {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("{} ", status),
                    Style::default().fg(theme.accent),
                )))
                .alignment(Alignment::Right),
                footer_area,
            );
        }

        if self.show_help {
            crate::view::help::render(f, &theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &theme, self.config_state.dirty);
        }
    }
}

#[cfg(test)]
mod tests;
