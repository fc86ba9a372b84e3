use super::*;
use crate::action::Action;
use paperinator_core::{PARSE_ERROR_MESSAGE, Paper, READ_ERROR_MESSAGE, ThemeMode};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tempfile::TempDir;

/// App rooted in a scratch directory, with config saves going there too.
fn test_app() -> (App, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let state = ConfigState {
        start_dir: Some(dir.path().to_path_buf()),
        ..ConfigState::default()
    };
    let mut app = App::new(state);
    app.config_path = Some(dir.path().join("config").join("config.toml"));
    (app, dir)
}

fn paper(title: &str) -> Paper {
    Paper {
        title: title.to_string(),
        authors: vec!["A. Author".to_string()],
        ..Paper::default()
    }
}

fn with_papers(app: &mut App, n: usize) {
    let papers = (0..n).map(|i| paper(&format!("Paper {}", i))).collect();
    app.browser.replace_collection(papers);
}

fn screen_text(app: &mut App) -> String {
    screen_text_sized(app, 80, 30)
}

fn screen_text_sized(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.view(f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

// ── Startup ─────────────────────────────────────────────────────

#[test]
fn starts_on_empty_browser() {
    let (app, _dir) = test_app();
    assert_eq!(app.screen, Screen::Browser);
    assert!(!app.paper_shown());
    assert!(app.cursor_sections().is_empty());
    assert_eq!(app.cursor_section(), None);
}

#[test]
fn configured_theme_reaches_browser() {
    let state = ConfigState {
        theme: ThemeMode::Dark,
        ..ConfigState::default()
    };
    let app = App::new(state);
    assert_eq!(app.browser.theme(), ThemeMode::Dark);
    assert_eq!(app.theme().mode, ThemeMode::Dark);
}

// ── Paper navigation ────────────────────────────────────────────

#[test]
fn next_and_previous_stay_in_bounds() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 3);

    app.update(Action::PreviousPaper);
    assert_eq!(app.browser.index(), 0);

    app.update(Action::NextPaper);
    app.update(Action::NextPaper);
    app.update(Action::NextPaper);
    assert_eq!(app.browser.index(), 2);

    app.update(Action::PreviousPaper);
    assert_eq!(app.browser.index(), 1);
}

#[test]
fn navigation_resets_cursor_scroll_and_sections() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 2);

    app.update(Action::MoveDown);
    app.update(Action::ToggleSection);
    assert!(app.browser.is_expanded(Section::Authors));
    app.update(Action::ScrollDown);
    assert_eq!(app.card_scroll, 1);

    app.update(Action::NextPaper);
    assert_eq!(app.section_cursor, 0);
    assert_eq!(app.card_scroll, 0);
    assert!(app.follow_cursor);
    assert!(!app.browser.is_expanded(Section::Authors));
    assert!(app.browser.is_expanded(Section::Root));
}

#[test]
fn navigation_ignored_while_error_shown() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 3);
    app.browser.begin_load();
    let _ = app.browser.finish_load(Ok("{ nope".to_string()));
    assert!(!app.paper_shown());

    app.update(Action::NextPaper);
    assert_eq!(app.browser.index(), 0);
}

// ── Section cursor ──────────────────────────────────────────────

#[test]
fn cursor_walks_visible_sections_and_clamps() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 1);
    let visible = app.cursor_sections();
    assert_eq!(visible.first(), Some(&Section::Root));
    // No recommendations or research questions on the sample paper
    assert!(!visible.contains(&Section::Recommendations));

    app.update(Action::MoveUp);
    assert_eq!(app.cursor_section(), Some(Section::Root));

    for _ in 0..50 {
        app.update(Action::MoveDown);
    }
    assert_eq!(app.cursor_section(), visible.last().copied());

    app.update(Action::GoTop);
    assert_eq!(app.cursor_section(), Some(Section::Root));
    app.update(Action::GoBottom);
    assert_eq!(app.cursor_section(), Some(Section::FutureWork));
}

#[test]
fn toggle_acts_on_section_under_cursor_only() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 1);

    app.update(Action::MoveDown);
    app.update(Action::MoveDown);
    assert_eq!(app.cursor_section(), Some(Section::Keywords));
    app.update(Action::DrillIn);
    assert!(app.browser.is_expanded(Section::Keywords));
    assert!(!app.browser.is_expanded(Section::Authors));

    app.update(Action::ToggleSection);
    assert!(!app.browser.is_expanded(Section::Keywords));
}

#[test]
fn collapsed_root_limits_cursor_to_title() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 1);

    app.update(Action::ToggleSection);
    assert!(!app.browser.is_expanded(Section::Root));
    assert_eq!(app.cursor_sections(), vec![Section::Root]);

    app.update(Action::MoveDown);
    assert_eq!(app.cursor_section(), Some(Section::Root));
}

#[test]
fn manual_scroll_stops_following_cursor() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 1);
    app.visible_rows = 10;

    app.update(Action::PageDown);
    assert_eq!(app.card_scroll, 10);
    assert!(!app.follow_cursor);

    app.update(Action::PageUp);
    app.update(Action::ScrollUp);
    assert_eq!(app.card_scroll, 0);

    app.update(Action::MoveDown);
    assert!(app.follow_cursor);
}

// ── Theme ───────────────────────────────────────────────────────

#[test]
fn theme_toggle_marks_config_dirty() {
    let (mut app, _dir) = test_app();
    assert_eq!(app.browser.theme(), ThemeMode::Light);

    app.update(Action::ToggleTheme);
    assert_eq!(app.browser.theme(), ThemeMode::Dark);
    assert_eq!(app.config_state.theme, ThemeMode::Dark);
    assert!(app.config_state.dirty);

    app.update(Action::ToggleTheme);
    assert_eq!(app.browser.theme(), ThemeMode::Light);
}

#[test]
fn theme_toggle_keeps_collection_and_position() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 3);
    app.update(Action::NextPaper);
    app.update(Action::MoveDown);
    app.update(Action::ToggleSection);

    app.update(Action::ToggleTheme);
    assert_eq!(app.browser.index(), 1);
    assert!(app.browser.is_expanded(Section::Authors));
    assert_eq!(app.browser.len(), 3);
}

// ── Modals ──────────────────────────────────────────────────────

#[test]
fn quit_requires_confirmation() {
    let (mut app, _dir) = test_app();

    assert!(!app.update(Action::Quit));
    assert!(app.confirm_quit);

    app.update(Action::NavigateBack);
    assert!(!app.confirm_quit);
    assert!(!app.should_quit);

    app.update(Action::Quit);
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn quit_prompt_offers_saving_unsaved_settings() {
    let (mut app, dir) = test_app();
    app.update(Action::Quit);
    assert!(!screen_text(&mut app).contains("Unsaved settings"));
    app.update(Action::NavigateBack);

    app.update(Action::ToggleTheme);
    app.update(Action::Quit);
    assert!(screen_text(&mut app).contains("Unsaved settings"));

    app.update(Action::SaveConfig);
    assert!(app.confirm_quit);
    assert!(!app.config_state.dirty);
    assert!(dir.path().join("config").join("config.toml").exists());
    assert!(!screen_text(&mut app).contains("Unsaved settings"));
}

#[test]
fn force_quit_skips_confirmation() {
    let (mut app, _dir) = test_app();
    assert!(app.update(Action::ForceQuit));
    assert!(app.should_quit);
}

#[test]
fn help_swallows_other_actions() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 2);

    app.update(Action::ToggleHelp);
    assert!(app.show_help);
    app.update(Action::NextPaper);
    assert_eq!(app.browser.index(), 0);

    app.update(Action::NavigateBack);
    assert!(!app.show_help);
    app.update(Action::NextPaper);
    assert_eq!(app.browser.index(), 1);
}

// ── File picker ─────────────────────────────────────────────────

fn populate(dir: &Path) {
    std::fs::create_dir(dir.join("sub")).unwrap();
    std::fs::write(dir.join("b.json"), r#"[{"title": "B"}]"#).unwrap();
    std::fs::write(dir.join("A.JSON"), r#"{"title": "A"}"#).unwrap();
    std::fs::write(dir.join("notes.txt"), "hello").unwrap();
    std::fs::write(dir.join(".hidden.json"), "[]").unwrap();
}

#[test]
fn picker_lists_dirs_first_and_skips_hidden() {
    let (mut app, dir) = test_app();
    populate(dir.path());

    app.update(Action::OpenFilePicker);
    assert_eq!(app.screen, Screen::FilePicker);

    let names: Vec<&str> = app
        .file_picker
        .entries
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["..", "sub", "A.JSON", "b.json", "notes.txt"]);

    let json: Vec<bool> = app.file_picker.entries.iter().map(|e| e.is_json).collect();
    assert_eq!(json, vec![false, false, true, true, false]);
}

#[test]
fn picker_enters_directories_and_goes_back() {
    let (mut app, dir) = test_app();
    populate(dir.path());
    app.update(Action::OpenFilePicker);

    app.update(Action::MoveDown); // sub
    app.update(Action::DrillIn);
    assert_eq!(app.file_picker.current_dir, dir.path().join("sub"));
    assert_eq!(app.file_picker.entries.len(), 1); // just ".."

    app.update(Action::DrillIn);
    assert_eq!(app.file_picker.current_dir, dir.path());

    app.update(Action::NavigateBack);
    assert_eq!(app.screen, Screen::Browser);
}

#[test]
fn picker_ignores_non_json_files() {
    let (mut app, dir) = test_app();
    populate(dir.path());
    app.update(Action::OpenFilePicker);

    app.update(Action::GoBottom); // notes.txt
    app.update(Action::DrillIn);
    assert_eq!(app.screen, Screen::FilePicker);
    assert!(!app.browser.is_loading());
    assert!(app.pending_path.is_none());
}

#[test]
fn picker_load_without_reader_reports_read_error() {
    let (mut app, dir) = test_app();
    populate(dir.path());
    app.config_state.start_dir = None;
    app.update(Action::OpenFilePicker);

    app.update(Action::MoveDown);
    app.update(Action::MoveDown); // A.JSON
    app.update(Action::DrillIn);

    assert_eq!(app.screen, Screen::Browser);
    assert_eq!(app.browser.content(), Content::Error(READ_ERROR_MESSAGE));
    assert_eq!(app.config_state.start_dir.as_deref(), Some(dir.path()));
    assert!(app.config_state.dirty);
}

// ── Loading ─────────────────────────────────────────────────────

#[tokio::test]
async fn load_through_channel_replaces_collection() {
    let (mut app, dir) = test_app();
    populate(dir.path());
    let (tx, mut rx) = mpsc::unbounded_channel();
    app.load_tx = Some(tx);
    with_papers(&mut app, 4);
    app.update(Action::NextPaper);

    let path = dir.path().join("b.json");
    app.start_load(path.clone());
    assert_eq!(app.browser.content(), Content::Loading);
    assert_eq!(app.pending_path.as_ref(), Some(&path));

    let event = rx.recv().await.unwrap();
    app.handle_load_event(event);

    assert!(app.pending_path.is_none());
    assert_eq!(app.loaded_path.as_ref(), Some(&path));
    assert_eq!(app.browser.len(), 1);
    assert_eq!(app.browser.index(), 0);
    assert_eq!(app.browser.current().unwrap().title, "B");
    assert_eq!(app.status.as_deref(), Some("Loaded 1 paper from b.json"));
}

#[tokio::test]
async fn failed_parse_keeps_old_collection_hidden() {
    let (mut app, dir) = test_app();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "[{\"title\": ").unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    app.load_tx = Some(tx);
    with_papers(&mut app, 2);
    app.update(Action::NextPaper);

    app.start_load(bad);
    let event = rx.recv().await.unwrap();
    app.handle_load_event(event);

    assert_eq!(app.browser.content(), Content::Error(PARSE_ERROR_MESSAGE));
    assert_eq!(app.browser.len(), 2);
    assert_eq!(app.browser.index(), 1);
    assert!(app.loaded_path.is_none());
    assert!(app.status.is_none());
}

#[tokio::test]
async fn missing_file_reports_read_error() {
    let (mut app, dir) = test_app();
    let (tx, mut rx) = mpsc::unbounded_channel();
    app.load_tx = Some(tx);

    app.start_load(dir.path().join("gone.json"));
    let event = rx.recv().await.unwrap();
    app.handle_load_event(event);

    assert_eq!(app.browser.content(), Content::Error(READ_ERROR_MESSAGE));
}

#[test]
fn stale_completion_keeps_newer_pending_path() {
    let (mut app, dir) = test_app();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    app.pending_path = Some(second.clone());
    app.browser.begin_load();

    app.handle_load_event(LoadEvent::ReadComplete {
        path: first.clone(),
        outcome: Ok(r#"{"title": "First"}"#.to_string()),
    });

    assert_eq!(app.pending_path.as_ref(), Some(&second));
    assert_eq!(app.loaded_path.as_ref(), Some(&first));
    assert_eq!(app.browser.len(), 1);
}

// ── Config ──────────────────────────────────────────────────────

#[test]
fn save_config_writes_theme_and_dir() {
    let (mut app, dir) = test_app();
    app.update(Action::ToggleTheme);
    app.update(Action::SaveConfig);

    let path = dir.path().join("config").join("config.toml");
    let saved = config_file::load_from_path(&path).unwrap();
    assert_eq!(
        saved.display.and_then(|d| d.theme).as_deref(),
        Some("dark")
    );
    assert_eq!(
        saved.browse.and_then(|b| b.start_dir),
        Some(dir.path().display().to_string())
    );
    assert!(!app.config_state.dirty);
    assert!(app.status.as_deref().unwrap().starts_with("Config saved to"));
}

#[test]
fn save_without_config_dir_sets_status() {
    let (mut app, _dir) = test_app();
    app.config_path = None;
    app.update(Action::SaveConfig);
    assert_eq!(
        app.status.as_deref(),
        Some("Could not determine config directory")
    );
}

// ── Rendering ───────────────────────────────────────────────────

#[test]
fn renders_empty_state() {
    let (mut app, _dir) = test_app();
    let text = screen_text(&mut app);
    assert!(text.contains("PAPERINATOR"));
    assert!(text.contains("No data available. Please load a JSON file."));
}

#[test]
fn renders_paginator_and_card() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 2);
    app.update(Action::NextPaper);
    let text = screen_text(&mut app);
    assert!(text.contains("Paper 2 of 2"));
    assert!(text.contains("Paper 1"));
    assert!(text.contains("Authors"));
}

#[test]
fn renders_error_instead_of_paper() {
    let (mut app, _dir) = test_app();
    with_papers(&mut app, 1);
    app.browser.begin_load();
    let _ = app.browser.finish_load(Ok("42".to_string()));
    let text = screen_text(&mut app);
    assert!(text.contains(PARSE_ERROR_MESSAGE));
    assert!(!text.contains("Paper 1 of 1"));
}

#[test]
fn render_keeps_cursor_header_on_screen() {
    let (mut app, _dir) = test_app();
    let mut long = paper("Long");
    long.authors = (0..40).map(|i| format!("Author {}", i)).collect();
    app.browser.replace_collection(vec![long]);

    // Forty authors push the last header below a 30-row screen
    app.update(Action::MoveDown);
    app.update(Action::ToggleSection);
    app.update(Action::GoBottom);
    screen_text(&mut app);
    assert!(app.card_scroll > 0);
}

#[test]
fn card_scroll_saturates_on_huge_cards() {
    let (mut app, _dir) = test_app();
    let mut huge = paper("Huge");
    huge.authors = (0..70_000).map(|i| format!("Author {}", i)).collect();
    app.browser.replace_collection(vec![huge]);

    app.update(Action::MoveDown);
    app.update(Action::ToggleSection);
    app.update(Action::GoBottom);
    screen_text(&mut app);
    assert_eq!(app.card_scroll, u16::MAX);
}

#[test]
fn renders_every_word_of_a_wide_abstract() {
    let (mut app, _dir) = test_app();
    let mut wide = paper("Wide");
    wide.abstract_text = "研究問題 深層学習 論文要約 終わり".to_string();
    app.browser.replace_collection(vec![wide]);

    // Double-width cells are followed by a blank filler cell
    let text = screen_text_sized(&mut app, 20, 30).replace(' ', "");
    for word in ["研究問題", "深層学習", "論文要約", "終わり"] {
        assert!(text.contains(word), "{} clipped", word);
    }
}

#[test]
fn renders_picker_and_overlays() {
    let (mut app, dir) = test_app();
    populate(dir.path());
    app.update(Action::OpenFilePicker);
    let text = screen_text(&mut app);
    assert!(text.contains("b.json"));
    assert!(!text.contains(".hidden.json"));

    app.update(Action::ToggleHelp);
    assert!(screen_text(&mut app).contains("Keyboard Shortcuts"));
    app.update(Action::ToggleHelp);

    app.update(Action::Quit);
    assert!(screen_text(&mut app).contains("Quit paperinator?"));
}
