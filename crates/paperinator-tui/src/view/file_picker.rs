use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::app::App;
use crate::theme::Theme;

/// Render the file picker screen into the given area.
pub fn render_in(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect, footer_area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(1), // current dir
        Constraint::Min(3),    // file list
    ])
    .split(area);

    let header = Line::from(vec![
        Span::styled(" Open ", theme.header_style()),
        Span::styled(
            " > Select a paper collection (.json)",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let dir_line = Line::from(vec![
        Span::styled(" \u{1F4C1} ", Style::default().fg(theme.accent)),
        Span::styled(
            app.file_picker.current_dir.display().to_string(),
            Style::default().fg(theme.dim),
        ),
    ]);
    f.render_widget(Paragraph::new(dir_line), chunks[1]);

    let visible_height = chunks[2].height.saturating_sub(2) as usize; // borders
    app.visible_rows = visible_height.max(1);
    let picker = &app.file_picker;
    let scroll_offset = if picker.cursor >= visible_height {
        picker.cursor - visible_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|entry| {
            let (icon, style) = if entry.is_dir {
                ("\u{1F4C1} ", Style::default().fg(theme.accent))
            } else if entry.is_json {
                (
                    "\u{1F4C4} ",
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(theme.disabled))
            };
            ListItem::new(Line::from(vec![
                Span::styled(icon, style),
                Span::styled(entry.name.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .style(theme.card_style())
                .title(" Files "),
        )
        .highlight_style(theme.highlight_style());

    let mut state = ListState::default();
    if !picker.entries.is_empty() {
        state.select(Some(picker.cursor.saturating_sub(scroll_offset)));
    }
    f.render_stateful_widget(list, chunks[2], &mut state);

    let footer = Line::from(Span::styled(
        " j/k:navigate  Enter:open  Esc:back  d:theme  ?:help  q:quit",
        theme.footer_style(),
    ));
    f.render_widget(
        Paragraph::new(footer).style(theme.footer_style()),
        footer_area,
    );
}
