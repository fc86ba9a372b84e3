use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;
use crate::view::centered_rect;

/// Render the quit confirmation dialog as a centered popup. With unsaved
/// settings it also offers Ctrl+S.
pub fn render(f: &mut Frame, theme: &Theme, unsaved: bool) {
    let area = f.area();
    let popup = centered_rect(40, if unsaved { 6 } else { 5 }, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Quit paperinator?",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                "  q",
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(": quit   ", Style::default().fg(theme.dim)),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(": cancel", Style::default().fg(theme.dim)),
        ]),
    ];
    if unsaved {
        lines.push(Line::from(vec![
            Span::styled("  Unsaved settings, ", Style::default().fg(theme.dim)),
            Span::styled(
                "Ctrl+S",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to save", Style::default().fg(theme.dim)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error))
            .style(theme.card_style())
            .title(" Confirm Quit "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
