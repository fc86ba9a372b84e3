use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use paperinator_core::{Content, Paper, Section, SectionFlags};

use crate::app::App;
use crate::theme::Theme;
use crate::view::{spinner_char, truncate, wrap_text};

/// List sections rendered as bullet lists, in display order.
const BULLET_SECTIONS: [Section; 7] = [
    Section::ChallengesAndGaps,
    Section::Novelties,
    Section::MainFindings,
    Section::Contributions,
    Section::Limitations,
    Section::FutureWork,
    Section::Recommendations,
];

/// A paper card laid out for a given width.
pub struct Card {
    pub lines: Vec<Line<'static>>,
    /// Row of each rendered section header.
    pub header_rows: Vec<(Section, usize)>,
}

impl Card {
    pub fn row_of(&self, section: Section) -> Option<usize> {
        self.header_rows
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, row)| *row)
    }
}

/// Render the browser screen (paginator + paper card, or a status message).
pub fn render_in(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect, footer_area: Rect) {
    let message = match app.browser.content() {
        Content::Loading => Some(vec![Line::from(Span::styled(
            format!("{} Loading...", spinner_char(app.tick)),
            Style::default().fg(theme.text),
        ))]),
        Content::Error(message) => Some(vec![Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ))]),
        Content::Empty => Some(vec![
            Line::from(Span::styled(
                "No data available. Please load a JSON file.",
                Style::default().fg(theme.dim),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(theme.dim)),
                Span::styled(
                    "o",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to open a file.", Style::default().fg(theme.dim)),
            ]),
        ]),
        Content::Paper { .. } => None,
    };

    match message {
        Some(lines) => render_message(f, lines, area),
        None => render_paper(f, app, theme, area),
    }

    render_footer(f, app, theme, footer_area);
}

/// Vertically centered message in place of the card.
fn render_message(f: &mut Frame, lines: Vec<Line<'static>>, area: Rect) {
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let message_area = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        message_area,
    );
}

fn render_paper(f: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // paginator
        Constraint::Min(3),    // card
    ])
    .split(area);

    render_paginator(f, app, theme, chunks[0]);

    let cursor = app.cursor_section();
    let title = app
        .browser
        .current()
        .map(|p| p.filename.clone())
        .filter(|name| !name.is_empty())
        .map(|name| format!(" {} ", truncate(&name, chunks[1].width.saturating_sub(6) as usize)))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .style(theme.card_style())
        .padding(Padding::horizontal(1))
        .title(title);
    let inner = block.inner(chunks[1]);

    let Some(card) = app
        .browser
        .current()
        .map(|paper| build_card(paper, app.browser.sections(), cursor, theme, inner.width as usize))
    else {
        return;
    };

    // Keep the cursor header on screen, then clamp to the content.
    let height = (inner.height as usize).max(1);
    app.visible_rows = height;
    let mut scroll = app.card_scroll as usize;
    if app.follow_cursor
        && let Some(row) = cursor.and_then(|s| card.row_of(s))
    {
        if row < scroll {
            scroll = row;
        } else if row >= scroll + height {
            scroll = row + 1 - height;
        }
    }
    scroll = scroll.min(card.lines.len().saturating_sub(height));
    app.card_scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    f.render_widget(
        Paragraph::new(card.lines)
            .block(block)
            .scroll((app.card_scroll, 0)),
        chunks[1],
    );
}

/// "◀ Prev   Paper i of N   Next ▶", with unavailable directions dimmed.
fn render_paginator(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let enabled = |on: bool| {
        if on {
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.header_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.disabled)
        }
    };

    let chunks = Layout::horizontal([
        Constraint::Length(10),
        Constraint::Min(1),
        Constraint::Length(10),
    ])
    .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            " \u{25C0} Prev ",
            enabled(app.browser.can_go_previous()),
        )),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("Paper {} of {}", app.browser.index() + 1, app.browser.len()),
            Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            " Next \u{25B6} ",
            enabled(app.browser.can_go_next()),
        ))
        .alignment(Alignment::Right),
        chunks[2],
    );
}

fn render_footer(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut hints: Vec<(&str, &str)> = Vec::new();
    if app.paper_shown() {
        hints.extend([
            ("h/l", "prev/next"),
            ("j/k", "section"),
            ("Space", "toggle"),
        ]);
    }
    hints.extend([("o", "open"), ("d", "theme"), ("?", "help"), ("q", "quit")]);

    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in hints {
        spans.push(Span::styled(
            key,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}  ", desc), theme.footer_style()));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(theme.footer_style()),
        area,
    );
}

/// Lay out one paper as card lines for a content `width`.
pub fn build_card(
    paper: &Paper,
    flags: &SectionFlags,
    cursor: Option<Section>,
    theme: &Theme,
    width: usize,
) -> Card {
    let mut card = Card {
        lines: Vec::new(),
        header_rows: Vec::new(),
    };
    let width = width.max(8);

    // Title doubles as the root header
    let root_open = flags.is_expanded(Section::Root);
    let title_lines = wrap_text(paper.display_title(), width.saturating_sub(2));
    push_header(
        &mut card,
        Section::Root,
        root_open,
        cursor,
        theme,
        title_lines[0].clone(),
        None,
    );
    for rest in &title_lines[1..] {
        card.lines.push(Line::from(Span::styled(
            format!("  {}", rest),
            theme.heading_style(),
        )));
    }
    if !root_open {
        return card;
    }

    let year = paper
        .publication_year
        .map(|y| y.to_string())
        .unwrap_or_default();
    card.lines.push(Line::from(vec![
        Span::styled(
            "Published: ",
            Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
        ),
        Span::styled(year, Style::default().fg(theme.text)),
    ]));

    list_section(&mut card, paper, flags, cursor, theme, Section::Authors, width, false);

    text_block(&mut card, "Abstract", &paper.abstract_text, theme, width);
    text_block(&mut card, "Summary", &paper.summary, theme, width);

    blank(&mut card);
    let keywords_open = flags.is_expanded(Section::Keywords);
    push_header(
        &mut card,
        Section::Keywords,
        keywords_open,
        cursor,
        theme,
        Section::Keywords.label().to_string(),
        Some(paper.keywords.len()),
    );
    if keywords_open {
        keyword_chips(&mut card, &paper.keywords, theme, width);
    }

    for section in BULLET_SECTIONS {
        if section.is_visible_for(paper) {
            list_section(&mut card, paper, flags, cursor, theme, section, width, true);
        }
    }

    if Section::ResearchQuestions.is_visible_for(paper) {
        let questions = paper.research_questions();
        let open = flags.is_expanded(Section::ResearchQuestions);
        blank(&mut card);
        push_header(
            &mut card,
            Section::ResearchQuestions,
            open,
            cursor,
            theme,
            Section::ResearchQuestions.label().to_string(),
            Some(questions.len()),
        );
        if open {
            for q in questions {
                let label = format!("RQ{}: ", q.number);
                bullet(
                    &mut card,
                    Some((label, theme.heading_style())),
                    &q.text,
                    theme,
                    width,
                );
            }
        }
    }

    text_block(&mut card, "Conclusion", &paper.conclusion, theme, width);

    blank(&mut card);
    card.lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(theme.border),
    )));
    card.lines.push(Line::from(Span::styled(
        format!("Filename: {}", paper.filename),
        Style::default().fg(theme.dim),
    )));

    card
}

fn blank(card: &mut Card) {
    card.lines.push(Line::from(""));
}

/// Collapsible header: chevron, label, optional item count. Highlighted
/// when under the cursor.
fn push_header(
    card: &mut Card,
    section: Section,
    open: bool,
    cursor: Option<Section>,
    theme: &Theme,
    label: String,
    count: Option<usize>,
) {
    let chevron = if open { "\u{25BC} " } else { "\u{25B6} " };
    let mut spans = vec![
        Span::styled(chevron, Style::default().fg(theme.accent)),
        Span::styled(label, theme.heading_style()),
    ];
    if let Some(n) = count {
        spans.push(Span::styled(format!(" ({})", n), Style::default().fg(theme.dim)));
    }

    let mut line = Line::from(spans);
    if cursor == Some(section) {
        line = line.style(theme.highlight_style());
    }
    card.header_rows.push((section, card.lines.len()));
    card.lines.push(line);
}

/// Non-collapsible heading with a wrapped paragraph under it.
fn text_block(card: &mut Card, heading: &str, text: &str, theme: &Theme, width: usize) {
    blank(card);
    card.lines
        .push(Line::from(Span::styled(heading.to_string(), theme.heading_style())));
    for line in wrap_text(text, width.saturating_sub(2)) {
        card.lines.push(Line::from(Span::styled(
            format!("  {}", line),
            Style::default().fg(theme.text),
        )));
    }
}

#[allow(clippy::too_many_arguments)]
fn list_section(
    card: &mut Card,
    paper: &Paper,
    flags: &SectionFlags,
    cursor: Option<Section>,
    theme: &Theme,
    section: Section,
    width: usize,
    bulleted: bool,
) {
    let items = section.items(paper).unwrap_or_default();
    let open = flags.is_expanded(section);
    if bulleted {
        blank(card);
    }
    push_header(
        card,
        section,
        open,
        cursor,
        theme,
        section.label().to_string(),
        Some(items.len()),
    );
    if !open {
        return;
    }
    for item in items {
        if bulleted {
            bullet(card, None, item, theme, width);
        } else {
            for line in wrap_text(item, width.saturating_sub(4)) {
                card.lines.push(Line::from(Span::styled(
                    format!("    {}", line),
                    Style::default().fg(theme.text),
                )));
            }
        }
    }
}

/// "  • [label]text" with a hanging indent for wrapped lines.
fn bullet(
    card: &mut Card,
    label: Option<(String, Style)>,
    text: &str,
    theme: &Theme,
    width: usize,
) {
    let label_len = label.as_ref().map(|(l, _)| l.width()).unwrap_or(0);
    let first_width = width.saturating_sub(4 + label_len);
    let first = wrap_text(text, first_width);
    let mut rest_text = String::new();
    if first.len() > 1 {
        rest_text = first[1..].join(" ");
    }

    let mut spans = vec![Span::styled("  \u{2022} ", Style::default().fg(theme.accent))];
    if let Some((l, style)) = label {
        spans.push(Span::styled(l, style));
    }
    spans.push(Span::styled(first[0].clone(), Style::default().fg(theme.text)));
    card.lines.push(Line::from(spans));

    if !rest_text.is_empty() {
        for line in wrap_text(&rest_text, width.saturating_sub(4)) {
            card.lines.push(Line::from(Span::styled(
                format!("    {}", line),
                Style::default().fg(theme.text),
            )));
        }
    }
}

/// Keywords as padded chips, flowed onto as many rows as needed.
fn keyword_chips(card: &mut Card, keywords: &[String], theme: &Theme, width: usize) {
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];
    let mut used = 2;
    for keyword in keywords {
        let chip = format!(" {} ", truncate(keyword, width.saturating_sub(4)));
        let chip_len = chip.width();
        if used > 2 && used + 1 + chip_len > width {
            card.lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw("  "));
            used = 2;
        }
        if used > 2 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(chip, theme.keyword_style()));
        used += chip_len;
    }
    if used > 2 {
        card.lines.push(Line::from(spans));
    }
}
