use ratatui::style::{Color, Modifier, Style};

use paperinator_core::ThemeMode;

/// Color palette for the TUI.
pub struct Theme {
    pub mode: ThemeMode,

    pub bg: Color,
    pub card_bg: Color,
    pub text: Color,
    pub dim: Color,
    pub heading: Color,
    pub accent: Color,
    pub error: Color,
    pub keyword_fg: Color,
    pub keyword_bg: Color,
    pub mode_icon: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub disabled: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Gray-on-white with blue keyword chips.
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,

            bg: Color::Rgb(249, 250, 251),
            card_bg: Color::Rgb(255, 255, 255),
            text: Color::Rgb(31, 41, 55),
            dim: Color::Rgb(107, 114, 128),
            heading: Color::Rgb(17, 24, 39),
            accent: Color::Rgb(37, 99, 235),
            error: Color::Rgb(239, 68, 68),
            keyword_fg: Color::Rgb(30, 64, 175),
            keyword_bg: Color::Rgb(219, 234, 254),
            mode_icon: Color::Rgb(55, 65, 81),

            header_fg: Color::Rgb(55, 65, 81),
            header_bg: Color::Rgb(229, 231, 235),
            border: Color::Rgb(209, 213, 219),
            highlight_bg: Color::Rgb(219, 234, 254),
            disabled: Color::Rgb(209, 213, 219),
            footer_fg: Color::Rgb(107, 114, 128),
            footer_bg: Color::Rgb(249, 250, 251),
        }
    }

    /// Light text on near-black, yellow sun icon.
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,

            bg: Color::Rgb(17, 24, 39),
            card_bg: Color::Rgb(31, 41, 55),
            text: Color::Rgb(229, 231, 235),
            dim: Color::Rgb(156, 163, 175),
            heading: Color::White,
            accent: Color::Rgb(96, 165, 250),
            error: Color::Rgb(239, 68, 68),
            keyword_fg: Color::Rgb(219, 234, 254),
            keyword_bg: Color::Rgb(30, 58, 138),
            mode_icon: Color::Rgb(253, 224, 71),

            header_fg: Color::Rgb(229, 231, 235),
            header_bg: Color::Rgb(55, 65, 81),
            border: Color::Rgb(75, 85, 99),
            highlight_bg: Color::Rgb(55, 65, 81),
            disabled: Color::Rgb(75, 85, 99),
            footer_fg: Color::Rgb(156, 163, 175),
            footer_bg: Color::Rgb(17, 24, 39),
        }
    }

    /// Icon for the theme toggle: offers the other mode, like a sun/moon button.
    pub fn mode_glyph(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => "\u{263E}",
            ThemeMode::Dark => "\u{2600}",
        }
    }

    pub fn background_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn card_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.card_bg)
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn keyword_style(&self) -> Style {
        Style::default().fg(self.keyword_fg).bg(self.keyword_bg)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
