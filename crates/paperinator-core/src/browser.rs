use std::str::FromStr;

use thiserror::Error;

use crate::LoadError;
use crate::collection::parse_collection;
use crate::load::ReadOutcome;
use crate::paper::Paper;
use crate::section::{Section, SectionFlags};

/// Light or dark presentation. Purely cosmetic; the renderer picks colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown theme {0:?} (expected \"light\" or \"dark\")")]
pub struct ParseThemeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// What the main content area should show, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Content<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Paper {
        paper: &'a Paper,
        index: usize,
        total: usize,
    },
}

/// All browsing state: the loaded collection, the cursor into it, which
/// sections are expanded, the theme, and load status.
///
/// Invariant: `index < papers.len()` whenever `papers` is non-empty, and
/// `index == 0` otherwise.
#[derive(Debug, Default)]
pub struct PaperBrowser {
    papers: Vec<Paper>,
    index: usize,
    sections: SectionFlags,
    theme: ThemeMode,
    loading: bool,
    error: Option<String>,
}

impl PaperBrowser {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Paper> {
        self.papers.get(self.index)
    }

    pub fn sections(&self) -> &SectionFlags {
        &self.sections
    }

    pub fn is_expanded(&self, section: Section) -> bool {
        self.sections.is_expanded(section)
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn content(&self) -> Content<'_> {
        if self.loading {
            return Content::Loading;
        }
        if let Some(message) = &self.error {
            return Content::Error(message);
        }
        match self.current() {
            Some(paper) => Content::Paper {
                paper,
                index: self.index,
                total: self.papers.len(),
            },
            None => Content::Empty,
        }
    }

    /// A read has started: show the loading state and drop any old error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the single completion of a file read.
    ///
    /// On failure the error message is set and the previously loaded
    /// collection stays in memory untouched (it is hidden while the error is
    /// shown). On success the collection is replaced wholesale and the view
    /// goes back to the first paper. Returns the number of papers loaded.
    pub fn finish_load(&mut self, outcome: ReadOutcome) -> Result<usize, LoadError> {
        self.loading = false;
        let result = outcome
            .map_err(LoadError::from)
            .and_then(|text| parse_collection(&text));
        match result {
            Ok(papers) => {
                let count = papers.len();
                self.replace_collection(papers);
                tracing::info!(papers = count, "collection loaded");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(cause = %err.cause(), "load failed");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Install a new collection, resetting the cursor and section flags.
    pub fn replace_collection(&mut self, papers: Vec<Paper>) {
        self.papers = papers;
        self.index = 0;
        self.sections.reset();
        self.loading = false;
        self.error = None;
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.papers.len()
    }

    /// Step back one paper. No-op at the first paper.
    pub fn go_to_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.index -= 1;
        self.sections.reset();
        tracing::debug!(index = self.index, "previous paper");
        true
    }

    /// Step forward one paper. No-op at the last paper.
    pub fn go_to_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.index += 1;
        self.sections.reset();
        tracing::debug!(index = self.index, "next paper");
        true
    }

    /// Flip one section's expanded flag. Returns the new value.
    pub fn toggle_section(&mut self, section: Section) -> bool {
        let expanded = self.sections.toggle(section);
        tracing::debug!(section = section.key(), expanded, "toggle section");
        expanded
    }

    pub fn toggle_dark_mode(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }
}
