use crate::paper::Paper;

/// A named, independently collapsible part of a paper's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// The paper card itself; collapsing it leaves only the title line.
    Root,
    Authors,
    Keywords,
    ChallengesAndGaps,
    Novelties,
    MainFindings,
    Contributions,
    Limitations,
    FutureWork,
    Recommendations,
    ResearchQuestions,
}

impl Section {
    pub const COUNT: usize = 11;

    /// All sections in display order.
    pub const ALL: [Section; Section::COUNT] = [
        Section::Root,
        Section::Authors,
        Section::Keywords,
        Section::ChallengesAndGaps,
        Section::Novelties,
        Section::MainFindings,
        Section::Contributions,
        Section::Limitations,
        Section::FutureWork,
        Section::Recommendations,
        Section::ResearchQuestions,
    ];

    /// Record field name (or pseudo-name) the section is keyed by.
    pub fn key(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Authors => "authors",
            Self::Keywords => "keywords",
            Self::ChallengesAndGaps => "challenges_and_gaps",
            Self::Novelties => "novelties",
            Self::MainFindings => "main_findings",
            Self::Contributions => "contributions",
            Self::Limitations => "limitations",
            Self::FutureWork => "future_work",
            Self::Recommendations => "recommendations",
            Self::ResearchQuestions => "research_questions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Root => "Paper",
            Self::Authors => "Authors",
            Self::Keywords => "Keywords",
            Self::ChallengesAndGaps => "Challenges and Gaps",
            Self::Novelties => "Novelties",
            Self::MainFindings => "Main Findings",
            Self::Contributions => "Contributions",
            Self::Limitations => "Limitations",
            Self::FutureWork => "Future Work",
            Self::Recommendations => "Recommendations",
            Self::ResearchQuestions => "Research Questions",
        }
    }

    /// The plain text list behind a list section. `None` for `Root` and
    /// `ResearchQuestions`, which are rendered from other data.
    pub fn items(self, paper: &Paper) -> Option<&[String]> {
        let items = match self {
            Self::Authors => &paper.authors,
            Self::Keywords => &paper.keywords,
            Self::ChallengesAndGaps => &paper.challenges_and_gaps,
            Self::Novelties => &paper.novelties,
            Self::MainFindings => &paper.main_findings,
            Self::Contributions => &paper.contributions,
            Self::Limitations => &paper.limitations,
            Self::FutureWork => &paper.future_work,
            Self::Recommendations => &paper.recommendations,
            Self::Root | Self::ResearchQuestions => return None,
        };
        Some(items)
    }

    /// Whether this section's header is shown for `paper`.
    ///
    /// Empty lists still get a header, except recommendations and research
    /// questions which disappear when there is nothing to show.
    pub fn is_visible_for(self, paper: &Paper) -> bool {
        match self {
            Self::Recommendations => paper.has_recommendations(),
            Self::ResearchQuestions => paper.has_research_questions(),
            _ => true,
        }
    }

    /// Toggleable headers shown for `paper`, in display order.
    pub fn visible_for(paper: &Paper) -> Vec<Section> {
        Self::ALL
            .into_iter()
            .filter(|s| s.is_visible_for(paper))
            .collect()
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Expanded/collapsed flag for every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionFlags {
    expanded: [bool; Section::COUNT],
}

impl Default for SectionFlags {
    /// Only `Root` is expanded.
    fn default() -> Self {
        let mut expanded = [false; Section::COUNT];
        expanded[Section::Root.slot()] = true;
        Self { expanded }
    }
}

impl SectionFlags {
    pub fn is_expanded(&self, section: Section) -> bool {
        self.expanded[section.slot()]
    }

    /// Flip one flag, leaving the others untouched. Returns the new value.
    pub fn toggle(&mut self, section: Section) -> bool {
        let flag = &mut self.expanded[section.slot()];
        *flag = !*flag;
        *flag
    }

    pub fn set(&mut self, section: Section, expanded: bool) {
        self.expanded[section.slot()] = expanded;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
