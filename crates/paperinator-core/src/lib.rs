use thiserror::Error;

pub mod browser;
pub mod collection;
pub mod load;
pub mod paper;
pub mod section;

// Re-export for convenience
pub use browser::{Content, PaperBrowser, ParseThemeError, ThemeMode};
pub use collection::{normalize, parse_collection};
pub use load::{ReadOutcome, load_path, read_file};
pub use paper::{MAX_RESEARCH_QUESTIONS, Paper, ResearchQuestion};
pub use section::{Section, SectionFlags};

/// Message shown when the selected file could not be read.
pub const READ_ERROR_MESSAGE: &str = "Failed to read the file.";

/// Message shown when the file content is not JSON of the expected shape.
pub const PARSE_ERROR_MESSAGE: &str = "Failed to parse JSON file. Please check the file format.";

/// Why a load attempt failed. The `Display` text is the user-facing message;
/// the underlying cause is available through [`LoadError::cause`] for logging.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read the file.")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse JSON file. Please check the file format.")]
    Parse(#[from] serde_json::Error),
    /// Valid JSON, but neither an object nor an array of objects.
    #[error("Failed to parse JSON file. Please check the file format.")]
    Shape { found: &'static str },
}

impl LoadError {
    /// Technical description of what went wrong.
    pub fn cause(&self) -> String {
        match self {
            LoadError::Read(e) => e.to_string(),
            LoadError::Parse(e) => e.to_string(),
            LoadError::Shape { found } => {
                format!("expected an object or an array of objects, found {found}")
            }
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(self, LoadError::Read(_))
    }
}
