use std::path::PathBuf;

use paperinator_core::ReadOutcome;

/// Events flowing from background file reads to the UI loop.
#[derive(Debug)]
pub enum LoadEvent {
    /// A read finished, successfully or not. Sent exactly once per read.
    ReadComplete { path: PathBuf, outcome: ReadOutcome },
}
