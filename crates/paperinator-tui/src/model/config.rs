use std::path::PathBuf;

use paperinator_core::ThemeMode;

/// Settings that survive between sessions via the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigState {
    pub theme: ThemeMode,
    /// Directory the file picker opens in; `None` means the working directory.
    pub start_dir: Option<PathBuf>,
    /// Changed since the last save.
    pub dirty: bool,
}
