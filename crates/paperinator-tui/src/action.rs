/// Everything the user can ask the app to do, independent of the key or
/// mouse gesture that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ForceQuit,
    PreviousPaper,
    NextPaper,
    MoveUp,
    MoveDown,
    /// Flip the section under the cursor (Space). In the file picker this
    /// opens the entry, same as `DrillIn`.
    ToggleSection,
    DrillIn,
    NavigateBack,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoTop,
    GoBottom,
    ToggleTheme,
    OpenFilePicker,
    ToggleHelp,
    SaveConfig,
    Resize(u16, u16),
    Tick,
    None,
}
