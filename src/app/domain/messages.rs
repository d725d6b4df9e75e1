/// All messages that can be sent through the FLTK channel.
/// Each menu or widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Snippet
    TextEdited,
    ClearText,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Format
    SetFontFamily(&'static str),
    SetFontSize(u32),
    PromptFontFamily,
    SetColor(&'static str),
    PromptColor,

    // View & preferences
    ToggleDarkMode,
    ResetPreferences,

    // Help
    ShowAbout,
}
