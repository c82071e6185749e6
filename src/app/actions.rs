#[derive(Debug, Clone)]
pub enum Action {
    Quit,

    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    PageUp,
    PageDown,
    SelectUnderCursor,

    CopySelected,

    FocusFilter,
    FocusPalette,
    FilterChar(char),
    FilterBackspace,
    FilterClear,

    // Add-custom-color dialogs
    OpenAdd,
    DraftChar(char),
    DraftBackspace,
    SubmitDraft,
    CancelDraft,

    DeleteUnderCursor,

    OpenClearAll,
    ConfirmClearAll,
    CancelClearAll,

    Resize,
}
