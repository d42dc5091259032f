/// All messages that can be sent through the FLTK channel.
/// Each button callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Dialog buttons
    PickBackgroundColor,
    ShowError,
    OpenFile,
    PickFont,
    InsertText,
    PageSetup,
    RunProgress,
    Print,
    PickTextColor,

    // Editor
    /// A keystroke-level change made directly in the editor widget.
    BufferEdited {
        pos: usize,
        deleted: usize,
        inserted: String,
    },

    WindowClose,
}
