#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Copy(CopyEvent),
    /// Copy-feedback timer fired for the given generation.
    FeedbackExpired { generation: u64 },
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum CopyEvent {
    Done { hex: String },
    Failed(String),
}
