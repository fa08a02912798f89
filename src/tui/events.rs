/// Events flowing through the chat event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick driving the typing indicator.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// The assistant finished answering.
    Reply(String),
}

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Bot => "Campus Bot",
        }
    }
}
