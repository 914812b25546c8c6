//! Application messages

/// Demo screen messages
#[derive(Debug, Clone)]
pub enum Message {
    /// The seek bar moved to a new value
    Seek(i32),
    /// Jump back to the minimum
    Reset,
}
