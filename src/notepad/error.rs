use crate::commands::Action;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotepadError {
    #[error("Notepad is full")]
    CapacityExceeded,

    #[error("Missing note argument")]
    EmptyArgument,

    #[error("There is nothing to {0}")]
    NothingToOperateOn(Action),

    #[error("Missing position argument")]
    MissingPositionArgument,

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Missing note argument")]
    MissingNoteArgument,

    #[error("Position {position} is out of the boundary [1, {capacity}]")]
    PositionOutOfRange { position: i64, capacity: usize },

    #[error("Unknown command")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before exit")]
    InputClosed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NotepadError {
    /// Whether the session can carry on after this error.
    ///
    /// Everything raised by command validation is recoverable; failures of the
    /// surrounding I/O are not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            NotepadError::Io(_) | NotepadError::InputClosed | NotepadError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NotepadError>;
