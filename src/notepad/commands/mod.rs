use crate::error::{NotepadError, Result};
use std::fmt;
use std::str::FromStr;

pub mod clear;
pub mod create;
pub mod delete;
pub mod exit;
pub mod helpers;
pub mod list;
pub mod update;

/// The closed set of commands the notepad understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    Create,
    List,
    Clear,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Exit => "exit",
            Action::Create => "create",
            Action::List => "list",
            Action::Clear => "clear",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    pub fn all() -> &'static [Action] {
        &[
            Action::Exit,
            Action::Create,
            Action::List,
            Action::Clear,
            Action::Update,
            Action::Delete,
        ]
    }
}

impl FromStr for Action {
    type Err = NotepadError;

    fn from_str(s: &str) -> Result<Self> {
        Action::all()
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| NotepadError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

impl MessageLevel {
    /// The bracketed tag every output line starts with.
    pub fn tag(&self) -> &'static str {
        match self {
            MessageLevel::Info => "[Info]",
            MessageLevel::Success => "[OK]",
            MessageLevel::Error => "[Error]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

impl From<&NotepadError> for CmdMessage {
    fn from(err: &NotepadError) -> Self {
        CmdMessage::error(err.to_string())
    }
}

impl fmt::Display for CmdMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level.tag(), self.content)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub terminate: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn terminating(mut self) -> Self {
        self.terminate = true;
        self
    }
}
