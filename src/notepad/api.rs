//! # API Facade
//!
//! [`NotepadApi`] is the single entry point into the notepad for any UI. It
//! owns the session's [`Notepad`] and its [`SessionState`], turns a raw input
//! line into an [`Action`] and hands the argument string to the matching
//! command module.
//!
//! ## Error Conversion
//!
//! Per-command methods return `Result<CmdResult>` so callers and tests can
//! inspect the typed [`NotepadError`](crate::error::NotepadError).
//! [`NotepadApi::execute`] is the line-oriented surface: it catches every
//! validation error where it happens and turns it into an `[Error]` message,
//! so a read loop only ever deals with messages to print.
//!
//! ## What the API Does NOT Do
//!
//! - No business logic (that lives in `commands/*.rs`)
//! - No stdout/stderr, no `std::process::exit`: an `exit` command only moves the
//!   session to [`SessionState::Terminated`]

use crate::commands;
use crate::error::Result;
use crate::model::Notepad;
use crate::parser::parse_line;

pub use crate::commands::{Action, CmdMessage, CmdResult, MessageLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

pub struct NotepadApi {
    notepad: Notepad,
    state: SessionState,
}

impl NotepadApi {
    pub fn new(capacity: usize) -> Self {
        Self {
            notepad: Notepad::new(capacity),
            state: SessionState::Running,
        }
    }

    pub fn notepad(&self) -> &Notepad {
        &self.notepad
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    pub fn create_note(&mut self, text: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.notepad, text)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.notepad)
    }

    pub fn clear_notes(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.notepad)
    }

    pub fn update_note(&mut self, args: &str) -> Result<CmdResult> {
        commands::update::run(&mut self.notepad, args)
    }

    pub fn delete_note(&mut self, args: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.notepad, args)
    }

    pub fn exit(&mut self) -> Result<CmdResult> {
        let result = commands::exit::run()?;
        self.state = SessionState::Terminated;
        Ok(result)
    }

    pub fn dispatch(&mut self, action: Action, args: &str) -> Result<CmdResult> {
        log::debug!("dispatching {} with {:?}", action, args);
        match action {
            Action::Exit => self.exit(),
            Action::Create => self.create_note(args),
            Action::List => self.list_notes(),
            Action::Clear => self.clear_notes(),
            Action::Update => self.update_note(args),
            Action::Delete => self.delete_note(args),
        }
    }

    /// Runs one raw input line and returns the messages to show.
    ///
    /// Lines arriving after `exit` are ignored.
    pub fn execute(&mut self, line: &str) -> CmdResult {
        if self.is_terminated() {
            log::warn!("ignoring input after exit: {:?}", line);
            return CmdResult::default();
        }

        let parsed = parse_line(line);
        let outcome = parsed
            .command
            .parse::<Action>()
            .and_then(|action| self.dispatch(action, &parsed.rest()));

        match outcome {
            Ok(result) => result,
            Err(err) => {
                log::debug!("command {:?} failed: {:?}", parsed.command, err);
                CmdResult::default().with_message(CmdMessage::from(&err))
            }
        }
    }
}
