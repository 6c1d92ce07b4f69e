use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotepadError, Result};
use crate::model::Notepad;

pub fn run(notepad: &mut Notepad, text: &str) -> Result<CmdResult> {
    if notepad.is_full() {
        return Err(NotepadError::CapacityExceeded);
    }
    if text.is_empty() || text == " " {
        return Err(NotepadError::EmptyArgument);
    }

    notepad.push(text.to_string())?;
    Ok(CmdResult::default().with_message(CmdMessage::success(
        "The note was successfully created",
    )))
}
