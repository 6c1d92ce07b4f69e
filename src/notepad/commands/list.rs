use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Notepad;

/// Lists notes in insertion order. Empty-string notes keep their slot but are not shown.
pub fn run(notepad: &Notepad) -> Result<CmdResult> {
    if notepad.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Notepad is empty")));
    }

    let mut result = CmdResult::default();
    for (i, text) in notepad.notes().iter().enumerate() {
        if text.is_empty() {
            continue;
        }
        result.add_message(CmdMessage::info(format!("{}: {}", i + 1, text)));
    }
    Ok(result)
}
