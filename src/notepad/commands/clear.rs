use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Notepad;

pub fn run(notepad: &mut Notepad) -> Result<CmdResult> {
    notepad.clear();
    Ok(CmdResult::default().with_message(CmdMessage::success(
        "All notes were successfully deleted",
    )))
}
