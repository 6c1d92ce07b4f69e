use crate::commands::{Action, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Notepad;

use super::helpers::resolve_target;

/// Removes the note at `<position>`; later notes move up one slot.
///
/// Words after the position are accepted and ignored.
pub fn run(notepad: &mut Notepad, args: &str) -> Result<CmdResult> {
    let target = resolve_target(notepad, Action::Delete, args)?;
    notepad.remove(target.index);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "The note at position {} was successfully deleted",
        target.position
    ))))
}
