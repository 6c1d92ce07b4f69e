use crate::commands::{Action, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Notepad;

use super::helpers::resolve_target;

/// Replaces the note at `<position>` with the remaining words of `args`.
pub fn run(notepad: &mut Notepad, args: &str) -> Result<CmdResult> {
    let target = resolve_target(notepad, Action::Update, args)?;
    notepad.replace(target.index, target.words.join(" "));

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "The note at position {} was successfully updated",
        target.position
    ))))
}
