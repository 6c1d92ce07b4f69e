use crate::commands::Action;
use crate::error::{NotepadError, Result};
use crate::model::{Notepad, Position};

/// A validated reference to an existing note plus any words after the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub position: Position,
    pub index: usize,
    pub words: Vec<String>,
}

/// Validates the `<position> [words...]` argument string shared by update and delete.
///
/// Checks run in a fixed order and the first failure wins. Only `update`
/// requires words after the position.
pub fn resolve_target(notepad: &Notepad, action: Action, args: &str) -> Result<Target> {
    if notepad.is_empty() {
        return Err(NotepadError::NothingToOperateOn(action));
    }
    if args.is_empty() {
        return Err(NotepadError::MissingPositionArgument);
    }

    let mut tokens = args.split(' ');
    let position: Position = tokens.next().unwrap_or_default().parse()?;
    let words: Vec<String> = tokens.map(str::to_string).collect();

    if action == Action::Update && words.is_empty() {
        return Err(NotepadError::MissingNoteArgument);
    }

    let index = position.index_in(notepad)?;
    Ok(Target {
        position,
        index,
        words,
    })
}
