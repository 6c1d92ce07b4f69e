use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Says goodbye and marks the result as terminal. The caller ends the process.
pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Bye!"))
        .terminating())
}
