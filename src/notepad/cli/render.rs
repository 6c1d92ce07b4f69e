use colored::Colorize;
use notepad::api::{CmdMessage, MessageLevel};
use std::io::{self, Write};

pub(super) const CAPACITY_PROMPT: &str = "Enter the maximum number of notes: ";
pub(super) const COMMAND_PROMPT: &str = "Enter a command and data: ";

pub(super) fn format_message(message: &CmdMessage, use_color: bool) -> String {
    let line = message.to_string();
    if !use_color {
        return line;
    }
    match message.level {
        MessageLevel::Info => line.dimmed().to_string(),
        MessageLevel::Success => line.green().to_string(),
        MessageLevel::Error => line.red().to_string(),
    }
}

pub(super) fn print_messages<W: Write>(
    out: &mut W,
    messages: &[CmdMessage],
    use_color: bool,
) -> io::Result<()> {
    for message in messages {
        writeln!(out, "{}", format_message(message, use_color))?;
    }
    out.flush()
}

pub(super) fn print_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{}", prompt)?;
    out.flush()
}
