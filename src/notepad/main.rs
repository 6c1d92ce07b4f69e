//! # Notepad CLI
//!
//! The binary is intentionally thin: the interactive client lives in `cli/`,
//! and this file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/notepad/cli/)                               │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - capacity prompt + stdin read loop (commands.rs)          │
//! │  - tagged, coloured output (render.rs)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (src/notepad/lib.rs)                               │
//! │  - NotepadApi: line → Action → command → CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation errors never reach this file; they come back from the API as
//! `[Error]` messages. Only I/O failures and a closed input stream end up here,
//! and they exit with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
