//! # CLI Behavior
//!
//! This is the terminal client for the notepad library. It is the only place
//! that knows about stdin/stdout, prompts, colours and exit codes.
//!
//! ## Session Flow
//!
//! 1. Parse flags with clap and set up logging.
//! 2. Settle the capacity: `--capacity` / `NOTEPAD_CAPACITY`, then the config
//!    file, then an interactive prompt. An answer that is not a non-negative
//!    integer becomes capacity 0.
//! 3. Read one line at a time, hand it to [`notepad::api::NotepadApi::execute`]
//!    and print the tagged messages it returns.
//! 4. Stop after `exit`. Running out of input before that is fatal.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and the read loop
//! - `render`: prompts and tagged message output
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
