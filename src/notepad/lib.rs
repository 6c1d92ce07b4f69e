//! # Notepad Architecture
//!
//! Notepad is a small library for keeping a bounded list of text notes during
//! one interactive session, plus a terminal client built on top of it. Nothing
//! is persisted: the notes live exactly as long as the session value does.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, prompts, stdin loop, coloured output, exit codes  │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses a line, resolves the Action, dispatches           │
//! │  - Turns validation errors into [Error] messages            │
//! │  - Tracks Running / Terminated                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / list / clear / update / delete / exit           │
//! │  - Pure logic over a &mut Notepad, returns Result<CmdResult>│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs)                                           │
//! │  - Notepad: Vec<String> + fixed capacity                    │
//! │  - Position: 1-based user index                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions
//!
//! Users address notes by 1-based position. A position is parsed from any
//! integer and only mapped to a 0-based index once it is known to point at an
//! existing note. Out-of-range errors report the notepad's capacity as the upper
//! bound, not its current length.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests for each command's validation order and mutation.
//! 2. **API**: line-level scenarios through [`api::NotepadApi::execute`].
//! 3. **CLI**: the read loop against in-memory readers/writers, and end-to-end
//!    runs of the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: [`model::Notepad`] and [`model::Position`]
//! - [`parser`]: Splits raw input lines into command and arguments
//! - [`config`]: Optional JSON settings file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
