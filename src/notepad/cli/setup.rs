use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notepad", bin_name = "notepad", version)]
#[command(about = "A bounded, session-only notepad for the terminal", long_about = None)]
pub struct Cli {
    /// Maximum number of notes (skips the startup prompt)
    #[arg(short, long, env = "NOTEPAD_CAPACITY", help_heading = "Options")]
    pub capacity: Option<usize>,

    /// Read settings from a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,

    /// Do not print prompts
    #[arg(short, long, help_heading = "Options")]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}
