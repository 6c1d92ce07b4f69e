use super::render::{print_messages, print_prompt, CAPACITY_PROMPT, COMMAND_PROMPT};
use super::setup::Cli;
use clap::Parser;
use notepad::api::NotepadApi;
use notepad::config::NotepadConfig;
use notepad::error::{NotepadError, Result};
use std::io::{self, BufRead, IsTerminal, Write};

struct AppContext {
    capacity: Option<usize>,
    use_color: bool,
    show_prompt: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&ctx, &mut stdin.lock(), &mut stdout.lock())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match &cli.config {
        Some(path) => NotepadConfig::load(path)?,
        None => NotepadConfig::default(),
    };

    let use_color = config.color && !cli.no_color && io::stdout().is_terminal();
    if !use_color {
        colored::control::set_override(false);
    }

    Ok(AppContext {
        capacity: cli.capacity.or(config.capacity),
        use_color,
        show_prompt: config.prompt && !cli.quiet,
    })
}

fn run_session<R: BufRead, W: Write>(ctx: &AppContext, input: &mut R, out: &mut W) -> Result<()> {
    let capacity = match ctx.capacity {
        Some(capacity) => capacity,
        None => {
            if ctx.show_prompt {
                print_prompt(out, CAPACITY_PROMPT)?;
            }
            let capacity = read_capacity(input);
            if ctx.show_prompt {
                writeln!(out)?;
            }
            capacity
        }
    };

    log::info!("starting session with capacity {}", capacity);
    let mut api = NotepadApi::new(capacity);

    while !api.is_terminated() {
        if ctx.show_prompt {
            print_prompt(out, COMMAND_PROMPT)?;
        }
        let line = read_command_line(input)?;
        let result = api.execute(&line);
        print_messages(out, &result.messages, ctx.use_color)?;
    }

    Ok(())
}

/// Reads the capacity answer. Anything that is not a non-negative integer means 0.
fn read_capacity<R: BufRead>(input: &mut R) -> usize {
    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        log::warn!("could not read capacity ({}), using 0", e);
        return 0;
    }
    match line.trim().parse() {
        Ok(capacity) => capacity,
        Err(_) => {
            log::warn!("capacity {:?} is not a number, using 0", line.trim());
            0
        }
    }
}

fn read_command_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(NotepadError::InputClosed);
    }
    Ok(line)
}
