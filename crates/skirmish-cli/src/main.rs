//! skirmish - play the skirmish variant from a terminal.
//!
//! Reads one command per line from stdin and prints the session's outbound
//! events to stdout. Logs go to stderr.

mod app;
mod command;
mod config;
mod render;

use anyhow::Context;
use app::{App, Flow};
use clap::Parser;
use command::Command;
use config::CliConfig;
use skirmish_core::Layout;
use skirmish_engine::Session;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Play skirmish from the terminal.
#[derive(Parser)]
#[command(name = "skirmish")]
#[command(about = "Chess variant with chained turns, played from the terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value_os_t = CliConfig::default_path())]
    config: PathBuf,

    /// Starting layout notation, overriding the config file
    #[arg(long)]
    layout: Option<String>,

    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = CliConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(layout) = args.layout {
        config.layout = Some(layout);
    }

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(io::stderr)
        .init();

    let layout: Layout = config.starting_layout()?;
    tracing::info!(layout = %layout.to_notation(), "starting session");

    let mut app = App::new(Session::from_layout(&layout), config.display.clone(), args.json);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    if !args.json {
        writeln!(stdout, "{}", render::board(app.session().board(), &config.display))?;
        writeln!(stdout, "{} to move. Type 'help' for commands.", app.session().active_player())?;
    }

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };
        if app.handle(command, &mut stdout)? == Flow::Quit {
            break;
        }
        stdout.flush()?;
    }

    tracing::info!(turns = app.session().history().len(), "session ended");
    Ok(())
}
