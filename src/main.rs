use std::io;

use chess_console::config::Config;
use chess_console::console::Console;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,
    /// Overrides `LOGGER_LEVEL` (error, warn, info, debug, trace or off).
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
    /// Don't print the version banner on startup.
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug, Default)]
enum Mode {
    /// Play a game on stdin/stdout (default).
    #[default]
    Play,
    /// Print version and build information.
    Version,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.mode.unwrap_or_default() {
        Mode::Version => {
            chess_console::print_info();
            chess_console::print_binary_info();
            Ok(())
        },
        Mode::Play => play(args.log_level, args.quiet),
    }
}

fn play(log_level: Option<LevelFilter>, quiet: bool) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(level) = log_level {
        config.logger.level = level;
    }
    chess_console::logging::init(&config.logger)?;
    tracing::debug!(?config, "loaded configuration");

    if !quiet {
        chess_console::print_info();
        println!();
    }
    let outcome = Console::new().run(&mut io::stdin().lock(), &mut io::stdout().lock())?;
    tracing::info!(?outcome, "session finished");
    Ok(())
}
