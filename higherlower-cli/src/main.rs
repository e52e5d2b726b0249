mod console;
mod game;
mod prompt;
mod reports;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::io;

use game::GameOptions;
use prompt::Terminal;

#[derive(Debug, Parser)]
#[command(name = "higherlower", version)]
#[command(about = "Guess the secret number in as few tries as you can")]
struct Args {
    /// Print each round's secret before guessing (debugging aid)
    #[arg(long)]
    show_secret: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    const fn options(&self) -> GameOptions {
        GameOptions {
            seed: None,
            show_secret: self.show_secret,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let terminal = Terminal::new(io::stdin().lock(), io::stdout());
    let report = game::run(terminal, &args.options())?;
    log::debug!(
        "session over: {} rounds played, quit={}",
        report.rounds_played,
        report.quit
    );
    Ok(())
}
