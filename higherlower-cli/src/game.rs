use anyhow::{Context, Result, bail};
use colored::Colorize;
use higherlower_game::{GameSession, NumberRange, RoundLimit, SessionConfig, SessionReport};
use std::cell::RefCell;
use std::io::{BufRead, Write};

use crate::console::{TerminalAnnouncer, TerminalGuesses};
use crate::prompt::{IntegerReply, IntegerRules, Terminal};
use crate::reports::{write_history, write_statistics};

const INSTRUCTIONS: &str = "
⭐⭐⭐⭐ Instructions ⭐⭐⭐⭐

The computer picks a secret number inside a range you choose and you try to
find it.

- After each guess you are told whether you were too high or too low.
- Each round allows a limited number of guesses, based on the size of the
  range: enough for a perfect binary search, plus one.
- Guessing a number twice does not cost you anything.
- Type xxx at the guess prompt to stop playing.
- Leave the round count blank to keep playing until you quit.

At the end you get your best, worst and average guesses per round.
";

/// Non-interactive settings taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOptions {
    /// Fixed RNG seed; fresh entropy when unset.
    pub seed: Option<u64>,
    pub show_secret: bool,
}

/// Run the interactive game from banner to goodbye.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read from or written to.
pub fn run<R: BufRead, W: Write>(
    terminal: Terminal<R, W>,
    options: &GameOptions,
) -> Result<SessionReport> {
    let terminal = RefCell::new(terminal);

    let config = {
        let mut guard = terminal.borrow_mut();
        let term = &mut *guard;
        announce_banner(term)?;
        if term
            .yes_no("Do you want to read the instructions? ")
            .context("reading instructions choice")?
            .is_yes()
        {
            term.say(INSTRUCTIONS)?;
        }
        let rounds = ask_rounds(term)?;
        let range = ask_range(term)?;
        SessionConfig::new(range, rounds).with_show_secret(options.show_secret)
    };

    let mut session = match options.seed {
        Some(seed) => GameSession::new(config, seed),
        None => GameSession::from_entropy(config),
    };
    log::info!("session seed {}", session.seed());

    terminal.borrow_mut().say(format!(
        "You have {} guesses per round ({} over {} rounds).",
        session.config().guess_budget(),
        session.config().planned_allowance(),
        session.config().rounds.planned_rounds()
    ))?;

    session
        .play(
            &mut TerminalGuesses(&terminal),
            &mut TerminalAnnouncer(&terminal),
        )
        .context("reading guesses")?;

    let report = session.report();
    let mut term = terminal.into_inner();
    term.say("")?;
    finish(&mut term, &report)?;
    Ok(report)
}

fn announce_banner<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<()> {
    term.say(
        "🔼🔼🔼 Welcome to the Higher Lower Game 🔽🔽🔽"
            .bright_cyan()
            .bold(),
    )?;
    term.say("")?;
    Ok(())
}

fn ask_rounds<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<RoundLimit> {
    let rules = IntegerRules {
        low: Some(1),
        high: None,
        exit_token: Some(""),
    };
    loop {
        let reply = term
            .integer("Rounds <enter> for infinite: ", rules)
            .context("reading round count")?;
        match reply {
            IntegerReply::Exit => return Ok(RoundLimit::Infinite),
            IntegerReply::Number(rounds) => match u32::try_from(rounds) {
                Ok(rounds) => return Ok(RoundLimit::fixed(rounds)?),
                Err(_) => term.say(format!(
                    "Please enter an integer that is less than / equal to {}",
                    u32::MAX
                ))?,
            },
        }
    }
}

fn ask_range<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<NumberRange> {
    let use_default = term
        .yes_no("Do you want to use the default game parameters? ")
        .context("reading range choice")?;
    if use_default.is_yes() {
        return Ok(NumberRange::default());
    }

    let low = ask_number(
        term,
        "Low Number? ",
        IntegerRules {
            high: Some(i64::MAX - 1),
            ..IntegerRules::default()
        },
    )?;
    let high = ask_number(
        term,
        "High Number? ",
        IntegerRules {
            low: Some(low + 1),
            ..IntegerRules::default()
        },
    )?;
    Ok(NumberRange::new(low, high)?)
}

fn ask_number<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    question: &str,
    rules: IntegerRules<'_>,
) -> Result<i64> {
    match term.integer(question, rules).context("reading range bound")? {
        IntegerReply::Number(value) => Ok(value),
        IntegerReply::Exit => bail!("{question:?} does not accept an exit token"),
    }
}

fn finish<R: BufRead, W: Write>(term: &mut Terminal<R, W>, report: &SessionReport) -> Result<()> {
    if let Some(stats) = report.statistics.as_ref() {
        write_statistics(term.output_mut(), stats)?;
        if term
            .yes_no("Do you want to see your game history? ")
            .context("reading history choice")?
            .is_yes()
        {
            write_history(term.output_mut(), report)?;
        }
    }
    term.say("")?;
    term.say("Thanks for playing.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use higherlower_game::RoundResult;
    use std::io::Cursor;

    fn play(script: &str, options: &GameOptions) -> (SessionReport, String) {
        let mut output = Vec::new();
        let terminal = Terminal::new(Cursor::new(script.as_bytes().to_vec()), &mut output);
        let report = run(terminal, options).unwrap();
        (report, String::from_utf8(output).unwrap())
    }

    #[test]
    fn two_value_range_always_wins() {
        // Guessing 1 then 2 covers both candidates; a leftover "2" is
        // rejected by the history prompt before "y" answers it.
        let (report, out) = play("n\n1\nn\n1\n2\n1\n2\ny\n", &GameOptions::default());
        assert_eq!(report.rounds_played, 1);
        assert_eq!(report.guess_budget, 2);
        assert_eq!(report.history[0].result, RoundResult::Won);
        assert!(out.contains("Round 1 of 1"));
        assert!(out.contains("Statistics"));
        assert!(out.contains("Round 1: "));
        assert!(out.ends_with("Thanks for playing.\n"));
    }

    #[test]
    fn immediate_quit_skips_statistics() {
        let (report, out) = play("n\n\ny\nxxx\n", &GameOptions::default());
        assert!(report.quit);
        assert_eq!(report.rounds_played, 0);
        assert!(report.config.rounds.is_infinite());
        assert!(!out.contains("Statistics"));
        assert!(out.contains("Round 1 (Infinite Mode)"));
    }

    #[test]
    fn show_secret_lets_a_scripted_player_win() {
        let options = GameOptions {
            seed: Some(42),
            show_secret: true,
        };
        // First pass: learn the secret of round one from the spoiler.
        let (_, out) = play("n\n1\ny\nxxx\n", &options);
        let secret: i64 = out
            .lines()
            .find_map(|line| line.split("the secret is ").nth(1))
            .and_then(|rest| rest.trim().split('\u{1b}').next())
            .and_then(|digits| digits.parse().ok())
            .unwrap();

        let (report, out) = play(&format!("n\n1\ny\n{secret}\nn\n"), &options);
        assert_eq!(report.seed, 42);
        assert_eq!(report.history[0].guesses_used, 1);
        assert!(out.contains("Best:1 | Worst:1 | Average:1.00"));
    }

    #[test]
    fn round_count_reprompts_with_lower_bound_only() {
        let (report, out) = play("n\n0\n4294967296\n2\ny\nxxx\n", &GameOptions::default());
        assert_eq!(report.config.rounds, RoundLimit::Fixed(2));
        assert!(out.contains("Please enter an integer that is more than / equal to 1"));
        assert!(out.contains("less than / equal to 4294967295"));
        assert!(!out.contains("between 1 and"));
    }

    #[test]
    fn custom_range_is_validated_by_prompts() {
        let (report, out) = play("n\n\nn\n5\n5\n6\nxxx\n", &GameOptions::default());
        assert_eq!(report.config.range, NumberRange::new(5, 6).unwrap());
        assert!(out.contains("more than / equal to 6"));
    }
}
