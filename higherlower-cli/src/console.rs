use colored::Colorize;
use higherlower_game::{
    Announcer, EXIT_TOKEN, Feedback, GuessInput, GuessSource, NumberRange, RoundHeading,
    RoundLimit,
};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use crate::prompt::{IntegerReply, IntegerRules, Terminal};

/// Guess prompt backed by a shared terminal.
pub struct TerminalGuesses<'a, R, W>(pub &'a RefCell<Terminal<R, W>>);

impl<R: BufRead, W: Write> GuessSource for TerminalGuesses<'_, R, W> {
    type Error = io::Error;

    fn next_guess(&mut self, range: &NumberRange) -> Result<GuessInput, Self::Error> {
        let rules = IntegerRules {
            low: Some(range.low()),
            high: Some(range.high()),
            exit_token: Some(EXIT_TOKEN),
        };
        match self.0.borrow_mut().integer("Guess: ", rules)? {
            IntegerReply::Number(value) => Ok(GuessInput::Value(value)),
            IntegerReply::Exit => Ok(GuessInput::Quit),
        }
    }
}

/// Decorated feedback printer sharing the terminal with [`TerminalGuesses`].
pub struct TerminalAnnouncer<'a, R, W>(pub &'a RefCell<Terminal<R, W>>);

impl<R: BufRead, W: Write> TerminalAnnouncer<'_, R, W> {
    fn emit(&self, line: impl std::fmt::Display) {
        if let Err(err) = self.0.borrow_mut().say(line) {
            log::warn!("failed to write feedback: {err}");
        }
    }
}

impl<R: BufRead, W: Write> Announcer for TerminalAnnouncer<'_, R, W> {
    fn feedback(&mut self, feedback: &Feedback) {
        let text = feedback.to_string();
        match feedback {
            Feedback::Spoiler { .. } => self.emit(text.magenta()),
            Feedback::TooLow { .. } | Feedback::TooHigh { .. } => self.emit(text),
            Feedback::Duplicate { .. } => self.emit(text.yellow()),
            Feedback::OneGuessLeft => {
                self.emit(format!("\n💣💣💣 {text} 💣💣💣\n").red().bold());
            }
            Feedback::Lucky => self.emit(format!("🍀🍀 {text} 🍀🍀").green().bold()),
            Feedback::JustMadeIt { .. } | Feedback::Won { .. } => self.emit(text.green()),
            Feedback::OutOfGuesses => self.emit(text.red()),
            Feedback::Quit => self.emit(text.dimmed()),
        }
    }

    fn round_started(&mut self, heading: &RoundHeading) {
        let title = match heading.limit {
            RoundLimit::Fixed(_) => format!("\n💿💿💿 {heading} 💿💿💿"),
            RoundLimit::Infinite => format!("\n♾♾♾ {heading} ♾♾♾"),
        };
        self.emit(title.bright_cyan().bold());
    }
}
