use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Reply to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "yes" | "y" => Some(Self::Yes),
            "no" | "n" => Some(Self::No),
            _ => None,
        }
    }
}

/// Reply to an integer question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerReply {
    Number(i64),
    /// The exit token was typed (or input ended while one was on offer).
    Exit,
}

/// Bounds and escape hatch for an integer question.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerRules<'a> {
    pub low: Option<i64>,
    pub high: Option<i64>,
    pub exit_token: Option<&'a str>,
}

impl IntegerRules<'_> {
    fn error_message(&self) -> String {
        match (self.low, self.high) {
            (Some(low), Some(high)) => {
                format!("Please enter an integer that is between {low} and {high} (inclusive)")
            }
            (Some(low), None) => {
                format!("Please enter an integer that is more than / equal to {low}")
            }
            (None, Some(high)) => {
                format!("Please enter an integer that is less than / equal to {high}")
            }
            (None, None) => "Please enter an integer".to_string(),
        }
    }

    fn accepts(&self, value: i64) -> bool {
        self.low.is_none_or(|low| value >= low) && self.high.is_none_or(|high| value <= high)
    }
}

/// Line-oriented question/answer channel to the player.
/// Every question reprompts until it gets a usable answer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    pub const fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask `question` and read one lowercased, trimmed line; `None` at end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    pub fn yes_no(&mut self, question: &str) -> io::Result<Answer> {
        loop {
            let Some(response) = self.ask(question)? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for yes / no",
                ));
            };
            if let Some(answer) = Answer::parse(&response) {
                return Ok(answer);
            }
            self.say("Please enter yes / no")?;
        }
    }

    pub fn integer(&mut self, question: &str, rules: IntegerRules<'_>) -> io::Result<IntegerReply> {
        let error = rules.error_message();
        loop {
            let Some(response) = self.ask(question)? else {
                if rules.exit_token.is_some() {
                    return Ok(IntegerReply::Exit);
                }
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for an integer",
                ));
            };
            if rules.exit_token == Some(response.as_str()) {
                return Ok(IntegerReply::Exit);
            }
            match response.parse::<i64>() {
                Ok(value) if rules.accepts(value) => return Ok(IntegerReply::Number(value)),
                _ => self.say(&error)?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
