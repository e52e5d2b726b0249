use anyhow::Result;
use colored::Colorize;
use higherlower_game::{SessionReport, Statistics};
use std::io::Write;

pub fn write_statistics(out: &mut impl Write, stats: &Statistics) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊📊📊 Statistics 📊📊📊".bright_cyan().bold())?;
    writeln!(out, "{stats}")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_history(out: &mut impl Write, report: &SessionReport) -> Result<()> {
    for entry in &report.history {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use higherlower_game::{
        GameSession, GuessInput, NumberRange, RoundEngine, RoundLimit, SessionConfig,
    };

    fn played_report() -> SessionReport {
        let config = SessionConfig::new(NumberRange::default(), RoundLimit::Fixed(2));
        let mut session = GameSession::new(config, 5);
        for secret in [3, 8] {
            let mut round = RoundEngine::with_secret(config.range, session.budget(), secret);
            round.step(GuessInput::Value(5));
            round.step(GuessInput::Value(secret));
            session.record(&round.outcome().unwrap());
        }
        session.report()
    }

    #[test]
    fn statistics_block_has_summary_line() {
        let report = played_report();
        let mut out = Vec::new();
        write_statistics(&mut out, report.statistics.as_ref().unwrap()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Statistics"));
        assert!(text.contains("Best:2 | Worst:2 | Average:2.00"));
    }

    #[test]
    fn history_lists_rounds_in_order() {
        let mut out = Vec::new();
        write_history(&mut out, &played_report()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Round 1: Well done!"));
        assert!(lines[1].starts_with("Round 2: "));
    }
}
