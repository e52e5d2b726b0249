use higherlower_game::{
    Announcer, Feedback, GameSession, GuessInput, GuessSource, NumberRange, RoundEngine,
    RoundLimit, RoundResult, RoundState, SessionConfig, calculate, guess_budget,
};
use std::convert::Infallible;

/// Plays a textbook binary search using the engine's own feedback.
#[derive(Default)]
struct Bisector {
    bounds: Option<(i64, i64)>,
    last: Option<i64>,
}

impl GuessSource for Bisector {
    type Error = Infallible;

    fn next_guess(&mut self, range: &NumberRange) -> Result<GuessInput, Self::Error> {
        let (low, high) = *self.bounds.get_or_insert((range.low(), range.high()));
        let mid = low + (high - low) / 2;
        self.last = Some(mid);
        Ok(GuessInput::Value(mid))
    }
}

impl Announcer for Bisector {
    fn feedback(&mut self, feedback: &Feedback) {
        let (Some((low, high)), Some(last)) = (self.bounds, self.last) else {
            return;
        };
        match feedback {
            Feedback::TooLow { .. } => self.bounds = Some((last + 1, high)),
            Feedback::TooHigh { .. } => self.bounds = Some((low, last - 1)),
            fb if fb.is_terminal() => self.bounds = None,
            _ => {}
        }
    }
}

/// Shares one `Bisector` between the source and announcer roles.
struct Shared(std::rc::Rc<std::cell::RefCell<Bisector>>);

impl GuessSource for Shared {
    type Error = Infallible;

    fn next_guess(&mut self, range: &NumberRange) -> Result<GuessInput, Self::Error> {
        self.0.borrow_mut().next_guess(range)
    }
}

impl Announcer for Shared {
    fn feedback(&mut self, feedback: &Feedback) {
        self.0.borrow_mut().feedback(feedback);
    }
}

#[test]
fn binary_search_always_wins_within_budget() {
    for (low, high) in [(0, 10), (1, 2), (-50, 50), (0, 1023), (7, 1_000_000)] {
        let range = NumberRange::new(low, high).unwrap();
        let budget = guess_budget(&range);
        for secret in [low, high, low + (high - low) / 3] {
            let player = std::rc::Rc::new(std::cell::RefCell::new(Bisector::default()));
            let mut round = RoundEngine::with_secret(range, budget, secret);
            let outcome = round
                .run(
                    &mut Shared(std::rc::Rc::clone(&player)),
                    &mut Shared(std::rc::Rc::clone(&player)),
                )
                .unwrap();
            assert_eq!(outcome.result, RoundResult::Won, "{low}..={high} secret {secret}");
            assert!(outcome.guesses_used <= budget);
        }
    }
}

#[test]
fn full_fixed_session_with_bisection() {
    let config = SessionConfig::new(
        NumberRange::new(1, 100).unwrap(),
        RoundLimit::fixed(4).unwrap(),
    );
    let mut session = GameSession::new(config, 0xB15E_C7);
    let player = std::rc::Rc::new(std::cell::RefCell::new(Bisector::default()));
    let stats = session
        .play(
            &mut Shared(std::rc::Rc::clone(&player)),
            &mut Shared(std::rc::Rc::clone(&player)),
        )
        .unwrap()
        .unwrap();

    assert_eq!(session.rounds_played(), 4);
    assert_eq!(stats.rounds, 4);
    assert!(stats.best <= stats.worst);
    assert!(stats.worst <= calculate(1, 100).unwrap());
    assert!(session.history().iter().all(|h| h.result == RoundResult::Won));
    assert_eq!(session.history()[3].round, 4);
}

#[test]
fn repeated_guesses_never_change_state() {
    let range = NumberRange::default();
    let mut round = RoundEngine::with_secret(range, calculate(0, 10).unwrap(), 9);
    round.step(GuessInput::Value(4));
    for _ in 0..10 {
        round.step(GuessInput::Value(4));
        assert_eq!(round.guesses_used(), 1);
        assert_eq!(round.state(), RoundState::Active);
    }
}

#[test]
fn exhausting_budget_always_loses() {
    let range = NumberRange::new(0, 31).unwrap();
    let budget = guess_budget(&range);
    let mut round = RoundEngine::with_secret(range, budget, 31);
    for guess in 0..i64::from(budget) {
        round.step(GuessInput::Value(guess));
    }
    assert_eq!(round.state(), RoundState::Lost);
    assert_eq!(round.guesses_used(), budget);
}
