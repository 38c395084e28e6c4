//! Session module - the game loop behind abstract capability seams.
//!
//! The terminal never appears here. Keys arrive through [`InputSource`] and
//! frames leave through [`Screen`], so the loop body runs under test with a
//! scripted key sequence and a capturing screen, while the binary plugs in
//! the crossterm-backed implementations.
//!
//! One loop iteration is: poll at most one key, advance gravity by the
//! elapsed wall-clock time, redraw.

use std::time::{Duration, Instant};

use anyhow::Result;

use blockfall_core::{GameState, ShapeSource};
use blockfall_types::{GameAction, INPUT_POLL_MS};

/// Non-blocking keyboard seam.
///
/// `poll` waits at most `timeout` and reports at most one action. `None`
/// means no key arrived this tick, which is a normal outcome, not an error.
pub trait InputSource {
    fn poll(&mut self, timeout: Duration) -> Result<Option<GameAction>>;

    /// Block until any key is pressed (end-of-session acknowledgement).
    fn wait_key(&mut self) -> Result<()>;
}

/// Display seam: present one frame of the current state.
pub trait Screen {
    fn present(&mut self, state: &GameState) -> Result<()>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self, timeout: Duration) -> Result<Option<GameAction>> {
        (**self).poll(timeout)
    }

    fn wait_key(&mut self) -> Result<()> {
        (**self).wait_key()
    }
}

impl<T: Screen + ?Sized> Screen for &mut T {
    fn present(&mut self, state: &GameState) -> Result<()> {
        (**self).present(state)
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player pressed the quit key.
    Quit,
    /// A freshly spawned piece collided at its spawn position.
    GameOver,
}

/// The game loop driver. Owns the input, screen, and shape source for one
/// session and steps the simulation against wall-clock time.
pub struct Session<I, S, R> {
    input: I,
    screen: S,
    shapes: R,
    poll_timeout: Duration,
}

impl<I: InputSource, S: Screen, R: ShapeSource> Session<I, S, R> {
    pub fn new(input: I, screen: S, shapes: R) -> Self {
        Self {
            input,
            screen,
            shapes,
            poll_timeout: Duration::from_millis(INPUT_POLL_MS),
        }
    }

    /// Run a fresh game to completion.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let mut state = GameState::new(&mut self.shapes);
        self.run_state(&mut state)
    }

    /// Drive an existing state to completion.
    ///
    /// On game over the final frame stays up and one more (blocking)
    /// keypress is consumed before returning; quitting returns immediately.
    pub fn run_state(&mut self, state: &mut GameState) -> Result<SessionOutcome> {
        self.screen.present(state)?;

        let mut last = Instant::now();
        let outcome = loop {
            let elapsed_ms = last.elapsed().as_millis() as u32;
            last = Instant::now();
            if let Some(outcome) = self.step(state, elapsed_ms)? {
                break outcome;
            }
        };

        if outcome == SessionOutcome::GameOver {
            self.input.wait_key()?;
        }
        Ok(outcome)
    }

    /// One loop iteration: poll a single key, advance gravity by
    /// `elapsed_ms`, redraw. Returns the outcome once the session is over.
    pub fn step(
        &mut self,
        state: &mut GameState,
        elapsed_ms: u32,
    ) -> Result<Option<SessionOutcome>> {
        if state.game_over() {
            return Ok(Some(SessionOutcome::GameOver));
        }

        match self.input.poll(self.poll_timeout)? {
            Some(GameAction::Quit) => return Ok(Some(SessionOutcome::Quit)),
            Some(action) => {
                state.apply_action(action);
            }
            None => {}
        }

        state.tick(elapsed_ms, &mut self.shapes);
        self.screen.present(state)?;

        if state.game_over() {
            return Ok(Some(SessionOutcome::GameOver));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::{Board, SequenceSource};
    use blockfall_types::{PieceKind, GRAVITY_INTERVAL_MS};
    use std::collections::VecDeque;

    /// Scripted input: pops one entry per poll, then reports no key.
    struct ScriptInput {
        polls: VecDeque<Option<GameAction>>,
        waited: bool,
    }

    impl ScriptInput {
        fn new(polls: Vec<Option<GameAction>>) -> Self {
            Self {
                polls: polls.into(),
                waited: false,
            }
        }

        fn idle() -> Self {
            Self::new(Vec::new())
        }
    }

    impl InputSource for ScriptInput {
        fn poll(&mut self, _timeout: Duration) -> Result<Option<GameAction>> {
            Ok(self.polls.pop_front().flatten())
        }

        fn wait_key(&mut self) -> Result<()> {
            self.waited = true;
            Ok(())
        }
    }

    /// Counts presented frames.
    #[derive(Default)]
    struct CountingScreen {
        frames: usize,
    }

    impl Screen for CountingScreen {
        fn present(&mut self, _state: &GameState) -> Result<()> {
            self.frames += 1;
            Ok(())
        }
    }

    fn o_session(input: ScriptInput) -> Session<ScriptInput, CountingScreen, SequenceSource> {
        Session::new(
            input,
            CountingScreen::default(),
            SequenceSource::new(vec![PieceKind::O]),
        )
    }

    #[test]
    fn test_quit_ends_step_immediately() {
        let mut session = o_session(ScriptInput::new(vec![Some(GameAction::Quit)]));
        let mut shapes = SequenceSource::new(vec![PieceKind::O]);
        let mut state = GameState::new(&mut shapes);

        let outcome = session.step(&mut state, 0).unwrap();
        assert_eq!(outcome, Some(SessionOutcome::Quit));
        // No frame follows a quit.
        assert_eq!(session.screen.frames, 0);
    }

    #[test]
    fn test_step_applies_one_action_and_redraws() {
        let mut session = o_session(ScriptInput::new(vec![
            Some(GameAction::MoveLeft),
            Some(GameAction::MoveLeft),
        ]));
        let mut shapes = SequenceSource::new(vec![PieceKind::O]);
        let mut state = GameState::new(&mut shapes);

        assert_eq!(session.step(&mut state, 0).unwrap(), None);
        assert_eq!(state.active().x, 3);
        assert_eq!(session.screen.frames, 1);

        assert_eq!(session.step(&mut state, 0).unwrap(), None);
        assert_eq!(state.active().x, 2);
        assert_eq!(session.screen.frames, 2);
    }

    #[test]
    fn test_empty_poll_still_advances_gravity() {
        let mut session = o_session(ScriptInput::idle());
        let mut shapes = SequenceSource::new(vec![PieceKind::O]);
        let mut state = GameState::new(&mut shapes);

        assert_eq!(session.step(&mut state, GRAVITY_INTERVAL_MS).unwrap(), None);
        assert_eq!(state.active().y, 1);
    }

    #[test]
    fn test_idle_session_reaches_game_over() {
        let mut session = o_session(ScriptInput::idle());
        let mut shapes = SequenceSource::new(vec![PieceKind::O]);
        let mut state = GameState::new(&mut shapes);

        let mut outcome = None;
        for _ in 0..1000 {
            outcome = session.step(&mut state, GRAVITY_INTERVAL_MS).unwrap();
            if outcome.is_some() {
                break;
            }
        }
        assert_eq!(outcome, Some(SessionOutcome::GameOver));
        assert!(state.game_over());
        assert!(session.screen.frames > 0);
    }

    #[test]
    fn test_run_state_waits_for_key_after_game_over() {
        let mut board = Board::new();
        for x in 3..=6 {
            board.set(x, 0, true);
            board.set(x, 1, true);
        }
        let mut session = o_session(ScriptInput::idle());
        let mut state = GameState::with_board(board, &mut session.shapes);
        assert!(state.game_over());

        let outcome = session.run_state(&mut state).unwrap();
        assert_eq!(outcome, SessionOutcome::GameOver);
        assert!(session.input.waited);
        // The opening frame was still presented.
        assert_eq!(session.screen.frames, 1);
    }
}
