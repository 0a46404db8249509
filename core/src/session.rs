use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the word provider.
    Loading,
    Active,
    Won,
    Lost,
    /// The word could not be loaded; only a new session gets out of here.
    Unavailable,
}

impl SessionState {
    pub const fn accepts_guesses(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Loading
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Scored,
    Won,
    Lost,
}

/// One playthrough against a single target word.
///
/// The target is fixed at construction, starting over means building a new
/// session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    word_length: Letters,
    target: Option<Word>,
    guesses_remaining: Attempts,
    history: Vec<GuessResult>,
    state: SessionState,
}

impl Session {
    pub fn loading(word_length: Letters) -> Self {
        Self {
            word_length,
            target: None,
            guesses_remaining: 0,
            history: Vec::new(),
            state: SessionState::Loading,
        }
    }

    pub fn unavailable(word_length: Letters) -> Self {
        Self {
            state: SessionState::Unavailable,
            ..Self::loading(word_length)
        }
    }

    pub fn with_target(target: Word) -> Self {
        Self {
            word_length: target.len(),
            target: Some(target),
            guesses_remaining: MAX_GUESSES,
            history: Vec::new(),
            state: SessionState::Active,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn word_length(&self) -> Letters {
        self.word_length
    }

    pub fn guesses_remaining(&self) -> Attempts {
        self.guesses_remaining
    }

    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    pub fn is_locked(&self) -> bool {
        !self.state.accepts_guesses()
    }

    /// The target, once the player may see it.
    pub fn revealed_target(&self) -> Option<&Word> {
        match self.state {
            SessionState::Lost | SessionState::Won => self.target.as_ref(),
            _ => None,
        }
    }

    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome> {
        let target = match (&self.target, self.state) {
            (None, _) => return Err(GuessError::NotReady),
            (Some(_), state) if !state.accepts_guesses() => return Err(GuessError::AlreadyEnded),
            (Some(target), _) => target,
        };

        let guess = Word::fold(raw);
        if guess.len() != target.len() {
            return Err(GuessError::LengthMismatch {
                expected: target.len(),
                actual: guess.len(),
            });
        }

        if self.guesses_remaining == 0 {
            return Err(GuessError::NoGuessesLeft);
        }

        self.guesses_remaining -= 1;
        let result = GuessResult::score(&guess, target);
        let solved = guess == *target;
        self.history.push(result);

        Ok(if solved {
            self.guesses_remaining = 0;
            self.state = SessionState::Won;
            log::debug!("session won after {} guesses", self.history.len());
            GuessOutcome::Won
        } else if self.guesses_remaining == 0 {
            self.state = SessionState::Lost;
            log::debug!("session lost");
            GuessOutcome::Lost
        } else {
            GuessOutcome::Scored
        })
    }
}
