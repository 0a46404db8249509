use alloc::string::String;
use thiserror::Error;

use crate::Letters;

/// Reasons a guess submission is rejected without consuming an attempt.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("No word has been loaded yet")]
    NotReady,
    #[error("Game already ended, no new guesses are accepted")]
    AlreadyEnded,
    #[error("Guess has {actual} letters, expected {expected}")]
    LengthMismatch { expected: Letters, actual: Letters },
    #[error("No guesses left")]
    NoGuessesLeft,
}

/// Every way the word provider can fail to deliver a usable target word.
///
/// The controller does not distinguish between these, all of them end the load
/// in the same locked state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Word service unreachable: {0}")]
    Transport(String),
    #[error("Word service answered with status {0}")]
    Status(u16),
    #[error("Word service sent an unreadable response: {0}")]
    Decode(String),
    #[error("Word service sent an empty word")]
    Empty,
    #[error("Word service sent a word with non-letter characters")]
    NotAlphabetic,
    #[error("Word service sent a {actual} letter word, expected {expected}")]
    WrongLength { expected: Letters, actual: Letters },
    #[error("Word load was cancelled")]
    Cancelled,
}

pub type Result<T, E = GuessError> = core::result::Result<T, E>;
