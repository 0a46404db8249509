#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use controller::*;
pub use error::*;
pub use feedback::*;
pub use message::*;
pub use provider::*;
pub use session::*;
pub use text::*;
pub use types::*;
pub use word::*;

mod controller;
mod error;
mod feedback;
mod message;
mod provider;
mod session;
mod text;
mod types;
mod word;

/// Selectable word lengths offered to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    pub const fn word_length(self) -> Letters {
        use Difficulty::*;
        match self {
            Easy => 4,
            Medium => 5,
            Hard => 6,
            Expert => 7,
        }
    }

    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Kolay",
            Medium => "Orta",
            Hard => "Zor",
            Expert => "Uzman",
        }
    }

    pub fn from_word_length(length: Letters) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.word_length() == length)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}
