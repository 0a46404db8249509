use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// A word folded to Turkish lower case and split into letters.
///
/// Folding happens once here, at the boundary, so that scoring and comparison
/// only ever look at plain chars.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    letters: Vec<char>,
}

impl Word {
    /// Folds raw user or network input. Surrounding whitespace is dropped.
    pub fn fold(raw: &str) -> Self {
        Self {
            letters: to_turkish_lower(raw.trim()).chars().collect(),
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> Letters {
        letters_from(self.letters.len())
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn is_alphabetic(&self) -> bool {
        self.letters.iter().all(|c| c.is_alphabetic())
    }

    /// Folded lower-case spelling.
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    /// Spelling used for display, in Turkish upper case.
    pub fn display_text(&self) -> String {
        to_turkish_upper(&self.text())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}
