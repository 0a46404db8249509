//! Per-letter feedback for a guess.
//!
//! Scoring runs in two passes over a multiset of the target's letters. Exact
//! position matches are consumed first, then the remaining letters are handed
//! out left to right as `Present`. This is what keeps repeated letters honest:
//! a later exact match can never lose its letter to an earlier misplaced one.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterClass {
    /// Right letter in the right position.
    Correct,
    /// Letter occurs elsewhere in the target.
    Present,
    Absent,
}

impl LetterClass {
    pub const fn emoji(self) -> char {
        use LetterClass::*;
        match self {
            Correct => '🟩',
            Present => '🟨',
            Absent => '⬜',
        }
    }
}

/// Classifies `guess` against `target`.
///
/// Both slices must have the same length; callers check this before scoring.
pub fn classify(guess: &[char], target: &[char]) -> Vec<LetterClass> {
    debug_assert_eq!(guess.len(), target.len());

    let mut remaining: HashMap<char, u8> = HashMap::new();
    for &letter in target {
        *remaining.entry(letter).or_default() += 1;
    }

    let mut classes: Vec<Option<LetterClass>> = guess
        .iter()
        .zip(target)
        .map(|(g, t)| {
            if g == t {
                if let Some(count) = remaining.get_mut(g) {
                    *count -= 1;
                }
                Some(LetterClass::Correct)
            } else {
                None
            }
        })
        .collect();

    for (class, letter) in classes.iter_mut().zip(guess) {
        if class.is_some() {
            continue;
        }
        *class = Some(match remaining.get_mut(letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                LetterClass::Present
            }
            _ => LetterClass::Absent,
        });
    }

    classes
        .into_iter()
        .map(|class| class.unwrap_or(LetterClass::Absent))
        .collect()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredLetter {
    pub letter: char,
    pub class: LetterClass,
}

impl ScoredLetter {
    /// Letter as shown on its tile, Turkish upper case.
    pub fn display_text(self) -> String {
        turkish_upper_char(self.letter).collect()
    }
}

/// One scored row of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    letters: Vec<ScoredLetter>,
}

impl GuessResult {
    pub fn score(guess: &Word, target: &Word) -> Self {
        let letters = guess
            .letters()
            .iter()
            .zip(classify(guess.letters(), target.letters()))
            .map(|(&letter, class)| ScoredLetter { letter, class })
            .collect();
        Self { letters }
    }

    pub fn letters(&self) -> &[ScoredLetter] {
        &self.letters
    }

    pub fn count(&self, class: LetterClass) -> usize {
        self.letters
            .iter()
            .filter(|scored| scored.class == class)
            .count()
    }

    pub fn is_solved(&self) -> bool {
        !self.letters.is_empty() && self.count(LetterClass::Correct) == self.letters.len()
    }

    /// Shareable square summary, e.g. `🟩🟨⬜⬜🟩`.
    pub fn to_emoji(&self) -> String {
        self.letters
            .iter()
            .map(|scored| scored.class.emoji())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterClass::*;

    fn classes(guess: &str, target: &str) -> Vec<LetterClass> {
        GuessResult::score(&Word::fold(guess), &Word::fold(target))
            .letters()
            .iter()
            .map(|scored| scored.class)
            .collect()
    }

    #[test]
    fn repeated_guess_letters_are_absent_once_target_count_is_spent() {
        assert_eq!(
            classes("KAPAK", "KALEM"),
            [Correct, Correct, Absent, Absent, Absent]
        );
    }

    #[test]
    fn exact_match_wins_the_letter_over_an_earlier_misplaced_copy() {
        assert_eq!(classes("abca", "xxxa"), [Absent, Absent, Absent, Correct]);
        assert_eq!(classes("aabb", "ccba"), [Present, Absent, Correct, Absent]);
    }

    #[test]
    fn misplaced_letters_are_assigned_left_to_right() {
        assert_eq!(classes("eexx", "yyye"), [Present, Absent, Absent, Absent]);
    }

    #[test]
    fn dotted_and_dotless_i_are_different_letters() {
        assert_eq!(classes("kıl", "kil"), [Correct, Absent, Correct]);
        assert_eq!(classes("KIL", "kıl"), [Correct, Correct, Correct]);
    }

    #[test]
    fn solved_row_is_all_correct() {
        let row = GuessResult::score(&Word::fold("ELMA"), &Word::fold("elma"));

        assert!(row.is_solved());
        assert_eq!(row.to_emoji(), "🟩🟩🟩🟩");
    }

    #[test]
    fn scored_letters_display_in_turkish_upper_case() {
        let row = GuessResult::score(&Word::fold("iğne"), &Word::fold("ipek"));
        let shown: String = row
            .letters()
            .iter()
            .map(|scored| scored.display_text())
            .collect();

        assert_eq!(shown, "İĞNE");
    }

    /// Checks the scoring laws for every guess over a small alphabet.
    #[test]
    fn scoring_laws_hold_exhaustively() {
        let alphabet = ['a', 'ı', 'i', 'k'];
        let targets = ["kaka", "ıiık", "aaaa", "kiak"];

        for target in targets {
            let target: Vec<char> = target.chars().collect();
            for n in 0..alphabet.len().pow(4) {
                let guess: Vec<char> = (0..4)
                    .map(|pos| alphabet[(n / alphabet.len().pow(pos)) % alphabet.len()])
                    .collect();
                let result = classify(&guess, &target);

                assert_eq!(result.len(), target.len());

                let exact = guess.iter().zip(&target).filter(|(g, t)| g == t).count();
                let correct = result.iter().filter(|&&c| c == Correct).count();
                assert_eq!(correct, exact);

                for letter in alphabet {
                    let credited = guess
                        .iter()
                        .zip(&result)
                        .filter(|&(&g, &c)| g == letter && c != Absent)
                        .count();
                    let available = target.iter().filter(|&&t| t == letter).count();
                    assert!(credited <= available);
                }
            }
        }
    }
}
