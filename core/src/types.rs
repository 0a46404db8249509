/// Word length measured in letters (Unicode scalar values, not bytes).
pub type Letters = u8;

/// Count type used for remaining and spent guesses.
pub type Attempts = u8;

/// Guesses granted to every session regardless of word length.
pub const MAX_GUESSES: Attempts = 5;

/// Delay after which a still-pending word load surfaces the slow network notice.
pub const SLOW_NETWORK_NOTICE_MS: u32 = 4_000;

/// Converts a character count to [`Letters`], saturating on absurdly long input.
pub(crate) fn letters_from(count: usize) -> Letters {
    count.try_into().unwrap_or(Letters::MAX)
}
