use alloc::format;
use alloc::string::String;
use core::future::Future;
use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_API_BASE: &str = "https://oguzhan-kelime-api.onrender.com";

/// Body returned by the word service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResponse {
    pub word: String,
}

/// Source of target words.
pub trait WordProvider {
    /// Asks for one word with exactly `length` letters.
    fn fetch_word(&self, length: Letters) -> impl Future<Output = Result<String, ProviderError>>;
}

pub fn word_request_url(api_base: &str, length: Letters) -> String {
    format!(
        "{}/api/get-word?length={}",
        api_base.trim_end_matches('/'),
        length
    )
}

/// Checks a raw word from the service and folds it into a target.
pub fn accept_word(raw: &str, length: Letters) -> Result<Word, ProviderError> {
    let word = Word::fold(raw);
    if word.is_empty() {
        return Err(ProviderError::Empty);
    }
    if !word.is_alphabetic() {
        return Err(ProviderError::NotAlphabetic);
    }
    if word.len() != length {
        return Err(ProviderError::WrongLength {
            expected: length,
            actual: word.len(),
        });
    }
    Ok(word)
}

pub async fn fetch_target<P: WordProvider>(
    provider: &P,
    length: Letters,
) -> Result<Word, ProviderError> {
    let raw = provider.fetch_word(length).await?;
    let word = accept_word(&raw, length)?;
    log::debug!("loaded {length} letter target");
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use futures_util::FutureExt;

    struct FixedProvider(Result<&'static str, ProviderError>);

    impl WordProvider for FixedProvider {
        async fn fetch_word(&self, _length: Letters) -> Result<String, ProviderError> {
            self.0.clone().map(|word| word.to_string())
        }
    }

    fn fetch(provider: FixedProvider, length: Letters) -> Result<Word, ProviderError> {
        fetch_target(&provider, length)
            .now_or_never()
            .expect("fake provider never suspends")
    }

    #[test]
    fn request_url_carries_length() {
        assert_eq!(
            word_request_url(DEFAULT_API_BASE, 6),
            "https://oguzhan-kelime-api.onrender.com/api/get-word?length=6"
        );
        assert_eq!(
            word_request_url("http://localhost:8080/", 4),
            "http://localhost:8080/api/get-word?length=4"
        );
    }

    #[test]
    fn response_body_decodes() {
        let body: WordResponse = serde_json::from_str(r#"{"word":"Işık"}"#).unwrap();

        assert_eq!(accept_word(&body.word, 4), Ok(Word::fold("ışık")));
    }

    #[test]
    fn fetched_word_is_folded() {
        let word = fetch(FixedProvider(Ok("KİTAP")), 5).unwrap();

        assert_eq!(word.text(), "kitap");
    }

    #[test]
    fn wrong_length_word_is_rejected() {
        assert_eq!(
            fetch(FixedProvider(Ok("kitap")), 6),
            Err(ProviderError::WrongLength {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn unusable_words_are_rejected() {
        assert_eq!(fetch(FixedProvider(Ok("  ")), 5), Err(ProviderError::Empty));
        assert_eq!(
            fetch(FixedProvider(Ok("ka1em")), 5),
            Err(ProviderError::NotAlphabetic)
        );
    }

    #[test]
    fn provider_errors_pass_through() {
        assert_eq!(
            fetch(FixedProvider(Err(ProviderError::Status(503))), 5),
            Err(ProviderError::Status(503))
        );
    }
}
