use gloo::net::http::Request;
use kelime_core::{Letters, ProviderError, WordProvider, WordResponse, word_request_url};
use web_sys::AbortSignal;

/// Word provider backed by the remote word service.
#[derive(Clone, Debug)]
pub(crate) struct HttpWordProvider {
    api_base: String,
    signal: Option<AbortSignal>,
}

impl HttpWordProvider {
    pub(crate) fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            signal: None,
        }
    }

    /// Ties the request to an abort signal so a newer load can cancel it.
    pub(crate) fn with_signal(mut self, signal: Option<AbortSignal>) -> Self {
        self.signal = signal;
        self
    }

    fn is_aborted(&self) -> bool {
        self.signal.as_ref().is_some_and(AbortSignal::aborted)
    }
}

impl WordProvider for HttpWordProvider {
    async fn fetch_word(&self, length: Letters) -> Result<String, ProviderError> {
        let url = word_request_url(&self.api_base, length);
        log::debug!("requesting word: {}", url);

        let response = Request::get(&url)
            .abort_signal(self.signal.as_ref())
            .send()
            .await
            .map_err(|err| {
                if self.is_aborted() {
                    ProviderError::Cancelled
                } else {
                    ProviderError::Transport(err.to_string())
                }
            })?;

        if !response.ok() {
            return Err(ProviderError::Status(response.status()));
        }

        let body: WordResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::Decode(err.to_string()))?;
        Ok(body.word)
    }
}
