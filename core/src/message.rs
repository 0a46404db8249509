use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warn,
    Error,
    Success,
}

impl Severity {
    pub const fn class_name(self) -> &'static str {
        use Severity::*;
        match self {
            Info => "info",
            Warn => "warn",
            Error => "error",
            Success => "success",
        }
    }
}

/// Status line shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

impl Message {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub(crate) fn loading() -> Self {
        Self::new(Severity::Info, "Yeni kelime yükleniyor...")
    }

    pub(crate) fn slow_network() -> Self {
        Self::new(
            Severity::Warn,
            "Sunucu uyanıyor, bu biraz sürebilir. Lütfen bekleyin...",
        )
    }

    pub(crate) fn load_failed() -> Self {
        Self::new(
            Severity::Error,
            "Oyun yüklenemedi. Sunucu çalışmıyor olabilir, lütfen yeniden deneyin.",
        )
    }

    pub(crate) fn wrong_length(expected: Letters) -> Self {
        Self::new(
            Severity::Warn,
            format!("Lütfen {expected} harfli bir isim girin."),
        )
    }

    pub(crate) fn no_guesses_left() -> Self {
        Self::new(
            Severity::Error,
            "Tahmin hakkınız kalmadı. Yeni bir oyun başlatın.",
        )
    }

    pub(crate) fn won() -> Self {
        Self::new(Severity::Success, "Tebrikler, doğru tahmin ettiniz!")
    }

    pub(crate) fn lost(target: &Word) -> Self {
        Self::new(
            Severity::Error,
            format!("Tahmin hakkınız bitti. Doğru kelime: {target}"),
        )
    }
}

impl From<&GuessError> for Message {
    fn from(err: &GuessError) -> Self {
        match *err {
            GuessError::LengthMismatch { expected, .. } => Self::wrong_length(expected),
            GuessError::NoGuessesLeft => Self::no_guesses_left(),
            GuessError::NotReady => Self::new(Severity::Info, "Kelime henüz yüklenmedi."),
            GuessError::AlreadyEnded => {
                Self::new(Severity::Info, "Oyun bitti. Yeni bir oyun başlatın.")
            }
        }
    }
}
