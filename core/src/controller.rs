use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Identifies one word load.
///
/// Every load-related event carries the ticket it was issued for, the
/// controller drops events whose ticket is no longer the pending one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket(u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct PendingLoad {
    ticket: LoadTicket,
    notice_armed: bool,
}

/// Drives sessions: loads words, accepts guesses and owns the status line.
#[derive(Clone, Debug, PartialEq)]
pub struct Controller {
    difficulty: Difficulty,
    session: Session,
    message: Option<Message>,
    pending: Option<PendingLoad>,
    next_ticket: u32,
}

impl Controller {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            session: Session::loading(difficulty.word_length()),
            message: None,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_locked(&self) -> bool {
        self.session.is_locked()
    }

    /// Ticket of the load currently in flight.
    pub fn pending_ticket(&self) -> Option<LoadTicket> {
        self.pending.map(|pending| pending.ticket)
    }

    /// Replaces the session with a loading one and issues a fresh ticket.
    ///
    /// Any load still in flight is superseded: its completion and its slow
    /// network notice will be ignored.
    pub fn start_session(&mut self, length: Letters) -> LoadTicket {
        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);

        if let Some(previous) = self.pending.replace(PendingLoad {
            ticket,
            notice_armed: true,
        }) {
            log::debug!("load {:?} superseded by {:?}", previous.ticket, ticket);
        }

        self.session = Session::loading(length);
        self.message = Some(Message::loading());
        log::debug!("load {:?} started for {} letters", ticket, length);
        ticket
    }

    pub fn reset_session(&mut self) -> LoadTicket {
        self.start_session(self.difficulty.word_length())
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> LoadTicket {
        self.difficulty = difficulty;
        self.reset_session()
    }

    /// The slow network timer fired. Returns whether the view changed.
    pub fn slow_network(&mut self, ticket: LoadTicket) -> bool {
        match &mut self.pending {
            Some(pending) if pending.ticket == ticket && pending.notice_armed => {
                pending.notice_armed = false;
                self.message = Some(Message::slow_network());
                log::info!("load {:?} is slow", ticket);
                true
            }
            _ => {
                log::trace!("ignoring slow network notice for {:?}", ticket);
                false
            }
        }
    }

    /// Resolves the pending load. Returns whether the view changed.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Word, ProviderError>) -> bool {
        if self.pending_ticket() != Some(ticket) {
            log::debug!("ignoring stale load result for {:?}", ticket);
            return false;
        }
        self.pending = None;

        match result {
            Ok(target) => {
                self.session = Session::with_target(target);
                self.message = None;
            }
            Err(err) => {
                log::error!("word load failed: {}", err);
                self.session = Session::unavailable(self.session.word_length());
                self.message = Some(Message::load_failed());
            }
        }
        true
    }

    /// Returns whether the view changed.
    pub fn submit_guess(&mut self, raw: &str) -> bool {
        match self.session.submit_guess(raw) {
            Ok(GuessOutcome::Scored) => {
                self.message = None;
            }
            Ok(GuessOutcome::Won) => {
                self.message = Some(Message::won());
            }
            Ok(GuessOutcome::Lost) => {
                self.message = self.session.revealed_target().map(Message::lost);
            }
            Err(GuessError::NotReady | GuessError::AlreadyEnded) => {
                log::trace!("guess ignored, input is locked");
                return false;
            }
            Err(err) => {
                log::debug!("guess rejected: {}", err);
                self.message = Some(Message::from(&err));
            }
        }
        true
    }

    /// Hint line shown above the board.
    pub fn headline(&self) -> Option<String> {
        match self.session.state() {
            SessionState::Loading => None,
            SessionState::Unavailable => Some(String::from(
                "Bu uzunlukta bir kelime bulunamadı. Lütfen başka bir zorluk seçin.",
            )),
            _ => Some(format!(
                "Aradığımız isim {} harfli, Türkçe bir isim",
                self.session.word_length()
            )),
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
