//! Chat sessions and their state machine.
//!
//! A session is either `Idle` or `AwaitingResponse`. `submit` moves it to
//! `AwaitingResponse`, `response_received` moves it back, `clear` resets it.
//! Sessions live in memory only; nothing survives a restart.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    phase: SessionPhase,
    history: Vec<ChatMessage>,
    model: String,
}

impl ChatSession {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            phase: SessionPhase::Idle,
            history: Vec::new(),
            model: model.into(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    /// Submit event: appends the user message and moves to `AwaitingResponse`.
    /// Rejected while a previous response is still pending.
    pub fn submit(&mut self, message: impl Into<String>) -> Result<(), AppError> {
        if self.phase == SessionPhase::AwaitingResponse {
            return Err(AppError::Validation(
                "a response is still pending for this session".to_string(),
            ));
        }
        self.history.push(ChatMessage {
            role: Role::User,
            content: message.into(),
            sent_at: Utc::now(),
        });
        self.phase = SessionPhase::AwaitingResponse;
        Ok(())
    }

    /// Response-received event: appends the assistant message and returns to
    /// `Idle`. Returns false — and drops the reply — if the session was
    /// cleared while the response was in flight.
    pub fn response_received(&mut self, reply: impl Into<String>) -> bool {
        if self.phase != SessionPhase::AwaitingResponse {
            return false;
        }
        self.history.push(ChatMessage {
            role: Role::Assistant,
            content: reply.into(),
            sent_at: Utc::now(),
        });
        self.phase = SessionPhase::Idle;
        true
    }

    /// Clear event: drops the history and returns to `Idle`.
    pub fn clear(&mut self) {
        self.history.clear();
        self.phase = SessionPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let session = ChatSession::new("llama-3.3-70b-versatile");
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.history().is_empty());
        assert_eq!(session.model(), "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_submit_appends_user_message_and_awaits() {
        let mut session = ChatSession::new("m");
        session.submit("hello").unwrap();

        assert_eq!(session.phase(), SessionPhase::AwaitingResponse);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, Role::User);
        assert_eq!(session.history()[0].content, "hello");
    }

    #[test]
    fn test_second_submit_while_awaiting_is_rejected() {
        let mut session = ChatSession::new("m");
        session.submit("first").unwrap();

        assert!(session.submit("second").is_err());
        // The rejected message must not land in the history.
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.phase(), SessionPhase::AwaitingResponse);
    }

    #[test]
    fn test_response_received_returns_to_idle() {
        let mut session = ChatSession::new("m");
        session.submit("hello").unwrap();

        assert!(session.response_received("hi there"));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[1].role, Role::Assistant);
        assert_eq!(session.history()[1].content, "hi there");
    }

    #[test]
    fn test_response_while_idle_is_dropped() {
        let mut session = ChatSession::new("m");
        assert!(!session.response_received("unsolicited"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_clear_empties_history_and_resets_phase() {
        let mut session = ChatSession::new("m");
        session.submit("hello").unwrap();
        session.clear();

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.history().is_empty());
        // A clear while a response was in flight drops the late reply.
        assert!(!session.response_received("late"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_submit_clear_submit_cycle() {
        let mut session = ChatSession::new("m");
        session.submit("one").unwrap();
        session.response_received("reply");
        session.clear();
        session.submit("two").unwrap();

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].content, "two");
    }
}
