//! Chat assistant conversation state.
//!
//! `ChatSession` is UI-agnostic: the window pushes user text in through
//! [`ChatSession::begin_send`], ships the returned request to the worker, and
//! feeds the outcome back through [`ChatSession::receive_reply`].

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::Display;
use uuid::Uuid;

use crate::utils::format_clock;

pub const WELCOME_MESSAGE: &str = "Hello! I'm your market assistant. Ask me about crypto prices, \
     macro indicators or upcoming economic events.";

const REPLY_KEYS: &[&str] = &["response", "reply", "message"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub from_user: bool,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    fn new(content: impl Into<String>, from_user: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            from_user,
            timestamp: Local::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, true)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, false)
    }

    pub fn role(&self) -> ChatRole {
        if self.from_user {
            ChatRole::User
        } else {
            ChatRole::Assistant
        }
    }

    pub fn clock(&self) -> String {
        format_clock(&self.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ChatTurn>,
}

/// Pulls the assistant's text out of whatever shape the backend answered with.
pub fn parse_chat_reply(value: &Value) -> Option<String> {
    REPLY_KEYS
        .iter()
        .filter_map(|k| value.get(*k))
        .find_map(|v| v.as_str().map(str::to_string))
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub is_typing: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(WELCOME_MESSAGE)],
            input: String::new(),
            is_typing: false,
        }
    }
}

impl ChatSession {
    pub fn can_send(&self) -> bool {
        !self.is_typing && !self.input.trim().is_empty()
    }

    /// Moves the input into the conversation and returns the request to send.
    /// Blank input, or a reply still pending, sends nothing.
    pub fn begin_send(&mut self) -> Option<ChatRequest> {
        if !self.can_send() {
            return None;
        }
        let text = self.input.trim().to_string();
        let history = self.history();
        self.messages.push(ChatMessage::user(text.clone()));
        self.input.clear();
        self.is_typing = true;
        Some(ChatRequest {
            message: text,
            history,
        })
    }

    pub fn receive_reply(&mut self, reply: Result<String, String>) {
        let content = match reply {
            Ok(text) => text,
            Err(e) => format!(
                "Sorry, I couldn't reach the assistant right now. Please try again later. ({})",
                e
            ),
        };
        self.messages.push(ChatMessage::assistant(content));
        self.is_typing = false;
    }

    /// Role/content pairs for everything said so far.
    pub fn history(&self) -> Vec<ChatTurn> {
        self.messages
            .iter()
            .map(|m| ChatTurn {
                role: m.role(),
                content: m.content.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn starts_with_a_welcome() {
        let chat = ChatSession::default();
        assert_eq!(chat.messages.len(), 1);
        assert!(!chat.messages[0].from_user);
        assert!(!chat.is_typing);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut chat = ChatSession::default();
        chat.input = "   \n".into();
        assert!(chat.begin_send().is_none());
        assert_eq!(chat.messages.len(), 1);
        assert!(!chat.is_typing);
    }

    #[test]
    fn sending_appends_and_locks_until_reply() {
        let mut chat = ChatSession::default();
        chat.input = "  What is BTC doing?  ".into();
        let req = chat.begin_send().unwrap();
        assert_eq!(req.message, "What is BTC doing?");
        assert_eq!(req.history.len(), 1);
        assert_eq!(req.history[0].role, ChatRole::Assistant);
        assert!(chat.input.is_empty());
        assert!(chat.is_typing);

        chat.input = "again".into();
        assert!(chat.begin_send().is_none());

        chat.receive_reply(Ok("Up 2% today.".into()));
        assert!(!chat.is_typing);
        let roles: Vec<ChatRole> = chat.history().into_iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);
    }

    #[test]
    fn failures_become_assistant_messages() {
        let mut chat = ChatSession::default();
        chat.input = "hi".into();
        chat.begin_send();
        chat.receive_reply(Err("HTTP error! status: 502".into()));
        let last = chat.messages.last().unwrap();
        assert!(!last.from_user);
        assert!(last.content.contains("status: 502"));
        assert!(!chat.is_typing);
    }

    #[test]
    fn reply_key_aliases() {
        assert_eq!(parse_chat_reply(&json!({"response": "a"})).as_deref(), Some("a"));
        assert_eq!(parse_chat_reply(&json!({"reply": "b"})).as_deref(), Some("b"));
        assert_eq!(parse_chat_reply(&json!({"message": "c"})).as_deref(), Some("c"));
        assert_eq!(
            parse_chat_reply(&json!({"response": 3, "reply": "d"})).as_deref(),
            Some("d")
        );
        assert_eq!(parse_chat_reply(&json!({"status": "ok"})), None);
    }

    #[test]
    fn request_serializes_lowercase_roles() {
        let req = ChatRequest {
            message: "hi".into(),
            history: vec![ChatTurn {
                role: ChatRole::User,
                content: "earlier".into(),
            }],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"message": "hi", "history": [{"role": "user", "content": "earlier"}]})
        );
    }
}
