//! Bounded chat history.
//!
//! The host front-end keeps a sliding window of recent conversation turns to
//! bound the context sent upstream. The window is an explicit value passed
//! into request construction, not ambient global state.

use serde::{Deserialize, Serialize};

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// The end user.
    User,
    /// The assistant.
    Assistant,
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who authored the turn.
    pub role: ChatRole,
    /// The text of the turn.
    pub content: String,
}

impl ChatTurn {
    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Default number of turns kept in the window, greeting included.
pub const DEFAULT_HISTORY_WINDOW: usize = 7;

/// A bounded sliding window of conversation turns.
///
/// The first turn is always the assistant greeting; it survives eviction so
/// a trimmed conversation still opens the same way. Once the window is full,
/// pushing a new turn evicts the oldest user/assistant exchange after the
/// greeting.
///
/// # Example
///
/// ```
/// use leave_engine::session::ChatHistory;
///
/// let mut history = ChatHistory::with_window("Welcome!", 5);
/// for i in 0..10 {
///     history.push_user(format!("question {i}"));
///     history.push_assistant(format!("answer {i}"));
/// }
/// assert!(history.len() <= 5);
/// assert_eq!(history.turns()[0].content, "Welcome!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
    max_turns: usize,
}

impl ChatHistory {
    /// Creates a history seeded with the assistant greeting and the default
    /// window size.
    pub fn new(greeting: impl Into<String>) -> Self {
        Self::with_window(greeting, DEFAULT_HISTORY_WINDOW)
    }

    /// Creates a history with a custom window size.
    ///
    /// Windows smaller than 3 turns cannot hold a greeting plus a full
    /// exchange, so `max_turns` is raised to 3 if needed.
    pub fn with_window(greeting: impl Into<String>, max_turns: usize) -> Self {
        Self {
            turns: vec![ChatTurn::assistant(greeting)],
            max_turns: max_turns.max(3),
        }
    }

    /// Appends a user turn, evicting the oldest exchange if the window is full.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatTurn::user(content));
    }

    /// Appends an assistant turn, evicting the oldest exchange if the window is full.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(ChatTurn::assistant(content));
    }

    fn push(&mut self, turn: ChatTurn) {
        if self.turns.len() >= self.max_turns {
            // Drop the oldest exchange, keeping the greeting at index 0.
            self.turns.remove(1);
            if self.turns.len() > 1 {
                self.turns.remove(1);
            }
        }
        self.turns.push(turn);
    }

    /// Returns the turns currently in the window, oldest first.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Returns the number of turns in the window.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true when the window holds no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Clears the conversation, keeping only a fresh greeting.
    pub fn reset(&mut self, greeting: impl Into<String>) {
        self.turns.clear();
        self.turns.push(ChatTurn::assistant(greeting));
    }
}
