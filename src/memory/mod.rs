//! Bounded conversation memory.
//!
//! Keeps a rolling window of the last `max_turns` turns. A turn is one user
//! message plus the assistant reply, so capacity is `2 * max_turns` messages.
//! Once full, every insertion silently drops the oldest message.

use std::collections::VecDeque;

use tracing::trace;

use crate::types::{Message, Role};

/// Fixed-capacity FIFO log of conversation messages.
#[derive(Debug, Clone)]
pub struct TrimmingSession {
    history: VecDeque<Message>,
    capacity: usize,
}

impl TrimmingSession {
    /// Create a session that keeps the last `max_turns` turns.
    pub fn new(max_turns: usize) -> Self {
        Self::with_capacity(max_turns.saturating_mul(2))
    }

    /// Create a session holding at most `capacity` messages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a message, evicting from the front once capacity is reached.
    pub fn add(&mut self, role: Role, content: impl Into<String>) {
        self.push(Message::new(role, content));
    }

    /// Append an already-built message.
    pub fn push(&mut self, message: Message) {
        if self.capacity == 0 {
            return;
        }
        while self.history.len() >= self.capacity {
            if let Some(evicted) = self.history.pop_front() {
                trace!(role = %evicted.role(), "evicting oldest message");
            }
        }
        self.history.push_back(message);
    }

    /// Snapshot of the current history in conversation order.
    pub fn get_context(&self) -> Vec<Message> {
        self.history.iter().cloned().collect()
    }

    /// Borrowing iterator over the history, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.history.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.history.back()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
