//! Text input manager.
//!
//! Holds the line being typed and publishes it as `TEXT_ENTERED` on submit.
//! The presentation layer may overwrite the line (e.g. to prefill the next
//! player's name or the letter the next word must start with).

use std::rc::Rc;

use crate::core::MessageBus;
use crate::types::{EditAction, Message, MessageExtra, MAX_INPUT_LEN};

#[derive(Debug)]
pub struct InputManager {
    bus: Rc<MessageBus>,
    buffer: String,
    max_len: usize,
}

impl InputManager {
    pub fn new(bus: Rc<MessageBus>) -> Self {
        Self::with_max_len(bus, MAX_INPUT_LEN)
    }

    pub fn with_max_len(bus: Rc<MessageBus>, max_len: usize) -> Self {
        Self {
            bus,
            buffer: String::new(),
            max_len,
        }
    }

    pub fn input(&self) -> &str {
        &self.buffer
    }

    /// Replace the line, truncated to the length limit.
    pub fn set_input(&mut self, text: &str) {
        self.buffer = text.chars().take(self.max_len).collect();
    }

    /// Apply an editing action.
    ///
    /// Returns true when the action was consumed. `Reset` and `Quit` belong to
    /// the caller and are left untouched.
    pub fn apply(&mut self, action: EditAction) -> bool {
        match action {
            EditAction::Insert(c) => {
                if self.buffer.chars().count() < self.max_len {
                    self.buffer.push(c);
                }
                true
            }
            EditAction::Backspace => {
                self.buffer.pop();
                true
            }
            EditAction::Clear => {
                self.buffer.clear();
                true
            }
            EditAction::Submit => {
                self.submit();
                true
            }
            EditAction::Reset | EditAction::Quit => false,
        }
    }

    /// Publish the current line and clear it.
    pub fn submit(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        tracing::trace!(text = text.as_str(), "text entered");
        self.bus
            .publish_with(Message::TextEntered, &MessageExtra::text(text));
    }
}
