//! Logging listener - traces every message delivered on the bus.

use std::cell::Cell;
use std::rc::Rc;

use crate::bus::{MessageBus, MessageListener, SharedListener};
use crate::types::{Message, MessageExtra};

#[derive(Debug, Default)]
pub struct LoggingSystem {
    delivered: Cell<u64>,
}

impl LoggingSystem {
    /// Create a logger subscribed to every message tag on `bus`.
    pub fn attach(bus: &MessageBus) -> Rc<Self> {
        let logger = Rc::new(Self::default());
        let listener: SharedListener = logger.clone();
        bus.register_all(listener, &Message::ALL);
        logger
    }

    /// Number of deliveries logged so far.
    pub fn delivered(&self) -> u64 {
        self.delivered.get()
    }
}

impl MessageListener for LoggingSystem {
    fn receive(&self, message: Message) {
        self.delivered.set(self.delivered.get() + 1);
        tracing::info!(%message, "message");
    }

    fn receive_with_extra(&self, message: Message, extra: &MessageExtra) {
        self.delivered.set(self.delivered.get() + 1);
        tracing::info!(
            %message,
            text = extra.message.as_deref().unwrap_or(""),
            number = ?extra.number,
            "message"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_hears_every_tag() {
        let bus = MessageBus::new();
        let logger = LoggingSystem::attach(&bus);

        for message in Message::ALL {
            assert_eq!(bus.listener_count(message), 1);
        }

        bus.publish(Message::GameReset);
        bus.publish_with(Message::PlayerScored, &MessageExtra::number(0));
        assert_eq!(logger.delivered(), 2);
    }
}
