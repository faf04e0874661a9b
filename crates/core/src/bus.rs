//! Message bus - synchronous publish/subscribe between the core and its front ends.
//!
//! Listeners register per [`Message`] tag and are invoked in registration order on
//! the publishing thread, before `publish` returns. Registration has set semantics:
//! registering the same listener for the same tag twice delivers once.
//!
//! Dispatch works on a snapshot of the subscriber list, so a handler may register
//! new listeners or publish *other* tags. Publishing the tag currently being
//! handled from inside its own handler recurses without bound; avoiding that is
//! the caller's job.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::types::{Message, MessageExtra};

/// A bus subscriber.
///
/// Both capabilities are optional: a listener overrides the plain handler, the
/// payload handler, or both, and may branch on the tag.
pub trait MessageListener {
    /// Called for messages published without a payload.
    fn receive(&self, _message: Message) {}

    /// Called for messages published with a payload.
    fn receive_with_extra(&self, _message: Message, _extra: &MessageExtra) {}
}

pub type SharedListener = Rc<dyn MessageListener>;

#[derive(Default)]
pub struct MessageBus {
    subscribers: RefCell<HashMap<Message, Vec<SharedListener>>>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `listener` to `message`.
    ///
    /// Returns `false` when the pair was already registered.
    pub fn register(&self, listener: SharedListener, message: Message) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let listeners = subscribers.entry(message).or_default();
        if listeners.iter().any(|l| same_listener(l, &listener)) {
            return false;
        }
        listeners.push(listener);
        true
    }

    /// Subscribe `listener` to each tag in `messages`.
    pub fn register_all(&self, listener: SharedListener, messages: &[Message]) {
        for &message in messages {
            self.register(listener.clone(), message);
        }
    }

    pub fn listener_count(&self, message: Message) -> usize {
        self.subscribers
            .borrow()
            .get(&message)
            .map_or(0, |listeners| listeners.len())
    }

    /// Deliver `message` to every plain handler registered for it.
    pub fn publish(&self, message: Message) {
        for listener in self.listeners_for(message) {
            listener.receive(message);
        }
    }

    /// Deliver `message` and its payload to every payload handler registered for it.
    pub fn publish_with(&self, message: Message, extra: &MessageExtra) {
        for listener in self.listeners_for(message) {
            listener.receive_with_extra(message, extra);
        }
    }

    fn listeners_for(&self, message: Message) -> Vec<SharedListener> {
        self.subscribers
            .borrow()
            .get(&message)
            .cloned()
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for MessageBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subscribers = self.subscribers.borrow();
        let mut map = f.debug_map();
        for message in Message::ALL {
            if let Some(listeners) = subscribers.get(&message) {
                map.entry(&message, &listeners.len());
            }
        }
        map.finish()
    }
}

fn same_listener(a: &SharedListener, b: &SharedListener) -> bool {
    // Compare data pointers only; vtable pointers are not guaranteed unique.
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// One delivered message, as recorded by a [`Mailbox`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub message: Message,
    pub extra: Option<MessageExtra>,
}

impl Envelope {
    /// Player index carried in the payload, if any.
    pub fn number(&self) -> Option<i32> {
        self.extra.as_ref().and_then(|extra| extra.number)
    }

    pub fn text(&self) -> Option<&str> {
        self.extra.as_ref().and_then(|extra| extra.message.as_deref())
    }
}

/// A listener that queues deliveries for later processing.
///
/// Owners drain it at a point of their choosing (typically once per frame), which
/// keeps their own mutation out of the dispatch call stack.
#[derive(Debug, Default)]
pub struct Mailbox {
    queue: RefCell<VecDeque<Envelope>>,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register this mailbox on `bus` for every tag in `messages`.
    pub fn subscribe(self: &Rc<Self>, bus: &MessageBus, messages: &[Message]) {
        let listener: SharedListener = self.clone();
        bus.register_all(listener, messages);
    }

    pub fn pop(&self) -> Option<Envelope> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn drain(&self) -> Vec<Envelope> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    fn push(&self, envelope: Envelope) {
        self.queue.borrow_mut().push_back(envelope);
    }
}

impl MessageListener for Mailbox {
    fn receive(&self, message: Message) {
        self.push(Envelope {
            message,
            extra: None,
        });
    }

    fn receive_with_extra(&self, message: Message, extra: &MessageExtra) {
        self.push(Envelope {
            message,
            extra: Some(extra.clone()),
        });
    }
}
