//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the message bus, the word chain rules, and the turn/state
//! machine that drives a round. It has **zero dependencies** on terminal I/O,
//! making it:
//!
//! - **Deterministic**: the same inputs and frame deltas produce the same messages
//! - **Testable**: every rule is observable through the bus or read-only accessors
//! - **Portable**: any front end can subscribe to the bus and render the state
//!
//! # Module Structure
//!
//! - [`bus`]: synchronous publish/subscribe dispatcher and the queuing [`Mailbox`]
//! - [`words`]: chain rule validation and the bounded word history
//! - [`player`]: per-player name, score and strikes
//! - [`game_manager`]: the turn/state machine and countdown timer
//! - [`logging`]: bus listener that traces every delivered message
//! - [`snapshot`]: owned copy of the state for renderers
//!
//! # Game Rules
//!
//! - Each word must begin with the last letter of the previously accepted word
//!   (case-insensitive). The opening word may be anything non-empty.
//! - Repeating a recent word or breaking the chain is a strike. Running out of time
//!   is a strike too.
//! - A correct word scores a point. Every score or strike passes the turn and
//!   restarts the clock.
//! - Reaching [`MAX_STRIKES`](crate::types::MAX_STRIKES) ends the game; the other
//!   player wins.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use noun_road_core::{GameManager, MessageBus};
//! use noun_road_core::types::{GameState, INIT_TIME};
//!
//! let bus = Rc::new(MessageBus::new());
//! let mut game = GameManager::new(bus.clone());
//!
//! game.take_input("Alice");
//! game.take_input("Bob");
//! assert_eq!(game.state(), GameState::GameInitialize);
//!
//! game.update(INIT_TIME);
//! assert_eq!(game.state(), GameState::Playing);
//!
//! game.take_input("dog");
//! assert_eq!(game.player(0).map(|p| p.score()), Some(1));
//! assert_eq!(game.current_player().name(), "Bob");
//! ```

pub mod bus;
pub mod error;
pub mod game_manager;
pub mod logging;
pub mod player;
pub mod snapshot;
pub mod words;

pub use noun_road_types as types;

// Re-export commonly used types for convenience
pub use bus::{Envelope, Mailbox, MessageBus, MessageListener, SharedListener};
pub use error::PlayerError;
pub use game_manager::GameManager;
pub use logging::LoggingSystem;
pub use player::Player;
pub use snapshot::{GameSnapshot, PlayerSnapshot};
pub use words::{chains, DuplicatePolicy, Outcome, Rejection, WordManager};
