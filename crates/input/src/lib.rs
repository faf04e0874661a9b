//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any renderer. It maps `crossterm`
//! key events into [`crate::types::EditAction`] and provides the text input
//! manager that publishes submitted lines on the message bus as `TEXT_ENTERED`.

pub mod handler;
pub mod map;

pub use noun_road_core as core;
pub use noun_road_types as types;

pub use handler::InputManager;
pub use map::{map_key, should_quit};
