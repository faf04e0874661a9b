//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, driven by an explicit [`LayoutConfig`] instead of global state.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: snapshot + input line + flashes in, framebuffer out
//! - Let players move elements around with a JSON layout file

pub mod fb;
pub mod flash;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use noun_road_core as core;
pub use noun_road_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use flash::{Flash, FlashKind, Flashes, FLASH_SECONDS};
pub use game_view::{GameView, HudState, Viewport};
pub use layout::{DrawPosition, LayoutConfig, LayoutError};
pub use renderer::{encode_frame_into, TerminalRenderer};
