//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input capture, logging).
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_STRIKES` | 3 | Strikes that end the game for a player |
//! | `INIT_TIME` | 3.0s | "Get ready" countdown before play starts |
//! | `TIME_LIMIT` | 10.0s | Time a player has to enter a word |
//! | `MAX_RECENT_WORDS` | 5 | Words shown in the recent words window |
//! | `RECENT_DELIMITER` | `" - "` | Separator used to join recent words |
//!
//! The word history keeps `MAX_RECENT_WORDS + 1` entries: the extra word lets the
//! presentation layer compute a stable scroll offset when the window is full.
//!
//! # Examples
//!
//! ```
//! use noun_road_types::{EditAction, GameState, Message, MessageExtra};
//!
//! let extra = MessageExtra::text("dog");
//! assert_eq!(extra.message.as_deref(), Some("dog"));
//! assert_eq!(extra.number, None);
//!
//! assert_eq!(Message::from_str("player_scored"), Some(Message::PlayerScored));
//! assert!(GameState::Playing.accepts_words());
//! assert_eq!(EditAction::Insert('a'), EditAction::Insert('a'));
//! ```

/// Strikes a player may accumulate before the game ends.
pub const MAX_STRIKES: u32 = 3;

/// Countdown before play begins, in seconds.
pub const INIT_TIME: f32 = 3.0;

/// Time allowed per turn, in seconds.
pub const TIME_LIMIT: f32 = 10.0;

/// Number of words in the recent words display window.
pub const MAX_RECENT_WORDS: usize = 5;

/// Capacity of the accepted word history (one beyond the display window).
pub const WORD_HISTORY_CAPACITY: usize = MAX_RECENT_WORDS + 1;

/// Separator used when joining recent words for display.
pub const RECENT_DELIMITER: &str = " - ";

/// Longest text the input box will hold.
pub const MAX_INPUT_LEN: usize = 24;

/// Number of players in a round.
pub const PLAYER_COUNT: usize = 2;

/// Default names prefilled while names are being entered.
pub const DEFAULT_PLAYER_NAMES: [&str; PLAYER_COUNT] = ["Player1", "Player2"];


/// Message tags carried by the message bus.
///
/// A tag carries no data by itself. Publishers may attach a [`MessageExtra`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Raw text was submitted by the input adapter (`extra.message` holds it).
    TextEntered,
    /// The game manager moved to a new [`GameState`].
    StateChange,
    /// A player scored (`extra.number` is the player index).
    PlayerScored,
    /// A player took a strike (`extra.number` is the player index).
    PlayerStriked,
    /// Empty input was submitted while playing.
    InvalidInput,
    /// A player name was captured (`extra.number` is the player index).
    PlayerNameEntered,
    /// The game was reset back to name entry.
    GameReset,
}

impl Message {
    /// Every message tag, in declaration order.
    pub const ALL: [Message; 7] = [
        Message::TextEntered,
        Message::StateChange,
        Message::PlayerScored,
        Message::PlayerStriked,
        Message::InvalidInput,
        Message::PlayerNameEntered,
        Message::GameReset,
    ];

    /// Parse a message tag from its name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text_entered" => Some(Message::TextEntered),
            "state_change" => Some(Message::StateChange),
            "player_scored" => Some(Message::PlayerScored),
            "player_striked" => Some(Message::PlayerStriked),
            "invalid_input" => Some(Message::InvalidInput),
            "player_name_entered" => Some(Message::PlayerNameEntered),
            "game_reset" => Some(Message::GameReset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Message::TextEntered => "TEXT_ENTERED",
            Message::StateChange => "STATE_CHANGE",
            Message::PlayerScored => "PLAYER_SCORED",
            Message::PlayerStriked => "PLAYER_STRIKED",
            Message::InvalidInput => "INVALID_INPUT",
            Message::PlayerNameEntered => "PLAYER_NAME_ENTERED",
            Message::GameReset => "GAME_RESET",
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional payload attached to a [`Message`] at publish time.
///
/// Consumers must treat both fields as possibly absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageExtra {
    /// Entered text, if any.
    pub message: Option<String>,
    /// Integer detail, typically a player index.
    pub number: Option<i32>,
}

impl MessageExtra {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            number: None,
        }
    }

    pub fn number(number: i32) -> Self {
        Self {
            message: None,
            number: Some(number),
        }
    }

    pub fn with_number(mut self, number: i32) -> Self {
        self.number = Some(number);
        self
    }
}

/// Game lifecycle states.
///
/// Progression is linear: names, initialize, playing, game over. Only a full
/// reset returns to [`GameState::EnteringPlayerNames`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    EnteringPlayerNames,
    GameInitialize,
    Playing,
    GameOver,
}

impl GameState {
    pub fn accepts_words(&self) -> bool {
        matches!(self, GameState::Playing)
    }

    /// Countdown bound for timed states.
    pub fn time_bound(&self) -> Option<f32> {
        match self {
            GameState::GameInitialize => Some(INIT_TIME),
            GameState::Playing => Some(TIME_LIMIT),
            GameState::EnteringPlayerNames | GameState::GameOver => None,
        }
    }
}

/// Text editing actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Backspace,
    Clear,
    Submit,
    Reset,
    Quit,
}
