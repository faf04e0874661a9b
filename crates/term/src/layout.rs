//! Layout configuration - where the game view draws each element.
//!
//! Positions are cell coordinates on a fixed `CANVAS_WIDTH` x `CANVAS_HEIGHT`
//! canvas that the view centers in the terminal. A layout can be loaded from
//! JSON as a table of named draw positions:
//!
//! ```json
//! {
//!   "positions": [
//!     { "name": "textBox", "xPos": 12, "yPos": 12, "xOffset": 0, "yOffset": 0 }
//!   ]
//! }
//! ```
//!
//! Every name in [`REQUIRED_POSITIONS`] must be present; offsets default to 0.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CANVAS_WIDTH: u16 = 80;
pub const CANVAS_HEIGHT: u16 = 21;

pub const TEXT_BOX: &str = "textBox";
pub const SCORE_BOX: &str = "scoreBox";
pub const LEFT_NAME_BOX: &str = "leftNameBox";
pub const RIGHT_NAME_BOX: &str = "rightNameBox";
pub const RECENT_WORDS: &str = "recentWords";
pub const STRIKES_PLAYER1: &str = "strikePositionPlayer1";
pub const STRIKES_PLAYER2: &str = "strikePositionPlayer2";

pub const REQUIRED_POSITIONS: [&str; 7] = [
    TEXT_BOX,
    SCORE_BOX,
    LEFT_NAME_BOX,
    RIGHT_NAME_BOX,
    RECENT_WORDS,
    STRIKES_PLAYER1,
    STRIKES_PLAYER2,
];

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid layout JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("layout is missing position '{0}'")]
    MissingPosition(&'static str),
}

/// An anchor plus a per-item step for repeated elements (e.g. strike marks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawPosition {
    pub x_pos: i32,
    pub y_pos: i32,
    #[serde(default)]
    pub x_offset: i32,
    #[serde(default)]
    pub y_offset: i32,
}

impl DrawPosition {
    pub const fn new(x_pos: i32, y_pos: i32) -> Self {
        Self {
            x_pos,
            y_pos,
            x_offset: 0,
            y_offset: 0,
        }
    }

    pub const fn with_offset(mut self, x_offset: i32, y_offset: i32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Position of the `index`-th repeated item.
    pub fn nth(&self, index: u32) -> (i32, i32) {
        let i = index as i32;
        (self.x_pos + self.x_offset * i, self.y_pos + self.y_offset * i)
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct LayoutFile {
    positions: Vec<NamedPosition>,
}

#[derive(Debug, Deserialize, Serialize)]
struct NamedPosition {
    name: String,
    #[serde(flatten)]
    position: DrawPosition,
}

/// Immutable layout handed to the game view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    pub text_box: DrawPosition,
    pub score_box: DrawPosition,
    pub left_name_box: DrawPosition,
    /// Right edge of the second player's name box.
    pub right_name_box: DrawPosition,
    /// Right edge of the recent words line.
    pub recent_words: DrawPosition,
    pub strikes_player1: DrawPosition,
    pub strikes_player2: DrawPosition,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            text_box: DrawPosition::new(12, 12),
            score_box: DrawPosition::new(25, 17),
            left_name_box: DrawPosition::new(1, 4),
            right_name_box: DrawPosition::new(78, 4),
            recent_words: DrawPosition::new(77, 1),
            strikes_player1: DrawPosition::new(2, 8).with_offset(3, 0),
            strikes_player2: DrawPosition::new(77, 8).with_offset(-3, 0),
        }
    }
}

impl LayoutConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, LayoutError> {
        let file: LayoutFile = serde_json::from_str(text)?;
        let positions: HashMap<String, DrawPosition> = file
            .positions
            .into_iter()
            .map(|named| (named.name, named.position))
            .collect();

        let get = |name: &'static str| {
            positions
                .get(name)
                .copied()
                .ok_or(LayoutError::MissingPosition(name))
        };

        Ok(Self {
            text_box: get(TEXT_BOX)?,
            score_box: get(SCORE_BOX)?,
            left_name_box: get(LEFT_NAME_BOX)?,
            right_name_box: get(RIGHT_NAME_BOX)?,
            recent_words: get(RECENT_WORDS)?,
            strikes_player1: get(STRIKES_PLAYER1)?,
            strikes_player2: get(STRIKES_PLAYER2)?,
        })
    }

    /// Serialize back to the JSON file format.
    pub fn to_json_string(&self) -> Result<String, LayoutError> {
        let positions = [
            (TEXT_BOX, self.text_box),
            (SCORE_BOX, self.score_box),
            (LEFT_NAME_BOX, self.left_name_box),
            (RIGHT_NAME_BOX, self.right_name_box),
            (RECENT_WORDS, self.recent_words),
            (STRIKES_PLAYER1, self.strikes_player1),
            (STRIKES_PLAYER2, self.strikes_player2),
        ]
        .into_iter()
        .map(|(name, position)| NamedPosition {
            name: name.to_string(),
            position,
        })
        .collect();
        Ok(serde_json::to_string_pretty(&LayoutFile { positions })?)
    }

    /// Strike anchor for a player index.
    pub fn strikes_for(&self, player: usize) -> DrawPosition {
        if player == 0 {
            self.strikes_player1
        } else {
            self.strikes_player2
        }
    }
}
