use crate::player::Player;
use crate::types::{GameState, MAX_STRIKES, PLAYER_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerSnapshot {
    pub name: String,
    pub score: u32,
    pub strikes: u32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(value: &Player) -> Self {
        Self {
            name: value.name().to_string(),
            score: value.score(),
            strikes: value.strikes(),
        }
    }
}

/// Owned copy of everything a renderer reads from the game manager.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub state: GameState,
    pub time_left: f32,
    pub time_bound: Option<f32>,
    pub words_played: u32,
    pub players: [PlayerSnapshot; PLAYER_COUNT],
    pub current: usize,
    pub naming: usize,
    pub recent_words: String,
}

impl GameSnapshot {
    /// Remaining share of the countdown in `[0, 1]`; zero when untimed.
    pub fn timer_fraction(&self) -> f32 {
        match self.time_bound {
            Some(bound) if bound > 0.0 => (self.time_left / bound).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }

    pub fn current_player(&self) -> &PlayerSnapshot {
        &self.players[self.current.min(PLAYER_COUNT - 1)]
    }

    pub fn winner(&self) -> Option<&PlayerSnapshot> {
        match self.state {
            GameState::GameOver => Some(self.current_player()),
            _ => None,
        }
    }

    /// Last letter of the newest accepted word.
    pub fn last_letter(&self) -> Option<char> {
        self.recent_words.chars().last()
    }

    pub fn strikes_left(&self, index: usize) -> u32 {
        self.players
            .get(index)
            .map_or(0, |p| MAX_STRIKES.saturating_sub(p.strikes))
    }
}
