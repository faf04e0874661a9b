//! Player record - name, score and strikes.

use crate::error::PlayerError;
use crate::types::MAX_STRIKES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: u32,
    strikes: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            strikes: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    pub fn has_max_strikes(&self) -> bool {
        self.strikes >= MAX_STRIKES
    }

    pub fn score_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Add a strike, returning the new strike count.
    ///
    /// Callers check [`Player::has_max_strikes`] first; the game ends at the limit.
    pub fn strike(&mut self) -> Result<u32, PlayerError> {
        if self.has_max_strikes() {
            return Err(PlayerError::StrikeOverflow {
                name: self.name.clone(),
                max: MAX_STRIKES,
            });
        }
        self.strikes += 1;
        Ok(self.strikes)
    }

    /// Only called by the game manager while names are being entered.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new("Alice");
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.score(), 0);
        assert_eq!(player.strikes(), 0);
        assert!(!player.has_max_strikes());
    }

    #[test]
    fn test_score_point() {
        let mut player = Player::new("Alice");
        player.score_point();
        player.score_point();
        assert_eq!(player.score(), 2);
    }

    #[test]
    fn test_strikes_stop_at_limit() {
        let mut player = Player::new("Bob");
        for expected in 1..=MAX_STRIKES {
            assert_eq!(player.strike(), Ok(expected));
        }
        assert!(player.has_max_strikes());
        assert_eq!(
            player.strike(),
            Err(PlayerError::StrikeOverflow {
                name: "Bob".to_string(),
                max: MAX_STRIKES
            })
        );
        assert_eq!(player.strikes(), MAX_STRIKES);
    }

    #[test]
    fn test_rename_keeps_counters() {
        let mut player = Player::new("Player1");
        player.score_point();
        player.rename("Carol");
        assert_eq!(player.name(), "Carol");
        assert_eq!(player.score(), 1);
    }
}
