use thiserror::Error;

/// Errors raised by [`Player`](crate::Player) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The game manager ends the round at the limit, so this signals a broken invariant.
    #[error("player '{name}' already holds the maximum of {max} strikes")]
    StrikeOverflow { name: String, max: u32 },
}
