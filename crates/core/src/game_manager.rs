//! Game manager - the turn/state machine that drives a round.
//!
//! This module ties together the players, the word manager and the countdown
//! timer. Every state transition and gameplay event is announced on the
//! [`MessageBus`].
//!
//! Text arrives either through [`GameManager::take_input`] or as a
//! `TEXT_ENTERED` message. Messages are queued in a [`Mailbox`] and consumed at
//! the start of the next [`GameManager::update`], so the manager never mutates
//! from inside a bus dispatch.

use std::rc::Rc;

use crate::bus::{Mailbox, MessageBus};
use crate::player::Player;
use crate::snapshot::{GameSnapshot, PlayerSnapshot};
use crate::types::*;
use crate::words::{DuplicatePolicy, Outcome, Rejection, WordManager};

pub struct GameManager {
    bus: Rc<MessageBus>,
    inbox: Rc<Mailbox>,
    players: [Player; PLAYER_COUNT],
    words: WordManager,
    state: GameState,
    time_left: f32,
    words_played: u32,
    /// Player whose turn it is.
    current: usize,
    /// Player whose name is being entered.
    naming: usize,
}

impl GameManager {
    pub fn new(bus: Rc<MessageBus>) -> Self {
        Self::with_policy(bus, DuplicatePolicy::default())
    }

    pub fn with_policy(bus: Rc<MessageBus>, policy: DuplicatePolicy) -> Self {
        let inbox = Rc::new(Mailbox::new());
        inbox.subscribe(&bus, &[Message::TextEntered]);

        Self {
            bus,
            inbox,
            players: default_players(),
            words: WordManager::with_policy(policy),
            state: GameState::EnteringPlayerNames,
            time_left: 0.0,
            words_played: 0,
            current: 0,
            naming: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    /// Countdown bound of the current state, if it is timed.
    pub fn time_bound(&self) -> Option<f32> {
        self.state.time_bound()
    }

    /// Accepted words this round.
    pub fn words_played(&self) -> u32 {
        self.words_played
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index of the player being named. Only meaningful while entering names.
    pub fn player_index(&self) -> usize {
        self.naming
    }

    pub fn recent_words(&self) -> String {
        self.words.recent_words_display()
    }

    pub fn words(&self) -> &WordManager {
        &self.words
    }

    /// The player left standing once the game is over.
    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            GameState::GameOver => Some(self.current_player()),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            time_left: self.time_left,
            time_bound: self.time_bound(),
            words_played: self.words_played,
            players: [
                PlayerSnapshot::from(&self.players[0]),
                PlayerSnapshot::from(&self.players[1]),
            ],
            current: self.current,
            naming: self.naming,
            recent_words: self.recent_words(),
        }
    }

    /// Feed one line of text into the state machine.
    ///
    /// Outside name entry and play the text is ignored. Rejections are reported on
    /// the bus, never returned.
    pub fn take_input(&mut self, text: &str) {
        let text = text.trim();
        match self.state {
            GameState::EnteringPlayerNames => self.enter_name(text),
            GameState::Playing => self.submit_word(text),
            GameState::GameInitialize | GameState::GameOver => {
                tracing::debug!(state = ?self.state, "input ignored");
            }
        }
    }

    /// Advance one frame: consume queued text, then run the countdown.
    pub fn update(&mut self, delta_seconds: f32) {
        while let Some(envelope) = self.inbox.pop() {
            let text = envelope.text().unwrap_or_default().to_string();
            self.take_input(&text);
        }

        let delta = if delta_seconds.is_finite() {
            delta_seconds.max(0.0)
        } else {
            0.0
        };

        match self.state {
            GameState::GameInitialize => {
                if self.count_down(delta) {
                    self.enter_state(GameState::Playing);
                }
            }
            GameState::Playing => {
                if self.count_down(delta) {
                    tracing::debug!(player = self.current, "turn timed out");
                    self.strike_current();
                }
            }
            GameState::EnteringPlayerNames | GameState::GameOver => {}
        }
    }

    /// Start over: fresh players and history, back to name entry.
    pub fn reset(&mut self) {
        self.players = default_players();
        self.words = WordManager::with_policy(self.words.policy());
        self.words_played = 0;
        self.current = 0;
        self.naming = 0;
        self.time_left = 0.0;
        self.state = GameState::EnteringPlayerNames;
        // Text typed before the reset belongs to the previous round.
        self.inbox.clear();

        tracing::debug!("game reset");
        self.bus.publish(Message::GameReset);
    }

    fn enter_name(&mut self, name: &str) {
        if name.is_empty() {
            self.bus.publish(Message::InvalidInput);
            return;
        }

        let index = self.naming;
        self.players[index].rename(name);
        self.bus.publish_with(
            Message::PlayerNameEntered,
            &MessageExtra::text(name).with_number(index as i32),
        );

        if index + 1 < PLAYER_COUNT {
            self.naming = index + 1;
        } else {
            self.enter_state(GameState::GameInitialize);
        }
    }

    fn submit_word(&mut self, word: &str) {
        match self.words.submit(word) {
            Outcome::Accepted => self.score_current(),
            Outcome::Rejected(Rejection::Empty) => self.bus.publish(Message::InvalidInput),
            Outcome::Rejected(reason) => {
                tracing::debug!(?reason, word, "word rejected");
                self.strike_current();
            }
        }
    }

    fn score_current(&mut self) {
        let index = self.current;
        self.players[index].score_point();
        self.words_played += 1;
        self.time_left = TIME_LIMIT;
        self.bus
            .publish_with(Message::PlayerScored, &MessageExtra::number(index as i32));
        self.pass_turn();
    }

    fn strike_current(&mut self) {
        let index = self.current;
        let struck_out = match self.players[index].strike() {
            Ok(_) => self.players[index].has_max_strikes(),
            Err(err) => {
                tracing::warn!(%err, "strike past the limit");
                true
            }
        };

        self.bus
            .publish_with(Message::PlayerStriked, &MessageExtra::number(index as i32));
        self.pass_turn();

        if struck_out {
            self.enter_state(GameState::GameOver);
        }
    }

    /// Hand the turn to the other player with a full clock.
    fn pass_turn(&mut self) {
        self.current = (self.current + 1) % PLAYER_COUNT;
        self.time_left = TIME_LIMIT;
    }

    /// Returns true when the countdown has run out.
    fn count_down(&mut self, delta: f32) -> bool {
        self.time_left = (self.time_left - delta).max(0.0);
        self.time_left <= 0.0
    }

    fn enter_state(&mut self, state: GameState) {
        tracing::debug!(from = ?self.state, to = ?state, "state change");
        self.state = state;
        self.time_left = state.time_bound().unwrap_or(0.0);
        self.bus.publish(Message::StateChange);
    }
}

impl std::fmt::Debug for GameManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameManager")
            .field("state", &self.state)
            .field("time_left", &self.time_left)
            .field("words_played", &self.words_played)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("words", &self.words)
            .finish()
    }
}

fn default_players() -> [Player; PLAYER_COUNT] {
    DEFAULT_PLAYER_NAMES.map(Player::new)
}
