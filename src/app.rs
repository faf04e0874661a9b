//! App: wires the bus, game manager and input line together and reacts to
//! gameplay messages on behalf of the terminal front end.
//!
//! Reactions run after each frame's update by draining a mailbox, so the game
//! manager is never borrowed from inside a bus dispatch.

use std::rc::Rc;

use crossterm::event::KeyEvent;

use crate::core::{
    DuplicatePolicy, Envelope, GameManager, GameSnapshot, LoggingSystem, Mailbox, MessageBus,
};
use crate::input::{map_key, InputManager};
use crate::term::{FlashKind, Flashes, HudState};
use crate::types::{EditAction, GameState, Message, DEFAULT_PLAYER_NAMES};

/// Messages the presenter reacts to.
const REACTS_TO: [Message; 6] = [
    Message::StateChange,
    Message::PlayerScored,
    Message::PlayerStriked,
    Message::InvalidInput,
    Message::PlayerNameEntered,
    Message::GameReset,
];

pub struct App {
    bus: Rc<MessageBus>,
    game: GameManager,
    input: InputManager,
    events: Rc<Mailbox>,
    flashes: Flashes,
    logger: Rc<LoggingSystem>,
    quit: bool,
}

impl App {
    pub fn new(policy: DuplicatePolicy) -> Self {
        let bus = Rc::new(MessageBus::new());
        let logger = LoggingSystem::attach(&bus);
        let game = GameManager::with_policy(bus.clone(), policy);

        let mut input = InputManager::new(bus.clone());
        input.set_input(DEFAULT_PLAYER_NAMES[0]);

        let events = Rc::new(Mailbox::new());
        events.subscribe(&bus, &REACTS_TO);

        Self {
            bus,
            game,
            input,
            events,
            flashes: Flashes::default(),
            logger,
            quit: false,
        }
    }

    pub fn bus(&self) -> &Rc<MessageBus> {
        &self.bus
    }

    pub fn game(&self) -> &GameManager {
        &self.game
    }

    pub fn input(&self) -> &str {
        self.input.input()
    }

    pub fn flashes(&self) -> &Flashes {
        &self.flashes
    }

    pub fn messages_logged(&self) -> u64 {
        self.logger.delivered()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn hud(&self) -> HudState<'_> {
        HudState {
            input: self.input.input(),
            flashes: &self.flashes,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = map_key(key) {
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: EditAction) {
        let game_over = self.game.state() == GameState::GameOver;
        match action {
            EditAction::Quit => self.quit = true,
            EditAction::Reset => self.game.reset(),
            EditAction::Submit if game_over => self.game.reset(),
            // The input box shows the result until the next round.
            _ if game_over => {}
            _ => {
                self.input.apply(action);
            }
        }
        self.react();
    }

    /// Advance one frame.
    pub fn tick(&mut self, delta_seconds: f32) {
        self.flashes.update(delta_seconds);
        self.game.update(delta_seconds);
        self.react();
    }

    fn react(&mut self) {
        for envelope in self.events.drain() {
            self.react_to(&envelope);
        }
    }

    fn react_to(&mut self, envelope: &Envelope) {
        match envelope.message {
            Message::StateChange => {
                self.input.set_input("");
                if let Some(winner) = self.game.winner() {
                    let text = format!("{} wins!", winner.name());
                    self.input.set_input(&text);
                }
            }
            Message::PlayerNameEntered if envelope.number() == Some(0) => {
                self.input.set_input(DEFAULT_PLAYER_NAMES[1]);
            }
            Message::GameReset => self.input.set_input(DEFAULT_PLAYER_NAMES[0]),
            Message::PlayerScored | Message::PlayerStriked => {
                // Start the next word with the letter it has to begin with.
                let recent = self.game.recent_words();
                match recent.chars().last() {
                    Some(letter) => self.input.set_input(&letter.to_string()),
                    None => self.input.set_input(""),
                }

                if envelope.message == Message::PlayerScored {
                    self.flashes.start(FlashKind::Scored);
                } else {
                    self.flashes.start(FlashKind::Striked);
                }
            }
            Message::InvalidInput => self.flashes.start(FlashKind::Invalid),
            _ => {}
        }
    }
}
