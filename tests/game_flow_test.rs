//! End-to-end rounds driven through the bus, the way the terminal runner does.

use std::rc::Rc;

use noun_road::core::{DuplicatePolicy, GameManager, Mailbox, MessageBus};
use noun_road::input::InputManager;
use noun_road::types::{EditAction, GameState, Message, INIT_TIME, MAX_STRIKES, TIME_LIMIT};

struct Table {
    bus: Rc<MessageBus>,
    game: GameManager,
    input: InputManager,
    seen: Rc<Mailbox>,
}

impl Table {
    fn new(policy: DuplicatePolicy) -> Self {
        let bus = Rc::new(MessageBus::new());
        let game = GameManager::with_policy(bus.clone(), policy);
        let input = InputManager::new(bus.clone());
        let seen = Rc::new(Mailbox::new());
        seen.subscribe(&bus, &Message::ALL);
        Self {
            bus,
            game,
            input,
            seen,
        }
    }

    /// Type a line, press Enter and run one frame.
    fn enter(&mut self, text: &str) {
        self.input.apply(EditAction::Clear);
        for c in text.chars() {
            self.input.apply(EditAction::Insert(c));
        }
        self.input.apply(EditAction::Submit);
        self.game.update(0.0);
    }

    fn seen(&self) -> Vec<Message> {
        self.seen.drain().into_iter().map(|e| e.message).collect()
    }

    fn start_playing(&mut self, first: &str, second: &str) {
        self.enter(first);
        self.enter(second);
        self.game.update(INIT_TIME);
        assert_eq!(self.game.state(), GameState::Playing);
        self.seen.clear();
    }
}

#[test]
fn test_full_round_alice_and_bob() {
    let mut t = Table::new(DuplicatePolicy::FullHistory);

    t.enter("Alice");
    t.enter("Bob");
    assert_eq!(t.game.state(), GameState::GameInitialize);
    assert_eq!(
        t.seen(),
        vec![
            Message::TextEntered,
            Message::PlayerNameEntered,
            Message::TextEntered,
            Message::PlayerNameEntered,
            Message::StateChange,
        ]
    );

    t.game.update(INIT_TIME / 2.0);
    assert_eq!(t.game.state(), GameState::GameInitialize);
    t.game.update(INIT_TIME / 2.0);
    assert_eq!(t.game.state(), GameState::Playing);
    assert_eq!(t.game.time_left(), TIME_LIMIT);
    t.seen.clear();

    t.enter("dog");
    t.enter("goat");
    t.enter("tiger");
    assert_eq!(t.game.words_played(), 3);
    assert_eq!(t.game.player(0).map(|p| p.score()), Some(2));
    assert_eq!(t.game.player(1).map(|p| p.score()), Some(1));
    assert_eq!(t.game.current_player().name(), "Bob");
    assert_eq!(t.game.recent_words(), "dog - goat - tiger");

    // Bob breaks the chain on each of his turns.
    t.enter("apple");
    t.enter("rabbit");
    t.enter("zebra");
    assert_eq!(t.game.player(1).map(|p| p.strikes()), Some(MAX_STRIKES - 1));
    assert_eq!(t.game.state(), GameState::Playing);

    t.enter("tapir");
    t.enter("quail");
    assert_eq!(t.game.state(), GameState::GameOver);
    assert_eq!(t.game.player(0).map(|p| p.score()), Some(4));
    assert_eq!(t.game.player(1).map(|p| p.strikes()), Some(MAX_STRIKES));
    assert_eq!(t.game.winner().map(|p| p.name()), Some("Alice"));
}

#[test]
fn test_idle_players_time_out() {
    let mut t = Table::new(DuplicatePolicy::FullHistory);
    t.start_playing("Ann", "Ben");

    // Each timeout strikes the player to move and hands the turn over.
    for _ in 0..(MAX_STRIKES * 2 - 1) {
        assert_eq!(t.game.state(), GameState::Playing);
        t.game.update(TIME_LIMIT);
    }

    assert_eq!(t.game.state(), GameState::GameOver);
    assert_eq!(t.game.player(0).map(|p| p.strikes()), Some(MAX_STRIKES));
    assert_eq!(t.game.player(1).map(|p| p.strikes()), Some(MAX_STRIKES - 1));
    assert_eq!(t.game.winner().map(|p| p.name()), Some("Ben"));

    let seen = t.seen();
    assert_eq!(
        seen.iter().filter(|m| **m == Message::PlayerStriked).count(),
        (MAX_STRIKES * 2 - 1) as usize
    );
    assert_eq!(seen.last(), Some(&Message::StateChange));

    // Nothing else happens once the round is over.
    t.game.update(TIME_LIMIT);
    assert!(t.seen().is_empty());
}

#[test]
fn test_timer_runs_in_small_frames() {
    let mut t = Table::new(DuplicatePolicy::FullHistory);
    t.start_playing("Ann", "Ben");

    for _ in 0..599 {
        t.game.update(1.0 / 60.0);
    }
    assert_eq!(t.game.player(0).map(|p| p.strikes()), Some(0));
    assert!(t.game.time_left() > 0.0);

    t.game.update(0.1);
    assert_eq!(t.game.player(0).map(|p| p.strikes()), Some(1));
    assert_eq!(t.game.current_index(), 1);
    assert_eq!(t.game.time_left(), TIME_LIMIT);
}

#[test]
fn test_repeated_word_policy() {
    let mut full = Table::new(DuplicatePolicy::FullHistory);
    full.start_playing("Ann", "Ben");
    full.enter("kayak");
    full.enter("kite");
    full.enter("eek");
    full.enter("kayak");
    assert_eq!(full.game.player(1).map(|p| p.strikes()), Some(1));

    let mut previous = Table::new(DuplicatePolicy::PreviousWord);
    previous.start_playing("Ann", "Ben");
    previous.enter("kayak");
    previous.enter("kite");
    previous.enter("eek");
    previous.enter("kayak");
    assert_eq!(previous.game.player(1).map(|p| p.strikes()), Some(0));
    assert_eq!(previous.game.words_played(), 4);
}

#[test]
fn test_reset_mid_game_starts_over() {
    let mut t = Table::new(DuplicatePolicy::FullHistory);
    t.start_playing("Ann", "Ben");
    t.enter("moose");
    t.enter("emu");

    // Text typed before the reset is dropped with the old round.
    t.input.apply(EditAction::Insert('u'));
    t.input.apply(EditAction::Submit);
    t.game.reset();
    t.game.update(0.0);

    assert_eq!(t.game.state(), GameState::EnteringPlayerNames);
    assert_eq!(t.game.words_played(), 0);
    assert_eq!(t.game.recent_words(), "");
    assert_eq!(t.game.player(0).map(|p| p.name()), Some("Player1"));
    assert_eq!(t.seen().last(), Some(&Message::GameReset));

    t.start_playing("Cat", "Dan");
    assert_eq!(t.game.current_player().name(), "Cat");
    t.enter("moose");
    assert_eq!(t.game.words_played(), 1);
}

#[test]
fn test_bus_keeps_one_subscription_per_listener() {
    let t = Table::new(DuplicatePolicy::FullHistory);
    let before = t.bus.listener_count(Message::TextEntered);

    t.seen.subscribe(&t.bus, &[Message::TextEntered]);
    assert_eq!(t.bus.listener_count(Message::TextEntered), before);
}
