//! Host loop tests: actors, rotations, and error paths.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pursuit_engine::{
    Colour, ConfigError, EventLog, FirstMovePlayer, Game, GameConfig, GameError, GameEvent,
    GameView, Location, Move, MoveError, MoveSet, Network, PlayerActor, PlayerConfig,
    RandomPlayer, Spectator, SpectatorError, Ticket, Transport, TurnOutcome, WinReason, Winners,
};

/// Taxi ring 1 - 2 - ... - n - 1.
fn ring(n: u32) -> Network {
    let mut network = Network::new();
    for i in 1..=n {
        network.add_connection(Location(i), Location(i % n + 1), Transport::Taxi);
    }
    network
}

fn ring_config(rounds: usize) -> GameConfig {
    GameConfig::new(vec![false; rounds], ring(8))
        .with_quarry(PlayerConfig::quarry(Location(1), 1))
        .with_hunter(PlayerConfig::hunter(Colour::Red, Location(5)))
}

/// Log to the test writer; set `RUST_LOG=pursuit_engine=debug` to watch a game.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn first_move_actors(count: usize) -> Vec<Box<dyn PlayerActor>> {
    (0..count)
        .map(|_| Box::new(FirstMovePlayer) as Box<dyn PlayerActor>)
        .collect()
}

#[test]
fn test_actor_count_must_match_players() {
    let result = Game::new(ring_config(3), first_move_actors(3));
    assert_eq!(
        result.err(),
        Some(ConfigError::ActorCount {
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn test_invalid_config_rejected() {
    let config = GameConfig::new(vec![], ring(8))
        .with_quarry(PlayerConfig::quarry(Location(1), 1))
        .with_hunter(PlayerConfig::hunter(Colour::Red, Location(5)));
    assert_eq!(
        Game::new(config, first_move_actors(2)).err(),
        Some(ConfigError::EmptyRounds)
    );
}

#[test]
fn test_rotation_visits_every_seat() {
    let mut game = Game::new(ring_config(4), first_move_actors(2)).unwrap();
    let log = Rc::new(EventLog::new());
    game.register_spectator(log.clone()).unwrap();

    let outcome = game.start_rotate().unwrap();

    assert_eq!(outcome, TurnOutcome::RotationComplete);
    assert_eq!(game.state().current_round(), 1);
    assert_eq!(game.state().current_player(), Colour::Black);
    assert_eq!(game.state().player_location(Colour::Red), Some(Location(4)));
    assert_eq!(
        log.events(),
        vec![
            GameEvent::RoundStarted(1),
            GameEvent::MoveMade(Move::ticket(Colour::Black, Ticket::Taxi, Location::UNREVEALED)),
            GameEvent::MoveMade(Move::ticket(Colour::Red, Ticket::Taxi, Location(4))),
            GameEvent::RotationComplete,
        ]
    );
}

#[test]
fn test_round_limit_stops_before_quarry_asked_again() {
    let asked = Rc::new(Cell::new(0));
    let counter = asked.clone();
    let quarry = move |_: GameView<'_>, _: Location, moves: &MoveSet| {
        counter.set(counter.get() + 1);
        pursuit_engine::actors::sorted_moves(moves)[0]
    };

    let actors: Vec<Box<dyn PlayerActor>> = vec![Box::new(quarry), Box::new(FirstMovePlayer)];
    let mut game = Game::new(ring_config(2), actors).unwrap();

    let outcome = game.play().unwrap();

    assert_eq!(outcome.reason, WinReason::RoundLimit);
    assert_eq!(asked.get(), 2);
    assert_eq!(game.state().current_round(), 2);
    let quarry: Winners = [Colour::Black].into_iter().collect();
    assert_eq!(game.state().winners(), quarry);
}

#[test]
fn test_start_rotate_on_finished_game() {
    let mut game = Game::new(ring_config(1), first_move_actors(2)).unwrap();
    assert!(game.start_rotate().unwrap().is_game_over());

    assert_eq!(
        game.start_rotate(),
        Err(GameError::Move(MoveError::GameOver))
    );
}

#[test]
fn test_actor_location_is_true_location() {
    let seen = Rc::new(Cell::new(Location::UNREVEALED));
    let record = seen.clone();
    let quarry = move |_: GameView<'_>, location: Location, moves: &MoveSet| {
        record.set(location);
        pursuit_engine::actors::sorted_moves(moves)[0]
    };

    let actors: Vec<Box<dyn PlayerActor>> = vec![Box::new(quarry), Box::new(FirstMovePlayer)];
    let mut game = Game::new(ring_config(3), actors).unwrap();

    game.start_rotate().unwrap();
    assert_eq!(seen.get(), Location(1));
    game.start_rotate().unwrap();
    // Hidden from the public view but known to the quarry's own actor.
    assert_eq!(seen.get(), Location(2));
    assert_eq!(game.state().player_location(Colour::Black), Some(Location::UNREVEALED));
}

/// Records what a spectator can learn from each view it is handed.
#[derive(Default)]
struct Snooper {
    seen: RefCell<Vec<(Option<Location>, String)>>,
}

impl Spectator for Snooper {
    fn on_move_made(&self, view: GameView<'_>, _mv: &Move) {
        self.seen
            .borrow_mut()
            .push((view.player_location(Colour::Black), format!("{view:?}")));
    }
}

#[test]
fn test_hidden_quarry_not_visible_to_hunters_or_spectators() {
    let hunter_saw = Rc::new(RefCell::new(Vec::new()));
    let record = hunter_saw.clone();
    let hunter = move |view: GameView<'_>, _: Location, moves: &MoveSet| {
        record
            .borrow_mut()
            .push((view.player_location(Colour::Black), format!("{view:?}")));
        pursuit_engine::actors::sorted_moves(moves)[0]
    };

    let actors: Vec<Box<dyn PlayerActor>> = vec![Box::new(FirstMovePlayer), Box::new(hunter)];
    let mut game = Game::new(ring_config(3), actors).unwrap();
    let snooper = Rc::new(Snooper::default());
    game.register_spectator(snooper.clone()).unwrap();

    // The quarry slips from 1 to 2 on a hidden round.
    game.start_rotate().unwrap();

    let hunter_saw = hunter_saw.borrow();
    let spectator_saw = snooper.seen.borrow();
    assert_eq!(hunter_saw.len(), 1);
    assert_eq!(spectator_saw.len(), 2);
    for (location, debug) in hunter_saw.iter().chain(spectator_saw.iter()) {
        assert_eq!(*location, Some(Location::UNREVEALED));
        assert!(!debug.contains("Location(2)"), "{debug}");
    }
    assert!(!format!("{:?}", game.state()).contains("Location(2)"));
}

#[test]
fn test_illegal_actor_move_rejected() {
    init_tracing();
    let cheat = |_: GameView<'_>, _: Location, _: &MoveSet| {
        Move::ticket(Colour::Black, Ticket::Taxi, Location(5))
    };
    let actors: Vec<Box<dyn PlayerActor>> = vec![Box::new(cheat), Box::new(FirstMovePlayer)];
    let mut game = Game::new(ring_config(3), actors).unwrap();
    let log = Rc::new(EventLog::new());
    game.register_spectator(log.clone()).unwrap();

    let result = game.start_rotate();

    assert!(matches!(
        result,
        Err(GameError::Move(MoveError::Illegal { colour: Colour::Black, .. }))
    ));
    assert_eq!(game.state().current_round(), 0);
    assert_eq!(game.state().current_player(), Colour::Black);
    assert_eq!(game.state().player_tickets(Colour::Black, Ticket::Taxi), Some(4));
    assert!(log.events().is_empty());
}

#[test]
fn test_submit_out_of_turn() {
    let mut game = Game::new(ring_config(3), first_move_actors(2)).unwrap();
    let mv = Move::ticket(Colour::Red, Ticket::Taxi, Location(4));

    assert_eq!(
        game.submit(mv),
        Err(MoveError::Illegal {
            mv,
            colour: Colour::Black
        })
    );
}

#[test]
fn test_spectator_registration() {
    let mut game = Game::new(ring_config(3), first_move_actors(2)).unwrap();
    let log: Rc<dyn Spectator> = Rc::new(EventLog::new());

    game.register_spectator(log.clone()).unwrap();
    assert_eq!(
        game.register_spectator(log.clone()),
        Err(SpectatorError::AlreadyRegistered)
    );
    assert_eq!(game.spectators().len(), 1);

    game.unregister_spectator(&log).unwrap();
    assert!(game.spectators().is_empty());
    assert_eq!(
        game.unregister_spectator(&log),
        Err(SpectatorError::NotRegistered)
    );
}

#[test]
fn test_unregistered_spectator_stops_hearing() {
    let mut game = Game::new(ring_config(4), first_move_actors(2)).unwrap();
    let log = Rc::new(EventLog::new());
    let handle: Rc<dyn Spectator> = log.clone();
    game.register_spectator(handle.clone()).unwrap();

    game.start_rotate().unwrap();
    let heard = log.events().len();
    game.unregister_spectator(&handle).unwrap();
    game.start_rotate().unwrap();

    assert_eq!(log.events().len(), heard);
}

#[test]
fn test_random_table_plays_to_completion() {
    init_tracing();
    let network = ring(12)
        .with_connection(Location(1), Location(7), Transport::Bus)
        .with_connection(Location(3), Location(9), Transport::Underground)
        .with_connection(Location(5), Location(11), Transport::Ferry);
    let config = GameConfig::new(pursuit_engine::core::config::standard_schedule(), network)
        .with_quarry(PlayerConfig::quarry(Location(1), 2))
        .with_hunter(PlayerConfig::hunter(Colour::Red, Location(4)))
        .with_hunter(PlayerConfig::hunter(Colour::Blue, Location(10)));

    let actors = RandomPlayer::table(7, 3)
        .into_iter()
        .map(|p| Box::new(p) as Box<dyn PlayerActor>)
        .collect();
    let mut game = Game::new(config, actors).unwrap();

    let outcome = game.play().unwrap();

    assert!(game.state().is_over());
    assert!(game.state().current_round() <= game.state().round_count());
    let winners = game.state().winners();
    assert!(!winners.is_empty());
    assert!(winners.iter().all(|c| c.role() == outcome.winning_role()));
}
