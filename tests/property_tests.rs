//! Property tests over random games on a small mixed-transport board.

use proptest::prelude::*;

use pursuit_engine::{
    Colour, GameConfig, GameEvent, GameState, Location, Move, Network, PlayerActor, PlayerConfig,
    RandomPlayer, Ticket, Transport, TurnOutcome,
};

fn board() -> Network {
    use Transport::*;
    let links = [
        (1, 2, Taxi),
        (2, 3, Taxi),
        (3, 4, Taxi),
        (4, 5, Taxi),
        (5, 6, Taxi),
        (6, 1, Taxi),
        (2, 7, Taxi),
        (7, 8, Taxi),
        (8, 9, Taxi),
        (9, 4, Taxi),
        (1, 4, Bus),
        (3, 8, Bus),
        (6, 9, Bus),
        (1, 9, Underground),
        (5, 7, Underground),
        (3, 10, Ferry),
        (10, 11, Taxi),
        (11, 12, Taxi),
        (12, 6, Bus),
    ];
    let mut network = Network::new();
    for (a, b, transport) in links {
        network.add_connection(Location(a), Location(b), transport);
    }
    network
}

fn config(rounds: Vec<bool>, hunters: usize) -> GameConfig {
    let starts = [5, 8, 11, 9];
    let colours = [Colour::Blue, Colour::Green, Colour::Red, Colour::Yellow];
    let mut config =
        GameConfig::new(rounds, board()).with_quarry(PlayerConfig::quarry(Location(1), hunters as u32));
    for i in 0..hunters {
        config = config.with_hunter(PlayerConfig::hunter(colours[i], Location(starts[i])));
    }
    config
}

fn total(state: &GameState, ticket: Ticket) -> u32 {
    state
        .players()
        .into_iter()
        .filter_map(|c| state.player_tickets(c, ticket))
        .sum()
}

/// True if the hunter has a neighbour it can afford to reach that no hunter
/// stands on.
fn hunter_can_move(state: &GameState, hunter: Colour) -> bool {
    let Some(origin) = state.player_location(hunter) else {
        return false;
    };
    let occupied: Vec<Location> = state
        .players()
        .into_iter()
        .filter(|c| c.is_hunter())
        .filter_map(|c| state.player_location(c))
        .collect();
    state.network().edges_from(origin).iter().any(|edge| {
        let ticket = Ticket::from_transport(edge.transport);
        state.player_tickets(hunter, ticket).unwrap_or(0) > 0
            && !occupied.contains(&edge.destination)
    })
}

/// Which actor seat matches the current player.
fn seat(state: &GameState) -> usize {
    state
        .players()
        .iter()
        .position(|&c| c == state.current_player())
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_games_keep_invariants(
        seed in any::<u64>(),
        rounds in prop::collection::vec(any::<bool>(), 1..12),
        hunters in 1usize..=4,
    ) {
        let mut state = GameState::new(config(rounds, hunters)).unwrap();
        let mut actors = RandomPlayer::table(seed, state.player_count());
        // The public view hides the quarry, so follow it from its own moves.
        let mut quarry_at = Location(1);

        for _ in 0..200 {
            if state.is_over() {
                break;
            }
            prop_assert!(state.current_round() <= state.round_count());

            let colour = state.current_player();
            let moves = state.legal_moves(colour);
            prop_assert!(!moves.is_empty());
            prop_assert!(moves.iter().all(|m| m.colour() == colour));

            for hunter in state.players().into_iter().filter(|c| c.is_hunter()) {
                let options = state.legal_moves(hunter);
                let passes_only = options.len() == 1 && options.contains(&Move::pass(hunter));
                prop_assert_eq!(passes_only, !hunter_can_move(&state, hunter));
            }

            let location = if colour.is_quarry() {
                quarry_at
            } else {
                state.player_location(colour).unwrap()
            };
            let mv = actors[seat(&state)].choose_move(state.view(), location, &moves);

            let round = state.current_round();
            let last_known = state.quarry_last_known();
            let taxi_before = total(&state, Ticket::Taxi);
            let bus_before = total(&state, Ticket::Bus);
            let underground_before = total(&state, Ticket::Underground);
            let mut events: Vec<GameEvent> = Vec::new();

            let outcome = state.apply(mv, &mut events).unwrap();

            match mv {
                Move::Ticket(ticket) if colour.is_hunter() => {
                    // Hunter tickets change hands, never vanish.
                    prop_assert_eq!(total(&state, Ticket::Taxi), taxi_before);
                    prop_assert_eq!(total(&state, Ticket::Bus), bus_before);
                    prop_assert_eq!(total(&state, Ticket::Underground), underground_before);
                    prop_assert_eq!(state.player_location(colour), Some(ticket.destination));
                }
                Move::Ticket(ticket) => {
                    quarry_at = ticket.destination;
                    prop_assert_eq!(state.current_round(), round + 1);
                    let reported = match &events[1] {
                        GameEvent::MoveMade(Move::Ticket(t)) => t.destination,
                        other => panic!("unexpected event {other:?}"),
                    };
                    if state.is_reveal_round(round) {
                        prop_assert_eq!(reported, ticket.destination);
                    } else {
                        prop_assert_eq!(reported, last_known);
                    }
                }
                Move::Double(double) => {
                    quarry_at = double.final_destination();
                    prop_assert_eq!(state.current_round(), round + 2);
                    prop_assert!(round + 2 <= state.round_count());
                    prop_assert_ne!(double.first.ticket, Ticket::Double);
                    prop_assert_ne!(double.second.ticket, Ticket::Double);
                }
                Move::Pass { .. } => {
                    prop_assert!(colour.is_hunter());
                    prop_assert_eq!(moves.len(), 1);
                }
            }

            if let TurnOutcome::GameOver(_) = outcome {
                prop_assert!(state.is_over());
                prop_assert!(!state.winners().is_empty());
            }
        }

        // Once over, the verdict is stable and further moves are refused.
        if state.is_over() {
            let winners = state.winners();
            let colour = state.current_player();
            let any = Move::pass(colour);
            prop_assert!(state.apply(any, &mut Vec::<GameEvent>::new()).is_err());
            prop_assert_eq!(state.winners(), winners);
        }
    }

    #[test]
    fn prop_hunters_never_hold_special_tickets(
        seed in any::<u64>(),
        hunters in 1usize..=4,
    ) {
        let mut state = GameState::new(config(vec![false; 10], hunters)).unwrap();
        let mut actors = RandomPlayer::table(seed, state.player_count());
        let mut quarry_at = Location(1);

        while !state.is_over() {
            let colour = state.current_player();
            let moves = state.legal_moves(colour);
            let location = if colour.is_quarry() {
                quarry_at
            } else {
                state.player_location(colour).unwrap()
            };
            let mv = actors[seat(&state)].choose_move(state.view(), location, &moves);
            if colour.is_quarry() {
                if let Some(destination) = mv.destination() {
                    quarry_at = destination;
                }
            }
            state.apply(mv, &mut Vec::<GameEvent>::new()).unwrap();

            for hunter in state.players().into_iter().filter(|c| c.is_hunter()) {
                prop_assert_eq!(state.player_tickets(hunter, Ticket::Secret), Some(0));
                prop_assert_eq!(state.player_tickets(hunter, Ticket::Double), Some(0));
            }
        }
    }

    #[test]
    fn prop_config_survives_serde(hunters in 1usize..=4, reveals in prop::collection::vec(any::<bool>(), 1..25)) {
        let config = config(reveals, hunters);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, config);
    }
}
