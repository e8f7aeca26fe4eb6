use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    place_fleet, AiPlayer, Board, CellStatus, CliPlayer, Coord, GameError, InputError, Match,
    NullView, Phase, PlacementAgent, Request, ScriptedInput, Shot, ShotOutcome, Side,
    TargetingAgent, TOTAL_DECKS,
};

/// A full fleet layout with mistakes sprinkled into the first two ships.
const FLEET_SCRIPT: [&str; 15] = [
    "x y", "0 1", "1 1", "1 1", "3 3", "1 2", "1 3", // three-decker
    "2 2", "1 6", "2 6", // two-decker
    "4 1", "5 1", // two-decker
    "4 4", "6 6", "6 3", // one-deckers
];

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(1)
}

#[test]
fn test_scripted_fleet_placement() {
    let mut player = CliPlayer::new(ScriptedInput::from_lines(FLEET_SCRIPT));
    let mut board = Board::new();
    let mut updates = 0;
    let skipped = place_fleet(&mut player, &mut rng(), &mut board, &mut |_: &Board| {
        updates += 1
    })
    .unwrap();

    assert!(skipped.is_empty());
    assert_eq!(board.ships().len(), 6);
    assert_eq!(board.alive_deck_count(), TOTAL_DECKS);
    assert_eq!(
        board.ships()[0].decks(),
        &[Coord::new(1, 1), Coord::new(1, 2), Coord::new(1, 3)]
    );
    assert!(board.cells().all(|c| c.status() != CellStatus::Border));
    // one refresh per deck, one per finished ship, one for the cleared board
    assert_eq!(updates, TOTAL_DECKS + 6 + 1);

    let input = player.into_input();
    assert_eq!(input.remaining(), 0);
    assert_eq!(
        input.rejections(),
        &[
            InputError::Malformed,
            InputError::OutOfBounds { row: 0, col: 1 },
            InputError::CellOccupiedOrBordered { row: 1, col: 1 },
            InputError::NotInRegion { row: 3, col: 3 },
            InputError::CellOccupiedOrBordered { row: 2, col: 2 },
        ]
    );
    assert_eq!(input.requests()[0], Request::Deck { decks: 3, index: 0 });
}

#[test]
fn test_decks_must_extend_the_same_line() {
    let mut player = CliPlayer::new(ScriptedInput::new([(3, 1), (1, 1), (4, 1), (2, 1)]));
    let mut board = Board::new();
    player
        .place_ship(&mut rng(), &mut board, 3, &mut |_: &Board| {})
        .unwrap();

    assert_eq!(
        board.ships()[0].decks(),
        &[Coord::new(3, 1), Coord::new(1, 1), Coord::new(2, 1)]
    );
    assert_eq!(
        player.input().rejections(),
        &[InputError::NotInRegion { row: 4, col: 1 }]
    );
    // the new ship is bordered right away
    assert_eq!(board.cell(2, 2).unwrap().status(), CellStatus::Border);
    assert_eq!(board.cell(4, 1).unwrap().status(), CellStatus::Border);
}

#[test]
fn test_closed_input_stops_placement() {
    let mut player = CliPlayer::new(ScriptedInput::new([(1, 1)]));
    let mut board = Board::new();
    assert_eq!(
        player.place_ship(&mut rng(), &mut board, 2, &mut |_: &Board| {}),
        Err(GameError::InputClosed)
    );
    assert!(board.ships().is_empty());
    assert_eq!(board.cell(1, 1).unwrap().status(), CellStatus::Empty);
}

#[test]
fn test_targeting_reprompts_on_bad_answers() {
    let mut board = Board::new();
    let ship = board.occupy(&[Coord::new(2, 2)]).unwrap();
    board.place_ship(ship);

    let mut player = CliPlayer::new(ScriptedInput::from_results([
        Ok((7, 1)),
        Err(InputError::Malformed),
        Ok((2, 3)),
        Ok((2, 3)),
        Ok((2, 2)),
    ]));
    let first = player.take_shot(&mut rng(), &mut board).unwrap();
    assert_eq!(
        first,
        Shot {
            target: Coord::new(2, 3),
            outcome: ShotOutcome::Miss
        }
    );
    let second = player.take_shot(&mut rng(), &mut board).unwrap();
    assert_eq!(second.outcome, ShotOutcome::Sunk);
    assert!(board.all_ships_sunk());
    assert_eq!(
        player.input().rejections(),
        &[
            InputError::OutOfBounds { row: 7, col: 1 },
            InputError::Malformed,
            InputError::AlreadyTargeted { row: 2, col: 3 },
        ]
    );
    assert_eq!(
        player.take_shot(&mut rng(), &mut board),
        Err(GameError::InputClosed)
    );
}

#[test]
fn test_scripted_human_vs_ai_match() {
    let mut answers: Vec<(i64, i64)> = Vec::new();
    for line in FLEET_SCRIPT {
        if let Ok(pair) = seabattle::input::parse_coords(line) {
            answers.push(pair);
        }
    }
    for r in 1..=6 {
        for c in 1..=6 {
            answers.push((r, c));
        }
    }
    let human = CliPlayer::new(ScriptedInput::new(answers));
    let mut game = Match::new(Box::new(human), Box::new(AiPlayer::new()), Some(99));
    let winner = game.run(&mut NullView).unwrap();
    assert_eq!(game.phase(), Phase::GameOver { winner });
    assert_eq!(game.board(Side::Human).ships().len(), 6);
    assert!(game.board(winner.opponent()).all_ships_sunk());
}

#[test]
fn test_closed_input_ends_match_without_mutation() {
    let human = CliPlayer::new(ScriptedInput::new([]));
    let mut game = Match::new(Box::new(human), Box::new(AiPlayer::new()), Some(1));
    assert_eq!(game.run(&mut NullView), Err(GameError::InputClosed));
    assert_eq!(game.phase(), Phase::Placing(Side::Human));
    assert!(game.board(Side::Human).ships().is_empty());
}

#[test]
fn test_abandoned_fleet_is_cleared_for_retry() {
    let human = CliPlayer::new(ScriptedInput::from_lines(["1 1", "1 2", "1 3", "1 6"]));
    let mut game = Match::new(Box::new(human), Box::new(AiPlayer::new()), Some(1));

    let mut updates = 0;
    struct Counter<'a>(&'a mut usize);
    impl seabattle::MatchView for Counter<'_> {
        fn board_updated(&mut self, _side: Side, _board: &Board) {
            *self.0 += 1;
        }
    }
    assert_eq!(
        game.step(&mut Counter(&mut updates)),
        Err(GameError::InputClosed)
    );
    // three decks, the finished three-decker, the lone two-decker deck
    assert_eq!(updates, 5);

    for _ in 0..2 {
        let board = game.board(Side::Human);
        assert!(board.ships().is_empty());
        assert!(board.cells().all(|c| c.status() == CellStatus::Empty));
        assert_eq!(game.phase(), Phase::Placing(Side::Human));
        assert_eq!(game.step(&mut NullView), Err(GameError::InputClosed));
    }
}
