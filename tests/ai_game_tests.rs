use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    place_fleet, AiPlayer, Board, CellStatus, Coord, GameError, Match, MatchView, NullView,
    Phase, PlacementAgent, Shot, Side, TargetingAgent, FLEET, NUM_SHIPS, TOTAL_DECKS,
};

#[test]
fn test_ai_places_full_fleet() {
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let skipped =
            place_fleet(&mut AiPlayer::new(), &mut rng, &mut board, &mut |_: &Board| {}).unwrap();
        assert_eq!(board.ships().len() + skipped.len(), NUM_SHIPS);
        if skipped.is_empty() {
            assert_eq!(board.alive_deck_count(), TOTAL_DECKS);
        } else {
            assert!(board.ships().len() < NUM_SHIPS);
        }
        assert!(board.cells().all(|c| c.status() != CellStatus::Border));
    }
}

#[test]
fn test_placement_is_reproducible() {
    let place = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        place_fleet(&mut AiPlayer::new(), &mut rng, &mut board, &mut |_: &Board| {}).unwrap();
        board
            .ships()
            .iter()
            .map(|s| s.decks().to_vec())
            .collect::<Vec<_>>()
    };
    assert_eq!(place(42), place(42));
}

#[test]
fn test_crowded_board_skips_ships() {
    let mut board = Board::new();
    // four single decks whose borders cover the whole grid
    for (r, c) in [(2, 2), (2, 5), (5, 2), (5, 5)] {
        let ship = board.occupy(&[Coord::new(r, c)]).unwrap();
        board.mark_border(&ship);
        board.place_ship(ship);
    }
    let mut rng = SmallRng::seed_from_u64(7);
    let mut ai = AiPlayer::new();
    assert_eq!(
        ai.place_ship(&mut rng, &mut board, 3, &mut |_: &Board| {}),
        Err(GameError::NoValidPlacement { decks: 3 })
    );
    let skipped = place_fleet(&mut ai, &mut rng, &mut board, &mut |_: &Board| {}).unwrap();
    assert_eq!(skipped, FLEET.to_vec());
    assert_eq!(board.ships().len(), 4);
}

#[test]
fn test_ai_never_repeats_a_target() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = Board::new();
    let mut ai = AiPlayer::new();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..36 {
        let shot = ai.take_shot(&mut rng, &mut board).unwrap();
        assert!(seen.insert(shot.target));
    }
    assert!(matches!(
        ai.take_shot(&mut rng, &mut board),
        Err(GameError::Invariant(_))
    ));
}

#[test]
fn test_ai_vs_ai_match_terminates() {
    for seed in 0..50 {
        let mut game = Match::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()), Some(seed));
        let winner = game.run(&mut NullView).unwrap();
        assert_eq!(game.phase(), Phase::GameOver { winner });
        assert!(game.board(winner.opponent()).all_ships_sunk());
        assert!(!game.board(winner).all_ships_sunk());
        assert!(game.shots() < 2 * 36);

        // strict alternation, human first
        for (i, (side, _)) in game.history().iter().enumerate() {
            let expected = if i % 2 == 0 { Side::Human } else { Side::Skynet };
            assert_eq!(*side, expected);
        }
        let (last, _) = game.history()[game.shots() - 1];
        assert_eq!(last, winner);
    }
}

#[test]
fn test_match_phases_in_order() {
    let mut game = Match::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()), Some(3));
    assert_eq!(game.phase(), Phase::Placing(Side::Human));
    assert_eq!(game.step(&mut NullView).unwrap(), Phase::Placing(Side::Skynet));
    assert!(!game.board(Side::Human).ships().is_empty());
    assert!(game.board(Side::Skynet).ships().is_empty());
    assert_eq!(
        game.step(&mut NullView).unwrap(),
        Phase::Turn { attacker: Side::Human }
    );
    assert_eq!(
        game.step(&mut NullView).unwrap(),
        Phase::Turn { attacker: Side::Skynet }
    );
    assert_eq!(game.shots(), 1);
    assert_eq!(game.history()[0].0, Side::Human);
}

#[test]
fn test_finished_match_is_frozen() {
    let mut game = Match::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()), Some(11));
    let winner = game.run(&mut NullView).unwrap();
    let shots = game.shots();
    let alive = game.board(winner).alive_deck_count();
    assert_eq!(game.step(&mut NullView).unwrap(), Phase::GameOver { winner });
    assert_eq!(game.shots(), shots);
    assert_eq!(game.board(winner).alive_deck_count(), alive);
    assert_eq!(game.winner(), Some(winner));
}

#[test]
fn test_seeded_matches_repeat() {
    let play = || {
        let mut game =
            Match::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()), Some(2024));
        game.run(&mut NullView).unwrap();
        game.report()
    };
    assert_eq!(play(), play());
}

/// Places only single-deck ships, reporting no room for anything larger.
struct OnlySingles(AiPlayer);

impl PlacementAgent for OnlySingles {
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        decks: usize,
        on_update: &mut dyn FnMut(&Board),
    ) -> Result<(), GameError> {
        if decks > 1 {
            return Err(GameError::NoValidPlacement { decks });
        }
        self.0.place_ship(rng, board, decks, on_update)
    }
}

impl TargetingAgent for OnlySingles {
    fn take_shot(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<Shot, GameError> {
        self.0.take_shot(rng, board)
    }
}

#[derive(Default)]
struct Recorder {
    skipped: Vec<(Side, usize)>,
    shots: usize,
    updates: usize,
    winner: Option<Side>,
}

impl MatchView for Recorder {
    fn board_updated(&mut self, _side: Side, _board: &Board) {
        self.updates += 1;
    }

    fn placement_skipped(&mut self, side: Side, decks: usize) {
        self.skipped.push((side, decks));
    }

    fn shot_fired(&mut self, _attacker: Side, _shot: Shot) {
        self.shots += 1;
    }

    fn game_over(&mut self, winner: Side, _game: &Match) {
        self.winner = Some(winner);
    }
}

#[test]
fn test_short_fleet_is_still_playable() {
    let mut game = Match::new(
        Box::new(OnlySingles(AiPlayer::new())),
        Box::new(AiPlayer::new()),
        Some(5),
    );
    let mut view = Recorder::default();
    let winner = game.run(&mut view).unwrap();

    assert_eq!(game.skipped(Side::Human), &[3, 2, 2]);
    assert!(game.skipped(Side::Skynet).is_empty());
    assert_eq!(game.board(Side::Human).ships().len(), 3);
    assert_eq!(
        view.skipped,
        vec![(Side::Human, 3), (Side::Human, 2), (Side::Human, 2)]
    );
    assert_eq!(view.winner, Some(winner));
    assert_eq!(view.shots, game.shots());
    assert!(view.updates > game.shots());

    let report = game.report();
    assert_eq!(report.winner, Some(winner));
    assert_eq!(report.human_skipped, vec![3, 2, 2]);
}
