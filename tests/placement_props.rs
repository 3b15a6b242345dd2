use std::collections::HashSet;

use broadside::{
    place_randomly, Board, Bounds, Coordinate, CoordError, Fleet, GameConfig, GameSession,
    ShotError, DEFAULT_FLEET, MAX_PLACEMENT_ATTEMPTS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_is_disjoint_and_in_bounds(seed in any::<u64>(), rows in 0usize..16, cols in 0usize..30) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(Bounds::new(rows, cols));
        let mut fleet = Fleet::new();
        for def in DEFAULT_FLEET {
            place_randomly(&mut rng, def, &mut board, &mut fleet, MAX_PLACEMENT_ATTEMPTS).unwrap();
        }

        let mut seen = HashSet::new();
        for (i, ship) in fleet.iter().enumerate() {
            prop_assert_eq!(ship.id(), i + 1);
            prop_assert_eq!(ship.positions().len(), ship.size());
            for &p in ship.positions() {
                prop_assert!(board.bounds().contains(p.row, p.col));
                prop_assert!(seen.insert(p), "cell {} used twice", p);
                prop_assert_eq!(board.get(p).unwrap().ship_id(), Some(ship.id()));
            }
        }
        let occupied = board.rows_iter().flatten().filter(|c| c.is_occupied()).count();
        prop_assert_eq!(occupied, seen.len());
    }

    #[test]
    fn out_of_range_coordinates_fail(col in 8u8..26, row in 9usize..1000) {
        let bounds = Bounds::default();
        let letter = (b'A' + col) as char;
        prop_assert_eq!(Coordinate::parse(&format!("{}1", letter), bounds), Err(CoordError::InvalidFormat));
        prop_assert_eq!(Coordinate::parse(&format!("A{}", row), bounds), Err(CoordError::InvalidFormat));
    }

    #[test]
    fn in_range_coordinates_parse(row in 0usize..8, col in 0usize..8, lower in any::<bool>()) {
        let text = Coordinate::new(row, col).to_string();
        let text = if lower { text.to_lowercase() } else { text };
        prop_assert_eq!(Coordinate::parse(&text, Bounds::default()), Ok(Coordinate::new(row, col)));
    }

    #[test]
    fn repeat_fire_is_idempotent(seed in any::<u64>(), row in 0usize..8, col in 0usize..8) {
        let mut session = GameSession::with_seed(GameConfig::default(), seed).unwrap();
        let input = Coordinate::new(row, col).to_string();
        session.fire(&input).unwrap();
        let after = session.state().clone();
        prop_assert_eq!(session.fire(&input).unwrap_err(), ShotError::AlreadyFired);
        prop_assert_eq!(session.board(), after.board());
        prop_assert_eq!(session.state().fleet(), after.fleet());
        prop_assert_eq!(session.is_game_over(), after.is_game_over());
        prop_assert_eq!(session.last_shot(), after.last_shot());
    }

    #[test]
    fn firing_everywhere_wins_exactly_once(seed in any::<u64>()) {
        let mut session = GameSession::with_seed(GameConfig::default(), seed).unwrap();
        let mut wins = 0;
        for row in 0..8 {
            for col in 0..8 {
                match session.fire(&Coordinate::new(row, col).to_string()) {
                    Ok(shot) if matches!(shot.result, broadside::ShotResult::Win(_)) => wins += 1,
                    Ok(_) => {}
                    Err(e) => prop_assert_eq!(e, ShotError::GameAlreadyOver),
                }
            }
        }
        prop_assert_eq!(wins, 1);
        prop_assert!(session.is_game_over());
    }
}
