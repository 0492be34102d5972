use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    BoardFactory, CellState, Coordinate, GenerationError, PlacementError, BOARD_SIZE, FLEET,
    MAX_PLACEMENT_ATTEMPTS, TOTAL_SHIP_CELLS,
};

fn ship_cells(board: &seabattle::Board) -> usize {
    (0..BOARD_SIZE as i32)
        .flat_map(|r| (0..BOARD_SIZE as i32).map(move |c| Coordinate::new(r, c)))
        .filter(|c| board.cell(*c) == Some(CellState::Ship))
        .count()
}

#[test]
fn test_default_factory() {
    let factory = BoardFactory::default();
    assert_eq!(factory.fleet(), &FLEET);
    assert_eq!(factory.max_attempts(), MAX_PLACEMENT_ATTEMPTS);
}

#[test]
fn test_generated_boards_hold_the_full_fleet() {
    let factory = BoardFactory::default();
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = factory.generate(&mut rng).unwrap();

        assert!(board.is_in_play(), "seed {}", seed);
        assert!(!board.is_defeated());
        let lengths: Vec<usize> = board.vessels().iter().map(|v| v.length()).collect();
        assert_eq!(lengths, FLEET.to_vec(), "seed {}", seed);
        assert_eq!(ship_cells(&board), TOTAL_SHIP_CELLS, "seed {}", seed);

        for (i, a) in board.vessels().iter().enumerate() {
            for b in &board.vessels()[i + 1..] {
                let touching = a
                    .occupied_cells()
                    .flat_map(Coordinate::neighbourhood)
                    .any(|cell| b.is_hit_by(cell));
                assert!(!touching, "seed {}: {:?} touches {:?}", seed, a, b);
            }
        }
    }
}

#[test]
fn test_same_seed_same_board() {
    let factory = BoardFactory::default();
    let a = factory.generate(&mut SmallRng::seed_from_u64(42)).unwrap();
    let b = factory.generate(&mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_impossible_fleet_exhausts_the_budget() {
    // at most nine isolated cells fit on a 6x6 board
    let factory = BoardFactory::new(&[1; 20], 2000);
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        factory.try_generate(&mut rng),
        Err(GenerationError::AttemptsExhausted { attempts: 2000 })
    );
}

#[test]
fn test_zero_budget() {
    let factory = BoardFactory::new(&[3], 0);
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        factory.try_generate(&mut rng),
        Err(GenerationError::AttemptsExhausted { attempts: 0 })
    );
}

#[test]
fn test_empty_fleet_gives_an_empty_board() {
    let factory = BoardFactory::new(&[], 0);
    let board = factory.generate(&mut SmallRng::seed_from_u64(0)).unwrap();
    assert!(board.vessels().is_empty());
    assert!(board.is_in_play());
}

#[test]
fn test_zero_length_vessel_is_not_retried() {
    let factory = BoardFactory::new(&[0], 10);
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        factory.generate(&mut rng),
        Err(GenerationError::Placement(PlacementError::EmptyVessel))
    );
}
