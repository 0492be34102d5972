use seabattle::{BitBoard, BitBoardError, Coordinate};

type BB = BitBoard<u16, 4>;

#[test]
fn test_insert_and_contains() {
    let mut bb = BB::new();
    assert!(bb.is_empty());

    assert_eq!(bb.insert(Coordinate::new(1, 1)), Ok(true));
    assert!(bb.contains(Coordinate::new(1, 1)));
    assert_eq!(bb.insert(Coordinate::new(1, 1)), Ok(false));
    assert_eq!(bb.count(), 1);

    bb.insert(Coordinate::new(3, 3)).unwrap();
    assert_eq!(bb.count(), 2);
    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_off_board_cells() {
    let mut bb = BB::new();
    assert_eq!(
        bb.insert(Coordinate::new(4, 0)),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
    assert_eq!(
        bb.insert(Coordinate::new(0, -1)),
        Err(BitBoardError::IndexOutOfBounds { row: 0, col: -1 })
    );
    assert!(!bb.contains(Coordinate::new(-1, -1)));
    assert!(bb.is_empty());
}

#[test]
fn test_collect_iter_and_union() {
    let a: BB = [Coordinate::new(0, 1), Coordinate::new(9, 9)]
        .into_iter()
        .collect();
    let b: BB = [Coordinate::new(3, 3)].into_iter().collect();
    let cells: Vec<_> = (a | b).iter().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 1), Coordinate::new(3, 3)]);
}
