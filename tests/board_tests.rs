use seabattle::{Board, BoardError, Cell, Coord, Orientation, Ship, ShotResult, ViewMode};

fn ship(length: usize, x: i32, y: i32, orientation: Orientation) -> Ship {
    Ship::new(length, Coord::new(x, y), orientation)
}

#[test]
fn test_single_cell_board_end_to_end() {
    let mut board = Board::new(1);
    board.add_ship(ship(1, 0, 0, Orientation::Horizontal)).unwrap();

    assert_eq!(board.shot(Coord::new(0, 0)).unwrap(), ShotResult::Sunk);
    assert!(board.is_fleet_destroyed());
    assert_eq!(board.sunk_count(), 1);
    assert_eq!(
        board.shot(Coord::new(0, 0)).unwrap_err(),
        BoardError::AlreadyTargeted(Coord::new(0, 0))
    );
}

#[test]
fn test_add_ship_rejects_out_of_bounds() {
    let mut board = Board::new(6);
    for bad in [
        ship(3, 0, 4, Orientation::Horizontal),
        ship(2, 5, 0, Orientation::Vertical),
        ship(1, -1, 0, Orientation::Horizontal),
        ship(1, 0, 6, Orientation::Vertical),
    ] {
        assert_eq!(board.add_ship(bad), Err(BoardError::InvalidPlacement));
    }
    assert_eq!(board.ship_count(), 0);

    // flush against the far edge is fine
    board.add_ship(ship(3, 5, 3, Orientation::Horizontal)).unwrap();
    assert_eq!(board.ship_count(), 1);
}

#[test]
fn test_add_ship_rejects_ships_longer_than_the_board() {
    let mut board = Board::new(6);
    for length in [7, (1usize << 32) + 1, usize::MAX] {
        assert_eq!(
            board.add_ship(ship(length, 0, 0, Orientation::Horizontal)),
            Err(BoardError::InvalidPlacement)
        );
    }
    assert_eq!(board.ship_count(), 0);

    board.add_ship(ship(1, 0, 0, Orientation::Horizontal)).unwrap();
    assert_eq!(board.shot(Coord::new(0, 0)).unwrap(), ShotResult::Sunk);
    assert!(board.is_fleet_destroyed());
}

#[test]
fn test_add_ship_rejects_overlap_and_contact() {
    let mut board = Board::new(6);
    board.add_ship(ship(2, 2, 2, Orientation::Horizontal)).unwrap();

    // overlap, side contact, end contact, diagonal contact
    for bad in [
        ship(1, 2, 3, Orientation::Horizontal),
        ship(1, 1, 2, Orientation::Horizontal),
        ship(2, 2, 4, Orientation::Horizontal),
        ship(1, 3, 4, Orientation::Horizontal),
        ship(3, 0, 1, Orientation::Vertical),
    ] {
        assert_eq!(board.add_ship(bad), Err(BoardError::InvalidPlacement));
    }

    board.add_ship(ship(1, 4, 4, Orientation::Horizontal)).unwrap();
    board.add_ship(ship(2, 0, 0, Orientation::Horizontal)).unwrap();
    assert_eq!(board.ship_count(), 3);
}

#[test]
fn test_add_ship_rejects_zero_length() {
    let mut board = Board::new(6);
    assert_eq!(
        board.add_ship(ship(0, 1, 1, Orientation::Vertical)),
        Err(BoardError::InvalidPlacement)
    );
    assert!(board.view(ViewMode::Placement).rows().flatten().all(|&c| c == Cell::Empty));
}

#[test]
fn test_shot_miss_damage_sink() {
    let mut board = Board::new(6);
    board.add_ship(ship(2, 0, 0, Orientation::Horizontal)).unwrap();

    assert_eq!(board.shot(Coord::new(3, 3)).unwrap(), ShotResult::Miss);
    assert_eq!(board.cell(Coord::new(3, 3)), Some(Cell::Miss));

    assert_eq!(board.shot(Coord::new(0, 0)).unwrap(), ShotResult::Damaged);
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Hit));
    assert_eq!(board.ships()[0].remaining_hits(), 1);
    assert!(!board.is_fleet_destroyed());

    assert_eq!(board.shot(Coord::new(0, 1)).unwrap(), ShotResult::Sunk);
    assert_eq!(board.ships()[0].remaining_hits(), 0);
    assert!(board.is_fleet_destroyed());

    for m in [(1, 0), (1, 1), (1, 2), (0, 2)] {
        let c = Coord::from(m);
        assert_eq!(board.cell(c), Some(Cell::Miss), "margin {:?}", c);
        assert!(board.is_targeted(c));
    }
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Hit));
    assert_eq!(board.cell(Coord::new(2, 2)), Some(Cell::Empty));
    assert_eq!(
        board.shot(Coord::new(1, 1)).unwrap_err(),
        BoardError::AlreadyTargeted(Coord::new(1, 1))
    );
}

#[test]
fn test_sink_leaves_other_ships_untouched() {
    let mut board = Board::new(5);
    board.add_ship(ship(1, 0, 0, Orientation::Horizontal)).unwrap();
    board.add_ship(ship(2, 0, 2, Orientation::Vertical)).unwrap();

    assert_eq!(board.shot(Coord::new(1, 2)).unwrap(), ShotResult::Damaged);
    assert_eq!(board.shot(Coord::new(0, 0)).unwrap(), ShotResult::Sunk);

    assert_eq!(board.cell(Coord::new(0, 1)), Some(Cell::Miss));
    assert_eq!(board.cell(Coord::new(1, 1)), Some(Cell::Miss));
    assert_eq!(board.cell(Coord::new(0, 2)), Some(Cell::Ship));
    assert_eq!(board.cell(Coord::new(1, 2)), Some(Cell::Hit));
    assert_eq!(board.sunk_count(), 1);
    assert!(!board.is_fleet_destroyed());

    assert_eq!(board.shot(Coord::new(0, 2)).unwrap(), ShotResult::Sunk);
    assert!(board.is_fleet_destroyed());
}

#[test]
fn test_shot_out_of_bounds() {
    let mut board = Board::new(6);
    for c in [Coord::new(-1, 0), Coord::new(0, 6), Coord::new(6, 6)] {
        assert_eq!(board.shot(c).unwrap_err(), BoardError::OutOfBounds(c));
    }
    assert_eq!(board.untargeted_count(), 36);
}

#[test]
fn test_rejected_shot_leaves_board_unchanged() {
    let mut board = Board::new(6);
    board.add_ship(ship(3, 1, 1, Orientation::Vertical)).unwrap();
    board.shot(Coord::new(2, 1)).unwrap();

    let before = board.view(ViewMode::Revealed);
    let untargeted = board.untargeted_count();
    assert!(board.shot(Coord::new(2, 1)).is_err());
    assert_eq!(board.view(ViewMode::Revealed), before);
    assert_eq!(board.untargeted_count(), untargeted);
    assert_eq!(board.ships()[0].remaining_hits(), 2);
}

#[test]
fn test_margin_is_clipped() {
    let board = Board::new(6);
    let corner = ship(1, 0, 0, Orientation::Horizontal);
    assert_eq!(board.margin(&corner).len(), 3);

    let middle = ship(3, 2, 1, Orientation::Horizontal);
    let margin = board.margin(&middle);
    assert_eq!(margin.len(), 12);
    assert!(margin.iter().all(|c| !middle.contains(*c)));
}

#[test]
fn test_commit_setup_clears_targets_but_keeps_margins() {
    let mut board = Board::new(6);
    board.add_ship(ship(1, 0, 0, Orientation::Horizontal)).unwrap();
    board.shot(Coord::new(4, 4)).unwrap();
    assert!(board.is_targeted(Coord::new(4, 4)));

    board.commit_setup();
    assert!(!board.is_targeted(Coord::new(4, 4)));
    assert_eq!(board.untargeted_count(), 36);
    assert_eq!(
        board.add_ship(ship(1, 1, 1, Orientation::Horizontal)),
        Err(BoardError::InvalidPlacement)
    );
}

#[test]
fn test_views() {
    let mut board = Board::new(4);
    board.add_ship(ship(2, 0, 0, Orientation::Vertical)).unwrap();
    board.shot(Coord::new(0, 0)).unwrap();
    board.shot(Coord::new(3, 3)).unwrap();

    let hidden = board.view(ViewMode::Hidden);
    assert_eq!(hidden.get(0, 0), Some(Cell::Hit));
    assert_eq!(hidden.get(1, 0), Some(Cell::Empty));
    assert_eq!(hidden.get(3, 3), Some(Cell::Miss));

    let revealed = board.view(ViewMode::Revealed);
    assert_eq!(revealed.get(1, 0), Some(Cell::Ship));
    assert_eq!(revealed.get(2, 1), Some(Cell::Empty));
    assert_eq!(revealed.get(4, 0), None);

    let placement = board.view(ViewMode::Placement);
    assert_eq!(placement.get(2, 1), Some(Cell::Margin));
    assert_eq!(placement.get(0, 2), Some(Cell::Empty));
    assert_eq!(placement.rows().count(), 4);
}

#[test]
fn test_hidden_flag() {
    let mut board = Board::new(6);
    assert!(!board.is_hidden());
    board.set_hidden(true);
    assert!(board.is_hidden());
    assert_eq!(board.size(), 6);
}
