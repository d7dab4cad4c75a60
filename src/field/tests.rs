//! Field tests

use crate::util::Direction;

use super::*;


/// Build a board from symbol rows
///
fn board(rows: &[&str]) -> Board {
    let tiles = rows.iter().map(|r| r.chars().map(Tile::from_symbol).collect()).collect();
    Board::from_rows(tiles).expect("malformed test board")
}


#[test]
fn pan_consumes_egg() {
    let mut board = board(&["0.P"]);
    let eggs = board.eggs().collect();

    let res = resolve(&mut board, Direction::Right, 3, eggs, 0, |_| ());
    assert_eq!(res.score, -5);
    assert!(res.eggs.is_empty());
    assert!(res.finished);
    assert_eq!(board.to_string(), "..P");
}


#[test]
fn nest_reward_includes_budget() {
    let mut board = board(&["0.O"]);
    let eggs = board.eggs().collect();

    let res = resolve(&mut board, Direction::Right, 4, eggs, 0, |_| ());
    assert_eq!(res.score, 14);
    assert!(res.eggs.is_empty());
    assert!(res.finished);
    assert_eq!(board.to_string(), "..@");
}


#[test]
fn wall_stops_egg() {
    let mut board = board(&["0#."]);
    let eggs: Vec<_> = board.eggs().collect();

    let wave = advance_wave(&mut board, Direction::Right, eggs.clone(), 5);
    assert!(wave.rolling.is_empty());
    assert_eq!(wave.score, 0);
    assert_eq!(board.to_string(), "0#.");

    let res = resolve(&mut board, Direction::Right, 5, eggs, 0, |_| ());
    assert_eq!(res.eggs, vec![(0, 0)]);
    assert!(!res.finished);
}


#[test]
fn adjacent_eggs_keep_distinct() {
    let mut board = board(&["00."]);
    let eggs = board.eggs().collect();

    let res = resolve(&mut board, Direction::Right, 7, eggs, 0, |_| ());
    assert_eq!(board.to_string(), ".00");
    assert_eq!(res.eggs, vec![(0, 1), (0, 2)]);
}


#[test]
fn adjacent_eggs_keep_distinct_vertically() {
    let mut board = board(&["0", "0", "."]);
    let eggs = board.eggs().collect();

    let res = resolve(&mut board, Direction::Back, 7, eggs, 0, |_| ());
    assert_eq!(board.to_string(), ".\n0\n0");
    assert_eq!(res.eggs, vec![(1, 0), (2, 0)]);
}


#[test]
fn eggs_roll_until_blocked() {
    let mut board = board(&["#....0#"]);
    let eggs = board.eggs().collect();

    let res = resolve(&mut board, Direction::Left, 2, eggs, 0, |_| ());
    assert_eq!(board.to_string(), "#0....#");
    assert_eq!(res.eggs, vec![(0, 1)]);
}


#[test]
fn zero_budget_keeps_playing() {
    // moves_left - 1 is what ends the game, so a budget of 0 does not
    let mut board = board(&["0#"]);
    let eggs: Vec<_> = board.eggs().collect();

    let res = resolve(&mut board, Direction::Right, 0, eggs.clone(), 0, |_| ());
    assert!(!res.finished);

    let res = resolve(&mut board, Direction::Right, 1, eggs, 0, |_| ());
    assert!(res.finished);
}


#[test]
fn no_eggs_is_finished() {
    let mut board = board(&["..#"]);

    let res = resolve(&mut board, Direction::Left, 9, Vec::new(), 3, |_| ());
    assert!(res.finished);
    assert_eq!(res.score, 3);
}


#[quickcheck]
fn resolution_is_deterministic(original: Board, direction: Direction, moves_left: i8) -> bool {
    let moves_left = moves_left as i32;
    let mut first = original.clone();
    let mut second = original;

    let eggs: Vec<_> = first.eggs().collect();
    let lhs = resolve(&mut first, direction, moves_left, eggs.clone(), 0, |_| ());
    let rhs = resolve(&mut second, direction, moves_left, eggs, 0, |_| ());

    lhs == rhs && first == second
}


#[quickcheck]
fn waves_never_overlap(mut board: Board, direction: Direction) -> bool {
    let eggs = board.eggs().collect();

    let wave = advance_wave(&mut board, direction, eggs, 3);
    wave.rolling.iter().all(|pos| board[*pos] == Tile::Egg)
        && wave.rolling.iter().collect::<std::collections::HashSet<_>>().len() == wave.rolling.len()
}


#[quickcheck]
fn rescan_is_authoritative(mut board: Board, direction: Direction, moves_left: i8) -> bool {
    let moves_left = moves_left as i32;
    let eggs = board.eggs().collect();

    let res = resolve(&mut board, direction, moves_left, eggs, 0, |_| ());
    res.eggs == board.eggs().collect::<Vec<_>>()
        && res.finished == (moves_left - 1 == 0 || res.eggs.is_empty())
}


#[quickcheck]
fn eggs_are_never_created(original: Board, direction: Direction) -> bool {
    let mut board = original.clone();
    let eggs = board.eggs().collect();

    let res = resolve(&mut board, direction, 5, eggs, 0, |_| ());
    let before = original.eggs().count();
    let after = res.eggs.len();

    after <= before && (after < before || res.score == 0)
}


#[quickcheck]
fn obstacles_stay_put(original: Board, direction: Direction) -> bool {
    let mut board = original.clone();
    let eggs = board.eggs().collect();

    resolve(&mut board, direction, 5, eggs, 0, |_| ());
    original.positions().all(|pos| match original[pos] {
        Tile::Wall | Tile::Pan => board[pos] == original[pos],
        Tile::ClosedNest => board[pos] == Tile::ClosedNest,
        _ => true,
    })
}


#[quickcheck]
fn render_parse_roundtrip(board: Board) -> bool {
    let tiles = board
        .to_string()
        .lines()
        .map(|l| l.chars().map(Tile::from_symbol).collect())
        .collect();
    Board::from_rows(tiles).expect("rendered board failed to parse") == board
}


#[test]
fn ragged_rows_are_rejected() {
    let tiles = vec![
        vec![Tile::Floor, Tile::Floor],
        vec![Tile::Floor],
    ];
    assert_eq!(
        Board::from_rows(tiles),
        Err(ShapeError::RaggedRow {row: 1, expected: 2, found: 1}),
    );
    assert_eq!(Board::from_rows(Vec::new()), Err(ShapeError::Empty));
}
