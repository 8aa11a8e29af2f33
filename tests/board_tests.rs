use rand::SeedableRng;
use rand::rngs::StdRng;

use lifeboard::board::Board;
use lifeboard::board::BoardError;
use lifeboard::cell::Phase;

/// An all-dead board; density 0 means no draw can fall below it
fn dead_board(rows: usize, cols: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(0);

    Board::new(rows, cols, 0.0, &mut rng).expect("valid dimensions")
}

#[test]
fn block_is_a_still_life() {
    let mut board = dead_board(6, 6);

    for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
        board.set(row, col, true);
    }

    let before = board.to_string();
    board.step();

    assert_eq!(board.to_string(), before);
    assert_eq!(board.population(), 4);

    // every block cell survived, none was born
    for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
        assert_eq!(board.cell(row, col).phase(), Phase::Surviving);
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut board = dead_board(9, 9);

    for (row, col) in [(5, 4), (5, 5), (5, 6)] {
        board.set(row, col, true);
    }

    let horizontal = board.to_string();

    board.step();
    insta::assert_snapshot!(board.to_string().trim_end(), @r"
    .........
    .........
    .........
    .........
    .....#...
    .....#...
    .....#...
    .........
    .........
    ");

    // the ends died, the pivot survived, two cells were born
    assert_eq!(board.cell(4, 5).phase(), Phase::Newborn);
    assert_eq!(board.cell(6, 5).phase(), Phase::Newborn);
    assert_eq!(board.cell(5, 5).phase(), Phase::Surviving);
    assert_eq!(board.cell(5, 4).phase(), Phase::Dying);
    assert_eq!(board.cell(5, 6).phase(), Phase::Dying);

    board.step();
    assert_eq!(board.to_string(), horizontal);
}

#[test]
fn dead_board_stays_dead() {
    let mut board = dead_board(5, 5);

    for _ in 0..10 {
        board.step();
        assert_eq!(board.population(), 0);
    }

    assert_eq!(board.generation(), 10);
}

#[test]
fn all_alive_3x3_collapses_to_its_corners() {
    let mut board = dead_board(3, 3);

    for row in 0..3 {
        for col in 0..3 {
            board.set(row, col, true);
        }
    }

    board.step();

    // corners have 3 live neighbors and survive; edges (5) and the
    // center (8) die of overpopulation
    insta::assert_snapshot!(board.to_string().trim_end(), @r"
    #.#
    ...
    #.#
    ");

    assert_eq!(board.cell(0, 0).phase(), Phase::Surviving);
    assert_eq!(board.cell(0, 1).phase(), Phase::Dying);
    assert_eq!(board.cell(1, 1).phase(), Phase::Dying);
}

#[test]
fn lone_cell_on_a_1x1_board_dies() {
    let mut board = dead_board(1, 1);
    board.set(0, 0, true);

    board.step();

    let cell = board.cell(0, 0);
    assert!(!cell.alive);
    assert!(cell.was_alive);
}

#[test]
fn from_screen_rounds_both_axes_down() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(0);

    let board = Board::from_screen(1280, 1080, 15, 0.0, &mut rng)?;
    assert_eq!(board.rows(), 72); // 1080 / 15
    assert_eq!(board.cols(), 85); // floor(1280 / 15)

    let board = Board::from_screen(100, 100, 33, 0.0, &mut rng)?;
    assert_eq!((board.rows(), board.cols()), (3, 3));

    Ok(())
}

#[test]
fn direct_dimensions_are_preserved_exactly() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(0);

    let board = Board::new(7, 11, 0.5, &mut rng)?;

    assert_eq!((board.rows(), board.cols()), (7, 11));
    Ok(())
}

#[test]
fn zero_dimensions_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);

    assert!(matches!(
        Board::new(0, 5, 0.5, &mut rng),
        Err(BoardError::InvalidDimension { rows: 0, cols: 5 })
    ));
    assert!(matches!(
        Board::new(5, 0, 0.5, &mut rng),
        Err(BoardError::InvalidDimension { rows: 5, cols: 0 })
    ));

    // a zero cell size tiles nothing
    assert!(matches!(
        Board::from_screen(100, 100, 0, 0.5, &mut rng),
        Err(BoardError::InvalidDimension { .. })
    ));

    // as does a cell larger than the screen
    assert!(matches!(
        Board::from_screen(10, 10, 11, 0.5, &mut rng),
        Err(BoardError::InvalidDimension { .. })
    ));
}

#[test]
fn seeded_rng_reproduces_the_same_board() -> anyhow::Result<()> {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);

    let left = Board::new(20, 20, 0.5, &mut a)?;
    let right = Board::new(20, 20, 0.5, &mut b)?;

    assert_eq!(left.to_string(), right.to_string());
    Ok(())
}

#[test]
fn seeding_leaves_no_history() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(9);

    let board = Board::new(8, 8, 0.9, &mut rng)?;

    for row in 0..8 {
        for col in 0..8 {
            assert!(!board.cell(row, col).was_alive);
        }
    }

    Ok(())
}

#[test]
#[should_panic(expected = "row is out of bounds")]
fn querying_past_the_last_row_panics() {
    let board = dead_board(5, 5);

    board.cell(5, 0);
}

#[test]
#[should_panic(expected = "col is out of bounds")]
fn querying_past_the_last_col_panics() {
    let board = dead_board(5, 5);

    board.cell(0, 5);
}
