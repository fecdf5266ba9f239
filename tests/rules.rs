//! Rule scenarios and invariants exercised through the public API.

use connect_four::error::{ArgumentError, GameError, GridViolation};
use connect_four::game::{validate_rows, Cell, DropOutcome, Game, GameStatus, Grid, COLS, ROWS};
use proptest::prelude::*;

fn rows(text: [&str; ROWS]) -> Vec<Vec<Cell>> {
    text.iter()
        .map(|row| {
            row.chars()
                .map(|ch| match ch {
                    'R' => Cell::Red,
                    'Y' => Cell::Yellow,
                    _ => Cell::Empty,
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_resume_position_and_win_on_descending_diagonal() {
    // Red needs (2,0) to complete the line (2,0)-(3,1)-(4,2)-(5,3)
    let grid = Grid::from_rows(&rows([
        ".......", //
        ".......", //
        ".......", //
        "YR.....", //
        "YYR....", //
        "YYYRR.R", //
    ]))
    .unwrap();
    assert!(!grid.has_four_in_a_row(Cell::Red));

    let mut game = Game::with_grid(grid, Cell::Red).unwrap();
    assert_eq!(game.drop(0), Ok(DropOutcome::Placed { row: 2 }));
    assert_eq!(game.status(), GameStatus::Won(Cell::Red));
    assert_eq!(game.player_on_turn(), Cell::Red);
}

#[test]
fn test_win_on_ascending_diagonal() {
    let mut game = Game::new(Cell::Red).unwrap();
    // Red: (5,3) (4,4) (3,5) (2,6); Yellow fills underneath
    for col in [3, 4, 4, 5, 5, 6, 5, 6, 6, 0, 6] {
        game.drop(col).unwrap();
    }
    assert_eq!(game.winner(), Cell::Red);
    assert_eq!(game.cell(2, 6), Cell::Red);
}

#[test]
fn test_grid_errors_name_the_invariant() {
    let short = vec![vec![Cell::Empty; COLS]; ROWS + 1];
    assert_eq!(
        Grid::from_rows(&short),
        Err(GameError::InvalidArgument(ArgumentError::Grid(
            GridViolation::RowCount { found: ROWS + 1 }
        )))
    );

    let floating = rows([
        ".......", //
        ".......", //
        ".......", //
        "...Y...", //
        ".......", //
        "...R...", //
    ]);
    assert_eq!(
        validate_rows(&floating),
        Err(GridViolation::FloatingDisc { row: 3, col: 3 })
    );
    let err = Grid::from_rows(&floating).unwrap_err();
    assert!(err.to_string().contains("floating disc"));
}

#[test]
fn test_reset_from_any_state() {
    let mut game = Game::new(Cell::Yellow).unwrap();
    for col in [0, 1, 2, 3, 4, 5, 6, 0, 1] {
        game.drop(col).unwrap();
    }
    game.reset(Cell::Red).unwrap();

    assert_eq!(*game.grid(), Grid::new());
    assert_eq!(game.player_on_turn(), Cell::Red);
    assert!(!game.is_over());
    assert_eq!(game.winner(), Cell::Empty);
}

fn player() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Red), Just(Cell::Yellow)]
}

proptest! {
    #[test]
    fn prop_drops_keep_grid_valid(
        start in player(),
        columns in prop::collection::vec(-2isize..9, 0..80)
    ) {
        let mut game = Game::new(start).unwrap();

        for column in columns {
            if game.is_over() {
                break;
            }
            let before = game.clone();

            match game.drop(column) {
                Ok(DropOutcome::Placed { row }) => {
                    let col = column as usize;
                    prop_assert_eq!(game.cell(row, col), before.player_on_turn());
                    prop_assert_eq!(before.cell(row, col), Cell::Empty);
                    prop_assert!(row == ROWS - 1 || before.cell(row + 1, col) != Cell::Empty);
                    if !game.is_over() {
                        prop_assert_eq!(game.player_on_turn(), before.player_on_turn().other());
                    } else {
                        prop_assert_eq!(game.player_on_turn(), before.player_on_turn());
                    }
                }
                Ok(DropOutcome::ColumnFull) => {
                    prop_assert_eq!(&game, &before);
                }
                Err(err) => {
                    prop_assert!(!(0..COLS as isize).contains(&column));
                    prop_assert_eq!(
                        err,
                        GameError::InvalidArgument(ArgumentError::ColumnOutOfRange { column })
                    );
                    prop_assert_eq!(&game, &before);
                }
            }

            let grid = game.grid();
            prop_assert!(grid.validate().is_ok());
            prop_assert!(grid.count(Cell::Red).abs_diff(grid.count(Cell::Yellow)) <= 1);
            if let GameStatus::Won(winner) = game.status() {
                prop_assert!(grid.has_four_in_a_row(winner));
            }
        }
    }

    #[test]
    fn prop_reset_returns_to_initial_state(
        start in player(),
        restart in player(),
        columns in prop::collection::vec(0isize..7, 0..42)
    ) {
        let mut game = Game::new(start).unwrap();
        for column in columns {
            if game.is_over() {
                break;
            }
            game.drop(column).unwrap();
        }

        game.reset(restart).unwrap();
        prop_assert_eq!(game, Game::new(restart).unwrap());
    }
}
