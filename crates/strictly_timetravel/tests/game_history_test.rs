//! Tests for the history-tracked game engine.

use strictly_timetravel::{
    Cell, GameHistory, GameStatus, HistoryError, HistoryInvariants, InvariantSet, MoveOrder,
    MoveOutcome, Player, Position,
};

fn play(game: &mut GameHistory, moves: &[usize]) {
    for &index in moves {
        let outcome = game.apply_move(index).expect("index on board");
        assert!(outcome.is_accepted(), "move {index} should be accepted");
    }
}

fn indices(cells: &[Position]) -> Vec<usize> {
    cells.iter().map(|p| p.to_index()).collect()
}

#[test]
fn test_x_wins_top_row() {
    let mut game = GameHistory::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(indices(&game.winning_cells()), vec![0, 1, 2]);
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_full_board_without_line_is_tied() {
    // X O X / X O O / O X X
    let mut game = GameHistory::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.current_step(), 9);
    assert_eq!(game.status(), GameStatus::Tied);
    assert!(game.winning_cells().is_empty());
    assert_eq!(game.apply_move(0), Ok(MoveOutcome::Ignored));
}

#[test]
fn test_time_travel_out_of_win_then_branch() {
    let mut game = GameHistory::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    game.jump_to(1).expect("step 1 exists");
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
    assert!(game.winning_cells().is_empty());
    assert_eq!(game.current_board().occupied_count(), 1);

    assert_eq!(game.apply_move(4), Ok(MoveOutcome::Accepted { step: 2 }));
    assert_eq!(game.snapshots().len(), 3);
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    assert_eq!(
        game.jump_to(5),
        Err(HistoryError::StepOutOfRange { step: 5, len: 3 })
    );
}

#[test]
fn test_reapplying_occupied_cell_changes_nothing() {
    let mut game = GameHistory::new();
    play(&mut game, &[4]);
    let before = game.clone();

    assert_eq!(game.apply_move(4), Ok(MoveOutcome::Ignored));
    assert_eq!(game.apply_move(4), Ok(MoveOutcome::Ignored));
    assert_eq!(game, before);
}

#[test]
fn test_step_counts_and_alternation() {
    let mut game = GameHistory::new();
    let moves = [4, 0, 8, 2, 6, 1];
    for (k, &index) in moves.iter().enumerate() {
        let expected = if k % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.next_player(), expected);
        game.apply_move(index).expect("index on board");
        assert_eq!(game.current_step(), k + 1);
        assert_eq!(
            game.current_board().get(Position::from_index(index).expect("on board")),
            Cell::Occupied(expected)
        );
    }
}

#[test]
fn test_jump_then_move_truncates_to_step_plus_two() {
    for s in 0..=4 {
        let mut game = GameHistory::new();
        play(&mut game, &[0, 1, 2, 4, 3]);

        game.jump_to(s).expect("step exists");
        let free = Position::valid_moves(game.current_board())[0];
        game.apply_move(free.to_index()).expect("index on board");

        assert_eq!(game.snapshots().len(), s + 2);
        assert!(game.jump_to(s + 2).is_err());
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_jump_does_not_touch_snapshots() {
    let mut game = GameHistory::new();
    play(&mut game, &[0, 4, 8]);
    let snapshots = game.snapshots().to_vec();

    for step in [0, 2, 3, 1] {
        game.jump_to(step).expect("step exists");
        assert_eq!(game.snapshots(), snapshots.as_slice());
        assert_eq!(game.current_board(), snapshots[step].board());
    }
}

#[test]
fn test_toggle_only_reorders_move_list() {
    let mut game = GameHistory::new();
    play(&mut game, &[0, 4, 1, 3, 2]);
    game.jump_to(3).expect("step 3 exists");

    let board = *game.current_board();
    let status = game.status();
    let winning = game.winning_cells();
    let ascending = game.move_list();

    game.toggle_move_order();
    assert_eq!(game.move_order(), MoveOrder::Descending);
    assert_eq!(*game.current_board(), board);
    assert_eq!(game.status(), status);
    assert_eq!(game.winning_cells(), winning);
    assert_eq!(game.current_step(), 3);

    let descending = game.move_list();
    assert_eq!(descending[0], ascending[0]);
    let mut tail = ascending[1..].to_vec();
    tail.reverse();
    assert_eq!(&descending[1..], tail.as_slice());

    game.toggle_move_order();
    assert_eq!(game.move_list(), ascending);
}

#[test]
fn test_move_list_labels() {
    let mut game = GameHistory::new();
    play(&mut game, &[4, 5]);
    let labels: Vec<String> = game.move_list().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start".to_string(),
            "Go to move 1 (1, 1)".to_string(),
            "Go to move 2 (1, 2)".to_string(),
        ]
    );
}

#[test]
fn test_contract_violations_leave_state_unchanged() {
    let mut game = GameHistory::new();
    play(&mut game, &[0, 4]);
    let before = game.clone();

    assert_eq!(game.apply_move(9), Err(HistoryError::CellOutOfRange(9)));
    assert_eq!(
        game.jump_to(3),
        Err(HistoryError::StepOutOfRange { step: 3, len: 3 })
    );
    assert_eq!(game, before);
}

#[test]
fn test_view_serializes_current_state() {
    let mut game = GameHistory::new();
    play(&mut game, &[0, 4, 1, 3, 2]);
    let view = game.view();

    assert_eq!(*view.status(), GameStatus::Won(Player::X));
    assert_eq!(*view.current_step(), 5);
    assert_eq!(view.moves().len(), 6);

    let json = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(json["current_step"], 5);
    assert_eq!(json["move_order"], "ascending");
}
