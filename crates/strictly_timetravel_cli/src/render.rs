//! Text rendering of the engine's views.

use crate::config::SessionConfig;
use strictly_timetravel::{Cell, GameView, Position};

/// Renders the board, emphasizing the winning line when configured to.
pub fn render_board(view: &GameView, config: &SessionConfig) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    let pos = Position::ALL[index];
                    let mark = match view.board().get(pos) {
                        Cell::Empty => index.to_string(),
                        Cell::Occupied(player) => player.to_string(),
                    };
                    if *config.highlight_winner() && view.winning_cells().contains(&pos) {
                        format!("[{}]", mark)
                    } else {
                        mark
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n-+-+-\n")
}

/// Renders the move list, one numbered entry per line, `>` on the current one.
pub fn render_moves(view: &GameView) -> String {
    view.moves()
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { '>' } else { ' ' };
            format!("{} {}. {}", marker, entry.step, entry)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the whole view: board, status line and (optionally) move list.
pub fn render(view: &GameView, config: &SessionConfig) -> String {
    let mut out = format!("{}\n\n{}", render_board(view, config), view.status());
    if *config.show_move_list() {
        out.push_str(&format!("\n\nMoves ({}):\n{}", view.move_order(), render_moves(view)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_timetravel::{GameHistory, MoveOrder};

    fn won_game() -> GameHistory {
        let mut game = GameHistory::new();
        for index in [0, 4, 1, 3, 2] {
            game.apply_move(index).expect("index on board");
        }
        game
    }

    #[test]
    fn test_empty_board_shows_indices() {
        let view = GameHistory::new().view();
        assert_eq!(
            render_board(&view, &SessionConfig::default()),
            "0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8"
        );
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let view = won_game().view();
        assert_eq!(
            render_board(&view, &SessionConfig::default()),
            "[X]|[X]|[X]\n-+-+-\nO|O|5\n-+-+-\n6|7|8"
        );
    }

    #[test]
    fn test_highlight_can_be_disabled() {
        let view = won_game().view();
        let config = SessionConfig::new(MoveOrder::Ascending, false, true);
        assert_eq!(
            render_board(&view, &config),
            "X|X|X\n-+-+-\nO|O|5\n-+-+-\n6|7|8"
        );
    }

    #[test]
    fn test_move_list_marks_current_step() {
        let mut game = won_game();
        game.jump_to(2).expect("step 2 exists");
        game.toggle_move_order();
        let moves = render_moves(&game.view());
        let lines: Vec<&str> = moves.lines().collect();
        assert_eq!(lines[0], "  0. Go to game start");
        assert_eq!(lines[1], "  5. Go to move 5 (0, 2)");
        assert_eq!(lines[4], "> 2. Go to move 2 (1, 1)");
    }

    #[test]
    fn test_render_includes_status() {
        let text = render(&won_game().view(), &SessionConfig::default());
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Moves (ascending):"));

        let quiet = SessionConfig::new(MoveOrder::Ascending, true, false);
        assert!(!render(&won_game().view(), &quiet).contains("Moves"));
    }
}
