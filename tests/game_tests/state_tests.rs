//! Tests for GameState
//!
//! These tests verify:
//! - Loading and lifecycle transitions
//! - Movement legality and cell recoloring
//! - Possible-moves soundness over every reachable position
//! - Fog-of-war snapshots and discovery monotonicity
//! - Win detection

use std::collections::{HashSet, VecDeque};

use fogmaze::game::{
    Cell, Direction, GameState, Lifecycle, MoveOutcome, Position, MAX_COLS, MAX_ROWS,
};
use fogmaze::MazeMap;

// =============================================================================
// Fixtures
// =============================================================================

/// Player at (1,1), exit at (1,2), walls elsewhere
const TINY: &str = "0 0 0\n0 2 3\n0 0 0";

/// A small loop with the exit in the far corner
const LOOP: &str = "\
0 0 0 0 0
0 2 1 1 0
0 1 0 1 0
0 1 1 3 0
0 0 0 0 0";

/// A single corridor
const CORRIDOR: &str = "2 1 1 1 1 1 3";

/// A wider maze with dead ends and open areas
const WIDE: &str = "\
2 1 1 0 1 1 1 1
0 0 1 0 1 0 0 1
1 1 1 1 1 0 1 1
1 0 0 0 1 0 1 0
1 1 1 0 1 1 1 3";

fn state_for(text: &str) -> GameState {
    GameState::from_map(&MazeMap::parse(text).unwrap())
}

fn player_cells(state: &GameState) -> usize {
    state
        .grid()
        .iter()
        .flatten()
        .filter(|&&c| c == Cell::Player)
        .count()
}

/// Every state reachable by moves from the start, without passing the exit
fn reachable_states(text: &str) -> Vec<GameState> {
    let initial = state_for(text);
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([initial]);
    let mut states = Vec::new();

    while let Some(state) = queue.pop_front() {
        if !seen.insert(state.player()) {
            continue;
        }
        for direction in Direction::ALL {
            let mut next = state.clone();
            if next.attempt_move(direction) == MoveOutcome::Moved {
                queue.push_back(next);
            }
        }
        states.push(state);
    }
    states
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_new_state_is_unstarted() {
    let state = GameState::new();

    assert_eq!(state.lifecycle(), Lifecycle::Unstarted);
    assert!(!state.is_initialized());
    assert!(!state.is_over());
    assert_eq!(state.rows(), 0);
    assert!(state.possible_moves().is_empty());
}

#[test]
fn test_unstarted_state_cannot_move() {
    let mut state = GameState::new();
    for direction in Direction::ALL {
        assert_eq!(state.attempt_move(direction), MoveOutcome::Blocked);
    }
}

#[test]
fn test_load_places_player_on_start() {
    let state = state_for(LOOP);

    assert_eq!(state.lifecycle(), Lifecycle::Active);
    assert_eq!(state.player(), Position::new(1, 1));
    assert_eq!(state.start(), Position::new(1, 1));
    assert_eq!(state.exit(), Position::new(3, 3));
    assert_eq!(state.cell(state.player()), Cell::Player);
    assert_eq!(player_cells(&state), 1);
}

#[test]
fn test_reload_discards_progress() {
    let map = MazeMap::parse(LOOP).unwrap();
    let fresh = GameState::from_map(&map);

    let mut state = fresh.clone();
    assert!(state.attempt_move(Direction::Right).moved());
    assert!(state.attempt_move(Direction::Right).moved());
    assert_ne!(state, fresh);

    state.load(&map);
    assert_eq!(state, fresh);
}

#[test]
fn test_reload_after_win_clears_over() {
    let map = MazeMap::parse(TINY).unwrap();
    let mut state = GameState::from_map(&map);
    assert_eq!(state.attempt_move(Direction::Right), MoveOutcome::Escaped);
    assert_eq!(state.lifecycle(), Lifecycle::Over);

    state.load(&map);
    assert_eq!(state.lifecycle(), Lifecycle::Active);
    assert_eq!(state, GameState::from_map(&map));
}

// =============================================================================
// Movement Tests
// =============================================================================

#[test]
fn test_tiny_map_only_right_is_possible() {
    let state = state_for(TINY);
    assert_eq!(state.possible_moves(), vec![Direction::Right]);
}

#[test]
fn test_possible_moves_in_wire_order() {
    let state = state_for("1 1 1\n1 2 1\n1 1 3");
    assert_eq!(state.possible_moves(), Direction::ALL.to_vec());
}

#[test]
fn test_move_recolors_start_and_path() {
    let mut state = state_for(LOOP);

    assert_eq!(state.attempt_move(Direction::Right), MoveOutcome::Moved);
    assert_eq!(state.cell(Position::new(1, 1)), Cell::Start);
    assert_eq!(state.cell(Position::new(1, 2)), Cell::Player);

    assert_eq!(state.attempt_move(Direction::Right), MoveOutcome::Moved);
    assert_eq!(state.cell(Position::new(1, 2)), Cell::Path);
    assert_eq!(state.cell(Position::new(1, 3)), Cell::Player);
    assert_eq!(player_cells(&state), 1);
}

#[test]
fn test_returning_to_start_then_leaving_restores_start_marker() {
    let mut state = state_for(LOOP);

    assert!(state.attempt_move(Direction::Down).moved());
    assert!(state.attempt_move(Direction::Up).moved());
    assert_eq!(state.cell(Position::new(1, 1)), Cell::Player);
    assert_eq!(state.cell(Position::new(2, 1)), Cell::Path);

    assert!(state.attempt_move(Direction::Right).moved());
    assert_eq!(state.cell(Position::new(1, 1)), Cell::Start);
}

#[test]
fn test_blocked_by_wall_leaves_state_unchanged() {
    let mut state = state_for(LOOP);
    let before = state.clone();

    assert_eq!(state.attempt_move(Direction::Up), MoveOutcome::Blocked);
    assert_eq!(state.attempt_move(Direction::Left), MoveOutcome::Blocked);
    assert_eq!(state, before);
}

#[test]
fn test_blocked_by_extent_leaves_state_unchanged() {
    let mut state = state_for(CORRIDOR);
    let before = state.clone();

    assert_eq!(state.attempt_move(Direction::Up), MoveOutcome::Blocked);
    assert_eq!(state.attempt_move(Direction::Down), MoveOutcome::Blocked);
    assert_eq!(state.attempt_move(Direction::Left), MoveOutcome::Blocked);
    assert_eq!(state, before);
}

#[test]
fn test_padding_beyond_extent_is_never_entered() {
    // Right edge of a 2-column map: column 2 is padding
    let mut state = state_for("1 2\n3 1");
    let before = state.clone();

    assert_eq!(state.attempt_move(Direction::Right), MoveOutcome::Blocked);
    assert_eq!(state, before);
}

#[test]
fn test_movement_legality_everywhere() {
    for text in [TINY, LOOP, CORRIDOR, WIDE] {
        for state in reachable_states(text) {
            for direction in Direction::ALL {
                let target = state
                    .player()
                    .step(direction, state.rows(), state.cols());
                let legal = target
                    .map(|p| !matches!(state.cell(p), Cell::Wall | Cell::Padding))
                    .unwrap_or(false);

                let mut attempt = state.clone();
                let outcome = attempt.attempt_move(direction);

                assert_eq!(outcome.moved(), legal, "{direction} from {:?}", state.player());
                if !legal {
                    assert_eq!(attempt, state);
                }
            }
        }
    }
}

#[test]
fn test_possible_moves_soundness() {
    for text in [TINY, LOOP, CORRIDOR, WIDE] {
        for state in reachable_states(text) {
            let possible = state.possible_moves();
            for direction in Direction::ALL {
                let mut attempt = state.clone();
                assert_eq!(
                    possible.contains(&direction),
                    attempt.attempt_move(direction).moved(),
                    "{direction} from {:?}",
                    state.player()
                );
            }
        }
    }
}

#[test]
fn test_exactly_one_player_cell_while_active() {
    for state in reachable_states(WIDE) {
        assert_eq!(player_cells(&state), 1);
        assert_eq!(state.cell(state.player()), Cell::Player);
    }
}

#[test]
fn test_start_and_exit_never_move() {
    for state in reachable_states(WIDE) {
        assert_eq!(state.start(), Position::new(0, 0));
        assert_eq!(state.exit(), Position::new(4, 7));
    }
}

// =============================================================================
// Win Tests
// =============================================================================

#[test]
fn test_entering_exit_ends_game() {
    let mut state = state_for(TINY);

    assert_eq!(state.attempt_move(Direction::Right), MoveOutcome::Escaped);
    assert!(state.is_over());
    assert_eq!(state.lifecycle(), Lifecycle::Over);
    assert_eq!(state.player(), Position::new(1, 2));
    assert_eq!(state.cell(Position::new(1, 2)), Cell::Player);
}

#[test]
fn test_over_state_is_immutable() {
    let mut state = state_for(TINY);
    state.attempt_move(Direction::Right);
    let finished = state.clone();

    for direction in Direction::ALL {
        assert_eq!(state.attempt_move(direction), MoveOutcome::Blocked);
    }
    assert!(state.possible_moves().is_empty());
    assert_eq!(state, finished);
}

#[test]
fn test_revealed_board_shows_exit_not_player() {
    let mut state = state_for(LOOP);
    for direction in [Direction::Right, Direction::Right, Direction::Down] {
        assert_eq!(state.attempt_move(direction), MoveOutcome::Moved);
    }
    assert_eq!(state.attempt_move(Direction::Down), MoveOutcome::Escaped);

    let board = state.revealed_board();
    assert_eq!(board[3][3], Cell::Exit.code());
    assert!(board.iter().flatten().all(|&c| c != Cell::Player.code()));
    assert!(board.iter().flatten().all(|&c| c != Cell::Fog.code()));
    assert_eq!(board[1][1], Cell::Start.code());
    assert_eq!(board[1][2], Cell::Path.code());
}

// =============================================================================
// Fog-of-War Tests
// =============================================================================

#[test]
fn test_initial_snapshot_hides_distant_cells() {
    let state = state_for(CORRIDOR);
    let board = state.snapshot_for_client();

    assert_eq!(board[0][0], Cell::Player.code());
    assert_eq!(board[0][1], Cell::Path.code());
    for col in 2..7 {
        assert_eq!(board[0][col], Cell::Fog.code(), "col {col}");
    }
}

#[test]
fn test_snapshot_keeps_padding_outside_extent() {
    let state = state_for(CORRIDOR);
    let board = state.snapshot_for_client();

    for row in 0..MAX_ROWS {
        for col in 0..MAX_COLS {
            if row > 0 || col >= 7 {
                assert_eq!(board[row][col], Cell::Padding.code());
            }
        }
    }
}

#[test]
fn test_visited_cells_stay_revealed() {
    let mut state = state_for(CORRIDOR);
    for _ in 0..3 {
        assert!(state.attempt_move(Direction::Right).moved());
    }
    let board = state.snapshot_for_client();

    // Behind the player, farther than the radius, but discovered
    assert_eq!(board[0][0], Cell::Start.code());
    assert_eq!(board[0][1], Cell::Path.code());
    assert_eq!(board[0][3], Cell::Player.code());
    assert_eq!(board[0][4], Cell::Path.code());
    assert_eq!(board[0][5], Cell::Fog.code());
    assert_eq!(board[0][6], Cell::Fog.code());
}

#[test]
fn test_discovery_includes_diagonals() {
    let state = state_for(LOOP);

    for row in 0..=2 {
        for col in 0..=2 {
            assert!(state.is_discovered(Position::new(row, col)));
        }
    }
    assert!(!state.is_discovered(Position::new(3, 3)));
    assert!(!state.is_discovered(Position::new(0, 3)));
}

#[test]
fn test_reset_discovery_forgets_the_trail() {
    let mut state = state_for(CORRIDOR);
    for _ in 0..4 {
        state.attempt_move(Direction::Right);
    }
    assert!(state.is_discovered(Position::new(0, 0)));

    state.reset_discovery();
    assert!(!state.is_discovered(Position::new(0, 0)));
    assert!(state.is_discovered(Position::new(0, 3)));
    assert!(state.is_discovered(Position::new(0, 5)));
}

#[test]
fn test_fog_monotonicity_over_walk() {
    let mut state = state_for(WIDE);
    let walk = [
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::Left,
        Direction::Left,
        Direction::Down,
        Direction::Down,
        Direction::Up,
        Direction::Up,
        Direction::Right,
        Direction::Right,
        Direction::Right,
        Direction::Right,
        Direction::Up,
        Direction::Up,
        Direction::Right,
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::Left,
        Direction::Down,
    ];

    let mut revealed: HashSet<(usize, usize)> = HashSet::new();
    for direction in walk {
        state.attempt_move(direction);
        let board = state.snapshot_for_client();

        for &(row, col) in &revealed {
            assert_ne!(
                board[row][col],
                Cell::Fog.code(),
                "({row}, {col}) re-hidden after moving {direction}"
            );
        }
        for row in 0..state.rows() {
            for col in 0..state.cols() {
                if board[row][col] != Cell::Fog.code() {
                    revealed.insert((row, col));
                }
            }
        }
    }
    assert!(revealed.len() > 20);
}
