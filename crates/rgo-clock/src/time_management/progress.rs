//! Game progress estimation for time allocation

use super::constants::{
    GAME_LENGTH_BASE, GAME_LENGTH_PER_POINT, MIN_TURNS_BASE, MIN_TURNS_PER_POINT,
};

/// Estimate how many more moves we will have to play
///
/// Very crude: assumes a game fills about 60% of the board plus a fixed tail,
/// and never drops below a floor that grows with board size.
#[must_use]
pub fn estimate_turns_left(board_area: usize, num_stones_on_board: usize) -> f64 {
    let area = board_area as f64;
    let typical_game_length = GAME_LENGTH_PER_POINT * area + GAME_LENGTH_BASE;
    let min_turns_left = MIN_TURNS_BASE + MIN_TURNS_PER_POINT * area;
    (typical_game_length - num_stones_on_board as f64).max(min_turns_left)
}
