use crate::board::Board;
use crate::types::Side;

/// Number of cells controlled by `side`. Scoring is by board ownership only.
#[inline]
pub fn score(board: &Board, side: Side) -> u8 {
    board.count_side(side)
}
