use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Card;
use crate::engine::apply::resolve_placement;
use crate::engine::score::score;
use crate::rules::Rules;
use crate::solver::move_order::ordered_moves;
use crate::types::Side;

/// Recommended placement for the acting side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSuggestion {
    /// Index into the candidate pool.
    pub card_idx: usize,
    pub slot_idx: u8,
    pub score: u8,
    /// Cells held by the acting side after the move.
    pub flipped_count: u8,
}

/// Best move for the near side. See [`get_best_move_for`].
#[inline]
pub fn get_best_move(
    board: &Board,
    candidates: &[Card],
    rules: &Rules,
    known_opponent: Option<&[Card]>,
) -> Option<MoveSuggestion> {
    get_best_move_for(board, candidates, rules, known_opponent, Side::Near)
}

/// Exhaustive one-ply search: every eligible (card, empty cell) pair is
/// simulated through the resolution engine with the card forced to `side`,
/// and scored by the number of cells `side` holds afterwards.
///
/// The first pair with the strictly greatest score wins, iterating candidates
/// in pool order and cells ascending. Returns `None` when there is no eligible
/// card or no empty cell.
///
/// `known_opponent` does not influence the choice; the search never looks at
/// the opponent's reply.
pub fn get_best_move_for(
    board: &Board,
    candidates: &[Card],
    rules: &Rules,
    known_opponent: Option<&[Card]>,
    side: Side,
) -> Option<MoveSuggestion> {
    let moves = ordered_moves(board, candidates, rules);
    debug!(
        "evaluating {} moves for {side:?} ({} known opponent cards)",
        moves.len(),
        known_opponent.map_or(0, <[Card]>::len)
    );

    let mut best: Option<MoveSuggestion> = None;
    for mv in moves {
        let mut sim = board.clone();
        sim.set(mv.cell, Some(candidates[mv.card_idx].with_side(side)));
        let res = resolve_placement(&sim, mv.cell, rules);
        let held = score(&res.board, side);
        trace!("card {} -> cell {}: {held}", mv.card_idx, mv.cell);

        let better = match best {
            Some(b) => held > b.score,
            None => true,
        };
        if better {
            best = Some(MoveSuggestion {
                card_idx: mv.card_idx,
                slot_idx: mv.cell,
                score: held,
                flipped_count: held,
            });
        }
    }
    best
}
