use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Card;
use crate::rules::Rules;

/// A (candidate card, target cell) pair. `card_idx` indexes the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card_idx: usize,
    pub cell: u8, // 0..=8
}

/// Pool indices of cards still playable, in pool order. Cards already on the
/// board are matched by id. Under the Order rule only the first unused card
/// is eligible.
pub fn eligible_candidates(board: &Board, pool: &[Card], rules: &Rules) -> Vec<usize> {
    let mut unused = pool
        .iter()
        .enumerate()
        .filter(|(_, c)| !board.contains_id(&c.id))
        .map(|(i, _)| i);

    if rules.order {
        unused.next().into_iter().collect()
    } else {
        unused.collect()
    }
}

/// Deterministic move ordering:
/// - Candidate pool order first
/// - Then ascending cell index
pub fn ordered_moves(board: &Board, pool: &[Card], rules: &Rules) -> Vec<Move> {
    let cards = eligible_candidates(board, pool, rules);
    let cells = board.empty_cells();

    let mut moves = Vec::with_capacity(cards.len() * cells.len());
    for &card_idx in &cards {
        for &cell in &cells {
            moves.push(Move { card_idx, cell });
        }
    }
    moves
}
