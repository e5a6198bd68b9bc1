pub mod move_order;
pub mod suggest;

pub use move_order::{eligible_candidates, ordered_moves, Move};
pub use suggest::{get_best_move, get_best_move_for, MoveSuggestion};
