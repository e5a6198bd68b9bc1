#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod error;
pub mod rules;
pub mod cards;
pub mod board;
pub mod state;

pub mod engine {
    pub mod apply;
    pub mod capture;
    pub mod events;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::cards::{
    cards_from_json_str, default_hand, display_stat, load_cards_from_json, parse_stat, validate_card, Card,
    Stats,
};
pub use crate::engine::apply::{resolve_placement, Resolution};
pub use crate::engine::events::{LogEntry, LogKind};
pub use crate::engine::score::score;
pub use crate::error::{CardError, MoveError, UnknownRule};
pub use crate::rules::Rules;
pub use crate::solver::{get_best_move, get_best_move_for, MoveSuggestion};
pub use crate::state::Session;
pub use crate::types::{Category, Dir, Side};
