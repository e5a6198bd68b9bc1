use log::debug;

use crate::board::{Board, CELLS};
use crate::cards::{default_hand, Card, Stats, MAX_STAT, MIN_STAT};
use crate::engine::apply::resolve_placement;
use crate::engine::events::LogEntry;
use crate::error::MoveError;
use crate::rules::Rules;
use crate::solver::{get_best_move, MoveSuggestion};
use crate::types::{Category, Dir, Side};

pub const OPPONENT_NAME: &str = "Opponent";

/// A running game from the near side's point of view: its hand, the shared
/// board, the active rules and the accumulated event log (newest first).
#[derive(Debug, Clone)]
pub struct Session {
    pub hand: Vec<Card>,
    pub board: Board,
    pub rules: Rules,
    logs: Vec<LogEntry>,
    opponents_placed: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(default_hand(), Rules::default())
    }
}

impl Session {
    #[inline]
    pub fn new(hand: Vec<Card>, rules: Rules) -> Self {
        Self {
            hand,
            board: Board::new(),
            rules,
            logs: Vec::new(),
            opponents_placed: 0,
        }
    }

    #[inline]
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    #[inline]
    pub fn is_card_used(&self, idx: usize) -> bool {
        self.hand.get(idx).is_some_and(|c| self.board.contains_id(&c.id))
    }

    /// First hand card not yet on the board.
    #[inline]
    pub fn first_unused(&self) -> Option<usize> {
        (0..self.hand.len()).find(|&i| !self.is_card_used(i))
    }

    pub fn is_card_selectable(&self, idx: usize) -> bool {
        if idx >= self.hand.len() || self.is_card_used(idx) {
            return false;
        }
        !self.rules.order || self.first_unused() == Some(idx)
    }

    fn check_cell(&self, cell: u8) -> Result<(), MoveError> {
        if cell as usize >= CELLS {
            return Err(MoveError::CellOutOfRange(cell));
        }
        if !self.board.is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }
        Ok(())
    }

    /// Place `card` at `cell`, resolve, keep the new board and prepend the events.
    fn place(&mut self, cell: u8, card: Card) -> Vec<LogEntry> {
        let mut staged = self.board.clone();
        staged.set(cell, Some(card));
        let res = resolve_placement(&staged, cell, &self.rules);
        self.board = res.board;
        let mut merged = res.logs.clone();
        merged.append(&mut self.logs);
        self.logs = merged;
        res.logs
    }

    /// Play a card from the near hand.
    pub fn play_from_hand(&mut self, card_idx: usize, cell: u8) -> Result<Vec<LogEntry>, MoveError> {
        self.check_cell(cell)?;
        let Some(card) = self.hand.get(card_idx) else {
            return Err(MoveError::CardOutOfRange(card_idx));
        };
        if self.board.contains_id(&card.id) {
            return Err(MoveError::CardAlreadyPlaced(card.id.clone()));
        }
        if !self.is_card_selectable(card_idx) {
            return Err(MoveError::OutOfOrder(card.id.clone()));
        }
        let card = card.with_side(Side::Near);
        debug!("near plays '{}' at cell {cell}", card.id);
        Ok(self.place(cell, card))
    }

    /// Record an opponent placement from its observed stats, clamped to 1..=10.
    pub fn place_opponent(&mut self, stats: Stats, category: Category, cell: u8) -> Result<Vec<LogEntry>, MoveError> {
        self.check_cell(cell)?;
        self.opponents_placed += 1;
        let card = Card::new(
            format!("enemy-{}", self.opponents_placed),
            OPPONENT_NAME,
            stats.clamped(),
            category,
            Side::Far,
        );
        debug!("far plays '{}' at cell {cell}", card.id);
        Ok(self.place(cell, card))
    }

    /// Best next move for the near hand; also logged as a hint.
    pub fn suggest(&mut self) -> Option<MoveSuggestion> {
        let best = get_best_move(&self.board, &self.hand, &self.rules, None)?;
        let name = &self.hand[best.card_idx].name;
        self.logs.insert(
            0,
            LogEntry::info(format!("Suggestion: play '{name}' at slot {}", best.slot_idx + 1)),
        );
        Some(best)
    }

    /// Edit one side of a hand card; the value is clamped to 1..=10.
    pub fn set_stat(&mut self, card_idx: usize, dir: Dir, value: u8) -> Result<(), MoveError> {
        let card = self.hand.get_mut(card_idx).ok_or(MoveError::CardOutOfRange(card_idx))?;
        let value = value.clamp(MIN_STAT, MAX_STAT);
        match dir {
            Dir::Up => card.stats.top = value,
            Dir::Right => card.stats.right = value,
            Dir::Down => card.stats.bottom = value,
            Dir::Left => card.stats.left = value,
        }
        Ok(())
    }

    pub fn set_category(&mut self, card_idx: usize, category: Category) -> Result<(), MoveError> {
        let card = self.hand.get_mut(card_idx).ok_or(MoveError::CardOutOfRange(card_idx))?;
        card.category = category;
        Ok(())
    }

    #[inline]
    pub fn toggle_rule(&mut self, name: &str) -> bool {
        self.rules.toggle(name)
    }

    pub fn reset_board(&mut self) {
        self.board.clear();
        self.logs.clear();
    }

    pub fn reset_all(&mut self) {
        self.reset_board();
        self.hand = default_hand();
        self.rules = Rules::default();
    }
}
