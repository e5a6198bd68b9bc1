use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::types::{rc_to_idx, Dir, Side};

pub const CELLS: usize = 9;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    // Cells 0..=8 laid out row-major (r*3 + c)
    cells: [Option<Card>; CELLS],
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, idx: u8) -> Option<&Card> {
        self.cells.get(idx as usize).and_then(Option::as_ref)
    }

    #[inline]
    pub fn set(&mut self, idx: u8, card: Option<Card>) {
        self.cells[idx as usize] = card;
    }

    /// Builder-style placement, mostly for fixtures.
    #[inline]
    #[must_use]
    pub fn with(mut self, idx: u8, card: Card) -> Self {
        self.set(idx, Some(card));
        self
    }

    /// Replace the controlling side of the card at `idx`. No-op on an empty cell.
    #[inline]
    pub fn set_side(&mut self, idx: u8, side: Side) {
        if let Some(card) = self.cells[idx as usize].as_mut() {
            if card.side != side {
                *card = card.with_side(side);
            }
        }
    }

    #[inline]
    pub fn side_at(&self, idx: u8) -> Option<Side> {
        self.get(idx).map(|c| c.side)
    }

    #[inline]
    pub fn is_empty(&self, idx: u8) -> bool {
        self.cells[idx as usize].is_none()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cells = Default::default();
    }

    #[inline]
    pub fn filled_count(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() as usize == CELLS
    }

    /// Empty cell indices in ascending order.
    pub fn empty_cells(&self) -> Vec<u8> {
        (0u8..CELLS as u8).filter(|&i| self.is_empty(i)).collect()
    }

    #[inline]
    pub fn count_side(&self, side: Side) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.side == side)
            .count() as u8
    }

    #[inline]
    pub fn contains_id(&self, id: &str) -> bool {
        self.cells.iter().flatten().any(|c| c.id == id)
    }

    /// Number of cards of each tagged category on the board, in
    /// `Category::census_index` order. Ownership does not matter.
    pub fn category_census(&self) -> [i16; 4] {
        let mut counts = [0i16; 4];
        for card in self.cells.iter().flatten() {
            if let Some(k) = card.category.census_index() {
                counts[k] += 1;
            }
        }
        counts
    }

    /// Deterministic list of neighbor indices for a cell in [Up, Right, Down, Left] order.
    /// Returns [Option<u8>; 4] where None means off-board.
    #[inline]
    pub fn neighbors(idx: u8) -> [Option<u8>; 4] {
        let (r, c) = crate::types::idx_to_rc(idx);
        let up = if r > 0 { rc_to_idx(r - 1, c) } else { None };
        let right = rc_to_idx(r, c + 1);
        let down = rc_to_idx(r + 1, c);
        let left = if c > 0 { rc_to_idx(r, c - 1) } else { None };
        [up, right, down, left]
    }

    #[inline]
    pub fn neighbor(idx: u8, dir: Dir) -> Option<u8> {
        Self::neighbors(idx)[dir.side_index()]
    }
}
