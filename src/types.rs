use serde::{Deserialize, Serialize};

/// Category tag used by the Ascension/Descension rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Category {
    #[default]
    None,
    Primal,
    Scion,
    Beastman,
    Garlean,
}

impl Category {
    /// Slot in a census array; `None` has no slot.
    #[inline]
    pub fn census_index(self) -> Option<usize> {
        match self {
            Category::None => None,
            Category::Primal => Some(0),
            Category::Scion => Some(1),
            Category::Beastman => Some(2),
            Category::Garlean => Some(3),
        }
    }
}

/// Controlling side of a card. `Near` is the advised player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Near,
    Far,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Neighbor visiting order used by the resolution engine.
    pub const RESOLVE_ORDER: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    #[inline]
    pub fn all() -> [Dir; 4] {
        [Dir::Up, Dir::Right, Dir::Down, Dir::Left]
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }

    /// Index into `[top, right, bottom, left]`.
    #[inline]
    pub fn side_index(self) -> usize {
        match self {
            Dir::Up => 0,
            Dir::Right => 1,
            Dir::Down => 2,
            Dir::Left => 3,
        }
    }
}

/// Board indexing helpers (3x3 board)
#[inline]
pub fn idx_to_rc(idx: u8) -> (u8, u8) {
    debug_assert!(idx < 9);
    (idx / 3, idx % 3)
}

#[inline]
pub fn rc_to_idx(r: u8, c: u8) -> Option<u8> {
    if r < 3 && c < 3 {
        Some(r * 3 + c)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for d in Dir::all() {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!((d.side_index() + 2) % 4, d.opposite().side_index());
        }
    }

    #[test]
    fn rc_round_trips_on_board() {
        for idx in 0u8..9 {
            let (r, c) = idx_to_rc(idx);
            assert_eq!(rc_to_idx(r, c), Some(idx));
        }
        assert_eq!(rc_to_idx(3, 0), None);
    }
}
