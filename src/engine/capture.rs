use crate::board::Board;
use crate::cards::{Card, MAX_STAT, MIN_STAT};
use crate::rules::Rules;

/// Per-category card counts, taken once per resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Census([i16; 4]);

impl Census {
    #[inline]
    pub fn of(board: &Board) -> Self {
        Self(board.category_census())
    }

    #[inline]
    pub fn count(&self, card: &Card) -> i16 {
        card.category.census_index().map_or(0, |k| self.0[k])
    }
}

#[inline]
fn clamp_side(v: i16) -> u8 {
    v.clamp(i16::from(MIN_STAT), i16::from(MAX_STAT)) as u8
}

/// Adjust all four sides of a card for Ascension/Descension, clamped to 1..=10
/// whichever rules are active.
/// Sides order: [top, right, bottom, left]
pub fn effective_sides(card: &Card, census: &Census, rules: &Rules) -> [u8; 4] {
    let mut delta = 0i16;
    if rules.uses_category_census() {
        let count = census.count(card);
        if rules.ascension {
            delta += count;
        }
        if rules.descension {
            delta -= count;
        }
    }
    card.sides().map(|s| clamp_side(i16::from(s) + delta))
}

/// Capture test between two facing values. Ties never capture.
#[inline]
pub fn beats(attack: u8, defend: u8, rules: &Rules) -> bool {
    if rules.fallen_ace {
        if !rules.reverse && attack == MIN_STAT && defend == MAX_STAT {
            return true;
        }
        if rules.reverse && attack == MAX_STAT && defend == MIN_STAT {
            return true;
        }
    }
    if rules.reverse {
        attack < defend
    } else {
        attack > defend
    }
}
