use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::types::{Category, Side};

pub const MIN_STAT: u8 = 1;
/// The "Ace" rank.
pub const MAX_STAT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub top: u8,
    pub right: u8,
    pub bottom: u8,
    pub left: u8,
}

impl Stats {
    #[inline]
    pub const fn new(top: u8, right: u8, bottom: u8, left: u8) -> Self {
        Self { top, right, bottom, left }
    }

    /// Copy with every side clamped to 1..=10.
    #[inline]
    #[must_use]
    pub fn clamped(&self) -> Self {
        let c = |v: u8| v.clamp(MIN_STAT, MAX_STAT);
        Self::new(c(self.top), c(self.right), c(self.bottom), c(self.left))
    }

    /// Sides in `[top, right, bottom, left]` order.
    #[inline]
    pub fn sides(&self) -> [u8; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    #[inline]
    pub fn in_range(&self) -> bool {
        self.sides().iter().all(|v| (MIN_STAT..=MAX_STAT).contains(v))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub stats: Stats,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub side: Side,
}

impl Card {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stats: Stats, category: Category, side: Side) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats,
            category,
            side,
        }
    }

    #[inline]
    pub fn sides(&self) -> [u8; 4] {
        self.stats.sides()
    }

    /// Copy of this card with the controlling side replaced.
    #[inline]
    #[must_use]
    pub fn with_side(&self, side: Side) -> Self {
        Self {
            side,
            ..self.clone()
        }
    }
}

/// Parse a user-entered stat: `A` is the Ace (10), numbers are clamped to
/// 1..=10 and anything else reads as 1.
pub fn parse_stat(val: &str) -> u8 {
    let val = val.trim();
    if val.eq_ignore_ascii_case("a") {
        return MAX_STAT;
    }
    match val.parse::<i64>() {
        Ok(n) => n.clamp(i64::from(MIN_STAT), i64::from(MAX_STAT)) as u8,
        Err(_) => MIN_STAT,
    }
}

#[inline]
pub fn display_stat(val: u8) -> String {
    if val == MAX_STAT {
        "A".to_string()
    } else {
        val.to_string()
    }
}

/// The five starter cards every new session begins with.
pub fn default_hand() -> Vec<Card> {
    let mk = |id: &str, name: &str, t, r, b, l| {
        Card::new(id, name, Stats::new(t, r, b, l), Category::None, Side::Near)
    };
    vec![
        mk("c1", "A", 1, 2, 3, 4),
        mk("c2", "B", 5, 5, 5, 5),
        mk("c3", "C", 8, 8, 2, 3),
        mk("c4", "D", 1, 9, 9, 1),
        mk("c5", "E", 10, 10, 1, 1),
    ]
}

/// Reject a card whose sides fall outside 1..=10.
pub fn validate_card(card: &Card) -> Result<(), CardError> {
    if !card.stats.in_range() {
        return Err(CardError::InvalidStats {
            id: card.id.clone(),
            name: card.name.clone(),
        });
    }
    Ok(())
}

/// Parse and validate a deck from a JSON array of cards.
pub fn cards_from_json_str(data: &str) -> Result<Vec<Card>, CardError> {
    let raw: Vec<Card> = serde_json::from_str(data)?;
    if raw.is_empty() {
        return Err(CardError::Empty);
    }

    {
        let mut seen: HashSet<&str> = HashSet::with_capacity(raw.len());
        for c in &raw {
            validate_card(c)?;
            if !seen.insert(c.id.as_str()) {
                return Err(CardError::DuplicateId(c.id.clone()));
            }
        }
    }
    Ok(raw)
}

/// Load a deck from a JSON file.
pub fn load_cards_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Card>, CardError> {
    let data = fs::read_to_string(path.as_ref())?;
    cards_from_json_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stat_handles_ace_and_clamps() {
        assert_eq!(parse_stat("A"), 10);
        assert_eq!(parse_stat("a"), 10);
        assert_eq!(parse_stat("7"), 7);
        assert_eq!(parse_stat("0"), 1);
        assert_eq!(parse_stat("15"), 10);
        assert_eq!(parse_stat("x"), 1);
        assert_eq!(parse_stat(""), 1);
    }

    #[test]
    fn display_stat_shows_ace() {
        assert_eq!(display_stat(10), "A");
        assert_eq!(display_stat(4), "4");
    }

    #[test]
    fn with_side_leaves_original_untouched() {
        let c = default_hand().remove(0);
        let f = c.with_side(Side::Far);
        assert_eq!(c.side, Side::Near);
        assert_eq!(f.side, Side::Far);
        assert_eq!(f.id, c.id);
        assert_eq!(f.stats, c.stats);
    }

    #[test]
    fn rejects_out_of_range_and_duplicates() {
        let bad = r#"[{"id":"x","name":"X","stats":{"top":0,"right":1,"bottom":1,"left":1}}]"#;
        assert!(matches!(cards_from_json_str(bad), Err(CardError::InvalidStats { .. })));

        let dup = r#"[
            {"id":"x","name":"X","stats":{"top":1,"right":1,"bottom":1,"left":1}},
            {"id":"x","name":"Y","stats":{"top":2,"right":2,"bottom":2,"left":2}}
        ]"#;
        assert!(matches!(cards_from_json_str(dup), Err(CardError::DuplicateId(_))));
        assert!(matches!(cards_from_json_str("[]"), Err(CardError::Empty)));
    }

    #[test]
    fn category_and_side_default_when_missing() {
        let one = r#"[{"id":"x","name":"X","stats":{"top":1,"right":2,"bottom":3,"left":4},"category":"Scion"}]"#;
        let cards = cards_from_json_str(one).unwrap();
        assert_eq!(cards[0].category, Category::Scion);
        assert_eq!(cards[0].side, Side::Near);
    }
}
