use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownRule;

/// Active rule toggles. Every combination is legal; interactions are resolved
/// by evaluation order in the engine, not by the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub reverse: bool,
    pub fallen_ace: bool,
    pub same: bool,
    pub plus: bool,
    pub ascension: bool,
    pub descension: bool,
    pub order: bool,
}

impl Rules {
    #[inline]
    pub const fn basic_only() -> Self {
        Self {
            reverse: false,
            fallen_ace: false,
            same: false,
            plus: false,
            ascension: false,
            descension: false,
            order: false,
        }
    }

    #[inline]
    pub const fn all_enabled() -> Self {
        Self {
            reverse: true,
            fallen_ace: true,
            same: true,
            plus: true,
            ascension: true,
            descension: true,
            order: true,
        }
    }

    /// Decode from a 7-bit mask: bit 0 = reverse, then fallen_ace, same, plus,
    /// ascension, descension, order.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            reverse: bits & 0x01 != 0,
            fallen_ace: bits & 0x02 != 0,
            same: bits & 0x04 != 0,
            plus: bits & 0x08 != 0,
            ascension: bits & 0x10 != 0,
            descension: bits & 0x20 != 0,
            order: bits & 0x40 != 0,
        }
    }

    #[inline]
    pub fn uses_category_census(&self) -> bool {
        self.ascension || self.descension
    }

    /// Flip a single toggle by name. Returns false for unknown names.
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.flag_mut(name) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    fn flag_mut(&mut self, name: &str) -> Option<&mut bool> {
        match name.trim().to_ascii_lowercase().as_str() {
            "reverse" => Some(&mut self.reverse),
            "fallen_ace" | "fallenace" | "fallen-ace" => Some(&mut self.fallen_ace),
            "same" => Some(&mut self.same),
            "plus" => Some(&mut self.plus),
            "ascension" => Some(&mut self.ascension),
            "descension" => Some(&mut self.descension),
            "order" => Some(&mut self.order),
            _ => None,
        }
    }
}

/// Parses a comma-separated toggle list, e.g. `same,plus,reverse` or `none`.
impl FromStr for Rules {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut r = Rules::default();
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(r);
        }
        for tok in s.split(',') {
            let tok = tok.trim();
            if tok.is_empty() {
                continue;
            }
            match r.flag_mut(tok) {
                Some(flag) => *flag = true,
                None => return Err(UnknownRule(tok.to_string())),
            }
        }
        Ok(r)
    }
}
