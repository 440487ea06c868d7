// Deterministic hash-based color tagging
// Same string -> same token, across calls and across runs.

use serde::{Deserialize, Serialize};

use crate::Color;

/// One entry of the fixed tagging palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Purple,
    Teal,
    Green,
    Yellow,
    Pink,
    Indigo,
}

/// Palette order is part of the contract: the hash indexes into it, so
/// reordering entries changes every assignment.
pub const PALETTE: [ColorToken; 7] = [
    ColorToken::Blue,
    ColorToken::Purple,
    ColorToken::Teal,
    ColorToken::Green,
    ColorToken::Yellow,
    ColorToken::Pink,
    ColorToken::Indigo,
];

impl ColorToken {
    /// Stable string identifier, usable as a CSS class suffix or map key.
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Blue => "blue",
            ColorToken::Purple => "purple",
            ColorToken::Teal => "teal",
            ColorToken::Green => "green",
            ColorToken::Yellow => "yellow",
            ColorToken::Pink => "pink",
            ColorToken::Indigo => "indigo",
        }
    }

    /// RGB value of the token (Tailwind 500 shades).
    pub fn color(&self) -> Color {
        match self {
            ColorToken::Blue => Color::from_hex(0x3b82f6),
            ColorToken::Purple => Color::from_hex(0xa855f7),
            ColorToken::Teal => Color::from_hex(0x14b8a6),
            ColorToken::Green => Color::from_hex(0x22c55e),
            ColorToken::Yellow => Color::from_hex(0xeab308),
            ColorToken::Pink => Color::from_hex(0xec4899),
            ColorToken::Indigo => Color::from_hex(0x6366f1),
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a string to a palette token.
///
/// Classic polynomial rolling hash, `hash = code + (hash << 5) - hash`,
/// over the string's UTF-16 code units in wrapping 32-bit signed
/// arithmetic, then `abs % 7`. The empty string hashes to 0 and lands
/// on the first palette entry.
pub fn token_for(input: &str) -> ColorToken {
    let mut hash: i32 = 0;
    for code in input.encode_utf16() {
        hash = (code as i32).wrapping_add((hash << 5).wrapping_sub(hash));
    }
    let index = (hash.unsigned_abs() as usize) % PALETTE.len();
    PALETTE[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_string_is_first_entry() {
        assert_eq!(token_for(""), PALETTE[0]);
    }

    #[test]
    fn stable_across_calls() {
        assert_eq!(token_for("Hub Id"), token_for("Hub Id"));
        assert_eq!(token_for("Manufacturer"), token_for("Manufacturer"));
    }

    #[test]
    fn known_assignments() {
        // Pinned values: changing the hash or palette order breaks these
        // and therefore every stored visual assignment.
        // "a" -> 97 % 7 = 6
        assert_eq!(token_for("a"), ColorToken::Indigo);
        // "ab": 97*31 + 98 = 3105, 3105 % 7 = 4
        assert_eq!(token_for("ab"), ColorToken::Yellow);
    }

    #[test]
    fn non_ascii_input_hashes_by_utf16_units() {
        // "é" is one UTF-16 unit, 233; 233 % 7 = 2
        assert_eq!(token_for("\u{e9}"), ColorToken::Teal);
    }

    #[test]
    fn palette_names_are_distinct() {
        let mut names: Vec<&str> = PALETTE.iter().map(|t| t.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PALETTE.len());
    }

    proptest! {
        // Total and deterministic over arbitrary strings; output always
        // comes from the palette by construction, so this checks the
        // hash never panics (including overflow in debug builds).
        #[test]
        fn total_and_deterministic(s in ".*") {
            let first = token_for(&s);
            prop_assert_eq!(token_for(&s), first);
        }
    }
}
