//! Symbol pool - the card faces a round can be dealt from.

use serde::{Deserialize, Serialize};

use crate::types::Symbol;

/// Single-width glyphs so every card face occupies one terminal column.
pub const DEFAULT_GLYPHS: [&str; 14] = [
    "♠", "♥", "♦", "♣", "★", "☀", "☂", "☃", "♪", "♞", "✿", "☯", "Ω", "§",
];

/// Largest pool a `Symbol` id can address.
pub const MAX_SYMBOLS: usize = u16::MAX as usize + 1;

/// Ordered set of display glyphs. `Symbol(i)` names the glyph at index `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolPool {
    glyphs: Vec<String>,
}

impl SymbolPool {
    pub fn new<I, S>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            glyphs: glyphs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Every symbol in the pool, in order. Glyphs past [`MAX_SYMBOLS`] get no id.
    pub fn symbols(&self) -> Vec<Symbol> {
        (0..self.glyphs.len())
            .map_while(|i| u16::try_from(i).ok().map(Symbol))
            .collect()
    }

    /// Glyph for a symbol, or `"?"` for one this pool never issued.
    pub fn glyph(&self, symbol: Symbol) -> &str {
        self.glyphs
            .get(symbol.0 as usize)
            .map(String::as_str)
            .unwrap_or("?")
    }

    /// True when two entries share a glyph (which would make pairs ambiguous).
    pub fn has_duplicates(&self) -> bool {
        let mut seen: Vec<&str> = self.glyphs.iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.windows(2).any(|w| w[0] == w[1])
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self::new(DEFAULT_GLYPHS)
    }
}
