//! Round configuration.
//!
//! Layers, lowest first: built-in defaults, an optional JSON file, then
//! `MEMORY_*` environment variables. The binary applies CLI flags on top and
//! calls [`GameConfig::validate`] once before the first round.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MemoryError, Result};
use crate::symbols::{SymbolPool, MAX_SYMBOLS};
use crate::types::{
    Difficulty, DEFAULT_PAIR_COUNTS, DEFAULT_ROUND_SECONDS, DEFAULT_SETTLE_DELAY_MS,
    DEFAULT_VOLUME, MAX_PAIRS,
};

/// All recognised game options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds allowed per round.
    pub round_seconds: u32,
    /// Pause before a mismatched pair turns back face-down.
    pub settle_delay_ms: u32,
    /// Pairs dealt for Easy, Medium and Hard.
    pub pair_counts: [u8; 3],
    /// Sound cue volume, 0.0 - 1.0.
    pub volume: f32,
    pub muted: bool,
    /// Level selected when the game opens.
    #[serde(with = "difficulty_serde")]
    pub difficulty: Difficulty,
    /// Card faces to deal from.
    pub symbols: SymbolPool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: DEFAULT_ROUND_SECONDS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            pair_counts: DEFAULT_PAIR_COUNTS,
            volume: DEFAULT_VOLUME,
            muted: false,
            difficulty: Difficulty::Easy,
            symbols: SymbolPool::default(),
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| MemoryError::invalid(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
            .map_err(|e| MemoryError::invalid(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| MemoryError::invalid(e.to_string()))
    }

    /// Override fields from `MEMORY_*` environment variables.
    ///
    /// Unset or unparsable variables leave the current value in place.
    pub fn apply_env(&mut self) {
        use std::env;

        if let Some(v) = env::var("MEMORY_ROUND_SECONDS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
        {
            self.round_seconds = v;
        }

        if let Some(v) = env::var("MEMORY_SETTLE_DELAY_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
        {
            self.settle_delay_ms = v;
        }

        if let Some(v) = env::var("MEMORY_VOLUME")
            .ok()
            .and_then(|s| s.trim().parse().ok())
        {
            self.volume = v;
        }

        if let Ok(v) = env::var("MEMORY_MUTED") {
            self.muted = v == "1" || v.to_lowercase() == "true";
        }
    }

    /// Pairs dealt at the given difficulty.
    pub fn pair_count(&self, difficulty: Difficulty) -> usize {
        self.pair_counts[difficulty.index()] as usize
    }

    pub fn sound(&self) -> SoundSettings {
        SoundSettings {
            volume: self.volume,
            muted: self.muted,
        }
    }

    /// Reject configurations that could not deal a valid round.
    pub fn validate(&self) -> Result<()> {
        if self.round_seconds == 0 {
            return Err(MemoryError::invalid("round_seconds must be at least 1"));
        }

        if !(0.0..=1.0).contains(&self.volume) {
            return Err(MemoryError::invalid(format!(
                "volume {} is outside 0.0 - 1.0",
                self.volume
            )));
        }

        if self.symbols.len() > MAX_SYMBOLS {
            return Err(MemoryError::invalid(format!(
                "symbol pool has {} glyphs, at most {} are supported",
                self.symbols.len(),
                MAX_SYMBOLS
            )));
        }

        if self.symbols.has_duplicates() {
            return Err(MemoryError::invalid("symbol pool contains duplicate glyphs"));
        }

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let pairs = self.pair_count(difficulty);
            if pairs == 0 || pairs > MAX_PAIRS {
                return Err(MemoryError::invalid(format!(
                    "{} needs 1 - {} pairs, got {}",
                    difficulty.label(),
                    MAX_PAIRS,
                    pairs
                )));
            }
            if pairs > self.symbols.len() {
                return Err(MemoryError::invalid(format!(
                    "{} needs {} pairs but the symbol pool has {}",
                    difficulty.label(),
                    pairs,
                    self.symbols.len()
                )));
            }
        }

        Ok(())
    }
}

/// Volume and mute state for sound cues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundSettings {
    pub volume: f32,
    pub muted: bool,
}

impl SoundSettings {
    /// Cues are played only when unmuted and the volume is above zero.
    pub fn audible(&self) -> bool {
        !self.muted && self.volume > 0.0
    }
}

mod difficulty_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::Difficulty;

    pub fn serialize<S: Serializer>(value: &Difficulty, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.label().to_lowercase())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Difficulty, D::Error> {
        let raw = String::deserialize(d)?;
        Difficulty::from_str(&raw)
            .ok_or_else(|| D::Error::custom(format!("unknown difficulty `{}`", raw)))
    }
}
