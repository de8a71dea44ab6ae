//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, test harnesses).
//!
//! # Round Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the host loop (~60 FPS) |
//! | `SECOND_MS` | 1000 | Interval between round clock ticks |
//! | `DEFAULT_ROUND_SECONDS` | 25 | Time allowed to clear the grid |
//! | `DEFAULT_SETTLE_DELAY_MS` | 900 | Pause before a mismatched pair flips back |
//! | `DEFAULT_PAIR_COUNTS` | 4/6/8 | Pairs dealt per difficulty |
//! | `DEFAULT_VOLUME` | 0.3 | Sound cue volume |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Difficulty, GameAction, CardId};
//!
//! // Difficulty cycles Easy -> Medium -> Hard -> Easy
//! assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Difficulty::from_str("medium"), Some(Difficulty::Medium));
//!
//! // Actions carry the card they target
//! let action = GameAction::Flip(CardId(3));
//! assert!(matches!(action, GameAction::Flip(id) if id.index() == 3));
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Round clock resolution (one tick per second).
pub const SECOND_MS: u32 = 1000;

/// Default round duration in seconds.
pub const DEFAULT_ROUND_SECONDS: u32 = 25;

/// Default delay before a mismatched pair returns face-down.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 900;

/// Pairs dealt per difficulty, indexed by [`Difficulty::index`].
pub const DEFAULT_PAIR_COUNTS: [u8; 3] = [4, 6, 8];

/// Default sound cue volume (0.0 - 1.0).
pub const DEFAULT_VOLUME: f32 = 0.3;

/// Upper bound on pairs per round; keeps the grid printable.
pub const MAX_PAIRS: usize = 16;

/// Cards laid out per grid row.
pub const GRID_COLUMNS: usize = 4;


/// Opaque identifier of one card face.
///
/// Only equality is meaningful. Display glyphs live in the core's symbol pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub u16);

/// Position of a card in the dealt collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

impl CardId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single card on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub symbol: Symbol,
    pub face_up: bool,
    pub matched: bool,
}

impl Card {
    /// A face-down, unmatched card.
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            face_up: false,
            matched: false,
        }
    }
}

/// Round difficulty
///
/// - **Easy**: 4 pairs
/// - **Medium**: 6 pairs
/// - **Hard**: 8 pairs
///
/// The cycle goes: Easy → Medium → Hard → Easy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Advance to the next level, wrapping Hard back to Easy
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
    /// assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
    /// assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Index into per-difficulty tables such as [`DEFAULT_PAIR_COUNTS`].
    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "easy" | "e", "medium" | "m", "hard" | "h"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "e" => Some(Difficulty::Easy),
            "medium" | "m" => Some(Difficulty::Medium),
            "hard" | "h" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Button label shown to the player.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Round lifecycle status
///
/// `Idle → Running → {Won, Lost}`; every status returns to `Idle` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundStatus {
    #[default]
    Idle,
    Running,
    Won,
    Lost,
}

impl RoundStatus {
    /// Won and Lost accept no further flips.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundStatus::Won | RoundStatus::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Idle => "idle",
            RoundStatus::Running => "running",
            RoundStatus::Won => "won",
            RoundStatus::Lost => "lost",
        }
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commands that can be applied to a round
///
/// These are used by every front end (terminal keys, tests, scripted players).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Turn a card face-up
    Flip(CardId),
    /// Deal a new round (resets a finished round first)
    Start,
    /// Advance to the next difficulty (ignored while a round runs)
    CycleDifficulty,
    /// Give up the running round
    Abandon,
    /// Return to idle, discarding the current round
    Reset,
    /// Toggle sound cues
    ToggleMute,
}

/// Fire-and-forget sound notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    RoundStart,
    CardFlip,
    CardMatch,
    RoundWon,
    RoundLost,
}
