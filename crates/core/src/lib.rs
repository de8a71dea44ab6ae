//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the memory game: dealing, flipping,
//! matching, scoring and the round clock. It has no dependency on any
//! terminal or UI layer, making it:
//!
//! - **Deterministic**: the same seed deals the same table
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: drive it from a terminal, a test harness or anything else
//!
//! # Module Structure
//!
//! - [`shuffler`]: picks pairs from the symbol pool and shuffles the table
//! - [`clock`]: one-second countdown with a single expiry
//! - [`match_engine`]: flip state, pair detection, scoring
//! - [`controller`]: round lifecycle, difficulty, event outbox
//! - [`session`]: turns wall time into clock ticks and delayed settles
//! - [`presenter`]: callbacks a front end implements
//! - [`config`]: options with JSON and environment overrides
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{DealRng, GameConfig, RoundController};
//! use tui_memory_types::{GameAction, RoundStatus};
//!
//! let mut round = RoundController::new(GameConfig::default(), DealRng::new(7)).unwrap();
//! round.apply_action(GameAction::Start);
//! assert_eq!(round.status(), RoundStatus::Running);
//! assert_eq!(round.cards().len(), 8);
//!
//! // Give up: the round ends as a loss with no points.
//! round.apply_action(GameAction::Abandon);
//! assert_eq!(round.summary().unwrap().detail(), "You got 0 points");
//! ```
//!
//! # Timing
//!
//! The host calls [`Session::advance`](session::Session::advance) every
//! frame with the elapsed milliseconds. The round clock ticks once per
//! second and mismatched pairs turn back after the configured settle delay.

pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod match_engine;
pub mod presenter;
pub mod rng;
pub mod session;
pub mod shuffler;
pub mod snapshot;
pub mod symbols;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use clock::{ClockTick, RoundClock};
pub use config::{GameConfig, SoundSettings};
pub use controller::{RoundController, SettleToken};
pub use error::{MemoryError, Result};
pub use match_engine::{FlipOutcome, FlipRejection, MatchEngine};
pub use presenter::{NullPresenter, Presenter, RoundEvent};
pub use rng::DealRng;
pub use session::Session;
pub use shuffler::{deal, pick_pairs, shuffle_all};
pub use snapshot::{RoundSnapshot, RoundSummary};
pub use symbols::{SymbolPool, MAX_SYMBOLS};
