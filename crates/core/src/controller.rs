//! Round controller - owns one table of cards and drives its lifecycle
//!
//! `Idle → Running → {Won, Lost}`, and back to `Idle` through [`RoundController::reset`].
//! Every operation is a guarded state transition: calls that the current
//! status forbids are logged at debug level and ignored.
//!
//! Each dealt round gets a fresh generation number. Delayed work (the
//! mismatch settle) carries the generation it was scheduled under and is
//! dropped when the round has moved on.

use crate::clock::{ClockTick, RoundClock};
use crate::config::{GameConfig, SoundSettings};
use crate::error::{MemoryError, Result};
use crate::match_engine::{FlipOutcome, FlipRejection, MatchEngine};
use crate::presenter::RoundEvent;
use crate::rng::DealRng;
use crate::shuffler;
use crate::snapshot::{RoundSnapshot, RoundSummary};
use crate::types::{Card, CardId, Difficulty, GameAction, RoundStatus, SoundCue};

/// Handle for a scheduled mismatch settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettleToken {
    pub generation: u64,
    pub pair: [CardId; 2],
}

/// Complete state of the game between rounds and during one.
#[derive(Debug, Clone)]
pub struct RoundController {
    config: GameConfig,
    difficulty: Difficulty,
    status: RoundStatus,
    cards: Vec<Card>,
    engine: MatchEngine,
    clock: RoundClock,
    rng: DealRng,
    /// Monotonic round id (increments on every deal and reset).
    generation: u64,
    muted: bool,
    summary: Option<RoundSummary>,
    /// Pending side effects (consumed by the host).
    events: Vec<RoundEvent>,
}

impl RoundController {
    /// Create an idle controller. Fails when `config` could not deal a round.
    pub fn new(config: GameConfig, rng: DealRng) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            difficulty: config.difficulty,
            muted: config.muted,
            config,
            status: RoundStatus::Idle,
            cards: Vec::new(),
            engine: MatchEngine::default(),
            clock: RoundClock::new(),
            rng,
            generation: 0,
            summary: None,
            events: Vec::with_capacity(32),
        })
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    /// Face-up cards awaiting resolution.
    pub fn flipped(&self) -> &[CardId] {
        self.engine.flipped()
    }

    pub fn seconds_remaining(&self) -> u32 {
        if self.status == RoundStatus::Idle {
            self.config.round_seconds
        } else {
            self.clock.remaining()
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn summary(&self) -> Option<RoundSummary> {
        self.summary
    }

    /// Pairs the next (or current) round deals.
    pub fn pair_count(&self) -> u32 {
        match self.status {
            RoundStatus::Idle => self.config.pair_count(self.difficulty) as u32,
            _ => self.engine.pair_count(),
        }
    }

    pub fn sound(&self) -> SoundSettings {
        SoundSettings {
            volume: self.config.volume,
            muted: self.muted,
        }
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, RoundEvent> {
        self.events.drain(..)
    }

    /// Queued events without consuming them.
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Settle handle for a mismatched pair in the current round.
    pub fn settle_token(&self, pair: [CardId; 2]) -> SettleToken {
        SettleToken {
            generation: self.generation,
            pair,
        }
    }

    /// Apply a front-end command. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Flip(id) => self.flip(id).accepted(),
            GameAction::Start => {
                if self.status.is_terminal() {
                    self.reset();
                }
                self.start_round()
            }
            GameAction::CycleDifficulty => self.cycle_difficulty(),
            GameAction::Abandon => self.abandon(),
            GameAction::Reset => self.reset(),
            GameAction::ToggleMute => {
                self.toggle_mute();
                true
            }
        }
    }

    /// Advance Easy → Medium → Hard → Easy.
    pub fn cycle_difficulty(&mut self) -> bool {
        self.configure_difficulty(self.difficulty.next())
    }

    /// Select the level for the next deal.
    ///
    /// Ignored while a round runs so the dealt table never changes size.
    pub fn configure_difficulty(&mut self, next: Difficulty) -> bool {
        if let Err(err) = self.require("configure_difficulty", self.status != RoundStatus::Running)
        {
            return ignored(err);
        }
        if next == self.difficulty {
            return false;
        }

        self.difficulty = next;
        self.events.push(RoundEvent::DifficultyChanged(self.difficulty));
        tracing::debug!(difficulty = self.difficulty.label(), "difficulty changed");
        true
    }

    /// Deal a new table and start the clock.
    pub fn start_round(&mut self) -> bool {
        if let Err(err) = self.require("start_round", self.status == RoundStatus::Idle) {
            return ignored(err);
        }

        let pair_count = self.config.pair_count(self.difficulty);
        let pool = self.config.symbols.symbols();
        let cards = match shuffler::deal(&pool, pair_count, &mut self.rng) {
            Ok(cards) => cards,
            Err(err) => {
                // validate() already bounds pair counts by the pool, so this is a config bug.
                tracing::error!(%err, "could not deal round");
                return false;
            }
        };

        self.generation = self.generation.wrapping_add(1);
        self.cards = cards;
        self.engine.reset(pair_count as u32);
        self.summary = None;
        self.clock.start(self.config.round_seconds);
        self.status = RoundStatus::Running;

        tracing::info!(
            generation = self.generation,
            difficulty = self.difficulty.label(),
            pairs = pair_count,
            seed = self.rng.seed(),
            "round started"
        );

        self.events.push(RoundEvent::RoundStarted {
            generation: self.generation,
            difficulty: self.difficulty,
            pair_count: pair_count as u32,
        });
        self.push_sound(SoundCue::RoundStart);
        for (i, card) in self.cards.iter().enumerate() {
            self.events.push(RoundEvent::CardRendered {
                id: CardId(i),
                card: *card,
            });
        }
        self.events.push(RoundEvent::TimeUpdated {
            seconds_remaining: self.clock.remaining(),
        });
        true
    }

    /// Turn a card face-up.
    pub fn flip(&mut self, id: CardId) -> FlipOutcome {
        if let Err(err) = self.require("flip", self.status == RoundStatus::Running) {
            ignored(err);
            return FlipOutcome::Rejected(FlipRejection::RoundNotRunning);
        }

        let outcome = self.engine.flip(&mut self.cards, id);
        match outcome {
            FlipOutcome::Rejected(reason) => {
                tracing::debug!(card = id.index(), ?reason, "flip rejected");
            }
            FlipOutcome::FaceUp(_) => {
                self.push_sound(SoundCue::CardFlip);
            }
            FlipOutcome::Matched {
                score, completed, ..
            } => {
                self.push_sound(SoundCue::CardFlip);
                self.push_sound(SoundCue::CardMatch);
                tracing::debug!(score, "pair matched");
                if completed {
                    self.end_round(true);
                }
            }
            FlipOutcome::Mismatched { pair } => {
                self.push_sound(SoundCue::CardFlip);
                self.events.push(RoundEvent::Mismatch { pair });
            }
        }
        outcome
    }

    /// Delayed half of a mismatch: turn the pair face-down again.
    ///
    /// A token from an earlier round, or for a pair that is no longer
    /// pending, changes nothing.
    pub fn resolve_mismatch(&mut self, token: SettleToken) -> bool {
        if token.generation != self.generation {
            tracing::debug!(
                token = token.generation,
                current = self.generation,
                "stale settle ignored"
            );
            return false;
        }

        if !self.engine.settle(&mut self.cards, token.pair) {
            return false;
        }
        self.events.push(RoundEvent::Settled { pair: token.pair });
        true
    }

    /// One second elapsed on the host clock.
    pub fn tick(&mut self) -> bool {
        if let Err(err) = self.require("tick", self.status == RoundStatus::Running) {
            return ignored(err);
        }

        match self.clock.tick() {
            ClockTick::Stopped => false,
            ClockTick::Remaining(seconds_remaining) => {
                self.events.push(RoundEvent::TimeUpdated { seconds_remaining });
                true
            }
            ClockTick::Expired => {
                self.events.push(RoundEvent::TimeUpdated {
                    seconds_remaining: 0,
                });
                self.end_round(false);
                true
            }
        }
    }

    /// Give up the running round.
    pub fn abandon(&mut self) -> bool {
        if let Err(err) = self.require("abandon", self.status == RoundStatus::Running) {
            return ignored(err);
        }
        self.end_round(false);
        true
    }

    /// Discard the table and return to idle.
    pub fn reset(&mut self) -> bool {
        if let Err(err) = self.require("reset", self.status != RoundStatus::Idle) {
            return ignored(err);
        }

        self.generation = self.generation.wrapping_add(1);
        self.cards.clear();
        self.engine.reset(0);
        self.clock.clear();
        self.summary = None;
        self.status = RoundStatus::Idle;
        tracing::debug!(generation = self.generation, "round reset");
        true
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.events.push(RoundEvent::MuteChanged(self.muted));
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.status = self.status;
        out.difficulty = self.difficulty;
        out.pair_count = self.pair_count();
        out.score = self.score();
        out.seconds_remaining = self.seconds_remaining();
        out.round_seconds = self.config.round_seconds;
        out.generation = self.generation;
        out.muted = self.muted;
        out.awaiting_settle = self.engine.awaiting_settle();
        out.summary = self.summary;
        out.cards.clear();
        out.cards.extend_from_slice(&self.cards);
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn end_round(&mut self, win: bool) {
        self.clock.stop();
        self.status = if win {
            RoundStatus::Won
        } else {
            RoundStatus::Lost
        };

        let summary = RoundSummary {
            win,
            elapsed_seconds: self.clock.elapsed(),
            score: self.engine.score(),
        };
        self.summary = Some(summary);

        tracing::info!(
            generation = self.generation,
            win,
            elapsed = summary.elapsed_seconds,
            score = summary.score,
            "round ended"
        );

        self.push_sound(if win {
            SoundCue::RoundWon
        } else {
            SoundCue::RoundLost
        });
        self.events.push(RoundEvent::RoundEnded {
            win,
            elapsed_seconds: summary.elapsed_seconds,
            score: summary.score,
        });
    }

    /// Queue a cue with the sound settings in force right now.
    fn push_sound(&mut self, cue: SoundCue) {
        let settings = self.sound();
        self.events.push(RoundEvent::Sound { cue, settings });
    }

    fn require(&self, op: &'static str, allowed: bool) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(MemoryError::illegal(op, self.status))
        }
    }
}

fn ignored(err: MemoryError) -> bool {
    tracing::debug!(%err, "ignored");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> RoundController {
        RoundController::new(GameConfig::default(), DealRng::new(5)).unwrap()
    }

    /// Ids of the two cards carrying each symbol.
    fn pairs(c: &RoundController) -> Vec<[CardId; 2]> {
        let mut out: Vec<[CardId; 2]> = Vec::new();
        for (i, card) in c.cards().iter().enumerate() {
            if let Some(j) = c.cards()[..i].iter().position(|o| o.symbol == card.symbol) {
                out.push([CardId(j), CardId(i)]);
            }
        }
        out
    }

    #[test]
    fn starts_idle_with_configured_time() {
        let c = controller();
        assert_eq!(c.status(), RoundStatus::Idle);
        assert_eq!(c.seconds_remaining(), 25);
        assert_eq!(c.pair_count(), 4);
        assert!(c.cards().is_empty());
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = GameConfig {
            round_seconds: 0,
            ..GameConfig::default()
        };
        assert!(RoundController::new(config, DealRng::new(1)).is_err());
    }

    #[test]
    fn start_round_deals_and_emits_card_events() {
        let mut c = controller();
        assert!(c.start_round());
        assert_eq!(c.status(), RoundStatus::Running);
        assert_eq!(c.cards().len(), 8);
        assert_eq!(c.generation(), 1);

        let rendered = c
            .events()
            .iter()
            .filter(|e| matches!(e, RoundEvent::CardRendered { .. }))
            .count();
        assert_eq!(rendered, 8);
        assert!(matches!(
            c.events().first(),
            Some(RoundEvent::RoundStarted { pair_count: 4, .. })
        ));
    }

    #[test]
    fn start_round_while_running_is_noop() {
        let mut c = controller();
        c.start_round();
        let before = c.cards().to_vec();
        assert!(!c.start_round());
        assert_eq!(c.cards(), before.as_slice());
        assert_eq!(c.generation(), 1);
    }

    #[test]
    fn difficulty_locked_while_running() {
        let mut c = controller();
        assert!(c.cycle_difficulty());
        assert_eq!(c.difficulty(), Difficulty::Medium);
        assert_eq!(c.pair_count(), 6);

        c.start_round();
        assert_eq!(c.cards().len(), 12);
        assert!(!c.cycle_difficulty());
        assert_eq!(c.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn winning_reports_elapsed_time() {
        let mut c = controller();
        c.start_round();
        for _ in 0..15 {
            c.tick();
        }
        for [a, b] in pairs(&c) {
            c.flip(a);
            c.flip(b);
        }

        assert_eq!(c.status(), RoundStatus::Won);
        assert_eq!(
            c.summary(),
            Some(RoundSummary {
                win: true,
                elapsed_seconds: 15,
                score: 4
            })
        );
        assert!(!c.tick());
    }

    #[test]
    fn configure_difficulty_picks_level_directly() {
        let mut c = controller();
        assert!(c.configure_difficulty(Difficulty::Hard));
        assert_eq!(c.pair_count(), 8);
        assert!(!c.configure_difficulty(Difficulty::Hard));
        assert!(c.events().contains(&RoundEvent::DifficultyChanged(Difficulty::Hard)));
    }

    #[test]
    fn abandon_only_while_running() {
        let mut c = controller();
        assert!(!c.abandon());
        c.start_round();
        assert!(c.abandon());
        assert_eq!(c.status(), RoundStatus::Lost);
        assert!(!c.abandon());
    }

    #[test]
    fn start_action_replays_after_round_end() {
        let mut c = controller();
        c.apply_action(GameAction::Start);
        c.apply_action(GameAction::Abandon);
        assert_eq!(c.status(), RoundStatus::Lost);

        assert!(c.apply_action(GameAction::Start));
        assert_eq!(c.status(), RoundStatus::Running);
        assert_eq!(c.score(), 0);
        assert_eq!(c.generation(), 3);
    }

    #[test]
    fn reset_from_idle_is_noop() {
        let mut c = controller();
        assert!(!c.reset());
        assert_eq!(c.generation(), 0);
    }

    #[test]
    fn toggle_mute_flips_sound_settings() {
        let mut c = controller();
        assert!(c.sound().audible());
        c.apply_action(GameAction::ToggleMute);
        assert!(c.muted());
        assert!(!c.sound().audible());
    }
}
