//! Presenter interface - how the core talks to whatever draws the game.
//!
//! The controller never calls out directly. It queues [`RoundEvent`]s, the
//! host drains them and hands each one to [`RoundEvent::dispatch`], which
//! invokes the matching [`Presenter`] callback.

use crate::config::SoundSettings;
use crate::types::{Card, CardId, Difficulty, SoundCue};

/// Side effects produced by the round controller, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundEvent {
    RoundStarted {
        generation: u64,
        difficulty: Difficulty,
        pair_count: u32,
    },
    /// A card entered the visible collection. Clicking it maps to `GameAction::Flip(id)`.
    CardRendered { id: CardId, card: Card },
    /// A cue, with the mute and volume settings in force when it happened.
    Sound { cue: SoundCue, settings: SoundSettings },
    /// Two different symbols are face-up and will turn back after the settle delay.
    Mismatch { pair: [CardId; 2] },
    /// A mismatched pair turned face-down again.
    Settled { pair: [CardId; 2] },
    TimeUpdated { seconds_remaining: u32 },
    RoundEnded {
        win: bool,
        elapsed_seconds: u32,
        score: u32,
    },
    DifficultyChanged(Difficulty),
    MuteChanged(bool),
}

impl RoundEvent {
    /// Forward this event to the presenter.
    ///
    /// Sound callbacks are skipped when the cue was queued while inaudible.
    pub fn dispatch<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        match *self {
            RoundEvent::CardRendered { id, card } => presenter.on_card_rendered(id, &card),
            RoundEvent::Sound { cue, settings } => {
                if !settings.audible() {
                    return;
                }
                let volume = settings.volume;
                match cue {
                    SoundCue::RoundStart => presenter.on_round_start_sound(volume),
                    SoundCue::CardFlip => presenter.on_flip_sound(volume),
                    SoundCue::CardMatch => presenter.on_match_sound(volume),
                    SoundCue::RoundWon => presenter.on_round_won_sound(volume),
                    SoundCue::RoundLost => presenter.on_round_lost_sound(volume),
                }
            }
            RoundEvent::Mismatch { pair } => presenter.on_mismatch(pair),
            RoundEvent::TimeUpdated { seconds_remaining } => {
                presenter.on_time_updated(seconds_remaining)
            }
            RoundEvent::RoundEnded {
                win,
                elapsed_seconds,
                score,
            } => presenter.on_round_ended(win, elapsed_seconds, score),
            RoundEvent::RoundStarted { .. }
            | RoundEvent::Settled { .. }
            | RoundEvent::DifficultyChanged(_)
            | RoundEvent::MuteChanged(_) => {}
        }
    }
}

/// Presentation collaborator. Every callback defaults to a no-op.
#[allow(unused_variables)]
pub trait Presenter {
    fn on_card_rendered(&mut self, id: CardId, card: &Card) {}
    fn on_flip_sound(&mut self, volume: f32) {}
    fn on_match_sound(&mut self, volume: f32) {}
    fn on_round_start_sound(&mut self, volume: f32) {}
    fn on_round_won_sound(&mut self, volume: f32) {}
    fn on_round_lost_sound(&mut self, volume: f32) {}
    fn on_mismatch(&mut self, pair: [CardId; 2]) {}
    fn on_time_updated(&mut self, seconds_remaining: u32) {}
    fn on_round_ended(&mut self, win: bool, elapsed_seconds: u32, score: u32) {}
}

/// Presenter that ignores everything (headless runs, benchmarks).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
