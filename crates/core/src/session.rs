//! Session - the host side of the event loop
//!
//! The controller only knows "one second passed" and "this settle is due".
//! `Session` turns elapsed wall time into those calls: it accumulates
//! milliseconds into round-clock ticks and counts down scheduled mismatch
//! settles, then forwards queued events to a presenter.
//!
//! Settles are never cancelled when a round resets. They fire on schedule
//! and the controller drops any whose generation is out of date.

use crate::controller::{RoundController, SettleToken};
use crate::match_engine::FlipOutcome;
use crate::presenter::Presenter;
use crate::types::{GameAction, RoundStatus, SECOND_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSettle {
    token: SettleToken,
    remaining_ms: u32,
}

/// A controller plus the timers that drive it.
#[derive(Debug, Clone)]
pub struct Session {
    controller: RoundController,
    second_timer_ms: u32,
    settles: Vec<PendingSettle>,
}

impl Session {
    pub fn new(controller: RoundController) -> Self {
        Self {
            controller,
            second_timer_ms: 0,
            settles: Vec::with_capacity(2),
        }
    }

    pub fn controller(&self) -> &RoundController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RoundController {
        &mut self.controller
    }

    /// Number of settles still waiting to fire (stale ones included).
    pub fn pending_settles(&self) -> usize {
        self.settles.len()
    }

    /// Apply a command, scheduling a settle when a flip mismatches.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Flip(id) => {
                let outcome = self.controller.flip(id);
                if let FlipOutcome::Mismatched { pair } = outcome {
                    self.schedule_settle(self.controller.settle_token(pair));
                }
                outcome.accepted()
            }
            GameAction::Start => {
                let started = self.controller.apply_action(action);
                if started {
                    self.second_timer_ms = 0;
                }
                started
            }
            _ => self.controller.apply_action(action),
        }
    }

    /// Advance host time by `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.controller.status() == RoundStatus::Running {
            self.second_timer_ms = self.second_timer_ms.saturating_add(elapsed_ms);
            while self.second_timer_ms >= SECOND_MS
                && self.controller.status() == RoundStatus::Running
            {
                self.second_timer_ms -= SECOND_MS;
                self.controller.tick();
            }
        } else {
            self.second_timer_ms = 0;
        }

        let mut i = 0;
        while i < self.settles.len() {
            let pending = &mut self.settles[i];
            pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
            if pending.remaining_ms == 0 {
                let token = pending.token;
                self.settles.remove(i);
                self.controller.resolve_mismatch(token);
            } else {
                i += 1;
            }
        }
    }

    /// Drain queued events into `presenter`.
    pub fn pump<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        for event in self.controller.drain_events() {
            event.dispatch(presenter);
        }
    }

    fn schedule_settle(&mut self, token: SettleToken) {
        let delay = self.controller.config().settle_delay_ms;
        if delay == 0 {
            self.controller.resolve_mismatch(token);
            return;
        }
        self.settles.push(PendingSettle {
            token,
            remaining_ms: delay,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::rng::DealRng;
    use crate::types::CardId;

    fn session(config: GameConfig) -> Session {
        Session::new(RoundController::new(config, DealRng::new(9)).unwrap())
    }

    fn mismatched_pair(s: &Session) -> [CardId; 2] {
        let cards = s.controller().cards();
        let b = cards
            .iter()
            .position(|c| c.symbol != cards[0].symbol)
            .unwrap();
        [CardId(0), CardId(b)]
    }

    #[test]
    fn ticks_once_per_second() {
        let mut s = session(GameConfig::default());
        s.apply(GameAction::Start);

        s.advance(999);
        assert_eq!(s.controller().seconds_remaining(), 25);
        s.advance(1);
        assert_eq!(s.controller().seconds_remaining(), 24);
        s.advance(2500);
        assert_eq!(s.controller().seconds_remaining(), 22);
    }

    #[test]
    fn huge_elapsed_time_saturates() {
        let mut s = session(GameConfig::default());
        s.apply(GameAction::Start);
        s.advance(500);
        s.advance(u32::MAX);
        assert_eq!(s.controller().status(), RoundStatus::Lost);
        assert_eq!(s.controller().seconds_remaining(), 0);
    }

    #[test]
    fn idle_time_does_not_accumulate() {
        let mut s = session(GameConfig::default());
        s.advance(5000);
        s.apply(GameAction::Start);
        s.advance(500);
        assert_eq!(s.controller().seconds_remaining(), 25);
    }

    #[test]
    fn settle_fires_after_delay() {
        let mut s = session(GameConfig::default());
        s.apply(GameAction::Start);
        let [a, b] = mismatched_pair(&s);

        s.apply(GameAction::Flip(a));
        s.apply(GameAction::Flip(b));
        assert_eq!(s.pending_settles(), 1);

        s.advance(899);
        assert!(s.controller().cards()[a.index()].face_up);
        s.advance(1);
        assert!(!s.controller().cards()[a.index()].face_up);
        assert!(!s.controller().cards()[b.index()].face_up);
        assert!(s.controller().flipped().is_empty());
        assert_eq!(s.pending_settles(), 0);
    }

    #[test]
    fn zero_delay_settles_immediately() {
        let config = GameConfig {
            settle_delay_ms: 0,
            ..GameConfig::default()
        };
        let mut s = session(config);
        s.apply(GameAction::Start);
        let [a, b] = mismatched_pair(&s);

        s.apply(GameAction::Flip(a));
        s.apply(GameAction::Flip(b));
        assert_eq!(s.pending_settles(), 0);
        assert!(s.controller().flipped().is_empty());
    }
}
