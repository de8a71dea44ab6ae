//! Match engine - flip state, pair detection and scoring for one round
//!
//! At most two unmatched cards are face-up at a time. A matching second flip
//! resolves immediately; a mismatch holds both cards face-up until the host
//! calls [`MatchEngine::settle`] after the settle delay. While a mismatch is
//! pending every further flip is rejected.

use arrayvec::ArrayVec;

use crate::types::{Card, CardId};

/// Why a flip was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipRejection {
    /// Two cards are already waiting to be resolved.
    PairPending,
    /// Card is face-up and unresolved.
    AlreadyFaceUp,
    /// Card belongs to a matched pair.
    AlreadyMatched,
    /// No card with that id.
    UnknownCard,
    /// Every pair is already matched.
    Complete,
    /// No round is in progress.
    RoundNotRunning,
}

/// What a flip did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Rejected(FlipRejection),
    /// First card of a pair turned face-up.
    FaceUp(CardId),
    /// Second card matched the first; `completed` when that was the last pair.
    Matched {
        pair: [CardId; 2],
        score: u32,
        completed: bool,
    },
    /// Second card differs; both stay face-up until settled.
    Mismatched { pair: [CardId; 2] },
}

impl FlipOutcome {
    pub fn accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Rejected(_))
    }
}

/// Flip and scoring state for the current round.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    flipped: ArrayVec<CardId, 2>,
    score: u32,
    pair_count: u32,
}

impl MatchEngine {
    pub fn new(pair_count: u32) -> Self {
        Self {
            flipped: ArrayVec::new(),
            score: 0,
            pair_count,
        }
    }

    /// Forget all flip state and zero the score for a fresh table.
    pub fn reset(&mut self, pair_count: u32) {
        self.flipped.clear();
        self.score = 0;
        self.pair_count = pair_count;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pair_count(&self) -> u32 {
        self.pair_count
    }

    /// Face-up cards that are not yet resolved (0, 1 or 2).
    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    /// A mismatched pair is waiting for its settle delay.
    pub fn awaiting_settle(&self) -> bool {
        self.flipped.is_full()
    }

    pub fn completed(&self) -> bool {
        self.pair_count > 0 && self.score >= self.pair_count
    }

    /// Turn a card face-up and resolve the pair when it is the second one.
    pub fn flip(&mut self, cards: &mut [Card], id: CardId) -> FlipOutcome {
        if self.completed() {
            return FlipOutcome::Rejected(FlipRejection::Complete);
        }
        if self.awaiting_settle() {
            return FlipOutcome::Rejected(FlipRejection::PairPending);
        }
        let Some(card) = cards.get_mut(id.index()) else {
            return FlipOutcome::Rejected(FlipRejection::UnknownCard);
        };
        if card.matched {
            return FlipOutcome::Rejected(FlipRejection::AlreadyMatched);
        }
        if card.face_up {
            return FlipOutcome::Rejected(FlipRejection::AlreadyFaceUp);
        }

        card.face_up = true;
        self.flipped.push(id);

        let [first, second] = match self.flipped.as_slice() {
            &[first, second] => [first, second],
            _ => return FlipOutcome::FaceUp(id),
        };

        if cards[first.index()].symbol == cards[second.index()].symbol {
            cards[first.index()].matched = true;
            cards[second.index()].matched = true;
            self.flipped.clear();
            self.score = (self.score + 1).min(self.pair_count);
            FlipOutcome::Matched {
                pair: [first, second],
                score: self.score,
                completed: self.completed(),
            }
        } else {
            FlipOutcome::Mismatched {
                pair: [first, second],
            }
        }
    }

    /// Turn the pending mismatched pair face-down again.
    ///
    /// Only acts when `pair` is exactly the pair still pending, so a settle
    /// aimed at an earlier pair can never touch the current one.
    pub fn settle(&mut self, cards: &mut [Card], pair: [CardId; 2]) -> bool {
        if self.flipped.as_slice() != pair.as_slice() {
            return false;
        }

        for id in pair {
            if let Some(card) = cards.get_mut(id.index()) {
                if !card.matched {
                    card.face_up = false;
                }
            }
        }
        self.flipped.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    // Layout: x y z z x y
    fn table() -> Vec<Card> {
        [0u16, 1, 2, 2, 0, 1]
            .iter()
            .map(|&s| Card::new(Symbol(s)))
            .collect()
    }

    #[test]
    fn first_flip_turns_card_face_up() {
        let mut cards = table();
        let mut engine = MatchEngine::new(3);

        assert_eq!(engine.flip(&mut cards, CardId(0)), FlipOutcome::FaceUp(CardId(0)));
        assert!(cards[0].face_up);
        assert_eq!(engine.flipped(), &[CardId(0)]);
    }

    #[test]
    fn same_card_twice_is_rejected() {
        let mut cards = table();
        let mut engine = MatchEngine::new(3);

        engine.flip(&mut cards, CardId(0));
        assert_eq!(
            engine.flip(&mut cards, CardId(0)),
            FlipOutcome::Rejected(FlipRejection::AlreadyFaceUp)
        );
        assert_eq!(engine.flipped().len(), 1);
    }

    #[test]
    fn match_locks_pair_and_scores() {
        let mut cards = table();
        let mut engine = MatchEngine::new(3);

        engine.flip(&mut cards, CardId(2));
        let outcome = engine.flip(&mut cards, CardId(3));
        assert_eq!(
            outcome,
            FlipOutcome::Matched {
                pair: [CardId(2), CardId(3)],
                score: 1,
                completed: false
            }
        );
        assert!(cards[2].matched && cards[2].face_up);
        assert!(cards[3].matched && cards[3].face_up);
        assert!(engine.flipped().is_empty());

        assert_eq!(
            engine.flip(&mut cards, CardId(2)),
            FlipOutcome::Rejected(FlipRejection::AlreadyMatched)
        );
    }

    #[test]
    fn mismatch_blocks_third_flip_until_settled() {
        let mut cards = table();
        let mut engine = MatchEngine::new(3);

        engine.flip(&mut cards, CardId(0));
        let outcome = engine.flip(&mut cards, CardId(1));
        assert_eq!(
            outcome,
            FlipOutcome::Mismatched {
                pair: [CardId(0), CardId(1)]
            }
        );
        assert!(engine.awaiting_settle());

        assert_eq!(
            engine.flip(&mut cards, CardId(2)),
            FlipOutcome::Rejected(FlipRejection::PairPending)
        );
        assert!(!cards[2].face_up);

        assert!(engine.settle(&mut cards, [CardId(0), CardId(1)]));
        assert!(!cards[0].face_up && !cards[1].face_up);
        assert!(engine.flipped().is_empty());
    }

    #[test]
    fn settle_for_other_pair_is_ignored() {
        let mut cards = table();
        let mut engine = MatchEngine::new(3);

        engine.flip(&mut cards, CardId(0));
        engine.flip(&mut cards, CardId(1));

        assert!(!engine.settle(&mut cards, [CardId(4), CardId(5)]));
        assert!(cards[0].face_up && cards[1].face_up);
        assert!(engine.awaiting_settle());
    }

    #[test]
    fn last_match_completes() {
        let mut cards = table();
        let mut engine = MatchEngine::new(3);

        for (a, b) in [(0, 4), (1, 5)] {
            engine.flip(&mut cards, CardId(a));
            engine.flip(&mut cards, CardId(b));
        }
        engine.flip(&mut cards, CardId(2));
        let outcome = engine.flip(&mut cards, CardId(3));

        assert!(matches!(
            outcome,
            FlipOutcome::Matched {
                score: 3,
                completed: true,
                ..
            }
        ));
        assert!(engine.completed());
        assert_eq!(engine.score(), 3);
    }

    #[test]
    fn unknown_card_rejected() {
        let mut cards = table();
        let mut engine = MatchEngine::new(3);
        assert_eq!(
            engine.flip(&mut cards, CardId(42)),
            FlipOutcome::Rejected(FlipRejection::UnknownCard)
        );
    }
}
