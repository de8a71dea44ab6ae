use crate::types::{Card, Difficulty, RoundStatus};

/// Outcome of a finished round, with the messages shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundSummary {
    pub win: bool,
    pub elapsed_seconds: u32,
    pub score: u32,
}

impl RoundSummary {
    pub fn headline(&self) -> &'static str {
        if self.win {
            "Winner!"
        } else {
            "Game Over!"
        }
    }

    pub fn detail(&self) -> String {
        if self.win {
            format!("You finished in {} seconds!", self.elapsed_seconds)
        } else {
            let plural = if self.score == 1 { "" } else { "s" };
            format!("You got {} point{}", self.score, plural)
        }
    }

    /// Label of the button that deals the next round.
    pub fn restart_label(&self) -> &'static str {
        if self.win {
            "Play again"
        } else {
            "Try again"
        }
    }
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RoundSnapshot {
    pub status: RoundStatus,
    pub difficulty: Difficulty,
    pub pair_count: u32,
    pub score: u32,
    pub seconds_remaining: u32,
    pub round_seconds: u32,
    pub generation: u64,
    pub muted: bool,
    pub awaiting_settle: bool,
    pub summary: Option<RoundSummary>,
    pub cards: Vec<Card>,
}
