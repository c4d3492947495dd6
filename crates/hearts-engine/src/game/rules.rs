use crate::model::player::DEFAULT_BUST_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Table rules fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Score at which a player busts and the game ends.
    #[serde(default = "default_bust_threshold")]
    pub bust_threshold: i32,
    /// A player holding the led suit must play it.
    #[serde(default = "default_true")]
    pub follow_suit: bool,
    /// Cycle Left, Right, Across, Hold across rounds; otherwise always Left.
    #[serde(default = "default_true")]
    pub rotate_passing: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            bust_threshold: DEFAULT_BUST_THRESHOLD,
            follow_suit: true,
            rotate_passing: true,
        }
    }
}

fn default_bust_threshold() -> i32 {
    DEFAULT_BUST_THRESHOLD
}

fn default_true() -> bool {
    true
}
