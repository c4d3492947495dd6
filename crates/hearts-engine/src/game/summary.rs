use super::state::{GameState, Phase, SEATS};
use crate::model::passing::PassingDirection;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// A read-only view of a game, suitable for logging or writing to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    pub phase: Phase,
    pub round_number: u32,
    pub passing_direction: PassingDirection,
    pub lead_suit: Option<Suit>,
    pub scores: [i32; SEATS],
    pub round_points: [u32; SEATS],
    pub hand_sizes: [usize; SEATS],
    pub active: [bool; SEATS],
    pub busted: bool,
}

impl GameSummary {
    pub fn capture(state: &GameState) -> Self {
        let players = state.players();
        GameSummary {
            phase: state.phase(),
            round_number: state.round_number(),
            passing_direction: state.passing_direction(),
            lead_suit: state.lead_suit(),
            scores: players.each_ref().map(|p| p.points()),
            round_points: players.each_ref().map(|p| p.round_points()),
            hand_sizes: players.each_ref().map(|p| p.count()),
            active: state.active(),
            busted: state.busted(),
        }
    }
}
