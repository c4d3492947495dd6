//! The moves that drive a game.
//!
//! Every variant validates its preconditions against the [`GameState`] before
//! touching it, so a rejected move leaves the state exactly as it was. A
//! successful move may name the move that has to follow it; the dispatcher
//! keeps running those until the chain ends.

pub mod deal;
pub mod pass;
pub mod play;
pub mod request;
pub mod round;

use crate::error::Result;
use crate::game::dispatcher::Act;
use crate::game::state::GameState;

pub use deal::Deal;
pub use pass::Pass;
pub use play::Play;
pub use request::{CardData, MoveRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Deal(Deal),
    Pass(Pass),
    EndPass,
    Play(Play),
    TakeTrick,
    EndRound,
    EndGame,
}

impl Action {
    pub const fn kind(&self) -> &'static str {
        match self {
            Action::Deal(_) => "Deal",
            Action::Pass(_) => "Pass",
            Action::EndPass => "EndPass",
            Action::Play(_) => "Play",
            Action::TakeTrick => "TakeTrick",
            Action::EndRound => "EndRound",
            Action::EndGame => "EndGame",
        }
    }

    pub fn act(self, state: &mut GameState) -> Result<Option<Action>> {
        match self {
            Action::Deal(deal) => deal.act(state),
            Action::Pass(pass) => pass.act(state),
            Action::EndPass => pass::end_pass(state),
            Action::Play(play) => play.act(state),
            Action::TakeTrick => play::take_trick(state),
            Action::EndRound => round::end_round(state),
            Action::EndGame => round::end_game(state),
        }
    }
}

impl Act for Action {
    fn act(self, state: &mut GameState) -> Result<Option<Self>> {
        Action::act(self, state)
    }

    fn name(&self) -> &'static str {
        self.kind()
    }
}

impl From<Deal> for Action {
    fn from(deal: Deal) -> Self {
        Action::Deal(deal)
    }
}

impl From<Pass> for Action {
    fn from(pass: Pass) -> Self {
        Action::Pass(pass)
    }
}

impl From<Play> for Action {
    fn from(play: Play) -> Self {
        Action::Play(play)
    }
}
