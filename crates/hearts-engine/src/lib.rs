#![deny(warnings)]
//! Rules engine for four-player Hearts.
//!
//! A [`GameState`] is only ever changed through [`Action`]s run by
//! [`dispatch`], which also runs whatever follow-up each action asks for
//! (resolving the pass, scoring a trick, closing the round).

pub mod action;
pub mod error;
pub mod game;
pub mod model;

pub use action::{Action, MoveRequest};
pub use error::{ErrorKind, HeartsError, Result};
pub use game::{GameState, GameSummary, Phase, Rules, dispatch};
