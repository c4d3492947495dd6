use crate::error::{HeartsError, Result, check_index};
use crate::game::rules::Rules;
use crate::model::passing::PassingDirection;
use crate::model::player::{Player, PlayerPosition};
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::array;

pub const SEATS: usize = 4;

/// Phases advance Deal → Pass → Play, then back to Deal for the next round
/// or on to Over once somebody has busted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Deal,
    Pass,
    Play,
    Over,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Deal => "Deal",
            Phase::Pass => "Pass",
            Phase::Play => "Play",
            Phase::Over => "Over",
        };
        f.write_str(label)
    }
}

/// Everything the actions mutate: four players in seating order, which seats
/// may move, the phase, and the suit led on the current trick.
#[derive(Debug, Clone)]
pub struct GameState {
    players: [Player; SEATS],
    active: [bool; SEATS],
    phase: Phase,
    lead_suit: Option<Suit>,
    passing_direction: PassingDirection,
    round_number: u32,
    rules: Rules,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_rules(Rules::default())
    }
}

impl GameState {
    /// Builds a game around existing players. Anything other than four players
    /// is rejected.
    pub fn new(players: Vec<Player>) -> Result<Self> {
        Self::from_players(players, Rules::default())
    }

    pub fn from_players(players: Vec<Player>, rules: Rules) -> Result<Self> {
        let count = players.len();
        let players: [Player; SEATS] = players.try_into().map_err(|_| {
            HeartsError::invalid_index(format!(
                "a game requires {SEATS} players but received {count}"
            ))
        })?;
        Ok(Self::assemble(players, rules))
    }

    /// Four empty-handed players at zero points with the configured threshold.
    pub fn with_rules(rules: Rules) -> Self {
        let players = array::from_fn(|_| Player::with_score(Vec::new(), 0, rules.bust_threshold));
        Self::assemble(players, rules)
    }

    fn assemble(players: [Player; SEATS], rules: Rules) -> Self {
        Self {
            players,
            active: [false; SEATS],
            phase: Phase::Deal,
            lead_suit: None,
            passing_direction: PassingDirection::CYCLE[0],
            round_number: 1,
            rules,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: Phase) -> &mut Self {
        self.phase = phase;
        self
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead_suit
    }

    pub fn set_lead_suit(&mut self, suit: Option<Suit>) -> &mut Self {
        self.lead_suit = suit;
        self
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn passing_direction(&self) -> PassingDirection {
        self.passing_direction
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Moves the round counter and passing direction on to the next round.
    pub fn advance_round(&mut self) {
        self.round_number += 1;
        self.passing_direction = if self.rules.rotate_passing {
            self.passing_direction.next()
        } else {
            PassingDirection::Left
        };
    }

    pub fn is_active(&self, seat: usize) -> Result<bool> {
        Ok(self.active[check_index(seat, SEATS, "seat")?])
    }

    pub fn active(&self) -> [bool; SEATS] {
        self.active
    }

    pub fn active_seats(&self) -> Vec<usize> {
        (0..SEATS).filter(|&seat| self.active[seat]).collect()
    }

    /// Exactly the given seats become active; every other seat is cleared.
    pub fn activate(&mut self, seats: &[usize]) -> Result<&mut Self> {
        for &seat in seats {
            check_index(seat, SEATS, "seat")?;
        }
        self.active = array::from_fn(|seat| seats.contains(&seat));
        Ok(self)
    }

    pub fn activate_all(&mut self) -> &mut Self {
        self.active = [true; SEATS];
        self
    }

    pub fn deactivate(&mut self, seat: usize) -> Result<&mut Self> {
        self.active[check_index(seat, SEATS, "seat")?] = false;
        Ok(self)
    }

    pub fn deactivate_all(&mut self) -> &mut Self {
        self.active = [false; SEATS];
        self
    }

    pub fn has_active(&self) -> bool {
        self.active.iter().any(|&active| active)
    }

    pub fn player(&self, seat: usize) -> Result<&Player> {
        Ok(&self.players[check_index(seat, SEATS, "seat")?])
    }

    pub fn player_mut(&mut self, seat: usize) -> Result<&mut Player> {
        Ok(&mut self.players[check_index(seat, SEATS, "seat")?])
    }

    pub fn players(&self) -> &[Player; SEATS] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player; SEATS] {
        &mut self.players
    }

    pub fn next_seat(&self, seat: usize) -> Result<usize> {
        Ok(PlayerPosition::seat(seat)?.next().index())
    }

    pub fn score(&self, seat: usize) -> Result<i32> {
        Ok(self.player(seat)?.points())
    }

    pub fn busted(&self) -> bool {
        self.players.iter().any(Player::busted)
    }
}
