use crate::error::{HeartsError, Result};
use crate::model::card::Card;
use crate::model::hand::Hand;
use core::fmt;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BUST_THRESHOLD: i32 = 100;

/// Seat around the table. Index order is seating order and play rotates
/// clockwise, North → East → South → West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlayerPosition {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl PlayerPosition {
    pub const LOOP: [PlayerPosition; 4] = [
        PlayerPosition::North,
        PlayerPosition::East,
        PlayerPosition::South,
        PlayerPosition::West,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerPosition::North),
            1 => Some(PlayerPosition::East),
            2 => Some(PlayerPosition::South),
            3 => Some(PlayerPosition::West),
            _ => None,
        }
    }

    pub fn seat(index: usize) -> Result<Self> {
        Self::from_index(index).ok_or_else(|| {
            HeartsError::invalid_index(format!("seat index {index} must be less than 4"))
        })
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> PlayerPosition {
        match self {
            PlayerPosition::North => PlayerPosition::East,
            PlayerPosition::East => PlayerPosition::South,
            PlayerPosition::South => PlayerPosition::West,
            PlayerPosition::West => PlayerPosition::North,
        }
    }

    pub const fn previous(self) -> PlayerPosition {
        match self {
            PlayerPosition::North => PlayerPosition::West,
            PlayerPosition::East => PlayerPosition::North,
            PlayerPosition::South => PlayerPosition::East,
            PlayerPosition::West => PlayerPosition::South,
        }
    }

    pub const fn opposite(self) -> PlayerPosition {
        self.next().next()
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerPosition::North => "North",
            PlayerPosition::East => "East",
            PlayerPosition::South => "South",
            PlayerPosition::West => "West",
        };
        f.write_str(label)
    }
}

/// A participant: their hand, the card they have down on the current trick,
/// and their score.
#[derive(Debug, Clone)]
pub struct Player {
    hand: Hand,
    points: i32,
    round_points: u32,
    threshold: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Player {
    pub fn new(cards: Vec<Card>) -> Self {
        Self::with_score(cards, 0, DEFAULT_BUST_THRESHOLD)
    }

    pub fn with_score(cards: Vec<Card>, points: i32, threshold: i32) -> Self {
        Self {
            hand: Hand::with_cards(cards),
            points,
            round_points: 0,
            threshold,
        }
    }

    /// Cards still held, excluding the one played this trick.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.visible()
    }

    pub fn count(&self) -> usize {
        self.hand.len()
    }

    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(card)
    }

    pub fn card_at(&self, index: usize) -> Result<&Card> {
        self.hand.get(index)
    }

    pub fn play(&mut self, index: usize) -> Result<&mut Self> {
        self.hand.mark_played(index)?;
        Ok(self)
    }

    pub fn played(&self) -> Option<Card> {
        self.hand.played_card()
    }

    pub fn pass(&mut self, indices: [usize; 3]) -> Result<&mut Self> {
        self.hand.mark_passed(indices)?;
        Ok(self)
    }

    pub fn passed(&self) -> Vec<Card> {
        self.hand.passed()
    }

    pub fn release_passed(&mut self) -> Vec<Card> {
        self.hand.take_passed()
    }

    pub fn discard_played(&mut self) -> Option<Card> {
        self.hand.discard_played()
    }

    pub fn take(&mut self, card: Card) {
        self.hand.add(card);
    }

    /// Adds the penalty value of a won trick to this round's pending points.
    pub fn take_trick(&mut self, cards: &[Card]) -> &mut Self {
        self.round_points += cards.iter().map(Card::penalty_value).sum::<u32>();
        self
    }

    pub fn add_round(&mut self) -> &mut Self {
        // Round points never exceed 26, well inside i32.
        self.points += self.round_points as i32;
        self.round_points = 0;
        self
    }

    pub fn add26(&mut self) -> &mut Self {
        self.points += 26;
        self
    }

    pub fn subtract26(&mut self) -> &mut Self {
        self.points -= 26;
        self
    }

    /// Only finalized points count; call `add_round` first.
    pub fn busted(&self) -> bool {
        self.points >= self.threshold
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn round_points(&self) -> u32 {
        self.round_points
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }
}
