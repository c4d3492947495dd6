use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;

/// A playing card. Identity is suit and rank; the `passed` marker is the only
/// mutable part and does not take part in equality.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    passed: bool,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            passed: false,
        }
    }

    pub fn equals(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Rank-only comparison. Every card beats `None`, which lets a search for
    /// the highest card start from "nothing found yet".
    pub fn greater_than(&self, other: Option<&Card>) -> bool {
        match other {
            None => true,
            Some(other) => self.rank > other.rank,
        }
    }

    pub fn mark_passed(&mut self) {
        self.passed = true;
    }

    pub fn clear_passed(&mut self) {
        self.passed = false;
    }

    pub const fn is_passed(&self) -> bool {
        self.passed
    }

    pub const fn is_queen_of_spades(&self) -> bool {
        matches!(self.rank, Rank::Queen) && matches!(self.suit, Suit::Spades)
    }

    pub fn penalty_value(&self) -> u32 {
        if self.is_queen_of_spades() {
            13
        } else if self.suit.is_heart() {
            1
        } else {
            0
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Card {}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses the short form produced by `Display`, e.g. `QS` or `10H`.
impl FromStr for Card {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let split = text
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
            .ok_or_else(|| "empty card".to_string())?;
        let (rank_part, suit_part) = text.split_at(split);
        let rank = Rank::from_symbol(rank_part).ok_or_else(|| format!("bad rank in {text}"))?;
        let suit = match suit_part.to_ascii_uppercase().as_str() {
            "D" => Suit::Diamonds,
            "C" => Suit::Clubs,
            "H" => Suit::Hearts,
            "S" => Suit::Spades,
            _ => return Err(format!("bad suit in {text}")),
        };
        Ok(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Rank, Suit};

    #[test]
    fn equality_ignores_passed_marker() {
        let mut passed = Card::new(Rank::King, Suit::Spades);
        passed.mark_passed();
        assert!(passed.is_passed());
        assert_eq!(passed, Card::new(Rank::King, Suit::Spades));
        assert_ne!(passed, Card::new(Rank::King, Suit::Hearts));
        assert!(!passed.equals(&Card::new(Rank::Queen, Suit::Spades)));
    }

    #[test]
    fn greater_than_ignores_suit() {
        let ten_clubs = Card::new(Rank::Ten, Suit::Clubs);
        let nine_spades = Card::new(Rank::Nine, Suit::Spades);
        assert!(ten_clubs.greater_than(Some(&nine_spades)));
        assert!(!nine_spades.greater_than(Some(&ten_clubs)));
        assert!(!ten_clubs.greater_than(Some(&Card::new(Rank::Ten, Suit::Hearts))));
    }

    #[test]
    fn every_card_beats_no_card() {
        assert!(Card::new(Rank::Two, Suit::Diamonds).greater_than(None));
    }

    #[test]
    fn queen_of_spades_identified() {
        let card = Card::new(Rank::Queen, Suit::Spades);
        assert!(card.is_queen_of_spades());
        assert_eq!(card.penalty_value(), 13);
    }

    #[test]
    fn hearts_are_one_point() {
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).penalty_value(), 1);
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).penalty_value(), 0);
    }

    #[test]
    fn short_form_parses() {
        assert_eq!("QS".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Spades)));
        assert_eq!("10h".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert!("1X".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10D");
    }
}
