use crate::error::{HeartsError, Result, check_index};
use crate::model::card::Card;
use std::vec::Vec;

/// The cards a player holds, kept sorted by suit then rank.
///
/// A played card stays in `cards` until the trick resolves; `played` is the
/// position of that card, so the visible view is everything except it.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    played: Option<usize>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            played: None,
        }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self {
            cards,
            played: None,
        };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        let played = self.played_card();
        self.cards.push(card);
        self.sort();
        self.played = played.and_then(|card| self.position(card));
    }

    pub fn contains(&self, card: Card) -> bool {
        self.visible().any(|c| *c == card)
    }

    /// Number of cards still held, not counting the played one.
    pub fn len(&self) -> usize {
        self.cards.len() - usize::from(self.played.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn visible(&self) -> impl Iterator<Item = &Card> {
        let played = self.played;
        self.cards
            .iter()
            .enumerate()
            .filter(move |(idx, _)| Some(*idx) != played)
            .map(|(_, card)| card)
    }

    pub fn get(&self, index: usize) -> Result<&Card> {
        let raw = self.raw_index(index)?;
        Ok(&self.cards[raw])
    }

    pub fn played_card(&self) -> Option<Card> {
        self.played.map(|idx| self.cards[idx])
    }

    /// Marks the `index`-th visible card as played, replacing any earlier mark.
    pub fn mark_played(&mut self, index: usize) -> Result<Card> {
        let raw = self.raw_index(index)?;
        self.played = Some(raw);
        Ok(self.cards[raw])
    }

    /// Marks the three visible cards at `indices` as passed. Nothing is marked
    /// unless every index is in range and distinct.
    pub fn mark_passed(&mut self, indices: [usize; 3]) -> Result<()> {
        let mut raw = [0usize; 3];
        for (slot, index) in raw.iter_mut().zip(indices) {
            *slot = self.raw_index(index)?;
        }
        if raw[0] == raw[1] || raw[0] == raw[2] || raw[1] == raw[2] {
            return Err(HeartsError::invalid_action(format!(
                "cannot pass the same card twice ({indices:?})"
            )));
        }
        for idx in raw {
            self.cards[idx].mark_passed();
        }
        Ok(())
    }

    pub fn passed(&self) -> Vec<Card> {
        self.cards.iter().filter(|c| c.is_passed()).copied().collect()
    }

    /// Removes the passed cards and returns them with their marker cleared.
    pub fn take_passed(&mut self) -> Vec<Card> {
        let played = self.played_card();
        let (mut passed, kept): (Vec<Card>, Vec<Card>) =
            self.cards.drain(..).partition(|c| c.is_passed());
        self.cards = kept;
        self.played = played.and_then(|card| self.position(card));
        for card in passed.iter_mut() {
            card.clear_passed();
        }
        passed
    }

    /// Removes the played card from the hand and clears the mark.
    pub fn discard_played(&mut self) -> Option<Card> {
        let idx = self.played.take()?;
        Some(self.cards.remove(idx))
    }

    fn raw_index(&self, index: usize) -> Result<usize> {
        check_index(index, self.len(), "card")?;
        match self.played {
            Some(played) if index >= played => Ok(index + 1),
            _ => Ok(index),
        }
    }

    fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|c| *c == card)
    }

    fn sort(&mut self) {
        self.cards
            .sort_by(|a, b| a.suit.cmp(&b.suit).then(a.rank.cmp(&b.rank)));
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::error::ErrorKind;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    fn card(text: &str) -> Card {
        text.parse().unwrap()
    }

    fn cards(text: &[&str]) -> Vec<Card> {
        text.iter().map(|t| card(t)).collect()
    }

    #[test]
    fn cards_are_sorted_by_suit_then_rank() {
        let mut hand = Hand::new();
        hand.add(Card::new(Rank::King, Suit::Spades));
        hand.add(Card::new(Rank::Two, Suit::Clubs));
        hand.add(Card::new(Rank::Ace, Suit::Diamonds));
        let ordered: Vec<_> = hand.visible().copied().collect();
        assert_eq!(ordered, cards(&["AD", "2C", "KS"]));
    }

    #[test]
    fn played_card_is_hidden_from_the_view() {
        let mut hand = Hand::with_cards(cards(&["2C", "3C", "4C"]));
        assert_eq!(hand.mark_played(1).unwrap(), card("3C"));
        assert_eq!(hand.len(), 2);
        assert_eq!(*hand.get(1).unwrap(), card("4C"));
        assert!(!hand.contains(card("3C")));
    }

    #[test]
    fn replaying_moves_the_mark() {
        let mut hand = Hand::with_cards(cards(&["2C", "3C", "4C"]));
        hand.mark_played(0).unwrap();
        // visible view is now [3C, 4C]
        hand.mark_played(1).unwrap();
        assert_eq!(hand.played_card(), Some(card("4C")));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn adding_keeps_the_played_mark_on_the_same_card() {
        let mut hand = Hand::with_cards(cards(&["5H", "9H"]));
        hand.mark_played(1).unwrap();
        hand.add(card("2H"));
        assert_eq!(hand.played_card(), Some(card("9H")));
    }

    #[test]
    fn pass_marks_are_all_or_nothing() {
        let mut hand = Hand::with_cards(cards(&["2C", "3C", "4C"]));
        let err = hand.mark_passed([0, 1, 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIndex);
        assert!(hand.passed().is_empty());

        let err = hand.mark_passed([0, 1, 1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAction);
        assert!(hand.passed().is_empty());
    }

    #[test]
    fn take_passed_clears_markers() {
        let mut hand = Hand::with_cards(cards(&["2C", "3C", "4C", "5C"]));
        hand.mark_passed([0, 2, 3]).unwrap();
        let moved = hand.take_passed();
        assert_eq!(moved, cards(&["2C", "4C", "5C"]));
        assert!(moved.iter().all(|c| !c.is_passed()));
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn discard_played_removes_card() {
        let mut hand = Hand::with_cards(cards(&["2C", "3C"]));
        assert_eq!(hand.discard_played(), None);
        hand.mark_played(0).unwrap();
        assert_eq!(hand.discard_played(), Some(card("2C")));
        assert_eq!(hand.len(), 1);
        assert_eq!(hand.played_card(), None);
    }
}
