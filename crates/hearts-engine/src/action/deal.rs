use crate::action::Action;
use crate::error::{HeartsError, Result};
use crate::game::state::{GameState, Phase, SEATS};
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::player::Player;
use std::collections::HashSet;
use tracing::{Level, event};

/// Hands out a full deck, one card at a time around the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    cards: Vec<Card>,
}

impl Deal {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn act(self, state: &mut GameState) -> Result<Option<Action>> {
        if state.phase() != Phase::Deal {
            return Err(HeartsError::invalid_action(format!(
                "cannot deal during the {} phase",
                state.phase()
            )));
        }

        if state.busted() {
            return Err(HeartsError::invalid_action(
                "cannot deal because a player has busted",
            ));
        }

        if state.players().iter().any(Player::has_cards) {
            return Err(HeartsError::invalid_action(
                "cannot deal because one or more players already have cards",
            ));
        }

        if self.cards.len() != Deck::SIZE {
            return Err(HeartsError::invalid_action(format!(
                "a deal needs {} cards but received {}",
                Deck::SIZE,
                self.cards.len()
            )));
        }

        let mut seen = HashSet::with_capacity(Deck::SIZE);
        for card in &self.cards {
            if !seen.insert((card.suit, card.rank)) {
                return Err(HeartsError::invalid_action(format!(
                    "{card} appears more than once in the deal"
                )));
            }
        }

        for (position, mut card) in self.cards.into_iter().enumerate() {
            card.clear_passed();
            state.players_mut()[position % SEATS].take(card);
        }

        let direction = state.passing_direction();
        state.set_phase(Phase::Pass).set_lead_suit(None);
        event!(
            Level::DEBUG,
            round = state.round_number(),
            direction = %direction,
            "cards dealt"
        );

        if direction.requires_selection() {
            state.activate_all();
            Ok(None)
        } else {
            state.deactivate_all();
            Ok(Some(Action::EndPass))
        }
    }
}

impl From<Deck> for Deal {
    fn from(deck: Deck) -> Self {
        Self::new(deck.into_cards())
    }
}
