use crate::action::Action;
use crate::error::{HeartsError, Result};
use crate::game::state::{GameState, Phase, SEATS};
use crate::model::card::Card;
use crate::model::player::Player;
use tracing::{Level, event};

/// The active seat putting one card on the trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    pub player: usize,
    pub card: usize,
}

impl Play {
    pub fn new(player: usize, card: usize) -> Self {
        Self { player, card }
    }

    pub fn act(self, state: &mut GameState) -> Result<Option<Action>> {
        let active = state.is_active(self.player)?;

        if state.phase() != Phase::Play {
            return Err(HeartsError::invalid_action(format!(
                "cards cannot be played during the {} phase",
                state.phase()
            )));
        }

        if !active || state.active_seats().len() != 1 {
            return Err(HeartsError::invalid_action(
                "can only play a card when it is that player's turn",
            ));
        }

        let player = state.player(self.player)?;
        if player.played().is_some() {
            return Err(HeartsError::invalid_action("player already played a card"));
        }

        let card = *player.card_at(self.card)?;
        let lead = state.lead_suit();
        if let Some(suit) = lead {
            if state.rules().follow_suit
                && card.suit != suit
                && player.cards().any(|held| held.suit == suit)
            {
                return Err(HeartsError::invalid_action(format!(
                    "{card} does not follow the led suit {suit}"
                )));
            }
        }

        let next = state.next_seat(self.player)?;
        state.player_mut(self.player)?.play(self.card)?;
        if lead.is_none() {
            state.set_lead_suit(Some(card.suit));
        }
        state.activate(&[next])?;
        event!(Level::DEBUG, seat = self.player, card = %card, "card played");

        if state.players().iter().all(|p| p.played().is_some()) {
            Ok(Some(Action::TakeTrick))
        } else {
            Ok(None)
        }
    }
}

/// Awards the finished trick to the highest card of the led suit.
///
/// Off-suit cards can never win but still go to the winner, so penalty cards
/// discarded onto a trick are scored against whoever takes it.
pub fn take_trick(state: &mut GameState) -> Result<Option<Action>> {
    let Some(lead) = state.lead_suit() else {
        return Err(HeartsError::invalid_action(
            "cannot take trick because no lead suit is set",
        ));
    };

    let mut cards: Vec<Card> = Vec::with_capacity(SEATS);
    let mut highest: Option<Card> = None;
    let mut winner = 0usize;
    for (seat, player) in state.players().iter().enumerate() {
        let card = player.played().ok_or_else(|| {
            HeartsError::invalid_action(
                "cannot take trick because not all players have played a card",
            )
        })?;
        cards.push(card);

        if card.suit != lead {
            continue;
        }
        if card.greater_than(highest.as_ref()) {
            winner = seat;
            highest = Some(card);
        }
    }

    let Some(winning_card) = highest else {
        return Err(HeartsError::invalid_action(
            "cannot take trick because no player played on suit",
        ));
    };

    state.player_mut(winner)?.take_trick(&cards);
    for player in state.players_mut().iter_mut() {
        player.discard_played();
    }
    state.set_lead_suit(None);
    state.activate(&[winner])?;
    event!(
        Level::DEBUG,
        winner,
        card = %winning_card,
        penalty = cards.iter().map(Card::penalty_value).sum::<u32>(),
        "trick taken"
    );

    if state.players().iter().any(Player::has_cards) {
        Ok(None)
    } else {
        Ok(Some(Action::EndRound))
    }
}
