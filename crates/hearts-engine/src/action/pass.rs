use crate::action::Action;
use crate::error::{HeartsError, Result};
use crate::game::state::{GameState, Phase};
use crate::model::card::Card;
use crate::model::player::PlayerPosition;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use std::array;
use tracing::{Level, event};

const TWO_OF_CLUBS: Card = Card::new(Rank::Two, Suit::Clubs);

/// One seat choosing the three cards it will pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pass {
    pub player: usize,
    pub cards: [usize; 3],
}

impl Pass {
    pub fn new(player: usize, cards: [usize; 3]) -> Self {
        Self { player, cards }
    }

    pub fn act(self, state: &mut GameState) -> Result<Option<Action>> {
        let active = state.is_active(self.player)?;

        if state.phase() != Phase::Pass {
            return Err(HeartsError::invalid_action("it is not the passing phase"));
        }

        if !active {
            return Err(HeartsError::invalid_action(
                "player has already passed cards",
            ));
        }

        state.player_mut(self.player)?.pass(self.cards)?;
        state.deactivate(self.player)?;
        event!(
            Level::DEBUG,
            seat = self.player,
            cards = ?self.cards,
            "cards marked for passing"
        );

        if state.has_active() {
            Ok(None)
        } else {
            Ok(Some(Action::EndPass))
        }
    }
}

/// Moves every seat's marked cards to the seat the round's direction points
/// at, then opens play with the holder of the Two of Clubs on lead.
pub fn end_pass(state: &mut GameState) -> Result<Option<Action>> {
    if state.phase() != Phase::Pass {
        return Err(HeartsError::invalid_action(format!(
            "cannot end pass phase, the current phase is {}",
            state.phase()
        )));
    }

    if state.has_active() {
        return Err(HeartsError::invalid_action("a player still has not passed"));
    }

    let direction = state.passing_direction();
    let required = direction.cards_per_seat();
    for seat in PlayerPosition::LOOP {
        let marked = state.players()[seat.index()].passed().len();
        if marked != required {
            return Err(HeartsError::invalid_action(format!(
                "{seat} has {marked} cards marked to pass but a {direction} round needs {required}"
            )));
        }
    }

    let leader = PlayerPosition::LOOP
        .iter()
        .copied()
        .find(|seat| state.players()[seat.index()].holds(TWO_OF_CLUBS))
        .map(|holder| {
            let passing_it = state.players()[holder.index()]
                .passed()
                .contains(&TWO_OF_CLUBS);
            if passing_it {
                direction.target(holder)
            } else {
                holder
            }
        })
        .ok_or_else(|| HeartsError::invalid_action("no player holds the two of clubs"))?;

    let outgoing: [Vec<Card>; 4] =
        array::from_fn(|seat| state.players_mut()[seat].release_passed());
    for (seat, cards) in PlayerPosition::LOOP.into_iter().zip(outgoing) {
        let receiver = &mut state.players_mut()[direction.target(seat).index()];
        for card in cards {
            receiver.take(card);
        }
    }

    state.set_phase(Phase::Play).set_lead_suit(None);
    state.activate(&[leader.index()])?;
    event!(Level::DEBUG, direction = %direction, leader = %leader, "passing resolved");
    Ok(None)
}
