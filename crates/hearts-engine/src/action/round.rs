use crate::action::Action;
use crate::error::{HeartsError, Result};
use crate::game::state::{GameState, Phase};
use crate::model::player::Player;
use tracing::{Level, event};

/// Folds every player's round points into their score once all cards are
/// gone. Leads into [`end_game`] when somebody reached their threshold,
/// otherwise opens the next round's deal.
pub fn end_round(state: &mut GameState) -> Result<Option<Action>> {
    if state.phase() != Phase::Play {
        return Err(HeartsError::invalid_action(format!(
            "cannot end the round during the {} phase",
            state.phase()
        )));
    }

    if state.players().iter().any(Player::has_cards) {
        return Err(HeartsError::invalid_action(
            "cannot end the round while players still hold cards",
        ));
    }

    if state.players().iter().any(|p| p.played().is_some()) {
        return Err(HeartsError::invalid_action(
            "cannot end the round while a trick is on the table",
        ));
    }

    for player in state.players_mut().iter_mut() {
        player.add_round();
    }
    state.deactivate_all().set_lead_suit(None);

    let scores: Vec<i32> = state.players().iter().map(Player::points).collect();
    event!(
        Level::INFO,
        round = state.round_number(),
        scores = ?scores,
        "round finished"
    );

    if state.busted() {
        return Ok(Some(Action::EndGame));
    }

    state.advance_round();
    state.set_phase(Phase::Deal);
    Ok(None)
}

/// Closes the game. Only valid once a player has busted.
pub fn end_game(state: &mut GameState) -> Result<Option<Action>> {
    if state.phase() != Phase::Play {
        return Err(HeartsError::invalid_action(format!(
            "cannot end the game during the {} phase",
            state.phase()
        )));
    }

    if !state.busted() {
        return Err(HeartsError::invalid_action(
            "cannot end the game before a player has busted",
        ));
    }

    state.set_phase(Phase::Over).deactivate_all();
    event!(Level::INFO, round = state.round_number(), "game over");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::{end_game, end_round};
    use crate::action::Action;
    use crate::error::ErrorKind;
    use crate::game::state::{GameState, Phase};
    use crate::model::card::Card;
    use crate::model::passing::PassingDirection;
    use crate::model::player::Player;

    fn finished_round(points: [i32; 4], won: [&[&str]; 4]) -> GameState {
        let players = points
            .iter()
            .zip(won)
            .map(|(&points, cards)| {
                let mut player = Player::with_score(Vec::new(), points, 100);
                let taken: Vec<Card> = cards.iter().map(|c| c.parse().unwrap()).collect();
                player.take_trick(&taken);
                player
            })
            .collect();
        let mut state = GameState::new(players).unwrap();
        state.set_phase(Phase::Play).activate(&[2]).unwrap();
        state
    }

    #[test]
    fn folds_round_points_and_opens_next_deal() {
        let mut state = finished_round([10, 0, 5, 20], [&["QS"], &["2H", "3H"], &[], &[]]);
        assert_eq!(end_round(&mut state).unwrap(), None);

        let scores: Vec<i32> = (0..4).map(|seat| state.score(seat).unwrap()).collect();
        assert_eq!(scores, vec![23, 2, 5, 20]);
        assert!(state.players().iter().all(|p| p.round_points() == 0));
        assert_eq!(state.phase(), Phase::Deal);
        assert_eq!(state.round_number(), 2);
        assert_eq!(state.passing_direction(), PassingDirection::Right);
        assert!(!state.has_active());
    }

    #[test]
    fn busting_leads_into_end_game() {
        let mut state = finished_round([90, 0, 0, 0], [&["QS"], &[], &[], &[]]);
        assert_eq!(end_round(&mut state).unwrap(), Some(Action::EndGame));
        assert_eq!(state.phase(), Phase::Play);
        assert_eq!(state.round_number(), 1);

        assert_eq!(end_game(&mut state).unwrap(), None);
        assert_eq!(state.phase(), Phase::Over);
        assert_eq!(state.score(0).unwrap(), 103);
    }

    #[test]
    fn rejects_while_cards_remain() {
        let players = vec![
            Player::new(vec!["2C".parse().unwrap()]),
            Player::default(),
            Player::default(),
            Player::default(),
        ];
        let mut state = GameState::new(players).unwrap();
        state.set_phase(Phase::Play);
        let err = end_round(&mut state).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAction);
    }

    #[test]
    fn rejects_outside_play_phase() {
        let mut state = finished_round([0; 4], [&[], &[], &[], &[]]);
        state.set_phase(Phase::Pass);
        assert!(end_round(&mut state).is_err());
        assert!(end_game(&mut state).is_err());
    }

    #[test]
    fn end_game_requires_a_bust() {
        let mut state = finished_round([0; 4], [&[], &[], &[], &[]]);
        let err = end_game(&mut state).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAction);
        assert_eq!(state.phase(), Phase::Play);
    }
}
