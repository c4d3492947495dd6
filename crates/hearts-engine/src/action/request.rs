use crate::action::{Action, Deal, Pass, Play};
use crate::error::{HeartsError, Result};
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A card as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
}

impl From<Card> for CardData {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
        }
    }
}

impl From<CardData> for Card {
    fn from(data: CardData) -> Self {
        Card::new(data.rank, data.suit)
    }
}

/// A move submitted from outside the engine, one JSON object per move:
///
/// ```json
/// {"kind": "Play", "player": 1, "card": 3}
/// ```
///
/// Indices are kept as raw JSON numbers so that negative, fractional or
/// oversized values surface as index errors rather than decode failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MoveRequest {
    Deal { cards: Vec<CardData> },
    Pass { player: Number, cards: [Number; 3] },
    Play { player: Number, card: Number },
}

impl MoveRequest {
    pub fn deal(deck: &Deck) -> Self {
        MoveRequest::Deal {
            cards: deck.cards().iter().copied().map(CardData::from).collect(),
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            MoveRequest::Deal { .. } => "Deal",
            MoveRequest::Pass { .. } => "Pass",
            MoveRequest::Play { .. } => "Play",
        }
    }

    pub fn into_action(self) -> Result<Action> {
        match self {
            MoveRequest::Deal { cards } => {
                Ok(Deal::new(cards.into_iter().map(Card::from).collect()).into())
            }
            MoveRequest::Pass { player, cards } => {
                let player = wire_index(&player, "player")?;
                let [a, b, c] = cards;
                let cards = [
                    wire_index(&a, "card")?,
                    wire_index(&b, "card")?,
                    wire_index(&c, "card")?,
                ];
                Ok(Pass::new(player, cards).into())
            }
            MoveRequest::Play { player, card } => {
                let player = wire_index(&player, "player")?;
                let card = wire_index(&card, "card")?;
                Ok(Play::new(player, card).into())
            }
        }
    }

    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

fn wire_index(value: &Number, what: &str) -> Result<usize> {
    value
        .as_u64()
        .and_then(|index| usize::try_from(index).ok())
        .ok_or_else(|| {
            HeartsError::invalid_index(format!(
                "{what} index {value} must be a non-negative integer"
            ))
        })
}

impl TryFrom<MoveRequest> for Action {
    type Error = HeartsError;

    fn try_from(request: MoveRequest) -> Result<Self> {
        request.into_action()
    }
}
