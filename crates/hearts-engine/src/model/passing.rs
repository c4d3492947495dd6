use crate::model::player::PlayerPosition;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Where the three passed cards go in a given round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassingDirection {
    Left,
    Right,
    Across,
    Hold,
}

impl PassingDirection {
    pub const CYCLE: [PassingDirection; 4] = [
        PassingDirection::Left,
        PassingDirection::Right,
        PassingDirection::Across,
        PassingDirection::Hold,
    ];

    pub const fn next(self) -> PassingDirection {
        match self {
            PassingDirection::Left => PassingDirection::Right,
            PassingDirection::Right => PassingDirection::Across,
            PassingDirection::Across => PassingDirection::Hold,
            PassingDirection::Hold => PassingDirection::Left,
        }
    }

    pub const fn requires_selection(self) -> bool {
        !matches!(self, PassingDirection::Hold)
    }

    /// Number of cards each player must have marked before passes resolve.
    pub const fn cards_per_seat(self) -> usize {
        if self.requires_selection() { 3 } else { 0 }
    }

    pub const fn target(self, seat: PlayerPosition) -> PlayerPosition {
        match self {
            PassingDirection::Left => seat.next(),
            PassingDirection::Right => seat.previous(),
            PassingDirection::Across => seat.opposite(),
            PassingDirection::Hold => seat,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PassingDirection::Left => "Left",
            PassingDirection::Right => "Right",
            PassingDirection::Across => "Across",
            PassingDirection::Hold => "Hold",
        }
    }
}

impl fmt::Display for PassingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::PassingDirection;
    use crate::model::player::PlayerPosition;

    #[test]
    fn direction_cycle_wraps() {
        assert_eq!(PassingDirection::Hold.next(), PassingDirection::Left);
        assert_eq!(PassingDirection::Left.next(), PassingDirection::Right);
    }

    #[test]
    fn target_mapping_works() {
        assert_eq!(
            PassingDirection::Left.target(PlayerPosition::North),
            PlayerPosition::East
        );
        assert_eq!(
            PassingDirection::Right.target(PlayerPosition::North),
            PlayerPosition::West
        );
        assert_eq!(
            PassingDirection::Across.target(PlayerPosition::East),
            PlayerPosition::West
        );
        assert_eq!(
            PassingDirection::Hold.target(PlayerPosition::South),
            PlayerPosition::South
        );
    }

    #[test]
    fn hold_passes_nothing() {
        assert_eq!(PassingDirection::Hold.cards_per_seat(), 0);
        assert_eq!(PassingDirection::Across.cards_per_seat(), 3);
    }
}
