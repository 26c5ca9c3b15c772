//! Players and box counts

use core::fmt;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The opponent
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// One-based number shown to humans
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// Running box counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scores {
    boxes: [u8; 2],
}

impl Scores {
    pub const fn new() -> Self {
        Self { boxes: [0; 2] }
    }

    /// Boxes won by `player`
    pub fn get(&self, player: Player) -> u8 {
        self.boxes[player.index()]
    }

    /// Credit `count` boxes to `player`
    pub fn add(&mut self, player: Player, count: u8) {
        let slot = &mut self.boxes[player.index()];
        *slot = slot.saturating_add(count);
    }

    /// Boxes won by both players together
    pub fn total(&self) -> u8 {
        self.boxes[0] + self.boxes[1]
    }

    /// Snapshot as a final result
    pub fn finish(&self) -> FinalScore {
        FinalScore {
            first: self.boxes[0],
            second: self.boxes[1],
        }
    }
}

/// Scores at the end of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FinalScore {
    /// Boxes won by player one
    pub first: u8,
    /// Boxes won by player two
    pub second: u8,
}

impl FinalScore {
    /// Player with more boxes, or `None` on a tie
    pub fn leader(&self) -> Option<Player> {
        match self.first.cmp(&self.second) {
            core::cmp::Ordering::Greater => Some(Player::One),
            core::cmp::Ordering::Less => Some(Player::Two),
            core::cmp::Ordering::Equal => None,
        }
    }

    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::One => self.first,
            Player::Two => self.second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other().other(), Player::Two);
        assert_eq!(Player::Two.number(), 2);
    }

    #[test]
    fn test_scores_accumulate() {
        let mut scores = Scores::new();
        scores.add(Player::One, 2);
        scores.add(Player::Two, 1);
        scores.add(Player::One, 1);
        assert_eq!(scores.get(Player::One), 3);
        assert_eq!(scores.get(Player::Two), 1);
        assert_eq!(scores.total(), 4);
    }

    #[test]
    fn test_leader() {
        assert_eq!(FinalScore { first: 3, second: 1 }.leader(), Some(Player::One));
        assert_eq!(FinalScore { first: 0, second: 4 }.leader(), Some(Player::Two));
        assert_eq!(FinalScore { first: 2, second: 2 }.leader(), None);
    }
}
