//! Completion and turn engine
//!
//! Applies one move at a time: draw the line, claim any boxes it closed,
//! and decide who moves next. Closing a box earns another move.

use core::fmt;

use heapless::Vec;

use super::grid::{BoxId, DrawResult, Grid};
use super::moves::Move;
use super::score::{FinalScore, Player, Scores};
use crate::config::BoardSize;

/// What a move did
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveOutcome {
    /// Whether the line was drawn
    pub result: DrawResult,
    /// Boxes closed by this move (at most two)
    pub completed: Vec<BoxId, 2>,
    /// Player who made the move
    pub player: Player,
    /// Player to move next
    pub next_player: Player,
    /// Set when this move filled the board
    pub game_over: Option<FinalScore>,
}

impl MoveOutcome {
    fn rejected(result: DrawResult, player: Player) -> Self {
        Self {
            result,
            completed: Vec::new(),
            player,
            next_player: player,
            game_over: None,
        }
    }

    /// Number of lines drawn (0 or 1)
    pub fn lines_drawn(&self) -> u8 {
        u8::from(self.result == DrawResult::Drawn)
    }

    /// Whether the mover keeps the turn
    pub fn extra_turn(&self) -> bool {
        !self.completed.is_empty()
    }
}

/// Move rejected by [`Game::try_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveError {
    /// Line does not exist on this board
    OutOfBounds,
    /// Line was drawn earlier
    AlreadyDrawn,
    /// Board is already full
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "line is off the board"),
            MoveError::AlreadyDrawn => write!(f, "line already drawn"),
            MoveError::GameOver => write!(f, "game is over"),
        }
    }
}

/// A game in progress
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Game {
    grid: Grid,
    current: Player,
    scores: Scores,
}

impl Game {
    /// Start a new game; player one moves first
    pub fn new(size: BoardSize) -> Self {
        Self {
            grid: Grid::new(size),
            current: Player::One,
            scores: Scores::new(),
        }
    }

    /// Start over on a (possibly different) board
    pub fn reset(&mut self, size: BoardSize) {
        *self = Self::new(size);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> BoardSize {
        self.grid.size()
    }

    /// Player to move
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Whether every box is owned
    pub fn is_over(&self) -> bool {
        self.grid.completed_boxes() >= self.grid.total_boxes()
    }

    /// Final scores once the board is full
    pub fn final_score(&self) -> Option<FinalScore> {
        self.is_over().then(|| self.scores.finish())
    }

    /// Apply a move for the current player
    ///
    /// Rejected moves leave the game untouched and report the reason in
    /// `result`. Once the board is full every line is drawn, so further
    /// moves come back as `AlreadyDrawn` or `OutOfBounds`.
    pub fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        let player = self.current;

        let Some(segment) = self.grid.segment_for(&mv) else {
            return MoveOutcome::rejected(DrawResult::OutOfBounds, player);
        };

        let result = self.grid.draw(segment);
        if result != DrawResult::Drawn {
            return MoveOutcome::rejected(result, player);
        }

        // Check both neighbours before deciding the turn
        let mut completed = Vec::new();
        for id in self.grid.adjacent_boxes(segment) {
            if self.grid.is_box_closed(id) && self.grid.claim(id, player) {
                let _ = completed.push(id);
            }
        }

        self.scores.add(player, completed.len() as u8);

        let next_player = if completed.is_empty() {
            player.other()
        } else {
            player
        };
        self.current = next_player;

        MoveOutcome {
            result,
            completed,
            player,
            next_player,
            game_over: self.final_score(),
        }
    }

    /// Apply a move, turning rejections into errors
    pub fn try_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let outcome = self.apply_move(mv);
        match outcome.result {
            DrawResult::Drawn => Ok(outcome),
            DrawResult::AlreadyDrawn => Err(MoveError::AlreadyDrawn),
            DrawResult::OutOfBounds => Err(MoveError::OutOfBounds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Orientation;
    use crate::game::moves::{parse_move, Direction};
    use proptest::prelude::*;

    fn game(n: u8) -> Game {
        Game::new(BoardSize::square(n).unwrap())
    }

    fn mv(text: &str) -> Move {
        parse_move(text).unwrap()
    }

    #[test]
    fn test_two_by_two_game() {
        let mut g = game(2);

        // Three sides: no box, turn alternates
        let first = g.apply_move(mv("00R"));
        assert_eq!(first.lines_drawn(), 1);
        assert_eq!(first.next_player, Player::Two);

        let second = g.apply_move(mv("00D"));
        assert_eq!(second.player, Player::Two);
        assert_eq!(second.next_player, Player::One);

        let third = g.apply_move(mv("10R"));
        assert_eq!(third.next_player, Player::Two);
        assert_eq!(g.scores().total(), 0);
        assert!(third.game_over.is_none());

        // Fourth side closes the only box
        let fourth = g.apply_move(mv("01D"));
        assert_eq!(fourth.player, Player::Two);
        assert_eq!(fourth.completed.as_slice(), &[BoxId::new(0, 0)]);
        assert_eq!(fourth.next_player, Player::Two);
        assert_eq!(g.scores().get(Player::Two), 1);
        assert_eq!(fourth.game_over, Some(FinalScore { first: 0, second: 1 }));
        assert_eq!(g.grid().owner(BoxId::new(0, 0)), Some(Player::Two));
    }

    #[test]
    fn test_rejected_moves_keep_turn() {
        let mut g = game(3);
        let out = g.apply_move(mv("00U"));
        assert_eq!(out.result, DrawResult::OutOfBounds);
        assert_eq!(out.lines_drawn(), 0);
        assert_eq!(out.next_player, Player::One);

        assert_eq!(g.apply_move(mv("00L")).result, DrawResult::OutOfBounds);

        g.apply_move(mv("00R"));
        let again = g.apply_move(mv("01L"));
        assert_eq!(again.result, DrawResult::AlreadyDrawn);
        assert_eq!(again.player, Player::Two);
        assert_eq!(g.current_player(), Player::Two);
    }

    #[test]
    fn test_shared_line_closes_two_boxes() {
        let mut g = game(3);
        // Boxes (0,0) and (0,1) with everything but the middle vertical
        for text in ["00R", "01R", "10R", "11R", "00D", "02D"] {
            assert!(g.apply_move(mv(text)).completed.is_empty());
        }
        let mover = g.current_player();
        let out = g.apply_move(mv("01D"));
        assert_eq!(out.completed.len(), 2);
        assert_eq!(out.next_player, mover);
        assert_eq!(g.scores().get(mover), 2);
    }

    #[test]
    fn test_try_move_errors() {
        let mut g = game(2);
        assert_eq!(g.try_move(mv("00U")), Err(MoveError::OutOfBounds));
        assert!(g.try_move(mv("00R")).is_ok());
        assert_eq!(g.try_move(mv("00R")), Err(MoveError::AlreadyDrawn));

        for text in ["00D", "10R", "01D"] {
            g.try_move(mv(text)).unwrap();
        }
        assert!(g.is_over());
        assert_eq!(g.try_move(mv("00R")), Err(MoveError::GameOver));
        assert_eq!(g.try_move(mv("00U")), Err(MoveError::GameOver));

        // The full board leaves nothing to draw
        let after = g.apply_move(mv("10R"));
        assert_eq!(after.result, DrawResult::AlreadyDrawn);
        assert!(after.game_over.is_none());
        assert_eq!(g.scores().total(), 1);
    }

    #[test]
    fn test_reset() {
        let mut g = game(2);
        g.apply_move(Move::new(0, 0, Direction::Right));
        g.reset(BoardSize::square(4).unwrap());
        assert_eq!(g.grid().drawn_lines(), 0);
        assert_eq!(g.current_player(), Player::One);
        assert_eq!(g.grid().total_boxes(), 9);
    }

    fn any_move() -> impl Strategy<Value = Move> {
        let dir = prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ];
        (0u8..7, 0u8..7, dir).prop_map(|(row, col, direction)| Move::new(row, col, direction))
    }

    fn any_size() -> impl Strategy<Value = BoardSize> {
        (2u8..=5, 2u8..=5).prop_map(|(w, h)| BoardSize::new(w, h).unwrap())
    }

    proptest! {
        #[test]
        fn prop_engine_laws(size in any_size(), moves in proptest::collection::vec(any_move(), 0..120)) {
            let mut g = Game::new(size);
            let mut game_overs = 0;

            for m in moves {
                let before = g.clone();
                let out = g.apply_move(m);

                if out.result == DrawResult::Drawn {
                    // Turn-advance law
                    if out.completed.is_empty() {
                        prop_assert_eq!(out.next_player, out.player.other());
                    } else {
                        prop_assert_eq!(out.next_player, out.player);
                    }
                } else {
                    // Rejections change nothing
                    prop_assert_eq!(g.grid(), before.grid());
                    prop_assert_eq!(g.current_player(), before.current_player());
                    prop_assert_eq!(g.scores(), before.scores());
                    prop_assert!(out.completed.is_empty());
                }

                prop_assert_eq!(g.scores().total(), g.grid().completed_boxes());
                prop_assert_eq!(
                    out.game_over.is_some(),
                    g.grid().completed_boxes() == g.grid().total_boxes()
                        && out.result == DrawResult::Drawn
                );
                if out.game_over.is_some() {
                    game_overs += 1;
                }
            }

            prop_assert!(game_overs <= 1);
        }

        #[test]
        fn prop_full_game_ends_exactly_at_box_count(size in any_size()) {
            let mut g = Game::new(size);
            let segments: heapless::Vec<_, 40> = g.grid().segments().collect();
            let last = segments.len() - 1;

            for (i, segment) in segments.into_iter().enumerate() {
                // Drive the engine through moves that map to each segment
                let m = match segment.orientation {
                    Orientation::Horizontal => {
                        Move::new(segment.row, segment.col, Direction::Right)
                    }
                    Orientation::Vertical => {
                        Move::new(segment.row, segment.col, Direction::Down)
                    }
                };
                let out = g.apply_move(m);
                prop_assert_eq!(out.result, DrawResult::Drawn);
                prop_assert_eq!(out.game_over.is_some(), i == last);
            }

            prop_assert_eq!(g.grid().completed_boxes() as usize, size.boxes());
        }
    }
}
