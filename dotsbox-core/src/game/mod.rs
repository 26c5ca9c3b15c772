//! Game model
//!
//! The grid holds the drawn lines and box owners, the move interpreter
//! turns terminal text into moves, and the engine applies them.

pub mod engine;
pub mod grid;
pub mod moves;
pub mod score;

pub use engine::{Game, MoveError, MoveOutcome};
pub use grid::{BoxId, DrawResult, Grid, Orientation, Segment};
pub use moves::{parse_move, Direction, Move, ParseError};
pub use score::{FinalScore, Player, Scores};
