//! Rules engine for a 2048-style sliding tile puzzle.
//!
//! [`Grid`] is an immutable board value; shifting it yields a [`MoveResult`] with the new grid,
//! the points earned and whether anything moved. [`Board`] drives a whole game on top of it:
//! spawning, scoring, win and loss detection and a short undo history.

pub mod engine;
pub mod error;

pub use engine::animation::{AnimationHint, Hint};
pub use engine::board::{Board, Status, Turn};
pub use engine::grid::{Card, Grid, Idx, Score, Tile, MAX_CARD};
pub use engine::ids::{TileId, TileIds};
pub use engine::shift::{Merge, MoveResult};
pub use engine::status::WIN_VALUE;
pub use engine::Direction;
pub use error::{Error, Result};
