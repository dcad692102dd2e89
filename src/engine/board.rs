use std::collections::{BTreeMap, VecDeque};

use rand::RngCore;

use super::animation::AnimationHint;
use super::grid::{Card, Grid, Score};
use super::ids::TileIds;
use super::Direction;
use crate::error::{Error, Result};

/// Grid sizes a game can be played on.
pub const SUPPORTED_SIZES: [usize; 3] = [3, 4, 5];

/// Number of previous rounds kept for undo.
pub const HISTORY_LEN: usize = 3;

/// Number of undos granted per game.
pub const UNDO_LIMIT: u8 = 3;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Status {
    #[default]
    Playing,
    /// A tile reached the winning value; moves are ignored until the player keeps going.
    Won,
    /// The player chose to continue after winning.
    KeepGoing,
    /// No move can change the grid.
    Over,
}

/// Turn describes one accepted move.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    pub gained: Score,
    pub hint: AnimationHint,
    pub status: Status,
}

#[derive(Clone)]
struct Round {
    grid: Grid,
    score: Score,
    streak: u32,
}

/// Board represents a 2048 game that keeps track of the history of its game states.
pub struct Board {
    rng: Box<dyn RngCore>,
    ids: TileIds,
    grid: Grid,
    score: Score,
    /// Best score reached on each grid size.
    bests: BTreeMap<usize, Score>,
    moves: u32,
    /// Consecutive accepted moves that scored.
    streak: u32,
    best_streak: u32,
    best_tile: Card,
    status: Status,
    rounds: VecDeque<Round>,
    undos_left: u8,
}

impl Board {
    /// Initialize new board of the given size using the given random number generator.
    pub fn new(size: usize, rng: impl RngCore + 'static) -> Result<Self> {
        Self::with_ids(size, rng, TileIds::new())
    }

    /// Like [`Board::new`] but allocating tile ids from `ids`.
    pub fn with_ids(size: usize, rng: impl RngCore + 'static, ids: TileIds) -> Result<Self> {
        check_size(size)?;
        let mut rng: Box<dyn RngCore> = Box::new(rng);
        let grid = Grid::initial(size, &ids, &mut *rng);
        Ok(Self {
            rng,
            ids,
            grid,
            score: 0,
            bests: BTreeMap::new(),
            moves: 0,
            streak: 0,
            best_streak: 0,
            best_tile: 0,
            status: Status::Playing,
            rounds: VecDeque::with_capacity(HISTORY_LEN),
            undos_left: UNDO_LIMIT,
        })
    }

    /// Seed the best score for grids of `size`, e.g. from a previous session.
    pub fn with_best(mut self, size: usize, best: Score) -> Self {
        let entry = self.bests.entry(size).or_default();
        *entry = (*entry).max(best);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// The best score on the current grid size.
    pub fn best(&self) -> Score {
        self.best_for(self.size())
    }

    pub fn best_for(&self, size: usize) -> Score {
        self.bests.get(&size).copied().unwrap_or(0)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The number of scoring moves in a row up to now.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// The longest run of scoring moves since the game started.
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// The highest tile seen since the game started.
    pub fn best_tile(&self) -> Card {
        self.best_tile
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn undos_left(&self) -> u8 {
        self.undos_left
    }

    pub fn can_undo(&self) -> bool {
        !self.rounds.is_empty() && self.undos_left > 0
    }

    /// shift attempts to shift the board in the given direction and returns a Turn if anything
    /// changes. Moves are ignored once the game is over, or won until the player keeps going.
    pub fn shift(&mut self, direction: Direction) -> Option<Turn> {
        if matches!(self.status, Status::Over | Status::Won) {
            log::trace!("ignoring {} while {:?}", direction, self.status);
            return None;
        }
        let result = self.grid.shift(direction);
        if !result.changed {
            log::trace!("{} changes nothing", direction);
            return None;
        }

        if self.rounds.len() == HISTORY_LEN {
            let _ = self.rounds.pop_front();
        }
        self.rounds.push_back(Round {
            grid: self.grid.clone(),
            score: self.score,
            streak: self.streak,
        });
        self.moves += 1;
        self.score = self.score.saturating_add(result.score);
        let best = self.bests.entry(self.grid.size()).or_default();
        *best = (*best).max(self.score);
        if result.score > 0 {
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }

        let next = result.grid.with_random_tile(&self.ids, &mut *self.rng);
        let hint = AnimationHint::between(&self.grid, &next, &result.merges);
        self.best_tile = self.best_tile.max(next.best_tile());

        if self.status != Status::KeepGoing && next.has_won() {
            log::info!("reached {} after {} moves", next.best_tile(), self.moves);
            self.status = Status::Won;
        } else if !next.has_moves_left() {
            log::info!("no moves left, final score {}", self.score);
            self.status = Status::Over;
        }
        self.grid = next;
        log::debug!(
            "shifted {}: +{} score {} move {}{}",
            direction,
            result.score,
            self.score,
            self.moves,
            hint
        );

        Some(Turn {
            gained: result.score,
            hint,
            status: self.status,
        })
    }

    /// Continue playing after a win. Has no effect otherwise.
    pub fn keep_going(&mut self) {
        if self.status == Status::Won {
            log::debug!("keep going");
            self.status = Status::KeepGoing;
        }
    }

    /// Restore the grid, score and streak from before the last move. The move counter and the
    /// longest streak are not rolled back.
    pub fn undo(&mut self) -> Result<()> {
        if self.undos_left == 0 {
            return Err(Error::NoUndosLeft);
        }
        let round = self.rounds.pop_back().ok_or(Error::NothingToUndo)?;
        self.grid = round.grid;
        self.score = round.score;
        self.streak = round.streak;
        self.undos_left -= 1;
        if self.status == Status::Over {
            self.status = Status::Playing;
        }
        log::debug!("undo, {} left", self.undos_left);
        Ok(())
    }

    /// Start a fresh game of the same size. Best scores are kept.
    pub fn restart(&mut self) {
        log::debug!("restarting {0}x{0}", self.size());
        self.reset(self.size());
    }

    /// Start a fresh game of a different size, tracking the best score for that size.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        check_size(size)?;
        log::debug!("resizing to {0}x{0}", size);
        self.reset(size);
        Ok(())
    }

    fn reset(&mut self, size: usize) {
        self.grid = Grid::initial(size, &self.ids, &mut *self.rng);
        self.score = 0;
        self.moves = 0;
        self.streak = 0;
        self.best_streak = 0;
        self.best_tile = 0;
        self.status = Status::Playing;
        self.rounds.clear();
        self.undos_left = UNDO_LIMIT;
    }

    #[cfg(test)]
    pub(crate) fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }
}

fn check_size(size: usize) -> Result<()> {
    if SUPPORTED_SIZES.contains(&size) {
        Ok(())
    } else {
        Err(Error::UnsupportedSize(size))
    }
}
