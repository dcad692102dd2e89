use rand::distributions::Distribution;
use rand::distributions::WeightedIndex;
use rand::seq::IteratorRandom;
use rand::Rng;

use super::grid::{Card, Grid, Tile};
use super::ids::TileIds;

const NEW_CARD_CHOICES: [Card; 2] = [2, 4];
const NEW_CARD_WEIGHTS: [u8; 2] = [9, 1];

impl Grid {
    /// Place one new tile in a uniformly chosen empty cell: a 2 nine times out of ten, otherwise
    /// a 4. A full grid is returned unchanged.
    pub fn with_random_tile<R: Rng + ?Sized>(&self, ids: &TileIds, rng: &mut R) -> Grid {
        let idx = match self.empty_cells().choose(rng) {
            Some(idx) => idx,
            None => {
                log::trace!("no empty cell to spawn into");
                return self.clone();
            }
        };
        let weights =
            WeightedIndex::new(NEW_CARD_WEIGHTS).expect("NEW_CARD_WEIGHTS should never be empty");
        let value = NEW_CARD_CHOICES[weights.sample(rng)];
        let tile = Tile::spawned(ids.next_id(), value);
        log::trace!("spawning {} {} at {}", tile.id, value, idx);
        self.with_tile(&idx, tile)
    }

    /// An empty grid with two spawned tiles.
    pub fn initial<R: Rng + ?Sized>(size: usize, ids: &TileIds, rng: &mut R) -> Grid {
        Grid::empty(size)
            .with_random_tile(ids, rng)
            .with_random_tile(ids, rng)
    }
}
