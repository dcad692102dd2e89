use std::collections::BTreeSet;

use super::grid::{Card, Grid, Idx};

/// Reaching a tile of this value wins the game, whatever the grid size.
pub const WIN_VALUE: Card = 2048;

impl Grid {
    /// Pairs of orthogonally adjacent cells whose tiles would merge. Only right and down
    /// neighbours are visited, which reaches every adjacency exactly once.
    fn mergeable_pairs(&self) -> impl Iterator<Item = (Idx, Idx)> + '_ {
        self.tiles().flat_map(move |(idx, tile)| {
            let right = Idx(idx.x() + 1, idx.y());
            let down = Idx(idx.x(), idx.y() + 1);
            [right, down].into_iter().filter_map(move |neighbour| {
                self.get(&neighbour)
                    .filter(|other| tile.merges_with(other))
                    .map(|_| (idx, neighbour))
            })
        })
    }

    /// Whether some move can still change the grid: a cell is empty or two neighbours match.
    pub fn has_moves_left(&self) -> bool {
        self.empty_cells().next().is_some() || self.mergeable_pairs().next().is_some()
    }

    pub fn has_won(&self) -> bool {
        self.tiles().any(|(_, tile)| tile.value >= WIN_VALUE)
    }

    /// The highest tile value on the grid, 0 when it is empty.
    pub fn best_tile(&self) -> Card {
        self.tiles().map(|(_, tile)| tile.value).max().unwrap_or(0)
    }

    /// Cells that belong to at least one adjacent pair of equal tiles.
    pub fn merge_hint_cells(&self) -> BTreeSet<Idx> {
        self.mergeable_pairs()
            .flat_map(|(a, b)| [a, b])
            .collect()
    }

    /// [`Grid::merge_hint_cells`] as "row-col" keys.
    pub fn merge_hint_keys(&self) -> BTreeSet<String> {
        self.merge_hint_cells()
            .iter()
            .map(|idx| idx.to_string())
            .collect()
    }
}
