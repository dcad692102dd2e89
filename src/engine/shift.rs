use super::grid::{Grid, Row, Score, Tile};
use super::ids::TileId;
use super::Direction;

/// Merge records one tile absorbing its neighbour during a move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Merge {
    /// The tile that stays on the grid with the doubled value.
    pub survivor: TileId,
    /// The tile that slid into the survivor and left the grid.
    pub absorbed: TileId,
}

/// MoveResult is the outcome of sliding a grid in one direction.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveResult {
    pub grid: Grid,
    /// Sum of the values produced by merges during the move.
    pub score: Score,
    /// Whether any cell differs from the input grid. A move that changes nothing is not a legal
    /// move and leaves `grid` equal to the input.
    pub changed: bool,
    /// Every merge performed by the move.
    pub merges: Vec<Merge>,
}

/// Slide one row toward index 0, merging equal neighbours. Returns the new row, the points
/// earned and the merges made.
pub(crate) fn slide_row(row: &[Option<Tile>]) -> (Row, Score, Vec<Merge>) {
    let tiles = row.iter().flatten().collect::<Vec<_>>();
    let mut out = Vec::with_capacity(row.len());
    let mut merges = Vec::new();
    let mut score = 0;
    let mut i = 0;
    while i < tiles.len() {
        match (tiles[i], tiles.get(i + 1)) {
            // the earlier tile survives the merge and keeps its id
            (first, Some(second)) if first.merges_with(second) => {
                let value = first.value * 2;
                score += Score::from(value);
                merges.push(Merge {
                    survivor: first.id,
                    absorbed: second.id,
                });
                out.push(Some(Tile {
                    id: first.id,
                    value,
                    is_new: false,
                    is_merged: true,
                }));
                i += 2;
            }
            (tile, _) => {
                out.push(Some(tile.settled()));
                i += 1;
            }
        }
    }
    out.resize(row.len(), None);
    (out, score, merges)
}

fn row_changed(before: &[Option<Tile>], after: &[Option<Tile>]) -> bool {
    before
        .iter()
        .zip(after.iter())
        .any(|(b, a)| !Tile::same_cell(b, a))
}

impl Grid {
    /// Slide every tile in the given direction.
    pub fn shift(&self, direction: Direction) -> MoveResult {
        match direction {
            Direction::Left => self.shift_left(),
            Direction::Right => self.shift_right(),
            Direction::Up => self.shift_up(),
            Direction::Down => self.shift_down(),
        }
    }

    pub fn shift_left(&self) -> MoveResult {
        let mut score = 0;
        let mut changed = false;
        let mut merges = Vec::new();
        let rows = self
            .rows()
            .iter()
            .map(|row| {
                let (slid, points, row_merges) = slide_row(row);
                score += points;
                changed |= row_changed(row, &slid);
                merges.extend(row_merges);
                slid
            })
            .collect();
        if !changed {
            return MoveResult {
                grid: self.clone(),
                score: 0,
                changed,
                merges: Vec::new(),
            };
        }
        MoveResult {
            grid: Grid::from_rows(rows),
            score,
            changed,
            merges,
        }
    }

    /// Right is a left shift of the mirrored grid, so the tile nearest the right edge survives a
    /// merge.
    pub fn shift_right(&self) -> MoveResult {
        self.reverse_rows()
            .shift_left()
            .map_grid(self, |g| g.reverse_rows())
    }

    pub fn shift_up(&self) -> MoveResult {
        self.transpose()
            .shift_left()
            .map_grid(self, |g| g.transpose())
    }

    pub fn shift_down(&self) -> MoveResult {
        self.transpose()
            .shift_right()
            .map_grid(self, |g| g.transpose())
    }
}

impl MoveResult {
    /// Map the grid back into the original frame. An unchanged result hands back `original` so the
    /// caller gets its own grid untouched.
    fn map_grid<F: FnOnce(&Grid) -> Grid>(self, original: &Grid, f: F) -> MoveResult {
        let grid = if self.changed {
            f(&self.grid)
        } else {
            original.clone()
        };
        MoveResult { grid, ..self }
    }
}
