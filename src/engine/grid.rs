use super::ids::{TileId, TileIds};
use crate::error::{Error, Result};

/// Idx addresses a cell of a grid by column (x) and row (y).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Idx(pub usize, pub usize);

/// Formats as the "row-col" key used by hint sets.
impl std::fmt::Display for Idx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}-{1}", self.1, self.0)
    }
}

impl Idx {
    pub fn x(&self) -> usize {
        self.0
    }

    pub fn y(&self) -> usize {
        self.1
    }
}

pub type Card = u32;

pub type Score = u64;

/// The largest tile value a grid can hold. Two tiles of this value do not merge.
pub const MAX_CARD: Card = 1 << (Card::BITS - 1);

/// Tile is a single numbered piece on the grid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tile {
    pub id: TileId,
    pub value: Card,
    /// Set on the move that spawned the tile.
    pub is_new: bool,
    /// Set on the move in which the tile absorbed its neighbour.
    pub is_merged: bool,
}

impl Tile {
    pub(crate) fn spawned(id: TileId, value: Card) -> Self {
        Self {
            id,
            value,
            is_new: true,
            is_merged: false,
        }
    }

    /// A copy of the tile with the per-move flags cleared.
    pub(crate) fn settled(&self) -> Self {
        Self {
            is_new: false,
            is_merged: false,
            ..*self
        }
    }

    /// Whether a tile of `value` may appear on a grid: a power of two between 2 and [`MAX_CARD`].
    pub fn is_valid_value(value: Card) -> bool {
        value >= 2 && value.is_power_of_two()
    }

    /// Whether sliding `self` into `other` combines them.
    pub(crate) fn merges_with(&self, other: &Tile) -> bool {
        self.value == other.value && self.value < MAX_CARD
    }

    /// Two cells hold the same tile when both are empty or both hold a tile with the same id and
    /// value; the per-move flags are not considered.
    pub(crate) fn same_cell(a: &Option<Tile>, b: &Option<Tile>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a.id == b.id && a.value == b.value,
            _ => false,
        }
    }
}

pub(crate) type Row = Vec<Option<Tile>>;

/// Grid is a square board of cells, each either empty or holding a tile. Grids are values: every
/// operation that changes the board returns a new grid.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Grid {
    slots: Vec<Row>,
}

impl Grid {
    /// An empty grid of `size` x `size` cells.
    pub fn empty(size: usize) -> Self {
        Self {
            slots: vec![vec![None; size]; size],
        }
    }

    /// Build a grid from tile values, 0 meaning an empty cell. Tiles are numbered row by row from
    /// `ids`. Every other value must be a power of two of at least 2.
    pub fn from_values<const N: usize>(values: [[Card; N]; N], ids: &TileIds) -> Result<Self> {
        if let Some(&bad) = values
            .iter()
            .flatten()
            .find(|&&v| v != 0 && !Tile::is_valid_value(v))
        {
            return Err(Error::InvalidTile(bad));
        }
        let slots = values
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&value| match value {
                        0 => None,
                        value => Some(Tile {
                            id: ids.next_id(),
                            value,
                            is_new: false,
                            is_merged: false,
                        }),
                    })
                    .collect()
            })
            .collect();
        Ok(Self { slots })
    }

    pub(crate) fn from_rows(slots: Vec<Row>) -> Self {
        Self { slots }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, idx: &Idx) -> Option<&Tile> {
        self.slots.get(idx.y())?.get(idx.x())?.as_ref()
    }

    pub(crate) fn rows(&self) -> &[Row] {
        &self.slots
    }

    /// Every occupied cell in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Idx, &Tile)> + '_ {
        self.slots.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, slot)| slot.as_ref().map(|tile| (Idx(x, y), tile)))
        })
    }

    /// Every empty cell in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Idx> + '_ {
        self.slots.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, slot)| slot.is_none())
                .map(move |(x, _)| Idx(x, y))
        })
    }

    /// Find the cell currently holding the tile with the given id.
    pub fn locate(&self, id: TileId) -> Option<Idx> {
        self.tiles()
            .find(|(_, tile)| tile.id == id)
            .map(|(idx, _)| idx)
    }

    /// Tile values row by row, 0 for empty cells.
    pub fn values(&self) -> Vec<Vec<Card>> {
        self.slots
            .iter()
            .map(|row| row.iter().map(|slot| slot.map_or(0, |t| t.value)).collect())
            .collect()
    }

    /// Sum of all tile values on the grid.
    pub fn total(&self) -> u64 {
        self.tiles().map(|(_, tile)| tile.value as u64).sum()
    }

    /// Whether both grids hold the same tiles in the same cells, ignoring per-move flags.
    pub fn same_layout(&self, other: &Grid) -> bool {
        self.size() == other.size()
            && self
                .slots
                .iter()
                .zip(other.slots.iter())
                .all(|(a, b)| a.iter().zip(b.iter()).all(|(a, b)| Tile::same_cell(a, b)))
    }

    pub(crate) fn with_tile(&self, idx: &Idx, tile: Tile) -> Self {
        let mut slots = self.slots.clone();
        slots[idx.y()][idx.x()] = Some(tile);
        Self { slots }
    }

    /// Swap rows and columns.
    pub(crate) fn transpose(&self) -> Self {
        let size = self.size();
        let slots = (0..size)
            .map(|y| (0..size).map(|x| self.slots[x][y]).collect())
            .collect();
        Self { slots }
    }

    /// Mirror every row left to right.
    pub(crate) fn reverse_rows(&self) -> Self {
        let slots = self
            .slots
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Self { slots }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .tiles()
            .map(|(_, tile)| tile.value.to_string().len())
            .max()
            .unwrap_or(1);
        for row in &self.slots {
            let cells = row
                .iter()
                .map(|slot| match slot {
                    Some(tile) => format!("{:>width$}", tile.value),
                    None => format!("{:>width$}", "."),
                })
                .collect::<Vec<_>>();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_grid() {
        let grid = Grid::empty(3);
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.tiles().count(), 0);
        assert_eq!(grid.empty_cells().count(), 9);
        assert_eq!(grid.values(), vec![vec![0; 3]; 3]);
    }

    #[test]
    fn from_values_numbers_tiles_row_major() {
        let ids = TileIds::new();
        let grid = Grid::from_values([[2, 0], [0, 4]], &ids).expect("valid tile values");
        assert_eq!(grid.get(&Idx(0, 0)).map(|t| t.id), Some(TileId(1)));
        assert_eq!(grid.get(&Idx(1, 1)).map(|t| t.id), Some(TileId(2)));
        assert_eq!(grid.get(&Idx(1, 0)), None);
        assert_eq!(grid.get(&Idx(5, 0)), None);
        assert_eq!(grid.total(), 6);
    }

    #[test]
    fn from_values_rejects_invalid_tiles() {
        let ids = TileIds::new();
        assert_eq!(
            Grid::from_values([[3, 3], [0, 0]], &ids),
            Err(Error::InvalidTile(3))
        );
        assert_eq!(
            Grid::from_values([[2, 0], [1, 0]], &ids),
            Err(Error::InvalidTile(1))
        );
        assert_eq!(
            Grid::from_values([[2, 0], [0, 96]], &ids),
            Err(Error::InvalidTile(96))
        );
        // nothing was numbered for the rejected grids
        assert_eq!(ids.next_id(), TileId(1));
        assert!(Grid::from_values([[MAX_CARD, 0], [0, 2]], &ids).is_ok());
    }

    #[test]
    fn transpose_swaps_axes() {
        let ids = TileIds::new();
        let grid = Grid::from_values([[2, 4, 8], [0, 0, 16], [0, 0, 0]], &ids)
            .expect("valid tile values");
        let transposed = grid.transpose();
        assert_eq!(
            transposed.values(),
            vec![vec![2, 0, 0], vec![4, 0, 0], vec![8, 16, 0]]
        );
        assert_eq!(transposed.transpose(), grid);
    }

    #[test]
    fn reverse_rows_mirrors() {
        let ids = TileIds::new();
        let grid = Grid::from_values([[2, 4, 0], [0, 0, 8], [0, 0, 0]], &ids)
            .expect("valid tile values");
        assert_eq!(
            grid.reverse_rows().values(),
            vec![vec![0, 4, 2], vec![8, 0, 0], vec![0, 0, 0]]
        );
        assert_eq!(grid.reverse_rows().reverse_rows(), grid);
    }

    #[test]
    fn locate_follows_ids() {
        let ids = TileIds::new();
        let grid = Grid::from_values([[0, 2], [4, 0]], &ids).expect("valid tile values");
        assert_eq!(grid.locate(TileId(1)), Some(Idx(1, 0)));
        assert_eq!(grid.locate(TileId(2)), Some(Idx(0, 1)));
        assert_eq!(grid.locate(TileId(3)), None);
    }

    #[test]
    fn same_layout_ignores_flags() {
        let ids = TileIds::new();
        let grid = Grid::from_values([[2, 0], [0, 0]], &ids).expect("valid tile values");
        let tile = *grid.get(&Idx(0, 0)).expect("tile at origin");
        let flagged = grid.with_tile(
            &Idx(0, 0),
            Tile {
                is_new: true,
                ..tile
            },
        );
        assert_ne!(grid, flagged);
        assert!(grid.same_layout(&flagged));
    }

    #[test]
    fn display_aligns_columns() {
        let ids = TileIds::new();
        let grid = Grid::from_values([[2, 128], [0, 16]], &ids).expect("valid tile values");
        assert_eq!(format!("{}", grid), "  2 128\n  .  16\n");
    }

    #[test]
    fn idx_displays_as_row_col() {
        assert_eq!(Idx(3, 1).to_string(), "1-3");
    }
}
