use super::grid::{Card, Grid, Idx};
use super::shift::Merge;

#[derive(Clone, Debug, PartialEq)]
pub enum Hint {
    /// The tile slid here from the given cell.
    ToIdx(Idx),
    /// The tile slid here from the given cell and absorbed a neighbour on the way.
    NewValueToIdx(Card, Idx),
    /// The tile was spawned here.
    NewTile(Card),
    /// The tile that started in the given cell was absorbed into the tile here.
    Absorbed(Idx),
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToIdx(idx) => write!(f, "Hint::ToIdx({0})", idx),
            Self::NewValueToIdx(value, idx) => {
                write!(f, "Hint::NewValueToIdx({0}, {1})", value, idx)
            }
            Self::NewTile(value) => write!(f, "Hint::NewTile({0})", value),
            Self::Absorbed(idx) => write!(f, "Hint::Absorbed({0})", idx),
        }
    }
}

/// AnimationHint lists, per destination cell, how the tile there got there. Tiles that did not
/// move are left out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationHint {
    hint: Vec<(Idx, Hint)>,
}

impl std::fmt::Display for AnimationHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.hint.is_empty() {
            writeln!(f)?;
        }
        for (idx, hint) in &self.hint {
            writeln!(f, "  {0} - {1}", idx, hint)?;
        }
        Ok(())
    }
}

impl AnimationHint {
    /// Work out the transitions from `before` to `after` by following tile ids. `merges` names
    /// the tiles that left the grid, each reported right after the tile that absorbed it.
    pub fn between(before: &Grid, after: &Grid, merges: &[Merge]) -> Self {
        let mut hint = Vec::new();
        for (idx, tile) in after.tiles() {
            if tile.is_new {
                hint.push((idx, Hint::NewTile(tile.value)));
                continue;
            }
            let from = match before.locate(tile.id) {
                Some(from) => from,
                None => continue,
            };
            match (tile.is_merged, from == idx) {
                (true, _) => hint.push((idx, Hint::NewValueToIdx(tile.value, from))),
                (false, false) => hint.push((idx, Hint::ToIdx(from))),
                (false, true) => {}
            }
            let absorbed = merges
                .iter()
                .filter(|merge| merge.survivor == tile.id)
                .filter_map(|merge| before.locate(merge.absorbed));
            hint.extend(absorbed.map(|from| (idx, Hint::Absorbed(from))));
        }
        Self { hint }
    }

    pub fn hints(&self) -> &[(Idx, Hint)] {
        &self.hint
    }

    pub fn is_empty(&self) -> bool {
        self.hint.is_empty()
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::engine::ids::TileIds;

    #[test]
    fn follows_ids_through_a_move() {
        let ids = TileIds::new();
        let before = Grid::from_values([[2, 2, 4], [0, 0, 8], [0, 0, 0]], &ids)
            .expect("valid tile values");
        let result = before.shift_left();
        let hint = AnimationHint::between(&before, &result.grid, &result.merges);
        assert_eq!(
            hint.hints(),
            &[
                (Idx(0, 0), Hint::NewValueToIdx(4, Idx(0, 0))),
                (Idx(0, 0), Hint::Absorbed(Idx(1, 0))),
                (Idx(1, 0), Hint::ToIdx(Idx(2, 0))),
                (Idx(0, 1), Hint::ToIdx(Idx(2, 1))),
            ]
        );
    }

    #[test]
    fn reports_spawned_tiles() {
        let ids = TileIds::new();
        let mut rng = SmallRng::seed_from_u64(42);
        let before = Grid::from_values([[0, 0, 2], [0, 0, 0], [0, 0, 0]], &ids)
            .expect("valid tile values");
        let after = before.shift_left().grid.with_random_tile(&ids, &mut rng);
        let hint = AnimationHint::between(&before, &after, &[]);
        assert_eq!(hint.hints().len(), 2);
        assert!(hint.hints().contains(&(Idx(0, 0), Hint::ToIdx(Idx(2, 0)))));
        assert!(hint
            .hints()
            .iter()
            .any(|(_, h)| matches!(h, Hint::NewTile(2) | Hint::NewTile(4))));
    }

    #[test]
    fn absorbed_tiles_point_at_their_old_cell() {
        let ids = TileIds::new();
        let before = Grid::from_values([[2, 0, 0], [2, 0, 0], [4, 0, 4]], &ids)
            .expect("valid tile values");
        let result = before.shift_down();
        let hint = AnimationHint::between(&before, &result.grid, &result.merges);
        // the lower 2 stays put and swallows the one above it
        assert_eq!(
            hint.hints(),
            &[
                (Idx(0, 1), Hint::NewValueToIdx(4, Idx(0, 1))),
                (Idx(0, 1), Hint::Absorbed(Idx(0, 0))),
            ]
        );
        let absorbed = hint
            .hints()
            .iter()
            .filter(|(_, h)| matches!(h, Hint::Absorbed(_)))
            .count();
        assert_eq!(absorbed, result.merges.len());
        assert_eq!(
            Hint::Absorbed(Idx(0, 0)).to_string(),
            "Hint::Absorbed(0-0)"
        );
    }

    #[test]
    fn unchanged_grid_has_no_hints() {
        let ids = TileIds::new();
        let grid = Grid::from_values([[2, 4], [0, 0]], &ids).expect("valid tile values");
        assert!(AnimationHint::between(&grid, &grid, &[]).is_empty());
        assert_eq!(format!("{}", AnimationHint::default()), "");
    }
}
