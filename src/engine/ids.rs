use std::sync::atomic::{AtomicU64, Ordering};

/// TileId uniquely identifies a tile for its whole lifetime, across every grid it moves through.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TileId(pub u64);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// TileIds hands out tile ids that are unique for as long as the allocator lives. It can be shared
/// by reference between threads; only uniqueness is guaranteed, not ordering between callers.
#[derive(Debug, Default)]
pub struct TileIds {
    last: AtomicU64,
}

impl TileIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id. Ids start at 1 and never repeat.
    pub fn next_id(&self) -> TileId {
        TileId(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
