//! Registry of dirty cells.
//!
//! The set only ever shrinks: it is filled once when the model is built and
//! entries are removed as agents clean them.  Its size *is* the model's
//! dirty-cell count, so the two can never drift apart.

use rustc_hash::FxHashSet;

use vc_core::{Coord, SimRng};

/// Set of coordinates that still need cleaning.
#[derive(Clone, Debug, Default)]
pub struct DirtCells {
    cells:   FxHashSet<Coord>,
    /// Size of the set right after seeding.
    initial: usize,
}

impl DirtCells {
    /// `count` distinct cells drawn uniformly (without replacement) from a
    /// `width × height` grid.
    ///
    /// # Panics
    /// Panics if `count` exceeds the number of cells.
    pub fn seed(count: usize, width: u32, height: u32, rng: &mut SimRng) -> Self {
        let w = width as usize;
        let total = w * height as usize;
        assert!(count <= total, "cannot seed {count} dirty cells on a {width}x{height} grid");

        let cells: FxHashSet<Coord> = rng
            .sample_distinct(total, count)
            .into_iter()
            .map(|i| Coord::new((i % w) as u32, (i / w) as u32))
            .collect();
        Self { initial: cells.len(), cells }
    }

    /// Registry holding exactly `cells` (duplicates collapse).  Used to set up
    /// hand-crafted scenarios.
    pub fn from_cells<I: IntoIterator<Item = Coord>>(cells: I) -> Self {
        let cells: FxHashSet<Coord> = cells.into_iter().collect();
        Self { initial: cells.len(), cells }
    }

    #[inline]
    pub fn is_dirty(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Remove `coord` from the registry.
    ///
    /// Returns `false` if the cell was already clean; that is a normal
    /// outcome, not an error.
    #[inline]
    pub fn clean(&mut self, coord: Coord) -> bool {
        self.cells.remove(&coord)
    }

    /// Number of cells still dirty.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of dirty cells the registry started with.
    #[inline]
    pub fn initial_count(&self) -> usize {
        self.initial
    }

    /// Remaining dirty cells, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}
