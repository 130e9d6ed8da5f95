//! Bounded rectangular occupancy grid.
//!
//! # Data layout
//!
//! Cells are stored row-major: cell `(x, y)` lives at index `y * width + x`.
//! Each cell holds the agents currently standing on it, in arrival order.
//! A second array indexed by `AgentId` holds every agent's coordinate, so
//! both "who is here?" and "where is this agent?" are O(1).
//!
//! The structure itself allows any number of agents per cell (all agents
//! start stacked on the center cell).  Keeping agents apart is the job of the
//! movement rule, not of the grid.

use vc_core::{AgentId, Coord};

/// Moore-neighborhood offsets in the fixed order neighbors are reported:
/// row by row (`dy` = -1, 0, +1), left to right within each row.
#[rustfmt::skip]
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Fixed-size occupancy map.
///
/// Mutated only through [`place`][Self::place] and
/// [`move_agent`][Self::move_agent]; neither validates occupancy.
#[derive(Clone, Debug)]
pub struct Grid {
    width:     u32,
    height:    u32,
    /// Agents per cell, row-major.
    cells:     Vec<Vec<AgentId>>,
    /// Coordinate of each agent, indexed by `AgentId`.  `None` until placed.
    positions: Vec<Option<Coord>>,
}

impl Grid {
    /// An empty `width × height` grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero.  Model construction validates the
    /// config before getting here.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive, got {width}x{height}");
        Self {
            width,
            height,
            cells:     vec![Vec::new(); width as usize * height as usize],
            positions: Vec::new(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `(width / 2, height / 2)`.
    #[inline]
    pub fn center(&self) -> Coord {
        Coord::new(self.width / 2, self.height / 2)
    }

    /// `true` if `coord` lies on the grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The up-to-8 cells adjacent to `coord` (diagonals included, `coord`
    /// itself excluded), clipped to the grid.  There is no wraparound, so
    /// corners have 3 neighbors and edges have 5.
    ///
    /// # Panics
    /// Panics if `coord` is off the grid.
    pub fn neighbors_of(&self, coord: Coord) -> Vec<Coord> {
        self.check_bounds(coord);
        MOORE_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| coord.offset(dx, dy))
            .filter(|&c| self.contains(c))
            .collect()
    }

    /// `true` if at least one agent stands on `coord`.
    ///
    /// # Panics
    /// Panics if `coord` is off the grid.
    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        !self.agents_at(coord).is_empty()
    }

    /// Agents standing on `coord`, in arrival order.
    ///
    /// # Panics
    /// Panics if `coord` is off the grid.
    #[inline]
    pub fn agents_at(&self, coord: Coord) -> &[AgentId] {
        &self.cells[self.cell_index(coord)]
    }

    /// Current coordinate of `agent`.
    ///
    /// # Panics
    /// Panics if `agent` was never placed.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Coord {
        self.positions
            .get(agent.index())
            .copied()
            .flatten()
            .unwrap_or_else(|| panic!("{agent} has not been placed on the grid"))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put a not-yet-placed agent on `coord`.  Other agents already there
    /// are left alone.
    ///
    /// # Panics
    /// Panics if `coord` is off the grid or `agent` is already placed.
    pub fn place(&mut self, agent: AgentId, coord: Coord) {
        let idx = self.cell_index(coord);
        if self.positions.len() <= agent.index() {
            self.positions.resize(agent.index() + 1, None);
        }
        let slot = &mut self.positions[agent.index()];
        assert!(slot.is_none(), "{agent} is already placed; use move_agent");
        *slot = Some(coord);
        self.cells[idx].push(agent);
    }

    /// Move `agent` from wherever it is to `to`.  Moving onto the agent's
    /// own cell is a no-op.
    ///
    /// The destination is not checked for other agents; callers decide
    /// whether a shared cell is acceptable.
    ///
    /// # Panics
    /// Panics if `to` is off the grid or `agent` was never placed.
    pub fn move_agent(&mut self, agent: AgentId, to: Coord) {
        let from = self.position(agent);
        if from == to {
            return;
        }
        let to_idx = self.cell_index(to);
        let from_idx = self.cell_index(from);

        let here = &mut self.cells[from_idx];
        if let Some(i) = here.iter().position(|&a| a == agent) {
            // `remove`, not `swap_remove`: keeps arrival order stable.
            here.remove(i);
        }
        self.cells[to_idx].push(agent);
        self.positions[agent.index()] = Some(to);
    }

    // ── Index helpers ─────────────────────────────────────────────────────

    #[inline]
    fn check_bounds(&self, coord: Coord) {
        assert!(
            self.contains(coord),
            "coordinate {coord} is outside the {}x{} grid",
            self.width,
            self.height,
        );
    }

    #[inline]
    fn cell_index(&self, coord: Coord) -> usize {
        self.check_bounds(coord);
        coord.y as usize * self.width as usize + coord.x as usize
    }
}
