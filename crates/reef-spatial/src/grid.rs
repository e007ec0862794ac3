//! Uniform grid mapping cell coordinates to the agents inside each cell.
//!
//! # Lifecycle
//!
//! The index is rebuilt from scratch every tick:
//!
//! ```text
//! clear()                     O(cells)
//! insert(id, pos) × agents    O(1) each
//! query(x, y, r)  × agents    O(cells in the query square + hits)
//! ```
//!
//! There is no removal or update API.  A full rebuild is O(agents) and can
//! never leave stale entries behind.
//!
//! # Query shape
//!
//! [`SpatialIndex::query`] returns every agent in every cell overlapped by
//! the square `[x - r, x + r] × [y - r, y + r]`.  That is a superset of the
//! circle of radius `r`; callers that need an exact circle post-filter by
//! distance.  Results include the querying agent itself when it has been
//! inserted.
//!
//! Cell coordinates use `floor`, so negative positions land in negative
//! cells and the cell straddling the origin is not doubled in size.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use reef_core::{AgentId, Vec2};

/// `(column, row)` of a grid cell.
pub type CellKey = (i64, i64);

/// Non-owning spatial hash over [`AgentId`] handles.
///
/// The index never stores positions; it only remembers which cell each
/// handle was inserted into.  Positions are read back from the agent store.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    cell_size: f64,
    cells:     HashMap<CellKey, Vec<AgentId>>,
    entries:   usize,
}

impl SpatialIndex {
    /// Create an empty index with square cells of side `cell_size`.
    ///
    /// `cell_size` must be positive and finite; `SimConfig::validate`
    /// enforces this before the simulation builds its index.
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells:   HashMap::default(),
            entries: 0,
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Cell containing world position `pos`.
    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> CellKey {
        (self.coord(pos.x), self.coord(pos.y))
    }

    #[inline]
    fn coord(&self, v: f64) -> i64 {
        // `as` saturates for out-of-range and maps NaN to 0.
        (v / self.cell_size).floor() as i64
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Drop every bucket.  After this the index is empty.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.entries = 0;
    }

    /// Append `agent` to the bucket of the cell containing `pos`.
    #[inline]
    pub fn insert(&mut self, agent: AgentId, pos: Vec2) {
        let key = self.cell_of(pos);
        self.cells.entry(key).or_default().push(agent);
        self.entries += 1;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All agents in cells overlapping the square of half-side `radius`
    /// centred on `(x, y)`.
    ///
    /// Results come cell by cell in `(column, row)` order, each cell in
    /// insertion order.  The order depends only on the inserts, never on
    /// the hasher.
    pub fn query(&self, x: f64, y: f64, radius: f64) -> Vec<AgentId> {
        let mut out = Vec::new();
        self.query_into(x, y, radius, &mut out);
        out
    }

    /// Like [`query`](Self::query) but appends into a caller-owned buffer so
    /// the per-agent scratch `Vec`s can be reused across the tick.
    pub fn query_into(&self, x: f64, y: f64, radius: f64, out: &mut Vec<AgentId>) {
        if self.cells.is_empty() || !(radius >= 0.0) {
            return;
        }
        let min_col = self.coord(x - radius);
        let max_col = self.coord(x + radius);
        let min_row = self.coord(y - radius);
        let max_row = self.coord(y + radius);

        // A huge radius would make the scan cover more cells than exist;
        // fall back to walking the occupied buckets.  Map iteration order is
        // not stable across instances, so the hits are put back into
        // column-major cell order before they are appended.
        let span = (max_col.saturating_sub(min_col) as u128 + 1)
            * (max_row.saturating_sub(min_row) as u128 + 1);
        if span > self.cells.len() as u128 {
            let mut hits: Vec<(CellKey, &[AgentId])> = self
                .cells
                .iter()
                .filter(|&(&(col, row), _)| {
                    (min_col..=max_col).contains(&col) && (min_row..=max_row).contains(&row)
                })
                .map(|(&key, bucket)| (key, bucket.as_slice()))
                .collect();
            hits.sort_unstable_by_key(|&(key, _)| key);
            for (_, bucket) in hits {
                out.extend_from_slice(bucket);
            }
            return;
        }

        for col in min_col..=max_col {
            for row in min_row..=max_row {
                if let Some(bucket) = self.cells.get(&(col, row)) {
                    out.extend_from_slice(bucket);
                }
            }
        }
    }

    /// Occupants of the single cell at `key`.
    pub fn bucket(&self, key: CellKey) -> &[AgentId] {
        self.cells.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    // ── Metadata ──────────────────────────────────────────────────────────

    /// Number of non-empty cells.
    #[inline]
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Total inserted handles since the last `clear`.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
