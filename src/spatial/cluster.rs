//! Cluster finder - flood fill under an adjacency policy
//!
//! Breadth-first from the seed. Each cell is tested at most once and
//! enters the result at most once; the visited bitset is keyed by
//! row-major index.
//!
//! The seed is part of its own cluster (always first) when it passes
//! `test`. A seed that fails `test` gives an empty cluster.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::adjacency::Adjacency;
use super::cell::Cell;
use super::direction::Heading;
use super::grid::Grid;
use super::pos::GridPos;
use super::visited::VisitedSet;

impl<'g, T> Cell<'g, T> {
    /// Maximal connected set of cells reachable from this one through
    /// neighbors allowed by `adjacency` that satisfy `test`.
    pub fn find_cluster(
        &self,
        adjacency: Adjacency,
        mut test: impl FnMut(Cell<'g, T>) -> bool,
    ) -> Vec<Cell<'g, T>> {
        if !test(*self) {
            return Vec::new();
        }

        let mut visited = VisitedSet::new(self.grid().len());
        visited.insert(self.index());
        let mut queue = VecDeque::from([*self]);
        let mut cluster = Vec::new();

        while let Some(cell) = queue.pop_front() {
            cluster.push(cell);
            for heading in adjacency.headings() {
                let Some(next) = cell.toward(heading) else {
                    continue;
                };
                if visited.insert(next.index()) && test(next) {
                    queue.push_back(next);
                }
            }
        }

        trace!(seed = %self.pos(), size = cluster.len(), "flood fill complete");
        cluster
    }
}

impl<T> Grid<T> {
    /// `find_cluster` from the cell at `seed`; empty when `seed` is off the
    /// grid.
    pub fn find_cluster(
        &self,
        seed: GridPos,
        adjacency: Adjacency,
        test: impl FnMut(Cell<'_, T>) -> bool,
    ) -> Vec<Cell<'_, T>> {
        match self.cell(seed) {
            Some(cell) => cell.find_cluster(adjacency, test),
            None => Vec::new(),
        }
    }

    /// Partition the whole grid into maximal same-value clusters. Regions
    /// are seeded in row-major order, so the first region always contains
    /// the top-left cell.
    pub fn regions(&self, adjacency: Adjacency) -> Vec<Vec<Cell<'_, T>>>
    where
        T: PartialEq,
    {
        let mut assigned = VisitedSet::new(self.len());
        let mut regions = Vec::new();

        for cell in self.iter() {
            if assigned.contains(cell.index()) {
                continue;
            }
            let value = cell.value();
            let region = cell.find_cluster(adjacency, |c| c.value() == value);
            for member in &region {
                assigned.insert(member.index());
            }
            regions.push(region);
        }

        debug!(regions = regions.len(), cells = self.len(), "partitioned grid into regions");
        regions
    }
}

/// Orthogonal cell edges of `cluster` not shared with another member.
/// Edges on the grid border count as exposed.
pub fn perimeter<T>(cluster: &[Cell<'_, T>]) -> usize {
    let Some(first) = cluster.first() else {
        return 0;
    };
    let mut members = VisitedSet::new(first.grid().len());
    for cell in cluster {
        members.insert(cell.index());
    }

    cluster
        .iter()
        .map(|cell| {
            Heading::ORTHOGONAL
                .iter()
                .filter(|h| !cell.toward(**h).is_some_and(|n| members.contains(n.index())))
                .count()
        })
        .sum()
}

/// Member positions in row-major order. Two fills that reach the same
/// cluster from different seeds produce the same key.
pub fn cluster_key<T>(cluster: &[Cell<'_, T>]) -> Vec<GridPos> {
    let mut key: Vec<GridPos> = cluster.iter().map(|c| c.pos()).collect();
    key.sort_unstable();
    key
}
