//! Adjacency building: from a bag of cell ids to an indexed pixel graph.

use std::collections::HashMap;

use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::location::{CellId, Grid};
use crate::shape::{GridShape, KingStep, Step};

/// The pixel graph of one drawing layer.
///
/// Node `i` of [`Self::graph`] holds `cells[i]`, so petgraph node indices and local indices coincide.
#[derive(Clone, Debug)]
pub(crate) struct PixelGraph {
    pub(crate) cells: Vec<CellId>,
    pub(crate) index_of: HashMap<CellId, usize>,
    /// Indices of adjacent nodes, ascending by their degree at build time.
    pub(crate) neighbors: Vec<Vec<usize>>,
    pub(crate) graph: UnGraph<CellId, ()>,
}

impl PixelGraph {
    /// Build the graph of `cells` on `grid`; duplicates collapse onto their first occurrence.
    pub(crate) fn build(grid: Grid, cells: impl IntoIterator<Item = CellId>) -> Self {
        let cells = cells.into_iter().unique().collect_vec();
        let index_of: HashMap<CellId, usize> = cells.iter()
            .enumerate()
            .map(|(idx, cell)| (*cell, idx))
            .collect();

        let mut graph = UnGraph::with_capacity(
            cells.len(),
            // interior pixels own four forward edges each
            cells.len() * KingStep::FORWARD_VARIANTS.len(),
        );
        cells.iter().for_each(|cell| { graph.add_node(*cell); });

        let mut neighbors = Vec::with_capacity(cells.len());
        for (idx, cell) in cells.iter().enumerate() {
            let mut adjacent = Vec::with_capacity(8);
            for (direction, location) in KingStep::neighbors_of(grid.location_of(*cell)) {
                let Some(other) = grid.cell_at(location).and_then(|id| index_of.get(&id)) else {
                    continue;
                };
                adjacent.push(*other);
                // each undirected edge is inserted once, from its lower cell
                if direction.ensure_forward() == direction {
                    graph.add_edge(NodeIndex::new(idx), NodeIndex::new(*other), ());
                }
            }
            neighbors.push(adjacent);
        }

        // constrained vertices first; stable, so ties keep discovery order
        let degrees = neighbors.iter().map(Vec::len).collect_vec();
        for adjacent in neighbors.iter_mut() {
            adjacent.sort_by_key(|other| degrees[*other]);
        }

        log::trace!("graph.build: nodes={} edges={}", graph.node_count(), graph.edge_count());

        Self {
            cells,
            index_of,
            neighbors,
            graph,
        }
    }

    #[inline]
    pub(crate) fn node_count(&self) -> usize {
        self.cells.len()
    }
}
