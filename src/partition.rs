use std::collections::HashMap;

use itertools::Itertools;
use petgraph::visit::{Dfs, VisitMap};

use crate::graph::PixelGraph;

/// A connected subgraph of a [`PixelGraph`], re-indexed locally.
///
/// Local index `i` stands for global node `nodes[i]`; `neighbors` uses local indices and keeps the global ordering.
#[derive(Clone, Debug)]
pub(crate) struct Component {
    pub(crate) nodes: Vec<usize>,
    pub(crate) neighbors: Vec<Vec<usize>>,
}

impl Component {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Local index of global node `global`, if it belongs to this component.
    pub(crate) fn local_of(&self, global: usize) -> Option<usize> {
        self.nodes.binary_search(&global).ok()
    }
}

/// The connected components of a [`PixelGraph`].
#[derive(Clone, Debug)]
pub(crate) struct Partition {
    pub(crate) components: Vec<Component>,
    /// `component_of[node]` is the position in [`Self::components`] of the component containing `node`.
    pub(crate) component_of: Vec<usize>,
}

impl Partition {
    /// Split `pixels` into components, numbered in order of their lowest node.
    pub(crate) fn of(pixels: &PixelGraph) -> Self {
        let mut component_of = vec![usize::MAX; pixels.node_count()];
        let mut members: Vec<Vec<usize>> = Vec::new();

        let mut dfs = Dfs::empty(&pixels.graph);
        for root in pixels.graph.node_indices() {
            if dfs.discovered.is_visited(&root) {
                continue;
            }

            let id = members.len();
            let mut nodes = Vec::new();
            dfs.move_to(root);
            while let Some(found) = dfs.next(&pixels.graph) {
                component_of[found.index()] = id;
                nodes.push(found.index());
            }
            nodes.sort_unstable();
            members.push(nodes);
        }

        let components = members.into_iter()
            .map(|nodes| {
                let local: HashMap<usize, usize> = nodes.iter()
                    .enumerate()
                    .map(|(idx, global)| (*global, idx))
                    .collect();
                let neighbors = nodes.iter()
                    .map(|global| pixels.neighbors[*global].iter().map(|other| local[other]).collect_vec())
                    .collect_vec();
                Component { nodes, neighbors }
            })
            .collect_vec();

        Self {
            components,
            component_of,
        }
    }
}
