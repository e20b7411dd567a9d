use itertools::Itertools;
use strum::{Display, VariantArray};

use crate::backtrack::CoverSearch;
use crate::cover::PathCover;
use crate::exact;
use crate::graph::PixelGraph;
use crate::location::CellId;
use crate::partition::{Component, Partition};

/// Which end of the degree ordering the cover search prefers when choosing where to go next.
#[derive(Clone, Copy, Debug, Default, Display, VariantArray, Eq, PartialEq, Hash)]
pub enum DegreeOrder {
    /// Visit the most constrained nodes (fewest remaining neighbors) first.
    #[default]
    Ascending,
    /// Visit the least constrained nodes first.
    Descending,
}

/// Tuning for one solve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SolveOptions {
    /// Preferred ordering of start nodes and path extensions in the cover search.
    pub degree_order: DegreeOrder,
    /// Components of at most this many cells are solved exactly; see [`exact::EXACT_LIMIT`].
    pub exact_threshold: usize,
    /// Path extensions the cover search may attempt per component before settling for its best cover.
    pub step_budget: u64,
    /// Seed for the state fingerprints of the cover search.
    pub seed: u64,
    /// Skip search states already explored.
    pub memoize: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            degree_order: DegreeOrder::Ascending,
            exact_threshold: exact::EXACT_LIMIT,
            step_budget: 2_000_000,
            seed: 0x9e37_79b9_7f4a_7c15,
            memoize: true,
        }
    }
}

/// Endpoint requirements of one component, in local indices.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Constraints {
    pub(crate) start: Option<usize>,
    pub(crate) end: Option<usize>,
    /// Every node that should end up as a path endpoint, including `start` and `end`.
    pub(crate) required: Vec<usize>,
}

impl Constraints {
    pub(crate) fn new(start: Option<usize>, end: Option<usize>, anchors: impl IntoIterator<Item = usize>) -> Self {
        let required = start.into_iter()
            .chain(end)
            .chain(anchors)
            .unique()
            .collect_vec();
        Self { start, end, required }
    }

    /// Ends for a single path meeting every requirement, or [`None`] if there are too many for one path.
    ///
    /// Explicit start and end keep their roles; other anchors fill the start first, then the end.
    pub(crate) fn path_ends(&self) -> Option<(Option<usize>, Option<usize>)> {
        if self.required.len() > 2 {
            return None;
        }

        let mut free = self.required.iter()
            .copied()
            .filter(|node| Some(*node) != self.start && Some(*node) != self.end);
        let start = self.start.or_else(|| free.next());
        let end = self.end.or_else(|| free.next());
        Some((start, end))
    }
}

/// Cover one component, exactly when it is small enough and a single path can honor its constraints.
pub(crate) fn solve_component(component: &Component, constraints: &Constraints, options: &SolveOptions) -> Vec<Vec<usize>> {
    let n = component.len();
    if n <= options.exact_threshold {
        match constraints.path_ends() {
            Some((start, end)) => match exact::hamiltonian_path(&component.neighbors, start, end) {
                Some(path) => return vec![path],
                None => log::debug!("solver.component: no hamiltonian path n={n}, searching for a cover"),
            },
            None => log::debug!(
                "solver.component: {} anchors cannot share one path n={n}, searching for a cover",
                constraints.required.len(),
            ),
        }
    }

    let outcome = CoverSearch::new(&component.neighbors, constraints, options).run();
    if outcome.exhausted {
        log::info!(
            "solver.component: budget exhausted n={n} steps={} level={} paths={}",
            outcome.steps,
            outcome.score.level,
            outcome.paths.len(),
        );
    }
    outcome.paths
}

/// Cover every pixel of `pixels`, component by component, in component order.
///
/// Constraints naming cells outside a component do not apply to it.
pub(crate) fn solve(
    pixels: &PixelGraph,
    start: Option<CellId>,
    end: Option<CellId>,
    anchors: &[CellId],
    options: &SolveOptions,
) -> PathCover {
    let partition = Partition::of(pixels);
    log::debug!(
        "solver.solve: start cells={} components={} anchors={}",
        pixels.node_count(),
        partition.components.len(),
        anchors.len(),
    );

    let mut cover = PathCover::default();
    for (idx, component) in partition.components.iter().enumerate() {
        let local = |cell: CellId| {
            pixels.index_of.get(&cell)
                .filter(|global| partition.component_of[**global] == idx)
                .and_then(|global| component.local_of(*global))
        };
        let constraints = Constraints::new(
            start.and_then(local),
            end.and_then(local),
            anchors.iter().filter_map(|anchor| local(*anchor)),
        );

        let paths = solve_component(component, &constraints, options);
        log::debug!("solver.component: done idx={idx} n={} paths={}", component.len(), paths.len());
        cover.push_component(&pixels.cells, component, paths);
    }

    log::debug!("solver.solve: done paths={}", cover.len());
    cover
}
