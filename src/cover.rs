use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;

use crate::location::{CellId, Grid, Location};
use crate::partition::Component;
use crate::shape::{GridShape, KingStep};

/// Reasons a flat path buffer may fail to decode.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum TransportError {
    /// The buffer lacks even the leading path count.
    #[error("path buffer is empty")]
    Empty,
    /// The buffer ended where the length of path `0` was expected.
    #[error("path buffer ends before the length of path {0}")]
    MissingLength(usize),
    /// Path `0` declares zero cells.
    #[error("path {0} is empty")]
    EmptyPath(usize),
    /// A path declares more cells than the buffer holds.
    #[error("path {path} declares {declared} cells but only {available} remain")]
    Truncated {
        /// Position of the offending path.
        path: usize,
        /// Its declared length.
        declared: usize,
        /// Values left in the buffer.
        available: usize,
    },
    /// Values remain after the last declared path.
    #[error("{0} values trail the last path")]
    TrailingData(usize),
}

/// A set of vertex-disjoint paths over pixels, each an ordered list of [`CellId`]s.
///
/// Paths appear component by component, in the order their components were discovered.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PathCover {
    paths: Vec<Vec<CellId>>,
}

impl From<Vec<Vec<CellId>>> for PathCover {
    fn from(paths: Vec<Vec<CellId>>) -> Self {
        Self { paths }
    }
}

impl PathCover {
    /// The paths of this cover.
    pub fn paths(&self) -> &[Vec<CellId>] {
        &self.paths
    }

    /// Consume this cover, yielding its paths.
    pub fn into_paths(self) -> Vec<Vec<CellId>> {
        self.paths
    }

    /// Number of paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether this cover has no paths, i.e. it covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Total number of cells over all paths.
    pub fn cell_count(&self) -> usize {
        self.paths.iter().map(Vec::len).sum()
    }

    /// The `(first, last)` cells of every path. A single-cell path yields the same cell twice.
    pub fn endpoints(&self) -> impl Iterator<Item = (CellId, CellId)> + '_ {
        self.paths.iter()
            .filter_map(|path| path.first().zip(path.last()))
            .map(|(first, last)| (*first, *last))
    }

    /// Whether consecutive cells of every path are adjacent on `grid`.
    pub fn is_continuous(&self, grid: Grid) -> bool {
        self.paths.iter().all(|path| {
            path.iter()
                .tuple_windows()
                .all(|(a, b)| KingStep::direction_to(grid.location_of(*a), grid.location_of(*b)).is_some())
        })
    }

    /// Encode as `[pathCount, len(path0), path0..., len(path1), path1..., ...]`.
    pub fn to_flat(&self) -> Vec<u32> {
        let mut flat = Vec::with_capacity(1 + self.paths.len() + self.cell_count());
        flat.push(self.paths.len() as u32);
        for path in &self.paths {
            flat.push(path.len() as u32);
            flat.extend_from_slice(path);
        }
        flat
    }

    /// Decode the layout produced by [`Self::to_flat`].
    pub fn from_flat(buffer: &[u32]) -> Result<Self, TransportError> {
        let (&count, mut rest) = buffer.split_first().ok_or(TransportError::Empty)?;

        let mut paths = Vec::with_capacity(count as usize);
        for path in 0..count as usize {
            let (&len, tail) = rest.split_first().ok_or(TransportError::MissingLength(path))?;
            let declared = len as usize;
            if declared == 0 {
                return Err(TransportError::EmptyPath(path));
            }
            if tail.len() < declared {
                return Err(TransportError::Truncated { path, declared, available: tail.len() });
            }

            let (cells, after) = tail.split_at(declared);
            paths.push(cells.to_vec());
            rest = after;
        }

        if !rest.is_empty() {
            return Err(TransportError::TrailingData(rest.len()));
        }

        Ok(Self { paths })
    }

    /// Draw the rows of `grid` from the highest to the lowest covered row.
    /// The canvas holds `width` characters for every row in between, covered or not.
    ///
    /// Path `i` is drawn with the `i`-th letter of the alphabet (wrapping after `z`),
    /// uppercase at its endpoints and lowercase elsewhere; uncovered cells are `.`.
    pub fn render(&self, grid: Grid) -> String {
        let Some((top, bottom)) = grid.row_span(self.paths.iter().flatten().copied()) else {
            return String::new();
        };

        let mut canvas = Array2::from_elem((bottom - top + 1, grid.width().get()), '.');
        for (idx, path) in self.paths.iter().enumerate() {
            let letter = char::from(b'a' + (idx % 26) as u8);
            for (pos, cell) in path.iter().enumerate() {
                let location: Location = grid.location_of(*cell);
                canvas[location.as_index_below(top)] = if pos == 0 || pos + 1 == path.len() {
                    letter.to_ascii_uppercase()
                } else {
                    letter
                };
            }
        }

        let mut out = String::with_capacity(canvas.nrows() * (canvas.ncols() + 1));
        for row in canvas.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    /// Append the paths found for `component`, translating local indices through the graph's `cells`.
    pub(crate) fn push_component(&mut self, cells: &[CellId], component: &Component, paths: Vec<Vec<usize>>) {
        self.paths.extend(paths.into_iter().map(|path| {
            path.into_iter()
                .map(|local| cells[component.nodes[local]])
                .collect_vec()
        }));
    }
}
