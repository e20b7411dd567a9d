use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::cover::PathCover;
use crate::graph::PixelGraph;
use crate::location::{CellId, Grid};
use crate::solver;
use crate::solver::SolveOptions;

/// The occupied pixels of one drawing layer, with the endpoint constraints to honor when covering them.
///
/// [`PixelBoard`]s should be built using a [`PixelBoardBuilder`](crate::builder::PixelBoardBuilder), which validates the constraints.
#[derive(Clone, Debug)]
pub struct PixelBoard {
    pub(crate) grid: Grid,
    pub(crate) pixels: PixelGraph,
    pub(crate) start: Option<CellId>,
    pub(crate) end: Option<CellId>,
    pub(crate) anchors: Vec<CellId>,
    pub(crate) options: SolveOptions,
}

impl PixelBoard {
    /// Cover every pixel with vertex-disjoint paths of adjacent pixels, using as few paths as practical.
    ///
    /// Small components are solved exactly; larger ones, and small ones no single path can cover under the constraints,
    /// are covered by a budgeted search which always yields a complete cover.
    /// The start and end apply to the component containing them: where possible, that component's first path
    /// begins at the start and ends at the end. Anchors are kept at path ends where possible.
    pub fn solve(&self) -> PathCover {
        solver::solve(&self.pixels, self.start, self.end, &self.anchors, &self.options)
    }

    /// The grid the pixels lie on.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The distinct pixels, in first-seen order.
    pub fn cells(&self) -> &[CellId] {
        &self.pixels.cells
    }

    /// The options [`Self::solve`] will use.
    pub fn options(&self) -> &SolveOptions {
        &self.options
    }
}

impl Display for PixelBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((top, bottom)) = self.grid.row_span(self.pixels.cells.iter().copied()) else {
            return Ok(());
        };

        // rows above the first pixel are left out
        let mut canvas = Array2::from_elem((bottom - top + 1, self.grid.width().get()), '.');
        for cell in &self.pixels.cells {
            canvas[self.grid.location_of(*cell).as_index_below(top)] = '#';
        }

        for row in canvas.rows() {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
