//! Validated construction of [`PixelBoard`]s.

use thiserror::Error;

use crate::board::PixelBoard;
use crate::exact::EXACT_LIMIT;
use crate::graph::PixelGraph;
use crate::location::{CellId, Dimension, Grid, MAX_DIMENSION};
use crate::solver::{DegreeOrder, SolveOptions};

/// The part a constrained cell was meant to play.
#[derive(Copy, Clone, Debug, strum::Display, Eq, PartialEq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum ConstraintRole {
    /// The first cell of a path.
    Start,
    /// The last cell of a path.
    End,
    /// Either end of some path.
    Anchor,
}

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// The grid is wider than [`MAX_DIMENSION`].
    #[error("grid width {0} exceeds the maximum of {}", MAX_DIMENSION)]
    WidthOutOfRange(Dimension),
    /// A start, end, or anchor names a cell which is not one of the pixels.
    #[error("{role} cell {cell} is not one of the pixels")]
    ConstraintOutsidePixels {
        /// What the cell was meant to be.
        role: ConstraintRole,
        /// The offending cell.
        cell: CellId,
    },
    /// The exact-solve threshold is above [`EXACT_LIMIT`].
    #[error("exact threshold {0} exceeds the limit of {}", EXACT_LIMIT)]
    ThresholdTooLarge(usize),
}

/// A builder for [`PixelBoard`]s.
///
/// Setters mutate the builder and return it for chaining; it can be [`Clone`]d to save its state at some point.
/// Once the builder is invalid, further setters do nothing.
#[derive(Clone, Debug)]
pub struct PixelBoardBuilder {
    width: Dimension,
    cells: Vec<CellId>,
    start: Option<CellId>,
    end: Option<CellId>,
    anchors: Vec<CellId>,
    options: SolveOptions,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl PixelBoardBuilder {
    /// Construct a new builder for a grid `width` cells wide, with no pixels and default [`SolveOptions`].
    pub fn with_width(width: Dimension) -> Self {
        let mut invalid_reasons = Vec::new();
        if width.get() > MAX_DIMENSION {
            invalid_reasons.push(BuilderInvalidReason::WidthOutOfRange(width));
        }

        Self {
            width,
            cells: Default::default(),
            start: None,
            end: None,
            anchors: Default::default(),
            options: Default::default(),
            invalid_reasons,
        }
    }

    /// Add one occupied pixel. Repeated pixels are ignored.
    pub fn add_cell(&mut self, cell: CellId) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.cells.push(cell);
        }
        self
    }

    /// Add occupied pixels. Repeated pixels are ignored.
    pub fn add_cells(&mut self, cells: impl IntoIterator<Item = CellId>) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.cells.extend(cells);
        }
        self
    }

    /// Require the path through `cell`'s component to begin at `cell`, replacing any earlier start.
    ///
    /// Checked against the pixels when building.
    pub fn start(&mut self, cell: CellId) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.start = Some(cell);
        }
        self
    }

    /// Require the first path of `cell`'s component to end at `cell`, replacing any earlier end.
    ///
    /// Checked against the pixels when building.
    pub fn end(&mut self, cell: CellId) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.end = Some(cell);
        }
        self
    }

    /// Ask for `cell` to be an endpoint of some path.
    pub fn add_anchor(&mut self, cell: CellId) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.anchors.push(cell);
        }
        self
    }

    /// Shorthand for multiple calls to [`Self::add_anchor`].
    pub fn add_anchors(&mut self, cells: impl IntoIterator<Item = CellId>) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.anchors.extend(cells);
        }
        self
    }

    /// See [`SolveOptions::degree_order`].
    pub fn degree_order(&mut self, order: DegreeOrder) -> &mut Self {
        self.options.degree_order = order;
        self
    }

    /// See [`SolveOptions::exact_threshold`].
    ///
    /// May cause the builder to enter a [`ThresholdTooLarge`](BuilderInvalidReason::ThresholdTooLarge) invalid state.
    pub fn exact_threshold(&mut self, threshold: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if threshold > EXACT_LIMIT {
            self.invalid_reasons.push(BuilderInvalidReason::ThresholdTooLarge(threshold));
            return self;
        }

        self.options.exact_threshold = threshold;
        self
    }

    /// See [`SolveOptions::step_budget`].
    pub fn step_budget(&mut self, steps: u64) -> &mut Self {
        self.options.step_budget = steps;
        self
    }

    /// See [`SolveOptions::seed`].
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.options.seed = seed;
        self
    }

    /// See [`SolveOptions::memoize`].
    pub fn memoize(&mut self, memoize: bool) -> &mut Self {
        self.options.memoize = memoize;
        self
    }

    /// Replace every option at once.
    pub fn options(&mut self, options: SolveOptions) -> &mut Self {
        if options.exact_threshold > EXACT_LIMIT {
            return self.exact_threshold(options.exact_threshold);
        }

        self.options = options;
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// Constraints are checked against the pixels only by [`Self::build`].
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`PixelBoard`].
    /// If the builder is invalid for any reason, including constraints on cells that are not pixels,
    /// a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<PixelBoard, Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(self.invalid_reasons.clone());
        }

        // checked in with_width
        let Some(grid) = Grid::with_width(self.width) else {
            return Err(vec![BuilderInvalidReason::WidthOutOfRange(self.width)]);
        };
        let pixels = PixelGraph::build(grid, self.cells.iter().copied());

        let outside = self.start.map(|cell| (ConstraintRole::Start, cell)).into_iter()
            .chain(self.end.map(|cell| (ConstraintRole::End, cell)))
            .chain(self.anchors.iter().map(|cell| (ConstraintRole::Anchor, *cell)))
            .filter(|(_, cell)| !pixels.index_of.contains_key(cell))
            .map(|(role, cell)| BuilderInvalidReason::ConstraintOutsidePixels { role, cell })
            .collect::<Vec<_>>();
        if !outside.is_empty() {
            log::warn!("builder.build: {} constraints name cells outside the pixels", outside.len());
            return Err(outside);
        }

        Ok(PixelBoard {
            grid,
            pixels,
            start: self.start,
            end: self.end,
            anchors: self.anchors.clone(),
            options: self.options.clone(),
        })
    }
}
