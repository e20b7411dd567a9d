use std::num::NonZero;

use itertools::Itertools;

pub(crate) type Coord = usize;
/// A non-zero grid dimension.
pub type Dimension = NonZero<Coord>;
/// A cell identifier, encoded as `x + width * y`.
pub type CellId = u32;

/// The widest grid a [`Grid`] may describe.
pub const MAX_DIMENSION: Coord = 65_535;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Index into a canvas whose first row is grid row `top`.
    pub(crate) fn as_index_below(&self, top: Coord) -> (Coord, Coord) {
        (self.1 - top, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

/// The encoding between [`Location`]s and [`CellId`]s for a grid of a given width.
///
/// Rows are unbounded; a location maps to a cell only while its id still fits in a [`CellId`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Grid {
    width: Dimension,
}

impl Grid {
    /// Construct a grid `width` cells wide.
    /// Returns [`None`] if `width` exceeds [`MAX_DIMENSION`].
    pub fn with_width(width: Dimension) -> Option<Self> {
        (width.get() <= MAX_DIMENSION).then_some(Self { width })
    }

    /// The width of this grid.
    pub fn width(&self) -> Dimension {
        self.width
    }

    /// Decode `cell` into its `(x, y)` location.
    pub fn location_of(&self, cell: CellId) -> Location {
        let cell = cell as Coord;
        Location(cell % self.width.get(), cell / self.width.get())
    }

    /// The first and last rows holding any of `cells`, or [`None`] if there are none.
    pub(crate) fn row_span(&self, cells: impl IntoIterator<Item = CellId>) -> Option<(Coord, Coord)> {
        cells.into_iter()
            .map(|cell| self.location_of(cell).1)
            .minmax()
            .into_option()
    }

    /// Encode `location`, or [`None`] if it lies outside the grid.
    ///
    /// Locations produced by stepping off the left or top edge wrap to huge coordinates and are rejected here.
    pub fn cell_at(&self, location: Location) -> Option<CellId> {
        if location.0 >= self.width.get() {
            return None;
        }

        location.1
            .checked_mul(self.width.get())
            .and_then(|row| row.checked_add(location.0))
            .and_then(|id| CellId::try_from(id).ok())
    }
}
