//! Neighborhood shapes: the directions a pixel connects in.

use std::hash::Hash;

use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// Functionality that must be implemented on a case-by-case basis for any neighborhood shape.
///
/// [`KingStep`] is the built-in implementation, connecting a pixel to all eight surrounding pixels.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside the grid; callers check it when encoding it as a cell.
    fn attempt_from(&self, location: Location) -> Location;
    /// The static array of all "forward" directions.
    ///
    /// Forward directions should be those which, upon stepping from one location to another, cause the destination cell id to be higher than the origin's.
    /// For example, for [`KingStep`] and the row-major cell encoding, [`Right`](KingStep::Right) and [`Down`](KingStep::Down) are forward directions.
    const FORWARD_VARIANTS: &'static [Self];
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;
}

/// The eight king-move directions of a pixel grid, in the order neighbors are discovered.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[allow(missing_docs)]
pub enum KingStep {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Step for KingStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::UpRight => location.offset_by((1, -1)),
            Self::Right => location.offset_by((1, 0)),
            Self::DownRight => location.offset_by((1, 1)),
            Self::Down => location.offset_by((0, 1)),
            Self::DownLeft => location.offset_by((-1, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::UpLeft => location.offset_by((-1, -1)),
        }
    }

    const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::DownRight, Self::Down, Self::DownLeft];

    fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::Right => Self::Left,
            Self::DownRight => Self::UpLeft,
            Self::Down => Self::Up,
            Self::DownLeft => Self::UpRight,
            Self::Left => Self::Right,
            Self::UpLeft => Self::DownRight,
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation across all shapes.
pub trait GridShape: Step {
    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction in `Self::VARIANTS`.
    fn neighbors_of(location: Location) -> Vec<(Self, Location)>;
    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Step::attempt_from) until one works.
    ///
    /// Returns [`None`] unless the two locations are adjacent.
    fn direction_to(a: Location, b: Location) -> Option<Self>;
    /// Convert this [`Self`] to a "forward" direction, if it is not already such a direction.
    fn ensure_forward(&self) -> Self;
}

impl<Sh> GridShape for Sh
where
    Sh: Step,
{
    fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }

    fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    fn ensure_forward(&self) -> Self {
        match Self::FORWARD_VARIANTS.contains(self) {
            true => *self,
            false => self.invert(),
        }
    }
}
