#![warn(missing_docs)]

//! # `strokecover`
//!
//! Turns a hand-drawn blob of pixels into as few continuous pen strokes as practical.
//! Begin by describing the pixels of one drawing layer with a [`PixelBoardBuilder`](builder::PixelBoardBuilder),
//! optionally naming a start cell, an end cell, or anchor cells which should become stroke endpoints.
//! Build it into a [`PixelBoard`], then call [`solve()`](crate::PixelBoard::solve) to get a [`PathCover`]:
//! vertex-disjoint paths of 8-adjacent pixels which together visit every pixel exactly once.
//!
//! Pixels are identified by [`CellId`]s, encoding the location `(x, y)` as `x + width * y` on a [`Grid`].
//!
//! # Internals
//! Finding a single path through every pixel is the Hamiltonian path problem, which is NP-complete,
//! so the solver splits the work and mixes an exact method with a heuristic one.
//!
//! Given input, express the pixels as an undirected graph G. A vertex corresponds to a pixel and an edge joins two pixels touching
//! along a side or at a corner. Each vertex lists its neighbors from the most to the least constrained, judged by degree.
//!
//! G is then split into connected components, each covered independently:
//! 1. A component of at most [`EXACT_LIMIT`](exact::EXACT_LIMIT) pixels is handed to a dynamic program over subsets of its vertices,
//! which finds a Hamiltonian path honoring the start and end, if one exists.
//! 2. Otherwise, a budgeted backtracking search builds paths one at a time, always stepping to the neighbor with the fewest
//! remaining neighbors (or the most, see [`DegreeOrder`]). It keeps the best cover found so far, ranked first by how well
//! the anchors are honored and then by path count, cuts branches which cannot beat it, and skips states it has already explored.
//! When the step budget runs out, the best cover found so far is returned; the search never fails to cover every pixel.
//!
//! With the `wasm` feature, [`wasm`] exposes the solver to JavaScript using a flat `[pathCount, len(path0), path0..., ...]` buffer.

pub use board::PixelBoard;
pub use builder::{BuilderInvalidReason, ConstraintRole, PixelBoardBuilder};
pub use cover::{PathCover, TransportError};
pub use location::{CellId, Dimension, Grid, Location, MAX_DIMENSION};
pub use solver::{DegreeOrder, SolveOptions};

pub(crate) mod board;
mod tests;
pub(crate) mod location;
pub mod shape;
pub mod builder;
pub(crate) mod cover;
pub mod exact;
pub(crate) mod graph;
pub(crate) mod partition;
pub(crate) mod state;
pub(crate) mod score;
pub(crate) mod backtrack;
pub(crate) mod solver;
#[cfg(feature = "wasm")]
pub mod wasm;
