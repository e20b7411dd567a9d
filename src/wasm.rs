//! Bindings for calling the solver across a WebAssembly boundary.
//!
//! Results come back either flat, as `[pathCount, len(path0), path0..., len(path1), ...]`, or nested as an array of `Uint32Array`s.

use std::num::NonZero;

use itertools::Itertools;
use js_sys::{Array, Uint32Array};
use wasm_bindgen::prelude::*;

use crate::board::PixelBoard;
use crate::builder::PixelBoardBuilder;
use crate::cover::PathCover;
use crate::solver::DegreeOrder;

fn solve_board(
    width: u32,
    cells: &[u32],
    start: Option<u32>,
    end: Option<u32>,
    anchors: &[u32],
    descending: bool,
    exact_threshold: Option<u32>,
) -> Result<PathCover, JsValue> {
    let width = NonZero::new(width as usize).ok_or_else(|| JsValue::from_str("grid width must be positive"))?;

    let mut builder = PixelBoardBuilder::with_width(width);
    builder
        .add_cells(cells.iter().copied())
        .add_anchors(anchors.iter().copied())
        .degree_order(if descending { DegreeOrder::Descending } else { DegreeOrder::Ascending });
    if let Some(cell) = start {
        builder.start(cell);
    }
    if let Some(cell) = end {
        builder.end(cell);
    }
    if let Some(threshold) = exact_threshold {
        builder.exact_threshold(threshold as usize);
    }

    let board: PixelBoard = builder.build()
        .map_err(|reasons| JsValue::from_str(&reasons.iter().join("; ")))?;
    Ok(board.solve())
}

/// Cover `cells` of a grid `width` cells wide and return the paths in the flat layout.
///
/// `exact_threshold` overrides the largest component solved exactly; omit it for the default.
#[wasm_bindgen(js_name = solveFlat)]
pub fn solve_flat(
    width: u32,
    cells: &[u32],
    start: Option<u32>,
    end: Option<u32>,
    anchors: &[u32],
    descending: bool,
    exact_threshold: Option<u32>,
) -> Result<Vec<u32>, JsValue> {
    solve_board(width, cells, start, end, anchors, descending, exact_threshold).map(|cover| cover.to_flat())
}

/// Cover `cells` of a grid `width` cells wide and return one `Uint32Array` per path.
#[wasm_bindgen(js_name = solveNested)]
pub fn solve_nested(
    width: u32,
    cells: &[u32],
    start: Option<u32>,
    end: Option<u32>,
    anchors: &[u32],
    descending: bool,
    exact_threshold: Option<u32>,
) -> Result<Array, JsValue> {
    let cover = solve_board(width, cells, start, end, anchors, descending, exact_threshold)?;
    Ok(cover.paths().iter()
        .map(|path| Uint32Array::from(path.as_slice()))
        .collect())
}
