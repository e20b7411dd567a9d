//! Exact Hamiltonian paths for small components, by dynamic programming over vertex subsets.
//!
//! Entry `(mask, v)` of the table records whether some simple path visits exactly the vertices of `mask` and ends at `v`.
//! Every such path has `popcount(mask) - 1` edges, so the minimum edge count is implied and only the predecessor is stored.

/// The largest component the subset table may be built for; the table takes `2^n * n` bytes.
pub const EXACT_LIMIT: usize = 20;

const UNREACHED: u8 = u8::MAX;
const ORIGIN: u8 = u8::MAX - 1;

#[inline]
fn bit(node: usize) -> usize {
    1 << node
}

/// Find a Hamiltonian path over the graph given by `neighbors`, optionally forced to begin at `start` and finish at `end`.
///
/// Returns [`None`] if no path satisfies the constraints.
/// Without a forced end, the lowest-indexed reachable final vertex is chosen.
pub(crate) fn hamiltonian_path(neighbors: &[Vec<usize>], start: Option<usize>, end: Option<usize>) -> Option<Vec<usize>> {
    let n = neighbors.len();
    if n == 0 {
        return Some(Vec::new());
    }
    debug_assert!(n <= EXACT_LIMIT, "subset table requested for {n} nodes");

    let full = bit(n) - 1;
    let mut pred = vec![UNREACHED; bit(n) * n];

    match start {
        Some(s) => pred[bit(s) * n + s] = ORIGIN,
        None => (0..n).for_each(|v| pred[bit(v) * n + v] = ORIGIN),
    }

    for mask in 1..full {
        for v in 0..n {
            if mask & bit(v) == 0 || pred[mask * n + v] == UNREACHED {
                continue;
            }

            for &nb in &neighbors[v] {
                if mask & bit(nb) != 0 {
                    continue;
                }
                let next = (mask | bit(nb)) * n + nb;
                // first arrival wins; all arrivals share the same length
                if pred[next] == UNREACHED {
                    pred[next] = v as u8;
                }
            }
        }
    }

    let last = match end {
        Some(e) => (pred[full * n + e] != UNREACHED).then_some(e)?,
        None => (0..n).find(|v| pred[full * n + v] != UNREACHED)?,
    };

    let mut path = Vec::with_capacity(n);
    let mut mask = full;
    let mut v = last;
    loop {
        path.push(v);
        let p = pred[mask * n + v];
        if p == ORIGIN {
            break;
        }
        mask &= !bit(v);
        v = p as usize;
    }
    path.reverse();

    debug_assert_eq!(path.len(), n);
    Some(path)
}
