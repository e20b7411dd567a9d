use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random keys used to fingerprint search states.
///
/// A state's fingerprint is the XOR of the `removed` keys of every node no longer remaining,
/// optionally mixed with the `tail` key of the node the current path ends at
/// and the `endpoint` keys of required nodes already at a path end.
#[derive(Clone, Debug)]
pub(crate) struct Fingerprints {
    pub(crate) removed: Vec<u64>,
    pub(crate) tail: Vec<u64>,
    /// Zero for nodes which need not be endpoints.
    pub(crate) endpoint: Vec<u64>,
    /// Mixed into states whose open path still has to end at the forced end.
    pub(crate) first_path: u64,
}

impl Fingerprints {
    pub(crate) fn seeded(n: usize, required: &[usize], seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let removed = (0..n).map(|_| rng.gen::<u64>()).collect_vec();
        let tail = (0..n).map(|_| rng.gen::<u64>()).collect_vec();
        let first_path = rng.gen();
        let mut endpoint = vec![0; n];
        for &node in required {
            endpoint[node] = rng.gen();
        }

        Self {
            removed,
            tail,
            endpoint,
            first_path,
        }
    }
}

/// The mutable part of a backtracking search: which nodes remain and how many remaining neighbors each has.
///
/// [`Self::remove`] and [`Self::restore`] are exact inverses and must be paired in LIFO order.
#[derive(Clone, Debug)]
pub(crate) struct SearchState<'a> {
    neighbors: &'a [Vec<usize>],
    remaining: Vec<bool>,
    degree: Vec<usize>,
    remaining_count: usize,
    keys: &'a [u64],
    fingerprint: u64,
}

impl<'a> SearchState<'a> {
    pub(crate) fn new(neighbors: &'a [Vec<usize>], keys: &'a [u64]) -> Self {
        debug_assert_eq!(neighbors.len(), keys.len());
        Self {
            neighbors,
            remaining: vec![true; neighbors.len()],
            degree: neighbors.iter().map(Vec::len).collect_vec(),
            remaining_count: neighbors.len(),
            keys,
            fingerprint: 0,
        }
    }

    pub(crate) fn remove(&mut self, node: usize) {
        debug_assert!(self.remaining[node], "node {node} removed twice");
        self.remaining[node] = false;
        self.remaining_count -= 1;
        self.fingerprint ^= self.keys[node];
        for &nb in &self.neighbors[node] {
            self.degree[nb] -= 1;
        }
    }

    pub(crate) fn restore(&mut self, node: usize) {
        debug_assert!(!self.remaining[node], "node {node} restored while remaining");
        for &nb in &self.neighbors[node] {
            self.degree[nb] += 1;
        }
        self.fingerprint ^= self.keys[node];
        self.remaining_count += 1;
        self.remaining[node] = true;
    }

    #[inline]
    pub(crate) fn is_remaining(&self, node: usize) -> bool {
        self.remaining[node]
    }

    /// Number of remaining neighbors of `node`.
    #[inline]
    pub(crate) fn degree(&self, node: usize) -> usize {
        self.degree[node]
    }

    #[inline]
    pub(crate) fn remaining_count(&self) -> usize {
        self.remaining_count
    }

    #[inline]
    pub(crate) fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub(crate) fn remaining_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.remaining.iter().positions(|remaining| *remaining)
    }

    pub(crate) fn remaining_neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors[node].iter().copied().filter(|nb| self.remaining[*nb])
    }
}
