//! Heuristic minimum path cover by degree-biased backtracking.
//!
//! The search repeatedly starts a path at an extreme-degree node and extends it through unused neighbors,
//! closing the path when stuck and starting another until every node is covered.
//! Branches are cut when they cannot beat the best cover found so far, and repeated states are skipped via a
//! fingerprint table. The depth-first walk keeps its own frame stack so long paths never exhaust the host stack.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use itertools::Itertools;

use crate::score::{Incumbent, Score};
use crate::solver::{Constraints, DegreeOrder, SolveOptions};
use crate::state::{Fingerprints, SearchState};

/// The result of one cover search over a component.
#[derive(Clone, Debug)]
pub(crate) struct SearchOutcome {
    pub(crate) paths: Vec<Vec<usize>>,
    pub(crate) score: Score,
    pub(crate) steps: u64,
    pub(crate) exhausted: bool,
    /// For each path extension, the candidates in the order tried, with their remaining degree.
    #[cfg(test)]
    pub(crate) trace: Option<Vec<Vec<(usize, usize)>>>,
}

/// A configured cover search over the graph given by `neighbors`.
pub(crate) struct CoverSearch<'a> {
    neighbors: &'a [Vec<usize>],
    constraints: &'a Constraints,
    options: &'a SolveOptions,
    record_choices: bool,
}

impl<'a> CoverSearch<'a> {
    pub(crate) fn new(neighbors: &'a [Vec<usize>], constraints: &'a Constraints, options: &'a SolveOptions) -> Self {
        Self {
            neighbors,
            constraints,
            options,
            record_choices: false,
        }
    }

    /// Record every extension's candidate ordering in [`SearchOutcome::trace`].
    #[cfg(test)]
    pub(crate) fn record_choices(mut self) -> Self {
        self.record_choices = true;
        self
    }

    pub(crate) fn run(&self) -> SearchOutcome {
        let n = self.neighbors.len();
        let fingerprints = Fingerprints::seeded(n, &self.constraints.required, self.options.seed);
        let mut search = Search {
            constraints: self.constraints,
            options: self.options,
            state: SearchState::new(self.neighbors, &fingerprints.removed),
            fingerprints: &fingerprints,
            memo: HashMap::new(),
            path: Vec::new(),
            paths: Vec::new(),
            settled: 0,
            best: None,
            steps: 0,
            exhausted: false,
            relaxed: false,
            done: false,
            trace: self.record_choices.then(Vec::new),
        };

        search.walk();
        if search.best.is_none() && self.constraints.end.is_some() {
            // the forced end cannot finish the first path; cover anyway
            log::debug!("backtrack.cover: relaxing end constraint n={n} steps={}", search.steps);
            search.relaxed = true;
            search.memo.clear();
            search.walk();
        }

        let Incumbent { score, paths } = search.best.take().unwrap_or_else(|| {
            let paths = (0..n).map(|node| vec![node]).collect_vec();
            Incumbent {
                score: Score::of(&paths, &self.constraints.required),
                paths,
            }
        });

        log::debug!(
            "backtrack.cover: done n={n} paths={} level={} anchors={}/{} steps={} exhausted={}",
            score.path_count,
            score.level,
            score.anchor_count,
            self.constraints.required.len(),
            search.steps,
            search.exhausted,
        );

        SearchOutcome {
            paths,
            score,
            steps: search.steps,
            exhausted: search.exhausted,
            #[cfg(test)]
            trace: search.trace,
        }
    }
}

/// One pending undo on the explicit search stack.
enum Frame {
    /// The open path is being extended through `candidates[cursor..]`; once those run out it is closed.
    Extend {
        candidates: Vec<usize>,
        cursor: usize,
        /// The candidate currently removed and appended to the path.
        stepped: Option<usize>,
        closed: bool,
    },
    /// The previously open path was committed; popping reopens it.
    Close,
    /// `node` was removed to begin a new path; popping restores it.
    Start { node: usize },
}

struct Search<'a> {
    constraints: &'a Constraints,
    options: &'a SolveOptions,
    state: SearchState<'a>,
    fingerprints: &'a Fingerprints,
    memo: HashMap<u64, usize>,
    path: Vec<usize>,
    paths: Vec<Vec<usize>>,
    /// XOR of the endpoint keys of required nodes at the ends of `paths` or at the start of `path`.
    settled: u64,
    best: Option<Incumbent>,
    steps: u64,
    exhausted: bool,
    relaxed: bool,
    done: bool,
    trace: Option<Vec<Vec<(usize, usize)>>>,
}

impl Search<'_> {
    fn walk(&mut self) {
        let mut stack = Vec::new();
        self.enter_search(&mut stack);

        while let Some(frame) = stack.last_mut() {
            match frame {
                Frame::Start { node } => {
                    let node = *node;
                    stack.pop();
                    self.path.pop();
                    self.settled ^= self.fingerprints.endpoint[node];
                    self.state.restore(node);
                }
                Frame::Close => {
                    stack.pop();
                    self.path = self.paths.pop().unwrap_or_default();
                    self.settled ^= self.closing_key();
                }
                Frame::Extend { candidates, cursor, stepped, closed } => {
                    if let Some(prev) = stepped.take() {
                        self.path.pop();
                        self.state.restore(prev);
                    }

                    if self.should_unwind() {
                        stack.pop();
                    } else if *cursor < candidates.len() {
                        let next = candidates[*cursor];
                        *cursor += 1;
                        *stepped = Some(next);
                        self.state.remove(next);
                        self.path.push(next);
                        self.enter_extend(next, &mut stack);
                    } else if !*closed {
                        *closed = true;
                        if self.may_close() {
                            self.settled ^= self.closing_key();
                            self.paths.push(std::mem::take(&mut self.path));
                            stack.push(Frame::Close);
                            self.enter_search(&mut stack);
                        }
                    } else {
                        stack.pop();
                    }
                }
            }
        }

        debug_assert!(self.path.is_empty() && self.paths.is_empty());
        debug_assert_eq!(self.state.remaining_count(), self.fingerprints.removed.len());
    }

    /// Begin a new path, or score the cover if nothing remains.
    fn enter_search(&mut self, stack: &mut Vec<Frame>) {
        if self.state.remaining_count() == 0 {
            self.record();
            return;
        }

        if self.pruned() || !self.visit(self.state.fingerprint() ^ self.settled ^ self.first_path_tag()) {
            return;
        }

        let node = match self.constraints.start {
            Some(start) if self.paths.is_empty() && self.state.is_remaining(start) => start,
            _ => self.pick_start(),
        };

        self.state.remove(node);
        self.settled ^= self.fingerprints.endpoint[node];
        self.path.push(node);
        stack.push(Frame::Start { node });
        self.enter_extend(node, stack);
    }

    /// Open an extension frame for the path now ending at `node`.
    fn enter_extend(&mut self, node: usize, stack: &mut Vec<Frame>) {
        self.steps += 1;
        if !self.exhausted && self.steps > self.options.step_budget {
            self.exhausted = true;
            log::debug!("backtrack.cover: step budget exhausted steps={} found={}", self.steps, self.best.is_some());
        }

        if self.should_unwind() || self.pruned() {
            return;
        }

        let key = self.state.fingerprint() ^ self.fingerprints.tail[node] ^ self.settled ^ self.first_path_tag();
        if !self.visit(key) {
            return;
        }

        let candidates = match self.options.degree_order {
            DegreeOrder::Ascending => self.state.remaining_neighbors(node)
                .sorted_by_key(|nb| self.state.degree(*nb))
                .collect_vec(),
            DegreeOrder::Descending => self.state.remaining_neighbors(node)
                .sorted_by_key(|nb| Reverse(self.state.degree(*nb)))
                .collect_vec(),
        };

        if let Some(trace) = self.trace.as_mut() {
            trace.push(candidates.iter().map(|nb| (*nb, self.state.degree(*nb))).collect_vec());
        }

        stack.push(Frame::Extend {
            candidates,
            cursor: 0,
            stepped: None,
            closed: false,
        });
    }

    /// The remaining node of extreme remaining degree; ties go to the lowest index.
    fn pick_start(&self) -> usize {
        let picked = match self.options.degree_order {
            DegreeOrder::Ascending => self.state.remaining_nodes().min_by_key(|node| self.state.degree(*node)),
            DegreeOrder::Descending => self.state.remaining_nodes().min_by_key(|node| Reverse(self.state.degree(*node))),
        };
        // only called while nodes remain
        picked.unwrap_or_default()
    }

    fn should_unwind(&self) -> bool {
        self.done || (self.exhausted && self.best.is_some())
    }

    /// The first path may only close at the forced end, unless the constraint was given up.
    fn may_close(&self) -> bool {
        match self.constraints.end {
            Some(end) if self.paths.is_empty() && !self.relaxed && !self.exhausted => self.path.last() == Some(&end),
            _ => true,
        }
    }

    /// Endpoint key gained by closing the open path; its first node was counted when the path began.
    fn closing_key(&self) -> u64 {
        match self.path.as_slice() {
            [_, .., last] => self.fingerprints.endpoint[*last],
            _ => 0,
        }
    }

    fn first_path_tag(&self) -> u64 {
        match self.constraints.end {
            Some(_) if self.paths.is_empty() && !self.relaxed => self.fingerprints.first_path,
            _ => 0,
        }
    }

    /// Whether the open path count already rules out beating the incumbent.
    fn pruned(&self) -> bool {
        self.best.as_ref().is_some_and(|best| {
            !best.score.beatable_with(self.paths.len() + 1, self.constraints.required.len())
        })
    }

    /// Mark the state `key` as explored at the current depth.
    /// Returns `false` if it was already explored at the same or a shallower depth.
    fn visit(&mut self, key: u64) -> bool {
        if !self.options.memoize || self.exhausted {
            return true;
        }

        let depth = self.paths.len();
        match self.memo.entry(key) {
            Entry::Occupied(seen) if *seen.get() <= depth => false,
            Entry::Occupied(mut seen) => {
                seen.insert(depth);
                true
            }
            Entry::Vacant(slot) => {
                slot.insert(depth);
                true
            }
        }
    }

    fn record(&mut self) {
        let score = Score::of(&self.paths, &self.constraints.required);
        if self.best.as_ref().is_some_and(|best| !score.beats(&best.score)) {
            return;
        }

        log::trace!(
            "backtrack.cover: incumbent paths={} level={} anchors={} steps={}",
            score.path_count,
            score.level,
            score.anchor_count,
            self.steps,
        );
        self.done = score.is_final(self.constraints.required.len());
        self.best = Some(Incumbent {
            score,
            paths: self.paths.clone(),
        });
    }
}
