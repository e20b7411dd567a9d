use std::cmp::Ordering;
use std::collections::HashSet;

use strum::Display;

/// How well a complete cover honors the required anchors.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub(crate) enum Level {
    /// No required anchor is a path endpoint.
    Untouched,
    /// At least one required anchor is a path endpoint, but the cover has several paths.
    Touched,
    /// A single path with some, but not all, required anchors at its ends.
    Partial,
    /// A single path with every required anchor at its ends.
    Complete,
}

impl Level {
    /// The best level any cover of `path_count` paths can reach.
    fn ceiling(path_count: usize, required: usize) -> Self {
        match (path_count, required) {
            (1, _) => Self::Complete,
            (_, 0) => Self::Untouched,
            _ => Self::Touched,
        }
    }
}

/// Quality of a complete cover; see [`Score::cmp_quality`] for the ranking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Score {
    pub(crate) level: Level,
    pub(crate) path_count: usize,
    pub(crate) anchor_count: usize,
}

impl Score {
    /// Score `paths` against the `required` endpoints.
    pub(crate) fn of(paths: &[Vec<usize>], required: &[usize]) -> Self {
        let endpoints: HashSet<usize> = paths.iter()
            .flat_map(|path| [path.first(), path.last()])
            .flatten()
            .copied()
            .collect();
        let anchor_count = required.iter().filter(|anchor| endpoints.contains(anchor)).count();

        let level = match (paths.len(), anchor_count) {
            (1, satisfied) if satisfied == required.len() => Level::Complete,
            (1, 0) => Level::Untouched,
            (1, _) => Level::Partial,
            (_, 0) => Level::Untouched,
            _ => Level::Touched,
        };

        Self {
            level,
            path_count: paths.len(),
            anchor_count,
        }
    }

    /// Higher level first, then fewer paths, then more satisfied anchors.
    pub(crate) fn cmp_quality(&self, other: &Self) -> Ordering {
        self.level.cmp(&other.level)
            .then(other.path_count.cmp(&self.path_count))
            .then(self.anchor_count.cmp(&other.anchor_count))
    }

    #[inline]
    pub(crate) fn beats(&self, other: &Self) -> bool {
        self.cmp_quality(other) == Ordering::Greater
    }

    /// Whether the search may stop once this score is reached.
    pub(crate) fn is_final(&self, required: usize) -> bool {
        self.level == Level::Complete || (self.level == Level::Partial && required == 1)
    }

    /// Whether some cover of at least `path_count` paths could still beat this score.
    pub(crate) fn beatable_with(&self, path_count: usize, required: usize) -> bool {
        if required > 0 && self.level == Level::Untouched {
            return true;
        }

        match path_count.cmp(&self.path_count) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.level < Level::ceiling(path_count, required) || self.anchor_count < required,
        }
    }
}

/// The best cover found so far in one search.
#[derive(Clone, Debug)]
pub(crate) struct Incumbent {
    pub(crate) score: Score,
    pub(crate) paths: Vec<Vec<usize>>,
}
