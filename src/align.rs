//! Smart line matching between two versions of a document.
//!
//! Lines are paired in three passes, each one only looking at lines the
//! previous passes left unclaimed:
//!
//! 1. **Exact**: every original line claims the first unclaimed modified line
//!    with identical content.
//! 2. **Similarity**: every remaining original line claims the unclaimed
//!    modified line it scores highest against, if that score reaches
//!    [`SIMILARITY_THRESHOLD`].
//! 3. **Leftover**: whatever is still unclaimed becomes a pure deletion or a
//!    pure insertion.
//!
//! This is a heuristic, not a minimal edit script. It is quadratic in the
//! number of unmatched lines, which is why large inputs take the fast path.

use crate::chars::CharDiff;
use crate::lines::LineRecord;
use crate::similarity;
use log::trace;

/// Lowest similarity at which two different lines are considered the same line, edited
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Added to the modified index of a pure insertion to build its sort key.
///
/// Insertions therefore sort after every original line with an index below
/// this offset. Documents longer than this interleave insertions with
/// original lines by raw index.
pub const INSERTION_SORT_OFFSET: usize = 1000;

/// One row of an alignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentPair {
    pub original_index: Option<usize>,
    pub modified_index: Option<usize>,
    /// `1.0` identical, `0.0` unmatched, in between for an edited line
    pub similarity: f64,
}

impl AlignmentPair {
    fn matched(original_index: usize, modified_index: usize, similarity: f64) -> Self {
        Self {
            original_index: Some(original_index),
            modified_index: Some(modified_index),
            similarity,
        }
    }

    fn sort_key(&self) -> usize {
        match (self.original_index, self.modified_index) {
            (Some(original), _) => original,
            (None, Some(modified)) => modified + INSERTION_SORT_OFFSET,
            (None, None) => usize::MAX,
        }
    }
}

/// Pair up the lines of two versions.
///
/// Every original and every modified index appears in exactly one pair.
pub fn align(
    original: &[LineRecord<'_>],
    modified: &[LineRecord<'_>],
    differ: &impl CharDiff,
) -> Vec<AlignmentPair> {
    let mut pairs = Vec::with_capacity(original.len().max(modified.len()));
    let mut original_used = vec![false; original.len()];
    let mut modified_used = vec![false; modified.len()];

    // Exact pass
    for (i, line) in original.iter().enumerate() {
        let found = modified
            .iter()
            .enumerate()
            .find(|(j, candidate)| !modified_used[*j] && candidate.content == line.content);

        if let Some((j, _)) = found {
            pairs.push(AlignmentPair::matched(i, j, 1.0));
            original_used[i] = true;
            modified_used[j] = true;
        }
    }
    trace!("exact pass matched {} lines", pairs.len());

    // Similarity pass
    let exact = pairs.len();
    for (i, line) in original.iter().enumerate() {
        if original_used[i] {
            continue;
        }

        let mut best: Option<(usize, f64)> = None;
        for (j, candidate) in modified.iter().enumerate() {
            if modified_used[j] {
                continue;
            }

            let similarity = similarity::score(line.content, candidate.content, differ);
            let best_so_far = best.map_or(0.0, |(_, s)| s);
            if similarity > best_so_far && similarity >= SIMILARITY_THRESHOLD {
                best = Some((j, similarity));
            }
        }

        if let Some((j, similarity)) = best {
            pairs.push(AlignmentPair::matched(i, j, similarity));
            original_used[i] = true;
            modified_used[j] = true;
        }
    }
    trace!("similarity pass matched {} lines", pairs.len() - exact);

    // Leftover pass
    pairs.extend(
        original_used
            .iter()
            .enumerate()
            .filter(|(_, used)| !**used)
            .map(|(i, _)| AlignmentPair {
                original_index: Some(i),
                modified_index: None,
                similarity: 0.0,
            }),
    );
    pairs.extend(
        modified_used
            .iter()
            .enumerate()
            .filter(|(_, used)| !**used)
            .map(|(j, _)| AlignmentPair {
                original_index: None,
                modified_index: Some(j),
                similarity: 0.0,
            }),
    );

    pairs.sort_by_key(AlignmentPair::sort_key);
    pairs
}
