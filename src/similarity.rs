use crate::chars::{CharDiff, OpKind};

/// Score how alike two lines are, in `[0, 1]`.
///
/// Identical lines score `1.0`. A line that is empty after trimming never
/// partially matches anything and scores `0.0`. Otherwise the score is the
/// number of chars in the equal fragments of the char diff divided by the
/// longer line's char count.
pub fn score(a: &str, b: &str, differ: &impl CharDiff) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.trim().is_empty() || b.trim().is_empty() {
        return 0.0;
    }

    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.0;
    }

    let common: usize = differ
        .diff(a, b)
        .iter()
        .filter(|op| op.kind == OpKind::Equal)
        .map(|op| op.len())
        .sum();

    common as f64 / longest as f64
}
