//! Split evaluation: binary entropy, information gain, and the exhaustive
//! (attribute, threshold) search used while growing a tree.
use crate::constants::{THRESHOLD_MAX, THRESHOLD_MIN};
use crate::data::Dataset;
use rayon::prelude::*;

/// A candidate split and the information gain it achieves. Transient, only
/// used during training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    pub attribute: usize,
    pub threshold: i64,
    pub gain: f64,
}

/// Binary entropy of a two-class frequency pair, in bits.
///
/// A class with zero count contributes exactly zero, by the convention
/// `0 * log2(0) = 0`; an empty pair has zero entropy.
pub fn entropy(count0: usize, count1: usize) -> f64 {
    let n = (count0 + count1) as f64;
    let mut e = 0.0;
    if count0 > 0 {
        let p = count0 as f64 / n;
        e -= p * p.log2();
    }
    if count1 > 0 {
        let p = count1 as f64 / n;
        e -= p * p.log2();
    }
    e
}

/// Class counts of the rows in `index`, partitioned by
/// `value(attribute) <= threshold`. Returns `(left0, left1, right0, right1)`
/// from a single pass.
fn partition_counts(
    data: &Dataset,
    index: &[usize],
    attribute: usize,
    threshold: i64,
) -> (usize, usize, usize, usize) {
    let (mut l0, mut l1, mut r0, mut r1) = (0, 0, 0, 0);
    for &i in index {
        let zero = data.label(i) == 0;
        if data.value(i, attribute) <= threshold {
            if zero {
                l0 += 1;
            } else {
                l1 += 1;
            }
        } else if zero {
            r0 += 1;
        } else {
            r1 += 1;
        }
    }
    (l0, l1, r0, r1)
}

/// Reduction in label entropy achieved by splitting the rows in `index` at
/// `attribute <= threshold`, with the child entropies weighted by partition
/// size. `index` must be non-empty.
pub fn information_gain(data: &Dataset, index: &[usize], attribute: usize, threshold: i64) -> f64 {
    let (l0, l1, r0, r1) = partition_counts(data, index, attribute, threshold);
    let n = index.len() as f64;
    let parent = entropy(l0 + r0, l1 + r1);
    let weighted = ((l0 + l1) as f64 / n) * entropy(l0, l1) + ((r0 + r1) as f64 / n) * entropy(r0, r1);
    parent - weighted
}

/// Exhaustively search every attribute and every threshold in
/// `[THRESHOLD_MIN, THRESHOLD_MAX]` for the split with the largest
/// information gain over the rows in `index`.
///
/// Only a strictly larger gain replaces the current best, so ties keep the
/// first candidate in attribute-major, threshold-minor order and the result
/// is deterministic even though attributes are scanned in parallel. Returns
/// `None` when no candidate has positive gain.
pub fn best_split(data: &Dataset, index: &[usize]) -> Option<SplitInfo> {
    let best = (0..data.num_attr())
        .into_par_iter()
        .map(|attribute| {
            let mut best = SplitInfo {
                attribute,
                threshold: THRESHOLD_MIN,
                gain: f64::NEG_INFINITY,
            };
            for threshold in THRESHOLD_MIN..=THRESHOLD_MAX {
                let gain = information_gain(data, index, attribute, threshold);
                if gain > best.gain {
                    best = SplitInfo {
                        attribute,
                        threshold,
                        gain,
                    };
                }
            }
            best
        })
        .reduce_with(|a, b| if b.gain > a.gain { b } else { a })?;

    if best.gain > 0.0 {
        Some(best)
    } else {
        None
    }
}
