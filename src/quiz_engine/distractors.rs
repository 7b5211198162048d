//! Plausible wrong answers around a correct value.
//!
//! Near misses (±1..±5) are tried first in random order. Near the edges of a
//! small range the palette can run dry, in which case the remaining slots are
//! filled with uniform draws from the range.

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;

use crate::quiz_engine::helpers::shuffle;

const OFFSETS: [i32; 10] = [-1, 1, -2, 2, -3, 3, -4, 4, -5, 5];

/// Return `size` distinct values from `bounds`, one of which is `correct`,
/// in random order.
///
/// If `bounds` holds fewer than `size` integers the result is every integer
/// in the range. `correct` is always included, even when it lies outside
/// `bounds`.
pub fn build_choice_set<R: Rng>(
    rng: &mut R,
    correct: i32,
    bounds: RangeInclusive<i32>,
    size: usize,
) -> Vec<i32> {
    let (lo, hi) = (*bounds.start(), *bounds.end());
    let span = if hi >= lo { (hi as i64 - lo as i64 + 1) as usize } else { 0 };
    let extra = if bounds.contains(&correct) { 0 } else { 1 };
    let target = size.min(span + extra).max(1);

    let mut set = vec![correct];

    let mut offsets = OFFSETS;
    shuffle(rng, &mut offsets);
    for offset in offsets {
        if set.len() >= target {
            break;
        }
        let Some(candidate) = correct.checked_add(offset) else {
            continue;
        };
        if bounds.contains(&candidate) && !set.contains(&candidate) {
            set.push(candidate);
        }
    }

    if set.len() < target {
        debug!(correct, lo, hi, have = set.len(), "offset palette exhausted, filling uniformly");
    }
    while set.len() < target {
        let candidate = rng.gen_range(lo..=hi);
        if !set.contains(&candidate) {
            set.push(candidate);
        }
    }

    shuffle(rng, &mut set);
    set
}
