//! Shared random helpers used by every topic generator.
//!
//! All helpers take the RNG by `&mut R` so a seeded [`StdRng`](rand::rngs::StdRng)
//! reproduces the same question sequence. Changing the order of RNG calls in
//! a generator changes every seeded sequence and breaks the determinism tests.

use rand::Rng;

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Pick one element uniformly. `items` must be non-empty.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Fair coin.
pub fn coin<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Build a question id from a topic prefix, e.g. `"AR-1F0C33A9"`.
pub fn question_id<R: Rng>(rng: &mut R, prefix: &str) -> String {
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Position of `target` in `items`.
///
/// Callers only pass slices that were seeded with `target`, so the fallback
/// of `0` is unreachable in practice.
pub fn index_of<T: PartialEq>(items: &[T], target: &T) -> usize {
    items.iter().position(|x| x == target).unwrap_or(0)
}

/// Grow a pool seeded with `seed` by drawing from `draw` until it holds
/// `size` distinct entries, then shuffle it.
///
/// `draw` must be able to produce at least `size` distinct values or this
/// loops forever; every caller draws from a domain of 26+ entries.
pub fn unique_pool<T, R, F>(rng: &mut R, seed: T, size: usize, mut draw: F) -> Vec<T>
where
    T: PartialEq,
    R: Rng,
    F: FnMut(&mut R) -> T,
{
    let mut pool = vec![seed];
    while pool.len() < size {
        let candidate = draw(rng);
        if !pool.contains(&candidate) {
            pool.push(candidate);
        }
    }
    shuffle(rng, &mut pool);
    pool
}
