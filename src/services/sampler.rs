use rand::seq::SliceRandom;

/// Draw `count` elements from `items` without replacement, or everything if
/// the list is shorter. Shuffle-then-truncate; each call is independently
/// random, so callers treat the result as a set.
pub fn random_subset<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    let mut sampled: Vec<T> = items.to_vec();
    sampled.shuffle(&mut rand::thread_rng());
    sampled.truncate(count);
    sampled
}
