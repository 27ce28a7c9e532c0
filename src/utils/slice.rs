//! "Take N items" helpers backing the template filters.
//!
//! Each helper returns the input unchanged when it holds fewer than `n` items.

use rand::Rng;

/// Returns the first `n` items of `items`.
pub fn first_n<T: Clone>(n: usize, items: &[T]) -> Vec<T> {
    if items.len() < n {
        return items.to_vec();
    }
    items[..n].to_vec()
}

/// Returns the last `n` items of `items`, in their original order.
pub fn last_n<T: Clone>(n: usize, items: &[T]) -> Vec<T> {
    let len = items.len();
    if len < n {
        return items.to_vec();
    }
    items[len - n..].to_vec()
}

/// Returns `n` distinct items of `items` in random permutation order.
///
/// The caller owns the randomness; pass a seeded `StdRng` for reproducible
/// output.
pub fn random_n<T: Clone, R: Rng + ?Sized>(n: usize, items: &[T], rng: &mut R) -> Vec<T> {
    if items.len() < n {
        return items.to_vec();
    }
    rand::seq::index::sample(rng, items.len(), n)
        .into_iter()
        .map(|idx| items[idx].clone())
        .collect()
}
