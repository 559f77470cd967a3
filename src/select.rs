//! Partial top-K selection (quickselect, descending).
//!
//! After [`select_top_k_by_key`] the `k` elements with the largest keys sit
//! in `items[..k]`. Neither the prefix nor the remainder is sorted, and ties
//! at the cut are resolved by whichever random pivots were drawn.

use std::cmp::Ordering;

/// Move the `k` elements with the largest `key` to the front of `items`.
///
/// `k` is clamped to `items.len()`; `k == 0` leaves the slice untouched.
pub fn select_top_k_by_key<T, K, F>(items: &mut [T], k: usize, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let k = k.min(items.len());
    if k == 0 {
        return;
    }
    quickselect(items, k, &key);
}

fn quickselect<T, K, F>(items: &mut [T], k: usize, key: &F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return;
    }
    let pivot = partition(items, key);
    tracing::trace!(len = items.len(), pivot, k, "quickselect step");
    match pivot.cmp(&k) {
        Ordering::Greater => quickselect(&mut items[..pivot], k, key),
        Ordering::Less => quickselect(&mut items[pivot + 1..], k - pivot - 1, key),
        Ordering::Equal => {}
    }
}

/// Lomuto partition around a random pivot: everything with a strictly
/// larger key ends up before the pivot. Returns the pivot's final index.
fn partition<T, K, F>(items: &mut [T], key: &F) -> usize
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let last = items.len() - 1;
    items.swap(random_index(items.len()), last);
    let pivot_key = key(&items[last]);

    let mut store = 0;
    for i in 0..last {
        if key(&items[i]) > pivot_key {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}

/// Uniform index in `0..len`. Falls back to the middle element when the
/// platform has no random source.
fn random_index(len: usize) -> usize {
    match getrandom::u64() {
        Ok(r) => (r % len as u64) as usize,
        Err(e) => {
            tracing::warn!(%e, "random source unavailable, using middle pivot");
            len / 2
        }
    }
}
