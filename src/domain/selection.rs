/// Most captures compared in a single run
pub const MAX_SELECTED: usize = 5;

/// Reduce an ordered capture list to a representative subset.
///
/// Up to `MAX_SELECTED` captures are returned as-is. Longer lists keep the
/// first capture, the ones at `n/4`, `n/2` and `3n/4`, and the last one.
/// Upstream ordering is trusted; nothing is re-sorted.
pub fn select_representative<T: Clone>(captures: &[T]) -> Vec<T> {
    let n = captures.len();
    if n <= MAX_SELECTED {
        return captures.to_vec();
    }

    [0, n / 4, n / 2, 3 * n / 4, n - 1]
        .iter()
        .map(|&i| captures[i].clone())
        .collect()
}
