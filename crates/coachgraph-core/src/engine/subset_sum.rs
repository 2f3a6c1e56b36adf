//! Subset-sum search over component sizes.
//!
//! Depth-first enumeration with an index cursor: at each position the branch
//! that includes the item is explored before the branch that skips it, and the
//! cursor only moves forward, so each subset is visited at most once. A branch
//! is pruned as soon as including the next item would overshoot the target.
//! The first subset found in this order wins; it is not necessarily the
//! smallest.
//!
//! The search keeps its own stack of chosen indices instead of recursing, so
//! the number of items is not limited by the call stack. Worst-case running
//! time is exponential in the number of items.

/// Finds indices of a non-empty subset of `sizes` that sums to `target`.
///
/// Returns the indices in ascending order, or `None` when no such subset
/// exists. Zero-sized items are never selected.
pub fn find_subset_sum(sizes: &[usize], target: usize) -> Option<Vec<usize>> {
    if target == 0 {
        return None;
    }
    let reachable: usize = sizes.iter().sum();
    if reachable < target {
        return None;
    }

    let mut chosen: Vec<usize> = Vec::new();
    let mut subtotal = 0usize;
    let mut cursor = 0usize;

    loop {
        if cursor < sizes.len() {
            let size = sizes[cursor];
            if size > 0 && subtotal + size <= target {
                chosen.push(cursor);
                subtotal += size;
                if subtotal == target {
                    return Some(chosen);
                }
            }
            cursor += 1;
            continue;
        }

        // Cursor ran off the end: undo the most recent inclusion and resume
        // with the branch that skips it.
        let last = chosen.pop()?;
        subtotal -= sizes[last];
        cursor = last + 1;
    }
}
