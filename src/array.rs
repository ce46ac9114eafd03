//! Sorted container utilities.
//!
//! The sweep keeps its active markers in a plain `Vec<T>` that is always
//! sorted. These helpers insert and remove by value while preserving that
//! order. Both are O(n) because of the element shift, which is fine for the
//! small number of simultaneously open rectangles seen in practice.

// ============================================================================
// Searching
// ============================================================================

/// Binary search for the insertion position of `val` in a sorted slice.
/// Returns the index just past any elements equal to `val`, so repeated
/// insertions of equal values keep their arrival order.
pub fn binary_search_pos<T: Ord>(arr: &[T], val: &T) -> usize {
    if arr.is_empty() {
        return 0;
    }

    let mut beg = 0usize;
    let mut end = arr.len() - 1;

    if val < &arr[0] {
        return 0;
    }
    if val >= &arr[end] {
        return end + 1;
    }

    // arr[beg] <= val < arr[end]
    while end - beg > 1 {
        let mid = (end + beg) >> 1;
        if val < &arr[mid] {
            end = mid;
        } else {
            beg = mid;
        }
    }
    end
}

// ============================================================================
// Sorted insert / remove
// ============================================================================

/// Insert `val` into the sorted vector `v`, keeping it sorted.
pub fn insert_sorted<T: Ord>(v: &mut Vec<T>, val: T) {
    let pos = binary_search_pos(v, &val);
    v.insert(pos, val);
}

/// Remove one element equal to `val` from the sorted vector `v`.
///
/// When several equal elements exist any one of them is removed; equal
/// elements are interchangeable. Returns `false` if no match exists.
pub fn remove_sorted<T: Ord>(v: &mut Vec<T>, val: &T) -> bool {
    match v.binary_search(val) {
        Ok(pos) => {
            v.remove(pos);
            true
        }
        Err(_) => false,
    }
}

/// Returns `true` if `arr` is sorted in non-decreasing order.
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}
