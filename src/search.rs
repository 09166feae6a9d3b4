//! Searching, scanning and sorting helpers shared by the demonstrators.

use std::cmp::Ordering;
use std::collections::LinkedList;

/// Binary search over a sequential list.
///
/// A linked list has no random access, so each probe walks from the front.
/// That makes this O(n log n) rather than O(log n), which is the cost a
/// sequential list pays for binary search.
///
/// Follows the contract of `slice::binary_search`: `Ok(index)` if found,
/// otherwise `Err(index)` where the value could be inserted to keep the list
/// sorted. On an unsorted list the result is unspecified but well-defined.
pub fn binary_search_list<T: Ord>(list: &LinkedList<T>, target: &T) -> Result<usize, usize> {
    let mut low = 0;
    let mut high = list.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let Some(probe) = list.iter().nth(mid) else { break };
        match probe.cmp(target) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(mid),
        }
    }

    return Err(low);
}

/// Position of the first element equal to `target`.
pub fn linear_position<'a, T: PartialEq + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    target: &T,
) -> Option<usize> {
    return items.into_iter().position(|item| item == target);
}

/// Minimum and maximum in one pass, or `None` when empty.
///
/// On ties the first minimum and the first maximum are kept.
pub fn min_max<T: Ord + Copy>(items: impl IntoIterator<Item = T>) -> Option<(T, T)> {
    let mut items = items.into_iter();
    let first = items.next()?;
    let mut min = first;
    let mut max = first;

    for item in items {
        if item < min {
            min = item;
        }
        if item > max {
            max = item;
        }
    }

    return Some((min, max));
}

/// Sort a linked list in place.
///
/// The elements are drained into a vector, sorted stably, and relinked in
/// order.
pub fn sort_list<T: Ord>(list: &mut LinkedList<T>) {
    let mut items: Vec<T> = std::mem::take(list).into_iter().collect();
    items.sort();
    list.extend(items);
}
