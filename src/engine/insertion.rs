use crate::model::{City, SortStats};
use std::cmp::Ordering;

/// Insertion sort by city name, ascending.
///
/// Each record is lifted out, every earlier record with a strictly greater
/// name shifts one slot right, and the lifted record drops into the gap.
pub fn insertion_sort_name_ascending(cities: &mut [City]) -> SortStats {
    let mut stats = SortStats::default();

    for outer in 1..cities.len() {
        stats.passes += 1;
        let held = std::mem::take(&mut cities[outer]);
        let mut slot = outer;

        while slot > 0 {
            stats.comparisons += 1;
            if held.compare_name(&cities[slot - 1]) != Ordering::Less {
                break;
            }
            cities[slot] = std::mem::take(&mut cities[slot - 1]);
            stats.moves += 1;
            slot -= 1;
        }

        cities[slot] = held;
    }

    stats
}
