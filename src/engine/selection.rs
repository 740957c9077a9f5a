use crate::model::{City, SortStats};
use std::cmp::Ordering;

/// Selection sort that moves the largest remaining record (by population order)
/// to the back of the unsorted region on each pass. The slice ends up
/// ascending, so the least populous cities come first.
pub fn selection_sort_ascending(cities: &mut [City]) -> SortStats {
    let mut stats = SortStats::default();

    for outer in (2..=cities.len()).rev() {
        stats.passes += 1;
        let mut inner_max = 0;
        for inner in 1..outer {
            stats.comparisons += 1;
            if cities[inner].compare_population(&cities[inner_max]) == Ordering::Greater {
                inner_max = inner;
            }
        }
        if inner_max != outer - 1 {
            cities.swap(inner_max, outer - 1);
            stats.moves += 2;
        }
    }

    stats
}
