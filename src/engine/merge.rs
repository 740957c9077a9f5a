//! Top-down merge sorts that produce descending order.
//!
//! Both variants share one skeleton: split the inclusive range `[start, end]`
//! at `(start + end) / 2`, sort each half, then merge the two heads into a
//! scratch buffer of whole records and copy the merged run back. Ranges of one
//! or two records are settled directly with a single compare-and-swap. Neither
//! step reorders equal keys, so both sorts are stable.

use crate::model::{City, SortStats};
use std::cmp::Ordering;

/// Sort by the population order (population, state, name), largest first.
pub fn merge_sort_population_descending(cities: &mut [City]) -> SortStats {
    merge_sort_descending_by(cities, City::compare_population)
}

/// Sort by city name, latest name first.
pub fn merge_sort_name_descending(cities: &mut [City]) -> SortStats {
    merge_sort_descending_by(cities, City::compare_name)
}

fn merge_sort_descending_by<F>(cities: &mut [City], cmp: F) -> SortStats
where
    F: Fn(&City, &City) -> Ordering,
{
    let mut stats = SortStats::default();
    if cities.len() < 2 {
        return stats;
    }

    // One scratch slot per record; allocated here, dropped when this call returns.
    let mut scratch: Vec<City> = std::iter::repeat_with(City::default)
        .take(cities.len())
        .collect();
    let end = cities.len() - 1;
    let mut run = MergeRun {
        cities,
        scratch: &mut scratch,
        cmp: &cmp,
        stats: &mut stats,
    };
    run.sort_range(0, end);

    stats
}

struct MergeRun<'a, F> {
    cities: &'a mut [City],
    scratch: &'a mut [City],
    cmp: &'a F,
    stats: &'a mut SortStats,
}

impl<F> MergeRun<'_, F>
where
    F: Fn(&City, &City) -> Ordering,
{
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        self.stats.comparisons += 1;
        (self.cmp)(&self.cities[a], &self.cities[b])
    }

    fn sort_range(&mut self, start: usize, end: usize) {
        if end - start < 2 {
            if end > start && self.compare(end, start) == Ordering::Greater {
                self.cities.swap(start, end);
                self.stats.moves += 2;
            }
            return;
        }

        let middle = start + (end - start) / 2;
        self.sort_range(start, middle);
        self.sort_range(middle + 1, end);
        self.merge(start, middle, end);
    }

    fn merge(&mut self, start: usize, middle: usize, end: usize) {
        self.stats.passes += 1;
        let (mut i, mut j, mut k) = (start, middle + 1, start);

        while i <= middle && j <= end {
            // Left head wins ties, so equal keys keep their input order.
            if self.compare(i, j) != Ordering::Less {
                self.scratch[k] = std::mem::take(&mut self.cities[i]);
                i += 1;
            } else {
                self.scratch[k] = std::mem::take(&mut self.cities[j]);
                j += 1;
            }
            k += 1;
        }
        while i <= middle {
            self.scratch[k] = std::mem::take(&mut self.cities[i]);
            i += 1;
            k += 1;
        }
        while j <= end {
            self.scratch[k] = std::mem::take(&mut self.cities[j]);
            j += 1;
            k += 1;
        }

        for k in start..=end {
            self.cities[k] = std::mem::take(&mut self.scratch[k]);
        }
        self.stats.moves += 2 * (end - start + 1) as u64;
    }
}
