//! Existence checks and filtered views over the city collection.
//!
//! All name matching here ignores case, unlike the sort comparators.

use crate::engine::merge_sort_population_descending;
use crate::model::{City, SortStats};

/// Result of looking up a city name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityLookup {
    pub exists: bool,
    pub matches: usize,
}

/// Records selected from the population-sorted collection, in that order.
#[derive(Debug)]
pub struct FilteredView<'a> {
    pub rows: Vec<&'a City>,
    pub stats: SortStats,
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

pub fn state_exists(cities: &[City], state: &str) -> bool {
    cities.iter().any(|c| eq_ignore_case(&c.state, state))
}

pub fn city_exists(cities: &[City], name: &str) -> CityLookup {
    let matches = cities
        .iter()
        .filter(|c| eq_ignore_case(&c.name, name))
        .count();
    CityLookup {
        exists: matches > 0,
        matches,
    }
}

/// Sort the whole collection by descending population, then keep the cities in `state`.
pub fn filter_by_state<'a>(cities: &'a mut [City], state: &str) -> FilteredView<'a> {
    filter_sorted(cities, |c| eq_ignore_case(&c.state, state))
}

/// Sort the whole collection by descending population, then keep the cities named `name`.
pub fn filter_by_city_name<'a>(cities: &'a mut [City], name: &str) -> FilteredView<'a> {
    filter_sorted(cities, |c| eq_ignore_case(&c.name, name))
}

fn filter_sorted<'a, P>(cities: &'a mut [City], keep: P) -> FilteredView<'a>
where
    P: Fn(&City) -> bool,
{
    let stats = merge_sort_population_descending(cities);
    let cities: &'a [City] = cities;
    FilteredView {
        rows: cities.iter().filter(|&c| keep(c)).collect(),
        stats,
    }
}
