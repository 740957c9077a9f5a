use crate::filter::{self, FilteredView};
use crate::model::{City, Query, QueryOutcome, QueryReport, SortStats};
use std::time::Instant;

use super::{insertion_sort_name_ascending, merge_sort_name_descending};
use super::{merge_sort_population_descending, selection_sort_ascending};

/// Run one of the six menu queries over `cities`, reordering the collection in place.
///
/// Unknown state or city names come back as data so the caller can re-prompt.
pub fn run_query(cities: &mut [City], query: &Query, limit: usize) -> QueryOutcome {
    match query {
        Query::MostPopulousInState { state } if !filter::state_exists(cities, state) => {
            tracing::debug!(state = %state, "state not found");
            return QueryOutcome::UnknownState(state.clone());
        }
        Query::CitiesNamed { name } if !filter::city_exists(cities, name).exists => {
            tracing::debug!(city = %name, "city not found");
            return QueryOutcome::UnknownCity(name.clone());
        }
        _ => {}
    }

    let total_records = cities.len();
    let start = Instant::now();
    let (stats, matched, rows) = match query {
        Query::LeastPopulous => head(cities, limit, selection_sort_ascending),
        Query::MostPopulous => head(cities, limit, merge_sort_population_descending),
        Query::NameAscending => head(cities, limit, insertion_sort_name_ascending),
        Query::NameDescending => head(cities, limit, merge_sort_name_descending),
        Query::MostPopulousInState { state } => {
            take_view(filter::filter_by_state(cities, state), Some(limit))
        }
        Query::CitiesNamed { name } => take_view(filter::filter_by_city_name(cities, name), None),
    };
    let elapsed = start.elapsed();

    let report = QueryReport {
        timestamp_utc: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "now".into()),
        query: query.clone(),
        title: query.title(limit),
        algorithm: query.algorithm(),
        total_records,
        matched,
        elapsed,
        stats,
        rows,
    };
    tracing::debug!(
        algorithm = ?report.algorithm,
        comparisons = report.stats.comparisons,
        moves = report.stats.moves,
        passes = report.stats.passes,
        elapsed = %report.elapsed_display(),
        "query sorted"
    );
    QueryOutcome::Ordered(Box::new(report))
}

fn head(
    cities: &mut [City],
    limit: usize,
    sort: fn(&mut [City]) -> SortStats,
) -> (SortStats, usize, Vec<City>) {
    let stats = sort(cities);
    let rows = cities.iter().take(limit).cloned().collect();
    (stats, cities.len(), rows)
}

fn take_view(view: FilteredView<'_>, limit: Option<usize>) -> (SortStats, usize, Vec<City>) {
    let matched = view.rows.len();
    let rows = view
        .rows
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();
    (view.stats, matched, rows)
}
