use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;
use std::time::Duration;

/// One city record: state, city name, location designation and 2017 population estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub state: String,
    pub designation: String,
    pub population: u32,
}

impl City {
    pub fn new(
        name: impl Into<String>,
        state: impl Into<String>,
        designation: impl Into<String>,
        population: u32,
    ) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
            designation: designation.into(),
            population,
        }
    }

    /// Total order used by the population sorts: population, then state, then city name.
    pub fn compare_population(&self, other: &City) -> Ordering {
        self.population
            .cmp(&other.population)
            .then_with(|| self.state.cmp(&other.state))
            .then_with(|| self.name.cmp(&other.name))
    }

    /// Order by city name only (case-sensitive).
    pub fn compare_name(&self, other: &City) -> Ordering {
        self.name.cmp(&other.name)
    }

    /// Two records are the same city when their names match case-sensitively.
    ///
    /// The state is ignored, so "Springfield, Illinois" and "Springfield, Missouri"
    /// count as the same city here. Use [`City::same_identity`] to compare every field.
    pub fn same_city(&self, other: &City) -> bool {
        self.name == other.name
    }

    /// Field-by-field equality across all four attributes.
    pub fn same_identity(&self, other: &City) -> bool {
        self == other
    }
}

/// Counters collected by the sort routines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    pub comparisons: u64,
    /// Whole-record moves (a swap counts as two).
    pub moves: u64,
    /// Outer-loop passes for the iterative sorts, merge calls for the merge sorts.
    pub passes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    SelectionSort,
    MergeSort,
    InsertionSort,
}

/// The six orderings offered by the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    LeastPopulous,
    MostPopulous,
    NameAscending,
    NameDescending,
    MostPopulousInState { state: String },
    CitiesNamed { name: String },
}

impl Query {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Query::LeastPopulous => Algorithm::SelectionSort,
            Query::NameAscending => Algorithm::InsertionSort,
            Query::MostPopulous
            | Query::NameDescending
            | Query::MostPopulousInState { .. }
            | Query::CitiesNamed { .. } => Algorithm::MergeSort,
        }
    }

    /// Heading printed above the result table.
    pub fn title(&self, limit: usize) -> String {
        let count = count_word(limit);
        match self {
            Query::LeastPopulous => format!("{count} least populous cities"),
            Query::MostPopulous => format!("{count} most populous cities"),
            Query::NameAscending => format!("{count} cities sorted by name"),
            Query::NameDescending => format!("{count} cities sorted by name descending"),
            Query::MostPopulousInState { state } => {
                format!("{count} most populous cities in {state}")
            }
            Query::CitiesNamed { name } => format!("City {name} by population"),
        }
    }

    /// Whether the row limit applies; the city-name query lists every match.
    pub fn is_limited(&self) -> bool {
        !matches!(self, Query::CitiesNamed { .. })
    }
}

pub(crate) fn count_word(limit: usize) -> String {
    match limit {
        50 => "Fifty".to_string(),
        n => n.to_string(),
    }
}

/// Settings shared by the one-shot and interactive modes.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_path: PathBuf,
    pub limit: usize,
    pub summary: bool,
}

/// Result of running one query over the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReport {
    #[serde(default)]
    pub timestamp_utc: String,
    pub query: Query,
    pub title: String,
    pub algorithm: Algorithm,
    pub total_records: usize,
    /// Number of records that matched before the row limit was applied.
    pub matched: usize,
    #[serde(with = "humantime_serde")]
    pub elapsed: Duration,
    pub stats: SortStats,
    pub rows: Vec<City>,
}

impl QueryReport {
    /// Elapsed sort time as a human-readable span, e.g. `1s 250ms`.
    pub fn elapsed_display(&self) -> String {
        humantime::format_duration(self.elapsed).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Ordered(Box<QueryReport>),
    UnknownState(String),
    UnknownCity(String),
}
