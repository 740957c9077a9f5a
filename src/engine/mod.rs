//! Ordering engine: the four in-place sorts over the city collection and the
//! query dispatch that picks one per menu choice.
//!
//! Every sort takes exclusive access to the slice for the duration of the
//! call, only permutes whole records, and keeps nothing after returning.

mod insertion;
mod merge;
mod query;
mod selection;

pub use insertion::insertion_sort_name_ascending;
pub use merge::{merge_sort_name_descending, merge_sort_population_descending};
pub use query::run_query;
pub use selection::selection_sort_ascending;
