//! Reader for the tab-separated population dataset.
//!
//! Each line is `state<TAB>city<TAB>designation<TAB>population`. Blank lines are
//! skipped; anything else that does not parse is rejected with its line number.

use crate::model::City;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: population is empty")]
    EmptyPopulation { line: usize },
    #[error("line {line}: population {value:?} is negative")]
    NegativePopulation { line: usize, value: String },
    #[error("line {line}: population {value:?} is not a valid count: {source}")]
    InvalidPopulation {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub fn load_cities(path: &Path) -> Result<Vec<City>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cities = parse_cities(&text)?;
    tracing::info!(count = cities.len(), path = %path.display(), "cities in database");
    Ok(cities)
}

pub fn parse_cities(text: &str) -> Result<Vec<City>, LoadError> {
    text.lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(|(idx, raw)| parse_line(idx + 1, raw))
        .collect()
}

fn parse_line(line: usize, raw: &str) -> Result<City, LoadError> {
    let mut fields = raw.splitn(4, '\t');
    let mut next = |field: &'static str| {
        fields
            .next()
            .ok_or(LoadError::MissingField { line, field })
    };
    let state = next("state")?;
    let name = next("city")?;
    let designation = next("designation")?;
    let population = parse_population(line, next("population")?)?;

    Ok(City::new(name, state, designation, population))
}

fn parse_population(line: usize, raw: &str) -> Result<u32, LoadError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(LoadError::EmptyPopulation { line });
    }
    if value.starts_with('-') {
        return Err(LoadError::NegativePopulation {
            line,
            value: value.to_string(),
        });
    }
    value
        .parse::<u32>()
        .map_err(|source| LoadError::InvalidPopulation {
            line,
            value: value.to_string(),
            source,
        })
}
