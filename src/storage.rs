use crate::model::QueryReport;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "usPopData2017.txt";

/// Per-user directory checked for the dataset when it is not in the working directory.
pub fn base_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("city-population"))
}

/// Pick the dataset path: an explicit path wins, then the working directory,
/// then the per-user data directory.
pub fn resolve_data_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    let local = PathBuf::from(DEFAULT_DATA_FILE);
    if local.exists() {
        return local;
    }
    match base_dir().map(|d| d.join(DEFAULT_DATA_FILE)) {
        Some(p) if p.exists() => p,
        _ => local,
    }
}

pub fn export_json(path: &Path, report: &QueryReport) -> Result<()> {
    ensure_parent(path)?;
    let out = serde_json::to_string_pretty(report)?;
    fs::write(path, out).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported JSON");
    Ok(())
}

/// One exported CSV line; field names become the header.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    rank: usize,
    state: &'a str,
    city: &'a str,
    designation: &'a str,
    population: u32,
}

pub fn export_csv(path: &Path, report: &QueryReport) -> Result<()> {
    ensure_parent(path)?;
    let mut w = csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for (i, c) in report.rows.iter().enumerate() {
        w.serialize(CsvRow {
            rank: i + 1,
            state: &c.state,
            city: &c.name,
            designation: &c.designation,
            population: c.population,
        })?;
    }
    w.flush()?;
    tracing::info!(path = %path.display(), rows = report.rows.len(), "exported CSV");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Algorithm, City, Query, SortStats};
    use std::time::Duration;

    fn report() -> QueryReport {
        QueryReport {
            timestamp_utc: "2017-07-01T00:00:00Z".into(),
            query: Query::MostPopulous,
            title: "2 most populous cities".into(),
            algorithm: Algorithm::MergeSort,
            total_records: 3,
            matched: 3,
            elapsed: Duration::from_millis(4),
            stats: SortStats::default(),
            rows: vec![
                City::new("New York", "New York", "City", 8_622_698),
                City::new("Washington", "District of Columbia", "City, capital", 693_972),
            ],
        }
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        export_csv(&path, &report()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "rank,state,city,designation,population");
        assert_eq!(lines[1], "1,New York,New York,City,8622698");
        assert_eq!(
            lines[2],
            "2,District of Columbia,Washington,\"City, capital\",693972"
        );
    }

    #[test]
    fn csv_quotes_fields_with_carriage_returns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cr.csv");
        let mut r = report();
        r.rows = vec![City::new("Odd\rName", "S", "City", 1)];
        export_csv(&path, &r).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("1,S,\"Odd\rName\",City,1"));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "Odd\rName");
    }

    #[test]
    fn json_export_round_trips_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        export_json(&path, &report()).unwrap();
        let back: QueryReport = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, report());
    }

    #[test]
    fn explicit_data_path_wins() {
        let p = Path::new("/tmp/some/cities.tsv");
        assert_eq!(resolve_data_path(Some(p)), p.to_path_buf());
    }
}
