//! Text summary builder for CLI output.
//!
//! Formats a query report as the numbered city table, followed by elapsed time
//! and optional population metrics.

use crate::metrics;
use crate::model::{City, QueryReport};

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

pub(crate) fn table_header() -> String {
    format!(
        "    {:<22} {:<22} {:<12} {:>12}",
        "State", "City", "Type", "Population"
    )
}

pub(crate) fn format_row(rank: usize, city: &City) -> String {
    format!(
        "{:>2}: {:<22} {:<22} {:<12} {:>12}",
        rank,
        city.state,
        city.name,
        city.designation,
        group_thousands(u64::from(city.population))
    )
}

/// `1234567` -> `"1,234,567"`.
pub(crate) fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Build the text summary for a finished query.
pub(crate) fn build_text_summary(report: &QueryReport, with_metrics: bool) -> TextSummary {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(report.title.clone());
    lines.push(table_header());
    for (i, city) in report.rows.iter().enumerate() {
        lines.push(format_row(i + 1, city));
    }
    lines.push(String::new());
    lines.push(format!(
        "Elapsed time {} milliseconds",
        report.elapsed.as_millis()
    ));

    if with_metrics {
        if let Some(m) = metrics::compute_population_metrics(&report.rows) {
            lines.push(format!(
                "Population: total {} avg {:.0} med {} p25 {} p75 {}",
                group_thousands(m.total),
                m.mean,
                group_thousands(u64::from(m.median)),
                group_thousands(u64::from(m.p25)),
                group_thousands(u64::from(m.p75)),
            ));
        }
    }

    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Algorithm, Query, SortStats};
    use std::time::Duration;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(8_622_698), "8,622,698");
        assert_eq!(group_thousands(u64::from(u32::MAX)), "4,294,967,295");
    }

    #[test]
    fn rows_are_right_aligned_and_numbered() {
        let city = City::new("Houston", "Texas", "City", 2_312_717);
        let row = format_row(1, &city);
        assert!(row.starts_with(" 1: Texas"));
        assert!(row.ends_with("   2,312,717"));
        assert_eq!(row.len(), table_header().len());
        assert!(format_row(10, &city).starts_with("10: "));
    }

    #[test]
    fn summary_has_title_rows_elapsed_and_metrics() {
        let report = QueryReport {
            timestamp_utc: String::new(),
            query: Query::MostPopulousInState {
                state: "Texas".into(),
            },
            title: "Fifty most populous cities in Texas".into(),
            algorithm: Algorithm::MergeSort,
            total_records: 3,
            matched: 2,
            elapsed: Duration::from_millis(12),
            stats: SortStats::default(),
            rows: vec![
                City::new("Houston", "Texas", "City", 2_300_000),
                City::new("Austin", "Texas", "City", 950_000),
            ],
        };
        let summary = build_text_summary(&report, true);
        assert_eq!(summary.lines[1], "Fifty most populous cities in Texas");
        assert!(summary.lines[3].contains("Houston"));
        assert!(summary.lines[4].contains("Austin"));
        assert!(summary
            .lines
            .iter()
            .any(|l| l == "Elapsed time 12 milliseconds"));
        assert!(summary.lines.last().unwrap().starts_with("Population: total 3,250,000"));

        let plain = build_text_summary(&report, false);
        assert!(plain.lines.last().unwrap().starts_with("Elapsed time"));
    }
}
