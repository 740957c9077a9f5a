use crate::model::City;

/// Population metrics over a set of rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationMetrics {
    pub mean: f64,
    pub median: u32,
    pub p25: u32,
    pub p75: u32,
    pub total: u64,
}

/// Compute population metrics (mean, median, 25th percentile, 75th percentile) from rows
pub fn compute_population_metrics(rows: &[City]) -> Option<PopulationMetrics> {
    if rows.len() < 2 {
        return None;
    }
    let mut sorted: Vec<u32> = rows.iter().map(|c| c.population).collect();
    sorted.sort_unstable();
    let n = sorted.len();
    let total: u64 = sorted.iter().map(|&p| u64::from(p)).sum();
    Some(PopulationMetrics {
        mean: total as f64 / n as f64,
        median: sorted[n / 2],
        p25: sorted[n / 4],
        p75: sorted[3 * n / 4],
        total,
    })
}
