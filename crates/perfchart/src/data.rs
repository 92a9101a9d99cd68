// File: crates/perfchart/src/data.rs
// Summary: Loads benchmark summary and per-payload latency CSVs into a report dataset (ns converted to us).

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;

const NS_PER_US: f64 = 1_000.0;
const LATENCY_COLUMN: &str = "latency_ns";

/// One row of `<report>_sum.csv`, all latencies in nanoseconds.
#[derive(Debug, Deserialize)]
struct SummaryRow {
    payload_size: u32,
    avg_latency_ns: f64,
    min_latency_ns: f64,
    p50_ns: f64,
    p90_ns: f64,
    p99_ns: f64,
    #[serde(rename = "p99.9_ns", default)]
    p999_ns: Option<f64>,
    max_latency_ns: f64,
    throughput_rps: f64,
}

/// Per-payload statistics in microseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct PayloadSummary {
    pub size: u32,
    pub avg_us: f64,
    pub min_us: f64,
    pub p50_us: f64,
    pub p90_us: f64,
    pub p99_us: f64,
    pub p999_us: Option<f64>,
    pub max_us: f64,
    pub throughput_rps: f64,
}

impl From<SummaryRow> for PayloadSummary {
    fn from(r: SummaryRow) -> Self {
        Self {
            size: r.payload_size,
            avg_us: r.avg_latency_ns / NS_PER_US,
            min_us: r.min_latency_ns / NS_PER_US,
            p50_us: r.p50_ns / NS_PER_US,
            p90_us: r.p90_ns / NS_PER_US,
            p99_us: r.p99_ns / NS_PER_US,
            p999_us: r.p999_ns.map(|v| v / NS_PER_US),
            max_us: r.max_latency_ns / NS_PER_US,
            throughput_rps: r.throughput_rps,
        }
    }
}

/// Rows sorted by payload size, with one latency sample vector (us) per row.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub rows: Vec<PayloadSummary>,
    pub distributions: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn sizes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.size as f64).collect()
    }

    /// `(size, f(row))` pairs in payload order.
    pub fn by_size(&self, f: impl Fn(&PayloadSummary) -> f64) -> Vec<(f64, f64)> {
        self.rows.iter().map(|r| (r.size as f64, f(r))).collect()
    }
}

pub fn load_summary(path: &Path) -> Result<Vec<PayloadSummary>> {
    if !path.exists() {
        bail!("CSV file not found: {}", path.display());
    }
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, rec) in rdr.deserialize::<SummaryRow>().enumerate() {
        let row = rec.with_context(|| format!("{}: bad summary row {}", path.display(), i + 1))?;
        rows.push(PayloadSummary::from(row));
    }
    if rows.is_empty() {
        bail!("no rows in {}", path.display());
    }
    rows.sort_by_key(|r| r.size);
    debug!("loaded {} summary rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Latency samples (us) from the `latency_ns` column, or the first column if
/// the header has none.
pub fn load_detail(path: &Path) -> Result<Vec<f64>> {
    if !path.exists() {
        bail!("detail CSV not found: {}", path.display());
    }
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let column = rdr.headers()?.iter().position(|h| h == LATENCY_COLUMN).unwrap_or(0);

    let mut samples = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("reading {}", path.display()))?;
        match rec.get(column).and_then(|s| s.parse::<f64>().ok()) {
            Some(ns) => samples.push(ns / NS_PER_US),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("{}: skipped {} unparsable rows", path.display(), skipped);
    }
    if samples.is_empty() {
        bail!("no latency samples in {}", path.display());
    }
    Ok(samples)
}

/// Summary plus one detail file per payload size, all under `dir`.
pub fn load_dataset(dir: &Path, report_name: &str) -> Result<Dataset> {
    let summary_path = dir.join(format!("{report_name}_sum.csv"));
    let rows = load_summary(&summary_path)?;

    let distributions = rows
        .iter()
        .map(|r| {
            let p = dir.join(format!("{report_name}_{}.csv", r.size));
            load_detail(&p).with_context(|| format!("latency distribution for {} bytes", r.size))
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        "loaded {} payload sizes ({} samples) for '{}'",
        rows.len(),
        distributions.iter().map(Vec::len).sum::<usize>(),
        report_name
    );
    Ok(Dataset { rows, distributions })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY: &str = "payload_size,avg_latency_ns,min_latency_ns,p50_ns,p90_ns,p99_ns,p99.9_ns,max_latency_ns,throughput_rps
256,2499000,1134000,2406000,2942000,4866000,9000000,10077000,400
64,2333000,1090000,2399000,2745000,4933000,8000000,18461000,428
";

    #[test]
    fn summary_is_sorted_and_converted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r_sum.csv");
        std::fs::write(&path, SUMMARY).unwrap();

        let rows = load_summary(&path).unwrap();
        assert_eq!(rows.iter().map(|r| r.size).collect::<Vec<_>>(), vec![64, 256]);
        assert_eq!(rows[0].p50_us, 2399.0);
        assert_eq!(rows[0].p999_us, Some(8000.0));
        assert_eq!(rows[1].throughput_rps, 400.0);
    }

    #[test]
    fn summary_without_p999_column_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r_sum.csv");
        std::fs::write(
            &path,
            "payload_size,avg_latency_ns,min_latency_ns,p50_ns,p90_ns,p99_ns,max_latency_ns,throughput_rps\n64,1000,500,900,1500,3000,9000,100\n",
        )
        .unwrap();
        let rows = load_summary(&path).unwrap();
        assert_eq!(rows[0].p999_us, None);
        assert_eq!(rows[0].min_us, 0.5);
    }

    #[test]
    fn missing_summary_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_summary(&dir.path().join("nope_sum.csv")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn detail_prefers_latency_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r_64.csv");
        std::fs::write(&path, "seq,latency_ns\n1,2000\n2,bogus\n3,4000\n").unwrap();
        assert_eq!(load_detail(&path).unwrap(), vec![2.0, 4.0]);
    }

    #[test]
    fn detail_falls_back_to_first_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r_64.csv");
        std::fs::write(&path, "rtt\n1500\n2500\n").unwrap();
        assert_eq!(load_detail(&path).unwrap(), vec![1.5, 2.5]);
    }

    #[test]
    fn empty_detail_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r_64.csv");
        std::fs::write(&path, "latency_ns\n").unwrap();
        assert!(load_detail(&path).is_err());
    }

    #[test]
    fn dataset_pairs_rows_with_details() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("r_sum.csv"), SUMMARY).unwrap();
        std::fs::write(dir.path().join("r_64.csv"), "latency_ns\n1000\n").unwrap();
        std::fs::write(dir.path().join("r_256.csv"), "latency_ns\n3000\n5000\n").unwrap();

        let ds = load_dataset(dir.path(), "r").unwrap();
        assert_eq!(ds.sizes(), vec![64.0, 256.0]);
        assert_eq!(ds.distributions, vec![vec![1.0], vec![3.0, 5.0]]);
        assert_eq!(ds.by_size(|r| r.throughput_rps), vec![(64.0, 428.0), (256.0, 400.0)]);
    }

    #[test]
    fn dataset_reports_missing_detail() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("r_sum.csv"), SUMMARY).unwrap();
        std::fs::write(dir.path().join("r_64.csv"), "latency_ns\n1000\n").unwrap();
        let err = load_dataset(dir.path(), "r").unwrap_err();
        assert!(format!("{err:#}").contains("256 bytes"));
    }
}
