// File: crates/perfchart/src/sample.rs
// Summary: Built-in sample dataset with seeded log-normal latency distributions.

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, LogNormal};

use crate::data::{Dataset, PayloadSummary};

pub const SAMPLE_SEED: u64 = 42;
pub const SAMPLE_DRAWS: usize = 1000;
/// Shape of the synthetic per-size distributions (std-dev of the underlying normal).
pub const SAMPLE_SIGMA: f64 = 0.5;

const SIZES: [u32; 8] = [64, 128, 256, 512, 1024, 2048, 4096, 8192];
// microseconds
const AVG: [f64; 8] = [2333.0, 2061.0, 2499.0, 2446.0, 2533.0, 5734.0, 5238.0, 3570.0];
const P50: [f64; 8] = [2399.0, 2356.0, 2406.0, 2385.0, 2397.0, 2531.0, 2570.0, 2514.0];
const P90: [f64; 8] = [2745.0, 2566.0, 2942.0, 2739.0, 3018.0, 15611.0, 10992.0, 3802.0];
const P99: [f64; 8] = [4933.0, 3962.0, 4866.0, 3644.0, 4442.0, 43900.0, 44566.0, 31269.0];
const MIN: [f64; 8] = [1090.0, 1114.0, 1134.0, 1171.0, 1364.0, 1469.0, 1490.0, 1620.0];
const MAX: [f64; 8] = [18461.0, 8205.0, 10077.0, 31310.0, 25163.0, 59511.0, 88602.0, 48359.0];
const THROUGHPUT: [f64; 8] = [428.0, 485.0, 400.0, 408.0, 394.0, 174.0, 190.0, 280.0];

/// Sample summary rows; each distribution is centred (in log space) on that size's p90.
pub fn sample_dataset() -> Dataset {
    let rows: Vec<PayloadSummary> = (0..SIZES.len())
        .map(|i| PayloadSummary {
            size: SIZES[i],
            avg_us: AVG[i],
            min_us: MIN[i],
            p50_us: P50[i],
            p90_us: P90[i],
            p99_us: P99[i],
            p999_us: None,
            max_us: MAX[i],
            throughput_rps: THROUGHPUT[i],
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    let distributions = rows
        .iter()
        .map(|r| lognormal_draws(r.p90_us, SAMPLE_SIGMA, &mut rng))
        .collect();

    Dataset { rows, distributions }
}

/// `SAMPLE_DRAWS` log-normal samples with median `median`; empty when the
/// parameters do not describe a distribution.
fn lognormal_draws(median: f64, sigma: f64, rng: &mut StdRng) -> Vec<f64> {
    match LogNormal::new(median.ln(), sigma) {
        Ok(dist) => dist.sample_iter(rng).take(SAMPLE_DRAWS).collect(),
        Err(err) => {
            warn!("no sample distribution for median {median} sigma {sigma}: {err}");
            Vec::new()
        }
    }
}
