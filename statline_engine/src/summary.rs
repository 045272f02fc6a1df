//! Descriptive statistics over a buffered sequence of values.
//!
//! A [`Summary`] holds a value for every [`Metric`], computed once from the
//! whole input. Metrics that are undefined for an empty input are 0.

use std::ops::Index;

use average::Variance;

use crate::Metric;

/// Every metric of one input sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    values: [f64; Metric::LEN],
}

impl Summary {
    /// Compute all metrics of `values`.
    ///
    /// Percentiles interpolate linearly between the closest ranks, see
    /// [`percentile`]. The standard deviation is the population standard
    /// deviation.
    #[must_use]
    pub fn compute(values: &[f64]) -> Self {
        let mut summary = Self {
            values: [0.0; Metric::LEN],
        };
        if values.is_empty() {
            return summary;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let sum: f64 = values.iter().sum();
        let variance: Variance = values.iter().copied().collect();

        for metric in Metric::ALL {
            summary.values[metric.index()] = match metric {
                Metric::Count => count as f64,
                Metric::Sum => sum,
                Metric::P99 => percentile(&sorted, 99.0),
                Metric::P97 => percentile(&sorted, 97.0),
                Metric::P95 => percentile(&sorted, 95.0),
                Metric::P90 => percentile(&sorted, 90.0),
                Metric::P75 => percentile(&sorted, 75.0),
                Metric::P50 => percentile(&sorted, 50.0),
                Metric::P25 => percentile(&sorted, 25.0),
                Metric::Min => sorted[0],
                Metric::Max => sorted[count - 1],
                Metric::Median => percentile(&sorted, 50.0),
                Metric::Average => sum / count as f64,
                Metric::Stddev => variance.population_variance().max(0.0).sqrt(),
            };
        }
        summary
    }

    /// The value of `metric`.
    #[must_use]
    pub fn get(&self, metric: Metric) -> f64 {
        self.values[metric.index()]
    }

    /// All metrics with their values, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL
            .into_iter()
            .map(|metric| (metric, self.get(metric)))
    }

    /// True if the summary was computed from no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.get(Metric::Count) == 0.0
    }
}

impl Index<Metric> for Summary {
    type Output = f64;

    fn index(&self, metric: Metric) -> &f64 {
        &self.values[metric.index()]
    }
}

/// The `p`th percentile, `p` in `[0, 100]`, of an ascending slice.
///
/// The rank `p / 100 * (n - 1)` is interpolated linearly between the values at
/// its floor and ceiling. An empty slice yields 0 and a single element yields
/// that element. The 50th percentile of an even-length slice is the mean of
/// the two middle values, which is how [`Metric::Median`] is computed.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only,
        _ => {
            let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
            let lower = sorted[rank.floor() as usize];
            let upper = sorted[rank.ceil() as usize];
            let fraction = rank - rank.floor();
            if fraction == 0.0 {
                return lower;
            }
            let span = upper - lower;
            let interpolated = if span.is_finite() {
                lower + span * fraction
            } else {
                // Opposite signs near the edge of the f64 range.
                lower * (1.0 - fraction) + upper * fraction
            };
            // Rounding in the interpolation must not escape [lower, upper].
            interpolated.min(upper).max(lower)
        }
    }
}
