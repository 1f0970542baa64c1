// PowerRank 統計モジュール
//
// ランキングの記述統計と、最大連続部分列和を提供します。

pub mod descriptive;
pub mod subsequence;

use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;

use crate::error::{Error, Result};

/// Summary statistics of the rank positions one team received
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStats {
    /// Number of rankers that placed the team
    pub count: usize,
    /// Sum of rank positions
    pub sum: f64,
    /// Mean rank
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
    /// Best (lowest) rank
    pub min: f64,
    /// 25th percentile
    pub q1: f64,
    /// Median rank
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
    /// Worst (highest) rank
    pub max: f64,
}

/// Compute summary statistics of a set of values
///
/// # Example
/// ```rust
/// use powerrank::stats;
///
/// let stats = stats::describe(&[1u32, 2, 3, 4, 5]).unwrap();
/// assert_eq!(stats.mean, 3.0);
/// ```
pub fn describe<T: ToPrimitive + Copy>(data: &[T]) -> Result<TeamStats> {
    descriptive::describe_impl(data)
}

/// Compute summary statistics of one team's rank positions
pub fn rank_stats<T: AsRef<[u32]>>(ranks: T) -> Result<TeamStats> {
    descriptive::describe_impl(ranks.as_ref())
}

/// Maximum sum of any contiguous non-empty subsequence
///
/// Enumerates every window of every length. When every value is non-positive the
/// result is the largest single value.
///
/// # Example
/// ```rust
/// use powerrank::stats;
///
/// assert_eq!(stats::max_contiguous_sum(&[5, -2, 7]).unwrap(), 10);
/// assert_eq!(stats::max_contiguous_sum(&[-3, -1, -2]).unwrap(), -1);
/// assert!(stats::max_contiguous_sum(&[]).is_err());
/// ```
///
/// Fails with `Overflow` when the best sum does not fit in `i64`.
pub fn max_contiguous_sum(seq: &[i64]) -> Result<i64> {
    subsequence::max_contiguous_sum_impl(seq)
}

/// Linear-time variant of [`max_contiguous_sum`] with identical results
pub fn max_contiguous_sum_scan(seq: &[i64]) -> Result<i64> {
    subsequence::max_contiguous_sum_scan_impl(seq)
}

/// How the maximum contiguous sum is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContiguousStrategy {
    /// Enumerate every window (quadratic)
    #[default]
    Exhaustive,
    /// Running-sum scan (linear)
    Scan,
}

impl ContiguousStrategy {
    pub fn max_contiguous_sum(&self, seq: &[i64]) -> Result<i64> {
        match self {
            ContiguousStrategy::Exhaustive => max_contiguous_sum(seq),
            ContiguousStrategy::Scan => max_contiguous_sum_scan(seq),
        }
    }
}

impl fmt::Display for ContiguousStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContiguousStrategy::Exhaustive => write!(f, "exhaustive"),
            ContiguousStrategy::Scan => write!(f, "scan"),
        }
    }
}

impl FromStr for ContiguousStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "exhaustive" | "brute-force" => Ok(ContiguousStrategy::Exhaustive),
            "scan" | "linear" => Ok(ContiguousStrategy::Scan),
            other => Err(Error::InvalidArgument(format!(
                "unknown strategy '{}', expected 'exhaustive' or 'scan'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!(
            "scan".parse::<ContiguousStrategy>().unwrap(),
            ContiguousStrategy::Scan
        );
        assert_eq!(
            "Exhaustive".parse::<ContiguousStrategy>().unwrap(),
            ContiguousStrategy::Exhaustive
        );
        assert!("fast".parse::<ContiguousStrategy>().is_err());
    }

    #[test]
    fn test_strategy_dispatch() {
        let seq = [1, 2, 3, -10, 40, -50, 100];
        for strategy in [ContiguousStrategy::Exhaustive, ContiguousStrategy::Scan] {
            assert_eq!(strategy.max_contiguous_sum(&seq).unwrap(), 100);
        }
    }
}
