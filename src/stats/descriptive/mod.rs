// 記述統計モジュール

use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::stats::TeamStats;

/// 記述統計量を計算する内部実装
pub(crate) fn describe_impl<T: ToPrimitive + Copy>(data: &[T]) -> Result<TeamStats> {
    if data.is_empty() {
        return Err(Error::EmptyData(
            "descriptive statistics need at least one value".into(),
        ));
    }

    let values = data
        .iter()
        .map(|v| {
            v.to_f64()
                .ok_or_else(|| Error::InvalidArgument("value is not representable as f64".into()))
        })
        .collect::<Result<Vec<f64>>>()?;

    let count = values.len();
    let sum = values.iter().sum::<f64>();
    let mean = sum / count as f64;

    // 母標準偏差（Python の statistics.pstdev と同じ）
    let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / count as f64;
    let std = variance.sqrt();

    // データをソートして分位数を計算
    let mut sorted = values;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let min = sorted[0];
    let max = sorted[count - 1];

    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let q1 = percentile(&sorted, 0.25);
    let q3 = percentile(&sorted, 0.75);

    Ok(TeamStats {
        count,
        sum,
        mean,
        std,
        min,
        q1,
        median,
        q3,
        max,
    })
}

/// パーセンタイルを計算（線形補間）
fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }

    let n = sorted_data.len();
    let idx = p * (n - 1) as f64;
    let idx_floor = idx.floor() as usize;
    let idx_ceil = idx.ceil() as usize;

    if idx_floor == idx_ceil {
        return sorted_data[idx_floor];
    }

    let weight_ceil = idx - idx_floor as f64;
    let weight_floor = 1.0 - weight_ceil;

    sorted_data[idx_floor] * weight_floor + sorted_data[idx_ceil] * weight_ceil
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_basic() {
        let data = vec![1u32, 2, 3, 4, 5];
        let stats = describe_impl(&data).unwrap();

        assert_eq!(stats.count, 5);
        assert!((stats.sum - 15.0).abs() < 1e-10);
        assert!((stats.mean - 3.0).abs() < 1e-10);
        // pstdev([1, 2, 3, 4, 5]) = sqrt(2)
        assert!((stats.std - std::f64::consts::SQRT_2).abs() < 1e-10);
        assert!((stats.min - 1.0).abs() < 1e-10);
        assert!((stats.max - 5.0).abs() < 1e-10);
        assert!((stats.median - 3.0).abs() < 1e-10);
        assert!((stats.q1 - 2.0).abs() < 1e-10);
        assert!((stats.q3 - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_describe_single_value() {
        let stats = describe_impl(&[7u32]).unwrap();
        assert_eq!(stats.count, 1);
        assert!((stats.mean - 7.0).abs() < 1e-10);
        assert!(stats.std.abs() < 1e-10);
        assert!((stats.q1 - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_describe_even_count_median() {
        let stats = describe_impl(&[4u32, 1, 3, 2]).unwrap();
        assert!((stats.median - 2.5).abs() < 1e-10);
        assert!((stats.q1 - 1.75).abs() < 1e-10);
        assert!((stats.q3 - 3.25).abs() < 1e-10);
    }

    #[test]
    fn test_describe_empty() {
        let data: Vec<u32> = vec![];
        let result = describe_impl(&data);
        assert!(matches!(result, Err(Error::EmptyData(_))));
    }
}
