// 最大連続部分列和

use crate::error::{Error, Result};
use crate::window::windows;

// 和は i128 で数え、結果だけを i64 に戻す
fn narrow(best: i128) -> Result<i64> {
    i64::try_from(best).map_err(|_| {
        Error::Overflow(format!("maximum contiguous sum {} does not fit in i64", best))
    })
}

/// Maximum sum over every contiguous non-empty slice, found by enumerating
/// all windows of every length and keeping the best.
pub(crate) fn max_contiguous_sum_impl(seq: &[i64]) -> Result<i64> {
    if seq.is_empty() {
        return Err(Error::InvalidArgument(
            "maximum contiguous sum needs at least one value".into(),
        ));
    }

    // 全ての長さのウィンドウを候補として集める
    let mut candidates: Vec<&[i64]> = Vec::with_capacity(seq.len() * (seq.len() + 1) / 2);
    for size in 1..=seq.len() {
        candidates.extend(windows(seq, size)?);
    }

    let best = candidates
        .into_iter()
        .map(|window| window.iter().map(|&v| i128::from(v)).sum::<i128>())
        .max()
        .ok_or_else(|| Error::EmptyData("no candidate windows".into()))?;
    narrow(best)
}

/// Linear running-sum scan. Returns the same value as the exhaustive version.
pub(crate) fn max_contiguous_sum_scan_impl(seq: &[i64]) -> Result<i64> {
    let (&first, rest) = seq.split_first().ok_or_else(|| {
        Error::InvalidArgument("maximum contiguous sum needs at least one value".into())
    })?;

    let mut best = i128::from(first);
    let mut running = best;
    for &value in rest {
        let value = i128::from(value);
        // 直前までの和が負なら捨てて、この要素から数え直す
        running = if running > 0 { running + value } else { value };
        best = best.max(running);
    }

    narrow(best)
}
