use powerrank::error::PowerRankError;
use powerrank::stats::{max_contiguous_sum, max_contiguous_sum_scan, ContiguousStrategy};
use powerrank::window::{all_windows, windows};
use proptest::prelude::*;

#[test]
fn test_documented_scenarios() {
    assert_eq!(max_contiguous_sum(&[1, 2, 3]).unwrap(), 6);
    assert_eq!(max_contiguous_sum(&[10, -8, 2]).unwrap(), 10);
    assert_eq!(max_contiguous_sum(&[5, -2, 7]).unwrap(), 10);
    assert_eq!(
        max_contiguous_sum(&[1, 2, 3, -10, 40, -50, 100]).unwrap(),
        100
    );
    // 正の値が無くても最大の単一要素を返す
    assert_eq!(max_contiguous_sum(&[-3, -1, -2]).unwrap(), -1);
}

#[test]
fn test_empty_sequence_is_invalid() {
    assert!(matches!(
        max_contiguous_sum(&[]),
        Err(PowerRankError::InvalidArgument(_))
    ));
    assert!(matches!(
        max_contiguous_sum_scan(&[]),
        Err(PowerRankError::InvalidArgument(_))
    ));
}

#[test]
fn test_overflowing_sum_is_an_error() {
    for strategy in [ContiguousStrategy::Exhaustive, ContiguousStrategy::Scan] {
        assert!(matches!(
            strategy.max_contiguous_sum(&[i64::MAX, 1]),
            Err(PowerRankError::Overflow(_))
        ));
        assert_eq!(strategy.max_contiguous_sum(&[i64::MAX]).unwrap(), i64::MAX);
        assert_eq!(strategy.max_contiguous_sum(&[i64::MIN, i64::MIN]).unwrap(), i64::MIN);
    }
}

#[test]
fn test_window_edges() {
    let seq = [4, 8, 15, 16, 23, 42];

    assert_eq!(windows(&seq, 7).unwrap().count(), 0);
    assert_eq!(windows(&seq, 6).unwrap().collect::<Vec<_>>(), vec![&seq[..]]);
    assert!(matches!(
        windows(&seq, 0),
        Err(PowerRankError::InvalidArgument(_))
    ));
}

fn small_sequences() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 1..40)
}

proptest! {
    #[test]
    fn test_at_least_best_element(seq in small_sequences()) {
        let best = max_contiguous_sum(&seq).unwrap();
        prop_assert!(best >= *seq.iter().max().unwrap());
    }

    #[test]
    fn test_non_negative_sum_is_total(seq in prop::collection::vec(0i64..1_000, 1..40)) {
        let best = max_contiguous_sum(&seq).unwrap();
        prop_assert!(best <= seq.iter().sum::<i64>());
        prop_assert_eq!(best, seq.iter().sum::<i64>());
    }

    #[test]
    fn test_deterministic(seq in small_sequences()) {
        prop_assert_eq!(max_contiguous_sum(&seq).unwrap(), max_contiguous_sum(&seq).unwrap());
    }

    #[test]
    fn test_scan_matches_exhaustive(seq in small_sequences()) {
        prop_assert_eq!(
            ContiguousStrategy::Scan.max_contiguous_sum(&seq).unwrap(),
            ContiguousStrategy::Exhaustive.max_contiguous_sum(&seq).unwrap()
        );
    }

    #[test]
    fn test_best_is_some_window_sum(seq in small_sequences()) {
        let best = max_contiguous_sum(&seq).unwrap();
        let sums: Vec<i64> = all_windows(&seq).map(|w| w.iter().sum()).collect();
        prop_assert_eq!(sums.len(), seq.len() * (seq.len() + 1) / 2);
        prop_assert!(sums.contains(&best));
        prop_assert!(sums.iter().all(|&s| s <= best));
    }

    #[test]
    fn test_scan_matches_exhaustive_on_extremes(
        seq in prop::collection::vec(prop_oneof![Just(i64::MAX), Just(i64::MIN), -5i64..5], 1..12)
    ) {
        let exhaustive = max_contiguous_sum(&seq).ok();
        let scan = max_contiguous_sum_scan(&seq).ok();
        prop_assert_eq!(exhaustive, scan);
    }

    #[test]
    fn test_window_lengths(seq in small_sequences(), size in 1usize..50) {
        let produced: Vec<&[i64]> = windows(&seq, size).unwrap().collect();
        prop_assert_eq!(produced.len(), (seq.len() + 1).saturating_sub(size));
        for (offset, window) in produced.iter().enumerate() {
            prop_assert_eq!(*window, &seq[offset..offset + size]);
        }
    }
}
