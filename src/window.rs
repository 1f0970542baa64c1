//! Sliding windows over ordered sequences
//!
//! Two producers are provided:
//!
//! - [`windows`] yields every contiguous slice of one fixed length
//! - [`all_windows`] yields every contiguous slice of every length, shortest first
//!
//! Both borrow the input and never copy elements; each call returns a fresh iterator
//! that can be cloned to restart the enumeration.

use std::iter::FusedIterator;
use std::slice;

use crate::error::{PowerRankError, Result};

/// Iterator over all contiguous slices of a fixed length
#[derive(Debug, Clone)]
pub struct Windows<'a, T> {
    inner: slice::Windows<'a, T>,
    size: usize,
}

impl<'a, T> Windows<'a, T> {
    /// Length of each produced slice
    pub fn window_size(&self) -> usize {
        self.size
    }
}

impl<'a, T> Iterator for Windows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Windows<'a, T> {}

impl<'a, T> FusedIterator for Windows<'a, T> {}

/// Produce every contiguous slice of `seq` with length exactly `size`,
/// ordered by starting offset.
///
/// A `size` larger than the sequence yields nothing. A `size` of zero is rejected.
///
/// # Example
///
/// ```
/// use powerrank::window::windows;
///
/// let seq = [1, 2, 3, 4];
/// let pairs: Vec<&[i32]> = windows(&seq, 3).unwrap().collect();
/// assert_eq!(pairs, vec![&[1, 2, 3][..], &[2, 3, 4][..]]);
/// ```
pub fn windows<T>(seq: &[T], size: usize) -> Result<Windows<'_, T>> {
    if size == 0 {
        return Err(PowerRankError::InvalidArgument(
            "window size must be at least 1".to_string(),
        ));
    }

    Ok(Windows {
        inner: seq.windows(size),
        size,
    })
}

/// Iterator over every contiguous non-empty slice, by length then by offset
#[derive(Debug, Clone)]
pub struct AllWindows<'a, T> {
    seq: &'a [T],
    size: usize,
    offset: usize,
}

impl<'a, T> Iterator for AllWindows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 || self.size > self.seq.len() {
            return None;
        }

        let start = self.offset;
        let window = &self.seq[start..start + self.size];

        // 末尾に達したら次の長さへ
        if start + self.size == self.seq.len() {
            self.size += 1;
            self.offset = 0;
        } else {
            self.offset += 1;
        }

        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = remaining_windows(self.seq.len(), self.size, self.offset);
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for AllWindows<'a, T> {}

impl<'a, T> FusedIterator for AllWindows<'a, T> {}

/// Produce every contiguous non-empty slice of `seq`: all slices of length 1,
/// then all of length 2, up to the whole sequence.
///
/// A sequence of length `n` yields `n * (n + 1) / 2` slices.
pub fn all_windows<T>(seq: &[T]) -> AllWindows<'_, T> {
    AllWindows {
        seq,
        size: 1,
        offset: 0,
    }
}

fn remaining_windows(len: usize, size: usize, offset: usize) -> usize {
    if size == 0 || size > len {
        return 0;
    }
    // slices left at the current length, then every longer length in full
    let current = len - size + 1 - offset;
    let longer: usize = (size + 1..=len).map(|s| len - s + 1).sum();
    current + longer
}
