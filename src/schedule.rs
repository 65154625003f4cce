// Splits a sample horizon into piecewise-constant setpoint segments
// Copyright © 2025 Hs293Go
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use core::iter::FusedIterator;
use core::ops::Range;

use num_traits::float::FloatCore;

/// One contiguous run of samples holding a fixed setpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<F: FloatCore> {
    /// The setpoint held over this segment
    pub target: F,
    /// Half-open range of sample indices covered by this segment
    pub range: Range<usize>,
}

impl<F: FloatCore> Segment<F> {
    /// Number of samples in this segment
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether this segment covers no samples at all
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Lazy iterator over the segments of a target schedule.
///
/// Every segment is `n / m` samples long, except the last one which also absorbs the remainder
/// `n - m * (n / m)`, so the segments tile `0..n` exactly.
#[derive(Clone, Debug)]
pub struct Partition<'a, F: FloatCore> {
    targets: core::iter::Enumerate<core::slice::Iter<'a, F>>,
    count: usize,
    step: usize,
    remainder: usize,
    start: usize,
}

/// Partitions `n` samples across `targets`, in order.
///
/// When there are more targets than samples, `n / m` floors to zero and every segment but the last
/// is empty. An empty target list yields no segments.
pub fn partition<F: FloatCore>(n: usize, targets: &[F]) -> Partition<'_, F> {
    let count = targets.len();
    let step = n.checked_div(count).unwrap_or(0);
    let remainder = n - count * step;
    if count > n {
        log::debug!("{count} targets over {n} samples, leading segments will be empty");
    }
    Partition {
        targets: targets.iter().enumerate(),
        count,
        step,
        remainder,
        start: 0,
    }
}

impl<F: FloatCore> Iterator for Partition<'_, F> {
    type Item = Segment<F>;

    fn next(&mut self) -> Option<Self::Item> {
        let (i, &target) = self.targets.next()?;
        let mut end = self.start + self.step;
        if i + 1 == self.count {
            end += self.remainder;
        }
        let range = self.start..end;
        self.start = end;
        Some(Segment { target, range })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

impl<F: FloatCore> ExactSizeIterator for Partition<'_, F> {}
impl<F: FloatCore> FusedIterator for Partition<'_, F> {}

/// Lazy per-sample setpoint sequence of a schedule: position `j` holds the target of whichever
/// segment contains `j`.
#[derive(Clone, Debug)]
pub struct TargetStream<'a, F: FloatCore> {
    segments: Partition<'a, F>,
    current: Option<Segment<F>>,
    remaining: usize,
}

/// Flattens [`partition`] into a stream of exactly `n` setpoints.
///
/// This is both the reference line drawn under the trajectories and the input consumed by
/// [`crate::sim::run`]. Yields nothing when `targets` is empty.
pub fn n_target_ranges<F: FloatCore>(n: usize, targets: &[F]) -> TargetStream<'_, F> {
    TargetStream {
        segments: partition(n, targets),
        current: None,
        remaining: if targets.is_empty() { 0 } else { n },
    }
}

impl<F: FloatCore> Iterator for TargetStream<'_, F> {
    type Item = F;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(segment) = self.current.as_mut() {
                if segment.range.next().is_some() {
                    self.remaining -= 1;
                    return Some(segment.target);
                }
            }
            // Skips over empty segments
            self.current = Some(self.segments.next()?);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<F: FloatCore> ExactSizeIterator for TargetStream<'_, F> {}
impl<F: FloatCore> FusedIterator for TargetStream<'_, F> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_is_precomputed_from_floor_division() {
        let p = partition(10, &[1.0, 2.0, 3.0]);
        assert_eq!(p.step, 3);
        assert_eq!(p.remainder, 1);

        let p = partition(2, &[1.0, 2.0, 3.0]);
        assert_eq!(p.step, 0);
        assert_eq!(p.remainder, 2);
    }

    #[test]
    fn test_stream_size_hint_tracks_consumption() {
        let mut stream = n_target_ranges(4, &[1.0f32, 2.0]);
        assert_eq!(stream.len(), 4);
        stream.next();
        stream.next();
        stream.next();
        assert_eq!(stream.len(), 1);
        stream.next();
        assert_eq!(stream.len(), 0);
        assert_eq!(stream.next(), None);
    }
}
