// Maps a simulated horizon onto discrete sample instants
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

use num_traits::{float::FloatCore, NumCast};

/// Number of samples needed to cover `[0, total_time]` at interval `dt`, i.e. `⌊T / dt⌋ + 1`.
///
/// Returns 0 when the quotient has no `usize` representation (negative, NaN, or infinite, which
/// includes `dt == 0`).
pub fn sample_count<F: FloatCore>(total_time: F, dt: F) -> usize {
    (total_time / dt)
        .floor()
        .to_usize()
        .and_then(|n| n.checked_add(1))
        .unwrap_or(0)
}

/// Lazy iterator over sample instants `i * dt` for `i` in `0..n`.
#[derive(Clone, Debug)]
pub struct TimeAxis<F: FloatCore> {
    dt: F,
    indices: core::ops::Range<usize>,
}

impl<F: FloatCore> TimeAxis<F> {
    /// Creates the axis of `n` sample instants spaced `dt` apart.
    pub fn new(n: usize, dt: F) -> Self {
        Self { dt, indices: 0..n }
    }

    /// Creates the axis spanning `[0, total_time]`, see [`sample_count`].
    pub fn spanning(total_time: F, dt: F) -> Self {
        Self::new(sample_count(total_time, dt), dt)
    }
}

impl<F: FloatCore> Iterator for TimeAxis<F> {
    type Item = F;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.indices.next()?;
        // i * dt, not a running sum
        Some(<F as NumCast>::from(i).unwrap_or_else(F::nan) * self.dt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<F: FloatCore> ExactSizeIterator for TimeAxis<F> {}
impl<F: FloatCore> FusedIterator for TimeAxis<F> {}
