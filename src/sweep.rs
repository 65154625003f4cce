// Runs one closed-loop simulation per point of a Cartesian gain grid
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

use core::fmt::Display;
use core::iter::FusedIterator;

use num_traits::float::FloatCore;
use std::string::String;
use std::vec::Vec;

use crate::pid::{PidController, PidGains};
use crate::schedule::{n_target_ranges, partition};
use crate::sim::{run, run_segmented, InitialCondition};

/// Candidate values for each gain. The sweep visits their Cartesian product.
#[derive(Clone, Debug, PartialEq)]
pub struct GainSpace<F: FloatCore> {
    /// Proportional gains, outermost axis
    pub kp: Vec<F>,
    /// Integral gains, middle axis
    pub ki: Vec<F>,
    /// Derivative gains, innermost axis
    pub kd: Vec<F>,
}

impl<F: FloatCore> Default for GainSpace<F> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

impl<F: FloatCore> GainSpace<F> {
    /// Bundles the three candidate lists.
    pub fn new(kp: Vec<F>, ki: Vec<F>, kd: Vec<F>) -> Self {
        Self { kp, ki, kd }
    }

    /// Number of gain triples in the grid.
    pub fn len(&self) -> usize {
        self.kp.len() * self.ki.len() * self.kd.len()
    }

    /// Whether any of the axes is empty, leaving nothing to sweep.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the gain triples with `kp` outermost and `kd` innermost.
    pub fn triples(&self) -> impl Iterator<Item = PidGains<F>> + '_ {
        (0..self.len()).map(move |i| self.triple(i))
    }

    /// The `i`-th triple of the grid in lexicographic order. Panics if `i >= self.len()`.
    pub fn triple(&self, i: usize) -> PidGains<F> {
        let (n_i, n_d) = (self.ki.len(), self.kd.len());
        PidGains::new(
            self.kp[i / (n_i * n_d)],
            self.ki[(i / n_d) % n_i],
            self.kd[i % n_d],
        )
    }
}

/// The trajectory of one sweep point, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledTrajectory<F: FloatCore> {
    /// The gains that produced this trajectory
    pub gains: PidGains<F>,
    /// Legend label derived from the gains
    pub label: String,
    /// One process value per sample
    pub values: Vec<F>,
}

/// Lazy sweep over a gain grid. Each item is an independent run with its own controller and its
/// own pass over the target schedule.
#[derive(Clone, Debug)]
pub struct Sweep<'a, F: FloatCore> {
    space: &'a GainSpace<F>,
    index: usize,
    dt: F,
    samples: usize,
    targets: &'a [F],
    initial_condition: InitialCondition,
}

impl<'a, F: FloatCore + Display> Sweep<'a, F> {
    /// Prepares a sweep of `space` over `samples` samples of the schedule built from `targets`.
    pub fn new(space: &'a GainSpace<F>, dt: F, samples: usize, targets: &'a [F]) -> Self {
        Self {
            space,
            index: 0,
            dt,
            samples,
            targets,
            initial_condition: InitialCondition::default(),
        }
    }

    /// Selects whether the process value restarts at every schedule segment.
    pub fn with_initial_condition(mut self, initial_condition: InitialCondition) -> Self {
        self.initial_condition = initial_condition;
        self
    }

    fn simulate(&self, gains: PidGains<F>) -> Vec<F> {
        let controller = PidController::new(gains, self.dt);
        match self.initial_condition {
            InitialCondition::Once => {
                run(n_target_ranges(self.samples, self.targets), controller).collect()
            }
            InitialCondition::PerSegment => {
                run_segmented(partition(self.samples, self.targets), controller).collect()
            }
        }
    }
}

impl<F: FloatCore + Display> Iterator for Sweep<'_, F> {
    type Item = LabeledTrajectory<F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.space.len() {
            return None;
        }
        let gains = self.space.triple(self.index);
        self.index += 1;
        let label = gains.label();
        log::debug!("simulating {label} over {} samples", self.samples);

        let values = self.simulate(gains);
        if let Some(last) = values.last().filter(|v| !v.is_finite()) {
            log::warn!("trajectory {label} diverged to {last}");
        }
        Some(LabeledTrajectory {
            gains,
            label,
            values,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.space.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<F: FloatCore + Display> ExactSizeIterator for Sweep<'_, F> {}
impl<F: FloatCore + Display> FusedIterator for Sweep<'_, F> {}

/// Runs the whole sweep eagerly, one trajectory per gain triple in grid order.
pub fn sweep<F: FloatCore + Display>(
    space: &GainSpace<F>,
    dt: F,
    samples: usize,
    targets: &[F],
) -> Vec<LabeledTrajectory<F>> {
    Sweep::new(space, dt, samples, targets).collect()
}
