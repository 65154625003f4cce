// Collects the user-facing inputs of a gain sweep and derives the simulation horizon
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
use core::str::FromStr;

use num_traits::float::FloatCore;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::pid::PidConfigError;
use crate::schedule::n_target_ranges;
use crate::sim::InitialCondition;
use crate::sweep::{GainSpace, Sweep};
use crate::time::{sample_count, TimeAxis};

/// Errors raised while parsing or validating a [`SimulationConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A comma-separated list contained an item that is not a number
    #[error("'{0}' is not a number")]
    InvalidValue(String),

    /// A list that must hold at least one value is empty
    #[error("no {0} values given")]
    Empty(&'static str),

    /// The simulated horizon is negative or not finite
    #[error("total time must be finite and non-negative")]
    InvalidTotalTime,

    /// The controller settings were rejected
    #[error(transparent)]
    Controller(#[from] PidConfigError),
}

/// Parses a comma-separated list of numbers such as `"0.5, 1,2"`.
///
/// An empty or all-whitespace input yields an empty list.
pub fn parse_values<F: FromStr>(input: &str) -> Result<Vec<F>, ConfigError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(str::trim)
        .map(|item| {
            item.parse::<F>()
                .map_err(|_| ConfigError::InvalidValue(item.to_string()))
        })
        .collect()
}

/// Everything needed to run and display one gain sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: FloatCore> {
    /// Candidate gains
    pub gains: GainSpace<F>,

    /// Setpoints, held in turn over equal shares of the horizon.
    /// Defaults to a single setpoint of 1.
    pub targets: Vec<F>,

    /// Sampling interval.
    /// Defaults to 1.
    pub dt: F,

    /// Simulated horizon, in the same unit as `dt`.
    /// Defaults to 100.
    pub total_time: F,

    /// Whether the process value restarts at every schedule segment.
    /// Defaults to [`InitialCondition::Once`].
    pub initial_condition: InitialCondition,
}

impl<F: FloatCore> Default for SimulationConfig<F> {
    fn default() -> Self {
        let hundred = <F as num_traits::NumCast>::from(100).unwrap_or_else(F::one);
        Self {
            gains: GainSpace::default(),
            targets: std::vec![F::one()],
            dt: F::one(),
            total_time: hundred,
            initial_condition: InitialCondition::default(),
        }
    }
}

impl<F: FloatCore + Display> SimulationConfig<F> {
    /// Checks that the sweep is well-formed.
    ///
    /// More targets than samples is accepted: the schedule is degenerate but still covers every
    /// sample.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, values) in [
            ("kp", &self.gains.kp),
            ("ki", &self.gains.ki),
            ("kd", &self.gains.kd),
            ("target", &self.targets),
        ] {
            if values.is_empty() {
                return Err(ConfigError::Empty(name));
            }
        }

        if !(self.dt > F::zero()) || !self.dt.is_finite() {
            return Err(PidConfigError::InvalidSampleInterval.into());
        }
        if self.total_time < F::zero() || !self.total_time.is_finite() {
            return Err(ConfigError::InvalidTotalTime);
        }

        let samples = self.samples();
        if self.targets.len() > samples {
            log::warn!(
                "{} targets over {samples} samples, some setpoints will never be shown",
                self.targets.len()
            );
        }
        Ok(())
    }

    /// Number of samples `N = ⌊T / dt⌋ + 1`.
    pub fn samples(&self) -> usize {
        sample_count(self.total_time, self.dt)
    }

    /// Sample instants `0, dt, 2dt, ...`, one per sample.
    pub fn time_axis(&self) -> TimeAxis<F> {
        TimeAxis::new(self.samples(), self.dt)
    }

    /// The setpoint schedule itself, one value per sample.
    pub fn reference(&self) -> Vec<F> {
        n_target_ranges(self.samples(), &self.targets).collect()
    }

    /// Lazily runs one simulation per gain triple.
    pub fn runner(&self) -> Sweep<'_, F> {
        Sweep::new(&self.gains, self.dt, self.samples(), &self.targets)
            .with_initial_condition(self.initial_condition)
    }
}
