// Defines the discrete PID control law and its validated configuration
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

use num_traits::float::FloatCore;

/// Errors raised by the validated configuration layer.
///
/// The controller itself never reports errors; these only come out of [`PidConfig`] setters and
/// [`PidConfigBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum PidConfigError {
    /// The proportional gain is NaN or infinite
    #[cfg_attr(feature = "std", error("Proportional gain must be finite"))]
    InvalidProportionalGain,

    /// The integral gain is NaN or infinite
    #[cfg_attr(feature = "std", error("Integral gain must be finite"))]
    InvalidIntegralGain,

    /// The derivative gain is NaN or infinite
    #[cfg_attr(feature = "std", error("Derivative gain must be finite"))]
    InvalidDerivativeGain,

    /// The sample interval is zero, negative, NaN or infinite
    #[cfg_attr(feature = "std", error("Sample interval must be finite and positive"))]
    InvalidSampleInterval,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PidConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            PidConfigError::InvalidProportionalGain => "Proportional gain must be finite",
            PidConfigError::InvalidIntegralGain => "Integral gain must be finite",
            PidConfigError::InvalidDerivativeGain => "Derivative gain must be finite",
            PidConfigError::InvalidSampleInterval => "Sample interval must be finite and positive",
        };
        f.write_str(msg)
    }
}

/// The `(kp, ki, kd)` triple identifying one simulation run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PidGains<F: FloatCore> {
    /// Proportional gain
    pub kp: F,
    /// Integral gain
    pub ki: F,
    /// Derivative gain
    pub kd: F,
}

impl<F: FloatCore> PidGains<F> {
    /// Bundles three gains into a triple
    pub fn new(kp: F, ki: F, kd: F) -> Self {
        Self { kp, ki, kd }
    }

    /// Returns the gains as a plain `(kp, ki, kd)` tuple
    pub fn as_tuple(&self) -> (F, F, F) {
        (self.kp, self.ki, self.kd)
    }
}

impl<F: FloatCore + core::fmt::Display> PidGains<F> {
    /// Display label of a run, e.g. `$ 1, 0.5, 0 $`
    #[cfg(feature = "std")]
    pub fn label(&self) -> std::string::String {
        std::format!("$ {}, {}, {} $", self.kp, self.ki, self.kd)
    }
}

impl<F: FloatCore> From<(F, F, F)> for PidGains<F> {
    fn from((kp, ki, kd): (F, F, F)) -> Self {
        Self::new(kp, ki, kd)
    }
}

/// Validated gains and sample interval for a [`PidController`].
///
/// Unlike [`PidController::new`], which takes any numbers as-is, every setter here rejects values
/// that would make the control law produce NaN or infinity on its own.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PidConfig<F: FloatCore> {
    gains: PidGains<F>,

    /// Sampling interval, in the same time unit as the simulated horizon.
    /// Defaults to 1.
    dt: F,
}

impl<F: FloatCore> Default for PidConfig<F> {
    fn default() -> Self {
        PidConfig {
            gains: PidGains::new(F::one(), F::zero(), F::zero()),
            dt: F::one(),
        }
    }
}

impl<F: FloatCore> PidConfig<F> {
    /// Returns the proportional gain.
    pub fn kp(&self) -> F {
        self.gains.kp
    }

    /// Returns the integral gain.
    pub fn ki(&self) -> F {
        self.gains.ki
    }

    /// Returns the derivative gain.
    pub fn kd(&self) -> F {
        self.gains.kd
    }

    /// Returns all three gains together.
    pub fn gains(&self) -> PidGains<F> {
        self.gains
    }

    /// Returns the sampling interval.
    pub fn dt(&self) -> F {
        self.dt
    }

    /// Sets the proportional gain.
    ///
    /// # Arguments
    /// - `kp`: The new proportional gain. Negative gains are accepted.
    ///
    /// # Returns
    /// - `Ok(())` if the gain was set successfully.
    /// - `Err(PidConfigError::InvalidProportionalGain)` if the gain is not finite.
    pub fn set_kp(&mut self, kp: F) -> Result<(), PidConfigError> {
        if !kp.is_finite() {
            return Err(PidConfigError::InvalidProportionalGain);
        }
        self.gains.kp = kp;
        Ok(())
    }

    /// Sets the integral gain.
    ///
    /// # Returns
    /// - `Err(PidConfigError::InvalidIntegralGain)` if the gain is not finite.
    pub fn set_ki(&mut self, ki: F) -> Result<(), PidConfigError> {
        if !ki.is_finite() {
            return Err(PidConfigError::InvalidIntegralGain);
        }
        self.gains.ki = ki;
        Ok(())
    }

    /// Sets the derivative gain.
    ///
    /// # Returns
    /// - `Err(PidConfigError::InvalidDerivativeGain)` if the gain is not finite.
    pub fn set_kd(&mut self, kd: F) -> Result<(), PidConfigError> {
        if !kd.is_finite() {
            return Err(PidConfigError::InvalidDerivativeGain);
        }
        self.gains.kd = kd;
        Ok(())
    }

    /// Sets all three gains. Stops at the first invalid gain, leaving the earlier ones applied.
    pub fn set_gains(&mut self, gains: PidGains<F>) -> Result<(), PidConfigError> {
        self.set_kp(gains.kp)?;
        self.set_ki(gains.ki)?;
        self.set_kd(gains.kd)
    }

    /// Sets the sampling interval.
    ///
    /// # Returns
    /// - `Err(PidConfigError::InvalidSampleInterval)` if `dt` is not strictly positive and finite.
    pub fn set_dt(&mut self, dt: F) -> Result<(), PidConfigError> {
        if !(dt > F::zero()) || !dt.is_finite() {
            return Err(PidConfigError::InvalidSampleInterval);
        }
        self.dt = dt;
        Ok(())
    }
}

/// Builder for [`PidConfig`]. Values are only checked in [`PidConfigBuilder::build`].
#[derive(Copy, Clone, Debug)]
pub struct PidConfigBuilder<F: FloatCore> {
    config: PidConfig<F>,
}

impl<F: FloatCore> Default for PidConfigBuilder<F> {
    fn default() -> Self {
        Self {
            config: PidConfig::default(),
        }
    }
}

impl<F: FloatCore> PidConfigBuilder<F> {
    /// Sets the proportional gain.
    pub fn kp(mut self, kp: F) -> Self {
        self.config.gains.kp = kp;
        self
    }

    /// Sets the integral gain.
    pub fn ki(mut self, ki: F) -> Self {
        self.config.gains.ki = ki;
        self
    }

    /// Sets the derivative gain.
    pub fn kd(mut self, kd: F) -> Self {
        self.config.gains.kd = kd;
        self
    }

    /// Sets all three gains.
    pub fn gains(mut self, gains: PidGains<F>) -> Self {
        self.config.gains = gains;
        self
    }

    /// Sets the sampling interval.
    pub fn dt(mut self, dt: F) -> Self {
        self.config.dt = dt;
        self
    }

    /// Validates the accumulated values and produces the configuration.
    pub fn build(self) -> Result<PidConfig<F>, PidConfigError> {
        let mut config = PidConfig::default();
        config.set_gains(self.config.gains)?;
        config.set_dt(self.config.dt)?;
        Ok(config)
    }
}

/// A stateful discrete PID controller.
///
/// The integral is accumulated with forward Euler (`error * dt`) and the derivative is a backward
/// difference of the error over one sample. Neither the output nor the integral is bounded.
///
/// Each call to [`PidController::update`] advances the internal state exactly once; there is no
/// read-only way to query the control law.
#[derive(Copy, Clone, Debug)]
pub struct PidController<F: FloatCore> {
    gains: PidGains<F>,
    dt: F,
    error_sum: F,
    prev_error: F,
}

impl<F: FloatCore> PidController<F> {
    /// Creates a controller with zeroed state.
    ///
    /// Neither the gains nor `dt` are checked. A zero `dt` is not rejected here: the first call to
    /// `update` will then produce an infinite or NaN derivative term. Use
    /// [`PidController::from_config`] for a checked construction.
    pub fn new(gains: impl Into<PidGains<F>>, dt: F) -> Self {
        Self {
            gains: gains.into(),
            dt,
            error_sum: F::zero(),
            prev_error: F::zero(),
        }
    }

    /// Creates a controller with zeroed state from a validated configuration.
    pub fn from_config(config: PidConfig<F>) -> Self {
        Self::new(config.gains(), config.dt())
    }

    /// Returns the gains this controller was built with.
    pub fn gains(&self) -> PidGains<F> {
        self.gains
    }

    /// Returns the sampling interval.
    pub fn dt(&self) -> F {
        self.dt
    }

    /// Returns the accumulated (time-weighted) error.
    pub fn error_sum(&self) -> F {
        self.error_sum
    }

    /// Returns the error seen by the most recent call to `update`, or zero before the first call.
    pub fn prev_error(&self) -> F {
        self.prev_error
    }

    /// Computes the control signal for one sample and advances the controller state.
    ///
    /// # Arguments
    /// - `target`: The setpoint for this sample.
    /// - `value`: The current process value.
    ///
    /// # Returns
    /// `kp * e + ki * Σ(e * dt) + kd * (e - e_prev) / dt`, where `e = target - value`.
    pub fn update(&mut self, target: F, value: F) -> F {
        let error = target - value;
        self.error_sum = self.error_sum + error * self.dt;

        // Backward difference against the error of the previous call
        let derivative = (error - self.prev_error) / self.dt;
        self.prev_error = error;

        self.gains.kp * error + self.gains.ki * self.error_sum + self.gains.kd * derivative
    }
}
