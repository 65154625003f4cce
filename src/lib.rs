#![warn(missing_docs)]

//! # Discrete PID Step-Response Simulator
//!
//! This library simulates how a discrete PID (Proportional-Integral-Derivative) controller tracks
//! a piecewise-constant setpoint schedule, for every combination of a grid of candidate gains.
//!
//! ## Model
//!
//! - The control law is the textbook discrete PID: forward-Euler integral, backward-difference
//!   derivative, no output or integral clamping.
//! - The plant is the identity. The control signal produced on one sample *is* the process value
//!   on the next sample, starting from zero.
//! - The setpoint schedule divides `N` samples into one contiguous segment per target; the last
//!   segment absorbs the remainder of the division.
//!
//! Everything is lazy and single-pass: target streams and trajectories are iterators, and a new
//! controller is built for every run.
//!
//! ## Usage
//!
//! ### Single run
//!
//! ```rust
//! use simpid::pid::PidController;
//! use simpid::schedule::n_target_ranges;
//! use simpid::sim;
//!
//! let pid = PidController::new((1.0, 0.0, 0.0), 1.0);
//! let trajectory: Vec<f64> = sim::run(n_target_ranges(3, &[5.0]), pid).collect();
//!
//! // A pure-P controller with unit gain overshoots straight to the setpoint and back
//! assert_eq!(trajectory, vec![0.0, 5.0, 0.0]);
//! ```
//!
//! ### Gain sweep
//!
//! ```rust
//! use simpid::config::SimulationConfig;
//! use simpid::sweep::GainSpace;
//!
//! let config = SimulationConfig {
//!     gains: GainSpace::new(vec![0.5, 1.0], vec![0.0, 0.1], vec![0.0]),
//!     targets: vec![1.0, 2.0],
//!     total_time: 20.0,
//!     ..Default::default()
//! };
//! config.validate().expect("Invalid sweep");
//!
//! for run in config.runner() {
//!     assert_eq!(run.values.len(), config.samples());
//!     println!("{}: {:?}", run.label, run.values.last());
//! }
//! ```
//!
//! ### Checked construction
//!
//! [`pid::PidController::new`] takes its inputs as-is, so a zero sample interval silently
//! produces non-finite outputs. Go through [`pid::PidConfigBuilder`] to reject such inputs up
//! front:
//!
//! ```rust
//! use simpid::pid::{PidConfigBuilder, PidConfigError, PidController};
//!
//! let config = PidConfigBuilder::default().kp(2.0).ki(0.5).dt(0.1).build();
//! assert!(config.is_ok());
//! let _pid = PidController::<f64>::from_config(config.unwrap());
//!
//! let bad = PidConfigBuilder::<f64>::default().dt(0.0).build();
//! assert_eq!(bad.map(|_| ()), Err(PidConfigError::InvalidSampleInterval));
//! ```
//!
//! ## License
//!
#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// The discrete PID control law.
pub mod pid;

/// Partitioning of the sample horizon into setpoint segments.
pub mod schedule;

/// The closed-loop simulation driver.
pub mod sim;

/// Sample-time utilities.
pub mod time;

/// Sweeps over a grid of gains.
#[cfg(feature = "std")]
pub mod sweep;

/// User-facing sweep configuration.
#[cfg(feature = "std")]
pub mod config;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
