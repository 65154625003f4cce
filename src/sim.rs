// Closed-loop simulation of a PID controller fed back on its own output
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

use num_traits::float::FloatCore;

use crate::pid::PidController;
use crate::schedule::Segment;

/// Where the process value restarts from during a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InitialCondition {
    /// The process value starts at zero once, at the first sample.
    #[default]
    Once,

    /// The process value restarts at zero at the first sample of every schedule segment, while the
    /// controller's integral and previous error carry over.
    PerSegment,
}

/// Lazy closed-loop trajectory.
///
/// The plant is the identity: the control signal computed on one sample is the process value
/// emitted on the next. The trajectory owns its controller, so a controller can only ever drive a
/// single run; recover it with [`Trajectory::into_controller`] once the run is drained.
#[derive(Clone, Debug)]
pub struct Trajectory<I, F: FloatCore> {
    targets: I,
    controller: PidController<F>,
    value: F,
}

/// Drives `controller` through `targets`, starting from a process value of zero.
///
/// Yields exactly one process value per target: the value *before* the controller reacts to that
/// sample's target.
pub fn run<I, F>(targets: I, controller: PidController<F>) -> Trajectory<I::IntoIter, F>
where
    I: IntoIterator<Item = F>,
    F: FloatCore,
{
    Trajectory {
        targets: targets.into_iter(),
        controller,
        value: F::zero(),
    }
}

impl<I, F: FloatCore> Trajectory<I, F> {
    /// Returns the controller driving this run.
    pub fn controller(&self) -> &PidController<F> {
        &self.controller
    }

    /// Consumes the trajectory, handing back the controller with whatever state it reached.
    pub fn into_controller(self) -> PidController<F> {
        self.controller
    }
}

impl<I, F> Iterator for Trajectory<I, F>
where
    I: Iterator<Item = F>,
    F: FloatCore,
{
    type Item = F;

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.targets.next()?;
        let emitted = self.value;
        self.value = self.controller.update(target, emitted);
        Some(emitted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

impl<I: ExactSizeIterator<Item = F>, F: FloatCore> ExactSizeIterator for Trajectory<I, F> {}
impl<I: FusedIterator<Item = F>, F: FloatCore> FusedIterator for Trajectory<I, F> {}

/// Lazy closed-loop trajectory that restarts the process value at every segment boundary.
#[derive(Clone, Debug)]
pub struct SegmentedTrajectory<S, F: FloatCore> {
    segments: S,
    controller: PidController<F>,
    current: Option<Segment<F>>,
    value: F,
}

/// Like [`run`], but the process value drops back to zero at the start of each segment of the
/// schedule. The controller is shared by all segments.
pub fn run_segmented<S, F>(
    segments: S,
    controller: PidController<F>,
) -> SegmentedTrajectory<S::IntoIter, F>
where
    S: IntoIterator<Item = Segment<F>>,
    F: FloatCore,
{
    SegmentedTrajectory {
        segments: segments.into_iter(),
        controller,
        current: None,
        value: F::zero(),
    }
}

impl<S, F: FloatCore> SegmentedTrajectory<S, F> {
    /// Consumes the trajectory, handing back the controller with whatever state it reached.
    pub fn into_controller(self) -> PidController<F> {
        self.controller
    }
}

impl<S, F> Iterator for SegmentedTrajectory<S, F>
where
    S: Iterator<Item = Segment<F>>,
    F: FloatCore,
{
    type Item = F;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(segment) = self.current.as_mut() {
                if segment.range.next().is_some() {
                    let emitted = self.value;
                    self.value = self.controller.update(segment.target, emitted);
                    return Some(emitted);
                }
            }
            let segment = self.segments.next()?;
            log::trace!("segment {:?} starts from rest", segment.range);
            self.current = Some(segment);
            self.value = F::zero();
        }
    }
}

impl<S, F> FusedIterator for SegmentedTrajectory<S, F>
where
    S: FusedIterator<Item = Segment<F>>,
    F: FloatCore,
{
}
