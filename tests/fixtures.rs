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

#[cfg(test)]
#[allow(dead_code)]
pub mod test_pid {

    use simpid::pid::{PidController, PidGains};
    use simpid::sweep::GainSpace;

    pub const UNIT_DT: f64 = 1.0;

    pub fn make_controller(kp: f64, ki: f64, kd: f64) -> PidController<f64> {
        PidController::new(PidGains::new(kp, ki, kd), UNIT_DT)
    }

    pub fn make_p_controller(kp: f64) -> PidController<f64> {
        make_controller(kp, 0.0, 0.0)
    }

    /// A small grid with distinct values on every axis, so ordering mistakes show up
    pub fn make_gain_space() -> GainSpace<f64> {
        GainSpace::new(vec![0.5, 1.0], vec![0.0, 0.1, 0.2], vec![0.0, 0.05])
    }
}
