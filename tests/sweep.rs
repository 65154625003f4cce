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

mod fixtures;

mod test_gain_space {
    use super::fixtures::test_pid::make_gain_space;

    use simpid::pid::PidGains;
    use simpid::sweep::GainSpace;

    #[test]
    fn test_cartesian_order() {
        let space = GainSpace::new(vec![1.0, 2.0], vec![10.0, 20.0], vec![100.0, 200.0]);
        let triples: Vec<(f64, f64, f64)> = space.triples().map(|g| g.as_tuple()).collect();
        assert_eq!(
            triples,
            vec![
                (1.0, 10.0, 100.0),
                (1.0, 10.0, 200.0),
                (1.0, 20.0, 100.0),
                (1.0, 20.0, 200.0),
                (2.0, 10.0, 100.0),
                (2.0, 10.0, 200.0),
                (2.0, 20.0, 100.0),
                (2.0, 20.0, 200.0),
            ]
        );
    }

    #[test]
    fn test_triples_match_nested_loops() {
        let space = make_gain_space();
        let mut expected = Vec::new();
        for &kp in &space.kp {
            for &ki in &space.ki {
                for &kd in &space.kd {
                    expected.push(PidGains::new(kp, ki, kd));
                }
            }
        }
        assert_eq!(space.len(), 12);
        assert_eq!(space.triples().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_input_order_is_kept() {
        // Unsorted axes are not reordered
        let space = GainSpace::new(vec![3.0, 1.0], vec![0.0], vec![0.5, -0.5]);
        let kps: Vec<f64> = space.triples().map(|g| g.kp).collect();
        let kds: Vec<f64> = space.triples().map(|g| g.kd).collect();
        assert_eq!(kps, vec![3.0, 3.0, 1.0, 1.0]);
        assert_eq!(kds, vec![0.5, -0.5, 0.5, -0.5]);
    }

    #[test]
    fn test_empty_axis_yields_nothing() {
        let space = GainSpace::new(vec![1.0, 2.0], vec![], vec![0.0]);
        assert!(space.is_empty());
        assert_eq!(space.triples().count(), 0);
    }
}

mod test_sweep {
    use super::fixtures::test_pid::*;

    use simpid::pid::PidController;
    use simpid::schedule::{n_target_ranges, partition};
    use simpid::sim::{run, run_segmented, InitialCondition};
    use simpid::sweep::{sweep, GainSpace, Sweep};

    const TARGETS: &[f64] = &[1.0, 2.0, 0.5];
    const SAMPLES: usize = 61;

    #[test]
    fn test_one_trajectory_per_triple_in_grid_order() {
        let space = make_gain_space();
        let runs = sweep(&space, UNIT_DT, SAMPLES, TARGETS);

        assert_eq!(runs.len(), space.len());
        for (run, gains) in runs.iter().zip(space.triples()) {
            assert_eq!(run.gains, gains);
            assert_eq!(run.label, gains.label());
            assert_eq!(run.values.len(), SAMPLES);
        }
    }

    #[test]
    fn test_each_run_uses_a_fresh_controller() {
        let space = make_gain_space();
        for labeled in Sweep::new(&space, 0.5, SAMPLES, TARGETS) {
            let expected: Vec<f64> = run(
                n_target_ranges(SAMPLES, TARGETS),
                PidController::new(labeled.gains, 0.5),
            )
            .collect();
            assert_eq!(labeled.values, expected);
        }
    }

    #[test]
    fn test_repeated_gains_give_identical_runs() {
        let space = GainSpace::new(vec![0.9, 0.9], vec![0.1], vec![0.3]);
        let runs = sweep(&space, UNIT_DT, SAMPLES, TARGETS);
        assert_eq!(runs[0], runs[1]);
    }

    #[test]
    fn test_per_segment_initial_condition() {
        let space = make_gain_space();
        let runs = Sweep::new(&space, UNIT_DT, SAMPLES, TARGETS)
            .with_initial_condition(InitialCondition::PerSegment);
        assert_eq!(runs.len(), space.len());

        for labeled in runs {
            let expected: Vec<f64> = run_segmented(
                partition(SAMPLES, TARGETS),
                PidController::new(labeled.gains, UNIT_DT),
            )
            .collect();
            assert_eq!(labeled.values, expected);
        }
    }

    #[test]
    fn test_sweep_is_lazy_and_exact_size() {
        let space = make_gain_space();
        let mut runs = Sweep::new(&space, UNIT_DT, SAMPLES, TARGETS);
        assert_eq!(runs.len(), 12);
        let first = runs.next().unwrap();
        assert_eq!(first.gains.as_tuple(), (0.5, 0.0, 0.0));
        assert_eq!(runs.len(), 11);
        assert_eq!(runs.by_ref().count(), 11);
        assert!(runs.next().is_none());
    }

    #[test]
    fn test_empty_space() {
        let space = GainSpace::<f64>::default();
        assert!(sweep(&space, UNIT_DT, SAMPLES, TARGETS).is_empty());
    }
}
