//! Renders the step responses of a sweep of PID gains to a PNG
//! This example requires the `--features cli` flag to be enabled.
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

#[cfg(feature = "cli")]
mod cli {
    use std::path::PathBuf;

    use clap::Parser;
    use plotters::prelude::*;
    use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};

    use simpid::config::{parse_values, ConfigError, SimulationConfig};
    use simpid::sim::InitialCondition;
    use simpid::sweep::{GainSpace, LabeledTrajectory};

    /// Simulate a discrete PID controller for every combination of the given gains
    #[derive(Parser, Debug)]
    #[command(name = "simpid", version)]
    struct Args {
        /// Comma-separated kp values
        #[arg(long = "p")]
        p: String,

        /// Comma-separated ki values
        #[arg(long = "i")]
        i: String,

        /// Comma-separated kd values
        #[arg(long = "d")]
        d: String,

        /// Comma-separated targets
        #[arg(long = "k", default_value = "1")]
        k: String,

        /// The timestep/sampling interval
        #[arg(long = "dt", default_value_t = 1.0)]
        dt: f64,

        /// Max simulation time
        #[arg(long = "T", default_value_t = 100.0)]
        total_time: f64,

        /// Restart the process value from zero at every target change
        #[arg(long)]
        reset_per_target: bool,

        /// Output image
        filename: PathBuf,
    }

    impl Args {
        fn into_config(self) -> Result<(SimulationConfig<f64>, PathBuf), ConfigError> {
            let config = SimulationConfig {
                gains: GainSpace::new(
                    parse_values(&self.p)?,
                    parse_values(&self.i)?,
                    parse_values(&self.d)?,
                ),
                targets: parse_values(&self.k)?,
                dt: self.dt,
                total_time: self.total_time,
                initial_condition: if self.reset_per_target {
                    InitialCondition::PerSegment
                } else {
                    InitialCondition::Once
                },
            };
            config.validate()?;
            Ok((config, self.filename))
        }
    }

    fn y_bounds<'a>(series: impl Iterator<Item = &'a f64>) -> (f64, f64) {
        let (lo, hi) = series
            .filter(|v| v.is_finite())
            .fold((0.0f64, 0.0f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let pad = ((hi - lo) * 0.05).max(0.1);
        (lo - pad, hi + pad)
    }

    const LEGEND_WIDTH: i32 = 200;
    const LEGEND_ROW_HEIGHT: i32 = 18;

    /// Lists the runs outside the plot, vertically centered against its right edge
    fn draw_legend<DB: DrawingBackend>(
        area: &DrawingArea<DB, plotters::coord::Shift>,
        runs: &[LabeledTrajectory<f64>],
        colors: &[RGBColor],
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let (_, height) = area.dim_in_pixel();
        let top = (height as i32 - LEGEND_ROW_HEIGHT * runs.len() as i32) / 2;
        for (row, (run, &color)) in runs.iter().zip(colors).enumerate() {
            let y = top + LEGEND_ROW_HEIGHT * row as i32 + LEGEND_ROW_HEIGHT / 2;
            area.draw(&PathElement::new(vec![(8, y), (30, y)], color.stroke_width(2)))?;
            area.draw(&Text::new(
                run.label.as_str(),
                (36, y - 7),
                ("sans-serif", 14),
            ))?;
        }
        Ok(())
    }

    pub fn main() -> Result<(), Box<dyn std::error::Error>> {
        env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        let (config, filename) = Args::parse().into_config()?;

        let x: Vec<f64> = config.time_axis().collect();
        let reference = config.reference();
        let runs: Vec<_> = config.runner().collect();
        log::info!(
            "simulated {} gain triples over {} samples",
            runs.len(),
            x.len()
        );

        let (y_min, y_max) = y_bounds(
            reference
                .iter()
                .chain(runs.iter().flat_map(|run| run.values.iter())),
        );

        let root = BitMapBackend::new(&filename, (1024, 640)).into_drawing_area();
        root.fill(&WHITE)?;
        let (plot_area, legend_area) = root.split_horizontally(1024 - LEGEND_WIDTH);

        let mut chart = ChartBuilder::on(&plot_area)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..config.total_time, y_min..y_max)?;
        chart.configure_mesh().x_desc("t").draw()?;

        chart.draw_series(LineSeries::new(
            x.iter().copied().zip(reference.iter().copied()),
            &BLACK,
        ))?;

        // Runs sample viridis evenly, in sweep order
        let last = runs.len().saturating_sub(1).max(1) as f64;
        let colors: Vec<RGBColor> = (0..runs.len())
            .map(|i| ViridisRGB.get_color(i as f64 / last))
            .collect();
        for (run, &color) in runs.iter().zip(&colors) {
            chart.draw_series(LineSeries::new(
                x.iter()
                    .copied()
                    .zip(run.values.iter().copied())
                    .filter(|(_, v)| v.is_finite()),
                color.stroke_width(2),
            ))?;
        }

        draw_legend(&legend_area, &runs, &colors)?;

        root.present()?;
        log::info!("wrote {}", filename.display());
        Ok(())
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires `--features cli` to run.");
}
