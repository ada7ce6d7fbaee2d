use plotters::prelude::*;

use crate::core::ballistics::sample_arc;
use crate::core::error::PlotError;
use crate::core::report::LaunchSolution;
use crate::core::tuner::SpeedTrial;
use crate::core::window::AxisWindow;

const CHART_SIZE: (u32, u32) = (960, 540);
const ARC_SAMPLES: usize = 160;

fn render_error<E: std::fmt::Debug>(err: E) -> PlotError {
    PlotError::Render(format!("{err:?}"))
}

pub fn render_svg(
    solution: &LaunchSolution,
    tuned: Option<&SpeedTrial>,
) -> Result<String, PlotError> {
    let scenario = solution.scenario;
    let gravity = solution.gravity;
    let window = AxisWindow::fit(solution, tuned.map(|t| t.height_m));
    let half_width = scenario.target_width_m / 2.0;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .caption("Launch solution", ("sans-serif", 24))
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .set_label_area_size(LabelAreaPosition::Left, 50)
            .build_cartesian_2d(0f64..window.max_x, 0f64..window.max_y)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc("Distance (m)")
            .y_desc("Height (m)")
            .light_line_style(&BLACK.mix(0.05))
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [
                    ((scenario.distance_m - half_width).max(0.0), 0.0),
                    (scenario.distance_m + half_width, window.max_y * 0.015),
                ],
                GREEN.mix(0.6).filled(),
            )))
            .map_err(render_error)?
            .label("Target")
            .legend(|(x, y)| {
                Rectangle::new([(x, y - 4), (x + 20, y + 4)], GREEN.mix(0.6).filled())
            });

        chart
            .draw_series(LineSeries::new(
                [(0.0, scenario.ceiling_m), (window.max_x, scenario.ceiling_m)],
                RED.stroke_width(2),
            ))
            .map_err(render_error)?
            .label("Ceiling")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

        let speed = scenario.speed_mps;
        for angle in solution.edge_angles() {
            chart
                .draw_series(LineSeries::new(
                    sample_arc(speed, angle, gravity, ARC_SAMPLES),
                    BLUE.mix(0.3).stroke_width(1),
                ))
                .map_err(render_error)?;
        }

        chart
            .draw_series(LineSeries::new(
                sample_arc(speed, solution.optimal_angle_deg, gravity, ARC_SAMPLES),
                BLUE.stroke_width(2),
            ))
            .map_err(render_error)?
            .label(format!("{:.3}° at {:.1} m/s", solution.optimal_angle_deg, speed))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        if let Some(trial) = tuned {
            chart
                .draw_series(LineSeries::new(
                    sample_arc(trial.speed_mps, trial.angle_deg, gravity, ARC_SAMPLES),
                    MAGENTA.stroke_width(2),
                ))
                .map_err(render_error)?
                .label(format!(
                    "{:.3}° at {:.1} m/s (tuned)",
                    trial.angle_deg, trial.speed_mps
                ))
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &MAGENTA));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
    }

    Ok(svg)
}
