use crate::core::report::LaunchSolution;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub max_x: f64,
    pub max_y: f64,
}

impl AxisWindow {
    pub fn fixed_ratio(raw_max_x: f64, raw_max_y: f64) -> Self {
        let x_pad = raw_max_x.max(1.0) * X_PADDING_RATIO;
        let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;

        let mut max_x = (raw_max_x + x_pad).max(1.0);
        let mut max_y = (raw_max_y + y_pad).max(1.0);

        if max_x / max_y < DISTANCE_TO_HEIGHT_RATIO {
            max_x = max_y * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            max_y = max_x / DISTANCE_TO_HEIGHT_RATIO;
        }

        AxisWindow { max_x, max_y }
    }

    pub fn fit(solution: &LaunchSolution, extra_peak_m: Option<f64>) -> Self {
        let scenario = solution.scenario;
        let raw_max_x = scenario.distance_m + (scenario.target_width_m / 2.0);
        let raw_max_y = solution
            .peak_height_m
            .max(scenario.ceiling_m)
            .max(extra_peak_m.unwrap_or(0.0));
        Self::fixed_ratio(raw_max_x, raw_max_y)
    }

    pub fn to_f32(self) -> (f32, f32) {
        (self.max_x as f32, self.max_y as f32)
    }
}
