use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;

pub const LEFT_MARGIN: f32 = 90.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 170.0;
pub const BOTTOM_MARGIN: f32 = 80.0;

pub const TITLE_Y: f32 = 40.0;
pub const ARC_SAMPLES: usize = 240;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const DISTANCE_STEP_M: f64 = 0.5;
pub const SPEED_STEP_MPS: f64 = 0.5;
pub const CEILING_STEP_M: f64 = 0.25;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.443, 0.486, 1.0);
pub const OPTIMAL_ARC_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const EDGE_ARC_COLOR: Color = Color::new(0.30, 0.55, 0.96, 0.35);
pub const TUNED_ARC_COLOR: Color = Color::new(0.75, 0.20, 0.70, 1.0);
pub const CEILING_COLOR: Color = Color::new(0.85, 0.18, 0.18, 1.0);
pub const TARGET_COLOR: Color = Color::new(0.18, 0.65, 0.30, 0.8);
