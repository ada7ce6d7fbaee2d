use macroquad::prelude::*;

use launch_tuner::core::logging::init_logging;
use launch_tuner::core::report::format_edge_angle;
use launch_tuner::core::window::AxisWindow;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, CEILING_STEP_M, DISTANCE_STEP_M, EDGE_ARC_COLOR, GRID_COLOR,
    INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES, OPTIMAL_ARC_COLOR,
    RIGHT_MARGIN, SPEED_STEP_MPS, TITLE_Y, TOP_MARGIN, TUNED_ARC_COLOR,
};
use crate::render::{
    Plot, draw_axis_tick_labels, draw_ceiling, draw_grid, draw_target, draw_trajectory,
};
use crate::state::{DEFAULT_SCENARIO, SolvedView, ViewerState, scenario_from_args};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Launch Tuner Viewer".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn apply_hotkeys(state: &mut ViewerState) {
    let mut distance = 0.0;
    let mut speed = 0.0;
    let mut ceiling = 0.0;

    if is_key_pressed(KeyCode::Right) {
        distance += DISTANCE_STEP_M;
    }
    if is_key_pressed(KeyCode::Left) {
        distance -= DISTANCE_STEP_M;
    }
    if is_key_pressed(KeyCode::Up) {
        speed += SPEED_STEP_MPS;
    }
    if is_key_pressed(KeyCode::Down) {
        speed -= SPEED_STEP_MPS;
    }
    if is_key_pressed(KeyCode::W) {
        ceiling += CEILING_STEP_M;
    }
    if is_key_pressed(KeyCode::S) {
        ceiling -= CEILING_STEP_M;
    }

    if is_key_pressed(KeyCode::R) {
        state.reset();
    } else if distance != 0.0 || speed != 0.0 || ceiling != 0.0 {
        state.adjust(distance, speed, ceiling);
    }
}

fn draw_hud(state: &ViewerState) {
    let header = Color::from_rgba(30, 30, 35, 255);
    let scenario = state.scenario;
    draw_text("Launch Tuner", LEFT_MARGIN, TITLE_Y, 30.0, header);
    draw_text(
        &format!(
            "distance {:.2} m | target {:.2} m | speed {:.2} m/s | ceiling {:.2} m",
            scenario.distance_m, scenario.target_width_m, scenario.speed_mps, scenario.ceiling_m
        ),
        LEFT_MARGIN,
        TITLE_Y + 30.0,
        20.0,
        header,
    );

    let detail = match &state.view {
        Ok(view) => format!(
            "optimal {:.3} deg | range {} to {} deg | max height {:.3} m",
            view.solution.optimal_angle_deg,
            format_edge_angle(&view.solution.min_angle_deg),
            format_edge_angle(&view.solution.max_angle_deg),
            view.solution.peak_height_m
        ),
        Err(_) => String::new(),
    };
    draw_text(&detail, LEFT_MARGIN, TITLE_Y + 58.0, 20.0, header);
    draw_text(&state.status_line(), LEFT_MARGIN, TITLE_Y + 86.0, 20.0, header);
    draw_text(
        "Left/Right distance | Up/Down speed | W/S ceiling | R reset",
        LEFT_MARGIN,
        screen_height() - 20.0,
        18.0,
        DARKGRAY,
    );
}

fn draw_solution(plot: &Plot, view: &SolvedView) {
    let solution = &view.solution;
    let speed = solution.scenario.speed_mps;
    let gravity = solution.gravity;
    for angle in solution.edge_angles() {
        draw_trajectory(plot, speed, angle, gravity, 1.5, EDGE_ARC_COLOR);
    }
    let optimal = solution.optimal_angle_deg;
    draw_trajectory(plot, speed, optimal, gravity, 3.0, OPTIMAL_ARC_COLOR);
    if let Some(trial) = view.tuned() {
        let (speed, angle) = (trial.speed_mps, trial.angle_deg);
        draw_trajectory(plot, speed, angle, gravity, 3.0, TUNED_ARC_COLOR);
    }
}

pub(crate) async fn run() {
    let args: Vec<String> = std::env::args().collect();
    init_logging(args.iter().any(|a| a == "--verbose"));

    let scenario = match scenario_from_args(&args) {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("{err} Falling back to the default scenario.");
            DEFAULT_SCENARIO
        }
    };
    let mut state = ViewerState::new(scenario);

    loop {
        apply_hotkeys(&mut state);

        let window = match &state.view {
            Ok(view) => AxisWindow::fit(&view.solution, view.tuned().map(|t| t.height_m)),
            Err(_) => AxisWindow::fixed_ratio(
                state.scenario.distance_m + state.scenario.target_width_m / 2.0,
                state.scenario.ceiling_m,
            ),
        };
        let (world_max_x, world_max_y) = window.to_f32();
        let plot = Plot {
            left: LEFT_MARGIN,
            right: screen_width() - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_height() - BOTTOM_MARGIN,
            world_max_x,
            world_max_y,
        };

        clear_background(BACKGROUND);
        draw_grid(&plot, GRID_COLOR);
        draw_axis_tick_labels(&plot);
        draw_target(&plot, state.scenario.distance_m, state.scenario.target_width_m);
        draw_ceiling(&plot, state.scenario.ceiling_m);
        if let Ok(view) = &state.view {
            draw_solution(&plot, view);
        }
        draw_hud(&state);

        next_frame().await;
    }
}
