use macroquad::prelude::*;

use launch_tuner::core::ballistics::{Gravity, sample_arc};

use crate::constants::{
    ARC_SAMPLES, CEILING_COLOR, LABEL_COLOR, TARGET_COLOR, X_GRID_LINES, Y_GRID_LINES,
};

#[derive(Clone, Copy)]
pub(crate) struct Plot {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) world_max_x: f32,
    pub(crate) world_max_y: f32,
}

impl Plot {
    pub(crate) fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let x = self.left + (world.x / self.world_max_x.max(1.0)) * plot_w;
        let y = self.bottom - (world.y / self.world_max_y.max(1.0)) * plot_h;
        vec2(x, y)
    }
}

fn format_axis_value(value: f32, axis_max: f32) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_grid(plot: &Plot, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = plot.left + t * (plot.right - plot.left);
        draw_line(x, plot.top, x, plot.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = plot.bottom - t * (plot.bottom - plot.top);
        draw_line(plot.left, y, plot.right, y, 1.0, color);
    }
    draw_line(plot.left, plot.bottom, plot.right, plot.bottom, 2.0, DARKGRAY);
    draw_line(plot.left, plot.top, plot.left, plot.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(plot: &Plot) {
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = plot.left + t * (plot.right - plot.left);
        let label = format_axis_value(t * plot.world_max_x, plot.world_max_x);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_text(
            &label,
            x - (size.width * 0.5),
            plot.bottom + 22.0,
            tick_font_size as f32,
            LABEL_COLOR,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = plot.bottom - t * (plot.bottom - plot.top);
        let label = format_axis_value(t * plot.world_max_y, plot.world_max_y);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_text(
            &label,
            (plot.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size as f32,
            LABEL_COLOR,
        );
    }

    draw_text("Distance (m)", plot.right - 130.0, plot.bottom + 48.0, 18.0, LABEL_COLOR);
    draw_text("Height (m)", plot.left + 10.0, plot.top - 8.0, 18.0, LABEL_COLOR);
}

pub(crate) fn draw_ceiling(plot: &Plot, ceiling_m: f64) {
    let start = plot.world_to_screen(vec2(0.0, ceiling_m as f32));
    draw_line(start.x, start.y, plot.right, start.y, 3.0, CEILING_COLOR);
    draw_text(
        &format!("ceiling {ceiling_m:.2} m"),
        plot.right - 150.0,
        start.y - 8.0,
        18.0,
        CEILING_COLOR,
    );
}

pub(crate) fn draw_target(plot: &Plot, distance_m: f64, width_m: f64) {
    let half = (width_m / 2.0) as f32;
    let near = plot.world_to_screen(vec2((distance_m as f32 - half).max(0.0), 0.0));
    let far = plot.world_to_screen(vec2(distance_m as f32 + half, 0.0));
    draw_rectangle(near.x, near.y - 6.0, (far.x - near.x).max(3.0), 12.0, TARGET_COLOR);
}

pub(crate) fn draw_trajectory(
    plot: &Plot,
    speed_mps: f64,
    angle_deg: f64,
    gravity: Gravity,
    thickness: f32,
    color: Color,
) {
    let points = sample_arc(speed_mps, angle_deg, gravity, ARC_SAMPLES);
    for pair in points.windows(2) {
        let a = plot.world_to_screen(vec2(pair[0].0 as f32, pair[0].1 as f32));
        let b = plot.world_to_screen(vec2(pair[1].0 as f32, pair[1].1 as f32));
        draw_line(a.x, a.y, b.x, b.y, thickness, color);
    }
}
