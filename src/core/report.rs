use std::fmt;

use tracing::{debug, warn};

use crate::core::ballistics::{Gravity, launch_angle_deg, peak_height_m};
use crate::core::error::DomainError;
use crate::core::tuner::{SpeedTrial, SpeedTrials, tune_speed};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchScenario {
    pub distance_m: f64,
    pub target_width_m: f64,
    pub speed_mps: f64,
    pub ceiling_m: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchSolution {
    pub scenario: LaunchScenario,
    pub gravity: Gravity,
    pub optimal_angle_deg: f64,
    pub min_angle_deg: Result<f64, DomainError>,
    pub max_angle_deg: Result<f64, DomainError>,
    pub peak_height_m: f64,
    pub hits_ceiling: bool,
}

impl LaunchSolution {
    /// Only the target-centre angle is required; an out-of-reach edge is kept
    /// as its own error and the rest of the solution is still computed.
    pub fn solve(scenario: LaunchScenario, gravity: Gravity) -> Result<Self, DomainError> {
        let speed = scenario.speed_mps;
        let half_width = scenario.target_width_m / 2.0;
        let optimal_angle_deg = launch_angle_deg(scenario.distance_m, speed, gravity)?;
        let min_angle_deg = launch_angle_deg(scenario.distance_m - half_width, speed, gravity);
        let max_angle_deg = launch_angle_deg(scenario.distance_m + half_width, speed, gravity);
        let peak_height_m = peak_height_m(speed, optimal_angle_deg, gravity);
        let hits_ceiling = peak_height_m > scenario.ceiling_m;

        for edge in [&min_angle_deg, &max_angle_deg] {
            if let Err(err) = edge {
                warn!(%err, "target edge is out of reach");
            }
        }
        debug!(
            optimal_angle_deg,
            ?min_angle_deg,
            ?max_angle_deg,
            peak_height_m,
            hits_ceiling,
            "solved launch"
        );

        Ok(LaunchSolution {
            scenario,
            gravity,
            optimal_angle_deg,
            min_angle_deg,
            max_angle_deg,
            peak_height_m,
            hits_ceiling,
        })
    }

    pub fn edge_angles(&self) -> impl Iterator<Item = f64> {
        [self.min_angle_deg, self.max_angle_deg]
            .into_iter()
            .filter_map(Result::ok)
    }

    pub fn tuning(&self) -> Option<SpeedTrials> {
        if !self.hits_ceiling {
            return None;
        }
        Some(tune_speed(
            self.scenario.speed_mps,
            self.scenario.distance_m,
            self.scenario.ceiling_m,
            self.gravity,
        ))
    }
}

pub fn format_edge_angle(angle: &Result<f64, DomainError>) -> String {
    match angle {
        Ok(angle) => format!("{angle:.3}"),
        Err(_) => "unreachable".to_string(),
    }
}

impl fmt::Display for LaunchSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Optimal Angle    {:.3}", self.optimal_angle_deg)?;
        writeln!(f)?;
        writeln!(
            f,
            "Range of acceptable angles is from {} to {}",
            format_edge_angle(&self.min_angle_deg),
            format_edge_angle(&self.max_angle_deg)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "The maximum height of the ball is {:.3} meters",
            self.peak_height_m
        )?;
        write!(f, "Will the ball hit the ceiling?  {}", self.hits_ceiling)
    }
}

impl fmt::Display for SpeedTrial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trying v0 {:.1} m/s, theta {:.3}. Max height   {:.3} meters",
            self.speed_mps, self.angle_deg, self.height_m
        )
    }
}
