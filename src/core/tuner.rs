use tracing::{debug, warn};

use crate::core::ballistics::{Gravity, launch_angle_deg, peak_height_m};
use crate::core::error::LaunchError;

pub const SPEED_STEP_MPS: f64 = 0.1;

/// Upper bound on trials per search (+10 000 m/s over the starting speed).
///
/// Peak height at a fixed distance only approaches zero as speed grows, so a
/// zero ceiling or a zero distance would otherwise never satisfy `height < ceiling`.
pub const MAX_TUNING_TRIALS: usize = 100_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedTrial {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub height_m: f64,
}

/// Lazy fixed-step search for a launch speed whose peak height clears the ceiling.
///
/// Yields one trial per 0.1 m/s step and stops after the first trial strictly
/// below the ceiling. A solver error is yielded once and ends the sequence.
#[derive(Debug)]
pub struct SpeedTrials {
    initial_speed_mps: f64,
    distance_m: f64,
    ceiling_m: f64,
    gravity: Gravity,
    step: usize,
    max_trials: usize,
    done: bool,
}

pub fn tune_speed(
    initial_speed_mps: f64,
    distance_m: f64,
    ceiling_m: f64,
    gravity: Gravity,
) -> SpeedTrials {
    SpeedTrials {
        initial_speed_mps,
        distance_m,
        ceiling_m,
        gravity,
        step: 0,
        max_trials: MAX_TUNING_TRIALS,
        done: false,
    }
}

impl SpeedTrials {
    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    pub fn trials_so_far(&self) -> usize {
        self.step
    }

    pub fn settle(self) -> Result<Vec<SpeedTrial>, LaunchError> {
        self.collect()
    }

    fn next_trial(&mut self) -> Result<SpeedTrial, LaunchError> {
        if self.step >= self.max_trials {
            let speed_mps = self.speed_at(self.step);
            warn!(
                trials = self.step,
                speed_mps, "speed tuning hit its trial limit before clearing the ceiling"
            );
            return Err(LaunchError::TuningLimit {
                trials: self.step,
                speed_mps,
            });
        }

        self.step += 1;
        let speed_mps = self.speed_at(self.step);
        let angle_deg = launch_angle_deg(self.distance_m, speed_mps, self.gravity)?;
        let height_m = peak_height_m(speed_mps, angle_deg, self.gravity);
        debug!(step = self.step, speed_mps, angle_deg, height_m, "speed trial");

        Ok(SpeedTrial {
            speed_mps,
            angle_deg,
            height_m,
        })
    }

    fn speed_at(&self, step: usize) -> f64 {
        self.initial_speed_mps + (step as f64 * SPEED_STEP_MPS)
    }
}

impl Iterator for SpeedTrials {
    type Item = Result<SpeedTrial, LaunchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let trial = self.next_trial();
        match &trial {
            Ok(t) if t.height_m < self.ceiling_m => self.done = true,
            Ok(_) => {}
            Err(_) => self.done = true,
        }
        Some(trial)
    }
}

impl std::iter::FusedIterator for SpeedTrials {}
