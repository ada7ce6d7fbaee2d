use std::io;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("speed must be a positive finite number, got {0} m/s")]
    NonPositiveSpeed(f64),
    #[error("distance must be a finite number, got {0} m")]
    NonFiniteDistance(f64),
    #[error("gravity must be a positive finite number, got {0} m/s^2")]
    NonPositiveGravity(f64),
    #[error("target at {distance_m} m is unreachable at {speed_mps} m/s (asin arg {argument})")]
    Unreachable {
        distance_m: f64,
        speed_mps: f64,
        argument: f64,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{0} is negative")]
    Negative(f64),
    #[error("{0} is not a finite number")]
    NotFinite(f64),
    #[error("input ended unexpectedly (EOF)")]
    UnexpectedEof,
    #[error("console io error")]
    Io(#[from] io::Error),
}

impl InputError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InputError::NotANumber(_) | InputError::Negative(_) | InputError::NotFinite(_)
        )
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error("chart rendering failed. `{0}`")]
    Render(String),
}

#[derive(thiserror::Error, Debug)]
pub enum LaunchError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("plot error: {0}")]
    Plot(#[from] PlotError),
    #[error("speed tuning gave up after {trials} trials at {speed_mps:.1} m/s")]
    TuningLimit { trials: usize, speed_mps: f64 },
    #[error("{0}")]
    Usage(String),
    #[error("io error")]
    Io(#[from] io::Error),
}
