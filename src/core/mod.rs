pub mod ballistics;
pub mod error;
pub mod input;
pub mod logging;
pub mod plot;
pub mod report;
pub mod tuner;
pub mod window;
