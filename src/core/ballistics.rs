use std::f64::consts::PI;

use crate::core::error::DomainError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gravity(f64);

impl Gravity {
    pub const EARTH: Gravity = Gravity(9.81);

    pub fn new(mps2: f64) -> Result<Self, DomainError> {
        if !mps2.is_finite() || mps2 <= 0.0 {
            return Err(DomainError::NonPositiveGravity(mps2));
        }
        Ok(Gravity(mps2))
    }

    pub fn mps2(self) -> f64 {
        self.0
    }
}

/// Launch angle in degrees that lands a ball `distance_m` away when thrown at `speed_mps`.
///
/// Solves the flat-ground range equation `d = v^2 sin(2θ) / g` for θ and always
/// returns the low-trajectory branch, so the result lies in [-45°, 45°]. A negative
/// distance (target behind the launch point) gives a negative angle.
pub fn launch_angle_deg(
    distance_m: f64,
    speed_mps: f64,
    gravity: Gravity,
) -> Result<f64, DomainError> {
    if !speed_mps.is_finite() || speed_mps <= 0.0 {
        return Err(DomainError::NonPositiveSpeed(speed_mps));
    }
    if !distance_m.is_finite() {
        return Err(DomainError::NonFiniteDistance(distance_m));
    }

    let argument = distance_m * gravity.mps2() / (speed_mps * speed_mps);
    if argument.abs() > 1.0 {
        return Err(DomainError::Unreachable {
            distance_m,
            speed_mps,
            argument,
        });
    }

    let half_angle = argument.asin() / 2.0;
    Ok(half_angle * 180.0 / PI)
}

pub fn peak_height_m(speed_mps: f64, angle_deg: f64, gravity: Gravity) -> f64 {
    let vy = speed_mps * (angle_deg * PI / 180.0).sin();
    (vy * vy) / (2.0 * gravity.mps2())
}

pub fn velocity_components(speed_mps: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (speed_mps * theta.cos(), speed_mps * theta.sin())
}

pub fn position_at_time(
    speed_mps: f64,
    angle_deg: f64,
    gravity: Gravity,
    time_s: f64,
) -> (f64, f64) {
    let (vx, vy) = velocity_components(speed_mps, angle_deg);
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * gravity.mps2() * time_s * time_s);
    (x, y)
}

pub fn flight_time_s(speed_mps: f64, angle_deg: f64, gravity: Gravity) -> f64 {
    let (_, vy) = velocity_components(speed_mps, angle_deg);
    (2.0 * vy / gravity.mps2()).max(0.0)
}

pub fn sample_arc(
    speed_mps: f64,
    angle_deg: f64,
    gravity: Gravity,
    samples: usize,
) -> Vec<(f64, f64)> {
    let sample_count = samples.max(2);
    let time_of_flight_s = flight_time_s(speed_mps, angle_deg, gravity);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * time_of_flight_s) / sample_count as f64;
            let (x, y) = position_at_time(speed_mps, angle_deg, gravity, t);
            (x, y.max(0.0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn solves_low_trajectory_angle() {
        let angle = launch_angle_deg(10.0, 15.0, Gravity::EARTH).expect("target is reachable");
        assert_close(angle, 12.9245, 0.001);
    }

    #[test]
    fn angles_stay_within_low_branch() {
        let cases = [(0.0, 1.0), (5.0, 7.1), (10.0, 9.91), (-4.0, 8.0), (50.0, 40.0)];
        for &(distance, speed) in &cases {
            let angle =
                launch_angle_deg(distance, speed, Gravity::EARTH).expect("target is reachable");
            assert!((-45.0..=45.0).contains(&angle), "angle={angle}");
            assert!(peak_height_m(speed, angle, Gravity::EARTH) >= 0.0);
        }
    }

    #[test]
    fn zero_distance_is_a_flat_throw() {
        let angle = launch_angle_deg(0.0, 12.0, Gravity::EARTH).expect("target is reachable");
        assert_eq!(angle, 0.0);
        assert_eq!(peak_height_m(12.0, angle, Gravity::EARTH), 0.0);
    }

    #[test]
    fn angle_grows_with_distance() {
        let speed = 15.0;
        let near = launch_angle_deg(9.5, speed, Gravity::EARTH).expect("near edge");
        let middle = launch_angle_deg(10.0, speed, Gravity::EARTH).expect("middle");
        let far = launch_angle_deg(10.5, speed, Gravity::EARTH).expect("far edge");
        assert!(near <= middle && middle <= far, "{near} {middle} {far}");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = launch_angle_deg(7.3, 11.2, Gravity::EARTH).expect("reachable");
        let second = launch_angle_deg(7.3, 11.2, Gravity::EARTH).expect("reachable");
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(
            peak_height_m(11.2, first, Gravity::EARTH).to_bits(),
            peak_height_m(11.2, second, Gravity::EARTH).to_bits()
        );
    }

    #[test]
    fn range_limit_is_forty_five_degrees() {
        let gravity = Gravity::new(10.0).expect("valid gravity");
        let angle = launch_angle_deg(10.0, 10.0, gravity).expect("exactly at the range limit");
        assert_close(angle, 45.0, 1e-12);
    }

    #[test]
    fn rejects_unreachable_target() {
        let err =
            launch_angle_deg(1000.0, 1.0, Gravity::EARTH).expect_err("target is out of range");
        match err {
            DomainError::Unreachable { argument, .. } => assert_close(argument, 9810.0, 1e-9),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_and_negative_speed() {
        assert_eq!(
            launch_angle_deg(10.0, 0.0, Gravity::EARTH),
            Err(DomainError::NonPositiveSpeed(0.0))
        );
        assert!(launch_angle_deg(10.0, -3.0, Gravity::EARTH).is_err());
        assert!(launch_angle_deg(10.0, f64::NAN, Gravity::EARTH).is_err());
    }

    #[test]
    fn rejects_non_finite_distance() {
        assert!(matches!(
            launch_angle_deg(f64::INFINITY, 10.0, Gravity::EARTH),
            Err(DomainError::NonFiniteDistance(_))
        ));
    }

    #[test]
    fn rejects_bad_gravity() {
        assert!(Gravity::new(0.0).is_err());
        assert!(Gravity::new(-9.81).is_err());
        assert!(Gravity::new(f64::NAN).is_err());
    }

    #[test]
    fn peak_height_at_known_angle() {
        // (10 * sin 30°)^2 / (2 * 9.81) = 25 / 19.62
        assert_close(peak_height_m(10.0, 30.0, Gravity::EARTH), 1.27421, 1e-4);
        assert_close(peak_height_m(10.0, -30.0, Gravity::EARTH), 1.27421, 1e-4);
    }

    #[test]
    fn sampled_arc_lands_on_target() {
        let angle = launch_angle_deg(10.0, 15.0, Gravity::EARTH).expect("reachable");
        let points = sample_arc(15.0, angle, Gravity::EARTH, 64);
        assert_eq!(points.len(), 65);
        let (first_x, first_y) = points[0];
        let (last_x, last_y) = points[points.len() - 1];
        assert_close(first_x, 0.0, 1e-12);
        assert_close(first_y, 0.0, 1e-12);
        assert_close(last_x, 10.0, 1e-6);
        assert_close(last_y, 0.0, 1e-6);

        let apex = points.iter().fold(0.0f64, |acc, p| acc.max(p.1));
        assert_close(apex, peak_height_m(15.0, angle, Gravity::EARTH), 1e-3);
    }
}
