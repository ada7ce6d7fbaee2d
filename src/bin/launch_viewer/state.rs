use launch_tuner::core::ballistics::Gravity;
use launch_tuner::core::error::LaunchError;
use launch_tuner::core::input::parse_non_negative;
use launch_tuner::core::report::{LaunchScenario, LaunchSolution};
use launch_tuner::core::tuner::SpeedTrial;

pub(crate) const DEFAULT_SCENARIO: LaunchScenario = LaunchScenario {
    distance_m: 10.0,
    target_width_m: 1.0,
    speed_mps: 10.5,
    ceiling_m: 1.2,
};

pub(crate) struct SolvedView {
    pub(crate) solution: LaunchSolution,
    pub(crate) trials: Vec<SpeedTrial>,
}

impl SolvedView {
    pub(crate) fn tuned(&self) -> Option<&SpeedTrial> {
        self.trials.last()
    }
}

pub(crate) fn solve_view(scenario: LaunchScenario) -> Result<SolvedView, LaunchError> {
    let solution = LaunchSolution::solve(scenario, Gravity::EARTH)?;
    let trials = match solution.tuning() {
        Some(search) => search.settle()?,
        None => Vec::new(),
    };
    Ok(SolvedView { solution, trials })
}

pub(crate) fn scenario_from_args(args: &[String]) -> Result<LaunchScenario, String> {
    let values: Vec<&str> = args
        .iter()
        .skip(1)
        .map(String::as_str)
        .filter(|a| !a.starts_with("--"))
        .collect();
    if values.is_empty() {
        return Ok(DEFAULT_SCENARIO);
    }
    if values.len() != 4 {
        return Err(
            "Expected 0 or 4 arguments: <distance_m> <target_width_m> <speed_mps> <ceiling_m>."
                .to_string(),
        );
    }

    let parse = |value: &str| parse_non_negative(value).map_err(|e| e.to_string());
    Ok(LaunchScenario {
        distance_m: parse(values[0])?,
        target_width_m: parse(values[1])?,
        speed_mps: parse(values[2])?,
        ceiling_m: parse(values[3])?,
    })
}

pub(crate) struct ViewerState {
    pub(crate) initial: LaunchScenario,
    pub(crate) scenario: LaunchScenario,
    pub(crate) view: Result<SolvedView, LaunchError>,
}

impl ViewerState {
    pub(crate) fn new(scenario: LaunchScenario) -> Self {
        Self {
            initial: scenario,
            scenario,
            view: solve_view(scenario),
        }
    }

    pub(crate) fn adjust(&mut self, distance_m: f64, speed_mps: f64, ceiling_m: f64) {
        self.scenario.distance_m = (self.scenario.distance_m + distance_m).max(0.0);
        self.scenario.speed_mps = (self.scenario.speed_mps + speed_mps).max(0.0);
        self.scenario.ceiling_m = (self.scenario.ceiling_m + ceiling_m).max(0.0);
        self.refresh();
    }

    pub(crate) fn reset(&mut self) {
        self.scenario = self.initial;
        self.refresh();
    }

    pub(crate) fn status_line(&self) -> String {
        match &self.view {
            Ok(view) if view.solution.hits_ceiling => match view.tuned() {
                Some(trial) => format!(
                    "Ceiling hit. {} trials, clears at {:.1} m/s",
                    view.trials.len(),
                    trial.speed_mps
                ),
                None => "Ceiling hit".to_string(),
            },
            Ok(_) => "Clears the ceiling".to_string(),
            Err(err) => format!("Error: {err}"),
        }
    }

    fn refresh(&mut self) {
        self.view = solve_view(self.scenario);
        if let Err(err) = &self.view {
            tracing::debug!(%err, scenario = ?self.scenario, "scenario has no solution");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_scenario_needs_tuning() {
        let state = ViewerState::new(DEFAULT_SCENARIO);
        let view = state.view.as_ref().expect("default scenario is solvable");
        assert!(view.solution.hits_ceiling);
        assert_eq!(view.trials.len(), 8);
        assert!(state.status_line().starts_with("Ceiling hit. 8 trials"));
    }

    #[test]
    fn adjust_clamps_and_resolves() {
        let mut state = ViewerState::new(DEFAULT_SCENARIO);
        state.adjust(0.0, -100.0, 0.0);
        assert_eq!(state.scenario.speed_mps, 0.0);
        assert!(state.view.is_err());
        assert!(state.status_line().starts_with("Error:"));

        state.reset();
        assert_eq!(state.scenario, DEFAULT_SCENARIO);
        assert!(state.view.is_ok());
    }

    #[test]
    fn raising_ceiling_removes_tuning() {
        let mut state = ViewerState::new(DEFAULT_SCENARIO);
        state.adjust(0.0, 0.0, 1.0);
        let view = state.view.as_ref().expect("solvable");
        assert!(!view.solution.hits_ceiling);
        assert!(view.trials.is_empty());
        assert_eq!(state.status_line(), "Clears the ceiling");
    }

    #[test]
    fn parses_optional_arguments() {
        assert_eq!(scenario_from_args(&args(&["viewer"])), Ok(DEFAULT_SCENARIO));
        let scenario = scenario_from_args(&args(&["viewer", "12", "2", "20", "3"])).expect("valid");
        assert_eq!(scenario.speed_mps, 20.0);
        assert!(scenario_from_args(&args(&["viewer", "12"])).is_err());
        assert!(scenario_from_args(&args(&["viewer", "12", "2", "x", "3"])).is_err());
    }
}
