use std::env;
use std::io::{self, Write};

use launch_tuner::core::ballistics::Gravity;
use launch_tuner::core::error::LaunchError;
use launch_tuner::core::input::{parse_non_negative, read_non_negative};
use launch_tuner::core::logging::init_logging;
use launch_tuner::core::plot::render_svg;
use launch_tuner::core::report::{LaunchScenario, LaunchSolution};
use tracing::debug;

#[derive(Debug, Default, PartialEq)]
struct Options {
    help: bool,
    verbose: bool,
    svg: bool,
    positional: Vec<String>,
}

fn parse_options(args: &[String]) -> Options {
    let mut options = Options::default();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-v" | "--verbose" => options.verbose = true,
            "--svg" => options.svg = true,
            _ => options.positional.push(arg.clone()),
        }
    }
    options
}

fn parse_arg(value: &str, label: &str) -> Result<f64, LaunchError> {
    parse_non_negative(value).map_err(|e| LaunchError::Usage(format!("Invalid {label}: {e}.")))
}

fn scenario_from_args(positional: &[String]) -> Result<LaunchScenario, LaunchError> {
    if positional.len() != 4 {
        return Err(LaunchError::Usage(
            "Expected exactly 4 arguments: <distance_m> <target_width_m> <speed_mps> <ceiling_m>."
                .to_string(),
        ));
    }

    Ok(LaunchScenario {
        distance_m: parse_arg(&positional[0], "distance")?,
        target_width_m: parse_arg(&positional[1], "target width")?,
        speed_mps: parse_arg(&positional[2], "speed")?,
        ceiling_m: parse_arg(&positional[3], "ceiling height")?,
    })
}

fn scenario_from_user() -> Result<LaunchScenario, LaunchError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();

    let mut ask = |prompt: &str| read_non_negative(&mut reader, &mut out, prompt);
    Ok(LaunchScenario {
        distance_m: ask("Please enter a value for horizontal distance (in meters):")?,
        target_width_m: ask("Please enter a value for target width (in meters):")?,
        speed_mps: ask("Please enter a value for initial ball speed (in m/s):")?,
        ceiling_m: ask("Please enter a value for ceiling height (in meters):")?,
    })
}

fn print_report<W: Write>(out: &mut W, solution: &LaunchSolution) -> Result<(), LaunchError> {
    writeln!(out, "{solution}")?;
    if let Some(trials) = solution.tuning() {
        for trial in trials {
            writeln!(out, "{}", trial?)?;
        }
    }
    Ok(())
}

fn print_svg(solution: &LaunchSolution) -> Result<(), LaunchError> {
    let trials = match solution.tuning() {
        Some(search) => search.settle()?,
        None => Vec::new(),
    };
    let svg = render_svg(solution, trials.last())?;
    println!("{svg}");
    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} [--svg] [--verbose]");
    println!(
        "  {program} [--svg] [--verbose] <distance_m> <target_width_m> <speed_mps> <ceiling_m>"
    );
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 10 1 15 2");
    println!("  {program} --svg 10 1 10.5 1.2 > launch.svg");
}

fn run() -> Result<(), LaunchError> {
    let args: Vec<String> = env::args().collect();
    let options = parse_options(&args);
    init_logging(options.verbose);

    if options.help {
        print_usage(&args[0]);
        return Ok(());
    }

    let scenario = if options.positional.is_empty() {
        scenario_from_user()?
    } else {
        scenario_from_args(&options.positional)?
    };
    debug!(?scenario, "scenario read");

    let solution = LaunchSolution::solve(scenario, Gravity::EARTH)?;
    if options.svg {
        print_svg(&solution)
    } else {
        print_report(&mut io::stdout().lock(), &solution)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        if matches!(err, LaunchError::Usage(_)) {
            print_usage("cargo run --");
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{LaunchSolution, Options, parse_options, print_report, scenario_from_args};
    use launch_tuner::core::ballistics::Gravity;
    use launch_tuner::core::error::LaunchError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_flags_from_positionals() {
        let options = parse_options(&args(&["launch_tuner", "--svg", "10", "-v", "1", "15", "2"]));
        assert_eq!(
            options,
            Options {
                help: false,
                verbose: true,
                svg: true,
                positional: args(&["10", "1", "15", "2"]),
            }
        );
    }

    #[test]
    fn reads_scenario_from_args() {
        let scenario = scenario_from_args(&args(&["10", "1", "15", "2"])).expect("valid arguments");
        assert_eq!(scenario.distance_m, 10.0);
        assert_eq!(scenario.target_width_m, 1.0);
        assert_eq!(scenario.speed_mps, 15.0);
        assert_eq!(scenario.ceiling_m, 2.0);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let err = scenario_from_args(&args(&["10", "1"])).expect_err("too few arguments");
        assert!(matches!(err, LaunchError::Usage(_)));
    }

    #[test]
    fn rejects_negative_argument() {
        let err = scenario_from_args(&args(&["10", "-1", "15", "2"])).expect_err("negative width");
        assert!(err.to_string().contains("target width"));
    }

    #[test]
    fn prints_report_then_trace() {
        let scenario =
            scenario_from_args(&args(&["10", "1", "10.5", "1.2"])).expect("valid arguments");
        let solution = LaunchSolution::solve(scenario, Gravity::EARTH).expect("reachable");
        let mut out = Vec::new();
        print_report(&mut out, &solution).expect("report writes");

        let text = String::from_utf8(out).expect("utf8 output");
        assert_eq!(
            text,
            "\nOptimal Angle    31.424\n\n\
             Range of acceptable angles is from 28.852 to 34.557\n\n\
             The maximum height of the ball is 1.527 meters\n\
             Will the ball hit the ceiling?  true\n\
             Trying v0 10.6 m/s, theta 30.410. Max height   1.467 meters\n\
             Trying v0 10.7 m/s, theta 29.482. Max height   1.413 meters\n\
             Trying v0 10.8 m/s, theta 28.626. Max height   1.364 meters\n\
             Trying v0 10.9 m/s, theta 27.829. Max height   1.320 meters\n\
             Trying v0 11.0 m/s, theta 27.084. Max height   1.278 meters\n\
             Trying v0 11.1 m/s, theta 26.384. Max height   1.240 meters\n\
             Trying v0 11.2 m/s, theta 25.724. Max height   1.204 meters\n\
             Trying v0 11.3 m/s, theta 25.099. Max height   1.171 meters\n"
        );
    }
}
