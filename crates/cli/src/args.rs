use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

/// How the result is printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Iteration table and summary
    #[default]
    Table,
    /// Full report including plot samples
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "skein",
    about = "Find roots of equations in one variable",
    version,
    after_help = "Examples:\n  \
        skein \"x^2 = 2\" --method bisection --a 1 --b 2\n  \
        skein \"cos(x) - x\" --method newton --x0 1 --tolerance 1e-8\n  \
        skein --request request.toml --format json"
)]
pub struct Args {
    /// Equation in x, either `f(x)` or `lhs = rhs`
    #[arg(value_name = "EQUATION")]
    pub equation: Option<String>,

    /// Root-finding method: bisection, newton or secant
    #[arg(short, long)]
    pub method: Option<String>,

    /// Lower end of the bisection bracket
    #[arg(long, allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Upper end of the bisection bracket
    #[arg(long, allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Initial guess (newton, secant)
    #[arg(long, allow_negative_numbers = true)]
    pub x0: Option<f64>,

    /// Second initial guess (secant)
    #[arg(long, allow_negative_numbers = true)]
    pub x1: Option<f64>,

    /// Convergence tolerance [default: 1e-3]
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Maximum number of iterations [default: 100]
    #[arg(long)]
    pub max_iters: Option<usize>,

    /// Start of the plotted range [default: -10]
    #[arg(long, allow_negative_numbers = true)]
    pub plot_start: Option<f64>,

    /// End of the plotted range [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub plot_end: Option<f64>,

    /// Number of plotted points [default: 201]
    #[arg(long)]
    pub plot_points: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Load the request from a TOML file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Log more (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Log less (repeat to silence)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    /// Log level selected by `-v` / `-q`, starting from warnings.
    pub fn log_level(&self) -> LevelFilter {
        match (self.verbose, self.quiet) {
            (0, 0) => LevelFilter::Warn,
            (1, _) => LevelFilter::Info,
            (2, _) => LevelFilter::Debug,
            (_, 0) => LevelFilter::Trace,
            (_, 1) => LevelFilter::Error,
            _ => LevelFilter::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("skein").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn parses_a_bisection_request() {
        let args = parse(&["x^2 = 2", "--method", "bisection", "--a", "-1", "--b", "2"]);

        assert_eq!(args.equation.as_deref(), Some("x^2 = 2"));
        assert_eq!(args.method.as_deref(), Some("bisection"));
        assert_eq!(args.a, Some(-1.0));
        assert_eq!(args.b, Some(2.0));
        assert_eq!(args.format, Format::Table);
        assert!(args.tolerance.is_none());
    }

    #[test]
    fn parses_solver_and_plot_settings() {
        let args = parse(&[
            "cos(x) - x",
            "-m",
            "newton",
            "--x0",
            "1",
            "-t",
            "1e-8",
            "--max-iters",
            "20",
            "--plot-start",
            "-2",
            "--plot-end",
            "2",
            "--plot-points",
            "41",
            "--format",
            "json",
        ]);

        assert_eq!(args.x0, Some(1.0));
        assert_eq!(args.tolerance, Some(1e-8));
        assert_eq!(args.max_iters, Some(20));
        assert_eq!(args.plot_start, Some(-2.0));
        assert_eq!(args.plot_end, Some(2.0));
        assert_eq!(args.plot_points, Some(41));
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn verbosity_flags_pick_the_log_level() {
        assert_eq!(parse(&[]).log_level(), LevelFilter::Warn);
        assert_eq!(parse(&["-v"]).log_level(), LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["-vvv"]).log_level(), LevelFilter::Trace);
        assert_eq!(parse(&["-q"]).log_level(), LevelFilter::Error);
        assert_eq!(parse(&["-qq"]).log_level(), LevelFilter::Off);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["skein", "-v", "-q"]).is_err());
    }
}
