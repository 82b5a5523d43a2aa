use serde::Serialize;
use skein_core::Sample;
use skein_solvers::{
    equation::{bisection, newton, secant},
    method::{Outcome, SolveError},
};
use tabled::{Table, builder::Builder, settings::Style};

use crate::request::Request;

/// Everything a front end needs to show a solve: the trace, the result, the
/// root point and the sampled curve.
#[derive(Debug, Serialize)]
pub struct Report {
    pub equation: String,
    pub normalized: String,
    pub tolerance: f64,
    pub max_iters: usize,
    pub solution: Outcome,
    pub root_point: Point,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A borrowed iteration trace from any method.
#[derive(Debug, Clone, Copy)]
pub enum Trace<'a> {
    Bisection(&'a [bisection::Record]),
    Newton(&'a [newton::Record]),
    Secant(&'a [secant::Record]),
}

impl Report {
    pub fn new(request: &Request, solution: Outcome, samples: Vec<Sample>) -> Self {
        let (x, y) = solution.root_point();
        Self {
            equation: request.expression.original().to_owned(),
            normalized: request.expression.normalized().to_owned(),
            tolerance: request.config.tolerance(),
            max_iters: request.config.max_iters(),
            solution,
            root_point: Point { x, y },
            samples,
        }
    }

    /// Renders the report for a terminal.
    pub fn render(&self) -> String {
        let status = if self.solution.converged() {
            "converged"
        } else {
            "stopped at the iteration limit"
        };

        let mut summary = Builder::default();
        summary.push_record(["f(x) = 0", self.normalized.as_str()]);
        summary.push_record(["status", status]);
        summary.push_record(["root", &fixed(self.solution.root())]);
        summary.push_record(["f(root)", &sci(self.solution.function_value())]);
        summary.push_record(["error", &sci(self.solution.error())]);
        summary.push_record(["iterations", &self.solution.len().to_string()]);
        summary.push_record([
            "root point",
            &format!("({}, {})", fixed(self.root_point.x), sci(self.root_point.y)),
        ]);
        let mut summary = summary.build();
        summary.with(Style::modern_rounded());

        format!("{}\n{summary}", Trace::of(&self.solution).table())
    }
}

impl<'a> Trace<'a> {
    pub fn of(outcome: &'a Outcome) -> Self {
        match outcome {
            Outcome::Bisection(s) => Self::Bisection(&s.iterations),
            Outcome::Newton(s) => Self::Newton(&s.iterations),
            Outcome::Secant(s) => Self::Secant(&s.iterations),
        }
    }

    /// The partial trace a failed solve kept, if any.
    pub fn of_error(error: &'a SolveError) -> Option<Self> {
        match error {
            SolveError::Bisection(_) => None,
            SolveError::Newton(e) => e.trace().map(Self::Newton),
            SolveError::Secant(e) => e.trace().map(Self::Secant),
        }
    }

    /// Builds the iteration table; not-applicable cells show as `-`.
    pub fn table(&self) -> Table {
        let mut builder = Builder::default();
        match self {
            Self::Bisection(records) => {
                builder.push_record(["step", "a", "b", "c", "f(a)", "f(b)", "f(c)", "error"]);
                for r in *records {
                    builder.push_record([
                        r.step.to_string(),
                        fixed(r.a),
                        fixed(r.b),
                        opt(r.c, fixed),
                        sci(r.fa),
                        sci(r.fb),
                        opt(r.fc, sci),
                        sci(r.error),
                    ]);
                }
            }
            Self::Newton(records) => {
                builder.push_record(["step", "x", "f(x)", "f'(x)", "error"]);
                for r in *records {
                    builder.push_record([
                        r.step.to_string(),
                        fixed(r.x),
                        sci(r.fx),
                        opt(r.derivative, sci),
                        sci(r.error),
                    ]);
                }
            }
            Self::Secant(records) => {
                builder.push_record(["step", "x_prev", "x_curr", "f(x_prev)", "f(x_curr)", "error"]);
                for r in *records {
                    builder.push_record([
                        r.step.to_string(),
                        fixed(r.x_prev),
                        opt(r.x_curr, fixed),
                        opt(r.fx_prev, sci),
                        opt(r.fx_curr, sci),
                        opt(r.error, sci),
                    ]);
                }
            }
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table
    }
}

fn fixed(value: f64) -> String {
    format!("{value:.6}")
}

fn sci(value: f64) -> String {
    format!("{value:.3e}")
}

fn opt(value: Option<f64>, show: fn(f64) -> String) -> String {
    value.map_or_else(|| "-".to_owned(), show)
}

#[cfg(test)]
mod tests {
    use super::*;

    use skein_core::sample;
    use skein_solvers::equation::Config;

    use crate::request::{PlotRange, Request};

    fn request(equation: &str, method: skein_solvers::method::Method) -> Request {
        Request {
            expression: skein_expr::parse(equation).expect("valid expression"),
            method,
            config: Config::new(50, 1e-6).expect("valid config"),
            plot: PlotRange {
                start: -2.0,
                end: 2.0,
                points: 5,
            },
        }
    }

    fn report(request: &Request) -> Report {
        let outcome = request
            .method
            .solve(&request.expression, &request.config)
            .expect("should solve");
        let samples = sample(
            &request.expression,
            request.plot.start,
            request.plot.end,
            request.plot.points,
        )
        .expect("valid range");
        Report::new(request, outcome, samples)
    }

    #[test]
    fn formats_numbers_like_the_table() {
        assert_eq!(fixed(1.0), "1.000000");
        assert_eq!(sci(0.00123), "1.230e-3");
        assert_eq!(opt(None, sci), "-");
        assert_eq!(opt(Some(2.5), fixed), "2.500000");
    }

    #[test]
    fn marks_not_applicable_cells() {
        use skein_solvers::method::Method;

        let request = request("x^2 = 2", Method::Secant { x0: 1.0, x1: 2.0 });
        let report = report(&request);

        let table = Trace::of(&report.solution).table().to_string();
        let seed_row = table
            .lines()
            .find(|line| line.contains("1.000000") && line.contains(" - "))
            .expect("seed row with dashes");
        assert_eq!(seed_row.matches(" - ").count(), 4);
    }

    #[test]
    fn render_includes_trace_and_summary() {
        use skein_solvers::method::Method;

        let request = request("x^2 - 2", Method::Bisection { a: 1.0, b: 2.0 });
        let text = report(&request).render();

        assert!(text.contains("f(c)"));
        assert!(text.contains("x^2 - 2"));
        assert!(text.contains("converged"));
        assert!(text.contains("1.414"));
    }

    #[test]
    fn json_keeps_nulls_and_samples() {
        use skein_solvers::method::Method;

        let pole = request("1/x", Method::Bisection { a: -1.0, b: 1.0 });
        let err = pole
            .method
            .solve(&pole.expression, &pole.config)
            .unwrap_err();
        assert!(Trace::of_error(&err).is_none());

        let line = request("x", Method::Newton { x0: 1.0 });
        let json = serde_json::to_value(report(&line)).expect("serializable");

        assert_eq!(json["solution"]["method"], "newton");
        assert!(json["solution"]["iterations"][0]["derivative"].is_null());
        assert_eq!(json["samples"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["root_point"]["x"], json["solution"]["root"]);
    }

    #[test]
    fn failed_solve_keeps_partial_trace() {
        use skein_solvers::method::Method;

        let request = request("x^2 + 1", Method::Newton { x0: 0.0 });
        let err = request
            .method
            .solve(&request.expression, &request.config)
            .unwrap_err();

        let trace = Trace::of_error(&err).expect("newton keeps its trace");
        assert!(trace.table().to_string().contains("f'(x)"));
    }
}
