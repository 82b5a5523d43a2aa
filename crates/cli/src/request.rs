use std::{fs, path::Path};

use anyhow::{Context, anyhow};
use serde::Deserialize;
use skein_expr::Expression;
use skein_solvers::{equation::Config, method::Method};

use crate::args::Args;

pub const DEFAULT_PLOT_START: f64 = -10.0;
pub const DEFAULT_PLOT_END: f64 = 10.0;
pub const DEFAULT_PLOT_POINTS: usize = 201;

/// A solve request as written in a TOML file.
///
/// Every field is optional; missing values fall back to flags or defaults.
///
/// ```toml
/// equation = "x^3 = 2x + 5"
/// method = "secant"
/// x0 = 2.0
/// x1 = 3.0
/// tolerance = 1e-8
/// max_iters = 50
///
/// [plot]
/// start = 0.0
/// end = 4.0
/// points = 81
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestFile {
    pub equation: Option<String>,
    pub method: Option<String>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub x0: Option<f64>,
    pub x1: Option<f64>,
    pub tolerance: Option<f64>,
    pub max_iters: Option<usize>,
    pub plot: PlotFile,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotFile {
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub points: Option<usize>,
}

/// The range sampled for the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRange {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

/// A validated request, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub expression: Expression,
    pub method: Method,
    pub config: Config,
    pub plot: PlotRange,
}

impl RequestFile {
    /// Reads a request from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read request file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("invalid request file {}", path.display()))
    }

    /// Replaces file values with any given on the command line.
    #[must_use]
    pub fn with_overrides(self, args: &Args) -> Self {
        Self {
            equation: args.equation.clone().or(self.equation),
            method: args.method.clone().or(self.method),
            a: args.a.or(self.a),
            b: args.b.or(self.b),
            x0: args.x0.or(self.x0),
            x1: args.x1.or(self.x1),
            tolerance: args.tolerance.or(self.tolerance),
            max_iters: args.max_iters.or(self.max_iters),
            plot: PlotFile {
                start: args.plot_start.or(self.plot.start),
                end: args.plot_end.or(self.plot.end),
                points: args.plot_points.or(self.plot.points),
            },
        }
    }

    /// Parses the equation, picks the method and validates the settings.
    pub fn into_request(self) -> anyhow::Result<Request> {
        let text = self.equation.ok_or_else(|| {
            anyhow!("no equation given; pass it as an argument or set `equation` in a request file")
        })?;
        let expression =
            Expression::parse(&text).with_context(|| format!("cannot parse equation `{text}`"))?;

        let name = self
            .method
            .ok_or_else(|| anyhow!("no method given; use --method bisection|newton|secant"))?;
        let slots = match name.trim().to_ascii_lowercase().as_str() {
            "bisection" => vec![self.a, self.b],
            "newton" => vec![self.x0],
            _ => vec![self.x0, self.x1],
        };
        let params: Vec<f64> = slots.into_iter().flatten().collect();
        let method = Method::from_name(&name, &params)?;

        let defaults = Config::default();
        let config = Config::new(
            self.max_iters.unwrap_or(defaults.max_iters()),
            self.tolerance.unwrap_or(defaults.tolerance()),
        )
        .context("invalid solver settings")?;

        let plot = PlotRange {
            start: self.plot.start.unwrap_or(DEFAULT_PLOT_START),
            end: self.plot.end.unwrap_or(DEFAULT_PLOT_END),
            points: self.plot.points.unwrap_or(DEFAULT_PLOT_POINTS),
        };

        Ok(Request {
            expression,
            method,
            config,
            plot,
        })
    }
}
