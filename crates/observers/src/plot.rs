//! Plot window showing a function and the secant steps taken on it.
//!
//! See [`SecantPlot`] for usage.

use eframe::egui::{self, Color32};
use egui_plot::{HLine, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};
use secant_core::{Function, Observer};
use secant_solvers::equation::secant::IterationRecord;

use crate::curve;

const MARKER_RADIUS: f32 = 4.0;

/// Configuration for rendering a [`SecantPlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("cos(x) - x").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    markers: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, markers
    /// shown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            markers: true,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling the curve and each new estimate.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Hides the point markers, leaving only the curve and secant lines.
    #[must_use]
    pub fn without_markers(mut self) -> Self {
        self.markers = false;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer that collects secant steps and displays them over the curve.
///
/// The curve is sampled once, up front, over the window around the starting
/// estimates (see [`curve::sample`]). Each observed record adds a dashed
/// secant segment from `(x_prev, f(x_prev))` to `(x_curr, f(x_curr))` and
/// markers at both points and at `(x_next, 0)`.
///
/// # Example
///
/// ```ignore
/// let f = secant_expr::compile("cos(x) - x", "x")?;
/// let mut plot = SecantPlot::new(&f, f.to_string(), [0.0, 1.0])?;
/// secant::solve(&f, [0.0, 1.0], &Config::default(), &mut plot)?;
/// plot.show(ShowConfig::new().title("Secant").legend())?;
/// ```
pub struct SecantPlot {
    label: String,
    curve: Vec<[f64; 2]>,
    records: Vec<IterationRecord>,
}

impl SecantPlot {
    /// Samples `function` with [`curve::DEFAULT_SAMPLES`] points and creates
    /// an empty plot labelled `label`.
    ///
    /// # Errors
    ///
    /// Returns the function's error if sampling fails.
    pub fn new<F: Function>(
        function: &F,
        label: impl Into<String>,
        estimates: [f64; 2],
    ) -> Result<Self, F::Error> {
        let curve = curve::sample(function, estimates, curve::DEFAULT_SAMPLES)?;
        Ok(Self::from_curve(label, curve))
    }

    /// Creates an empty plot over an already sampled curve.
    pub fn from_curve(label: impl Into<String>, curve: Vec<[f64; 2]>) -> Self {
        Self {
            label: label.into(),
            curve,
            records: Vec::new(),
        }
    }

    /// Adds one secant step.
    pub fn record(&mut self, record: &IterationRecord) {
        self.records.push(*record);
    }

    /// Returns the steps recorded so far.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Returns the sampled curve.
    #[must_use]
    pub fn curve(&self) -> &[[f64; 2]] {
        &self.curve
    }

    /// Opens a blocking egui window displaying the curve and steps.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    plot: self,
                    legend: config.legend,
                    markers: config.markers,
                }))
            }),
        )
    }
}

impl<A> Observer<IterationRecord, A> for SecantPlot {
    fn observe(&mut self, record: &IterationRecord) -> Option<A> {
        self.record(record);
        None
    }
}

/// Allows `&mut SecantPlot` to be passed to solvers that take an observer by
/// value, so [`SecantPlot::show`] can be called after the solve completes.
impl<A> Observer<IterationRecord, A> for &mut SecantPlot {
    fn observe(&mut self, record: &IterationRecord) -> Option<A> {
        (*self).observe(record)
    }
}

/// The egui [`eframe::App`] that renders a [`SecantPlot`].
struct PlotApp {
    plot: SecantPlot,
    legend: bool,
    markers: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("secant_plot");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            let markers = self.markers;
            plot.show(ui, |plot_ui| {
                let curve: PlotPoints = self.plot.curve.iter().copied().collect();
                plot_ui.line(Line::new(curve).name(&self.plot.label));

                plot_ui.hline(
                    HLine::new(0.0)
                        .color(Color32::GRAY)
                        .style(LineStyle::dashed_loose()),
                );

                for record in &self.plot.records {
                    let [start, end] = record.secant_line();
                    plot_ui.line(
                        Line::new(PlotPoints::from(vec![start, end]))
                            .color(Color32::RED)
                            .style(LineStyle::dashed_dense()),
                    );

                    if markers {
                        for marker in step_markers(record, self.legend) {
                            plot_ui.points(marker.into_points());
                        }
                    }
                }
            });
        });
    }
}

/// One point drawn for a secant step.
#[derive(Debug, Clone, PartialEq)]
struct Marker {
    point: [f64; 2],
    color: Color32,
    label: Option<String>,
}

impl Marker {
    fn into_points(self) -> Points {
        let points = Points::new(vec![self.point])
            .shape(MarkerShape::Circle)
            .filled(true)
            .radius(MARKER_RADIUS)
            .color(self.color);
        match self.label {
            Some(label) => points.name(label),
            None => points,
        }
    }
}

/// Markers for one step: the new estimate on the axis, then both ends of the
/// secant line.
///
/// With a legend the new estimate is named after its iteration.
fn step_markers(record: &IterationRecord, legend: bool) -> [Marker; 3] {
    let [start, end] = record.secant_line();
    [
        Marker {
            point: [record.x_next, 0.0],
            color: Color32::GREEN,
            label: legend.then(|| format!("Iteration {}", record.index)),
        },
        Marker {
            point: start,
            color: Color32::BLUE,
            label: None,
        },
        Marker {
            point: end,
            color: Color32::RED,
            label: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use secant_solvers::equation::secant::{Action, Config, solve};

    #[test]
    fn samples_curve_over_window() {
        let f = |x: f64| x * x - 2.0;
        let plot = SecantPlot::new(&f, "f(x) = x^2 - 2", [1.0, 2.0]).expect("infallible");

        assert_eq!(plot.curve().len(), curve::DEFAULT_SAMPLES);
        assert_eq!(plot.curve()[0][0], -1.0);
        assert_eq!(plot.curve()[curve::DEFAULT_SAMPLES - 1][0], 4.0);
        assert!(plot.records().is_empty());
    }

    #[test]
    fn collects_every_record_from_a_run() {
        let f = |x: f64| x.cos() - x;
        let mut plot = SecantPlot::new(&f, "f(x) = cos(x) - x", [0.0, 1.0]).expect("infallible");

        let solution = solve(&f, [0.0, 1.0], &Config::default(), &mut plot).expect("should solve");

        assert_eq!(plot.records(), solution.trace.records());
    }

    fn first_step() -> IterationRecord {
        IterationRecord {
            index: 1,
            x_prev: 0.0,
            f_x_prev: 1.0,
            x_curr: 1.0,
            f_x_curr: -1.0,
            x_next: 0.5,
            relative_error: 1.0,
        }
    }

    #[test]
    fn never_returns_an_action() {
        let mut plot = SecantPlot::from_curve("empty", Vec::new());
        let record = first_step();
        let action: Option<Action> = plot.observe(&record);
        assert!(action.is_none());
        assert_eq!(plot.records(), [record]);
    }

    #[test]
    fn names_new_estimate_when_legend_is_shown() {
        let record = IterationRecord {
            index: 4,
            ..first_step()
        };

        let [next, start, end] = step_markers(&record, true);
        assert_eq!(next.point, [0.5, 0.0]);
        assert_eq!(next.color, Color32::GREEN);
        assert_eq!(next.label.as_deref(), Some("Iteration 4"));
        assert_eq!((start.point, start.label), ([0.0, 1.0], None));
        assert_eq!((end.point, end.label), ([1.0, -1.0], None));

        let unnamed = step_markers(&record, false);
        assert!(unnamed.iter().all(|marker| marker.label.is_none()));
    }
}
