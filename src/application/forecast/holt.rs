//! Holt's linear exponential smoothing.
//!
//! Additive trend, no seasonal component:
//!
//! ```text
//! level_t = alpha * y_t + (1 - alpha) * (level_{t-1} + trend_{t-1})
//! trend_t = beta * (level_t - level_{t-1}) + (1 - beta) * trend_{t-1}
//! y_hat_{T+h} = level_T + h * trend_T
//! ```
//!
//! The state starts at `level = y_0`, `trend = y_1 - y_0`. The smoothing
//! parameters are chosen by minimizing the one-step-ahead sum of squared
//! errors: a coarse grid over `[0, 1]^2` picks a starting point, then a
//! compass search halves its step until it drops below the tolerance.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Error, ModelFitError, Result};

/// Minimum number of observations the model can be fitted on.
pub const MIN_POINTS: usize = 2;

const GRID_STEPS: u32 = 20;

/// Fit parameters for the smoothing optimizer.
#[derive(Debug, Clone)]
pub struct HoltConfig {
    /// Maximum step halvings in the compass search after the grid pass.
    pub max_iterations: usize,
    /// Search stops once its step is smaller than this.
    pub tolerance: f64,
    /// Wall-clock budget for the whole fit.
    pub timeout: Duration,
}

impl Default for HoltConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tolerance: 1e-6,
            timeout: Duration::from_secs(2),
        }
    }
}

/// A fitted model, ready to project forward.
#[derive(Debug, Clone, PartialEq)]
pub struct HoltFit {
    /// Level smoothing parameter.
    pub alpha: f64,
    /// Trend smoothing parameter.
    pub beta: f64,
    /// Final level.
    pub level: f64,
    /// Final trend.
    pub trend: f64,
    /// One-step-ahead sum of squared errors at the optimum.
    pub sse: f64,
    /// Step halvings used by the compass search.
    pub iterations: usize,
}

impl HoltFit {
    /// Project `steps` values past the end of the series.
    #[must_use]
    pub fn forecast(&self, steps: usize) -> Vec<f64> {
        (1..=steps)
            .map(|h| self.level + h as f64 * self.trend)
            .collect()
    }
}

/// Fit Holt's linear method to `series`.
///
/// # Errors
///
/// - [`Error::InsufficientData`] with fewer than [`MIN_POINTS`] points
/// - [`ModelFitError::DegenerateSeries`] if every point is zero
/// - [`ModelFitError::NonFinite`] if the series or the fit is not finite
/// - [`ModelFitError::NotConverged`] if the search runs out of iterations
/// - [`ModelFitError::TimedOut`] if the fit exceeds `config.timeout`
pub fn fit(series: &[f64], config: &HoltConfig) -> Result<HoltFit> {
    if series.len() < MIN_POINTS {
        return Err(Error::InsufficientData {
            available: series.len(),
            required: MIN_POINTS,
        });
    }
    if series.iter().any(|y| !y.is_finite()) {
        return Err(ModelFitError::NonFinite.into());
    }
    if series.iter().all(|y| *y == 0.0) {
        return Err(ModelFitError::DegenerateSeries {
            points: series.len(),
        }
        .into());
    }

    let started = Instant::now();
    let deadline = || -> std::result::Result<(), ModelFitError> {
        let elapsed = started.elapsed();
        if elapsed >= config.timeout {
            return Err(ModelFitError::TimedOut { elapsed });
        }
        Ok(())
    };

    // Grid pass.
    let mut best = (0.0, 0.0, f64::INFINITY);
    for i in 0..=GRID_STEPS {
        deadline()?;
        let alpha = f64::from(i) / f64::from(GRID_STEPS);
        for j in 0..=GRID_STEPS {
            let beta = f64::from(j) / f64::from(GRID_STEPS);
            let sse = run(series, alpha, beta).sse;
            if sse < best.2 {
                best = (alpha, beta, sse);
            }
        }
    }
    if !best.2.is_finite() {
        return Err(ModelFitError::NonFinite.into());
    }

    // Compass search around the grid optimum. Only step halvings count
    // against the iteration budget; moves at a given step are bounded by
    // the deadline.
    let (mut alpha, mut beta, mut sse) = best;
    let mut step = 0.5 / f64::from(GRID_STEPS);
    let mut iterations = 0;
    loop {
        loop {
            deadline()?;
            let Some((a, b, candidate)) = best_neighbor(series, alpha, beta, step)
                .filter(|&(_, _, candidate)| candidate < sse)
            else {
                break;
            };
            alpha = a;
            beta = b;
            sse = candidate;
        }

        if step < config.tolerance {
            break;
        }
        if iterations >= config.max_iterations {
            return Err(ModelFitError::NotConverged { iterations }.into());
        }
        step /= 2.0;
        iterations += 1;
    }

    let state = run(series, alpha, beta);
    if !state.level.is_finite() || !state.trend.is_finite() {
        return Err(ModelFitError::NonFinite.into());
    }

    debug!(alpha, beta, sse, iterations, "Holt model fitted");

    Ok(HoltFit {
        alpha,
        beta,
        level: state.level,
        trend: state.trend,
        sse,
        iterations,
    })
}

/// Lowest-SSE point among the eight compass neighbors at `step`.
fn best_neighbor(series: &[f64], alpha: f64, beta: f64, step: f64) -> Option<(f64, f64, f64)> {
    const DIRECTIONS: [(f64, f64); 8] = [
        (1.0, 0.0),
        (-1.0, 0.0),
        (0.0, 1.0),
        (0.0, -1.0),
        (1.0, 1.0),
        (1.0, -1.0),
        (-1.0, 1.0),
        (-1.0, -1.0),
    ];

    DIRECTIONS
        .iter()
        .map(|(da, db)| {
            let a = (alpha + da * step).clamp(0.0, 1.0);
            let b = (beta + db * step).clamp(0.0, 1.0);
            (a, b, run(series, a, b).sse)
        })
        .filter(|(_, _, sse)| sse.is_finite())
        .min_by(|x, y| x.2.total_cmp(&y.2))
}

struct State {
    level: f64,
    trend: f64,
    sse: f64,
}

fn run(series: &[f64], alpha: f64, beta: f64) -> State {
    let mut level = series[0];
    let mut trend = series[1] - series[0];
    let mut sse = 0.0;

    for &observed in &series[1..] {
        let error = observed - (level + trend);
        sse += error * error;

        let previous = level;
        level = alpha * observed + (1.0 - alpha) * (level + trend);
        trend = beta * (level - previous) + (1.0 - beta) * trend;
    }

    State { level, trend, sse }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(points: usize, start: f64, slope: f64) -> Vec<f64> {
        (0..points).map(|t| start + slope * t as f64).collect()
    }

    #[test]
    fn exact_line_extrapolates_the_line() {
        let series = linear(30, 10.0, 2.0);
        let model = fit(&series, &HoltConfig::default()).unwrap();

        assert_eq!(model.sse, 0.0);
        assert_eq!(model.forecast(3), vec![70.0, 72.0, 74.0]);
    }

    #[test]
    fn constant_series_forecasts_flat() {
        let series = vec![5.0; 30];
        let model = fit(&series, &HoltConfig::default()).unwrap();
        assert_eq!(model.forecast(4), vec![5.0; 4]);
    }

    #[test]
    fn parameters_stay_in_unit_interval() {
        let series = vec![
            3.0, 0.0, 0.0, 7.5, 1.0, 0.0, 12.0, 4.0, 0.0, 0.0, 9.0, 2.0, 0.0, 6.0, 0.0,
        ];
        let model = fit(&series, &HoltConfig::default()).unwrap();

        assert!((0.0..=1.0).contains(&model.alpha));
        assert!((0.0..=1.0).contains(&model.beta));
        assert!(model.sse.is_finite());
        assert_eq!(model.forecast(7).len(), 7);
    }

    #[test]
    fn search_never_worsens_the_grid_optimum() {
        let series = vec![1.0, 4.0, 2.0, 8.0, 3.0, 9.0, 5.0, 11.0];
        let model = fit(&series, &HoltConfig::default()).unwrap();

        let grid_best = (0..=GRID_STEPS)
            .flat_map(|i| (0..=GRID_STEPS).map(move |j| (i, j)))
            .map(|(i, j)| {
                run(
                    &series,
                    f64::from(i) / f64::from(GRID_STEPS),
                    f64::from(j) / f64::from(GRID_STEPS),
                )
                .sse
            })
            .fold(f64::INFINITY, f64::min);
        assert!(model.sse <= grid_best);
    }

    /// Zero-heavy daily windows: roughly 60% empty days, the rest up to ~1370.
    fn sparse_windows(count: usize) -> Vec<Vec<f64>> {
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            state >> 33
        };
        (0..count)
            .map(|_| {
                let mut window: Vec<f64> = (0..30)
                    .map(|_| {
                        if next() % 10 < 6 {
                            0.0
                        } else {
                            (next() % 137_000) as f64 / 100.0
                        }
                    })
                    .collect();
                if window.iter().all(|y| *y == 0.0) {
                    window[0] = 42.0;
                }
                window
            })
            .collect()
    }

    #[test]
    fn sparse_sales_windows_fit_with_default_budget() {
        for (trial, window) in sparse_windows(200).iter().enumerate() {
            let model = fit(window, &HoltConfig::default())
                .unwrap_or_else(|err| panic!("trial {trial}: {err}"));

            assert!(model.sse.is_finite());
            assert!(model.iterations <= HoltConfig::default().max_iterations);
            assert!(model.forecast(7).iter().all(|y| y.is_finite()));
        }
    }

    #[test]
    fn all_zero_series_is_degenerate() {
        let err = fit(&[0.0; 30], &HoltConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::ModelFit(ModelFitError::DegenerateSeries { points: 30 })
        ));
    }

    #[test]
    fn single_point_is_insufficient() {
        let err = fit(&[1.0], &HoltConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                available: 1,
                required: 2
            }
        ));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let err = fit(&[1.0, f64::NAN, 2.0], &HoltConfig::default()).unwrap_err();
        assert!(matches!(err, Error::ModelFit(ModelFitError::NonFinite)));
    }

    #[test]
    fn iteration_budget_is_enforced() {
        let config = HoltConfig {
            max_iterations: 1,
            ..HoltConfig::default()
        };
        let err = fit(&[1.0, 4.0, 2.0, 8.0, 3.0, 9.0], &config).unwrap_err();
        assert!(matches!(
            err,
            Error::ModelFit(ModelFitError::NotConverged { iterations: 1 })
        ));
    }

    #[test]
    fn zero_timeout_fails_fast() {
        let config = HoltConfig {
            timeout: Duration::ZERO,
            ..HoltConfig::default()
        };
        let err = fit(&[1.0, 2.0, 3.0], &config).unwrap_err();
        assert!(matches!(
            err,
            Error::ModelFit(ModelFitError::TimedOut { .. })
        ));
    }
}
