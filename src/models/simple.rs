//! Simple (univariate) linear regression
//!
//! Closed-form OLS fit of `y = b0 + b1*x`, with batch and single-value
//! prediction and the error/fit metrics of the original interface.

use std::fmt;

use crate::errors::{RegressionError, RegressionResult};
use crate::plot::{PlotStyle, RegressionPlotter};
use crate::stats::{mean, sample_covariance, sample_variance};
use crate::types::Input;

/// Univariate OLS estimator for `y = b0 + b1*x`.
///
/// Constructed in an unfitted zero state. `fit` estimates the parameters in
/// closed form and may be called again to refit, fully overwriting the
/// previous parameters and training data.
#[derive(Debug, Clone, Default)]
pub struct SimpleLinearRegression {
    /// Intercept term (b0). Zero until fitted.
    pub intercept: f64,
    /// Slope term (b1). Zero until fitted.
    pub slope: f64,
    /// Training inputs retained by the last successful fit.
    pub train_x: Vec<f64>,
    /// Training targets retained by the last successful fit.
    pub train_y: Vec<f64>,
    /// Input of the most recent batch predict call.
    pub last_predict_input: Vec<f64>,
    /// Output of the most recent batch predict call.
    pub last_predict_output: Vec<f64>,
    /// Whether `fit` has succeeded at least once.
    pub fitted: bool,
}

impl PartialEq for SimpleLinearRegression {
    /// Two estimators are equal when their `(intercept, slope)` pairs match;
    /// training data does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.intercept == other.intercept && self.slope == other.slope
    }
}

impl fmt::Display for SimpleLinearRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SimpleLinearRegression(b0={}, b1={})",
            self.intercept, self.slope
        )
    }
}

impl SimpleLinearRegression {
    /// Create an unfitted estimator with zeroed parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `[intercept, slope]` pair.
    pub fn coefficients(&self) -> [f64; 2] {
        [self.intercept, self.slope]
    }

    /// Fit the line by closed-form simple OLS.
    ///
    /// # Arguments
    /// * `x` - Explanatory values
    /// * `y` - Response values, same kind and length as `x`
    ///
    /// # Errors
    /// * `TypeMismatch` if `x` and `y` are different kinds of input
    /// * `LengthMismatch` if the coerced sequences differ in length
    pub fn fit<X, Y>(&mut self, x: X, y: Y) -> RegressionResult<()>
    where
        X: Into<Input>,
        Y: Into<Input>,
    {
        let x = x.into();
        let y = y.into();

        if x.kind() != y.kind() {
            return Err(RegressionError::TypeMismatch {
                x: x.kind(),
                y: y.kind(),
            });
        }

        let x = x.into_series();
        let y = y.into_series();

        if x.len() != y.len() {
            return Err(RegressionError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }

        // b1 = cov(x, y) / var(x), b0 = mean(y) - b1 * mean(x)
        let slope = sample_covariance(&x, &y) / sample_variance(&x);
        let intercept = mean(&y) - slope * mean(&x);

        self.slope = slope;
        self.intercept = intercept;
        self.train_x = x;
        self.train_y = y;
        self.fitted = true;

        Ok(())
    }

    /// Predict a response for every element of `x_test`.
    ///
    /// The input and the predictions are retained for later plotting.
    ///
    /// # Errors
    /// * `NotFitted` if `fit` has not succeeded yet
    /// * `InvalidInput` if `x_test` is a scalar
    /// * `EmptyInput` if `x_test` has no elements
    pub fn predict(&mut self, x_test: impl Into<Input>) -> RegressionResult<Vec<f64>> {
        if !self.fitted {
            return Err(RegressionError::NotFitted);
        }

        let x_test = match x_test.into() {
            Input::Sequence(values) => values,
            Input::Scalar(_) => {
                return Err(RegressionError::InvalidInput(
                    "batch predict requires a sequence; use predict_value for a scalar".into(),
                ))
            }
        };

        if x_test.is_empty() {
            return Err(RegressionError::EmptyInput { field: "x_test" });
        }

        let y_pred: Vec<f64> = x_test
            .iter()
            .map(|&xi| self.intercept + self.slope * xi)
            .collect();

        self.last_predict_input = x_test;
        self.last_predict_output = y_pred.clone();

        Ok(y_pred)
    }

    /// Predict the response for a single value.
    ///
    /// # Errors
    /// * `NotFitted` if `fit` has not succeeded yet
    /// * `InvalidInput` if `x_test` is not a scalar
    pub fn predict_value(&self, x_test: impl Into<Input>) -> RegressionResult<f64> {
        if !self.fitted {
            return Err(RegressionError::NotFitted);
        }

        match x_test.into() {
            Input::Scalar(value) => Ok(self.intercept + self.slope * value),
            Input::Sequence(_) => Err(RegressionError::InvalidInput(
                "predict_value requires a scalar".into(),
            )),
        }
    }

    /// Sum of squared errors between predicted and actual values, divided by
    /// the average of the two lengths.
    ///
    /// The averaged-length denominator equals `n` whenever the lengths match
    /// (which the length check guarantees). It is kept verbatim from the
    /// original interface rather than being replaced with a plain `n`.
    pub fn sum_squared_error<P, A>(&self, predicted: P, actual: A) -> RegressionResult<f64>
    where
        P: Into<Input>,
        A: Into<Input>,
    {
        let predicted = predicted.into().into_series();
        let actual = actual.into().into_series();
        check_equal_lengths(&predicted, &actual)?;

        Ok(sum_squared_error_of(&predicted, &actual))
    }

    /// Sum-of-squares term divided by the mean of the actual values.
    ///
    /// Not the textbook MSE: a normalized-error ratio kept verbatim from
    /// the original interface.
    pub fn mean_squared_error<P, A>(&self, predicted: P, actual: A) -> RegressionResult<f64>
    where
        P: Into<Input>,
        A: Into<Input>,
    {
        let predicted = predicted.into().into_series();
        let actual = actual.into().into_series();
        check_equal_lengths(&predicted, &actual)?;

        Ok(sum_squared_error_of(&predicted, &actual) / mean(&actual))
    }

    /// Ratio of the predicted spread to the actual spread, both measured
    /// around the mean of the actual values.
    ///
    /// Kept verbatim from the original interface: `SQE / SQT` with both sums
    /// taken against `mean(actual)`, not the residual-based textbook R².
    ///
    /// # Errors
    /// * `LengthMismatch` if the sequences differ in length (checked first)
    /// * `NotFitted` if `fit` has not succeeded yet
    pub fn r2_score<P, A>(&self, predicted: P, actual: A) -> RegressionResult<f64>
    where
        P: Into<Input>,
        A: Into<Input>,
    {
        let predicted = predicted.into().into_series();
        let actual = actual.into().into_series();
        check_equal_lengths(&predicted, &actual)?;

        if !self.fitted {
            return Err(RegressionError::NotFitted);
        }

        let y_mean = mean(&actual);
        let sqe: f64 = predicted.iter().map(|p| (p - y_mean).powi(2)).sum();
        let sqt: f64 = actual.iter().map(|a| (a - y_mean).powi(2)).sum();

        Ok(sqe / sqt)
    }

    /// Format the fitted equation, optionally printing it to stdout.
    ///
    /// Always returns the formatted string; `"y = 0 + 0x"` before any fit.
    pub fn show_equation(&self, print_equation: bool) -> String {
        let equation = format!("y = {} + {}x", self.intercept, self.slope);
        if print_equation {
            println!("{equation}");
        }
        equation
    }

    /// Hand the training points and the most recent batch predictions to a
    /// plotting collaborator.
    ///
    /// # Errors
    /// * `NotFitted` if `fit` has not succeeded yet
    pub fn regression_plot(&self, plotter: &mut dyn RegressionPlotter) -> RegressionResult<()> {
        if !self.fitted {
            return Err(RegressionError::NotFitted);
        }

        let training: Vec<(f64, f64)> = self
            .train_x
            .iter()
            .copied()
            .zip(self.train_y.iter().copied())
            .collect();
        let predictions: Vec<(f64, f64)> = self
            .last_predict_input
            .iter()
            .copied()
            .zip(self.last_predict_output.iter().copied())
            .collect();

        plotter.plot(&training, &predictions, &PlotStyle::default());
        Ok(())
    }
}

fn check_equal_lengths(left: &[f64], right: &[f64]) -> RegressionResult<()> {
    if left.len() != right.len() {
        return Err(RegressionError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

fn sum_squared_error_of(predicted: &[f64], actual: &[f64]) -> f64 {
    let size = (predicted.len() + actual.len()) as f64 / 2.0;
    let total: f64 = predicted
        .iter()
        .zip(actual)
        .map(|(p, a)| (p - a).powi(2))
        .sum();
    total / size
}
