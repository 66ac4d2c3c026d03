//! simple-linreg: univariate ordinary-least-squares regression
//!
//! Fits `y = b0 + b1*x` in closed form, predicts new values (batch and
//! single-value), and computes the error/fit metrics of the original
//! interface. Plotting is delegated to an external collaborator behind
//! [`plot::RegressionPlotter`], so the core carries no rendering toolkit.

pub mod errors;
pub mod models;
pub mod plot;
pub mod stats;
pub mod types;

pub use errors::{RegressionError, RegressionResult};
pub use models::SimpleLinearRegression;
pub use plot::{PlotStyle, RegressionPlotter};
pub use types::{Input, InputKind};
