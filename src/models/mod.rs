//! Regression model implementations

mod simple;

pub use simple::SimpleLinearRegression;
