//! Boundary input types
//!
//! Public operations accept loosely-typed numeric input and coerce it to a
//! uniform `f64` sequence once, at each operation boundary.

use std::fmt;

/// Shape of an [`Input`] before coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Scalar,
    Sequence,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Scalar => write!(f, "scalar"),
            InputKind::Sequence => write!(f, "sequence"),
        }
    }
}

/// Loosely-typed numeric input accepted at the estimator boundary.
///
/// Scalars and sequences of the common primitive numeric types coerce into
/// one of these two shapes via `From`, so callers can pass integer or float
/// data without converting by hand.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl Input {
    /// Shape of this input before coercion.
    pub fn kind(&self) -> InputKind {
        match self {
            Input::Scalar(_) => InputKind::Scalar,
            Input::Sequence(_) => InputKind::Sequence,
        }
    }

    /// Coerce into a uniform `f64` sequence.
    ///
    /// A scalar becomes a one-element sequence, matching the series
    /// coercion of the original interface.
    pub fn into_series(self) -> Vec<f64> {
        match self {
            Input::Scalar(value) => vec![value],
            Input::Sequence(values) => values,
        }
    }
}

macro_rules! impl_scalar_input {
    ($($t:ty),+) => {$(
        impl From<$t> for Input {
            fn from(value: $t) -> Self {
                Input::Scalar(f64::from(value))
            }
        }
    )+};
}

impl_scalar_input!(f64, f32, i32, u32, i16, u16, i8, u8);

macro_rules! impl_sequence_input {
    ($($t:ty),+) => {$(
        impl From<Vec<$t>> for Input {
            fn from(values: Vec<$t>) -> Self {
                Input::Sequence(values.into_iter().map(f64::from).collect())
            }
        }

        impl From<&[$t]> for Input {
            fn from(values: &[$t]) -> Self {
                Input::Sequence(values.iter().copied().map(f64::from).collect())
            }
        }

        impl From<&Vec<$t>> for Input {
            fn from(values: &Vec<$t>) -> Self {
                Input::Sequence(values.iter().copied().map(f64::from).collect())
            }
        }
    )+};
}

impl_sequence_input!(f64, f32, i32, u32, i16, u16, i8, u8);
