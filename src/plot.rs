//! Rendering seam for regression plots
//!
//! The estimator delegates visualization to an external collaborator so the
//! core carries no dependency on any particular rendering toolkit.

/// Style options forwarded to the plotting collaborator.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Color of the fitted regression line.
    pub line_color: &'static str,
    /// Width of the fitted regression line.
    pub line_width: f64,
    /// Color of the overlaid prediction points.
    pub point_color: &'static str,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            line_color: "red",
            line_width: 2.0,
            point_color: "yellow",
        }
    }
}

/// Collaborator that renders a fitted line over the training points and
/// overlays the predicted points.
pub trait RegressionPlotter {
    /// Render `training` with a fitted line, overlaying `predictions`.
    fn plot(&mut self, training: &[(f64, f64)], predictions: &[(f64, f64)], style: &PlotStyle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = PlotStyle::default();
        assert_eq!(style.line_color, "red");
        assert!((style.line_width - 2.0).abs() < 1e-10);
        assert_eq!(style.point_color, "yellow");
    }
}
