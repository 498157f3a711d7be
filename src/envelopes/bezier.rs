//! Bezier curve envelope over arbitrary control points.

use crate::block::Block;
use crate::error::{Error, Result};
use crate::wave::Wave;

/// A Bernstein-polynomial envelope through any number of control points.
///
/// Control points are `(x, y)` pairs with `x` in [0, 1] and strictly
/// increasing; `x` positions the point along the rendered span and `y` is its
/// amplitude. With two points the curve degenerates to a straight line, three
/// points give a quadratic, and so on. The curve always starts exactly at the
/// first point's `y` and ends exactly at the last point's `y`; interior
/// points pull the curve towards themselves without being hit.
///
/// The `x` coordinates reshape the curve's timing: evaluation maps each
/// output sample to its position in the x span, then inverts the
/// piecewise-linear x layout of the control points to recover the curve
/// parameter.
///
/// # Examples
///
/// ```
/// use ditty::{Wave, envelopes::Bezier};
///
/// // Quadratic swell: up towards 1 and straight back down.
/// let swell = Bezier::new(vec![(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)])?;
/// let shape = swell.render(3);
/// assert_eq!(shape.samples(), &[0.0, 0.5, 0.0]);
/// # Ok::<(), ditty::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier {
    points: Vec<(f32, f32)>,
}

impl Bezier {
    /// Creates an envelope from its control points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewControlPoints`] for fewer than two points,
    /// [`Error::ControlPointOutOfRange`] when an `x` lies outside [0, 1],
    /// and [`Error::ControlPointsNotIncreasing`] when the `x` coordinates
    /// are not strictly increasing.
    pub fn new(points: Vec<(f32, f32)>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::TooFewControlPoints(points.len()));
        }
        for (index, (x, _)) in points.iter().enumerate() {
            if !(0.0..=1.0).contains(x) {
                return Err(Error::ControlPointOutOfRange { index, x: *x });
            }
        }
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].0 <= pair[0].0 {
                return Err(Error::ControlPointsNotIncreasing {
                    index: index + 1,
                    x: pair[1].0,
                });
            }
        }
        Ok(Bezier { points })
    }

    /// Curve parameter for a position `x` inside the control span, by
    /// inverting the piecewise-linear layout of the control x coordinates
    /// against evenly spaced parameter values.
    fn parameter_at(&self, x: f64) -> f64 {
        let last = self.points.len() - 1;
        if x <= self.points[0].0 as f64 {
            return 0.0;
        }
        if x >= self.points[last].0 as f64 {
            return 1.0;
        }
        let step = 1.0 / last as f64;
        for j in 0..last {
            let xa = self.points[j].0 as f64;
            let xb = self.points[j + 1].0 as f64;
            if x <= xb {
                let within = (x - xa) / (xb - xa);
                return (j as f64 + within) * step;
            }
        }
        1.0
    }

    /// Evaluates the Bernstein polynomial at parameter `t`.
    fn bernstein(&self, t: f64, coefficients: &[f64]) -> f64 {
        let degree = self.points.len() - 1;
        self.points
            .iter()
            .enumerate()
            .map(|(i, (_, y))| {
                coefficients[i]
                    * (1.0 - t).powi((degree - i) as i32)
                    * t.powi(i as i32)
                    * *y as f64
            })
            .sum()
    }
}

impl Wave for Bezier {
    fn generate(&self, target: &Block) -> Vec<f32> {
        let n = target.len();
        let coefficients = binomial_row(self.points.len() - 1);
        let x_first = self.points[0].0 as f64;
        let x_span = self.points[self.points.len() - 1].0 as f64 - x_first;
        (0..n)
            .map(|i| {
                let u = if n > 1 {
                    i as f64 / (n - 1) as f64
                } else {
                    0.0
                };
                let t = self.parameter_at(x_first + u * x_span);
                self.bernstein(t, &coefficients) as f32
            })
            .collect()
    }
}

/// One row of Pascal's triangle, by the multiplicative recurrence.
fn binomial_row(degree: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(degree + 1);
    let mut c = 1.0;
    row.push(c);
    for i in 1..=degree {
        c = c * (degree - i + 1) as f64 / i as f64;
        row.push(c);
    }
    row
}
