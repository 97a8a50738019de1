//! Sample points and series

use std::fmt;

/// One evaluated `(x, y)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A zero-crossing at `x`
    pub fn root(x: f64) -> Self {
        Self { x, y: 0.0 }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &SamplePoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for SamplePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<SamplePoint> for (f64, f64) {
    fn from(p: SamplePoint) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// An expression's text together with its sampled points, in x order
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub expression: String,
    pub points: Vec<SamplePoint>,
}

impl Series {
    pub fn new(expression: impl Into<String>, points: Vec<SamplePoint>) -> Self {
        Self {
            expression: expression.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SamplePoint::new(1.0, -2.346).to_string(), "(1.00, -2.35)");
        assert_eq!(SamplePoint::root(0.5).to_string(), "(0.50, 0.00)");
    }

    #[test]
    fn test_conversions() {
        let p: SamplePoint = (3.0, 4.0).into();
        assert_eq!(p.distance(&SamplePoint::new(0.0, 0.0)), 5.0);
        let t: (f64, f64) = p.into();
        assert_eq!(t, (3.0, 4.0));
    }

    #[test]
    fn test_series_accessors() {
        let series = Series::new("x", vec![(0.0, 0.0).into(), (1.0, 1.0).into()]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.xs().collect::<Vec<_>>(), vec![0.0, 1.0]);
        assert_eq!(series.ys().sum::<f64>(), 1.0);
    }
}
