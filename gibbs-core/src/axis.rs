use serde::{Deserialize, Serialize};

/// Closed numeric interval along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Smallest range covering both `self` and `other`
    pub fn union(&self, other: &AxisRange) -> AxisRange {
        AxisRange {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Widens a zero-span range to `pad` on each side of its center.
    /// Ranges with a positive span are returned unchanged.
    pub fn nonsingular(&self, pad: f64) -> AxisRange {
        if self.span() > 0.0 {
            *self
        } else {
            let center = self.center();
            AxisRange::new(center - pad, center + pad)
        }
    }
}

/// Expands (or shrinks) `range` symmetrically about its center by `factor`.
///
/// A factor of 1.2 reserves 20% extra room that keeps labels from being
/// clipped by the plot frame. `factor` must be positive; a factor below one
/// returns a range narrower than the input.
pub fn scale_axis(range: AxisRange, factor: f64) -> AxisRange {
    let center = range.center();
    let half_span = (range.max - center) * factor;
    AxisRange {
        min: center - half_span,
        max: center + half_span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_scale_identity() {
        let scaled = scale_axis(AxisRange::new(0.0, 10.0), 1.0);
        assert_eq!(scaled, AxisRange::new(0.0, 10.0));
    }

    #[test]
    fn test_scale_default_margin() {
        let scaled = scale_axis(AxisRange::new(0.0, 10.0), 1.2);
        assert_approx_eq!(f64, scaled.min, -1.0);
        assert_approx_eq!(f64, scaled.max, 11.0);
    }

    #[test]
    fn test_scale_shrink() {
        let scaled = scale_axis(AxisRange::new(-4.0, 4.0), 0.5);
        assert_approx_eq!(f64, scaled.min, -2.0);
        assert_approx_eq!(f64, scaled.max, 2.0);
    }

    #[test]
    fn test_scale_preserves_center() {
        let range = AxisRange::new(-13.0, 2.0);
        let scaled = scale_axis(range, 1.7);
        assert_approx_eq!(f64, scaled.center(), range.center());
    }

    #[test]
    fn test_union() {
        let a = AxisRange::new(-1.0, 3.0);
        let b = AxisRange::new(0.0, 5.0);
        assert_eq!(a.union(&b), AxisRange::new(-1.0, 5.0));
    }

    #[test]
    fn test_nonsingular() {
        assert_eq!(
            AxisRange::new(2.0, 2.0).nonsingular(0.5),
            AxisRange::new(1.5, 2.5)
        );
        assert_eq!(
            AxisRange::new(0.0, 1.0).nonsingular(0.5),
            AxisRange::new(0.0, 1.0)
        );
    }
}
