use gibbs_core::AxisRange;

use crate::array;

/// Maps data values from a domain onto a pixel range.
/// Degenerate domains map every value to the start of the range.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn from_axis_range(domain: AxisRange, range: (f32, f32)) -> Self {
        Self::new((domain.min, domain.max), range)
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    fn is_degenerate(&self) -> bool {
        let (d0, d1) = self.domain;
        d0 == d1 || d0.is_nan() || d1.is_nan()
    }

    pub fn scale(&self, value: f64) -> f32 {
        if self.is_degenerate() {
            return self.range.0;
        }
        let (d0, d1) = self.domain;
        let (r0, r1) = (self.range.0 as f64, self.range.1 as f64);
        let t = (value - d0) / (d1 - d0);
        (r0 + t * (r1 - r0)) as f32
    }

    pub fn scale_all(&self, values: impl IntoIterator<Item = f64>) -> Vec<f32> {
        values.into_iter().map(|v| self.scale(v)).collect()
    }

    /// Nicely rounded tick values inside the domain
    pub fn ticks(&self, count: Option<f64>) -> Vec<f64> {
        array::ticks(self.domain.0, self.domain.1, count.unwrap_or(10.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_scale_inverted_pixel_range() {
        // y axis: larger energies towards the top of the canvas
        let scale = LinearScale::new((-10.0, 10.0), (200.0, 0.0));
        assert_approx_eq!(f32, scale.scale(-10.0), 200.0);
        assert_approx_eq!(f32, scale.scale(0.0), 100.0);
        assert_approx_eq!(f32, scale.scale(10.0), 0.0);
        assert_approx_eq!(f32, scale.scale(15.0), -50.0);
    }

    #[test]
    fn test_from_axis_range() {
        let scale = LinearScale::from_axis_range(AxisRange::new(0.0, 4.0), (0.0, 400.0));
        assert_approx_eq!(f32, scale.scale(1.0), 100.0);
        assert_approx_eq!(f32, scale.scale(2.5), 250.0);
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = LinearScale::new((3.0, 3.0), (10.0, 20.0));
        assert_eq!(scale.scale(3.0), 10.0);
        assert_eq!(scale.scale_all([1.0, 5.0]), vec![10.0, 10.0]);
    }

    #[test]
    fn test_ticks_default_count() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0));
        assert_eq!(scale.ticks(None).len(), 11);
        assert_eq!(scale.ticks(Some(2.0)), vec![0.0, 50.0, 100.0]);
    }
}
