use log::debug;
use serde::{Deserialize, Serialize};

use crate::axis::AxisRange;
use crate::error::GibbsError;
use crate::series::EnergySeries;

/// Shared zero reference and bounds for an overlay of several series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub zero_reference: f64,
    pub global_min: f64,
    pub global_max: f64,
}

impl NormalizationResult {
    pub fn global_range(&self) -> AxisRange {
        AxisRange::new(self.global_min, self.global_max)
    }

    /// Zeroes every series against the shared reference
    pub fn apply(&self, series: &[EnergySeries]) -> Vec<EnergySeries> {
        series.iter().map(|s| s.zeroed(self.zero_reference)).collect()
    }
}

/// Computes a shared zero reference across raw (not yet zeroed) series.
///
/// The reference is the lowest starting energy among all series. The global
/// bounds cover every energy of every series after subtracting it.
pub fn normalize_series(series: &[EnergySeries]) -> Result<NormalizationResult, GibbsError> {
    if series.is_empty() {
        return Err(GibbsError::EmptyInput(
            "normalization needs at least one series".to_string(),
        ));
    }

    let zero_reference = series
        .iter()
        .map(EnergySeries::first_energy)
        .fold(f64::INFINITY, f64::min);

    let (global_min, global_max) = series
        .iter()
        .flat_map(|s| s.energies())
        .map(|e| e - zero_reference)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    debug!(
        "Normalized {} series: zero reference {}, bounds [{}, {}]",
        series.len(),
        zero_reference,
        global_min,
        global_max
    );

    Ok(NormalizationResult {
        zero_reference,
        global_min,
        global_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::EnergyPoint;
    use float_cmp::assert_approx_eq;

    fn series(energies: &[f64]) -> EnergySeries {
        EnergySeries::load(
            energies
                .iter()
                .map(|e| EnergyPoint::new("X", *e))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input() {
        let err = normalize_series(&[]).unwrap_err();
        assert!(matches!(err, GibbsError::EmptyInput(_)));
    }

    #[test]
    fn test_zero_reference_is_min_start() {
        let raw = vec![series(&[3.0, 8.0, -1.0]), series(&[1.0, 2.0])];
        let result = normalize_series(&raw).unwrap();
        assert_eq!(result.zero_reference, 1.0);
        assert_approx_eq!(f64, result.global_min, -2.0);
        assert_approx_eq!(f64, result.global_max, 7.0);

        let zeroed = result.apply(&raw);
        let first: Vec<_> = zeroed[0].energies().collect();
        let second: Vec<_> = zeroed[1].energies().collect();
        assert_eq!(first, vec![2.0, 7.0, -2.0]);
        assert_eq!(second, vec![0.0, 1.0]);
    }

    #[test]
    fn test_single_series_matches_zero_to_first() {
        let raw = vec![series(&[-4.0, -9.0, 2.0])];
        let result = normalize_series(&raw).unwrap();
        assert_eq!(result.zero_reference, -4.0);
        assert_eq!(result.global_range(), AxisRange::new(-5.0, 6.0));
    }
}
