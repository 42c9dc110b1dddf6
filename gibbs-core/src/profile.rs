use log::debug;
use serde::{Deserialize, Serialize};

use crate::axis::{scale_axis, AxisRange};
use crate::error::GibbsError;
use crate::layout::{compute_layout, LayoutConfig, LayoutResult};
use crate::normalize::{normalize_series, NormalizationResult};
use crate::series::EnergySeries;

/// Half-height given to a flat y-range before scaling
const FLAT_RANGE_PAD: f64 = 0.5;

/// Laid out series sharing one zero reference and one set of display bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedProfiles {
    pub normalization: NormalizationResult,
    /// Zeroed series, in input order
    pub series: Vec<EnergySeries>,
    /// One layout per series, in input order
    pub layouts: Vec<LayoutResult>,
    /// Combined horizontal extent of all plateaus
    pub x_range: AxisRange,
    /// Combined plateau extent expanded by the y scaling factor
    pub y_range: AxisRange,
}

impl PreparedProfiles {
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

/// Normalizes, zeroes and lays out raw series, then computes display bounds.
///
/// With a single series the shared reference is its own first energy, so the
/// result is the usual "zero to first state" diagram. Fails with
/// [`GibbsError::InvalidScaling`] unless `y_scaling` is positive and finite.
pub fn prepare_profiles(
    raw: &[EnergySeries],
    config: &LayoutConfig,
    y_scaling: f64,
) -> Result<PreparedProfiles, GibbsError> {
    config.validate()?;
    if !(y_scaling > 0.0 && y_scaling.is_finite()) {
        return Err(GibbsError::InvalidScaling(y_scaling));
    }
    let normalization = normalize_series(raw)?;
    let series = normalization.apply(raw);

    let layouts = series
        .iter()
        .map(|s| compute_layout(s, config))
        .collect::<Result<Vec<_>, _>>()?;

    let x_range = combined_range(layouts.iter().map(LayoutResult::x_extent));
    let data_range = combined_range(layouts.iter().map(LayoutResult::y_extent));
    let y_range = scale_axis(data_range.nonsingular(FLAT_RANGE_PAD), y_scaling);

    debug!("Prepared {} profiles, y range {:?}", layouts.len(), y_range);

    Ok(PreparedProfiles {
        normalization,
        series,
        layouts,
        x_range,
        y_range,
    })
}

fn combined_range(ranges: impl Iterator<Item = AxisRange>) -> AxisRange {
    ranges
        .reduce(|a, b| a.union(&b))
        .unwrap_or(AxisRange::new(0.0, 0.0))
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
    fn test_single_series_zeroes_to_first() {
        let prepared =
            prepare_profiles(&[series(&[5.0, 15.0, -5.0])], &Default::default(), 1.0).unwrap();
        let energies: Vec<_> = prepared.series[0].energies().collect();
        assert_eq!(energies, vec![0.0, 10.0, -10.0]);
        assert_eq!(prepared.y_range, AxisRange::new(-10.0, 10.0));
        assert_eq!(prepared.x_range, AxisRange::new(0.0, 2.5));
    }

    #[test]
    fn test_overlay_shares_reference_and_bounds() {
        let raw = [series(&[3.0, 13.0]), series(&[1.0, -1.0, 4.0, 0.0])];
        let prepared = prepare_profiles(&raw, &Default::default(), 1.2).unwrap();
        assert_eq!(prepared.len(), 2);
        assert_eq!(prepared.normalization.zero_reference, 1.0);

        // Plateau extent is [-2, 12], center 5, half span 7 * 1.2
        assert_approx_eq!(f64, prepared.y_range.min, 5.0 - 8.4);
        assert_approx_eq!(f64, prepared.y_range.max, 5.0 + 8.4);
        assert_eq!(prepared.x_range, AxisRange::new(0.0, 3.5));
    }

    #[test]
    fn test_flat_series_gets_nonzero_range() {
        let prepared = prepare_profiles(&[series(&[2.0, 2.0])], &Default::default(), 1.2).unwrap();
        assert_approx_eq!(f64, prepared.y_range.min, -0.6);
        assert_approx_eq!(f64, prepared.y_range.max, 0.6);
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            prepare_profiles(&[], &Default::default(), 1.2),
            Err(GibbsError::EmptyInput(_))
        ));

        let config = LayoutConfig {
            plateau_width: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            prepare_profiles(&[series(&[1.0])], &config, 1.2),
            Err(GibbsError::InvalidWidth { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_scaling() {
        for y_scaling in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = prepare_profiles(&[series(&[0.0, 4.0])], &Default::default(), y_scaling)
                .unwrap_err();
            assert!(matches!(err, GibbsError::InvalidScaling(_)));
        }
    }
}
