use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::axis::AxisRange;
use crate::error::GibbsError;

/// A labeled free energy value. Position within a series is its reaction-coordinate index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPoint {
    pub label: String,
    pub energy: f64,
}

impl EnergyPoint {
    pub fn new(label: impl Into<String>, energy: f64) -> Self {
        Self {
            label: label.into(),
            energy,
        }
    }
}

/// Which energy becomes zero when a series is zeroed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroReference {
    /// Subtract the energy of the first state
    #[default]
    First,
    /// Subtract a caller supplied value, e.g. a reference shared across series
    Value(f64),
}

/// Ordered, non-empty sequence of energy points for one mechanism.
///
/// Deserialization goes through [`EnergySeries::load`], so a series read back
/// from JSON holds the same guarantees as one built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesRecord")]
pub struct EnergySeries {
    points: Vec<EnergyPoint>,
}

#[derive(Deserialize)]
struct SeriesRecord {
    points: Vec<EnergyPoint>,
}

impl TryFrom<SeriesRecord> for EnergySeries {
    type Error = GibbsError;

    fn try_from(record: SeriesRecord) -> Result<Self, Self::Error> {
        EnergySeries::load(record.points)
    }
}

impl EnergySeries {
    /// Builds a series from ordered points.
    ///
    /// Fails with [`GibbsError::EmptyInput`] when `points` is empty and with
    /// [`GibbsError::MalformedInput`] when an energy is NaN or infinite. The
    /// reported line is the 1-based position of the offending point.
    pub fn load(points: Vec<EnergyPoint>) -> Result<Self, GibbsError> {
        if points.is_empty() {
            return Err(GibbsError::EmptyInput(
                "an energy series needs at least one point".to_string(),
            ));
        }

        if let Some((i, point)) = points.iter().find_position(|p| !p.energy.is_finite()) {
            return Err(GibbsError::MalformedInput {
                line: i + 1,
                reason: format!(
                    "energy for label {:?} is not a finite number: {}",
                    point.label, point.energy
                ),
            });
        }

        Ok(Self { points })
    }

    /// Returns a copy of this series with `reference_value` subtracted from every energy
    pub fn zeroed(&self, reference_value: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| EnergyPoint::new(p.label.clone(), p.energy - reference_value))
                .collect(),
        }
    }

    pub fn zeroed_with(&self, reference: ZeroReference) -> Self {
        match reference {
            ZeroReference::First => self.zeroed(self.first_energy()),
            ZeroReference::Value(value) => self.zeroed(value),
        }
    }

    pub fn points(&self) -> &[EnergyPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a loaded series, kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn energies(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.energy)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.label.as_str())
    }

    /// Energy of the starting state
    pub fn first_energy(&self) -> f64 {
        // `load` guarantees at least one point
        self.points[0].energy
    }

    /// Smallest and largest energy in the series
    pub fn energy_range(&self) -> AxisRange {
        match self.energies().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => AxisRange::new(0.0, 0.0),
            MinMaxResult::OneElement(v) => AxisRange::new(v, v),
            MinMaxResult::MinMax(min, max) => AxisRange::new(min, max),
        }
    }
}
