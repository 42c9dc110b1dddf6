use log::debug;
use serde::{Deserialize, Serialize};

use crate::axis::AxisRange;
use crate::error::GibbsError;
use crate::series::EnergySeries;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal length of each state plateau
    pub plateau_width: f64,

    /// Distance between the starts of successive plateaus
    pub connector_width: f64,

    /// Label offset as a fraction of the series energy span
    pub label_offset_fraction: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            plateau_width: 0.5,
            connector_width: 1.0,
            label_offset_fraction: 0.05,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), GibbsError> {
        // Written so that NaN widths fail as well
        let valid = self.plateau_width > 0.0 && self.connector_width > self.plateau_width;
        if !valid {
            return Err(GibbsError::InvalidWidth {
                plateau_width: self.plateau_width,
                connector_width: self.connector_width,
            });
        }
        Ok(())
    }
}

/// Two-point line segment in data coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Geometry for one series, one entry per state (connectors: one per adjacent pair)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub plateau_segments: Vec<Segment>,
    pub connector_segments: Vec<Segment>,
    pub label_anchors: Vec<LabelAnchor>,
}

impl LayoutResult {
    /// Vertical extent covered by the plateaus. Label anchors are excluded.
    pub fn y_extent(&self) -> AxisRange {
        self.plateau_segments
            .iter()
            .map(|s| AxisRange::new(s.y_start, s.y_start))
            .reduce(|a, b| a.union(&b))
            .unwrap_or(AxisRange::new(0.0, 0.0))
    }

    /// Horizontal extent from the start of the first plateau to the end of the last
    pub fn x_extent(&self) -> AxisRange {
        match (self.plateau_segments.first(), self.plateau_segments.last()) {
            (Some(first), Some(last)) => AxisRange::new(first.x_start, last.x_end),
            _ => AxisRange::new(0.0, 0.0),
        }
    }
}

/// Converts a series into plateau segments, connector segments and label anchors.
///
/// Plateau `i` spans `[i * connector_width, i * connector_width + plateau_width]`
/// at height `energies[i]`. Connector `i` joins the right end of plateau `i` to
/// the left end of plateau `i + 1`. Label `i` sits at the middle of plateau `i`,
/// bumped by `label_offset_fraction * (max - min)`: below the line for even `i`
/// and above it for odd `i`.
pub fn compute_layout(
    series: &EnergySeries,
    config: &LayoutConfig,
) -> Result<LayoutResult, GibbsError> {
    config.validate()?;

    let LayoutConfig {
        plateau_width,
        connector_width,
        label_offset_fraction,
    } = *config;

    let bump = label_offset_fraction * series.energy_range().span();

    let plateau_segments: Vec<Segment> = series
        .energies()
        .enumerate()
        .map(|(i, energy)| {
            let x_start = i as f64 * connector_width;
            Segment {
                x_start,
                x_end: x_start + plateau_width,
                y_start: energy,
                y_end: energy,
            }
        })
        .collect();

    let connector_segments: Vec<Segment> = plateau_segments
        .windows(2)
        .map(|pair| Segment {
            x_start: pair[0].x_end,
            x_end: pair[1].x_start,
            y_start: pair[0].y_end,
            y_end: pair[1].y_start,
        })
        .collect();

    let label_anchors: Vec<LabelAnchor> = plateau_segments
        .iter()
        .zip(series.labels())
        .enumerate()
        .map(|(i, (plateau, label))| {
            let offset = if i % 2 == 0 { -bump } else { bump };
            LabelAnchor {
                x: 0.5 * (plateau.x_start + plateau.x_end),
                y: 0.5 * (plateau.y_start + plateau.y_end) + offset,
                text: label.to_string(),
            }
        })
        .collect();

    debug!(
        "Laid out {} plateaus and {} connectors with label bump {}",
        plateau_segments.len(),
        connector_segments.len(),
        bump
    );

    Ok(LayoutResult {
        plateau_segments,
        connector_segments,
        label_anchors,
    })
}
