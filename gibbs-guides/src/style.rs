use css_color_parser::Color;
use gibbs_scenegraph::types::{Rgba, BLACK};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::GibbsGuidesError;

/// How one series is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: Rgba,
    /// Text shown in the legend, series without a label are left out of it
    pub legend_label: Option<String>,
    pub stroke_width: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            legend_label: None,
            stroke_width: 1.5,
        }
    }
}

/// Maps a series index to its style
pub trait StyleSource {
    fn style(&self, series_index: usize) -> SeriesStyle;
}

impl<F: Fn(usize) -> SeriesStyle> StyleSource for F {
    fn style(&self, series_index: usize) -> SeriesStyle {
        self(series_index)
    }
}

/// Explicit styles wrap around when there are more series than styles
impl StyleSource for [SeriesStyle] {
    fn style(&self, series_index: usize) -> SeriesStyle {
        if self.is_empty() {
            return SeriesStyle::default();
        }
        if series_index >= self.len() {
            warn!(
                "Series {} reuses the style of series {}",
                series_index,
                series_index % self.len()
            );
        }
        self[series_index % self.len()].clone()
    }
}

impl StyleSource for Vec<SeriesStyle> {
    fn style(&self, series_index: usize) -> SeriesStyle {
        self.as_slice().style(series_index)
    }
}

/// Ordered list of colors handed out to series by index
#[derive(Debug, Clone, PartialEq)]
pub struct StylePalette {
    colors: Vec<Rgba>,
}

impl StylePalette {
    pub fn new(colors: Vec<Rgba>) -> Result<Self, GibbsGuidesError> {
        if colors.is_empty() {
            return Err(GibbsGuidesError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Palette with a single black entry
    pub fn black() -> Self {
        Self {
            colors: vec![BLACK],
        }
    }

    /// Category10 palette from D3 for categorical data
    pub fn category10() -> Self {
        let colors = [
            "#1f77b4", // Blue
            "#ff7f0e", // Orange
            "#2ca02c", // Green
            "#d62728", // Red
            "#9467bd", // Purple
            "#8c564b", // Brown
            "#e377c2", // Pink
            "#7f7f7f", // Gray
            "#bcbd22", // Olive
            "#17becf", // Cyan
        ]
        .iter()
        .filter_map(|c| parse_color(c).ok())
        .collect();
        Self { colors }
    }

    /// Builds a palette from CSS color strings such as `"#1f77b4"`, `"red"` or `"rgb(0, 0, 255)"`
    pub fn from_css<S: AsRef<str>>(colors: &[S]) -> Result<Self, GibbsGuidesError> {
        let colors = colors
            .iter()
            .map(|c| parse_color(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn color(&self, index: usize) -> Rgba {
        self.colors[index % self.colors.len()]
    }

    /// One style per legend label, colors assigned in palette order
    pub fn styles(&self, legend_labels: &[Option<String>]) -> Vec<SeriesStyle> {
        if legend_labels.len() > self.colors.len() {
            warn!(
                "{} series share a palette of {} colors, colors will repeat",
                legend_labels.len(),
                self.colors.len()
            );
        }
        legend_labels
            .iter()
            .enumerate()
            .map(|(i, label)| SeriesStyle {
                color: self.color(i),
                legend_label: label.clone(),
                ..Default::default()
            })
            .collect()
    }
}

pub fn parse_color(s: &str) -> Result<Rgba, GibbsGuidesError> {
    match s.parse::<Color>() {
        Ok(color) => Ok([
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
            color.a,
        ]),
        Err(e) => Err(GibbsGuidesError::InvalidColor(s.to_string(), format!("{e:?}"))),
    }
}
