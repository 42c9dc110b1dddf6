use gibbs_core::{scale_axis, LayoutConfig, LayoutResult, PreparedProfiles};
use gibbs_scenegraph::marks::{group::SceneGroup, mark::SceneMark, rule::SceneRuleMark, text::SceneTextMark};
use gibbs_scenegraph::scene_graph::SceneGraph;
use gibbs_scenegraph::types::{TextAlign, TextBaseline};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::axis::{make_axis, AxisConfig, AxisOrientation};
use crate::error::GibbsGuidesError;
use crate::legend::{make_line_legend, LineLegendConfig};
use crate::scale::LinearScale;
use crate::style::{SeriesStyle, StyleSource};

/// Horizontal breathing room around the first and last plateau
const X_PADDING_FACTOR: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 50.0,
            left: 70.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
    pub y_axis: AxisConfig,
    pub x_axis: AxisConfig,
    /// Factor applied to the vertical data range to keep labels inside the frame
    pub y_scaling: f64,
    /// Dash pattern of the connectors between plateaus
    pub connector_dash: Vec<f32>,
    pub label_font_size: f32,
    pub layout: LayoutConfig,
    pub legend: LineLegendConfig,
    /// Space reserved right of the plot area when a legend is drawn
    pub legend_width: f32,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            margin: Default::default(),
            y_axis: AxisConfig {
                title: "ΔG (kcal/mol)".to_string(),
                title_font_size: 16.0,
                title_offset: 40.0,
                ..Default::default()
            },
            x_axis: AxisConfig {
                title: "Reaction Coordinate".to_string(),
                title_font_size: 14.0,
                title_offset: 30.0,
                show_ticks: false,
                ..Default::default()
            },
            y_scaling: 1.2,
            connector_dash: vec![6.0, 4.0],
            label_font_size: 10.0,
            layout: Default::default(),
            legend: Default::default(),
            legend_width: 120.0,
        }
    }
}

impl DiagramConfig {
    pub fn validate(&self) -> Result<(), GibbsGuidesError> {
        self.layout.validate()?;

        if !(self.y_scaling > 0.0 && self.y_scaling.is_finite()) {
            return Err(GibbsGuidesError::InvalidConfig(format!(
                "y_scaling must be a positive number, got {}",
                self.y_scaling
            )));
        }
        if self.plot_width(true) <= 0.0 || self.plot_height() <= 0.0 {
            return Err(GibbsGuidesError::InvalidConfig(format!(
                "canvas {}x{} leaves no room for the plot area",
                self.width, self.height
            )));
        }
        Ok(())
    }

    fn plot_width(&self, with_legend: bool) -> f32 {
        let legend = if with_legend { self.legend_width } else { 0.0 };
        self.width - self.margin.left - self.margin.right - legend
    }

    fn plot_height(&self) -> f32 {
        self.height - self.margin.top - self.margin.bottom
    }
}

/// Assembles the scene for one or more laid out profiles.
///
/// Plateaus are solid rules, connectors dashed rules, and state labels are
/// centered on their anchors. A legend is added when more than one series
/// carries a legend label.
pub fn make_diagram(
    prepared: &PreparedProfiles,
    styles: &dyn StyleSource,
    config: &DiagramConfig,
) -> Result<SceneGraph, GibbsGuidesError> {
    config.validate()?;

    let styles: Vec<SeriesStyle> = (0..prepared.len()).map(|i| styles.style(i)).collect();
    let labeled = styles.iter().filter(|s| s.legend_label.is_some()).count();
    let show_legend = prepared.len() > 1 && labeled > 0;

    let plot_width = config.plot_width(show_legend);
    let plot_height = config.plot_height();
    let origin = [config.margin.left, config.margin.top];

    let x_domain = scale_axis(prepared.x_range, X_PADDING_FACTOR);
    let x_scale = LinearScale::from_axis_range(x_domain, (0.0, plot_width));
    let y_scale = LinearScale::from_axis_range(prepared.y_range, (plot_height, 0.0));

    let series_groups = prepared
        .layouts
        .iter()
        .zip(&styles)
        .enumerate()
        .map(|(i, (layout, style))| {
            SceneMark::Group(make_series_group(i, layout, style, &x_scale, &y_scale, config))
        })
        .collect_vec();

    let mut marks: Vec<SceneMark> = vec![
        make_axis(&y_scale, origin, AxisOrientation::Left, &config.y_axis).into(),
        make_axis(
            &x_scale,
            origin,
            AxisOrientation::Bottom {
                height: plot_height,
            },
            &config.x_axis,
        )
        .into(),
        SceneGroup {
            name: "plot".to_string(),
            origin,
            marks: series_groups,
            ..Default::default()
        }
        .into(),
    ];

    if show_legend {
        let legend_origin = [origin[0] + plot_width + config.margin.right, origin[1]];
        marks.push(make_line_legend(&styles, legend_origin, &config.legend).into());
    }

    debug!(
        "Built diagram with {} series on a {}x{} plot area",
        prepared.len(),
        plot_width,
        plot_height
    );

    Ok(SceneGraph {
        marks,
        width: config.width,
        height: config.height,
        origin: [0.0, 0.0],
    })
}

fn make_series_group(
    index: usize,
    layout: &LayoutResult,
    style: &SeriesStyle,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    config: &DiagramConfig,
) -> SceneGroup {
    let plateaus = &layout.plateau_segments;
    let connectors = &layout.connector_segments;
    let anchors = &layout.label_anchors;

    let plateau_mark = SceneRuleMark {
        name: "plateaus".to_string(),
        len: plateaus.len() as u32,
        x0: x_scale.scale_all(plateaus.iter().map(|s| s.x_start)).into(),
        x1: x_scale.scale_all(plateaus.iter().map(|s| s.x_end)).into(),
        y0: y_scale.scale_all(plateaus.iter().map(|s| s.y_start)).into(),
        y1: y_scale.scale_all(plateaus.iter().map(|s| s.y_end)).into(),
        stroke: style.color.into(),
        stroke_width: style.stroke_width.into(),
        ..Default::default()
    };

    let connector_mark = SceneRuleMark {
        name: "connectors".to_string(),
        len: connectors.len() as u32,
        x0: x_scale.scale_all(connectors.iter().map(|s| s.x_start)).into(),
        x1: x_scale.scale_all(connectors.iter().map(|s| s.x_end)).into(),
        y0: y_scale.scale_all(connectors.iter().map(|s| s.y_start)).into(),
        y1: y_scale.scale_all(connectors.iter().map(|s| s.y_end)).into(),
        stroke: style.color.into(),
        stroke_width: style.stroke_width.into(),
        stroke_dash: Some(config.connector_dash.clone()),
        ..Default::default()
    };

    let label_mark = SceneTextMark {
        name: "labels".to_string(),
        len: anchors.len() as u32,
        text: anchors.iter().map(|a| a.text.clone()).collect_vec().into(),
        x: x_scale.scale_all(anchors.iter().map(|a| a.x)).into(),
        y: y_scale.scale_all(anchors.iter().map(|a| a.y)).into(),
        align: TextAlign::Center.into(),
        baseline: TextBaseline::Middle.into(),
        font_size: config.label_font_size.into(),
        ..Default::default()
    };

    SceneGroup {
        name: format!("series_{index}"),
        marks: vec![plateau_mark.into(), connector_mark.into(), label_mark.into()],
        ..Default::default()
    }
}
