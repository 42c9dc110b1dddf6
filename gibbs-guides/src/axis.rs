use gibbs_scenegraph::marks::{group::SceneGroup, rule::SceneRuleMark, text::SceneTextMark};
use gibbs_scenegraph::types::{FontWeight, TextAlign, TextBaseline, BLACK};
use serde::{Deserialize, Serialize};

use crate::scale::LinearScale;

/// Which side of the plot area an axis is drawn on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisOrientation {
    Left,
    /// Bottom edge of a plot area that is `height` pixels tall
    Bottom { height: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub title: String,
    pub title_font_size: f32,
    /// Distance from the axis line to the title anchor
    pub title_offset: f32,
    pub show_ticks: bool,
    pub tick_count: f64,
    pub tick_size: f32,
    pub tick_font_size: f32,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_font_size: 14.0,
            title_offset: 36.0,
            show_ticks: true,
            tick_count: 6.0,
            tick_size: 5.0,
            tick_font_size: 10.0,
        }
    }
}

pub fn make_axis(
    scale: &LinearScale,
    origin: [f32; 2],
    orientation: AxisOrientation,
    config: &AxisConfig,
) -> SceneGroup {
    let mut group = SceneGroup {
        name: match orientation {
            AxisOrientation::Left => "y_axis".to_string(),
            AxisOrientation::Bottom { .. } => "x_axis".to_string(),
        },
        origin,
        ..Default::default()
    };

    let (r0, r1) = scale.range();
    let (range_lo, range_hi) = (r0.min(r1), r0.max(r1));
    let range_mid = (range_lo + range_hi) / 2.0;

    let ticks = if config.show_ticks {
        scale.ticks(Some(config.tick_count))
    } else {
        vec![]
    };
    let tick_pos = scale.scale_all(ticks.iter().copied());
    let tick_text = format_ticks(&ticks);
    let label_gap = config.tick_size + 3.0;

    match orientation {
        AxisOrientation::Left => {
            group.marks.push(
                SceneRuleMark {
                    name: "domain".to_string(),
                    y0: range_lo.into(),
                    y1: range_hi.into(),
                    ..Default::default()
                }
                .into(),
            );

            if !ticks.is_empty() {
                group.marks.push(
                    SceneRuleMark {
                        name: "ticks".to_string(),
                        len: ticks.len() as u32,
                        x0: 0.0.into(),
                        x1: (-config.tick_size).into(),
                        y0: tick_pos.clone().into(),
                        y1: tick_pos.clone().into(),
                        ..Default::default()
                    }
                    .into(),
                );
                group.marks.push(
                    SceneTextMark {
                        name: "tick_labels".to_string(),
                        len: ticks.len() as u32,
                        text: tick_text.into(),
                        x: (-label_gap).into(),
                        y: tick_pos.into(),
                        align: TextAlign::Right.into(),
                        baseline: TextBaseline::Middle.into(),
                        font_size: config.tick_font_size.into(),
                        ..Default::default()
                    }
                    .into(),
                );
            }

            if !config.title.is_empty() {
                group.marks.push(
                    SceneTextMark {
                        name: "title".to_string(),
                        text: config.title.as_str().into(),
                        x: (-config.title_offset).into(),
                        y: range_mid.into(),
                        align: TextAlign::Center.into(),
                        baseline: TextBaseline::Bottom.into(),
                        angle: (-90.0).into(),
                        font_size: config.title_font_size.into(),
                        font_weight: FontWeight::Normal.into(),
                        color: BLACK.into(),
                        ..Default::default()
                    }
                    .into(),
                );
            }
        }
        AxisOrientation::Bottom { height } => {
            group.marks.push(
                SceneRuleMark {
                    name: "domain".to_string(),
                    x0: range_lo.into(),
                    x1: range_hi.into(),
                    y0: height.into(),
                    y1: height.into(),
                    ..Default::default()
                }
                .into(),
            );

            if !ticks.is_empty() {
                group.marks.push(
                    SceneRuleMark {
                        name: "ticks".to_string(),
                        len: ticks.len() as u32,
                        x0: tick_pos.clone().into(),
                        x1: tick_pos.clone().into(),
                        y0: height.into(),
                        y1: (height + config.tick_size).into(),
                        ..Default::default()
                    }
                    .into(),
                );
                group.marks.push(
                    SceneTextMark {
                        name: "tick_labels".to_string(),
                        len: ticks.len() as u32,
                        text: tick_text.into(),
                        x: tick_pos.into(),
                        y: (height + label_gap).into(),
                        align: TextAlign::Center.into(),
                        baseline: TextBaseline::Top.into(),
                        font_size: config.tick_font_size.into(),
                        ..Default::default()
                    }
                    .into(),
                );
            }

            if !config.title.is_empty() {
                group.marks.push(
                    SceneTextMark {
                        name: "title".to_string(),
                        text: config.title.as_str().into(),
                        x: range_mid.into(),
                        y: (height + config.title_offset).into(),
                        align: TextAlign::Center.into(),
                        baseline: TextBaseline::Bottom.into(),
                        font_size: config.title_font_size.into(),
                        ..Default::default()
                    }
                    .into(),
                );
            }
        }
    }

    group
}

/// Formats tick values with just enough decimals to tell neighbours apart
fn format_ticks(ticks: &[f64]) -> Vec<String> {
    let step = match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 1.0,
    };
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    ticks
        .iter()
        .map(|t| {
            let s = format!("{t:.decimals$}");
            // Avoid "-0" for ticks that round to zero
            if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
                s.trim_start_matches('-').to_string()
            } else {
                s
            }
        })
        .collect()
}
