use gibbs_scenegraph::marks::{group::SceneGroup, mark::SceneMark, rule::SceneRuleMark, text::SceneTextMark};
use gibbs_scenegraph::types::{TextAlign, TextBaseline};
use serde::{Deserialize, Serialize};

use crate::style::SeriesStyle;

/// Line legends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineLegendConfig {
    pub font_size: f32,

    /// Vertical space above and below each entry
    pub entry_margin: f32,

    /// Padding between the line swatch and the text
    pub text_padding: f32,

    /// Length of the line swatch
    pub line_length: f32,
}

impl Default for LineLegendConfig {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            entry_margin: 2.0,
            text_padding: 4.0,
            line_length: 20.0,
        }
    }
}

impl LineLegendConfig {
    /// Height of one legend row. Line height is approximated from the font size.
    pub fn entry_height(&self) -> f32 {
        self.font_size * 1.2 + self.entry_margin * 2.0
    }
}

/// Stacks one entry per labeled style, top to bottom. Styles without a legend label are skipped.
pub fn make_line_legend(styles: &[SeriesStyle], origin: [f32; 2], config: &LineLegendConfig) -> SceneGroup {
    let entry_height = config.entry_height();

    let entries: Vec<SceneMark> = styles
        .iter()
        .filter_map(|style| style.legend_label.as_deref().map(|label| (style, label)))
        .enumerate()
        .map(|(row, (style, label))| {
            SceneMark::Group(make_line_entry(row as f32 * entry_height, label, style, config))
        })
        .collect();

    SceneGroup {
        name: "legend".to_string(),
        origin,
        marks: entries,
        ..Default::default()
    }
}

fn make_line_entry(y: f32, text: &str, style: &SeriesStyle, config: &LineLegendConfig) -> SceneGroup {
    let center_y = config.entry_height() / 2.0;
    let x1 = config.line_length;

    let line = SceneRuleMark {
        name: "swatch".to_string(),
        x0: 0.0.into(),
        x1: x1.into(),
        y0: center_y.into(),
        y1: center_y.into(),
        stroke: style.color.into(),
        stroke_width: style.stroke_width.into(),
        ..Default::default()
    };

    let label = SceneTextMark {
        name: "label".to_string(),
        text: text.into(),
        x: (x1 + config.text_padding).into(),
        y: center_y.into(),
        align: TextAlign::Left.into(),
        baseline: TextBaseline::Middle.into(),
        font_size: config.font_size.into(),
        ..Default::default()
    };

    SceneGroup {
        name: "legend_entry".to_string(),
        origin: [0.0, y],
        marks: vec![line.into(), label.into()],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gibbs_scenegraph::types::BLACK;

    #[test]
    fn test_legend_skips_unlabeled_styles() {
        let styles = vec![
            SeriesStyle {
                legend_label: Some("Path A".to_string()),
                ..Default::default()
            },
            SeriesStyle::default(),
            SeriesStyle {
                color: [1.0, 0.0, 0.0, 1.0],
                legend_label: Some("Path C".to_string()),
                ..Default::default()
            },
        ];
        let config = LineLegendConfig::default();
        let legend = make_line_legend(&styles, [400.0, 20.0], &config);

        assert_eq!(legend.origin, [400.0, 20.0]);
        assert_eq!(legend.marks.len(), 2);

        let SceneMark::Group(second) = &legend.marks[1] else {
            panic!("expected legend entry group");
        };
        assert_eq!(second.origin, [0.0, config.entry_height()]);

        let SceneMark::Rule(swatch) = &second.marks[0] else {
            panic!("expected swatch");
        };
        assert_eq!(swatch.stroke_iter().next(), Some(&[1.0, 0.0, 0.0, 1.0]));

        let SceneMark::Text(label) = &second.marks[1] else {
            panic!("expected label");
        };
        assert_eq!(label.text_iter().next().map(String::as_str), Some("Path C"));
    }

    #[test]
    fn test_empty_legend() {
        let legend = make_line_legend(&[SeriesStyle::default()], [0.0, 0.0], &Default::default());
        assert!(legend.marks.is_empty());
        assert_eq!(SeriesStyle::default().color, BLACK);
    }
}
