use serde::{Deserialize, Serialize};

use super::mark::{check_channel_len, SceneMark};
use crate::error::GibbsSceneGraphError;
use crate::types::{FontWeight, Rgba, TextAlign, TextBaseline, BLACK};
use crate::value::ScalarOrArray;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneTextMark {
    pub name: String,
    pub len: u32,
    pub text: ScalarOrArray<String>,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub align: ScalarOrArray<TextAlign>,
    pub baseline: ScalarOrArray<TextBaseline>,
    /// Rotation in degrees, clockwise
    pub angle: ScalarOrArray<f32>,
    pub color: ScalarOrArray<Rgba>,
    pub font: ScalarOrArray<String>,
    pub font_size: ScalarOrArray<f32>,
    pub font_weight: ScalarOrArray<FontWeight>,
}

impl SceneTextMark {
    pub fn text_iter(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        self.text.as_iter(self.len as usize)
    }
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize)
    }
    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize)
    }
    pub fn align_iter(&self) -> Box<dyn Iterator<Item = &TextAlign> + '_> {
        self.align.as_iter(self.len as usize)
    }
    pub fn baseline_iter(&self) -> Box<dyn Iterator<Item = &TextBaseline> + '_> {
        self.baseline.as_iter(self.len as usize)
    }
    pub fn angle_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.angle.as_iter(self.len as usize)
    }
    pub fn color_iter(&self) -> Box<dyn Iterator<Item = &Rgba> + '_> {
        self.color.as_iter(self.len as usize)
    }
    pub fn font_size_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.font_size.as_iter(self.len as usize)
    }

    pub fn validate(&self) -> Result<(), GibbsSceneGraphError> {
        check_channel_len(&self.name, "text", self.len, &self.text)?;
        check_channel_len(&self.name, "x", self.len, &self.x)?;
        check_channel_len(&self.name, "y", self.len, &self.y)?;
        check_channel_len(&self.name, "align", self.len, &self.align)?;
        check_channel_len(&self.name, "baseline", self.len, &self.baseline)?;
        check_channel_len(&self.name, "angle", self.len, &self.angle)?;
        check_channel_len(&self.name, "color", self.len, &self.color)?;
        check_channel_len(&self.name, "font_size", self.len, &self.font_size)?;
        Ok(())
    }
}

impl Default for SceneTextMark {
    fn default() -> Self {
        Self {
            name: "text_mark".to_string(),
            len: 1,
            text: String::new().into(),
            x: 0.0.into(),
            y: 0.0.into(),
            align: TextAlign::Left.into(),
            baseline: TextBaseline::Alphabetic.into(),
            angle: 0.0.into(),
            color: BLACK.into(),
            font: "sans-serif".into(),
            font_size: 10.0.into(),
            font_weight: FontWeight::Normal.into(),
        }
    }
}

impl From<SceneTextMark> for SceneMark {
    fn from(mark: SceneTextMark) -> Self {
        SceneMark::Text(mark)
    }
}
