use itertools::izip;
use serde::{Deserialize, Serialize};

use super::mark::{check_channel_len, SceneMark};
use crate::error::GibbsSceneGraphError;
use crate::types::{Rgba, BLACK};
use crate::value::ScalarOrArray;

/// Straight line segments from `(x0, y0)` to `(x1, y1)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRuleMark {
    pub name: String,
    pub len: u32,
    pub x0: ScalarOrArray<f32>,
    pub y0: ScalarOrArray<f32>,
    pub x1: ScalarOrArray<f32>,
    pub y1: ScalarOrArray<f32>,
    pub stroke: ScalarOrArray<Rgba>,
    pub stroke_width: ScalarOrArray<f32>,
    /// Alternating dash and gap lengths in pixels, solid when `None`
    pub stroke_dash: Option<Vec<f32>>,
}

impl SceneRuleMark {
    pub fn x0_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x0.as_iter(self.len as usize)
    }
    pub fn y0_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y0.as_iter(self.len as usize)
    }
    pub fn x1_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x1.as_iter(self.len as usize)
    }
    pub fn y1_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y1.as_iter(self.len as usize)
    }
    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &Rgba> + '_> {
        self.stroke.as_iter(self.len as usize)
    }
    pub fn stroke_width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.stroke_width.as_iter(self.len as usize)
    }

    /// Endpoints of every rule as `[x0, y0, x1, y1]`
    pub fn segments(&self) -> impl Iterator<Item = [f32; 4]> + '_ {
        izip!(self.x0_iter(), self.y0_iter(), self.x1_iter(), self.y1_iter())
            .map(|(x0, y0, x1, y1)| [*x0, *y0, *x1, *y1])
    }

    pub fn validate(&self) -> Result<(), GibbsSceneGraphError> {
        check_channel_len(&self.name, "x0", self.len, &self.x0)?;
        check_channel_len(&self.name, "y0", self.len, &self.y0)?;
        check_channel_len(&self.name, "x1", self.len, &self.x1)?;
        check_channel_len(&self.name, "y1", self.len, &self.y1)?;
        check_channel_len(&self.name, "stroke", self.len, &self.stroke)?;
        check_channel_len(&self.name, "stroke_width", self.len, &self.stroke_width)?;
        Ok(())
    }
}

impl Default for SceneRuleMark {
    fn default() -> Self {
        Self {
            name: "rule_mark".to_string(),
            len: 1,
            x0: 0.0.into(),
            y0: 0.0.into(),
            x1: 0.0.into(),
            y1: 0.0.into(),
            stroke: BLACK.into(),
            stroke_width: 1.0.into(),
            stroke_dash: None,
        }
    }
}

impl From<SceneRuleMark> for SceneMark {
    fn from(mark: SceneRuleMark) -> Self {
        SceneMark::Rule(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_broadcast_scalars() {
        let mark = SceneRuleMark {
            len: 2,
            x0: vec![0.0, 10.0].into(),
            x1: vec![5.0, 15.0].into(),
            y0: 3.0.into(),
            y1: 3.0.into(),
            ..Default::default()
        };
        let segments: Vec<_> = mark.segments().collect();
        assert_eq!(segments, vec![[0.0, 3.0, 5.0, 3.0], [10.0, 3.0, 15.0, 3.0]]);
        assert!(mark.validate().is_ok());
    }

    #[test]
    fn test_validate_length_mismatch() {
        let mark = SceneRuleMark {
            len: 3,
            x0: vec![0.0, 10.0].into(),
            ..Default::default()
        };
        assert_eq!(
            mark.validate(),
            Err(GibbsSceneGraphError::ChannelLengthMismatch {
                mark: "rule_mark".to_string(),
                channel: "x0",
                len: 3,
                actual: 2,
            })
        );
    }
}
