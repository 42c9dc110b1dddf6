use serde::{Deserialize, Serialize};

use crate::error::GibbsSceneGraphError;
use crate::marks::group::SceneGroup;
use crate::marks::rule::SceneRuleMark;
use crate::marks::text::SceneTextMark;
use crate::value::ScalarOrArray;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneMark {
    Rule(SceneRuleMark),
    Text(SceneTextMark),
    Group(SceneGroup),
}

impl SceneMark {
    pub fn children(&self) -> &[SceneMark] {
        match self {
            Self::Group(mark) => &mark.marks,
            _ => &[],
        }
    }

    pub fn validate(&self) -> Result<(), GibbsSceneGraphError> {
        match self {
            Self::Rule(mark) => mark.validate(),
            Self::Text(mark) => mark.validate(),
            Self::Group(mark) => mark.marks.iter().try_for_each(SceneMark::validate),
        }
    }
}

pub(crate) fn check_channel_len<T: Clone>(
    mark: &str,
    channel: &'static str,
    len: u32,
    value: &ScalarOrArray<T>,
) -> Result<(), GibbsSceneGraphError> {
    match value.array_len() {
        Some(actual) if actual != len as usize => Err(GibbsSceneGraphError::ChannelLengthMismatch {
            mark: mark.to_string(),
            channel,
            len,
            actual,
        }),
        _ => Ok(()),
    }
}
