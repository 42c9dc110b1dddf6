use serde::{Deserialize, Serialize};

use crate::marks::mark::SceneMark;

/// Marks positioned relative to a shared origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGroup {
    pub name: String,
    pub origin: [f32; 2],
    pub marks: Vec<SceneMark>,
}

impl SceneGroup {
    /// Index paths of every group nested below this one, depth first
    pub fn group_paths(&self) -> Vec<Vec<usize>> {
        group_paths(&self.marks)
    }
}

/// Index paths of every group in `marks` and below, parents before children
pub(crate) fn group_paths(marks: &[SceneMark]) -> Vec<Vec<usize>> {
    let mut paths = vec![];
    for (index, mark) in marks.iter().enumerate() {
        let SceneMark::Group(group) = mark else {
            continue;
        };
        paths.push(vec![index]);
        for sub_path in group.group_paths() {
            let mut path = vec![index];
            path.extend(sub_path);
            paths.push(path);
        }
    }
    paths
}

impl Default for SceneGroup {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            origin: [0.0, 0.0],
            marks: vec![],
        }
    }
}

impl From<SceneGroup> for SceneMark {
    fn from(mark: SceneGroup) -> Self {
        SceneMark::Group(mark)
    }
}
