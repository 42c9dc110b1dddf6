use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::GibbsSceneGraphError;
use crate::marks::group::{self, SceneGroup};
use crate::marks::mark::SceneMark;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub marks: Vec<SceneMark>,
    pub width: f32,
    pub height: f32,
    pub origin: [f32; 2],
}

impl SceneGraph {
    pub fn get_mark(&self, mark_path: &[usize]) -> Option<&SceneMark> {
        // empty path is the root, which is not a mark
        let (first, rest) = mark_path.split_first()?;
        let mut child = self.marks.get(*first)?;
        for index in rest {
            child = child.children().get(*index)?;
        }
        Some(child)
    }

    /// Returns all of the group paths in the scene graph
    pub fn group_paths(&self) -> Vec<Vec<usize>> {
        group::group_paths(&self.marks)
    }

    /// Returns mapping from the names of each named group to their path
    pub fn group_names(&self) -> HashMap<String, Vec<usize>> {
        let mut names = HashMap::new();
        for path in self.group_paths() {
            let Some(SceneMark::Group(group)) = self.get_mark(&path) else {
                continue;
            };
            if !group.name.is_empty() {
                names.insert(group.name.clone(), path);
            }
        }
        names
    }

    /// Looks up a group anywhere in the tree by name
    pub fn find_group(&self, name: &str) -> Option<&SceneGroup> {
        let path = self.group_names().remove(name)?;
        match self.get_mark(&path)? {
            SceneMark::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Checks that every array channel matches the length of its mark
    pub fn validate(&self) -> Result<(), GibbsSceneGraphError> {
        self.marks.iter().try_for_each(SceneMark::validate)
    }
}
