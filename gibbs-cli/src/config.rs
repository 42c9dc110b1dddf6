use std::fs;
use std::path::Path;

use gibbs_core::ParseOptions;
use gibbs_guides::diagram::DiagramConfig;
use serde::{Deserialize, Serialize};

use crate::error::GibbsCliError;

/// Settings read from `--config`, any field left out keeps its default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GibbsConfig {
    pub parse: ParseOptions,
    pub diagram: DiagramConfig,
}

impl GibbsConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, GibbsCliError> {
        let content = fs::read_to_string(path).map_err(|source| GibbsCliError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
