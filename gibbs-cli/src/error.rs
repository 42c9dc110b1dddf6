use std::path::PathBuf;

use gibbs_core::GibbsError;
use gibbs_guides::error::GibbsGuidesError;
use gibbs_scenegraph::error::GibbsSceneGraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GibbsCliError {
    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    InvalidInput { path: PathBuf, source: GibbsError },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] GibbsError),

    #[error(transparent)]
    Guides(#[from] GibbsGuidesError),

    #[error(transparent)]
    SceneGraph(#[from] GibbsSceneGraphError),
}
