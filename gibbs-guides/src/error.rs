use gibbs_core::GibbsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GibbsGuidesError {
    #[error("Invalid color `{0}`: {1}")]
    InvalidColor(String, String),

    #[error("Style palette is empty")]
    EmptyPalette,

    #[error("Invalid diagram configuration: {0}")]
    InvalidConfig(String),

    #[error("Layout error: {0}")]
    Layout(#[from] GibbsError),
}
