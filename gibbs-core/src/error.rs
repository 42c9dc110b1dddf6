use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GibbsError {
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error(
        "Invalid layout widths: plateau width ({plateau_width}) must be positive and smaller than connector width ({connector_width})"
    )]
    InvalidWidth {
        plateau_width: f64,
        connector_width: f64,
    },

    #[error("Invalid axis scaling factor {0}: must be a positive number")]
    InvalidScaling(f64),
}
