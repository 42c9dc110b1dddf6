pub mod array;
pub mod axis;
pub mod diagram;
pub mod error;
pub mod legend;
pub mod scale;
pub mod style;
