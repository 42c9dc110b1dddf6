pub mod error;
pub mod marks;
pub mod renderer;
pub mod scene_graph;
pub mod types;
pub mod value;
