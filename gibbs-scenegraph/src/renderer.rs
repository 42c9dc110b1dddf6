use crate::scene_graph::SceneGraph;

/// Back end that consumes a finished scene graph, e.g. a rasterizer or a file writer
pub trait SceneRenderer {
    type Error;

    fn render(&mut self, scene: &SceneGraph) -> Result<(), Self::Error>;
}
