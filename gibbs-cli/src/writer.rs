use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use gibbs_scenegraph::renderer::SceneRenderer;
use gibbs_scenegraph::scene_graph::SceneGraph;
use serde::Serialize;

use crate::error::GibbsCliError;

/// Opens `path` for writing, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, GibbsCliError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

pub fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T, pretty: bool) -> Result<(), GibbsCliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Scene back end that serializes the scene graph as JSON
pub struct JsonSceneWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSceneWriter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SceneRenderer for JsonSceneWriter<W> {
    type Error = GibbsCliError;

    fn render(&mut self, scene: &SceneGraph) -> Result<(), Self::Error> {
        scene.validate()?;
        write_json(&mut self.writer, scene, self.pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_scene_writer() {
        let scene = SceneGraph {
            marks: vec![],
            width: 10.0,
            height: 20.0,
            origin: [0.0, 0.0],
        };
        let mut writer = JsonSceneWriter::new(Vec::new(), false);
        writer.render(&scene).unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "{\"marks\":[],\"width\":10.0,\"height\":20.0,\"origin\":[0.0,0.0]}\n");
    }
}
