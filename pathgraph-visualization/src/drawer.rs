//! Loading a PATHGRAPH file and drawing its links

use crate::error::{DrawError, Result};
use crate::renderer::{LineSegment, SegmentSink};
use pathgraph_core::PathGraph;
use pathgraph_io::{PathGraphReadOptions, PathGraphReader};
use std::path::{Path, PathBuf};

/// Draws the graph stored in one PATHGRAPH file.
///
/// The whole file is parsed and validated before the first segment reaches
/// the sink, so a damaged file draws nothing rather than part of the graph.
#[derive(Debug, Clone)]
pub struct GraphDrawer {
    path: PathBuf,
    options: PathGraphReadOptions,
}

impl GraphDrawer {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            options: PathGraphReadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PathGraphReadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the graph without drawing it
    pub fn load(&self) -> Result<PathGraph> {
        Ok(PathGraphReader::read_path_graph_with_options(&self.path, &self.options)?)
    }

    /// Load the graph and draw one segment per link, returning the count
    pub fn draw<S: SegmentSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        let graph = self.load()?;
        let drawn = draw_graph(&graph, sink)?;
        tracing::info!(path = %self.path.display(), segments = drawn, "drew path graph");
        Ok(drawn)
    }

    /// Like [`GraphDrawer::draw`], but a file that is not PATHGRAPH at all
    /// (bad header or counts line) draws nothing and returns `None`.
    pub fn draw_or_skip<S: SegmentSink + ?Sized>(&self, sink: &mut S) -> Result<Option<usize>> {
        match self.draw(sink) {
            Ok(drawn) => Ok(Some(drawn)),
            Err(DrawError::Load(e)) if e.is_format_mismatch() => {
                tracing::debug!(path = %self.path.display(), error = %e, "skipping file");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Draw every link of a graph into a sink, in link order
pub fn draw_graph<S: SegmentSink + ?Sized>(graph: &PathGraph, sink: &mut S) -> Result<usize> {
    let mut drawn = 0;
    for segment in graph.segments() {
        sink.add_segment(LineSegment::from(segment))?;
        drawn += 1;
    }
    sink.finish()?;
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::SegmentBuffer;
    use pathgraph_core::{Link, Point3f};

    struct FailingSink {
        accepted: usize,
        limit: usize,
    }

    impl SegmentSink for FailingSink {
        fn add_segment(&mut self, _segment: LineSegment) -> Result<()> {
            if self.accepted == self.limit {
                return Err(DrawError::Sink("scene is full".into()));
            }
            self.accepted += 1;
            Ok(())
        }
    }

    fn triangle() -> PathGraph {
        PathGraph::new(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
            ],
            vec![Link::new(0, 1), Link::new(1, 2), Link::new(2, 0)],
        )
        .unwrap()
    }

    #[test]
    fn test_draw_graph_emits_links_in_order() {
        let mut scene = SegmentBuffer::new();
        assert_eq!(draw_graph(&triangle(), &mut scene).unwrap(), 3);
        assert_eq!(
            scene.segments()[2],
            LineSegment::new(Point3f::new(0.0, 1.0, 0.0), Point3f::new(0.0, 0.0, 0.0))
        );
    }

    #[test]
    fn test_sink_errors_stop_the_draw() {
        let mut sink = FailingSink { accepted: 0, limit: 2 };
        let err = draw_graph(&triangle(), &mut sink).unwrap_err();
        assert!(matches!(err, DrawError::Sink(_)));
        assert_eq!(sink.accepted, 2);
    }

    #[test]
    fn test_draw_through_trait_object() {
        let mut scene = SegmentBuffer::new();
        let sink: &mut dyn SegmentSink = &mut scene;
        assert_eq!(draw_graph(&triangle(), sink).unwrap(), 3);
        assert_eq!(scene.len(), 3);
    }
}
