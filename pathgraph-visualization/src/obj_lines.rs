//! OBJ polyline output
//!
//! Every segment becomes two `v` records and one `l` record, so a drawn
//! graph can be opened in any viewer that understands OBJ line elements.

use crate::error::Result;
use crate::renderer::{LineSegment, SegmentSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct ObjLineWriter<W: Write> {
    writer: W,
    vertices_written: usize,
    header_written: bool,
}

impl ObjLineWriter<BufWriter<File>> {
    /// Create a writer targeting a new file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ObjLineWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            vertices_written: 0,
            header_written: false,
        }
    }

    /// Number of segments written so far
    pub fn segment_count(&self) -> usize {
        self.vertices_written / 2
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            writeln!(self.writer, "# pathgraph line segments")?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write> SegmentSink for ObjLineWriter<W> {
    fn add_segment(&mut self, segment: LineSegment) -> Result<()> {
        self.write_header()?;
        for p in [segment.start, segment.end] {
            writeln!(self.writer, "v {} {} {}", p.x, p.y, p.z)?;
        }
        // OBJ indices are 1-based
        let first = self.vertices_written + 1;
        writeln!(self.writer, "l {} {}", first, first + 1)?;
        self.vertices_written += 2;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.write_header()?;
        self.writer.flush()?;
        Ok(())
    }
}
