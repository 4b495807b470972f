//! PATHGRAPH format support
//!
//! A PATHGRAPH file is line oriented:
//!
//! ```text
//! PATHGRAPH
//! <vertexCount> <linkCount>
//! <x> <y> <z>              (vertexCount lines)
//! <startIndex> <endIndex>  (linkCount lines)
//! ```
//!
//! Tokens are separated by runs of whitespace. Counts and indices are
//! non-negative integers, coordinates are decimal floats.

use crate::error::{IoError, Result};
use pathgraph_core::{Link, PathGraph, Point3f};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Literal first line of every PATHGRAPH file
pub const PATHGRAPH_HEADER: &str = "PATHGRAPH";

/// Upper bound on capacity reserved up front from a declared count
const MAX_PREALLOCATION: usize = 1 << 16;

/// Options controlling how PATHGRAPH files are read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGraphReadOptions {
    /// Ignore anything after the last declared link
    pub allow_trailing_content: bool,
    /// Reject files declaring more vertices than this
    pub max_vertices: Option<usize>,
    /// Reject files declaring more links than this
    pub max_links: Option<usize>,
}

impl Default for PathGraphReadOptions {
    fn default() -> Self {
        Self {
            allow_trailing_content: true,
            max_vertices: None,
            max_links: None,
        }
    }
}

/// Options controlling how PATHGRAPH files are written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathGraphWriteOptions {
    /// Fixed number of decimals for coordinates.
    ///
    /// `None` writes the shortest form that reads back to the same `f32`.
    pub precision: Option<usize>,
}

/// Line source that tracks 1-based line numbers
struct LineSource<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> LineSource<R> {
    fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }

    /// First line read as raw bytes, so a binary file reads as a bad header
    /// rather than as an I/O failure. A leading byte order mark is dropped.
    fn header(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        let decoded = String::from_utf8_lossy(&bytes);
        let text = decoded.strip_prefix('\u{feff}').unwrap_or(&decoded);
        Ok(Some(text.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// PATHGRAPH reader implementation
pub struct PathGraphReader;

impl PathGraphReader {
    /// Read a graph from a PATHGRAPH file
    pub fn read_path_graph<P: AsRef<Path>>(path: P) -> Result<PathGraph> {
        Self::read_path_graph_with_options(path, &PathGraphReadOptions::default())
    }

    /// Read a graph from a PATHGRAPH file with specific options
    pub fn read_path_graph_with_options<P: AsRef<Path>>(
        path: P,
        options: &PathGraphReadOptions,
    ) -> Result<PathGraph> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let graph = Self::from_reader(BufReader::new(file), options)?;

        tracing::info!(
            path = %path.display(),
            vertices = graph.vertex_count(),
            links = graph.link_count(),
            "loaded path graph"
        );
        Ok(graph)
    }

    /// Parse a graph from PATHGRAPH text
    pub fn parse_str(content: &str) -> Result<PathGraph> {
        Self::from_reader(Cursor::new(content), &PathGraphReadOptions::default())
    }

    /// Parse a graph from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R, options: &PathGraphReadOptions) -> Result<PathGraph> {
        let mut source = LineSource::new(reader);

        let header = source.header()?;
        if header.as_deref().map(str::trim) != Some(PATHGRAPH_HEADER) {
            return Err(IoError::MissingHeader { found: header });
        }

        let (vertex_count, link_count) = Self::parse_counts(&mut source)?;
        check_limit("vertex", vertex_count, options.max_vertices)?;
        check_limit("link", link_count, options.max_links)?;

        let mut vertices = Vec::with_capacity(vertex_count.min(MAX_PREALLOCATION));
        for found in 0..vertex_count {
            let line = source.next_line()?.ok_or(IoError::Truncated {
                section: "vertex",
                expected: vertex_count,
                found,
            })?;
            vertices.push(parse_position(&line, source.line)?);
        }

        let mut links = Vec::with_capacity(link_count.min(MAX_PREALLOCATION));
        for found in 0..link_count {
            let line = source.next_line()?.ok_or(IoError::Truncated {
                section: "link",
                expected: link_count,
                found,
            })?;
            links.push(parse_link(&line, source.line, found, vertex_count)?);
        }

        while let Some(line) = source.next_line()? {
            if line.trim().is_empty() {
                continue;
            }
            if !options.allow_trailing_content {
                return Err(IoError::TrailingContent { line: source.line });
            }
            tracing::warn!(line = source.line, "ignoring content after the last link");
            break;
        }

        tracing::debug!(vertex_count, link_count, "parsed path graph");
        Ok(PathGraph::new(vertices, links)?)
    }

    fn parse_counts<R: BufRead>(source: &mut LineSource<R>) -> Result<(usize, usize)> {
        let line = source.next_line()?.unwrap_or_default();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [vertices, links] = tokens[..] else {
            return Err(IoError::MalformedCounts {
                line: source.line.max(2),
                found: line.clone(),
            });
        };
        Ok((
            parse_token(vertices, source.line, "vertex count")?,
            parse_token(links, source.line, "link count")?,
        ))
    }
}

fn check_limit(section: &'static str, declared: usize, limit: Option<usize>) -> Result<()> {
    match limit {
        Some(limit) if declared > limit => Err(IoError::LimitExceeded {
            section,
            declared,
            limit,
        }),
        _ => Ok(()),
    }
}

fn parse_token<T: std::str::FromStr>(token: &str, line: usize, expected: &'static str) -> Result<T> {
    token.parse().map_err(|_| IoError::InvalidToken {
        line,
        token: token.to_string(),
        expected,
    })
}

fn split_exact<const N: usize>(line: &str, line_number: usize) -> Result<[&str; N]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let found = tokens.len();
    tokens.try_into().map_err(|_| IoError::TokenCount {
        line: line_number,
        expected: N,
        found,
    })
}

fn parse_position(line: &str, line_number: usize) -> Result<Point3f> {
    let [x, y, z] = split_exact::<3>(line, line_number)?;
    Ok(Point3f::new(
        parse_token(x, line_number, "coordinate")?,
        parse_token(y, line_number, "coordinate")?,
        parse_token(z, line_number, "coordinate")?,
    ))
}

fn parse_link(line: &str, line_number: usize, link: usize, vertex_count: usize) -> Result<Link> {
    let [start, end] = split_exact::<2>(line, line_number)?;
    let start: usize = parse_token(start, line_number, "vertex index")?;
    let end: usize = parse_token(end, line_number, "vertex index")?;

    for index in [start, end] {
        if index >= vertex_count {
            return Err(IoError::LinkOutOfRange {
                line: line_number,
                link,
                index,
                vertex_count,
            });
        }
    }
    Ok(Link::new(start, end))
}

/// PATHGRAPH writer implementation
pub struct PathGraphWriter;

impl PathGraphWriter {
    /// Write a graph to a PATHGRAPH file
    pub fn write_path_graph<P: AsRef<Path>>(graph: &PathGraph, path: P) -> Result<()> {
        Self::write_path_graph_with_options(graph, path, &PathGraphWriteOptions::default())
    }

    /// Write a graph to a PATHGRAPH file with specific options
    pub fn write_path_graph_with_options<P: AsRef<Path>>(
        graph: &PathGraph,
        path: P,
        options: &PathGraphWriteOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(graph, &mut writer, options)?;
        writer.flush()?;

        tracing::info!(
            path = %path.display(),
            vertices = graph.vertex_count(),
            links = graph.link_count(),
            "wrote path graph"
        );
        Ok(())
    }

    /// Write a graph in PATHGRAPH form to any writer
    pub fn write_to<W: Write>(
        graph: &PathGraph,
        mut writer: W,
        options: &PathGraphWriteOptions,
    ) -> Result<()> {
        writeln!(writer, "{PATHGRAPH_HEADER}")?;
        writeln!(writer, "{} {}", graph.vertex_count(), graph.link_count())?;

        for p in graph.vertices() {
            match options.precision {
                Some(precision) => writeln!(
                    writer,
                    "{:.prec$} {:.prec$} {:.prec$}",
                    p.x,
                    p.y,
                    p.z,
                    prec = precision
                )?,
                None => writeln!(writer, "{} {} {}", p.x, p.y, p.z)?,
            }
        }

        for link in graph.links() {
            writeln!(writer, "{} {}", link.start, link.end)?;
        }
        Ok(())
    }

    /// Render a graph as PATHGRAPH text
    pub fn to_string(graph: &PathGraph, options: &PathGraphWriteOptions) -> Result<String> {
        let mut buffer = Vec::new();
        Self::write_to(graph, &mut buffer, options)?;
        String::from_utf8(buffer).map_err(|e| IoError::InvalidFormat {
            format: e.to_string(),
        })
    }
}
