//! `pathgraph` command line tool
//!
//! - `draw`: load a PATHGRAPH file and render it into a headless scene or an
//!   OBJ line file
//! - `info`: print counts, bounds and connectivity of a graph
//! - `bake`: turn an OFF mesh, or a directory tree of them, into PATHGRAPH
//!   files

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pathgraph_core::Bounded;
use pathgraph_io::{
    bake_directory, bake_off_file, read_graph, BakeOptions, PathGraphReadOptions, PathGraphWriteOptions,
};
use pathgraph_visualization::{draw_graph, GraphDrawer, ObjLineWriter, SegmentBuffer};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pathgraph", version, about = "Draw, inspect and bake PATHGRAPH files")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a PATHGRAPH file and draw one segment per link
    Draw {
        file: PathBuf,
        /// Write the segments as OBJ lines instead of a headless scene
        #[arg(long)]
        obj: Option<PathBuf>,
        /// Reject content after the last link
        #[arg(long)]
        strict: bool,
    },
    /// Print a summary of a PATHGRAPH or OFF file
    Info { file: PathBuf },
    /// Convert an OFF triangle mesh into a PATHGRAPH file.
    ///
    /// When INPUT is a directory every `.off` file below it is baked into a
    /// mirrored tree under OUTPUT, skipping outputs that already exist.
    Bake {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Keep the original coordinates instead of scaling into the unit cube
        #[arg(long)]
        no_normalize: bool,
        /// Keep every connected component, not just the largest
        #[arg(long)]
        all_components: bool,
        /// Write coordinates with a fixed number of decimals
        #[arg(long)]
        precision: Option<usize>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Draw { file, obj, strict } => draw(file, obj, strict),
        Command::Info { file } => info(file),
        Command::Bake {
            input,
            output,
            no_normalize,
            all_components,
            precision,
        } => {
            let options = BakeOptions {
                normalize: !no_normalize,
                largest_component_only: !all_components,
                write: PathGraphWriteOptions { precision },
            };
            bake(input, output, &options)
        }
    }
}

fn draw(file: PathBuf, obj: Option<PathBuf>, strict: bool) -> Result<()> {
    let drawer = GraphDrawer::new(&file).with_options(PathGraphReadOptions {
        allow_trailing_content: !strict,
        ..Default::default()
    });

    let drawn = match obj {
        Some(out) => {
            // Load first so a bad input leaves an existing OBJ file alone.
            let graph = drawer.load()?;
            let mut sink = ObjLineWriter::create(&out)
                .with_context(|| format!("Failed to create {}", out.display()))?;
            draw_graph(&graph, &mut sink)?
        }
        None => {
            let mut scene = SegmentBuffer::new();
            let drawn = drawer.draw(&mut scene)?;
            tracing::debug!(total_length = scene.total_length(), "scene ready");
            drawn
        }
    };

    println!("{}: {} segments", file.display(), drawn);
    Ok(())
}

fn info(file: PathBuf) -> Result<()> {
    let graph = read_graph(&file).with_context(|| format!("Failed to read {}", file.display()))?;
    let (min, max) = graph.bounding_box();
    let components = graph.connected_components();

    println!("{}", file.display());
    println!("  vertices:   {}", graph.vertex_count());
    println!("  links:      {}", graph.link_count());
    println!("  bounds:     ({}, {}, {}) .. ({}, {}, {})", min.x, min.y, min.z, max.x, max.y, max.z);
    println!("  components: {}", components.len());
    if let Some(largest) = components.first() {
        println!("  largest:    {} vertices", largest.len());
    }
    Ok(())
}

fn bake(input: PathBuf, output: PathBuf, options: &BakeOptions) -> Result<()> {
    if input.is_dir() {
        let summary = bake_directory(&input, &output, options)
            .with_context(|| format!("Failed to bake {}", input.display()))?;
        println!(
            "{} -> {}: {} baked, {} already present, {} failed",
            input.display(),
            output.display(),
            summary.baked,
            summary.skipped,
            summary.failed
        );
        if summary.failed > 0 {
            bail!("{} meshes failed to bake", summary.failed);
        }
        return Ok(());
    }

    let summary = bake_off_file(&input, &output, options)
        .with_context(|| format!("Failed to bake {}", input.display()))?;

    println!(
        "{} -> {}: {} vertices, {} links (mesh had {} components)",
        input.display(),
        output.display(),
        summary.graph_vertices,
        summary.graph_links,
        summary.components
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bake_flags() {
        let cli = Cli::try_parse_from([
            "pathgraph", "bake", "in.off", "-o", "out.path", "--all-components", "--precision", "4",
        ])
        .unwrap();
        match cli.command {
            Command::Bake { all_components, no_normalize, precision, .. } => {
                assert!(all_components);
                assert!(!no_normalize);
                assert_eq!(precision, Some(4));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_obj_target_survives_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.path");
        let obj = dir.path().join("scene.obj");
        std::fs::write(&input, "PATHGRAPH\n2 1\n0 0 0\n").unwrap();
        std::fs::write(&obj, "previous scene").unwrap();

        assert!(draw(input, Some(obj.clone()), false).is_err());
        assert_eq!(std::fs::read_to_string(&obj).unwrap(), "previous scene");
    }

    #[test]
    fn test_bake_directory_input() {
        let dir = tempfile::tempdir().unwrap();
        let meshes = dir.path().join("meshes");
        let paths = dir.path().join("paths");
        std::fs::create_dir_all(meshes.join("cup")).unwrap();
        std::fs::write(meshes.join("cup/cup_0001.off"), "OFF\n3 1 3\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n").unwrap();

        bake(meshes, paths.clone(), &BakeOptions::default()).unwrap();
        assert!(paths.join("cup/cup_0001.path").exists());
    }
}
