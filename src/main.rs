use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use roadsearch::dimacs::FileFormat;
use roadsearch::{search, NodeId, Strategy};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct OutputError(PathBuf, #[source] io::Error);

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Auto,
    Plain,
    Gz,
    Bz2,
}

impl From<Format> for FileFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Auto => FileFormat::Unknown,
            Format::Plain => FileFormat::Plain,
            Format::Gz => FileFormat::Gz,
            Format::Bz2 => FileFormat::Bz2,
        }
    }
}

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Id of the start node
    start: NodeId,

    /// Id of the goal node
    goal: NodeId,

    /// The path to the DIMACS arc file (.gr)
    graph_file: PathBuf,

    /// The path to the DIMACS coordinate file (.co)
    coordinates_file: PathBuf,

    /// Where to write the found path
    out_file: PathBuf,

    /// Search strategy: astar, dijkstra, bfs or dfs
    #[arg(short, long, default_value_t = Strategy::AStar)]
    strategy: Strategy,

    /// Give up after expanding this many nodes
    #[arg(long)]
    step_limit: Option<usize>,

    /// Compression of the input files
    #[arg(long, value_enum, default_value_t = Format::Auto)]
    format: Format,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let load_options = roadsearch::dimacs::Options {
        file_format: cli.format.into(),
    };
    let (g, _) = roadsearch::dimacs::load_graph_from_files(
        &load_options,
        &cli.graph_file,
        &cli.coordinates_file,
    )?;

    let search_options = search::Options {
        strategy: cli.strategy,
        step_limit: cli.step_limit,
    };
    let route = roadsearch::find_route(&g, cli.start, cli.goal, &search_options)?;
    if !route.is_found() {
        log::warn!("no route from {} to {}", cli.start, cli.goal);
    }

    write_path_file(&cli.out_file, &route)
        .map_err(|e| OutputError(cli.out_file.clone(), e))?;

    let stdout = io::stdout();
    roadsearch::output::write_stats(&mut stdout.lock(), &g, &route)?;

    Ok(())
}

fn write_path_file(path: &Path, route: &roadsearch::Route) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    roadsearch::output::write_path(&mut w, route)?;
    w.flush()
}
