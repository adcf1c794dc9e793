// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Loading [Graphs](crate::Graph) from the
//! [9th DIMACS Implementation Challenge](http://www.diag.uniroma1.it/challenge9/format.shtml)
//! text format.
//!
//! A graph is described by two files: a coordinate file (`.co`) with
//! `v <id> <longitude> <latitude>` lines, and an arc file (`.gr`) with
//! `a <from> <to> <cost>` lines. Malformed lines, duplicate nodes and arcs
//! referring to undeclared nodes are skipped.

use std::fs::File;
use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use loader::GraphLoader;

use crate::Graph;

mod loader;
mod record;

pub use record::Record;

/// Compression of the input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    /// Guess the format based on the content
    #[default]
    Unknown,

    /// Force uncompressed text
    Plain,

    /// Force text with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    Gz,

    /// Force text with [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression
    Bz2,
}

/// Additional controls for loading DIMACS data as a [Graph].
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Compression of both input files.
    pub file_format: FileFormat,
}

/// Which of the two input files an [Error] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Coordinates,
    Arcs,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coordinates => write!(f, "coordinates"),
            Self::Arcs => write!(f, "arcs"),
        }
    }
}

/// Error which can occur when loading a [Graph].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading {kind}: {source}")]
    Read {
        kind: FileKind,
        #[source]
        source: io::Error,
    },
}

/// Counters describing the outcome of loading a [Graph].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of nodes in the graph.
    pub nodes: usize,

    /// Number of edges in the graph.
    pub arcs: usize,

    /// Number of malformed or duplicate node records.
    pub skipped_nodes: usize,

    /// Number of malformed arc records, or arc records referring to unknown nodes.
    pub skipped_arcs: usize,
}

const GZIP_MAGIC: &[u8] = &[0x1F, 0x8B];
const BZIP2_MAGIC: &[u8] = b"BZh";

/// Wraps a reader in a buffered, decompressing reader as per the provided [FileFormat].
fn decode<'a, R: Read + 'a>(format: FileFormat, reader: R) -> io::Result<Box<dyn BufRead + 'a>> {
    let mut b = io::BufReader::new(reader);

    let format = match format {
        FileFormat::Unknown => {
            let head = b.fill_buf()?;
            if head.starts_with(GZIP_MAGIC) {
                FileFormat::Gz
            } else if head.starts_with(BZIP2_MAGIC) {
                FileFormat::Bz2
            } else {
                FileFormat::Plain
            }
        }
        known => known,
    };

    let decoded: Box<dyn BufRead + 'a> = match format {
        FileFormat::Unknown | FileFormat::Plain => Box::new(b),
        FileFormat::Gz => Box::new(io::BufReader::new(flate2::bufread::MultiGzDecoder::new(b))),
        FileFormat::Bz2 => Box::new(io::BufReader::new(bzip2::bufread::MultiBzDecoder::new(b))),
    };
    Ok(decoded)
}

/// Loads a [Graph] from two streams: a coordinate file and an arc file.
///
/// All nodes are read before any arc, so arcs may only connect declared nodes.
/// The provided streams will be automatically wrapped in buffered readers.
pub fn load_graph_from_io<C: Read, A: Read>(
    options: &Options,
    coordinates: C,
    arcs: A,
) -> Result<(Graph, LoadStats), Error> {
    let read_error = |kind: FileKind| move |source: io::Error| Error::Read { kind, source };
    let mut loader = GraphLoader::new();

    let b = decode(options.file_format, coordinates)
        .and_then(|r| loader.add_nodes(r))
        .map_err(read_error(FileKind::Coordinates))?;

    let g = decode(options.file_format, arcs)
        .and_then(|r| loader.add_arcs(b.arcs(), r))
        .map_err(read_error(FileKind::Arcs))?
        .build();

    Ok((g, loader.finish()))
}

/// Loads a [Graph] from an arc file (`.gr`) and a coordinate file (`.co`)
/// at the provided paths.
pub fn load_graph_from_files<A: AsRef<Path>, C: AsRef<Path>>(
    options: &Options,
    arcs_path: A,
    coordinates_path: C,
) -> Result<(Graph, LoadStats), Error> {
    let open = |path: &Path| {
        File::open(path).map_err(|source| Error::Open {
            path: PathBuf::from(path),
            source,
        })
    };

    let coordinates = open(coordinates_path.as_ref())?;
    let arcs = open(arcs_path.as_ref())?;
    load_graph_from_io(options, coordinates, arcs)
}

/// Loads a [Graph] from in-memory contents of a coordinate file and an arc file.
pub fn load_graph_from_buffers(
    options: &Options,
    coordinates: &[u8],
    arcs: &[u8],
) -> Result<(Graph, LoadStats), Error> {
    load_graph_from_io(options, coordinates, arcs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Edge, INFINITE_COST};

    const SMALL_CO: &[u8] = include_bytes!("test_fixtures/small.co");
    const SMALL_GR: &[u8] = include_bytes!("test_fixtures/small.gr");
    const SMALL_CO_GZ: &[u8] = include_bytes!("test_fixtures/small.co.gz");
    const SMALL_GR_GZ: &[u8] = include_bytes!("test_fixtures/small.gr.gz");
    const SMALL_CO_BZ2: &[u8] = include_bytes!("test_fixtures/small.co.bz2");
    const SMALL_GR_BZ2: &[u8] = include_bytes!("test_fixtures/small.gr.bz2");

    macro_rules! assert_edge {
        ($graph:expr, $from:expr, $to:expr, $cost:expr) => {
            assert_eq!($graph.edge_cost($from, $to), $cost);
        };
    }

    macro_rules! assert_no_edge {
        ($graph:expr, $from:expr, $to:expr) => {
            assert_eq!($graph.edge_cost($from, $to), INFINITE_COST);
        };
    }

    fn load(file_format: FileFormat, coordinates: &[u8], arcs: &[u8]) -> (Graph, LoadStats) {
        let options = Options { file_format };
        load_graph_from_buffers(&options, coordinates, arcs).unwrap()
    }

    fn check_small_graph(g: &Graph, stats: &LoadStats) {
        assert_eq!(
            *stats,
            LoadStats {
                nodes: 6,
                arcs: 11,
                skipped_nodes: 2,
                skipped_arcs: 3,
            }
        );
        assert_eq!(g.len(), 6);
        assert_eq!(g.edge_count(), 11);

        // Duplicate "v 2 0 0" must not override the first record
        assert_eq!(g.coordinate_of(2), Some(Coordinate::new(40_701_000, -74_000_000)));
        assert!(!g.has_node(7));
        assert!(!g.has_node(99));

        assert_edge!(g, 1, 2, 112);
        assert_edge!(g, 3, 4, 152);
        assert_edge!(g, 4, 3, 112);
        assert_edge!(g, 6, 1, 1396);
        assert_no_edge!(g, 1, 6);
        assert_no_edge!(g, 5, 4);
        assert_no_edge!(g, 1, 99);

        // Arcs keep file order
        assert_eq!(
            g.neighbors(2),
            &[
                Edge { to: 1, cost: 112 },
                Edge { to: 4, cost: 85 },
                Edge { to: 5, cost: 200 },
            ]
        );
    }

    #[test]
    fn load_plain() {
        let (g, stats) = load(FileFormat::Plain, SMALL_CO, SMALL_GR);
        check_small_graph(&g, &stats);
    }

    #[test]
    fn load_gz() {
        let (g, stats) = load(FileFormat::Gz, SMALL_CO_GZ, SMALL_GR_GZ);
        check_small_graph(&g, &stats);
    }

    #[test]
    fn load_bz2() {
        let (g, stats) = load(FileFormat::Bz2, SMALL_CO_BZ2, SMALL_GR_BZ2);
        check_small_graph(&g, &stats);
    }

    #[test]
    fn load_detects_format() {
        let (g, stats) = load(FileFormat::Unknown, SMALL_CO_GZ, SMALL_GR_BZ2);
        check_small_graph(&g, &stats);

        let (g, stats) = load(FileFormat::Unknown, SMALL_CO, SMALL_GR);
        check_small_graph(&g, &stats);
    }

    #[test]
    fn arc_records_in_coordinate_file_are_ignored() {
        let (g, stats) = load(FileFormat::Plain, b"v 1 0 0\na 1 2 5\nv 2 0 0\n", b"");
        assert_eq!(g.len(), 2);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(stats.skipped_arcs, 0);
    }

    #[test]
    fn malformed_records_of_other_kind_are_ignored() {
        let (g, stats) = load(
            FileFormat::Plain,
            b"v 1 0 0\na 1 2\nv 2 0 0\n",
            b"a 1 2 5\nv 3\n",
        );
        assert_eq!(g.len(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(stats.skipped_nodes, 0);
        assert_eq!(stats.skipped_arcs, 0);
    }

    #[test]
    fn non_utf8_comments_are_ignored() {
        let (g, stats) = load(
            FileFormat::Plain,
            b"c Caf\xe9\nv 1 0 0\nv 2 \xe9 0\nv 3 0 0\n",
            b"c Stra\xdfe\na 1 3 7\na 3 \xff 1\n",
        );
        assert_eq!(g.len(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(
            stats,
            LoadStats {
                nodes: 2,
                arcs: 1,
                skipped_nodes: 1,
                skipped_arcs: 1,
            }
        );
    }

    #[test]
    fn corrupt_compressed_file() {
        let options = Options {
            file_format: FileFormat::Gz,
        };
        let err = load_graph_from_buffers(&options, b"v 1 0 0\n", SMALL_GR_GZ).unwrap_err();
        assert!(
            matches!(
                err,
                Error::Read {
                    kind: FileKind::Coordinates,
                    ..
                }
            ),
            "unexpected error: {}",
            err,
        );
    }

    #[test]
    fn missing_file() {
        let err = load_graph_from_files(
            &Options::default(),
            "/nonexistent/graph.gr",
            "/nonexistent/graph.co",
        )
        .unwrap_err();

        match err {
            Error::Open { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/graph.co")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
