use arboretum_chordal::atoms::Atoms;
use arboretum_chordal::graph::{BaseGraph, Graph};
use arboretum_chordal::io::{write_dimacs, AdjacencyRead, DimacsRead};
use arboretum_chordal::minimal_separators::{inclusion_minimal, MinimalSeparators};
use arboretum_chordal::parameter::{MinimumFill, Treewidth};
use arboretum_chordal::pmc::potential_maximal_cliques;
use arboretum_chordal::solver::{Solver, SolverResult};
use arboretum_chordal::subset_trie::SubsetTrie;
use arboretum_chordal::timeout::initialize_timeout;
use arboretum_chordal::triangulation::MinimalTriangulation;
use std::convert::TryFrom;
use std::fs::File;
use std::io;
use std::io::{stdin, stdout, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, Clone, Copy)]
enum InputFormat {
    Dimacs,
    Adjacency,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dimacs" | "gr" | "pace" => Ok(InputFormat::Dimacs),
            "adjacency" | "adj" => Ok(InputFormat::Adjacency),
            _ => Err(format!("unknown input format {}", s)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "arboretum-chordal",
    about = "Minimal separators, potential maximal cliques, atoms and exact treewidth / minimum fill-in."
)]
struct Opt {
    /// Input file. `stdin` if not specified.
    #[structopt(short, long, parse(from_os_str), global = true)]
    input: Option<PathBuf>,

    /// Input format: `dimacs` (PACE .gr) or `adjacency` (named lists).
    #[structopt(short, long, default_value = "dimacs", global = true)]
    format: InputFormat,

    /// Wall clock limit in seconds.
    #[structopt(short, long, global = true)]
    timeout: Option<u64>,

    /// Log verbosity, repeat for more.
    #[structopt(short, long, parse(from_occurrences), global = true)]
    verbose: u8,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Exact treewidth.
    Treewidth {
        /// Split only into connected components instead of atoms.
        #[structopt(long)]
        no_atoms: bool,
    },
    /// Exact minimum fill-in.
    Minfill {
        /// Split only into connected components instead of atoms.
        #[structopt(long)]
        no_atoms: bool,
    },
    /// Lists minimal separators.
    Separators {
        /// Only separators between these two vertices, given by name.
        #[structopt(long, number_of_values = 2)]
        pair: Option<Vec<String>>,
        /// Drop separators that contain another listed one.
        #[structopt(long)]
        inclusion_minimal: bool,
    },
    /// Lists potential maximal cliques.
    Pmcs,
    /// Lists the atoms of the clique minimal separator decomposition.
    Atoms,
    /// Computes a minimal triangulation and prints its fill edges.
    Triangulate {
        /// Print the triangulated graph in DIMACS format instead.
        #[structopt(long)]
        dimacs: bool,
    },
}

fn read_graph<T: BufRead>(reader: T, format: InputFormat) -> io::Result<Graph> {
    match format {
        InputFormat::Dimacs => Graph::try_from(DimacsRead(reader)),
        InputFormat::Adjacency => Graph::try_from(AdjacencyRead(reader)),
    }
}

fn vertex_by_name(graph: &Graph, name: &str) -> io::Result<usize> {
    let vertex = match graph.names() {
        Some(names) => names.iter().position(|n| n == name),
        None => name.parse::<usize>().ok().and_then(|v| v.checked_sub(1)),
    };
    vertex.filter(|v| *v < graph.order()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unknown vertex {}", name),
        )
    })
}

/// Names vertices by their label, or by their 1-based id for DIMACS input.
fn label(graph: &Graph, v: usize) -> String {
    match graph.names() {
        Some(_) => graph.name(v),
        None => (v + 1).to_string(),
    }
}

fn write_sets<W: Write>(graph: &Graph, sets: &SubsetTrie, mut writer: W) -> io::Result<()> {
    for set in sets {
        let labels: Vec<String> = set.iter().map(|v| label(graph, *v)).collect();
        writeln!(writer, "{}", labels.join(" "))?;
    }
    Ok(())
}

fn write_result<W: Write>(name: &str, result: SolverResult, mut writer: W) -> io::Result<()> {
    writeln!(
        writer,
        "c {} atoms, {} of them cliques",
        result.atoms, result.clique_atoms
    )?;
    writeln!(writer, "s {} {}", name, result.value)
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    #[cfg(feature = "pace-logging")]
    arboretum_chordal::logging::build_pace_logger(match opt.verbose {
        0 => None,
        v => Some(arboretum_chordal::logging::level_for_verbosity(v)),
    });

    if let Some(seconds) = opt.timeout {
        initialize_timeout(seconds);
    }

    let graph = match &opt.input {
        Some(path) => read_graph(BufReader::new(File::open(path)?), opt.format)?,
        None => {
            let stdin = stdin();
            let reader = stdin.lock();
            read_graph(reader, opt.format)?
        }
    };

    let stdout = stdout();
    let mut writer = stdout.lock();
    match opt.command {
        Command::Treewidth { no_atoms } => {
            let result = Solver::<Treewidth>::default()
                .use_atoms(!no_atoms)
                .solve(&graph);
            write_result("treewidth", result, &mut writer)
        }
        Command::Minfill { no_atoms } => {
            let result = Solver::<MinimumFill>::default()
                .use_atoms(!no_atoms)
                .solve(&graph);
            write_result("minfill", result, &mut writer)
        }
        Command::Separators {
            pair,
            inclusion_minimal: minimal_only,
        } => {
            let separators = match pair {
                Some(pair) => {
                    let a = vertex_by_name(&graph, &pair[0])?;
                    let b = vertex_by_name(&graph, &pair[1])?;
                    if a == b {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidInput,
                            "the pair needs two distinct vertices",
                        ));
                    }
                    MinimalSeparators::between(&graph, a, b)
                }
                None => MinimalSeparators::all(&graph),
            };
            let separators = if minimal_only {
                inclusion_minimal(&separators)
            } else {
                separators
            };
            writeln!(writer, "c {} minimal separators", separators.len())?;
            write_sets(&graph, &separators, &mut writer)
        }
        Command::Pmcs => {
            let pmcs = potential_maximal_cliques(&graph);
            writeln!(writer, "c {} potential maximal cliques", pmcs.len())?;
            write_sets(&graph, &pmcs, &mut writer)
        }
        Command::Atoms => {
            let atoms = Atoms::new(&graph);
            writeln!(writer, "c {} atoms", atoms.len())?;
            for atom in atoms.vertex_sets() {
                let labels: Vec<String> = atom.iter().map(|v| label(&graph, *v)).collect();
                writeln!(writer, "{}", labels.join(" "))?;
            }
            Ok(())
        }
        Command::Triangulate { dimacs } => {
            let triangulation = MinimalTriangulation::new(&graph);
            if dimacs {
                return write_dimacs(&triangulation.triangulated_graph(&graph), &mut writer);
            }
            writeln!(
                writer,
                "c {} fill edges, width {}",
                triangulation.fill().len(),
                triangulation.width(&graph)
            )?;
            for (u, v) in triangulation.fill().edges() {
                writeln!(writer, "{} {}", label(&graph, u), label(&graph, v))?;
            }
            Ok(())
        }
    }
}
