//! Wayfinder CLI — route search demos over bundled fixtures.
//!
//! Usage:
//!   wayfinder maze [--astar] [--json]
//!   wayfinder metro <FROM> <TO> [--least-transfers] [--json]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wayfinder::{AStarQuery, BfsQuery, GridMap, Heuristic, NodeId, RouteResult, TransitMap};

/// The 5x5 demo maze: 0 is passable, 1 is an obstacle
const MAZE: [[u8; 5]; 5] = [
    [0, 1, 0, 0, 0],
    [0, 1, 0, 1, 0],
    [0, 0, 0, 1, 0],
    [1, 1, 0, 1, 0],
    [0, 0, 0, 0, 0],
];

#[derive(Parser)]
#[command(
    name = "wayfinder",
    version,
    about = "Shortest-path search over grids and transit networks"
)]
struct Cli {
    /// Log verbosity (overridden by the WAYFINDER_LOG env var)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit the route as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the bundled 5x5 maze from (0,0) to (4,4)
    Maze {
        /// Use A* with a Manhattan estimate instead of plain BFS
        #[arg(long)]
        astar: bool,
    },
    /// Route between two stations of the bundled Ankara network
    Metro {
        /// Station id (e.g. M1) or unique station name (e.g. OSB)
        from: String,
        /// Station id or unique station name
        to: String,
        /// Minimize stops instead of travel time
        #[arg(long)]
        least_transfers: bool,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env("WAYFINDER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("wayfinder={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_route(result: &RouteResult, json: bool, describe: impl Fn(&NodeId) -> String) -> i32 {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
        return if result.found { 0 } else { 1 };
    }

    if !result.found {
        println!("No route found");
        return 1;
    }
    let stops: Vec<String> = result.path.iter().map(describe).collect();
    println!("{}", stops.join(" -> "));
    0
}

fn cmd_maze(astar: bool, json: bool) -> i32 {
    let grid = GridMap::from_rows(&MAZE);
    let (start, end) = (NodeId::cell(0, 0), NodeId::cell(4, 4));

    let result = if astar {
        AStarQuery::between(start, end)
            .heuristic(Heuristic::Manhattan)
            .execute(&grid)
    } else {
        BfsQuery::between(start, end).execute(&grid)
    };

    match result {
        Ok(route) => {
            let code = print_route(&route, json, |id| format!("({})", id));
            if code == 0 && !json {
                println!("{} steps", route.hops);
            }
            code
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Resolve a station argument: exact id first, then unique name
fn resolve_station(metro: &TransitMap, arg: &str) -> Result<NodeId, String> {
    let as_id = NodeId::new(arg);
    if metro.network().contains_node(&as_id) {
        return Ok(as_id);
    }

    let matches: Vec<NodeId> = metro
        .network()
        .nodes()
        .filter(|n| n.label == arg)
        .map(|n| n.id.clone())
        .collect();
    match matches.as_slice() {
        [] => Err(format!("unknown station '{arg}'")),
        [only] => Ok(only.clone()),
        many => {
            let lines: Vec<String> = many
                .iter()
                .map(|id| {
                    format!("{} ({})", id, metro.line_of(id).unwrap_or("?"))
                })
                .collect();
            Err(format!(
                "station name '{arg}' is ambiguous, use an id: {}",
                lines.join(", ")
            ))
        }
    }
}

fn cmd_metro(from: &str, to: &str, least_transfers: bool, json: bool) -> i32 {
    let metro = TransitMap::ankara();

    let (from, to) = match (resolve_station(&metro, from), resolve_station(&metro, to)) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let result = if least_transfers {
        metro.least_transfers(&from, &to)
    } else {
        metro.fastest_route(&from, &to)
    };

    match result {
        Ok(route) => {
            let code = print_route(&route, json, |id| {
                metro
                    .station_name(id)
                    .map(str::to_string)
                    .unwrap_or_else(|| id.to_string())
            });
            if code == 0 && !json {
                if least_transfers {
                    println!("{} stops", route.hops);
                } else {
                    println!("{} minutes", route.cost);
                }
            }
            code
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let code = match cli.command {
        Commands::Maze { astar } => cmd_maze(astar, cli.json),
        Commands::Metro {
            ref from,
            ref to,
            least_transfers,
        } => cmd_metro(from, to, least_transfers, cli.json),
    };
    std::process::exit(code);
}
