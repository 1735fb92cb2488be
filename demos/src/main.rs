//! Jump-maze solver.
//!
//! Loads one or more map files, prints each grid, and solves it with the
//! requested search methods. With `--expect`, the best-first path for each
//! map is compared against a solution file (one `row,col` per line).
//!
//! Usage:
//!   cargo run --bin maze -- demos/maps/4x4.txt demos/maps/6x6.txt \
//!       --expect demos/maps/4x4-solution.txt --expect demos/maps/6x6-solution.txt
//!
//! Show every expanded node:
//!   cargo run --bin maze -- demos/maps/4x4.txt -vv

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use jumpgrid_core::{Cell, Grid, parse_cells};
use jumpgrid_paths::{Method, SearchOptions};

/// Solve jump mazes with depth-first and best-first search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map files: comma-separated jump distances, `G` marks the goal
    #[arg(required = true)]
    maps: Vec<PathBuf>,

    /// Search method (dfs, astar); repeat for several. Defaults to both
    #[arg(short, long = "method")]
    methods: Vec<Method>,

    /// Start cell as `row,col`
    #[arg(short, long, default_value = "0,0", value_parser = parse_start)]
    start: Cell,

    /// Expected best-first solution file, matched to maps by position
    #[arg(short, long)]
    expect: Vec<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_start(s: &str) -> Result<Cell, String> {
    match parse_cells(s).map_err(|e| e.to_string())?.as_slice() {
        [cell] => Ok(*cell),
        _ => Err(format!("expected a single row,col pair, got \u{201c}{s}\u{201d}")),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Solve one map. Returns whether the best-first path matched `expect`.
fn solve(
    map: &Path,
    expect: Option<&Path>,
    methods: &[Method],
    start: Cell,
) -> Result<bool, Box<dyn Error>> {
    let grid = Grid::load(map)?;
    println!("\n{grid}\n");

    let expected = match expect {
        Some(path) => Some(parse_cells(&fs::read_to_string(path)?)?),
        None => None,
    };

    let mut matched = true;
    for &method in methods {
        log::info!("performing {method} search on {}", map.display());
        let path = SearchOptions { method, start }.run(&grid)?;
        if path.is_empty() {
            println!("{method}: no path\n");
        } else {
            println!("{method}: {path} (cost {})\n", path.cost(&grid));
        }

        if let (Method::BestFirst, Some(expected)) = (method, &expected) {
            let ok = path.cells() == expected.as_slice();
            println!("{method} path as expected: {ok}");
            matched &= ok;
        }
    }
    Ok(matched)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let methods = if args.methods.is_empty() {
        Method::ALL.to_vec()
    } else {
        args.methods.clone()
    };

    let mut all_matched = true;
    for (i, map) in args.maps.iter().enumerate() {
        let expect = args.expect.get(i).map(PathBuf::as_path);
        match solve(map, expect, &methods, args.start) {
            Ok(matched) => all_matched &= matched,
            Err(e) => {
                eprintln!("Error: {}: {e}", map.display());
                return ExitCode::FAILURE;
            }
        }
    }

    if all_matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpgrid_paths::search;

    #[test]
    fn start_argument() {
        assert_eq!(parse_start("2,3"), Ok(Cell::new(2, 3)));
        assert!(parse_start("2").is_err());
        assert!(parse_start("1,1\n2,2").is_err());
    }

    #[test]
    fn sample_maps_match_their_solutions() {
        let cases = [
            (
                include_str!("../maps/4x4.txt"),
                include_str!("../maps/4x4-solution.txt"),
            ),
            (
                include_str!("../maps/6x6.txt"),
                include_str!("../maps/6x6-solution.txt"),
            ),
        ];
        for (map, solution) in cases {
            let grid: Grid = map.parse().unwrap();
            let expected = parse_cells(solution).unwrap();
            let best = search(&grid, Cell::ORIGIN, Method::BestFirst).unwrap();
            assert_eq!(best.cells(), expected.as_slice());
            let dfs = search(&grid, Cell::ORIGIN, Method::DepthFirst).unwrap();
            assert!(dfs.is_valid(&grid));
            assert!(dfs.cost(&grid) >= best.cost(&grid));
        }
    }

    #[test]
    fn cli_parses_repeated_methods() {
        let args = Args::try_parse_from(["maze", "a.txt", "-m", "dfs", "-m", "A*", "-vv"]).unwrap();
        assert_eq!(args.methods, vec![Method::DepthFirst, Method::BestFirst]);
        assert_eq!(args.start, Cell::ORIGIN);
        assert_eq!(args.verbose, 2);
        assert!(Args::try_parse_from(["maze", "a.txt", "-m", "bfs"]).is_err());
        assert!(Args::try_parse_from(["maze"]).is_err());
    }
}
