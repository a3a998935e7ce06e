use std::process;
use std::str::FromStr;

use clap::ArgMatches;
use serde_json::Value;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::{
    color::{Coloring, Graph, checker, CheckerResult},
    config::{SearchConfig, SolverKind},
    error::InputError,
    input::{read_instance, write_coloring},
};


/** parses a command line value, exits with an error message if it is malformed */
pub fn parse_or_exit<T: FromStr>(name: &str, value: &str) -> T {
    value.trim().parse::<T>().unwrap_or_else(|_| {
        eprintln!("error: unable to parse {} ({})", name, value);
        process::exit(1);
    })
}

/** initializes the `tracing` subscriber (level from RUST_LOG, "info" by default) */
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init() {
        eprintln!("warning: logging not initialized ({})", e);
    }
}

/** parses a color count given on the command line. Must be positive, like the file header. */
pub fn parse_colors(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(k) if k > 0 => Ok(k),
        Ok(_) => Err("the number of colors should be positive".to_string()),
        Err(_) => Err(format!("unable to parse the number of colors given ({})", value)),
    }
}

/** parameters shared by the solver executables */
#[derive(Debug)]
pub struct Params {
    /// instance file name
    pub inst_filename: String,
    /// instance
    pub graph: Graph,
    /// solve configuration
    pub config: SearchConfig,
    /// where to write the solution (if any)
    pub sol_file: Option<String>,
    /// where to write the statistics (if any)
    pub perf_file: Option<String>,
}

/** reads command line input: instance, solver, optional colors override, solution & stats filenames */
pub fn read_params(main_args: &ArgMatches) -> Result<Params, String> {
    let inst_filename = main_args.value_of("instance")
        .ok_or("missing instance file")?;
    let solver: SolverKind = main_args.value_of("solver").unwrap_or("ac3").parse()?;
    let (file_colors, graph) = read_instance(inst_filename).map_err(|e| e.to_string())?;
    let n_colors = match main_args.value_of("colors") {
        None => file_colors,
        Some(k) => parse_colors(k)?,
    };
    // read value of the solution filename
    let sol_file: Option<String> = main_args.value_of("solution").map(|e| {
        println!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file: Option<String> = main_args.value_of("perf").map(|e| {
        println!("printing perfs in: {}", e);
        e.to_string()
    });
    let config = SearchConfig {
        solver,
        n_colors,
        check_solution: !main_args.is_present("no-check"),
    };
    println!("instance: {}", inst_filename);
    graph.display_statistics();
    println!("=======================");
    Ok(Params { inst_filename: inst_filename.to_string(), graph, config, sol_file, perf_file })
}

/** checks a coloring produced by a solver. An invalid coloring is a bug of the solver. */
pub fn check_result(graph: &Graph, coloring: &Coloring) -> CheckerResult {
    let res = checker(graph, coloring);
    if !matches!(res, CheckerResult::Ok(_)) {
        error!(reason = ?res, "invalid solution");
    }
    res
}

/// exports search results to files
pub fn export_results(
    coloring: Option<&Coloring>,
    stats: &Value,
    perf_file: Option<&str>,
    sol_file: Option<&str>,
) -> Result<(), InputError> {
    if let Some(filename) = perf_file {
        let content = serde_json::to_string_pretty(stats).unwrap_or_else(|_| stats.to_string());
        std::fs::write(filename, content).map_err(|source| InputError::Io {
            path: filename.to_string(),
            source,
        })?;
    }
    if let (Some(filename), Some(coloring)) = (sol_file, coloring) {
        write_coloring(filename, coloring)?;
    }
    Ok(())
}
