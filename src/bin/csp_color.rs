use std::process;
use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use csp_color::color::{nb_colors_used, CheckerResult};
use csp_color::input::coloring_to_string;
use csp_color::util::{check_result, export_results, init_logging, read_params};


/** colors an instance with the chosen strategy and prints one `node:color` line per node */
pub fn main() {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("csp_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = match read_params(&main_args) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let solver = params.config.solver;
    let n_colors = params.config.n_colors;

    // solve it
    let mut colorer = params.config.build_colorer(&params.graph);
    let t_start = Instant::now();
    let solution = colorer.color();
    let duration = t_start.elapsed().as_secs_f32();
    let mut valid = true;
    match &solution {
        None => {
            println!("{} took {:.3} seconds. No solution with {} colors", solver, duration, n_colors);
        }
        Some(coloring) => {
            println!("{} took {:.3} seconds. Nb colors: {}", solver, duration, nb_colors_used(coloring));
            if params.config.check_solution {
                valid = matches!(check_result(&params.graph, coloring), CheckerResult::Ok(_));
            }
            if coloring.is_empty() {
                println!("empty graph: nothing to color");
            }
            print!("{}", coloring_to_string(coloring));
        }
    }
    let stats = json!({
        "inst_name": params.inst_filename,
        "solver": solver,
        "n_colors": n_colors,
        "found": solution.is_some(),
        "nb_colors": solution.as_ref().map(nb_colors_used),
        "time_searched": duration,
        "search": colorer.stats(),
    });

    // export results
    if let Err(e) = export_results(
        solution.as_ref(),
        &stats,
        params.perf_file.as_deref(),
        params.sol_file.as_deref(),
    ) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
    if !valid {
        process::exit(2);
    }
}
