use std::process;

use clap::{App, load_yaml};

use csp_color::color::{checker, CheckerResult};
use csp_color::input::{read_coloring, read_instance};


/** checks a solution file against an instance */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("coloring_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let sol_filename = main_args.value_of("solution").unwrap_or_default();
    // read files
    let (n_colors, instance) = match read_instance(inst_filename) {
        Ok(res) => res,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let coloring = match read_coloring(sol_filename) {
        Ok(res) => res,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    // call checker
    match checker(&instance, &coloring) {
        CheckerResult::Ok(n) => {
            println!("{}", n);
            if n > n_colors {
                println!("WARNING: {} colors used, {} allowed", n, n_colors);
            }
        },
        CheckerResult::NodeNotColored(v) => {
            println!("ERROR: node {} not colored", v);
            process::exit(2);
        },
        CheckerResult::ConflictingEdge(a, b) => {
            println!("ERROR: nodes {} and {} are adjacent and share a color", a, b);
            process::exit(2);
        },
    };
}
