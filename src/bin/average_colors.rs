use std::process;
use std::time::Instant;

use clap::{App, load_yaml};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use csp_color::generator::average_greedy_colors;
use csp_color::util::{init_logging, parse_or_exit};


/// parses a comma separated list
fn parse_list<T: std::str::FromStr>(name: &str, s: &str) -> Vec<T> {
    s.split(',')
        .map(|e| parse_or_exit(name, e))
        .collect()
}

/** computes the average number of colors of a greedy on random graphs, for each (nodes, p) */
pub fn main() {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("average_colors.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let nodes_space: Vec<usize> = parse_list("nodes", main_args.value_of("nodes").unwrap_or_default());
    let p_space: Vec<f64> = parse_list("probabilities", main_args.value_of("probabilities").unwrap_or_default());
    if let Some(p) = p_space.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        eprintln!("error: probability {} not in [0,1]", p);
        process::exit(1);
    }
    let samples: usize = parse_or_exit("samples", main_args.value_of("samples").unwrap_or("100"));
    let seed: u64 = parse_or_exit("seed", main_args.value_of("seed").unwrap_or("0"));
    let mut rng = StdRng::seed_from_u64(seed);

    let t_start = Instant::now();
    let mut average_colors: Vec<Vec<f64>> = Vec::with_capacity(nodes_space.len());
    for n in &nodes_space {
        tracing::info!(nodes = n, "computing row");
        average_colors.push(
            p_space.iter().map(|p| average_greedy_colors(samples, *n, *p, &mut rng)).collect()
        );
    }
    let res = json!({
        "nodes": nodes_space,
        "probabilities": p_space,
        "samples": samples,
        "seed": seed,
        "average_colors": average_colors,
        "time_searched": t_start.elapsed().as_secs_f32(),
    });
    let content = serde_json::to_string_pretty(&res).unwrap_or_else(|_| res.to_string());
    match main_args.value_of("output") {
        None => println!("{}", content),
        Some(filename) => if let Err(e) = std::fs::write(filename, content) {
            eprintln!("error: {}", e);
            process::exit(1);
        },
    }
}
