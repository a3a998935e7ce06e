use std::fs::File;
use std::io::{self, Write};
use std::process;

use clap::{App, load_yaml};
use rand::SeedableRng;
use rand::rngs::StdRng;

use csp_color::generator::{gnm_random_graph, gnp_random_graph};
use csp_color::input::write_instance;
use csp_color::search::greedy::greedy_largest_first;
use csp_color::util::parse_or_exit;


/** writes a random instance. The header uses the number of colors of a greedy unless given. */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("gnp_generator.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let n: usize = parse_or_exit("nodes", main_args.value_of("nodes").unwrap_or_default());
    let seed: u64 = parse_or_exit("seed", main_args.value_of("seed").unwrap_or("0"));
    let mut rng = StdRng::seed_from_u64(seed);

    let (graph, model) = match (main_args.value_of("probability"), main_args.value_of("edges")) {
        (Some(p), _) => {
            let p: f64 = parse_or_exit("probability", p);
            if !(0.0..=1.0).contains(&p) {
                eprintln!("error: probability {} not in [0,1]", p);
                process::exit(1);
            }
            (gnp_random_graph(n, p, &mut rng), format!("gnp_random_graph({}, {})", n, p))
        }
        (None, Some(m)) => {
            let m: usize = parse_or_exit("edges", m);
            (gnm_random_graph(n, m, &mut rng), format!("gnm_random_graph({}, {})", n, m))
        }
        (None, None) => {
            eprintln!("error: either --probability or --edges is required");
            process::exit(1);
        }
    };
    let n_colors: usize = match main_args.value_of("colors") {
        Some(k) => parse_or_exit("colors", k),
        None => greedy_largest_first(&graph).iter().max().map_or(1, |c| c + 1),
    };
    let comments = vec![
        format!("Graph with {} nodes and {} edges", graph.nb_vertices(), graph.nb_edges()),
        format!("Generated with {} (seed {})", model, seed),
    ];
    let written = match main_args.value_of("output") {
        None => write_instance(&mut io::stdout().lock(), &graph, n_colors, &comments),
        Some(filename) => File::create(filename).and_then(|mut file| {
            write_instance(&mut file, &graph, n_colors, &comments)?;
            file.flush()
        }),
    };
    if let Err(e) = written {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
