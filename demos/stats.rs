//! Estimate the percolation threshold from the command line.
//!
//! ```bash
//! cargo run --release --example stats -- 200 100
//! PERCOLATION_SEED=42 cargo run --release --example stats -- 200 100 --json
//! ```

use percolation::output::format_summary;
use percolation::{Config, MonteCarloExperiment};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let numbers: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let mut config = Config::default().from_env();
    if let [n, trials, ..] = numbers.as_slice() {
        match (n.parse(), trials.parse()) {
            (Ok(n), Ok(trials)) => config = config.grid_size(n).trials(trials),
            _ => {
                eprintln!("usage: stats <grid-size> <trials> [--json]");
                std::process::exit(2);
            }
        }
    }

    let experiment = match MonteCarloExperiment::with_config(&config) {
        Ok(experiment) => experiment,
        Err(e) => {
            eprintln!("stats: {}", e);
            std::process::exit(2);
        }
    };

    let summary = experiment.summary();
    if json {
        match summary.to_json_pretty() {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("stats: failed to serialize summary: {}", e),
        }
    } else {
        print!("{}", format_summary(&summary));
    }
}
