//! Fill a grid with random open sites until it percolates, drawing snapshots.
//!
//! ```bash
//! cargo run --example render -- 10
//! ```

use rand::Rng;

use percolation::output::render_grid;
use percolation::Percolation;

fn main() {
    let n: usize = match std::env::args().nth(1).map(|s| s.parse()) {
        Some(Ok(n)) => n,
        None => 10,
        Some(Err(e)) => {
            eprintln!("usage: render [grid-size]: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(n) {
        eprintln!("render: {}", e);
        std::process::exit(1);
    }
}

fn run(n: usize) -> percolation::Result<()> {
    let mut grid = Percolation::new(n)?;
    let mut rng = rand::rng();
    let mut iteration = 1;

    while !grid.percolates() {
        if iteration % (n * 2) == 0 {
            println!();
            print!("{}", render_grid(&mut grid, &format!("Iteration #{}", iteration))?);
        }

        let (row, col) = loop {
            let row = rng.random_range(1..=n);
            let col = rng.random_range(1..=n);
            if !grid.is_open(row, col)? {
                break (row, col);
            }
        };
        grid.open(row, col)?;
        iteration += 1;
    }

    print!(
        "{}",
        render_grid(&mut grid, &format!("Percolated! Iteration #{}", iteration))?
    );
    Ok(())
}
