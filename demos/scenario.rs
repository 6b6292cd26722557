//! Open a fixed path on a 3x3 grid and report fullness after each step.

use percolation::output::render_grid;
use percolation::Percolation;

const OPEN_PATH: [(usize, usize); 4] = [(3, 1), (3, 3), (1, 3), (2, 3)];

fn main() -> percolation::Result<()> {
    let mut grid = Percolation::new(3)?;

    for (row, col) in OPEN_PATH {
        grid.open(row, col)?;
        println!("{}-{} opened", row, col);
        println!("{}-{} percolates: {}", row, col, grid.percolates());
        for (r, c) in OPEN_PATH {
            println!("* {}-{} is full: {}", r, c, grid.is_full(r, c)?);
        }
    }

    println!();
    print!("{}", render_grid(&mut grid, "Final state")?);
    Ok(())
}
