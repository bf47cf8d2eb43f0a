use anyhow::{Context, Result};

use crate::grid::{Grid, Point};
use crate::search::{grid_min_cost, RunPolicy};

pub fn day17(input: &str) -> Result<(u32, u32)> {
    let city = Grid::digits(input)?;
    let start = Point::new(0, 0);
    let factory = city.bottom_right();

    let crucible = grid_min_cost(&city, start, factory, RunPolicy { min_run: 0, max_run: 3 })
        .context("factory unreachable for the crucible")?;
    let ultra = grid_min_cost(&city, start, factory, RunPolicy { min_run: 4, max_run: 10 })
        .context("factory unreachable for the ultra crucible")?;

    Ok((crucible, ultra))
}
