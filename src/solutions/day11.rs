use anyhow::Result;

use crate::grid::Grid;

pub fn day11(input: &str) -> Result<(u64, u64)> {
    Ok((total_distance(input, 2)?, total_distance(input, 1_000_000)?))
}

/// Sum of pairwise Manhattan distances after every empty row and column has
/// been stretched to `factor` rows/columns wide.
fn total_distance(input: &str, factor: u64) -> Result<u64> {
    let image = Grid::from_bytes(input)?;

    let mut row_has_galaxy = vec![false; image.height()];
    let mut col_has_galaxy = vec![false; image.width()];
    let mut galaxies = Vec::new();
    for p in image.positions() {
        if image[p] == b'#' {
            row_has_galaxy[p.row as usize] = true;
            col_has_galaxy[p.col as usize] = true;
            galaxies.push(p);
        }
    }

    // expanded[i] = coordinate i shifted by the empty lines before it.
    let expand = |occupied: &[bool]| -> Vec<u64> {
        let mut expanded = Vec::with_capacity(occupied.len());
        let mut offset = 0;
        for (i, &has_galaxy) in occupied.iter().enumerate() {
            expanded.push(i as u64 + offset);
            if !has_galaxy {
                offset += factor - 1;
            }
        }
        expanded
    };
    let rows = expand(&row_has_galaxy);
    let cols = expand(&col_has_galaxy);

    let mut total = 0;
    for (i, a) in galaxies.iter().enumerate() {
        for b in &galaxies[i + 1..] {
            total += rows[a.row as usize].abs_diff(rows[b.row as usize])
                + cols[a.col as usize].abs_diff(cols[b.col as usize]);
        }
    }
    Ok(total)
}
