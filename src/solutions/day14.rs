use anyhow::{ensure, Result};
use rustc_hash::FxHashMap;

use crate::grid::{Grid, Point};

const SPIN_CYCLES: usize = 1_000_000_000;

pub fn day14(input: &str) -> Result<(u64, u64)> {
    let platform = Grid::from_bytes(input)?;
    ensure!(
        platform.cells().all(|&c| matches!(c, b'#' | b'O' | b'.')),
        "unexpected platform cell"
    );

    let mut tilted = platform.clone();
    tilt_north(&mut tilted);
    let part1 = load(&tilted);

    Ok((part1, spin(platform)))
}

/// Run spin cycles until the platform state repeats, then index into the
/// detected cycle instead of simulating the rest of the billion.
fn spin(mut platform: Grid<u8>) -> u64 {
    let mut seen: FxHashMap<Grid<u8>, usize> = FxHashMap::default();
    let mut loads = Vec::new();
    let mut step = 0;
    loop {
        if let Some(&first) = seen.get(&platform) {
            let cycle_len = step - first;
            return loads[first + (SPIN_CYCLES - first) % cycle_len];
        }
        loads.push(load(&platform));
        seen.insert(platform.clone(), step);

        tilt_north(&mut platform);
        tilt_west(&mut platform);
        tilt_south(&mut platform);
        tilt_east(&mut platform);
        step += 1;
    }
}

fn load(platform: &Grid<u8>) -> u64 {
    platform
        .positions()
        .filter(|&p| platform[p] == b'O')
        .map(|p| (platform.height() as i32 - p.row) as u64)
        .sum()
}

// Tilting slides every round rock along one axis until it hits a cube rock,
// another settled rock, or the edge. Each pass walks a line keeping a write
// cursor at the next free cell.

fn tilt_north(g: &mut Grid<u8>) {
    for col in 0..g.width() as i32 {
        let mut write = 0;
        for row in 0..g.height() as i32 {
            let p = Point::new(row, col);
            match g[p] {
                b'#' => write = row + 1,
                b'O' => {
                    g[p] = b'.';
                    g[Point::new(write, col)] = b'O';
                    write += 1;
                }
                _ => {}
            }
        }
    }
}

fn tilt_south(g: &mut Grid<u8>) {
    for col in 0..g.width() as i32 {
        let mut write = g.height() as i32 - 1;
        for row in (0..g.height() as i32).rev() {
            let p = Point::new(row, col);
            match g[p] {
                b'#' => write = row - 1,
                b'O' => {
                    g[p] = b'.';
                    g[Point::new(write, col)] = b'O';
                    write -= 1;
                }
                _ => {}
            }
        }
    }
}

fn tilt_west(g: &mut Grid<u8>) {
    for row in 0..g.height() as i32 {
        let mut write = 0;
        for col in 0..g.width() as i32 {
            let p = Point::new(row, col);
            match g[p] {
                b'#' => write = col + 1,
                b'O' => {
                    g[p] = b'.';
                    g[Point::new(row, write)] = b'O';
                    write += 1;
                }
                _ => {}
            }
        }
    }
}

fn tilt_east(g: &mut Grid<u8>) {
    for row in 0..g.height() as i32 {
        let mut write = g.width() as i32 - 1;
        for col in (0..g.width() as i32).rev() {
            let p = Point::new(row, col);
            match g[p] {
                b'#' => write = col - 1,
                b'O' => {
                    g[p] = b'.';
                    g[Point::new(row, write)] = b'O';
                    write -= 1;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        O....#....
        O.OO#....#
        .....##...
        OO.#O....O
        .O.....O#.
        O.#..O.#.#
        ..O..#O..O
        .......O..
        #....###..
        #OO..#....
    "};

    #[test]
    fn example() -> Result<()> {
        assert_eq!(day14(EXAMPLE)?, (136, 64));
        Ok(())
    }

    #[test]
    fn rocks_stack_against_cubes() -> Result<()> {
        let mut g = Grid::from_bytes("..O#.O\n")?;
        tilt_west(&mut g);
        assert_eq!(g, Grid::from_bytes("O..#O.\n")?);
        tilt_east(&mut g);
        assert_eq!(g, Grid::from_bytes("..O#.O\n")?);
        Ok(())
    }
}
