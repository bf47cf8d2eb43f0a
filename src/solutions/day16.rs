use anyhow::{ensure, Result};
use rayon::prelude::*;

use crate::grid::{Direction, Grid, Point};

pub fn day16(input: &str) -> Result<(usize, usize)> {
    let contraption = Grid::from_bytes(input)?;
    ensure!(
        contraption
            .cells()
            .all(|&c| matches!(c, b'.' | b'|' | b'-' | b'/' | b'\\')),
        "unexpected tile"
    );

    let part1 = energized(&contraption, Point::new(0, 0), Direction::Right);

    // Every edge tile is a candidate entry; the searches are independent and
    // read-only, so fan them out.
    let bottom = contraption.height() as i32 - 1;
    let right = contraption.width() as i32 - 1;
    let mut entries = Vec::new();
    for col in 0..contraption.width() as i32 {
        entries.push((Point::new(0, col), Direction::Down));
        entries.push((Point::new(bottom, col), Direction::Up));
    }
    for row in 0..contraption.height() as i32 {
        entries.push((Point::new(row, 0), Direction::Right));
        entries.push((Point::new(row, right), Direction::Left));
    }
    let part2 = entries
        .par_iter()
        .map(|&(pos, dir)| energized(&contraption, pos, dir))
        .max()
        .unwrap_or(0);

    Ok((part1, part2))
}

/// Trace a beam until every (tile, direction) state has been seen once;
/// splitters fork the beam. Returns the number of tiles any beam touched.
fn energized(contraption: &Grid<u8>, start: Point, dir: Direction) -> usize {
    let mut visited = vec![0u8; contraption.width() * contraption.height()];
    let mut beams = vec![(start, dir)];
    while let Some((pos, dir)) = beams.pop() {
        let Some(&tile) = contraption.get(pos) else {
            continue;
        };
        let seen = &mut visited[pos.row as usize * contraption.width() + pos.col as usize];
        let bit = 1 << dir_bit(dir);
        if *seen & bit != 0 {
            continue;
        }
        *seen |= bit;

        let mut emit = |d: Direction| beams.push((pos.step(d), d));
        match (tile, dir) {
            (b'|', Direction::Left | Direction::Right) => {
                emit(Direction::Up);
                emit(Direction::Down);
            }
            (b'-', Direction::Up | Direction::Down) => {
                emit(Direction::Left);
                emit(Direction::Right);
            }
            (b'/', _) => emit(match dir {
                Direction::Right => Direction::Up,
                Direction::Left => Direction::Down,
                Direction::Up => Direction::Right,
                Direction::Down => Direction::Left,
            }),
            (b'\\', _) => emit(match dir {
                Direction::Right => Direction::Down,
                Direction::Left => Direction::Up,
                Direction::Up => Direction::Left,
                Direction::Down => Direction::Right,
            }),
            _ => emit(dir),
        }
    }
    visited.iter().filter(|&&seen| seen != 0).count()
}

fn dir_bit(dir: Direction) -> u8 {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}
