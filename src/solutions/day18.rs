use anyhow::{bail, Context, Result};

use crate::grid::Direction;

pub fn day18(input: &str) -> Result<(i64, i64)> {
    let mut plain = Vec::new();
    let mut hex = Vec::new();
    for line in input.lines() {
        let mut fields = line.split_whitespace();
        let dir = match fields.next().context("missing direction")? {
            "U" => Direction::Up,
            "D" => Direction::Down,
            "L" => Direction::Left,
            "R" => Direction::Right,
            other => bail!("bad direction {other:?}"),
        };
        let distance: i64 = fields.next().context("missing distance")?.parse()?;
        plain.push((dir, distance));

        // The color is really the part 2 instruction: five hex digits of
        // distance and one of direction.
        let color = fields
            .next()
            .and_then(|f| f.strip_prefix("(#"))
            .and_then(|f| f.strip_suffix(')'))
            .context("missing color")?;
        if color.len() != 6 {
            bail!("bad color {color:?}");
        }
        let distance = i64::from_str_radix(&color[..5], 16)?;
        let dir = match &color[5..] {
            "0" => Direction::Right,
            "1" => Direction::Down,
            "2" => Direction::Left,
            "3" => Direction::Up,
            other => bail!("bad direction digit {other:?}"),
        };
        hex.push((dir, distance));
    }

    Ok((lagoon_area(&plain), lagoon_area(&hex)))
}

/// Total dug-out area: shoelace over the trench vertices gives the interior
/// by Pick's theorem once the boundary cells are added back.
fn lagoon_area(plan: &[(Direction, i64)]) -> i64 {
    let (mut row, mut col) = (0i64, 0i64);
    let mut twice_area = 0;
    let mut perimeter = 0;
    for &(dir, distance) in plan {
        let (next_row, next_col) = match dir {
            Direction::Up => (row - distance, col),
            Direction::Down => (row + distance, col),
            Direction::Left => (row, col - distance),
            Direction::Right => (row, col + distance),
        };
        twice_area += col * next_row - next_col * row;
        perimeter += distance;
        (row, col) = (next_row, next_col);
    }
    twice_area.abs() / 2 + perimeter / 2 + 1
}
