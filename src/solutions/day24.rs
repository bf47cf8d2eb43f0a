use anyhow::{ensure, Context, Result};
use nalgebra::{Matrix4, Vector4};

// Scaling positions down keeps the linear systems well conditioned; real
// coordinates sit around 1e14.
const SCALE: f64 = 1e9;

const AREA_MIN: f64 = 200_000_000_000_000.0;
const AREA_MAX: f64 = 400_000_000_000_000.0;

#[derive(Debug, Clone, Copy)]
struct Hailstone {
    pos: [f64; 3],
    vel: [f64; 3],
}

pub fn day24(input: &str) -> Result<(usize, i64)> {
    let hailstones = parse(input)?;
    Ok((
        intersections(&hailstones, AREA_MIN, AREA_MAX),
        rock_position_sum(&hailstones)?,
    ))
}

fn parse(input: &str) -> Result<Vec<Hailstone>> {
    let mut hailstones = Vec::new();
    for line in input.lines() {
        let (pos, vel) = line.split_once('@').context("missing velocity")?;
        let triple = |text: &str| -> Result<[f64; 3]> {
            let mut parts = text.split(',');
            let mut next = || -> Result<f64> {
                Ok(parts.next().context("short coordinate triple")?.trim().parse()?)
            };
            Ok([next()?, next()?, next()?])
        };
        hailstones.push(Hailstone {
            pos: triple(pos)?,
            vel: triple(vel)?,
        });
    }
    Ok(hailstones)
}

/// Count hailstone pairs whose x-y paths cross inside the test area, in
/// both of their futures.
fn intersections(hailstones: &[Hailstone], min: f64, max: f64) -> usize {
    let mut crossings = 0;
    for (i, a) in hailstones.iter().enumerate() {
        for b in &hailstones[i + 1..] {
            let denominator = a.vel[1] * b.vel[0] - a.vel[0] * b.vel[1];
            if denominator == 0.0 {
                continue; // parallel paths
            }
            let t_a = (b.vel[1] * (a.pos[0] - b.pos[0]) - b.vel[0] * (a.pos[1] - b.pos[1]))
                / denominator;
            let t_b = (a.vel[1] * (b.pos[0] - a.pos[0]) - a.vel[0] * (b.pos[1] - a.pos[1]))
                / -denominator;
            if t_a < 0.0 || t_b < 0.0 {
                continue;
            }
            let x = a.pos[0] + a.vel[0] * t_a;
            let y = a.pos[1] + a.vel[1] * t_a;
            if (min..=max).contains(&x) && (min..=max).contains(&y) {
                crossings += 1;
            }
        }
    }
    crossings
}

/// Position sum (x + y + z) of the rock that hits every hailstone.
///
/// Equating the rock's line with hailstone i's line and eliminating time
/// leaves equations bilinear in the unknowns; subtracting the equation for
/// one reference hailstone cancels the bilinear terms. Four differences in
/// the x-y plane pin down (x, y, vx, vy), four in x-z give (x, z, vx, vz).
fn rock_position_sum(hailstones: &[Hailstone]) -> Result<i64> {
    ensure!(hailstones.len() >= 5, "need five hailstones to pin the rock");
    let scaled: Vec<Hailstone> = hailstones
        .iter()
        .map(|h| Hailstone {
            pos: h.pos.map(|p| p / SCALE),
            vel: h.vel,
        })
        .collect();

    let solve = |axis: usize| -> Result<Vector4<f64>> {
        let reference = scaled[0];
        let mut rows = [[0.0; 4]; 4];
        let mut rhs = [0.0; 4];
        for (row, other) in scaled[1..5].iter().enumerate() {
            rows[row] = [
                other.vel[axis] - reference.vel[axis],
                reference.vel[0] - other.vel[0],
                reference.pos[axis] - other.pos[axis],
                other.pos[0] - reference.pos[0],
            ];
            rhs[row] = reference.pos[axis] * reference.vel[0] - other.pos[axis] * other.vel[0]
                + other.pos[0] * other.vel[axis]
                - reference.pos[0] * reference.vel[axis];
        }
        let a = Matrix4::from_fn(|r, c| rows[r][c]);
        let b = Vector4::from_fn(|r, _| rhs[r]);
        a.lu().solve(&b).context("degenerate hailstone system")
    };

    // Unknowns come out as (x, y, vx, vy) and (x, z, vx, vz).
    let xy = solve(1)?;
    let xz = solve(2)?;
    Ok(((xy[0] + xy[1] + xz[1]) * SCALE).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        19, 13, 30 @ -2,  1, -2
        18, 19, 22 @ -1, -1, -2
        20, 25, 34 @ -2, -2, -4
        12, 31, 28 @ -1, -2, -1
        20, 19, 15 @  1, -5, -3
    "};

    #[test]
    fn crossings_inside_the_small_area() -> Result<()> {
        let hailstones = parse(EXAMPLE)?;
        assert_eq!(intersections(&hailstones, 7.0, 27.0), 2);
        Ok(())
    }

    #[test]
    fn rock_hits_every_hailstone() -> Result<()> {
        // The rock starts at (24, 13, 10).
        let hailstones = parse(EXAMPLE)?;
        assert_eq!(rock_position_sum(&hailstones)?, 47);
        Ok(())
    }
}
