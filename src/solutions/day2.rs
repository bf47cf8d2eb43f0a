use anyhow::{bail, Context, Result};

pub fn day2(input: &str) -> Result<(u32, u32)> {
    let mut possible_ids = 0;
    let mut total_power = 0;
    for line in input.lines() {
        let (header, draws) = line.split_once(": ").context("missing game header")?;
        let id: u32 = header
            .strip_prefix("Game ")
            .context("missing game id")?
            .parse()?;

        // The fewest cubes that make the game possible is the per-color
        // maximum over all draws; the subset boundaries don't matter.
        let (mut red, mut green, mut blue) = (0, 0, 0);
        for cubes in draws.split([';', ',']) {
            let (count, color) = cubes.trim().split_once(' ').context("malformed draw")?;
            let count: u32 = count.parse()?;
            match color {
                "red" => red = red.max(count),
                "green" => green = green.max(count),
                "blue" => blue = blue.max(count),
                other => bail!("unknown color {other:?}"),
            }
        }

        if red <= 12 && green <= 13 && blue <= 14 {
            possible_ids += id;
        }
        total_power += red * green * blue;
    }
    Ok((possible_ids, total_power))
}
