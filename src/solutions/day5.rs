use anyhow::{ensure, Context, Result};

struct MapLine {
    dest: u64,
    src: u64,
    len: u64,
}

pub fn day5(input: &str) -> Result<(u64, u64)> {
    let (seed_line, rest) = input.split_once("\n\n").context("missing seed line")?;
    let seeds: Vec<u64> = seed_line
        .strip_prefix("seeds:")
        .context("missing seeds prefix")?
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()?;
    ensure!(seeds.len() % 2 == 0, "odd number of seed values");

    let mut layers = Vec::new();
    for block in rest.split("\n\n") {
        let mut lines = Vec::new();
        for line in block.lines().skip(1) {
            let mut fields = line.split_whitespace();
            let mut next = || -> Result<u64> { Ok(fields.next().context("short map line")?.parse()?) };
            lines.push(MapLine {
                dest: next()?,
                src: next()?,
                len: next()?,
            });
        }
        layers.push(lines);
    }

    let part1 = seeds
        .iter()
        .map(|&seed| layers.iter().fold(seed, |value, layer| map_value(layer, value)))
        .min()
        .context("no seeds")?;

    // Part 2 treats the seed list as (start, length) pairs and pushes whole
    // ranges through every layer, splitting them at mapping boundaries
    // instead of walking billions of individual seeds.
    let mut ranges: Vec<(u64, u64)> = seeds
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[0] + pair[1]))
        .collect();
    for layer in &layers {
        ranges = map_ranges(layer, ranges);
    }
    let part2 = ranges
        .iter()
        .map(|&(start, _)| start)
        .min()
        .context("no seed ranges")?;

    Ok((part1, part2))
}

fn map_value(layer: &[MapLine], value: u64) -> u64 {
    for line in layer {
        if (line.src..line.src + line.len).contains(&value) {
            return line.dest + value - line.src;
        }
    }
    value
}

/// Map half-open ranges through one layer. Every range is matched against
/// each line; the overlapping middle is translated, the unmatched left and
/// right pieces go back in the pool for later lines, and whatever no line
/// claims passes through unchanged.
fn map_ranges(layer: &[MapLine], ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    let mut mapped = Vec::new();
    let mut pending = ranges;
    for line in layer {
        let mut unmatched = Vec::new();
        for (start, end) in pending {
            let overlap_start = start.max(line.src);
            let overlap_end = end.min(line.src + line.len);
            if overlap_start < overlap_end {
                mapped.push((
                    line.dest + overlap_start - line.src,
                    line.dest + overlap_end - line.src,
                ));
                if start < overlap_start {
                    unmatched.push((start, overlap_start));
                }
                if overlap_end < end {
                    unmatched.push((overlap_end, end));
                }
            } else {
                unmatched.push((start, end));
            }
        }
        pending = unmatched;
    }
    mapped.extend(pending);
    mapped
}
