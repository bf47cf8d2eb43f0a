use anyhow::{ensure, Context, Result};

pub fn day6(input: &str) -> Result<(u64, u64)> {
    let (time_line, distance_line) = input.split_once('\n').context("missing distance line")?;
    let times = parse_numbers(time_line, "Time:")?;
    let records = parse_numbers(distance_line, "Distance:")?;
    ensure!(times.len() == records.len(), "mismatched race counts");

    let part1 = times
        .iter()
        .zip(&records)
        .map(|(&time, &record)| ways_to_win(time, record))
        .product();

    // Part 2 reads each line as one big number with the spaces removed.
    let time = concat_digits(time_line);
    let record = concat_digits(distance_line);
    let part2 = ways_to_win(time, record);

    Ok((part1, part2))
}

fn parse_numbers(line: &str, prefix: &str) -> Result<Vec<u64>> {
    line.strip_prefix(prefix)
        .with_context(|| format!("missing {prefix} prefix"))?
        .split_whitespace()
        .map(|word| word.parse().map_err(Into::into))
        .collect()
}

fn concat_digits(line: &str) -> u64 {
    line.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |n, b| n * 10 + u64::from(b - b'0'))
}

/// Number of hold times that beat the record: the distance
/// `hold * (time - hold)` exceeds `record` strictly between the roots of the
/// quadratic. Floating point only seeds the bounds; the exact comparison
/// nudges them onto the right integers.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let t = time as f64;
    let disc = (t * t / 4.0 - record as f64).max(0.0).sqrt();
    let mut lo = ((t / 2.0 - disc).ceil() as u64).saturating_sub(2);
    let mut hi = ((t / 2.0 + disc).floor() as u64 + 2).min(time);
    while lo <= hi && lo * (time - lo) <= record {
        lo += 1;
    }
    while hi > lo && hi * (time - hi) <= record {
        hi -= 1;
    }
    if lo > hi {
        0
    } else {
        hi - lo + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn example() -> Result<()> {
        let example = indoc! {"
            Time:      7  15   30
            Distance:  9  40  200
        "};
        assert_eq!(day6(example)?, (288, 71503));
        Ok(())
    }

    #[test]
    fn unwinnable_race() {
        // Best possible distance 2*2 = 4 never beats 10.
        assert_eq!(ways_to_win(4, 10), 0);
    }

    #[test]
    fn exact_root_ties_do_not_count() {
        // Holding 2 or 4 of 6 travels exactly 8; only 3 beats it.
        assert_eq!(ways_to_win(6, 8), 1);
    }
}
