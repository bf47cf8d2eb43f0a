use anyhow::Result;

pub fn day9(input: &str) -> Result<(i64, i64)> {
    let mut part1 = 0;
    let mut part2 = 0;
    for line in input.lines() {
        let history: Vec<i64> = line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        part1 += extrapolate(&history);
        let reversed: Vec<i64> = history.into_iter().rev().collect();
        part2 += extrapolate(&reversed);
    }
    Ok((part1, part2))
}

/// Next value of the sequence: last element plus the extrapolated next
/// difference, recursing until the differences vanish.
fn extrapolate(sequence: &[i64]) -> i64 {
    if sequence.iter().all(|&x| x == 0) {
        return 0;
    }
    let differences: Vec<i64> = sequence.windows(2).map(|w| w[1] - w[0]).collect();
    sequence.last().copied().unwrap_or(0) + extrapolate(&differences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn example() -> Result<()> {
        let example = indoc! {"
            0 3 6 9 12 15
            1 3 6 10 15 21
            10 13 16 21 30 45
        "};
        assert_eq!(day9(example)?, (114, 2));
        Ok(())
    }

    #[test]
    fn negative_differences() {
        assert_eq!(extrapolate(&[10, 5, 0, -5]), -10);
    }
}
