use anyhow::{Context, Result};
use rustc_hash::FxHashSet;

pub fn day4(input: &str) -> Result<(u32, u32)> {
    let mut matches_per_card = Vec::new();
    for line in input.lines() {
        let (_, numbers) = line.split_once(':').context("missing card header")?;
        let (winning, have) = numbers.split_once('|').context("missing number separator")?;
        let winning: FxHashSet<u32> = winning
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        let mut matches = 0;
        for number in have.split_whitespace() {
            if winning.contains(&number.parse()?) {
                matches += 1;
            }
        }
        matches_per_card.push(matches);
    }

    let points = matches_per_card
        .iter()
        .map(|&m| if m > 0 { 1 << (m - 1) } else { 0 })
        .sum();

    // Each card's copies cascade onto the next `matches` cards.
    let mut copies = vec![1u32; matches_per_card.len()];
    for (i, &matches) in matches_per_card.iter().enumerate() {
        for j in i + 1..(i + 1 + matches).min(copies.len()) {
            copies[j] += copies[i];
        }
    }

    Ok((points, copies.iter().sum()))
}
