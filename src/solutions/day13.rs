use anyhow::{ensure, Context, Result};

pub fn day13(input: &str) -> Result<(usize, usize)> {
    let mut part1 = 0;
    let mut part2 = 0;
    for block in input.split("\n\n") {
        let (rows, cols) = bit_lines(block)?;
        part1 += score(&rows, &cols, 0).context("pattern has no reflection")?;
        part2 += score(&rows, &cols, 1).context("pattern has no smudged reflection")?;
    }
    Ok((part1, part2))
}

/// Each row and column packed into a bitmask, one bit per rock.
fn bit_lines(block: &str) -> Result<(Vec<u64>, Vec<u64>)> {
    let lines: Vec<&[u8]> = block.lines().filter(|l| !l.is_empty()).map(str::as_bytes).collect();
    let height = lines.len();
    ensure!(height > 0, "empty pattern");
    let width = lines[0].len();
    ensure!(width <= 64, "pattern too wide to pack");

    let mut rows = vec![0u64; height];
    let mut cols = vec![0u64; width];
    for (i, line) in lines.iter().enumerate() {
        ensure!(line.len() == width, "ragged pattern");
        for (j, &cell) in line.iter().enumerate() {
            ensure!(matches!(cell, b'#' | b'.'), "bad cell {:?}", cell as char);
            if cell == b'#' {
                rows[i] |= 1 << j;
                cols[j] |= 1 << i;
            }
        }
    }
    Ok((rows, cols))
}

/// Reflection index with exactly `smudges` mismatched cells across the
/// mirror, or `None`. The index counts the lines before the mirror.
fn reflection(lines: &[u64], smudges: u32) -> Option<usize> {
    (1..lines.len()).find(|&i| {
        let mismatches: u32 = lines[..i]
            .iter()
            .rev()
            .zip(&lines[i..])
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();
        mismatches == smudges
    })
}

fn score(rows: &[u64], cols: &[u64], smudges: u32) -> Option<usize> {
    reflection(rows, smudges)
        .map(|i| 100 * i)
        .or_else(|| reflection(cols, smudges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        #.##..##.
        ..#.##.#.
        ##......#
        ##......#
        ..#.##.#.
        ..##..##.
        #.#.##.#.

        #...##..#
        #....#..#
        ..##..###
        #####.##.
        #####.##.
        ..##..###
        #....#..#
    "};

    #[test]
    fn example() -> Result<()> {
        assert_eq!(day13(EXAMPLE)?, (405, 400));
        Ok(())
    }

    #[test]
    fn reflection_must_reach_an_edge() {
        // Mirror between indices 1 and 2 checks pairs (1,2) and (0,3).
        assert_eq!(reflection(&[0b01, 0b10, 0b10, 0b01], 0), Some(2));
        assert_eq!(reflection(&[0b01, 0b10, 0b10, 0b11], 0), None);
    }
}
