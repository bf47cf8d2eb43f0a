use aho_corasick::AhoCorasick;
use anyhow::Result;

// NOTE: regex doesn't work here since spelled digits may overlap ("twone")
// and look-around isn't supported.
const PATTERNS: [&str; 18] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "one", "two", "three", "four", "five", "six",
    "seven", "eight", "nine",
];

pub fn day1(input: &str) -> Result<(u32, u32)> {
    let ac = AhoCorasick::new(PATTERNS)?;

    let mut sum_part1 = 0;
    let mut sum_part2 = 0;
    for line in input.lines() {
        let mut first_digit = None;
        let mut last_digit = 0;
        let mut first_any = None;
        let mut last_any = 0;
        for mat in ac.find_overlapping_iter(line) {
            let pattern = mat.pattern().as_usize() as u32;
            let (value, spelled) = if pattern < 9 {
                (pattern + 1, false)
            } else {
                (pattern - 8, true)
            };
            if !spelled {
                first_digit.get_or_insert(value);
                last_digit = value;
            }
            first_any.get_or_insert(value);
            last_any = value;
        }
        sum_part1 += first_digit.unwrap_or(0) * 10 + last_digit;
        sum_part2 += first_any.unwrap_or(0) * 10 + last_any;
    }

    Ok((sum_part1, sum_part2))
}
