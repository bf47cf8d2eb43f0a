use anyhow::{Context, Result};
use indexmap::IndexMap;

fn hash(text: &str) -> usize {
    text.bytes()
        .fold(0, |value, b| (value + usize::from(b)) * 17 & 0xff)
}

pub fn day15(input: &str) -> Result<(usize, usize)> {
    let steps: Vec<&str> = input.trim_end().split(',').collect();

    let part1 = steps.iter().map(|step| hash(step)).sum();

    // Boxes keep their lenses in insertion order; replacing a lens keeps its
    // slot, which is exactly IndexMap's insert/shift_remove behavior.
    let mut boxes: Vec<IndexMap<&str, usize>> = vec![IndexMap::new(); 256];
    for step in &steps {
        if let Some(label) = step.strip_suffix('-') {
            boxes[hash(label)].shift_remove(label);
        } else {
            let (label, focal) = step.split_once('=').context("malformed step")?;
            boxes[hash(label)].insert(label, focal.parse()?);
        }
    }

    let part2 = boxes
        .iter()
        .enumerate()
        .flat_map(|(box_num, lenses)| {
            lenses
                .values()
                .enumerate()
                .map(move |(slot, focal)| (box_num + 1) * (slot + 1) * focal)
        })
        .sum();

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_the_worked_example() {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(hash("rn"), 0);
        assert_eq!(hash("qp"), 1);
    }

    #[test]
    fn example() -> Result<()> {
        let example = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";
        assert_eq!(day15(example)?, (1320, 145));
        Ok(())
    }

    #[test]
    fn removal_shifts_later_lenses_forward() -> Result<()> {
        // rn and cm share box 0; removing rn moves cm into slot 1:
        // 1*1*2 for cm plus 2*1*3 for qp in box 1.
        assert_eq!(day15("rn=1,cm=2,qp=3,rn-")?.1, 8);
        Ok(())
    }
}
