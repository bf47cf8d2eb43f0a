use anyhow::{bail, ensure, Context, Result};
use num::integer::lcm;
use regex::Regex;
use rustc_hash::FxHashMap;

pub fn day8(input: &str) -> Result<(u64, u64)> {
    let (instructions, node_block) = input.split_once("\n\n").context("missing node list")?;
    let instructions = instructions.trim().as_bytes();

    ensure!(!instructions.is_empty(), "empty instruction line");

    // Node names are uppercase letters or digits; stick to an ASCII class
    // since the regex build here has Unicode classes turned off.
    let re = Regex::new(r"([0-9A-Z]{3}) = \(([0-9A-Z]{3}), ([0-9A-Z]{3})\)")?;
    let mut nodes: FxHashMap<&str, (&str, &str)> = FxHashMap::default();
    for captures in re.captures_iter(node_block) {
        let get = |i| captures.get(i).map_or("", |m| m.as_str());
        nodes.insert(get(1), (get(2), get(3)));
    }

    let steps_until = |start: &str, at_end: fn(&str) -> bool| -> Result<u64> {
        let mut current = start;
        let mut steps = 0;
        while !at_end(current) {
            let &(left, right) = nodes
                .get(current)
                .with_context(|| format!("node {current} not in map"))?;
            current = match instructions[steps as usize % instructions.len()] {
                b'L' => left,
                b'R' => right,
                other => bail!("bad instruction {:?}", other as char),
            };
            steps += 1;
        }
        Ok(steps)
    };

    // The ghost example has no AAA node at all.
    let part1 = if nodes.contains_key("AAA") {
        steps_until("AAA", |node| node == "ZZZ")?
    } else {
        0
    };

    // Each ghost's walk is periodic; the inputs are crafted so the periods
    // line up at their least common multiple.
    let mut part2 = 1;
    for &start in nodes.keys().filter(|name| name.ends_with('A')) {
        part2 = lcm(part2, steps_until(start, |node| node.ends_with('Z'))?);
    }

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn direct_walk() -> Result<()> {
        let example = indoc! {"
            RL

            AAA = (BBB, CCC)
            BBB = (DDD, EEE)
            CCC = (ZZZ, GGG)
            DDD = (DDD, DDD)
            EEE = (EEE, EEE)
            GGG = (GGG, GGG)
            ZZZ = (ZZZ, ZZZ)
        "};
        assert_eq!(day8(example)?.0, 2);
        Ok(())
    }

    #[test]
    fn instructions_repeat() -> Result<()> {
        let example = indoc! {"
            LLR

            AAA = (BBB, BBB)
            BBB = (AAA, ZZZ)
            ZZZ = (ZZZ, ZZZ)
        "};
        assert_eq!(day8(example)?.0, 6);
        Ok(())
    }

    #[test]
    fn ghosts_walk_in_parallel() -> Result<()> {
        let example = indoc! {"
            LR

            11A = (11B, XXX)
            11B = (XXX, 11Z)
            11Z = (11B, XXX)
            22A = (22B, XXX)
            22B = (22C, 22C)
            22C = (22Z, 22Z)
            22Z = (22B, 22B)
            XXX = (XXX, XXX)
        "};
        assert_eq!(day8(example)?.1, 6);
        Ok(())
    }

    #[test]
    fn empty_instruction_line_is_an_error() {
        let input = "\n\nAAA = (ZZZ, ZZZ)\nZZZ = (ZZZ, ZZZ)\n";
        assert!(day8(input).is_err());
    }
}
