pub mod grid;
pub mod search;
mod solutions;

use anyhow::{Context, Result};

pub use solutions::*;

/// Every solution takes the raw puzzle input and produces both answers.
pub type Solution = fn(&str) -> Result<(String, String)>;

macro_rules! solution {
    ($n:literal, $day:expr) => {
        ($n, (|input| $day(input).map(|(a, b)| (a.to_string(), b.to_string()))) as Solution)
    };
}

/// (day number, solver) for every implemented day, in calendar order.
pub const ALL_SOLUTIONS: &[(usize, Solution)] = &[
    solution!(1, day1),
    solution!(2, day2),
    solution!(4, day4),
    solution!(5, day5),
    solution!(6, day6),
    solution!(7, day7),
    solution!(8, day8),
    solution!(9, day9),
    solution!(11, day11),
    solution!(13, day13),
    solution!(14, day14),
    solution!(15, day15),
    solution!(16, day16),
    solution!(17, day17),
    solution!(18, day18),
    solution!(24, day24),
    solution!(25, day25),
];

pub fn load_input(name: &str) -> Result<String> {
    let path = format!("inputs/{}", name);
    std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))
}

pub fn default_input(n: usize) -> Result<String> {
    load_input(&format!("{}.txt", n))
}
