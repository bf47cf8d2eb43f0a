mod day1;
mod day11;
mod day13;
mod day14;
mod day15;
mod day16;
mod day17;
mod day18;
mod day2;
mod day24;
mod day25;
mod day4;
mod day5;
mod day6;
mod day7;
mod day8;
mod day9;

pub use day1::day1;
pub use day11::day11;
pub use day13::day13;
pub use day14::day14;
pub use day15::day15;
pub use day16::day16;
pub use day17::day17;
pub use day18::day18;
pub use day2::day2;
pub use day24::day24;
pub use day25::day25;
pub use day4::day4;
pub use day5::day5;
pub use day6::day6;
pub use day7::day7;
pub use day8::day8;
pub use day9::day9;
