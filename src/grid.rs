use std::ops::{Index, IndexMut};

use anyhow::{ensure, Result};
use memchr::memchr_iter;

/// Grid coordinate. Signed so that stepping off the top/left edge stays
/// representable and can be rejected by a bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Point { row, col }
    }

    pub fn step(self, dir: Direction) -> Point {
        let (dr, dc) = dir.delta();
        Point::new(self.row + dr, self.col + dc)
    }

    pub fn manhattan(self, other: Point) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    pub const fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Rectangular grid with row-major storage. Bounds are fixed at
/// construction; parsing rejects ragged input up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl Grid<u8> {
    /// Parse a grid of raw bytes, one row per line.
    pub fn from_bytes(input: &str) -> Result<Self> {
        let bytes = input.as_bytes();
        let mut cells = Vec::with_capacity(bytes.len());
        let mut width = 0;
        let mut height = 0;
        let mut line_start = 0;
        for line_end in memchr_iter(b'\n', bytes).chain(
            // Tolerate a missing trailing newline.
            (bytes.last() != Some(&b'\n') && !bytes.is_empty()).then_some(bytes.len()),
        ) {
            let line = &bytes[line_start..line_end];
            line_start = line_end + 1;
            if line.is_empty() {
                continue;
            }
            if height == 0 {
                width = line.len();
            }
            ensure!(
                line.len() == width,
                "row {} has {} columns, expected {}",
                height,
                line.len(),
                width
            );
            cells.extend_from_slice(line);
            height += 1;
        }
        ensure!(height > 0, "empty grid");
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Parse a grid of single decimal digits, stored as their values 0..=9.
    pub fn digits(input: &str) -> Result<Self> {
        let mut grid = Self::from_bytes(input)?;
        for cell in &mut grid.cells {
            ensure!(
                cell.is_ascii_digit(),
                "invalid grid cell {:?}",
                *cell as char
            );
            *cell -= b'0';
        }
        Ok(grid)
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.height as i32 - 1, self.width as i32 - 1)
    }

    pub fn contains(&self, p: Point) -> bool {
        (0..self.height as i32).contains(&p.row) && (0..self.width as i32).contains(&p.col)
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.contains(p)
            .then(|| &self.cells[p.row as usize * self.width + p.col as usize])
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.contains(p)
            .then(|| &mut self.cells[p.row as usize * self.width + p.col as usize])
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height as i32)
            .flat_map(move |row| (0..self.width as i32).map(move |col| Point::new(row, col)))
    }

    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        &self.cells[p.row as usize * self.width + p.col as usize]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        &mut self.cells[p.row as usize * self.width + p.col as usize]
    }
}
