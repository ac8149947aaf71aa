//! Translate a text map into Jack statements that fill the map array
//!
//! The map is a 32x16 grid of characters. Each row of the text file is a
//! row of the grid; the generated statements zero a 512-cell array `m`,
//! write the wall, ball and enemy codes into it and construct the player
//! start position `sp`.
//!
//! # Examples
//! ```
//! use map_translator::{emit, GameMap, Point};
//!
//! let text = "###\n s \n###";
//! let map = GameMap::parse(text).unwrap();
//! assert_eq!(map.start(), &Point { x: 1, y: 1 });
//!
//! let mut out = Vec::new();
//! emit(&map, &mut out).unwrap();
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("let sp = Position.new(1, 1);"));
//! assert!(out.contains("\tlet m[2 * 32 + i] = 1;"));
//! ```

use anyhow::{anyhow, bail};
use itertools::Itertools;
use log::{debug, info, warn};

pub mod emitter;
#[cfg(feature = "mapgen")]
pub mod map_generator;

pub use emitter::emit;

/// Number of columns in the map
pub const WIDTH: usize = 32;
/// Number of rows in the map
pub const HEIGHT: usize = 16;
/// Total number of cells in the map array
pub const CELLS: usize = WIDTH * HEIGHT;

/// Location in the map
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// Contents of a single map cell, as stored in the array
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Cell {
    #[default]
    Empty = 0,
    Wall = 1,
    Ball = 2,
    Enemy = 3,
}

impl Cell {
    /// Integer written into the map array for this cell
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Meaning of a character in the map text
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Tile {
    Cell(Cell),
    /// Player start, stored as [Cell::Empty]
    Start,
}

impl Tile {
    pub const S_EMPTY: char = ' ';
    pub const S_WALL: char = '#';
    pub const S_BALL: char = 'b';
    pub const S_ENEMY: char = 'e';
    pub const S_START: char = 's';

    /// Classify a map character, `None` if it is not part of the alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::S_EMPTY => Some(Tile::Cell(Cell::Empty)),
            Self::S_WALL => Some(Tile::Cell(Cell::Wall)),
            Self::S_BALL => Some(Tile::Cell(Cell::Ball)),
            Self::S_ENEMY => Some(Tile::Cell(Cell::Enemy)),
            Self::S_START => Some(Tile::Start),
            _ => None,
        }
    }

    /// Cell stored in the array for this tile
    pub fn cell(self) -> Cell {
        match self {
            Tile::Cell(cell) => cell,
            Tile::Start => Cell::Empty,
        }
    }
}

/// Parsed map, ready for emission
#[derive(Debug)]
pub struct GameMap {
    /// Row-major cells, `index = y * WIDTH + x`
    cells: Vec<Cell>,
    /// Player start position
    start: Point,
}

impl GameMap {
    /// Parse map from text
    ///
    /// - `text`: Map rows separated by newlines. Trailing whitespace of
    ///   each row is ignored, leading whitespace is empty cells.
    ///
    /// An empty row leaves the whole row empty. A row made of one repeated
    /// character fills all [WIDTH] cells of that row. Other rows are read
    /// cell by cell from the left edge.
    ///
    /// Returns error, if the map contains unknown characters, does not fit
    /// in [WIDTH]x[HEIGHT], or has no start marker. If there are several
    /// start markers, the last one is used.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut cells = vec![Cell::Empty; CELLS];
        let mut start: Option<Point> = None;

        for (y, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                debug!("Row {y}: empty");
                continue;
            }
            if y >= HEIGHT {
                bail!("Map has more than {HEIGHT} rows, found content on row y={y}");
            }
            if line.chars().count() > WIDTH {
                bail!("Row y={y} is wider than {WIDTH} columns");
            }
            let row = &mut cells[y * WIDTH..(y + 1) * WIDTH];

            // A row of start markers is uniform too; it records no start
            let first = line.chars().next().unwrap_or(Tile::S_EMPTY);
            if line.chars().all_equal() {
                let tile = Self::classify(first, 0, y)?;
                debug!("Row {y}: uniform `{first}`");
                row.fill(tile.cell());
                continue;
            }

            debug!("Row {y}: mixed");
            for (x, c) in line.chars().enumerate() {
                let tile = Self::classify(c, x, y)?;
                if tile == Tile::Start {
                    if let Some(prev) = &start {
                        warn!(
                            "Start position at x={}, y={} replaced by x={x}, y={y}",
                            prev.x, prev.y
                        );
                    }
                    start = Some(Point { x, y });
                }
                row[x] = tile.cell();
            }
        }

        let start = start.ok_or_else(|| anyhow!("Start position not found in map"))?;
        let map = GameMap { cells, start };
        info!(
            "Parsed map with {} non-empty cells, start at x={}, y={}",
            map.cells.iter().filter(|c| **c != Cell::Empty).count(),
            map.start.x,
            map.start.y
        );
        Ok(map)
    }

    fn classify(c: char, x: usize, y: usize) -> anyhow::Result<Tile> {
        Tile::from_char(c).ok_or_else(|| anyhow!("Unexpected character `{c}` at y={y}, x={x}"))
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `y`
    pub(crate) fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Cell at column `x`, row `y`
    pub(crate) fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * WIDTH + x]
    }

    /// Player start position
    pub fn start(&self) -> &Point {
        &self.start
    }
}
