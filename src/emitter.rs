//! Render a parsed map as Jack statements.

use std::io::{self, Write};

use itertools::Itertools;

use crate::{Cell, GameMap, CELLS, HEIGHT, WIDTH};

/// How the cells of one row are written out
#[derive(PartialEq, Eq, Debug)]
pub enum RowEmission {
    /// Nothing to write, the preamble already zeroed the row
    Skip,
    /// Whole row holds the same code, written with a counting loop
    Loop(Cell),
    /// Each non-empty cell gets its own assignment
    Cells,
}

impl RowEmission {
    pub fn for_row(row: &[Cell]) -> Self {
        match row.iter().all_equal_value() {
            Ok(Cell::Empty) => RowEmission::Skip,
            Ok(&cell) => RowEmission::Loop(cell),
            Err(None) => RowEmission::Skip,
            Err(Some(_)) => RowEmission::Cells,
        }
    }
}

/// Write statements reconstructing `map` into `out`
///
/// The statements zero the array `m`, set uniform rows with a loop, create
/// `sp` from the start position and then assign the remaining non-empty
/// cells in ascending index order.
pub fn emit<W: Write>(map: &GameMap, out: &mut W) -> io::Result<()> {
    writeln!(out, "let i = 0;")?;
    writeln!(out, "while (i < {CELLS}) {{")?;
    writeln!(out, "    let m[i] = 0;")?;
    writeln!(out, "    let i = i + 1;")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    let rows: Vec<RowEmission> = (0..HEIGHT)
        .map(|y| RowEmission::for_row(map.row(y)))
        .collect();

    for (y, emission) in rows.iter().enumerate() {
        if let RowEmission::Loop(cell) = emission {
            writeln!(out, "let i = 0;")?;
            writeln!(out, "while (i < {WIDTH}) {{")?;
            writeln!(out, "\tlet m[{y} * {WIDTH} + i] = {};", cell.code())?;
            writeln!(out, "\tlet i = i + 1;")?;
            writeln!(out, "}}")?;
        }
    }

    let start = map.start();
    writeln!(out, "let sp = Position.new({}, {});", start.x, start.y)?;

    for (y, emission) in rows.iter().enumerate() {
        if *emission != RowEmission::Cells {
            continue;
        }
        for (x, cell) in map.row(y).iter().enumerate() {
            if *cell != Cell::Empty {
                writeln!(out, "let m[{}] = {};", y * WIDTH + x, cell.code())?;
            }
        }
    }
    out.flush()
}
