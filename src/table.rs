//! Access to the two instruction tables.
//!
//! The catalog builder only ever sees rows of [`Cell`]s through the
//! [`TableSource`] trait, so the way the tables are found can be swapped out
//! (tests feed synthetic rows straight in).
use super::html::Document;
use super::opcode::Page;
use super::*;
use std::fmt;

/// Number of leading rows in each table that hold the column legend (`x0`..`xF`)
pub const LEGEND_ROWS: usize = 1;
/// Number of leading cells in each row that hold the row legend (`0x`..`Fx`)
pub const LEGEND_CELLS: usize = 1;

/// The text of one table cell, one entry per line (lines are separated by `<br>`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub lines: Vec<String>,
}
impl Cell {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Cell {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
    pub fn first_line(&self) -> Option<&str> { self.lines.first().map(String::as_str) }
}

pub type Row = Vec<Cell>;

/// Where a cell sits in the source document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPos {
    pub table: Page,
    pub row: usize,
    pub col: usize,
}
impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} table, row {}, cell {}", self.table, self.row, self.col)
    }
}

/// Something that can hand out the rows of both instruction tables in document order.
pub trait TableSource {
    fn unprefixed_rows(&self) -> Result<&[Row], Error>;
    fn prefixed_rows(&self) -> Result<&[Row], Error>;
    fn rows(&self, page: Page) -> Result<&[Row], Error> {
        match page {
            Page::Unprefixed => self.unprefixed_rows(),
            Page::Prefixed => self.prefixed_rows(),
        }
    }
}

/// Finds the tables in a parsed HTML document: the unprefixed table by its id,
/// the prefixed one as the table enclosing a known anchor cell.
#[derive(Debug)]
pub struct HtmlTableSource {
    doc: Document,
    unprefixed: usize,
    prefixed: usize,
}
impl HtmlTableSource {
    pub fn locate(doc: Document, table_id: &str, anchor: &str) -> Result<Self, Error> {
        let unprefixed = doc
            .position_by_id(table_id)
            .ok_or_else(|| lookup_err!("no table with id \"{}\" in source document", table_id))?;
        let prefixed = doc
            .position_by_anchor(anchor, Some(unprefixed))
            .ok_or_else(|| lookup_err!("no table contains anchor cell \"{}\"", anchor))?;
        verbose_println!(
            "unprefixed table is #{} ({} rows), prefixed table is #{} ({} rows)",
            unprefixed,
            doc[unprefixed].rows.len(),
            prefixed,
            doc[prefixed].rows.len()
        );
        Ok(HtmlTableSource {
            doc,
            unprefixed,
            prefixed,
        })
    }
}
impl TableSource for HtmlTableSource {
    fn unprefixed_rows(&self) -> Result<&[Row], Error> { Ok(&self.doc[self.unprefixed].rows) }
    fn prefixed_rows(&self) -> Result<&[Row], Error> { Ok(&self.doc[self.prefixed].rows) }
}
