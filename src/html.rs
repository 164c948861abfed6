//! Pulls the tables out of the opcode reference page.
//!
//! The page is parsed with `scraper`; every `<table>` becomes a [`Table`] of
//! rows of [`Cell`]s. Inside a cell, `<br>` starts a new line and any other
//! markup only contributes its text. A table nested inside a cell is a table
//! of its own and adds nothing to the enclosing cell.
use super::table::{Cell, Row};
use super::*;

use encoding_rs::WINDOWS_1252;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Node, Selector};
use std::fs;
use std::mem;
use std::ops::Deref;
use std::path::Path;

lazy_static! {
    static ref SEL_TABLE: Selector = Selector::parse("table").unwrap();
    static ref SEL_ROW: Selector = Selector::parse("tr").unwrap();
}

/// Read a document from disk; UTF-8 if it decodes as such, otherwise Windows-1252.
pub fn read_to_string(path: &Path) -> Result<String, Error> { Ok(decode(&fs::read(path)?)) }

pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned(),
    }
}

#[derive(Debug, Default)]
pub struct Table {
    pub id: Option<String>,
    pub rows: Vec<Row>,
}

/// All tables of a document in the order their opening tags appear.
#[derive(Debug, Default)]
pub struct Document {
    tables: Vec<Table>,
}
impl Document {
    pub fn parse(text: &str) -> Self {
        let html = Html::parse_document(text);
        let tables = html
            .select(&SEL_TABLE)
            .map(|table| Table {
                id: table.value().attr("id").map(str::to_string),
                rows: rows_of(table),
            })
            .collect();
        Document { tables }
    }
    /// index of the first table whose id is `id`; a table without an id matches ""
    pub fn position_by_id(&self, id: &str) -> Option<usize> {
        self.tables.iter().position(|t| t.id.as_deref().unwrap_or("") == id)
    }
    /// index of the first table (other than `exclude`) holding a cell whose first line is `anchor`
    pub fn position_by_anchor(&self, anchor: &str, exclude: Option<usize>) -> Option<usize> {
        self.tables.iter().enumerate().position(|(i, t)| {
            Some(i) != exclude && t.rows.iter().flatten().any(|c| c.first_line() == Some(anchor))
        })
    }
}
impl Deref for Document {
    type Target = Vec<Table>;
    fn deref(&self) -> &Self::Target { &self.tables }
}

/// The table an element belongs to: the nearest enclosing `<table>`.
fn owning_table(element: ElementRef) -> Option<ElementRef> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
}

fn rows_of(table: ElementRef) -> Vec<Row> {
    table
        .select(&SEL_ROW)
        .filter(|tr| owning_table(*tr) == Some(table))
        .map(|tr| {
            tr.children()
                .filter_map(ElementRef::wrap)
                .filter(|e| matches!(e.value().name(), "td" | "th"))
                .map(cell_of)
                .collect()
        })
        .collect()
}

#[derive(Debug, Default)]
struct CellText {
    lines: Vec<String>,
    line: String,
}
impl CellText {
    fn collect(&mut self, element: ElementRef) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => self.line.push_str(text),
                Node::Element(e) if e.name() == "br" => self.break_line(),
                Node::Element(e) if e.name() == "table" => {}
                Node::Element(_) => {
                    if let Some(inner) = ElementRef::wrap(child) {
                        self.collect(inner);
                    }
                }
                _ => {}
            }
        }
    }
    fn break_line(&mut self) {
        let line = mem::take(&mut self.line);
        // keep a lone &nbsp; so blank cells stay recognizable
        let trimmed = line.trim_matches(|c: char| c.is_ascii_whitespace());
        if !trimmed.is_empty() {
            self.lines.push(trimmed.to_string());
        }
    }
}

fn cell_of(element: ElementRef) -> Cell {
    let mut text = CellText::default();
    text.collect(element);
    text.break_line();
    Cell::new(text.lines)
}
