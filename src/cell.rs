//! Turns one table cell into an [`Opcode`].
//!
//! A cell from the reference table looks like this (lines split at `<br>`):
//! ```text
//! LD A,d8        mnemonic, then an optional operand list
//! 2  8           byte length, then the cycle count(s)
//! - - - -        flags Z N H C
//! ```
//! A cell with no text, or only a non-breaking space, is a layout filler and
//! becomes a placeholder entry.
use super::opcode::{Opcode, Timing};
use super::operand;
use super::table::{Cell, CellPos};
use super::*;

/// The raw pieces of a non-blank cell.
#[derive(Debug, PartialEq, Eq)]
pub struct Tokens<'a> {
    pub mnemonic: &'a str,
    pub operand: Option<&'a str>, // everything after the first blank, if anything
    pub size: u8,
    pub timing: Option<Timing>,
}

/// Split a cell into its fields; Ok(None) for a blank cell.
pub fn tokenize(cell: &Cell, pos: CellPos) -> Result<Option<Tokens<'_>>, Error> {
    let Some(text) = cell.first_line().filter(|l| !l.trim().is_empty()) else {
        return Ok(None);
    };
    let (mnemonic, operand) = match text.split_once(' ') {
        Some((mnemonic, operand)) => (mnemonic, Some(operand)),
        None => (text, None),
    };

    let size_line = cell
        .lines
        .get(1)
        .ok_or_else(|| malformed_err!(pos, "\"{}\" has no size field", text))?;
    let mut chars = size_line.chars();
    let size = match chars.next() {
        Some(c @ '1'..='3') => c as u8 - b'0',
        _ => return Err(malformed_err!(pos, "\"{}\" has bad size field \"{}\"", text, size_line)),
    };
    let cycles = chars.as_str().trim();
    let flags = cell.lines.get(2).map(|f| f.trim());
    let timing = if cycles.is_empty() && flags.is_none() {
        None
    } else {
        Some(Timing {
            cycles: cycles.to_string(),
            flags: flags.unwrap_or_default().to_string(),
        })
    };
    Ok(Some(Tokens {
        mnemonic,
        operand,
        size,
        timing,
    }))
}

/// Tokenize and normalize a cell.
pub fn parse_cell(cell: &Cell, pos: CellPos) -> Result<Opcode, Error> {
    let Some(tokens) = tokenize(cell, pos)? else {
        return Ok(Opcode::placeholder());
    };
    let operand = operand::normalize(tokens.operand);
    Ok(Opcode {
        mnemonic: tokens.mnemonic.to_ascii_uppercase(),
        operand: operand.text,
        format: operand.format,
        size: tokens.size,
        timing: tokens.timing,
    })
}
