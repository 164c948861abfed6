//! Operand normalization.
//!
//! The reference table writes immediate data as placeholders inside the
//! operand text (`d8`, `d16`, `a16`, `r8`). Normalizing turns that into a
//! [`Format`] tag plus whatever register or condition text is left over.
use super::opcode::{Format, NO_OPERAND};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// immediate data placeholders stripped from the operand text
    static ref RE_PLACEHOLDER: Regex = Regex::new(r"d16|a16|d8|r8").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand {
    pub text: String,
    pub format: Format,
}
impl Operand {
    pub fn none() -> Self {
        Operand {
            text: NO_OPERAND.to_string(),
            format: Format::None,
        }
    }
}

/// Normalize everything after the mnemonic (`raw` is None if the cell has no operand).
///
/// With two operands and an `a16` among them, the second operand is the one
/// kept. The address ends up in the format tag either way. Separators left
/// dangling by a removed placeholder are dropped too.
pub fn normalize(raw: Option<&str>) -> Operand {
    let Some(raw) = raw else { return Operand::none() };
    let tokens: Vec<&str> = raw.split(',').collect();
    let first = tokens[0];
    let kept = if tokens.len() > 1 && raw.contains("a16") { tokens[1] } else { raw };
    let format = infer_format(kept, first);
    let stripped = RE_PLACEHOLDER.replace_all(kept, "");
    // "A,d8" leaves "A," behind
    let text = stripped.trim_matches(|c: char| c == ',' || c.is_ascii_whitespace()).to_string();
    if text.is_empty() {
        Operand {
            text: NO_OPERAND.to_string(),
            format,
        }
    } else {
        Operand { text, format }
    }
}

fn infer_format(operand: &str, first: &str) -> Format {
    if operand.contains("d8") {
        Format::X2
    } else if operand.contains("r8") || operand.contains("16") || first.contains("16") {
        Format::X4
    } else {
        Format::None
    }
}
