//! # Game Boy opcode table extractor
//!
//! Reads the LR35902 opcode reference page (an HTML document holding the
//! unprefixed and the CB-prefixed instruction tables), turns every table cell
//! into a structured [`opcode::Opcode`] record and writes the two 256-entry
//! pages out as Rust source for an emulator's dispatch tables.
//!
//! ## Getting Started
//! ```text
//! cargo run -- /path/to/gb-opcodes-2.html -o src/cpu/opcode_info.rs
//! ```
//! ...or if you've already built the binary then just...
//! ```text
//! gbopx /path/to/gb-opcodes-2.html
//! ```
//! ## Options
//! Help for command line options is available using -h or --help.
#[macro_use]
mod macros;
mod catalog;
mod cell;
mod config;
mod emit;
mod error;
#[cfg(test)]
mod fixture;
mod html;
mod mnemonic;
mod opcode;
mod operand;
mod table;
use crate::catalog::{Catalog, CatalogBuilder};
use crate::emit::Emitter;
use crate::mnemonic::MnemonicIndex;
use crate::table::HtmlTableSource;
use std::path::Path;
use std::result::Result;
pub(crate) use crate::error::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init();
    let output = if config::ARGS.dry_run {
        None
    } else {
        Some(Path::new(config::ARGS.output.as_str()))
    };
    // process_file does all the work
    if let Err(e) = process_file(config::ARGS.file.as_str(), output) {
        println!("{}", e);
        return Err(Box::new(e));
    }
    Ok(())
}

/// Locate both tables in `html`, build the catalog and index its mnemonics.
pub fn extract(html: &str, table_id: &str, anchor: &str) -> Result<(Catalog, MnemonicIndex), Error> {
    let source = HtmlTableSource::locate(html::Document::parse(html), table_id, anchor)?;
    let catalog = CatalogBuilder::build_from(&source)?;
    let mnemonics = MnemonicIndex::from_catalog(&catalog);
    Ok((catalog, mnemonics))
}

/// process_file drives the whole pass: read, extract, optionally list, then write (unless `output` is None)
fn process_file(filename: &str, output: Option<&Path>) -> Result<(), Error> {
    let path = Path::new(filename);
    info!("Reading {}", filename);
    let html = html::read_to_string(path)?;
    let (catalog, mnemonics) = extract(&html, config::table_id(), config::anchor())?;
    info!(
        "Extracted {} opcodes ({} distinct mnemonics)",
        catalog.len(),
        mnemonics.len() - 1
    );
    if config::ARGS.list {
        print!("{}", catalog);
    }
    let source_name = path
        .file_name()
        .map_or_else(|| filename.to_string(), |f| f.to_string_lossy().to_string());
    let emitter = Emitter::new(&catalog, &mnemonics, &source_name).with_timing(config::ARGS.timing);
    match output {
        Some(out) => {
            emitter.write_to_file(out)?;
            info!("Wrote {}", out.display());
        }
        None => info!("Dry run; nothing written"),
    }
    Ok(())
}
