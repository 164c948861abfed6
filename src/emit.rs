//! Renders a catalog as Rust source for the emulator's dispatch tables.
//!
//! The output holds a `Format` enum, an `Opcode` record type, one
//! `[Opcode; 256]` static per page and a `Mnemonic` enum built from the
//! [`MnemonicIndex`]. Every record carries its page index as a trailing
//! comment so the tables can be read by eye.
use super::catalog::{Catalog, PAGE_SIZE};
use super::mnemonic::MnemonicIndex;
use super::opcode::{Format, Opcode, Page};
use super::*;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct Emitter<'a> {
    catalog: &'a Catalog,
    mnemonics: &'a MnemonicIndex,
    source_name: String, // named in the header comment
    timing: bool,        // emit cycles and flags alongside each record
}
impl<'a> Emitter<'a> {
    pub fn new(catalog: &'a Catalog, mnemonics: &'a MnemonicIndex, source_name: &str) -> Self {
        Emitter {
            catalog,
            mnemonics,
            source_name: source_name.to_string(),
            timing: false,
        }
    }
    pub fn with_timing(mut self, timing: bool) -> Self {
        self.timing = timing;
        self
    }
    pub fn write(&self, f: &mut dyn io::Write) -> Result<(), Error> {
        f.write_all(self.to_string().as_bytes())?;
        Ok(())
    }
    /// Write the whole artifact to a temp file next to `path`, then move it into place.
    pub fn write_to_file(&self, path: &Path) -> Result<(), Error> {
        let tmp = temp_path(path);
        let mut file = fs::File::create(&tmp)?;
        let written = self.write(&mut file).and_then(|_| Ok(file.sync_all()?));
        drop(file);
        if let Err(e) = written.and_then(|_| Ok(fs::rename(&tmp, path)?)) {
            _ = fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(())
    }

    fn write_types(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "#[derive(Clone, Copy, Debug, PartialEq, Eq)]")?;
        writeln!(f, "pub enum Format {{")?;
        for format in [Format::None, Format::X2, Format::X4] {
            writeln!(f, "    {},", format.variant())?;
        }
        writeln!(f, "}}\n")?;
        writeln!(f, "#[derive(Clone, Copy, Debug)]")?;
        writeln!(f, "pub struct Opcode {{")?;
        writeln!(f, "    pub name: &'static str,")?;
        writeln!(f, "    pub oper: &'static str,")?;
        writeln!(f, "    pub format: Format,")?;
        writeln!(f, "    pub size: u8,")?;
        if self.timing {
            writeln!(f, "    pub cycles: &'static str,")?;
            writeln!(f, "    pub flags: &'static str,")?;
        }
        writeln!(f, "}}")
    }
    fn write_page(&self, f: &mut fmt::Formatter, page: Page) -> fmt::Result {
        writeln!(f, "pub static {}: [Opcode; {}] = [", page.table_name(), PAGE_SIZE)?;
        for (i, op) in self.catalog.page(page).iter().enumerate() {
            writeln!(f, "    {}, // {:02X}{}", self.record(op), i, if op.is_jump() { " jump" } else { "" })?;
        }
        writeln!(f, "];")
    }
    fn record(&self, op: &Opcode) -> String {
        let mut s = format!(
            "Opcode {{ name: {:?}, oper: {:?}, format: Format::{}, size: {}",
            op.mnemonic.to_lowercase(),
            op.operand.to_lowercase(),
            op.format.variant(),
            op.size
        );
        if self.timing {
            let timing = op.timing.clone().unwrap_or_default();
            s.push_str(&format!(", cycles: {:?}, flags: {:?}", timing.cycles, timing.flags));
        }
        s.push_str(" }");
        s
    }
    fn write_mnemonics(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "#[allow(non_camel_case_types, clippy::upper_case_acronyms)]")?;
        writeln!(f, "#[derive(Clone, Copy, Debug, PartialEq, Eq)]")?;
        writeln!(f, "pub enum Mnemonic {{")?;
        for m in self.mnemonics.iter() {
            writeln!(f, "    {},", identifier(m))?;
        }
        writeln!(f, "}}")
    }
}
impl fmt::Display for Emitter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "// @generated by gbopx from {}. Do not edit.\n", self.source_name)?;
        self.write_types(f)?;
        for page in Page::ALL {
            writeln!(f)?;
            self.write_page(f, page)?;
        }
        writeln!(f)?;
        self.write_mnemonics(f)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// A mnemonic as an enum variant: non-alphanumerics become '_', no leading digit.
fn identifier(mnemonic: &str) -> String {
    let mut id: String = mnemonic
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    if !id.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        id.insert(0, '_');
    }
    id
}
