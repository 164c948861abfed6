//! The distinct mnemonics of a catalog, for the consumer's instruction enum.
use super::catalog::Catalog;
use super::*;
use std::collections::HashSet;
use std::ops::Deref;

/// Stands for an opcode that failed to decode; always the last mnemonic
pub const ERROR_MNEMONIC: &str = "ERR";

#[derive(Debug, PartialEq, Eq)]
pub struct MnemonicIndex {
    names: Vec<String>,
}
impl MnemonicIndex {
    /// Upper-cased mnemonics of all real entries in first-seen order, then ERROR_MNEMONIC.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::from_mnemonics(
            catalog
                .entries()
                .filter(|(_, _, op)| !op.is_placeholder())
                .map(|(_, _, op)| op.mnemonic.as_str()),
        )
    }
    pub fn from_mnemonics<'a>(mnemonics: impl IntoIterator<Item = &'a str>) -> Self {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for m in mnemonics {
            let m = m.to_ascii_uppercase();
            if m == ERROR_MNEMONIC {
                warn!("opcode table uses reserved mnemonic {}; it will share the decode error slot", m);
                continue;
            }
            if seen.insert(m.clone()) {
                names.push(m);
            }
        }
        names.push(ERROR_MNEMONIC.to_string());
        MnemonicIndex { names }
    }
}
impl Deref for MnemonicIndex {
    type Target = Vec<String>;
    fn deref(&self) -> &Self::Target { &self.names }
}
