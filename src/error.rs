use crate::table::CellPos;
use std::{convert::From, fmt};

/// Simple custom Error for the extractor
pub struct Error {
    pub kind: ErrorKind,
    pub ctx: Option<CellPos>,
    pub msg: String,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// an expected table or anchor cell is missing from the source document
    Lookup,
    /// a cell doesn't follow the `MNEMONIC[ OPERAND]` / size-line convention
    Malformed,
    /// the tables didn't yield exactly two pages of 256 cells
    Layout,
    /// underlying io error
    IO,
}

impl Error {
    pub fn new(kind: ErrorKind, ctx: Option<CellPos>, message: &str) -> Error {
        Error {
            kind,
            ctx,
            msg: String::from(message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self { Error::new(ErrorKind::IO, None, e.to_string().as_str()) }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {:?}: {}", red!("gbopx::Error"), self.kind, self.msg)
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut res = write!(f, "{}", self.msg);
        if res.is_ok() {
            if let Some(ctx) = self.ctx {
                res = write!(f, "\nContext: {}", ctx);
            }
        }
        res
    }
}
impl std::error::Error for Error {}
