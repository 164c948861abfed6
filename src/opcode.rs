//! Record types for the extracted catalog.
use std::fmt;

/// Mnemonic given to entries that stand in for a blank table cell
pub const PLACEHOLDER_MNEMONIC: &str = "pre";
/// Operand text for instructions without an explicit operand
pub const NO_OPERAND: &str = "N/A";
/// Mnemonics that change the flow of control
pub const JUMP_MNEMONICS: [&str; 6] = ["JP", "JR", "CALL", "RET", "RETI", "RST"];

/// One of the two 256-entry opcode spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Unprefixed,
    /// opcodes following the 0xCB prefix byte
    Prefixed,
}
impl Page {
    pub const ALL: [Page; 2] = [Page::Unprefixed, Page::Prefixed];
    /// name of the static the page is emitted as
    pub fn table_name(self) -> &'static str {
        match self {
            Page::Unprefixed => "OP_INFO_00",
            Page::Prefixed => "OP_INFO_CB",
        }
    }
    pub fn ordinal(self) -> usize {
        match self {
            Page::Unprefixed => 0,
            Page::Prefixed => 1,
        }
    }
}
impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Page::Unprefixed => write!(f, "unprefixed"),
            Page::Prefixed => write!(f, "prefixed"),
        }
    }
}

/// Width of the immediate data that follows the opcode byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    None,
    /// one byte of immediate data
    X2,
    /// two bytes of immediate data or an address, or a relative jump
    X4,
}
impl Format {
    pub fn tag(self) -> &'static str {
        match self {
            Format::None => "",
            Format::X2 => "x2",
            Format::X4 => "x4",
        }
    }
    pub fn variant(self) -> &'static str {
        match self {
            Format::None => "None",
            Format::X2 => "X2",
            Format::X4 => "X4",
        }
    }
}

/// Cycle count and flag effects, copied verbatim from the cell
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timing {
    pub cycles: String,
    pub flags: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub mnemonic: String,  // uppercase, or PLACEHOLDER_MNEMONIC
    pub operand: String,   // normalized operand, NO_OPERAND, or "" for placeholders
    pub format: Format,    // immediate width inferred from the operand placeholders
    pub size: u8,          // instruction length in bytes (0 for placeholders)
    pub timing: Option<Timing>,
}
impl Opcode {
    pub fn placeholder() -> Self {
        Opcode {
            mnemonic: PLACEHOLDER_MNEMONIC.to_string(),
            operand: String::new(),
            format: Format::None,
            size: 0,
            timing: None,
        }
    }
    pub fn is_placeholder(&self) -> bool { self.size == 0 && self.mnemonic == PLACEHOLDER_MNEMONIC }
    pub fn is_jump(&self) -> bool { !self.is_placeholder() && is_jump(&self.mnemonic) }
}
impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:6} {:10} {:2} {}",
            self.mnemonic,
            self.operand,
            self.format.tag(),
            self.size
        )
    }
}

/// True if `mnemonic` is a jump, call, return or restart.
pub fn is_jump(mnemonic: &str) -> bool { JUMP_MNEMONICS.iter().any(|j| j.eq_ignore_ascii_case(mnemonic)) }
