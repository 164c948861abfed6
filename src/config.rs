use clap::Parser;
use lazy_static::lazy_static;

/// Where the opcode reference page is read from unless a file is given
pub const DEFAULT_SOURCE: &str = "gb-opcodes-2.html";
/// Where the generated Rust source is written unless -o is given
pub const DEFAULT_OUTPUT: &str = "opcode_info.rs";
/// The unprefixed table is the first table carrying this id (a table without an id counts as "")
pub const DEFAULT_TABLE_ID: &str = "";
/// Text of a cell that only appears in the CB-prefixed table
pub const DEFAULT_ANCHOR: &str = "RLC B";

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
pub struct Args {
    /// HTML opcode reference page to extract the tables from
    #[arg(default_value = DEFAULT_SOURCE)]
    pub file: String,

    /// Destination for the generated Rust source
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// id attribute of the unprefixed table
    #[arg(long)]
    pub table_id: Option<String>,

    /// Text of a cell that identifies the prefixed table
    #[arg(long)]
    pub anchor: Option<String>,

    /// Print a listing of both pages to stdout
    #[arg(short, long)]
    pub list: bool,

    /// Extract and report but don't write the output file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Also emit the cycle counts and flag effects copied from each cell
    #[arg(short, long)]
    pub timing: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

lazy_static! {
    pub static ref ARGS: Args = if cfg!(test) {
        // manually set parameters for running tests
        Args::parse_from(["test", "--dry-run"])
    } else {
        Args::parse()
    };
}

pub fn init() { lazy_static::initialize(&ARGS); }
pub fn table_id() -> &'static str { ARGS.table_id.as_deref().unwrap_or(DEFAULT_TABLE_ID) }
pub fn anchor() -> &'static str { ARGS.anchor.as_deref().unwrap_or(DEFAULT_ANCHOR) }
