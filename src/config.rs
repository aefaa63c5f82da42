use clap::{Parser, ValueEnum};
use clap_num::number_range;
use lazy_static::lazy_static;

/// Name of the opcode listing used when no file is given on the command line
pub const DEFAULT_FILE: &str = "address-mode-opcodes-bytes-cycles.txt";
/// Number of table values printed per output row
pub const DEFAULT_SPLIT_ON: usize = 16;

/// Column layout of the opcode listing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaArg {
    /// Pick the layout from the column count of the first record
    Auto,
    /// mode, opcode, bytes, cycles
    Mode,
    /// opcode, bytes, cycles
    Plain,
}

/// How the tables are rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Labeled rows of comma separated values
    Rows,
    /// Rust `pub const` array declarations
    Rust,
}

fn split_width(s: &str) -> Result<usize, String> { number_range(s, 1, 256) }

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
pub struct Args {
    /// Tab-separated opcode listing (first line is a header)
    #[arg(default_value = DEFAULT_FILE)]
    pub file: String,

    /// Column layout of the listing
    #[arg(short, long, value_enum, default_value_t = SchemaArg::Auto)]
    pub schema: SchemaArg,

    /// Number of values per output row
    #[arg(long, value_parser = split_width, default_value_t = DEFAULT_SPLIT_ON)]
    pub split_on: usize,

    /// Output style
    #[arg(long, value_enum, default_value_t = Style::Rows)]
    pub style: Style,

    /// Enable verbose output (on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

lazy_static! {
    pub static ref ARGS: Args = if cfg!(test) {
        // manually set parameters for running tests
        Args::parse_from(["test"])
    } else {
        Args::parse()
    };
}
