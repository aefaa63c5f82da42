//! # MOS 6502 lookup table generator
//!
//! Reads a tab-separated listing of the 6502 opcodes (addressing mode, opcode, byte
//! length, cycle count) and prints the three opcode-indexed lookup tables used by the
//! emulator: address mode, base cycle count and instruction byte length.
//!
//! ## Getting Started
//! ```text
//! cargo run -- address-mode-opcodes-bytes-cycles.txt
//! ```
//! ...or if you've already built the binary then just...
//! ```text
//! mktables --style rust > tables.rs
//! ```
//! ## Options
//! Help for command line options is available using -h or --help.
#[macro_use]
mod macros;
mod config;
mod error;
mod record;
mod table;
mod term;
use config::{SchemaArg, Style};
use std::fs;
use std::result::Result;
use std::{fmt, io};
use table::OpcodeTables;
pub(crate) use crate::error::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    term::init();
    let args = &*config::ARGS;
    // render everything first so a failed run prints no tables at all
    let mut out = Vec::new();
    if let Err(e) = process_file(&args.file, args.schema, args.split_on, args.style, &mut out) {
        eprintln!("{}: {}", tag!(red, "ERROR"), e);
        return Err(Box::new(e));
    }
    io::Write::write_all(&mut io::stdout().lock(), &out)?;
    Ok(())
}

/// process_file reads the listing at `filename` and writes its lookup tables to `out`
fn process_file(
    filename: &str, schema: SchemaArg, split_on: usize, style: Style, out: &mut dyn io::Write,
) -> Result<OpcodeTables, Error> {
    let contents = fs::read_to_string(filename)
        .map_err(|e| Error::new(ErrorKind::IO, None, format!("{}: {}", filename, e).as_str()))?;
    let (schema, records) = record::parse_records(&contents, schema)?;
    verbose_println!("{}: {} records in {} layout", filename, records.len(), schema);
    let tables = OpcodeTables::from_records(schema, &records);
    verbose_println!("{} of {} opcodes defined", tables.instr_bytes.defined(), tables.instr_bytes.len());
    tables.write_to(out, split_on, style)?;
    Ok(tables)
}
