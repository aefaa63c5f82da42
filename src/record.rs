//! Parsing of the tab-separated opcode listing.
//!
//! The first line of the listing is a header and is ignored. Every other non-blank
//! line describes one opcode in one of two layouts:
//! ```text
//! mode <TAB> $op <TAB> bytes <TAB> cycles     (Schema::Mode)
//! $op <TAB> bytes <TAB> cycles                (Schema::Plain)
//! ```
//! where `$op` is a hexadecimal byte behind a one character sigil, e.g. `$3D` or `$3d`.
use super::config::SchemaArg;
use super::*;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // one punctuation sigil followed by hex digits
    static ref RE_OPCODE: Regex = Regex::new(r"(?i)^[^0-9a-z_\s]([0-9a-f]+)$").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schema {
    /// addressing mode, opcode, byte length, cycle count
    Mode,
    /// opcode, byte length, cycle count
    Plain,
}
impl Schema {
    pub fn columns(self) -> usize {
        match self {
            Schema::Mode => 4,
            Schema::Plain => 3,
        }
    }
    /// Guess the layout from the column count of a record line.
    pub fn detect(line: &str) -> Option<Schema> {
        match line.split('\t').count() {
            4 => Some(Schema::Mode),
            3 => Some(Schema::Plain),
            _ => None,
        }
    }
    /// Resolve the command line choice; `Auto` looks at `first` (the first record line, if any).
    pub fn resolve(arg: SchemaArg, first: Option<&str>) -> Schema {
        match arg {
            SchemaArg::Mode => Schema::Mode,
            SchemaArg::Plain => Schema::Plain,
            SchemaArg::Auto => first.and_then(Schema::detect).unwrap_or(Schema::Mode),
        }
    }
}
impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Schema::Mode => write!(f, "mode/opcode/bytes/cycles"),
            Schema::Plain => write!(f, "opcode/bytes/cycles"),
        }
    }
}

/// Convert sigil-prefixed hex text (e.g. "$3D") to an opcode.
pub fn parse_opcode(text: &str) -> Result<u8, Error> {
    let text = text.trim();
    let digits = RE_OPCODE
        .captures(text)
        .and_then(|c| c.get(1))
        .ok_or_else(|| opcode_err!("invalid opcode \"{}\" (expected hex with a sigil, e.g. $A9)", text))?
        .as_str()
        .to_ascii_lowercase();
    let value = u32::from_str_radix(&digits, 16).map_err(|_| opcode_err!("opcode \"{}\" is too large", text))?;
    u8::try_from(value).map_err(|_| opcode_err!("opcode \"{}\" is out of range $00-$FF", text))
}

/// One line of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionRecord {
    /// addressing mode tag; None for Schema::Plain listings
    pub mode: Option<String>,
    pub opcode: u8,
    pub bytes: u8,
    pub cycles: u8,
    /// 1-based line number in the listing
    pub line: usize,
}
impl InstructionRecord {
    pub fn parse(line: &str, line_num: usize, schema: Schema) -> Result<Self, Error> {
        let cols: Vec<&str> = line.split('\t').map(str::trim).collect();
        if cols.len() != schema.columns() {
            return Err(syntax_err_line!(
                line_num,
                "expected {} tab-separated columns ({}) but found {}",
                schema.columns(),
                schema,
                cols.len()
            ));
        }
        let (mode, rest) = match schema {
            Schema::Mode => {
                if cols[0].is_empty() {
                    return Err(syntax_err_line!(line_num, "missing addressing mode"));
                }
                (Some(cols[0].to_string()), &cols[1..])
            }
            Schema::Plain => (None, &cols[..]),
        };
        let opcode = parse_opcode(rest[0]).map_err(|mut e| {
            e.line = Some(line_num);
            e
        })?;
        Ok(InstructionRecord {
            mode,
            opcode,
            bytes: parse_count(rest[1], "byte length", line_num)?,
            cycles: parse_count(rest[2], "cycle count", line_num)?,
            line: line_num,
        })
    }
}

fn parse_count(text: &str, what: &str, line_num: usize) -> Result<u8, Error> {
    text.parse::<u8>()
        .map_err(|_| syntax_err_line!(line_num, "invalid {} \"{}\"", what, text))
}

/// Parse a whole listing. The header line is discarded and blank lines are skipped.
pub fn parse_records(contents: &str, schema: SchemaArg) -> Result<(Schema, Vec<InstructionRecord>), Error> {
    let lines: Vec<(usize, &str)> = contents
        .split('\n')
        .enumerate()
        .skip(1)
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();
    let schema = Schema::resolve(schema, lines.first().map(|&(_, l)| l));
    let records = lines
        .into_iter()
        .map(|(n, l)| InstructionRecord::parse(l, n, schema))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok((schema, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn opcode_hex() -> Result<(), Error> {
        assert_eq!(parse_opcode("$3D")?, 61);
        assert_eq!(parse_opcode("$3d")?, 61);
        assert_eq!(parse_opcode("$00")?, 0);
        assert_eq!(parse_opcode("$FF")?, 255);
        assert_eq!(parse_opcode(" $a9 ")?, 0xa9);
        Ok(())
    }
    #[test]
    fn opcode_errors() {
        for bad in ["3D", "G1", "$", "$G1", "$3D!", "", "$100", "$ 3D"] {
            let e = parse_opcode(bad).unwrap_err();
            assert_eq!(e.kind, ErrorKind::Opcode, "{}", bad);
        }
    }
    #[test]
    fn record_mode_schema() -> Result<(), Error> {
        let r = InstructionRecord::parse("IMM\t$A9\t2\t2", 2, Schema::Mode)?;
        assert_eq!(r.mode.as_deref(), Some("IMM"));
        assert_eq!((r.opcode, r.bytes, r.cycles, r.line), (169, 2, 2, 2));
        Ok(())
    }
    #[test]
    fn record_plain_schema() -> Result<(), Error> {
        let r = InstructionRecord::parse("$6C\t0\t5", 9, Schema::Plain)?;
        assert_eq!(r.mode, None);
        assert_eq!((r.opcode, r.bytes, r.cycles), (0x6c, 0, 5));
        Ok(())
    }
    #[test]
    fn record_column_count() {
        let e = InstructionRecord::parse("IMM\t$A9\t2", 3, Schema::Mode).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Syntax);
        assert_eq!(e.line, Some(3));
        let e = InstructionRecord::parse("IMM\t$A9\t2\t2\t9", 3, Schema::Mode).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Syntax);
    }
    #[test]
    fn record_bad_fields() {
        let e = InstructionRecord::parse("IMM\tA9\t2\t2", 4, Schema::Mode).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Opcode);
        assert_eq!(e.line, Some(4));
        let e = InstructionRecord::parse("IMM\t$A9\ttwo\t2", 4, Schema::Mode).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Syntax);
        let e = InstructionRecord::parse("\t$A9\t2\t2", 4, Schema::Mode).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Syntax);
    }
    #[test]
    fn listing_skips_header_and_blanks() -> Result<(), Error> {
        let text = "Mode\tOpcode\tBytes\tCycles\r\nIMM\t$A9\t2\t2\r\n\r\nZPG\t$A5\t2\t3\r\n";
        let (schema, recs) = parse_records(text, SchemaArg::Auto)?;
        assert_eq!(schema, Schema::Mode);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].opcode, 0xa5);
        assert_eq!(recs[1].line, 4);
        Ok(())
    }
    #[test]
    fn listing_detects_plain() -> Result<(), Error> {
        let (schema, recs) = parse_records("Opcode\tBytes\tCycles\n$EA\t1\t2\n", SchemaArg::Auto)?;
        assert_eq!(schema, Schema::Plain);
        assert_eq!(recs[0].opcode, 0xea);
        Ok(())
    }
    #[test]
    fn listing_forced_schema_mismatch() {
        let e = parse_records("hdr\n$EA\t1\t2\n", SchemaArg::Mode).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Syntax);
        assert_eq!(e.line, Some(2));
    }
    #[test]
    fn listing_header_only() -> Result<(), Error> {
        let (schema, recs) = parse_records("Mode\tOpcode\tBytes\tCycles", SchemaArg::Auto)?;
        assert_eq!(schema, Schema::Mode);
        assert!(recs.is_empty());
        assert!(parse_records("", SchemaArg::Auto)?.1.is_empty());
        Ok(())
    }
}
