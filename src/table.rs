//! Opcode-indexed lookup tables and their source-literal rendering.
use super::config::Style;
use super::record::{InstructionRecord, Schema};
use super::*;

/// Number of slots in every table, one per 8-bit opcode
pub const TABLE_SIZE: usize = 256;
/// Addressing mode of an opcode with no record
pub const UNDEFINED_MODE: &str = "NUL";

/// A table value that can be written as a source literal.
pub trait Literal {
    fn literal(&self, style: Style) -> String;
    /// element type used for Style::Rust declarations
    fn rust_type() -> &'static str;
}
impl Literal for u8 {
    fn literal(&self, _: Style) -> String { self.to_string() }
    fn rust_type() -> &'static str { "u8" }
}
impl Literal for String {
    fn literal(&self, style: Style) -> String {
        match style {
            Style::Rows => self.clone(),
            Style::Rust => format!("{:?}", self),
        }
    }
    fn rust_type() -> &'static str { "&str" }
}

/// 256 slots indexed by opcode, each starting at the table's default.
#[derive(Debug, Clone)]
pub struct LookupTable<T> {
    default: T,
    slots: Vec<T>,
}
impl<T: Clone + PartialEq + Literal> LookupTable<T> {
    pub fn new(default: T) -> Self {
        LookupTable {
            slots: vec![default.clone(); TABLE_SIZE],
            default,
        }
    }
    /// Overwrite the slot for `opcode`; a later call for the same opcode wins.
    pub fn set(&mut self, opcode: u8, value: T) { self.slots[opcode as usize] = value }
    pub fn len(&self) -> usize { self.slots.len() }
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.slots.iter() }
    /// Number of slots holding something other than the default.
    pub fn defined(&self) -> usize { self.iter().filter(|v| **v != self.default).count() }

    /// Render the values `split_on` per row. Every row ends with a comma so the
    /// rows can be pasted straight into an array initializer.
    pub fn rows(&self, split_on: usize, style: Style) -> Vec<String> {
        self.slots
            .chunks(split_on.max(1))
            .map(|chunk| {
                let vals: Vec<String> = chunk.iter().map(|v| v.literal(style)).collect();
                format!("{},", vals.join(", "))
            })
            .collect()
    }

    /// Write one labeled section: label, rows, then a blank line.
    pub fn write_section(
        &self, f: &mut dyn io::Write, label: &str, name: &str, split_on: usize, style: Style,
    ) -> Result<(), io::Error> {
        match style {
            Style::Rows => {
                writeln!(f, "{}", label)?;
                for row in self.rows(split_on, style) {
                    writeln!(f, "{}", row)?;
                }
            }
            Style::Rust => {
                writeln!(f, "// {}", label.trim_end_matches(':'))?;
                writeln!(f, "pub const {}: [{}; {}] = [", name, T::rust_type(), TABLE_SIZE)?;
                for row in self.rows(split_on, style) {
                    writeln!(f, "    {}", row)?;
                }
                writeln!(f, "];")?;
            }
        }
        writeln!(f)
    }
}
impl<T> std::ops::Index<u8> for LookupTable<T> {
    type Output = T;
    fn index(&self, opcode: u8) -> &T { &self.slots[opcode as usize] }
}

/// The tables produced from one listing.
#[derive(Debug)]
pub struct OpcodeTables {
    /// addressing modes; only built from listings that carry a mode column
    pub address_modes: Option<LookupTable<String>>,
    pub num_cycles: LookupTable<u8>,
    pub instr_bytes: LookupTable<u8>,
}
impl OpcodeTables {
    pub fn new(schema: Schema) -> Self {
        OpcodeTables {
            address_modes: match schema {
                Schema::Mode => Some(LookupTable::new(UNDEFINED_MODE.to_string())),
                Schema::Plain => None,
            },
            num_cycles: LookupTable::new(0),
            instr_bytes: LookupTable::new(0),
        }
    }
    pub fn from_records(schema: Schema, records: &[InstructionRecord]) -> Self {
        let mut tables = OpcodeTables::new(schema);
        let mut seen: [Option<usize>; TABLE_SIZE] = [None; TABLE_SIZE];
        for r in records {
            match seen[r.opcode as usize] {
                Some(prev) if config::ARGS.verbose => {
                    warn!("opcode ${:02X} on line {} replaces line {}", r.opcode, r.line, prev)
                }
                _ => {}
            }
            seen[r.opcode as usize] = Some(r.line);
            tables.insert(r);
        }
        tables
    }
    pub fn insert(&mut self, r: &InstructionRecord) {
        if let (Some(modes), Some(mode)) = (self.address_modes.as_mut(), r.mode.as_ref()) {
            modes.set(r.opcode, mode.clone());
        }
        self.num_cycles.set(r.opcode, r.cycles);
        self.instr_bytes.set(r.opcode, r.bytes);
    }
    pub fn write_to(&self, f: &mut dyn io::Write, split_on: usize, style: Style) -> Result<(), io::Error> {
        if let Some(modes) = self.address_modes.as_ref() {
            modes.write_section(f, "Address modes lkup:", "INSTR_ADDR_MODE", split_on, style)?;
        }
        self.num_cycles
            .write_section(f, "Num cycles base lkup:", "NUM_CYCLES_BASE", split_on, style)?;
        self.instr_bytes
            .write_section(f, "Instruction bytes lkup:", "INSTR_BYTES", split_on, style)
    }
}
