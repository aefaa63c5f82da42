use std::{convert::From, fmt};

/// Error type for table generation. Every error is fatal to the run.
pub struct Error {
    pub kind: ErrorKind,
    /// 1-based line of the input file that caused the error (if known)
    pub line: Option<usize>,
    pub msg: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// wrong column count or malformed numeric column
    Syntax,
    /// opcode text is not a sigil-prefixed hexadecimal byte
    Opcode,
    /// underlying io error
    IO,
    /// catch-all for other errors
    General,
}

impl Error {
    pub fn new(kind: ErrorKind, line: Option<usize>, message: &str) -> Error {
        Error {
            kind,
            line,
            msg: String::from(message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self { Error::new(ErrorKind::IO, None, e.to_string().as_str()) }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{:?}: {}", self.kind, self) }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.msg),
            None => write!(f, "{}", self.msg),
        }
    }
}
impl std::error::Error for Error {}
