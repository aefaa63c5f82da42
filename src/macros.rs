#![allow(unused_macros, dead_code)]
// Diagnostics go to stderr; stdout is reserved for the generated tables.
macro_rules! verbose_println {
    ($($p:expr),+) => {
        if crate::config::ARGS.verbose {
            eprintln!($($p),+);
        }
    }
}
macro_rules! tag {
    ($color:ident, $tag:literal) => {
        if crate::term::color() {
            $color!($tag)
        } else {
            $tag
        }
    };
}
macro_rules! info {
    ($($p:expr),+) => {
        eprintln!("{}: {}", tag!(blue, "INFO"), format_args!($($p),+))
    }
}
macro_rules! warn {
    ($($p:expr),+) => {
        eprintln!("{}: {}", tag!(yellow, "WARNING"), format_args!($($p),+))
    }
}
macro_rules! general_err {
    ($msg:expr) => {
        Error::new(crate::ErrorKind::General, None, format!("{}", $msg).as_str())
    };
}
macro_rules! syntax_err_line {
    ($line:expr, $($msg:expr),+) => {
        Error::new(crate::ErrorKind::Syntax, Some($line), format!($($msg),+).as_str())
    };
}
macro_rules! opcode_err {
    ($($msg:expr),+) => {
        Error::new(crate::ErrorKind::Opcode, None, format!($($msg),+).as_str())
    };
}
macro_rules! color {
    ($color: literal, $msg: expr) => {
        concat!("\x1b[", $color, "m", $msg, "\x1b[0m")
    };
}
macro_rules! red {
    ($msg:expr) => {
        color!(91, $msg)
    };
}
macro_rules! yellow {
    ($msg:expr) => {
        color!(93, $msg)
    };
}
macro_rules! blue {
    ($msg:expr) => {
        color!(94, $msg)
    };
}
