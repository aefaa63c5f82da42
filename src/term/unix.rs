use std::sync::atomic::{AtomicBool, Ordering};

static COLOR: AtomicBool = AtomicBool::new(false);

/// Decide once whether diagnostics on stderr may carry ANSI color codes.
pub fn init() {
    // SAFETY: isatty only inspects the descriptor
    let tty = unsafe { libc::isatty(libc::STDERR_FILENO) == 1 };
    COLOR.store(tty, Ordering::Relaxed);
}

pub fn color() -> bool { COLOR.load(Ordering::Relaxed) }
