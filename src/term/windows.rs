use std::sync::atomic::{AtomicBool, Ordering};
use windows::Win32::System::Console::*;

static COLOR: AtomicBool = AtomicBool::new(false);

pub fn init() {
    unsafe {
        // stderr is a console only if GetConsoleMode succeeds; make sure VT escape sequences will be honored
        let mut cm: CONSOLE_MODE = CONSOLE_MODE::default();
        if let Ok(h) = GetStdHandle(STD_ERROR_HANDLE) {
            if GetConsoleMode(h, &mut cm as *mut CONSOLE_MODE).as_bool() {
                if (cm.0 & 0x4) == 0 {
                    cm.0 |= 0x4;
                    SetConsoleMode(h, cm);
                }
                COLOR.store(true, Ordering::Relaxed);
            }
        }
    }
}

pub fn color() -> bool { COLOR.load(Ordering::Relaxed) }
