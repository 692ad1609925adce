use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Turn verbose diagnostics on or off for the rest of the process.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Write a diagnostic line to stderr.
pub fn warn(msg: String) {
    eprintln!("{}", msg);
}

/// Write a diagnostic line to stderr only when verbose output is enabled.
pub fn verbose(msg: String) {
    if is_verbose() {
        eprintln!("{}", msg);
    }
}

/// Works like `eprintln!` but routes through the diagnostic stream.
/// Used for failures that are swallowed rather than returned.
#[macro_export]
macro_rules! diag_eprintln {
    ($($arg:tt)*) => {
        $crate::diag::warn(format!($($arg)*))
    };
}

/// Like `diag_eprintln!`, but silent unless `--verbose` was given.
#[macro_export]
macro_rules! verbose_eprintln {
    ($($arg:tt)*) => {
        $crate::diag::verbose(format!($($arg)*))
    };
}
