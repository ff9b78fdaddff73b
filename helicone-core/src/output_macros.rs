//! Themed output macros for the create-helicone CLI.
//!
//! Regular output goes to stdout; status lines (success, warnings, errors)
//! go to stderr so they never mix with machine-readable output such as
//! `--list`.

#[macro_export]
macro_rules! hc_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! hc_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! hc_error_hint {
    ($($arg:tt)*) => {
        eprintln!("💡 {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! hc_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    };
}
