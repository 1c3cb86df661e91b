// ANSI escape wrappers for failure reports. Only the styles actually
// used by scenario diagnostics are defined.
#[macro_export]
macro_rules! colored {
    (bold: $s:expr) => {
        concat!("\x1b[1m", $s, "\x1b[0m")
    };
    (red: $s:expr) => {
        concat!("\x1b[31m", $s, "\x1b[0m")
    };
    (green: $s:expr) => {
        concat!("\x1b[32m", $s, "\x1b[0m")
    };
}
