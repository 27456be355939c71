//! # Logging Module
//!
//! Console output for relicense is split in two: the per-file `Updated:`
//! lines printed through [`info_log!`] on stdout, and diagnostics emitted
//! through `tracing` on stderr. `-v` raises the tracing level and `--quiet`
//! silences [`info_log!`], so the list of updated files can be piped on its
//! own.
//!
//! ## Example
//!
//! ```rust
//! use relicense::info_log;
//! use relicense::logging::{ColorMode, init_tracing};
//!
//! init_tracing(false, 1);
//! ColorMode::Never.apply();
//!
//! tracing::info!("Scanning {}", "src");
//! info_log!("Updated: {}", "src/index.ts");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stdout unless quiet mode is enabled.
///
/// This macro is used for information that should normally be displayed
/// to the user. It uses the same format string syntax as the standard
/// [`println!`] macro.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints one [`info_log!`] line in yellow when colors are enabled.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
