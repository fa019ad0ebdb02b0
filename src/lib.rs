//! Two-player chess in the terminal. The players take turns typing moves in
//! coordinate notation (e.g. "e2 e3") and every move is checked against the
//! movement rules of the piece before it is played.
//!
//! The rules engine lives in [`chess`] and does no I/O; [`console`] is the
//! interactive loop around it.

pub mod chess;
pub mod config;
pub mod console;
pub mod logging;

use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the version and the GitHub repository on
/// startup.
pub fn print_info() {
    println!("Chess console {}", version());
    println!("<{}>", env!("CARGO_PKG_REPOSITORY"));
}

/// Prints the build type and whether the build is clean.
pub fn print_binary_info() {
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
}
