//! Version command for the hubview CLI.

/// The current version of hubview, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed by `--version`.
pub fn version_string() -> String {
    format!("hubview {}", VERSION)
}
