//! App-wide constants.
//!
//! Centralises the tool name, config paths, and environment variable
//! names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "mathdemo";

/// Crate version, as baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.mathdemo.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".mathdemo.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "mathdemo";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_WORDS: &str = "MATHDEMO_WORDS";
