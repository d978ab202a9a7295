#![doc = include_str!("../README.md")]

// Re-export std common modules
pub mod prelude {
    pub use std::fs;
    pub use std::io;
    pub use std::path::{Path, PathBuf};
    pub use std::process::exit;
    pub use log::{debug, error, info};
}

pub mod cli;
pub use cli::Cli;
pub mod fixes;
pub use fixes::{check, diagnostics_count, load_fixes, Verdict};
