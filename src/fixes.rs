use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde_yaml::Value;

/// Outcome of checking a fixes export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The export parsed and holds no diagnostics.
    Clean,
    /// The export holds this many diagnostics.
    Warnings(usize),
}

impl Verdict {
    /// The one-line verdict printed to stdout.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Clean => "No warnings found in clang-tidy export.",
            Verdict::Warnings(_) => "Found warnings in clang-tidy export, please fix them.",
        }
    }

    /// The exit status CI gates on: 0 for clean, 1 for warnings.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Clean => 0,
            Verdict::Warnings(_) => 1,
        }
    }
}

/// Read the fixes export at `path` and parse it into a generic YAML value.
/// The file handle is released as soon as the contents are read.
pub fn load_fixes(path: &Path) -> Result<Value> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Reading fixes export {:?}", path))?;
    serde_yaml::from_str(&contents).with_context(|| format!("Parsing fixes export {:?}", path))
}

/// Count the entries under the top-level `Diagnostics` key.
///
/// Total over any document shape: an empty document, a non-mapping top
/// level, a missing key, or a non-sequence value all count as zero.
pub fn diagnostics_count(doc: &Value) -> usize {
    doc.get("Diagnostics")
        .and_then(Value::as_sequence)
        .map_or(0, Vec::len)
}

/// Check the export at `path` and return the verdict.
pub fn check(path: &Path) -> Result<Verdict> {
    let doc = load_fixes(path)?;
    let count = diagnostics_count(&doc);
    debug!("{} diagnostics in {:?}", count, path);
    if count > 0 {
        Ok(Verdict::Warnings(count))
    } else {
        Ok(Verdict::Clean)
    }
}
