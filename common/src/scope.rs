//! # Scope file loading
//!
//! A scope file lists one subnet per line. Blank lines and lines starting with `#`
//! are skipped. Every other line must be valid IPv4 network notation: malformed
//! entries are collected and rejected together so the operator can fix the file in
//! one pass, and nothing is scanned until the whole file is clean.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::network::subnet::{Subnet, SubnetError};

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("scope file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read scope file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("scope file contains {}", malformed_entries(.0.len()))]
    Malformed(Vec<InvalidLine>),
}

/// A rejected scope entry and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    pub line: usize,
    pub content: String,
    pub error: SubnetError,
}

impl fmt::Display for InvalidLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

fn malformed_entries(count: usize) -> String {
    match count {
        1 => "1 malformed entry".to_string(),
        n => format!("{n} malformed entries"),
    }
}

/// Reads and parses the scope file at `path`. A file with nothing but comments
/// and blank lines yields an empty list.
pub fn load(path: &Path) -> Result<Vec<Subnet>, ScopeError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ScopeError::NotFound(path.to_path_buf()),
        _ => ScopeError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let subnets = parse(&text).map_err(ScopeError::Malformed)?;
    debug!("Loaded {} subnets from {}", subnets.len(), path.display());
    Ok(subnets)
}

/// Parses scope file contents, keeping file order.
pub fn parse(text: &str) -> Result<Vec<Subnet>, Vec<InvalidLine>> {
    let mut subnets = Vec::new();
    let mut invalid = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<Subnet>() {
            Ok(subnet) => subnets.push(subnet),
            Err(error) => invalid.push(InvalidLine {
                line: idx + 1,
                content: line.to_string(),
                error,
            }),
        }
    }

    if invalid.is_empty() {
        Ok(subnets)
    } else {
        Err(invalid)
    }
}
