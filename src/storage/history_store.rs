//! History Store for MyBrowser.
//!
//! Entries are obfuscated with [`history_obfuscator`] and written one per
//! line. Obfuscation can turn `_` and `X` into line breaks, so each encoded
//! entry is escaped before it is written and unescaped on load.
//!
//! [`history_obfuscator`]: crate::services::history_obfuscator

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::paths::StoragePaths;
use crate::services::history_obfuscator;
use crate::types::errors::StorageError;

/// Obfuscated, newline-separated history file.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(paths: &StoragePaths) -> Self {
        Self {
            path: paths.history_file(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encodes each entry and overwrites the history file with them, one
    /// entry per line.
    pub fn save(&self, history: &[String]) -> Result<(), StorageError> {
        let mut body = String::new();
        for entry in history {
            body.push_str(&escape_line(&history_obfuscator::encode(entry)));
            body.push('\n');
        }
        fs::write(&self.path, body).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Reads and decodes the history file. A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        content
            .split_terminator('\n')
            .map(|line| unescape_line(line).map(|encoded| history_obfuscator::decode(&encoded)))
            .collect()
    }

    /// Adds one entry to the end of the stored history.
    pub fn append(&self, entry: &str) -> Result<(), StorageError> {
        let mut history = self.load()?;
        history.push(entry.to_string());
        self.save(&history)
    }
}

fn escape_line(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape_line(line: &str) -> Result<String, StorageError> {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            other => {
                return Err(StorageError::Serialization(format!(
                    "Invalid escape in history file: \\{}",
                    other.map(String::from).unwrap_or_default()
                )))
            }
        }
    }
    Ok(out)
}
