//! Replays a plain SQL script against the configured database.
//!
//! Scripts are a sequence of statements, each ending with `;` at the end of a
//! line. Statements may span several lines. Lines starting with `--`, `//` or
//! `/*` are comments, and blank lines are ignored. The splitter is line-based
//! on purpose: it does not understand stored procedures or a delimiter hidden
//! in the middle of a line.

use crate::config::DatabaseConfig;
use crate::persistence::StorageError;
use log::info;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub const STATEMENT_DELIMITER: &str = ";";

/// `true` for lines the splitter skips. Expects an already trimmed line.
pub fn is_comment(line: &str) -> bool {
    line.starts_with("--") || line.starts_with("//") || line.starts_with("/*")
}

/// Splits `script` into executable statements.
///
/// Each line is trimmed, blank and comment lines are dropped, and the
/// remaining lines are joined with a single space until one ends with
/// `delimiter`. The delimiter stays on the statement. Text after the last
/// delimiter is not a statement and is discarded.
pub fn split_statements(script: &str, delimiter: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();

    for raw_line in script.lines() {
        let line = raw_line.trim();
        if line.is_empty() || is_comment(line) {
            continue;
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(line);

        if line.ends_with(delimiter) {
            statements.push(std::mem::take(&mut current));
        }
    }

    statements
}

/// Executes every statement of `script` on one connection, in order.
/// Returns how many statements ran.
pub fn seed_database(config: &DatabaseConfig, script: &str) -> Result<usize, StorageError> {
    let conn = Connection::open(&config.path)?;

    let statements = split_statements(script, STATEMENT_DELIMITER);
    for statement in &statements {
        conn.execute_batch(statement)?;
    }

    info!("# of seed statements executed : {}", statements.len());
    Ok(statements.len())
}

/// Reads the script at `path` and hands it to `seed_database`.
pub fn seed_from_file(config: &DatabaseConfig, path: &Path) -> Result<usize, StorageError> {
    let script = fs::read_to_string(path)?;
    info!("Seeding {} from {}", config.path.display(), path.display());
    seed_database(config, &script)
}

/// The 200-row fixture every DAO test starts from.
#[cfg(test)]
pub(crate) const FIXTURE_SCRIPT: &str = include_str!("../../resources/createFishTable.sql");

/// A database file in its own temp dir, freshly loaded with the fixture.
/// The `TempDir` must outlive every use of the returned config.
#[cfg(test)]
pub(crate) fn fixture_database() -> (tempfile::TempDir, DatabaseConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        path: dir.path().join("aquarium.sqlite"),
    };
    seed_database(&config, FIXTURE_SCRIPT).unwrap();
    (dir, config)
}
