/// Any failure below the manager layer: the database could not be opened,
/// SQL was rejected, a constraint fired, a row did not map, or a seed script
/// could not be read. Callers do not branch on the cause.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
