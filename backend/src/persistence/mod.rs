//! Everything that talks to SQLite.
//!
//! - `fish_dao`: parameterized CRUD over the `FISH` table.
//! - `seed`: splits a `;`-terminated SQL script and replays it, used to reset
//!   the table to a known fixture.
//! - `error`: the single `StorageError` both of them return.

pub mod error;
pub mod fish_dao;
pub mod seed;

pub use error::StorageError;
pub use fish_dao::FishDao;
