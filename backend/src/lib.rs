//! Read-only viewer for the aquarium fish catalog.
//!
//! Layers, each only calling the one below it:
//! - `services`: actix routes for the viewer page and JSON lookups.
//! - `business`: `FishManager`, which renders the catalog as text.
//! - `persistence`: `FishDao` over the SQLite `FISH` table, plus the seed
//!   script runner.
//! - `config`: environment-driven settings.

pub mod business;
pub mod config;
pub mod persistence;
pub mod services;
