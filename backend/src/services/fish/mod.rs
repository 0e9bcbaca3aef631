//! # Fish Catalog Routes
//!
//! Everything the browser can reach. The surface is read-only on purpose:
//! `FishDao` can create, update and delete rows, but none of those operations
//! is routed here.
//!
//! ## Sub-modules:
//! - `display`: the text view (HTML page and plain text).
//! - `get`: JSON lookups by id and by diet.

pub mod display;
mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

pub use display::page as viewer;

/// The base path for the catalog API.
const API_PATH: &str = "/api/fish";

/// Configures and returns the Actix `Scope` for the catalog API.
///
/// # Registered Routes:
///
/// *   **`GET /api/fish`**: `display::text`, the full catalog as plain text.
/// *   **`GET /api/fish/diet/{diet}`**: `get::by_diet`, JSON array of matches.
/// *   **`GET /api/fish/{id}`**: `get::by_id`, one JSON record or `404`.
///
/// The viewer page itself (`GET /`) is registered separately through
/// [`viewer`].
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(display::text))
        .route("/diet/{diet}", get().to(get::by_diet))
        .route("/{id}", get().to(get::by_id))
}
