//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area.
//! The shared error type lives in `error.rs`.

mod check;
pub mod doc;
mod error;
mod health;
mod page;


// ── Re-exports ───────────────────────────────────────────────────
// Flat `api::foo` paths used by router registration.

pub use check::check;
pub use error::{ApiError, ErrorResponse};
pub use health::health;
pub use page::index;
