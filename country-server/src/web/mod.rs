//! Web layer for the country lookup service.
//!
//! Thin HTTP handlers over `CountryLookup`: request parsing and mapping of
//! lookup errors to status codes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
