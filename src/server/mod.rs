//! HTTP API over the language store.
//!
//! Read-only JSON endpoints for the map frontend plus the sitemap. All
//! handlers share an immutable [`AppState`].

mod error;
mod routes;
mod state;

pub use error::{ApiError, ErrorBody, ErrorResponse};
pub use routes::{router, FormattedTotals, LanguagesRequest, SelectionRequest, SelectionResponse};
pub use state::AppState;
