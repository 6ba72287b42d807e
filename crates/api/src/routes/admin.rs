//! Route definitions for the read-only admin browser.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin` when `ADMIN_ENABLED` is set.
///
/// ```text
/// GET    /           -> summary
/// GET    /{model}    -> browse
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::summary))
        .route("/{model}", get(admin::browse))
}
