pub(crate) mod complete;
pub(crate) mod system;

use axum::routing::get;

use crate::application::state::AppState;

/// Full paths rather than a nest so the trailing-slash liveness route `/api/` matches.
pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/api", get(system::alive))
        .route("/api/", get(system::alive))
        .merge(complete_routes())
}

fn complete_routes() -> axum::Router<AppState> {
    axum::Router::new()
        .route(
            "/api/complete/screen",
            get(complete::completed_screen_this_year),
        )
        .route(
            "/api/complete/screen/{year}",
            get(complete::completed_screen_in_year),
        )
        .route(
            "/api/complete/{category}",
            get(complete::completed_this_year),
        )
        .route(
            "/api/complete/{category}/{year}",
            get(complete::completed_in_year),
        )
}
