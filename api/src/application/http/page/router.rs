use axum::{Router, routing::get};

use super::handlers::{get_page::get_page, submit_page::submit_page};
use crate::application::http::server::app_state::AppState;

/// Serves the page at `{root}/`, and at the bare `{root}` when a root path is set.
pub fn page_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.trim_end_matches('/');

    let router = Router::new().route(&format!("{}/", root_path), get(get_page).post(submit_page));

    if root_path.is_empty() {
        router
    } else {
        router.route(root_path, get(get_page).post(submit_page))
    }
}
