// Route definitions and handlers

use crate::handlers;
use crate::state::AppState;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

/// Largest request body accepted by the ask routes
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn configure_routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // GET /
    let index = warp::path::end()
        .and(warp::get())
        .and_then(handlers::index_handler);

    // POST /ask
    let ask = warp::path("ask")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::form())
        .and(with_state(state.clone()))
        .and_then(handlers::ask_handler);

    // POST /api/ask
    let api_ask = warp::path("api")
        .and(warp::path("ask"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(with_state(state))
        .and_then(handlers::api_ask_handler);

    // Combine routes
    index.or(ask).or(api_ask)
}

fn with_state(
    state: Arc<AppState>,
) -> impl Filter<Extract = (Arc<AppState>,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
