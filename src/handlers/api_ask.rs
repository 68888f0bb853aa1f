// POST /api/ask handler (JSON)

use crate::models::{AskRequest, AskResponse, ErrorResponse};
use crate::state::AppState;
use bytes::Bytes;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{info, warn};
use warp::http::StatusCode;

pub const MISSING_QUESTION_MESSAGE: &str = "Please provide a question in JSON body";

pub async fn api_ask_handler(body: Bytes, state: Arc<AppState>) -> Result<impl warp::Reply, Infallible> {
    // Only a body that is not a JSON object with a `question` key is rejected
    let question = match AskRequest::from_json(&body) {
        Some(request) => request.question_text(),
        None => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse::new(MISSING_QUESTION_MESSAGE)),
                StatusCode::BAD_REQUEST,
            ))
        }
    };

    info!("POST /api/ask: {}", question);

    match state.ask(&question).await {
        Ok(answer) => Ok(warp::reply::with_status(
            warp::reply::json(&AskResponse { answer }),
            StatusCode::OK,
        )),
        Err(e) => {
            warn!("could not build context: {}", e);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse::new(e.to_string())),
                StatusCode::BAD_GATEWAY,
            ))
        }
    }
}
