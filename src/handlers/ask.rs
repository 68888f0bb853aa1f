// POST /ask handler (HTML form)

use crate::models::AskForm;
use crate::state::AppState;
use crate::views::render_page;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{info, warn};

pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question!";

pub async fn ask_handler(form: AskForm, state: Arc<AppState>) -> Result<impl warp::Reply, Infallible> {
    let question = match form.question {
        Some(q) if !q.is_empty() => q,
        _ => return Ok(warp::reply::html(render_page(Some(EMPTY_QUESTION_MESSAGE)))),
    };

    info!("POST /ask: {}", question);

    let answer = match state.ask(&question).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!("could not build context: {}", e);
            format!("Error: {}", e)
        }
    };

    Ok(warp::reply::html(render_page(Some(&answer))))
}
