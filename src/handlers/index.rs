// GET / handler

use crate::views::render_page;
use std::convert::Infallible;

pub async fn index_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(render_page(None)))
}
