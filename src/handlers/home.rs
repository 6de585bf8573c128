//! Input form page handler

use askama::Template;
use axum::response::Html;

use crate::error::{AppError, AppResult};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

/// Serve the static measurement form
pub async fn index() -> AppResult<Html<String>> {
    let page = IndexTemplate
        .render()
        .map_err(|e| AppError::Render(e.to_string()))?;

    Ok(Html(page))
}
