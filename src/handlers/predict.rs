//! Prediction endpoint handler

use std::collections::HashMap;

use askama::Template;
use axum::{extract::State, response::Html, Form};

use crate::aqi::AqiCategory;
use crate::error::{AppError, AppResult};
use crate::features::FeatureVector;
use crate::AppState;

#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate {
    aqi_value: f32,
    category_text: &'static str,
    category_class: &'static str,
}

/// Run one end-to-end prediction: parse the eight form fields, invoke
/// the model gateway, classify the result, render the result page.
pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> AppResult<Html<String>> {
    // Short-circuit before touching the form when no model was loaded;
    // an unavailable gateway answers every request the same way
    if !state.engine.is_loaded() {
        return Err(AppError::ModelUnavailable);
    }

    let features = FeatureVector::from_form(&form)?;

    let aqi_value = state.engine.predict(&features)?;
    let category = AqiCategory::from_value(aqi_value);

    tracing::debug!("Predicted AQI {:.1} ({})", aqi_value, category.label());

    let page = ResultTemplate {
        aqi_value,
        category_text: category.label(),
        category_class: category.tier(),
    }
    .render()
    .map_err(|e| AppError::Render(e.to_string()))?;

    Ok(Html(page))
}
