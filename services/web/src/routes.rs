use crate::infra::AppState;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use credit_risk::form::FormState;
use credit_risk::pages;
use credit_risk::pages::credit_risk::{
    form_from_snapshot, render_page, snapshot_from_form, validate_applicant_form,
};
use credit_risk::risk::{AssessmentState, PresetKind, RiskLevel};
use credit_risk::session::SessionContext;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PresetQuery {
    preset: Option<String>,
}

pub(crate) fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(console_page))
        .route("/assess", post(assess))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .fallback(not_found)
        .with_state(state)
}

/// Renders the console. A known `?preset=` slug pre-fills the form with the
/// matching example application; anything else renders it empty.
pub(crate) async fn console_page(
    State(state): State<AppState>,
    Query(query): Query<PresetQuery>,
) -> Html<String> {
    let form = match query.preset.as_deref().and_then(PresetKind::from_slug) {
        Some(preset) => form_from_snapshot(&preset.snapshot()),
        None => FormState::empty(),
    };
    Html(render_page(&state.site, &form, &AssessmentState::Empty))
}

/// Runs the submission lifecycle: validate, coerce, claim the in-flight
/// gate, call the engine, and re-render the page around the outcome.
pub(crate) async fn assess(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(entries): Form<Vec<(String, String)>>,
) -> Response {
    let session = SessionContext::from_cookie_header(
        headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok()),
    );

    let mut form = FormState::from_entries(entries);
    if !validate_applicant_form(&mut form) {
        let markup = render_page(&state.site, &form, &AssessmentState::Empty);
        return (StatusCode::UNPROCESSABLE_ENTITY, Html(markup)).into_response();
    }

    // Field rules passed but a value still falls outside the wire contract,
    // e.g. a fractional loan count in a hand-crafted request.
    let Some(snapshot) = snapshot_from_form(&form) else {
        form.record_form_error(
            "The submitted values could not be processed. Please review the form and try again.",
        );
        let markup = render_page(&state.site, &form, &AssessmentState::Empty);
        return (StatusCode::UNPROCESSABLE_ENTITY, Html(markup)).into_response();
    };

    let Some(_guard) = state.gate.try_begin() else {
        let markup = render_page(&state.site, &form, &AssessmentState::Loading);
        return (StatusCode::CONFLICT, Html(markup)).into_response();
    };

    match state.engine.evaluate(&snapshot, session.access_token()).await {
        Ok(result) => {
            if RiskLevel::recognize(&result.final_prediction).is_none() {
                warn!(
                    prediction = %result.final_prediction,
                    "prediction outside the known labels, rendering as medium risk"
                );
            }
            let markup = render_page(&state.site, &form, &AssessmentState::Ready(result));
            Html(markup).into_response()
        }
        Err(err) => {
            warn!(error = %err, "evaluation request failed");
            let markup = render_page(
                &state.site,
                &form,
                &AssessmentState::Failed(err.user_message().to_string()),
            );
            (StatusCode::BAD_GATEWAY, Html(markup)).into_response()
        }
    }
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(pages::fallback::not_found_page(&state.site)),
    )
}
