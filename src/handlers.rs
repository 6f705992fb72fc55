use crate::errors::AppError;
use crate::models::{
    IndexQuery, ResetResponse, SortRequest, SortResponse, SubmitForm, SubmitRequest,
    SubmitResponse, SubmitSource,
};
use crate::sort::SortColumn;
use crate::state::AppState;
use crate::tracker::{DUPLICATE_WARNING, ResetOutcome, Screen, Submission, SubmitOutcome, Verdict};
use crate::ui::{render_page, render_panels};
use axum::{
    Form, Json,
    extract::{Query, State},
    response::{Html, Redirect},
};

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let screen = state.tracker.screen().await;
    Html(render_page(&screen, query.status.as_deref()))
}

pub async fn get_view(State(state): State<AppState>) -> Json<Screen> {
    Json(state.tracker.screen().await)
}

fn submission(payload: SubmitRequest) -> Submission {
    match payload.source {
        SubmitSource::Drop => Submission::Dropped(payload.text),
        SubmitSource::Typed => Submission::Typed(payload.text),
    }
}

/// Answers whether a submission would be forwarded, without contacting the backend.
pub async fn check(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Json<SubmitResponse> {
    let verdict = state.tracker.vet(submission(payload)).await;
    let message = (verdict == Verdict::Duplicate).then(|| DUPLICATE_WARNING.to_string());
    Json(SubmitResponse {
        status: verdict.status(),
        message,
        panels: None,
    })
}

pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Json<SubmitResponse> {
    let outcome = state.tracker.submit(submission(payload)).await;
    let panels = if outcome == SubmitOutcome::Added {
        Some(render_panels(&state.tracker.screen().await, true))
    } else {
        None
    };
    let message = match outcome {
        SubmitOutcome::Duplicate { message } => Some(message.to_string()),
        _ => None,
    };

    Json(SubmitResponse {
        status: outcome.status(),
        message,
        panels,
    })
}

pub async fn sort(
    State(state): State<AppState>,
    Json(payload): Json<SortRequest>,
) -> Result<Json<SortResponse>, AppError> {
    let column = SortColumn::from_header(&payload.header)
        .ok_or_else(|| AppError::unknown_column(payload.header.trim()))?;

    state.tracker.sort(column).await;
    let screen = state.tracker.screen().await;
    Ok(Json(SortResponse {
        panels: render_panels(&screen, false),
    }))
}

pub async fn reset(State(state): State<AppState>) -> Json<ResetResponse> {
    let outcome = state.tracker.reset().await;
    let panels = match outcome {
        ResetOutcome::Cleared => Some(render_panels(&state.tracker.screen().await, true)),
        ResetOutcome::Failed => None,
    };
    Json(ResetResponse {
        status: outcome.status(),
        panels,
    })
}

pub async fn submit_form(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Redirect {
    let outcome = state.tracker.submit(Submission::Typed(form.url)).await;
    Redirect::to(&format!("/?status={}", outcome.status()))
}

pub async fn reset_form(State(state): State<AppState>) -> Redirect {
    let outcome = state.tracker.reset().await;
    Redirect::to(&format!("/?status={}", outcome.status()))
}
