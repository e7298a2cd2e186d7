use crate::calc::{calculate, evaluate};
use crate::history::HistoryEntry;
use crate::output::format_decimal;
use crate::server::AppState;
use crate::server::error::{ServerError, ServerResult};
use crate::server::models::{
    ApiResponse, CalcRequest, EvalRequest, HistoryResponse, operand_text, parse_lenient,
};
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::Json,
};
use serde_json::Value as JsonValue;
use tracing::debug;

pub async fn health_handler() -> Json<JsonValue> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `POST /api/eval` - evaluates `{"expr": "..."}`.
pub async fn eval_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<Json<ApiResponse>> {
    let request: EvalRequest = parse_lenient(&body?);
    debug!(expr = %request.expr, "eval request received");

    let expr = request.expr.trim();
    if expr.is_empty() {
        return Err(ServerError::EmptyExpression);
    }

    let result = evaluate(expr)?;
    state.history.push(HistoryEntry::expression(expr, &result));
    Ok(Json(ApiResponse::success(result)))
}

/// `POST /api/calc` - legacy `{"a": .., "op": "..", "b": ..}` form.
pub async fn calc_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<Json<ApiResponse>> {
    let request: CalcRequest = parse_lenient(&body?);
    debug!(?request, "calc request received");

    let a = operand_text(request.a.as_ref());
    let b = operand_text(request.b.as_ref());
    let op = match &request.op {
        Some(JsonValue::String(s)) => s.clone(),
        _ => String::new(),
    };

    let result = format_decimal(&calculate(&a, &op, &b)?);
    state.history.push(HistoryEntry::calculation(&a, &op, &b, &result));
    Ok(Json(ApiResponse::success(result)))
}

/// `GET /api/history` - the most recent entries, oldest first.
pub async fn history_handler(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        ok: true,
        items: state.history.recent(state.view_limit),
    })
}
