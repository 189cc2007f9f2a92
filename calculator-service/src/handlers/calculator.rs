//! Calculator endpoints.
//!
//! None of these can fail: nonsensical (but well-typed) overwrites are
//! accepted, and committing an unrecognized operation tag is a no-op.

use axum::{Json, extract::State};

use crate::{
    AppState,
    models::{Calculator, CalculatorPatch},
};

/// GET `/calculator`.
pub async fn read_calculator(State(state): State<AppState>) -> Json<Calculator> {
    Json(state.engine.read().await)
}

/// PUT `/calculator` — merge-overwrite the fields present in the body.
pub async fn overwrite_calculator(
    State(state): State<AppState>,
    Json(patch): Json<CalculatorPatch>,
) -> Json<Calculator> {
    tracing::info!("Overwriting calculator state");
    Json(state.engine.overwrite(patch).await)
}

/// POST `/calculator` — commit the pending operation.
pub async fn commit_calculator(State(state): State<AppState>) -> Json<Calculator> {
    let calculator = state.engine.commit().await;
    tracing::info!(
        display = calculator.display,
        tape_len = calculator.tape.len(),
        "Committed calculator operation"
    );
    Json(calculator)
}

/// DELETE `/calculator` — durably replace the state with a fresh instance.
pub async fn reset_calculator(State(state): State<AppState>) -> Json<Calculator> {
    tracing::info!("Resetting calculator state");
    Json(state.engine.reset().await)
}
