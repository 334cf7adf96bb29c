use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::routes::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "UP",
        "service": &*state.service_name,
        "version": env!("CARGO_PKG_VERSION")
    }))
}
