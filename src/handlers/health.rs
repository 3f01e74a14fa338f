use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::utils::logging::*;
use crate::AppState;

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_health_check();

    let auth_mode = if state.settings.uses_static_token() {
        "static_token"
    } else {
        "oauth_per_request"
    };

    Json(json!({
        "status": "healthy",
        "service": "hubspot-crm-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "crm": {
            "account_id": state.crm.account_id(),
            "auth_mode": auth_mode
        },
        "oauth_enabled": state.oauth.is_some()
    }))
}
