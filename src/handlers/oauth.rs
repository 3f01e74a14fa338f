//! OAuth2 HTTP Handlers
//!
//! Endpoints para iniciar o fluxo de instalação, trocar o code e gerenciar
//! refresh tokens. Nenhum token é guardado pelo gateway: o chamador recebe o
//! `TokenSet` e decide onde persistir.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Json, Redirect},
};
use hubspot::{OAuthClient, RefreshTokenInfo, TokenSet};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::utils::logging::*;
use crate::utils::{truncate_safe, AppError, AppResult};
use crate::AppState;

/// Parâmetros do callback OAuth2
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    /// Authorization code retornado pelo HubSpot
    code: Option<String>,
    /// Erro retornado pelo HubSpot (usuário negou a instalação, etc.)
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Resposta do callback: tokens emitidos e o usuário que autorizou
#[derive(Debug, Serialize)]
pub struct OAuthCallbackResponse {
    pub tokens: TokenSet,
    pub user: RefreshTokenInfo,
}

fn oauth_client(state: &AppState) -> AppResult<&OAuthClient> {
    state.oauth.as_ref().ok_or(AppError::NotConfigured("HubSpot OAuth"))
}

fn required_refresh_token(body: &RefreshTokenRequest) -> AppResult<&str> {
    let token = body.refresh_token.trim();
    if token.is_empty() {
        log_validation_error("refresh_token", "must not be empty");
        return Err(AppError::ValidationError("refresh_token must not be empty".to_string()));
    }
    Ok(token)
}

/// GET /auth/hubspot
///
/// Redireciona o usuário para a URL de instalação do app
pub async fn start_oauth_flow(State(state): State<Arc<AppState>>) -> AppResult<Redirect> {
    let oauth = oauth_client(&state)?;

    log_info("🚀 [OAuth] Iniciando fluxo de autorização...");
    Ok(Redirect::to(oauth.setup_url()))
}

/// GET /auth/hubspot/callback?code=XXX
pub async fn handle_oauth_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OAuthCallbackParams>,
) -> AppResult<Json<OAuthCallbackResponse>> {
    let oauth = oauth_client(&state)?;
    log_info("📥 [OAuth] Callback recebido");

    if let Some(error) = params.error {
        log_error(&format!("❌ [OAuth] Erro na autorização: {}", error));
        return Err(AppError::ValidationError(format!("authorization failed: {}", error)));
    }

    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| {
            log_error("❌ [OAuth] Code não recebido no callback");
            AppError::ValidationError("Missing code parameter".to_string())
        })?;

    log_info(&format!("🔑 [OAuth] Code recebido: {}...", truncate_safe(&code, 10)));

    let tokens = oauth.exchange_code(&code).await?;
    let user = oauth.refresh_token_info(&tokens.refresh_token).await?;

    log_info(&format!(
        "✅ [OAuth] Instalação autorizada por {} (user_id {})",
        user.user_email, user.internal_user_id
    ));

    Ok(Json(OAuthCallbackResponse { tokens, user }))
}

/// POST /auth/hubspot/refresh
pub async fn refresh_tokens(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefreshTokenRequest>,
) -> AppResult<Json<TokenSet>> {
    log_request_received("/auth/hubspot/refresh", "POST");
    let oauth = oauth_client(&state)?;
    let refresh_token = required_refresh_token(&body)?;

    let tokens = oauth.refresh_tokens(refresh_token).await?;
    Ok(Json(tokens))
}

/// POST /auth/hubspot/revoke
pub async fn revoke_refresh_token(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefreshTokenRequest>,
) -> AppResult<StatusCode> {
    log_request_received("/auth/hubspot/revoke", "POST");
    let oauth = oauth_client(&state)?;
    let refresh_token = required_refresh_token(&body)?;

    oauth.revoke_refresh_token(refresh_token).await?;
    Ok(StatusCode::NO_CONTENT)
}
