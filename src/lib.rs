// Biblioteca do gateway HubSpot CRM
// Expõe o router e o estado para uso em testes e no binário

pub mod config;
pub mod handlers;
pub mod utils;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use hubspot::{CrmClient, OAuthClient};
use tower_http::trace::TraceLayer;

// AppState é definido aqui para ser compartilhado
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub crm: CrmClient,
    /// `None` quando as credenciais OAuth não foram configuradas
    pub oauth: Option<OAuthClient>,
}

impl AppState {
    /// Constrói os clientes a partir das configurações já carregadas
    pub fn from_settings(settings: config::Settings) -> utils::AppResult<Self> {
        let crm = CrmClient::new(settings.crm_config())?;
        let oauth = settings.oauth_config().map(OAuthClient::new).transpose()?;

        Ok(Self {
            settings,
            crm,
            oauth,
        })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // OAuth2 (503 quando não configurado)
        .route("/auth/hubspot", get(handlers::start_oauth_flow))
        .route("/auth/hubspot/callback", get(handlers::handle_oauth_callback))
        .route("/auth/hubspot/refresh", post(handlers::refresh_tokens))
        .route("/auth/hubspot/revoke", post(handlers::revoke_refresh_token))
        // CRM
        .route("/crm/objects/:object_type/batch/read", post(handlers::batch_read_objects))
        .route("/crm/objects/:object_type", post(handlers::create_object))
        .route(
            "/crm/objects/:object_type/:id",
            get(handlers::get_object).patch(handlers::update_object),
        )
        .route("/crm/owners/:owner_id", get(handlers::get_owner))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
