//! Cliente HTTP para a API OAuth v1 do HubSpot

use chrono::Utc;
use reqwest::{Client as HttpClient, StatusCode};

use crate::error::Result;
use crate::oauth::config::OAuthConfig;
use crate::oauth::token::{RefreshTokenInfo, TokenResponse, TokenSet};
use crate::transport::{self, segment, truncate_safe};

/// Prefixo de token exibido nos logs
const LOGGED_TOKEN_PREFIX: usize = 8;

/// Gerencia o ciclo de vida dos tokens: troca, refresh, introspecção e revogação
///
/// Não guarda tokens; cada `TokenSet` pertence ao chamador.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    http_client: HttpClient,
    config: OAuthConfig,
}

impl OAuthClient {
    pub fn new(config: OAuthConfig) -> Result<Self> {
        let http_client = transport::default_http_client()?;
        Self::with_http_client(config, http_client)
    }

    pub fn with_http_client(config: OAuthConfig, http_client: HttpClient) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self { http_client, config })
    }

    /// URL de instalação configurada (sem I/O)
    pub fn setup_url(&self) -> &str {
        &self.config.setup_url
    }

    /// Troca o authorization code recebido no callback por um `TokenSet`
    pub async fn exchange_code(&self, code: &str) -> Result<TokenSet> {
        tracing::info!("🔐 [OAuth] Trocando authorization code por tokens...");

        let form = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
        ];

        let tokens = self.request_tokens(&form).await?;
        tracing::info!(
            "✅ [OAuth] Tokens obtidos: {}... (expira em {})",
            truncate_safe(&tokens.access_token, LOGGED_TOKEN_PREFIX),
            tokens.expires_at
        );
        Ok(tokens)
    }

    /// Obtém um novo `TokenSet` a partir de um refresh token
    pub async fn refresh_tokens(&self, refresh_token: &str) -> Result<TokenSet> {
        tracing::info!(
            "🔄 [OAuth] Renovando access token (refresh {}...)",
            truncate_safe(refresh_token, LOGGED_TOKEN_PREFIX)
        );

        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        self.request_tokens(&form).await
    }

    /// Consulta o usuário dono de um refresh token
    pub async fn refresh_token_info(&self, refresh_token: &str) -> Result<RefreshTokenInfo> {
        let endpoint = self.refresh_token_endpoint(refresh_token);
        let request = self.http_client.get(&endpoint);

        let response = transport::send(&self.redacted_endpoint(refresh_token), "GET", request)
            .await?
            .expect_status(StatusCode::OK)?;

        response.json()
    }

    /// Revoga um refresh token; apenas 204 é sucesso
    pub async fn revoke_refresh_token(&self, refresh_token: &str) -> Result<()> {
        let endpoint = self.refresh_token_endpoint(refresh_token);
        let request = self.http_client.delete(&endpoint);

        transport::send(&self.redacted_endpoint(refresh_token), "DELETE", request)
            .await?
            .expect_status(StatusCode::NO_CONTENT)?;

        tracing::info!(
            "🗑️ [OAuth] Refresh token revogado: {}...",
            truncate_safe(refresh_token, LOGGED_TOKEN_PREFIX)
        );
        Ok(())
    }

    async fn request_tokens(&self, form: &[(&str, &str)]) -> Result<TokenSet> {
        let endpoint = self.config.token_url();
        let request = self.http_client.post(&endpoint).form(form);

        let response = transport::send(&endpoint, "POST", request)
            .await?
            .expect_status(StatusCode::OK)?;

        let token_response: TokenResponse = response.json()?;
        let expires_in = token_response.expires_in;
        token_response
            .into_token_set(Utc::now())
            .ok_or_else(|| response.decode_error(format!("expires_in out of range: {}", expires_in)))
    }

    fn refresh_token_endpoint(&self, refresh_token: &str) -> String {
        format!("{}/{}", self.config.refresh_tokens_url(), segment(refresh_token))
    }

    /// Endpoint usado em logs e erros, sem o refresh token completo
    fn redacted_endpoint(&self, refresh_token: &str) -> String {
        let encoded = segment(refresh_token);
        format!(
            "{}/{}...",
            self.config.refresh_tokens_url(),
            truncate_safe(&encoded, LOGGED_TOKEN_PREFIX)
        )
    }
}
