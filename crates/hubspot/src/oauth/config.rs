//! Configuração OAuth2 do HubSpot

use serde::{Deserialize, Serialize};

use crate::error::{HubSpotError, Result};
use crate::transport::normalize_base_url;

/// URL base padrão da API OAuth v1
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://api.hubapi.com/oauth/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthConfig {
    /// Client ID do app HubSpot
    pub client_id: String,

    /// Client Secret do app HubSpot
    pub client_secret: String,

    /// URL de callback registrada no app (enviada como `redirect_uri` na troca do code)
    pub redirect_url: String,

    /// URL de instalação/autorização para onde o usuário é redirecionado
    pub setup_url: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_OAUTH_BASE_URL.to_string()
}

impl OAuthConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
        setup_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_url: redirect_url.into(),
            setup_url: setup_url.into(),
            base_url: default_base_url(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Valida e normaliza a configuração
    pub fn validate(mut self) -> Result<Self> {
        if self.client_id.trim().is_empty() {
            return Err(HubSpotError::config_error("oauth client id must not be empty"));
        }
        if self.client_secret.trim().is_empty() {
            return Err(HubSpotError::config_error("oauth client secret must not be empty"));
        }

        self.base_url = normalize_base_url("oauth base url", &self.base_url)?;
        Ok(self)
    }

    pub(crate) fn token_url(&self) -> String {
        format!("{}/token", self.base_url)
    }

    pub(crate) fn refresh_tokens_url(&self) -> String {
        format!("{}/refresh-tokens", self.base_url)
    }
}
