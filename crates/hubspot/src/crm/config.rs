//! Configuração do cliente CRM
//!
//! Valor imutável construído uma vez e movido para `CrmClient::new`.

use serde::{Deserialize, Serialize};

use crate::error::{HubSpotError, Result};
use crate::transport::normalize_base_url;

/// URL base padrão da API CRM v3
pub const DEFAULT_CRM_BASE_URL: &str = "https://api.hubapi.com/crm/v3";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrmConfig {
    /// ID da conta (portal) HubSpot, usado no namespace das associações (`p<account>_<relação>`)
    pub account_id: String,

    /// URL base da API CRM (sem barra final)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Token estático para o modo de autenticação fixa (private app)
    #[serde(default)]
    pub static_token: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_CRM_BASE_URL.to_string()
}

impl CrmConfig {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            base_url: default_base_url(),
            static_token: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_static_token(mut self, token: impl Into<String>) -> Self {
        self.static_token = Some(token.into());
        self
    }

    /// Valida e normaliza a configuração
    pub fn validate(mut self) -> Result<Self> {
        if self.account_id.trim().is_empty() {
            return Err(HubSpotError::config_error("crm account id must not be empty"));
        }

        self.base_url = normalize_base_url("crm base url", &self.base_url)?;

        if let Some(token) = &self.static_token {
            if token.trim().is_empty() {
                return Err(HubSpotError::config_error(
                    "crm static token is configured but empty; omit it to use per-call tokens",
                ));
            }
        }

        Ok(self)
    }

    pub(crate) fn objects_url(&self) -> String {
        format!("{}/objects", self.base_url)
    }

    pub(crate) fn owners_url(&self) -> String {
        format!("{}/owners", self.base_url)
    }
}
