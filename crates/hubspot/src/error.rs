//! Tipos de erro para o crate hubspot

use thiserror::Error;

/// Erros do cliente HubSpot (CRM e OAuth)
#[derive(Debug, Error)]
pub enum HubSpotError {
    /// Configuração inválida: fonte de autenticação ausente/duplicada, URL base inválida etc.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Argumento inválido rejeitado antes de qualquer requisição
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Falha de rede/conexão (nunca é refeita internamente)
    #[error("HubSpot request failed {{endpoint={endpoint}}}: {source}")]
    HttpError {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Resposta fora do único status de sucesso esperado pela operação
    #[error("HubSpot API error {{endpoint={endpoint}, status={status}, body={body}}}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Corpo da resposta não corresponde ao formato esperado
    #[error("Failed to decode HubSpot response {{endpoint={endpoint}, status={status}, body={body}}}: {source}")]
    JsonError {
        endpoint: String,
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HubSpotError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn validation_error(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Status HTTP associado ao erro, quando houve resposta
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } | Self::JsonError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` para 404, incluindo a divergência de contagem do batch read
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, HubSpotError>;
