//! Plumbing HTTP compartilhado entre os clientes CRM e OAuth
//!
//! Cada operação pública faz exatamente uma ida e volta: envia, lê o corpo
//! inteiro, compara com o único status de sucesso esperado e decodifica.
//! Não há retry, backoff nem coalescência de requisições.

use std::time::Duration;

use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{HubSpotError, Result};

/// Limite de bytes do corpo da resposta preservado nas mensagens de erro
pub const MAX_ERROR_BODY_BYTES: usize = 512;

const TOTAL_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Resposta já lida por completo
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub endpoint: String,
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Falha com `ApiError` se o status não for exatamente `expected`
    pub fn expect_status(self, expected: StatusCode) -> Result<Self> {
        if self.status == expected {
            return Ok(self);
        }

        let body = truncate_body(&self.body, MAX_ERROR_BODY_BYTES);
        tracing::error!(
            "HubSpot API error {{endpoint={}, status={}, expected={}}}: {}",
            self.endpoint,
            self.status.as_u16(),
            expected.as_u16(),
            body
        );

        Err(HubSpotError::ApiError {
            endpoint: self.endpoint,
            status: self.status.as_u16(),
            body,
        })
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|source| HubSpotError::JsonError {
            endpoint: self.endpoint.clone(),
            status: self.status.as_u16(),
            body: truncate_body(&self.body, MAX_ERROR_BODY_BYTES),
            source,
        })
    }

    /// `JsonError` para um corpo bem formado cujo conteúdo é inaceitável
    pub fn decode_error(&self, msg: impl std::fmt::Display) -> HubSpotError {
        HubSpotError::JsonError {
            endpoint: self.endpoint.clone(),
            status: self.status.as_u16(),
            body: truncate_body(&self.body, MAX_ERROR_BODY_BYTES),
            source: serde::de::Error::custom(msg),
        }
    }
}

/// Cria o cliente HTTP padrão
///
/// # Timeouts
///
/// - Total: 30s
/// - Connect: 5s
pub fn default_http_client() -> Result<HttpClient> {
    HttpClient::builder()
        .timeout(Duration::from_secs(TOTAL_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .map_err(|e| HubSpotError::config_error(format!("Failed to create HTTP client: {}", e)))
}

/// Envia a requisição e lê o corpo da resposta
pub(crate) async fn send(endpoint: &str, method: &str, request: RequestBuilder) -> Result<RawResponse> {
    tracing::debug!("{} {}", method, endpoint);

    let response = request.send().await.map_err(|source| HubSpotError::HttpError {
        endpoint: endpoint.to_string(),
        source,
    })?;

    let status = response.status();
    let body = response.bytes().await.map_err(|source| HubSpotError::HttpError {
        endpoint: endpoint.to_string(),
        source,
    })?;

    tracing::debug!("{} {} -> {}", method, endpoint, status.as_u16());

    Ok(RawResponse {
        endpoint: endpoint.to_string(),
        status,
        body: body.to_vec(),
    })
}

/// Valida uma URL base absoluta http(s) e remove a barra final
pub(crate) fn normalize_base_url(name: &str, url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(HubSpotError::config_error(format!("{} must not be empty", name)));
    }

    let parsed = reqwest::Url::parse(trimmed)
        .map_err(|e| HubSpotError::config_error(format!("{} is not a valid URL ({}): {}", name, trimmed, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(HubSpotError::config_error(format!(
            "{} must use http or https, got {}",
            name,
            parsed.scheme()
        )));
    }

    Ok(trimmed.to_string())
}

/// Codifica um segmento de path (ids podem conter `@`, espaços etc.)
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Trunca uma string sem cortar um caractere UTF-8 no meio
///
/// # Exemplo
/// ```
/// use hubspot::transport::truncate_safe;
///
/// assert_eq!(truncate_safe("Olá, mundo!", 3), "Ol");
/// ```
pub fn truncate_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }

    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

/// Representação UTF-8 de `body` limitada a `max_bytes`, com sufixo indicando
/// quantos bytes foram omitidos
pub fn truncate_body(body: &[u8], max_bytes: usize) -> String {
    if max_bytes == 0 {
        return String::new();
    }

    if body.len() <= max_bytes {
        return String::from_utf8_lossy(body).into_owned();
    }

    // não corta um caractere UTF-8 válido no meio
    let mut end = max_bytes;
    if let Err(e) = std::str::from_utf8(&body[..end]) {
        if e.error_len().is_none() {
            end = e.valid_up_to();
        }
    }

    let kept = String::from_utf8_lossy(&body[..end]);
    let omitted = body.len() - end;
    format!("{}...[truncated {} bytes]", kept, omitted)
}
