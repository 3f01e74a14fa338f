//! Tokens OAuth2 e cálculo de expiração segura

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Margem subtraída do `expires_in` informado pela plataforma
pub const EXPIRY_SAFETY_MARGIN_SECS: i64 = 60;

/// Par de tokens emitido por uma troca de code ou refresh
///
/// Imutável: um refresh produz um novo `TokenSet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: String,
    /// Instante a partir do qual o access token deve ser considerado expirado
    pub expires_at: DateTime<Utc>,
}

impl TokenSet {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Tempo restante até a expiração (zero se já expirado)
    pub fn time_to_expiry(&self) -> Duration {
        let remaining = self.expires_at - Utc::now();
        remaining.max(Duration::zero())
    }

    /// Valor do header `Authorization` para chamadas CRM
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// `now + expires_in - 60s`
///
/// `None` quando `expires_in` não cabe no intervalo representável de datas.
pub fn compute_expiry(now: DateTime<Utc>, expires_in_secs: i64) -> Option<DateTime<Utc>> {
    expires_in_secs
        .checked_sub(EXPIRY_SAFETY_MARGIN_SECS)
        .and_then(Duration::try_seconds)
        .and_then(|ttl| now.checked_add_signed(ttl))
}

/// Resposta do endpoint `/token`
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn into_token_set(self, issued_at: DateTime<Utc>) -> Option<TokenSet> {
        Some(TokenSet {
            expires_at: compute_expiry(issued_at, self.expires_in)?,
            access_token: self.access_token,
            refresh_token: self.refresh_token,
        })
    }
}

/// Introspecção de um refresh token: a quem ele pertence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenInfo {
    #[serde(rename = "user")]
    pub user_email: String,

    #[serde(rename = "user_id")]
    pub internal_user_id: i64,

    #[serde(default)]
    pub hub_id: Option<i64>,

    #[serde(default)]
    pub scopes: Vec<String>,
}
