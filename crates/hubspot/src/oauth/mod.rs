//! Gerenciamento do ciclo de vida dos tokens OAuth2

pub mod client;
pub mod config;
pub mod token;

pub use client::OAuthClient;
pub use config::{OAuthConfig, DEFAULT_OAUTH_BASE_URL};
pub use token::{compute_expiry, RefreshTokenInfo, TokenSet, EXPIRY_SAFETY_MARGIN_SECS};
