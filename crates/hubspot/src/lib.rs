//! Cliente tipado da API HubSpot
//!
//! Este crate fornece duas peças independentes:
//!
//! - **CRM** (`crm`): leitura individual e em lote de objetos, consulta de owners,
//!   criação e atualização, com acesso tipado a propriedades e associações
//!   (`crm::objects::{Company, Contact, Training, Session, User}`).
//! - **OAuth** (`oauth`): troca de authorization code, refresh, introspecção e
//!   revogação de tokens, com expiração calculada com margem de 60s.
//!
//! Cada operação faz exatamente uma chamada HTTP. Não há cache, retry nem
//! rate limiting: falhas são devolvidas ao chamador como `HubSpotError`.
//!
//! # Autenticação CRM
//!
//! O `CrmClient` aceita exatamente uma fonte de token: o token estático de
//! `CrmConfig::static_token` ou o token passado em cada chamada.
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use hubspot::crm::{objects::Contact, CrmClient, CrmConfig, ObjectQuery};
//! use hubspot::oauth::{OAuthClient, OAuthConfig};
//!
//! #[tokio::main]
//! async fn main() -> hubspot::Result<()> {
//!     let oauth = OAuthClient::new(OAuthConfig::new(client_id, client_secret, redirect_url, setup_url))?;
//!     let tokens = oauth.refresh_tokens(&stored_refresh_token).await?;
//!
//!     let crm = CrmClient::new(CrmConfig::new("42"))?;
//!     let query = ObjectQuery::new().properties(hubspot::crm::objects::contact::PROPERTIES.iter().copied());
//!     let contact: Contact = crm
//!         .find_object(Some(&tokens.access_token), "0-1", "123", &query)
//!         .await?
//!         .into();
//!
//!     println!("{} {}", contact.first_name(), contact.last_name());
//!     Ok(())
//! }
//! ```

// Módulos públicos
pub mod crm;
pub mod error;
pub mod oauth;
pub mod transport;

// Re-exports principais
pub use crm::{CrmClient, CrmConfig, CrmObject, ObjectQuery};
pub use error::{HubSpotError, Result};
pub use oauth::{OAuthClient, OAuthConfig, RefreshTokenInfo, TokenSet};
