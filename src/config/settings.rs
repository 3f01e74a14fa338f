use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use hubspot::crm::{CrmConfig, DEFAULT_CRM_BASE_URL};
use hubspot::oauth::{OAuthConfig, DEFAULT_OAUTH_BASE_URL};
use serde::{Deserialize, Serialize};

/// Variáveis de ambiente com precedência sobre os arquivos de configuração
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("HUBSPOT_ACCOUNT_ID", "hubspot.account_id"),
    ("HUBSPOT_STATIC_TOKEN", "hubspot.static_token"),
    ("HUBSPOT_CLIENT_ID", "oauth.client_id"),
    ("HUBSPOT_CLIENT_SECRET", "oauth.client_secret"),
    ("HUBSPOT_REDIRECT_URL", "oauth.redirect_url"),
    ("HUBSPOT_SETUP_URL", "oauth.setup_url"),
];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub hubspot: HubSpotSettings,
    #[serde(default)]
    pub oauth: Option<OAuthSettings>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HubSpotSettings {
    pub account_id: String,
    #[serde(default = "default_crm_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub static_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub setup_url: String,
    #[serde(default = "default_oauth_base_url")]
    pub base_url: String,
}

fn default_crm_base_url() -> String {
    DEFAULT_CRM_BASE_URL.to_string()
}

fn default_oauth_base_url() -> String {
    DEFAULT_OAUTH_BASE_URL.to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // HUBSPOT_GATEWAY__SERVER__PORT=9000 -> server.port
            .add_source(
                Environment::with_prefix("HUBSPOT_GATEWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder, |var| std::env::var(var).ok())
    }

    /// Aplica as variáveis `HUBSPOT_*` conhecidas e deserializa
    pub fn from_builder(
        mut builder: ConfigBuilder<DefaultState>,
        lookup_env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        for (var, key) in ENV_OVERRIDES {
            if let Some(value) = lookup_env(*var) {
                builder = builder.set_override(*key, value)?;
            }
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings.normalized())
    }

    /// Token estático vazio significa "modo OAuth por requisição"
    fn normalized(mut self) -> Self {
        if let Some(token) = &self.hubspot.static_token {
            if token.trim().is_empty() {
                self.hubspot.static_token = None;
            }
        }
        self
    }

    pub fn crm_config(&self) -> CrmConfig {
        let config = CrmConfig::new(self.hubspot.account_id.clone()).with_base_url(self.hubspot.base_url.clone());
        match &self.hubspot.static_token {
            Some(token) => config.with_static_token(token.clone()),
            None => config,
        }
    }

    pub fn oauth_config(&self) -> Option<OAuthConfig> {
        self.oauth.as_ref().map(|oauth| {
            OAuthConfig::new(
                oauth.client_id.clone(),
                oauth.client_secret.clone(),
                oauth.redirect_url.clone(),
                oauth.setup_url.clone(),
            )
            .with_base_url(oauth.base_url.clone())
        })
    }

    pub fn uses_static_token(&self) -> bool {
        self.hubspot.static_token.is_some()
    }
}
