//! Resolução do bearer token das chamadas CRM
//!
//! Dois modos mutuamente exclusivos:
//! - token por chamada, fornecido pelo chamador (OAuth);
//! - token estático configurado uma única vez (private app).
//!
//! Exatamente uma das fontes deve existir. As duas presentes, ou nenhuma, é erro
//! de configuração detectado antes de qualquer I/O. Strings vazias contam como ausentes.

use crate::error::{HubSpotError, Result};

pub(crate) fn resolve_bearer<'a>(static_token: Option<&'a str>, access_token: Option<&'a str>) -> Result<&'a str> {
    let static_token = static_token.filter(|t| !t.is_empty());
    let access_token = access_token.filter(|t| !t.is_empty());

    match (static_token, access_token) {
        (Some(token), None) | (None, Some(token)) => Ok(token),
        (Some(_), Some(_)) => Err(HubSpotError::config_error(
            "exactly one of static token or access token must be set, got both",
        )),
        (None, None) => Err(HubSpotError::config_error(
            "exactly one of static token or access token must be set, got neither",
        )),
    }
}

pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_only() {
        assert_eq!(resolve_bearer(Some("static"), None).unwrap(), "static");
    }

    #[test]
    fn test_per_call_only() {
        assert_eq!(resolve_bearer(None, Some("per-call")).unwrap(), "per-call");
    }

    #[test]
    fn test_both_is_config_error() {
        let err = resolve_bearer(Some("static"), Some("per-call")).unwrap_err();
        assert!(matches!(err, HubSpotError::ConfigError(_)));
        assert!(err.to_string().contains("got both"));
    }

    #[test]
    fn test_neither_is_config_error() {
        let err = resolve_bearer(None, None).unwrap_err();
        assert!(matches!(err, HubSpotError::ConfigError(_)));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        assert_eq!(resolve_bearer(Some("static"), Some("")).unwrap(), "static");
        assert!(resolve_bearer(Some(""), Some("")).is_err());
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer_header("abc"), "Bearer abc");
    }
}
