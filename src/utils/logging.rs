use hubspot::HubSpotError;
use tracing::{debug, error, info, warn};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_request_processed(endpoint: &str, status: u16, duration_ms: u64) {
    info!("Request processed: {} - Status: {} - Duration: {}ms",
          endpoint, status, duration_ms);
}

pub fn log_hubspot_api_error(err: &HubSpotError) {
    match err {
        HubSpotError::ValidationError(_) | HubSpotError::ConfigError(_) => {
            warn!("HubSpot request rejected before sending: {}", err)
        }
        _ => error!("HubSpot API error - Status: {:?} - Error: {}", err.status(), err),
    }
}

pub fn log_crm_object_fetched(object_type_id: &str, id: &str) {
    debug!("CRM object fetched: {}/{}", object_type_id, id);
}

pub fn log_crm_object_written(action: &str, object_type_id: &str, id: &str) {
    info!("✏️ CRM object {}: {}/{}", action, object_type_id, id);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 HubSpot CRM gateway starting on port {}", port);
}

pub fn log_server_ready(host: &str, port: u16) {
    info!("✅ Server ready and listening on http://{}:{}", host, port);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
