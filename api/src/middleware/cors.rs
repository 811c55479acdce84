//! CORS configuration.

use actix_cors::Cors;

use bb_shared::config::CorsConfig;

/// Build the CORS middleware from configuration; an empty origin list allows
/// any origin
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .max_age(config.max_age as usize);

    if config.allowed_origins.is_empty() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
