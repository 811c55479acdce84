//! Configuration loading.
//!
//! Layering, lowest precedence first: plain environment variables (the
//! `from_env` builders), an optional `config/default.toml` file, then
//! `BB__`-prefixed environment overrides (e.g. `BB__SERVER__PORT=9090`).

use bb_shared::config::AppConfig;

/// Load the application configuration
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::from_env();

    let config = config::Config::builder()
        .add_source(config::Config::try_from(&defaults)?)
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::Environment::with_prefix("BB").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(config)
}
