/**
 * Server Configuration
 *
 * Loads the responder configuration for the demo server.
 *
 * # Configuration Sources
 *
 * - `INERTIA_CONFIG` - path to a TOML file (see `shared::config`)
 * - `INERTIA_VERSION` - overrides the asset version, e.g. a git hash
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup;
 * the defaults are used instead.
 */

use crate::shared::InertiaConfig;

/// Load the responder configuration from the environment
pub fn load_config() -> InertiaConfig {
    let mut config = match std::env::var("INERTIA_CONFIG") {
        Ok(path) => match InertiaConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded Inertia configuration from {}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to load Inertia configuration from {}: {}", path, e);
                tracing::warn!("Continuing with default configuration");
                InertiaConfig::default()
            }
        },
        Err(_) => {
            tracing::warn!("INERTIA_CONFIG not set. Using default configuration.");
            InertiaConfig::default()
        }
    };

    if let Ok(version) = std::env::var("INERTIA_VERSION") {
        config.version = Some(version).into();
    }

    if let Err(e) = config.validate() {
        tracing::warn!("Inertia configuration problem: {}. SSR may be unavailable.", e);
    }

    config
}
