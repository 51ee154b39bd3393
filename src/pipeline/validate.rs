// src/pipeline/validate.rs

//! Configuration validation driver.

use crate::error::Result;
use crate::models::Config;

/// Validate the effective configuration and log the key values.
pub fn run_validate(config: &Config) -> Result<()> {
    config.validate()?;

    log::info!("Config OK");
    log::info!("  base_url: {}", config.site.base_url);
    log::info!("  user_agent: {}", config.crawler.user_agent);
    log::info!("  timeout_secs: {}", config.crawler.timeout_secs);
    log::info!("  request_delay_ms: {}", config.crawler.request_delay_ms);
    log::info!("  max_concurrent: {}", config.crawler.max_concurrent);
    log::info!("  max_pages: {}", config.crawler.max_pages);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(run_validate(&Config::default()).is_ok());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = Config::default();
        config.crawler.max_concurrent = 0;
        assert!(run_validate(&config).is_err());
    }
}
