//! Runtime configuration for the store service.
//!
//! Defaults are overridden by environment variables:
//! - `STOREFRONT_CHANNEL_BUFFER` - request queue size of the store service
//! - `STOREFRONT_LOG` - fallback log filter when `RUST_LOG` is unset

use tracing::debug;

use crate::error::{StoreError, StoreResult};

pub const DEFAULT_CHANNEL_BUFFER: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Capacity of the store service request channel.
    pub channel_buffer: usize,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(buffer) = lookup("STOREFRONT_CHANNEL_BUFFER") {
            match buffer.trim().parse::<usize>() {
                Ok(parsed) => config.channel_buffer = parsed,
                Err(_) => debug!(value = %buffer, "Ignoring unparsable channel buffer"),
            }
        }

        if let Some(filter) = lookup("STOREFRONT_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.channel_buffer == 0 {
            return Err(StoreError::InvalidArgument(
                "channel_buffer must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
