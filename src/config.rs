//! # Kitchen Configuration
//!
//! Stage durations, the station mailbox size and the batch to run. Every field has a
//! default, so an empty file (or no file at all) yields the classic kitchen: 7s dough,
//! 4s per topping, 10s in the oven, 5s to serve, and the five canonical orders.
//!
//! Sources are layered with `figment`, later ones winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file (optional)
//! 3. `PIZZA_`-prefixed environment variables, e.g. `PIZZA_COOK_MS=250`
//!
//! ```toml
//! dough_ms = 700
//! topping_ms = 400
//! cook_ms = 1000
//! serve_ms = 500
//!
//! [[orders]]
//! toppings = ["Cheese"]
//! ```

use crate::model::OrderRequest;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const ENV_PREFIX: &str = "PIZZA_";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// Time to prepare one dough base.
    pub dough_ms: u64,
    /// Time to add a single topping; scaled by the number of toppings.
    pub topping_ms: u64,
    /// Time one pizza occupies the oven.
    pub cook_ms: u64,
    /// Time one pizza occupies the waiter.
    pub serve_ms: u64,
    /// Mailbox capacity of each station actor.
    pub mailbox_capacity: usize,
    /// The batch the binary runs.
    pub orders: Vec<OrderRequest>,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            dough_ms: 7000,
            topping_ms: 4000,
            cook_ms: 10000,
            serve_ms: 5000,
            mailbox_capacity: 32,
            orders: OrderRequest::canonical_batch(),
        }
    }
}

impl KitchenConfig {
    /// Same orders and mailbox, all four stage durations replaced.
    pub fn with_timings(
        mut self,
        dough_ms: u64,
        topping_ms: u64,
        cook_ms: u64,
        serve_ms: u64,
    ) -> Self {
        self.dough_ms = dough_ms;
        self.topping_ms = topping_ms;
        self.cook_ms = cook_ms;
        self.serve_ms = serve_ms;
        self
    }

    pub fn dough_time(&self) -> Duration {
        Duration::from_millis(self.dough_ms)
    }

    pub fn topping_time(&self) -> Duration {
        Duration::from_millis(self.topping_ms)
    }

    pub fn cook_time(&self) -> Duration {
        Duration::from_millis(self.cook_ms)
    }

    pub fn serve_time(&self) -> Duration {
        Duration::from_millis(self.serve_ms)
    }

    /// Defaults overridden by `PIZZA_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        extract(Figment::from(Serialized::defaults(KitchenConfig::default())))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Invalid(
                "mailbox_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from a TOML file, with environment variable overrides.
pub fn load_config(path: &Path) -> Result<KitchenConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    extract(Figment::from(Serialized::defaults(KitchenConfig::default())).merge(Toml::file(path)))
}

/// Load configuration from a TOML string (no environment overrides).
pub fn load_config_from_str(toml_str: &str) -> Result<KitchenConfig, ConfigError> {
    let config: KitchenConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

fn extract(figment: Figment) -> Result<KitchenConfig, ConfigError> {
    let config: KitchenConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
