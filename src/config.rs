// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local runs.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind
    pub bind_addr: String,
    /// Server port
    pub port: u16,
    /// Origin of the web build of the client, allowed by CORS
    pub frontend_url: String,
    /// Load the demo accounts and directory at startup
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            frontend_url: "http://localhost:8081".to_string(),
            seed_demo_data: true,
        }
    }
}

impl Config {
    /// Config for tests: defaults with the demo data loaded.
    pub fn test_default() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: match env::var("PORT") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("PORT", raw))?,
                Err(_) => defaults.port,
            },
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            seed_demo_data: match env::var("SEED_DEMO_DATA") {
                Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("SEED_DEMO_DATA", raw))?,
                Err(_) => defaults.seed_demo_data,
            },
        })
    }

    /// `host:port` to listen on.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
