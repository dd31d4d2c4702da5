use std::net::AddrParseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Leptos configuration error: {0}")]
    Leptos(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
