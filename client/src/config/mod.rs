mod client_config;

pub use client_config::{ClientConfig, get_config_manager};
