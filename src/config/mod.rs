//! Configuration file management and resolution of effective settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_HOST, DEFAULT_PORT, GtxConfig, ResolveOptions,
    ResolvedConfig, ServerConfig, resolve_config, resolve_server_address,
};
