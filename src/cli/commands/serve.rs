use anyhow::Result;

use super::load_settings;
use crate::cli::args::LanguageArgs;
use crate::config::resolve_server_address;
use crate::server::{self, AppState};
use crate::translation::TranslationClient;

pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub languages: LanguageArgs,
}

pub async fn run_serve(options: ServeOptions) -> Result<()> {
    let (config, config_file) = load_settings(&options.languages)?;
    let (host, port) = resolve_server_address(options.host.as_deref(), options.port, &config_file);

    let state = AppState::new(TranslationClient::new(config.endpoint), config.languages);
    server::serve(state, &host, port).await
}
