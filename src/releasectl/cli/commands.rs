//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Layer flags and env vars over the config file, build the `HttpClient`
//! 3. **API Dispatch**: Call the appropriate `ReleaseApi` method
//! 4. **Output Formatting**: Convert `CmdResult` into tables and messages
//!
//! Errors bubble up to `main.rs`, which prints them and exits with status 1.

use super::render::{
    print_messages, render_channel_attrs, render_channels, render_registries,
    render_registry_logs, render_releases, render_text_list,
};
use super::setup::{ChannelCommands, Cli, Commands, RegistryCommands};
use clap::Parser;
use releasectl::api::{CmdResult, ConfigAction, ReleaseApi};
use releasectl::config::{default_config_dir, ClientConfig};
use releasectl::error::{ReleaseError, Result};
use releasectl::platform::http::HttpClient;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Connection overrides taken from flags or their environment variables.
struct Overrides {
    app: Option<String>,
    token: Option<String>,
    api_origin: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = default_config_dir()
        .ok_or_else(|| ReleaseError::Config("could not determine config directory".into()))?;
    let overrides = Overrides {
        app: cli.app,
        token: cli.token,
        api_origin: cli.api_origin,
    };

    match cli.command {
        Commands::Config { key, value } => handle_config(&config_dir, key, value),
        Commands::Channel(cmd) => {
            let config = load_config(&config_dir, overrides)?;
            let app_id = config.require_app()?.to_string();
            let mut api = ReleaseApi::new(build_client(&config)?, app_id);
            match cmd {
                ChannelCommands::Ls => handle_list(&api),
                ChannelCommands::Create { name, description } => {
                    handle_create(&mut api, &name, &description)
                }
                ChannelCommands::Rm { channel_id } => handle_archive(&mut api, &channel_id),
                ChannelCommands::Inspect { channel } => handle_inspect(&mut api, &channel),
                ChannelCommands::Releases { channel } => handle_releases(&mut api, &channel),
                ChannelCommands::Ensure { name, description } => {
                    handle_ensure(&mut api, &name, &description)
                }
            }
        }
        Commands::Registry(cmd) => {
            let config = load_config(&config_dir, overrides)?;
            // Registries belong to the vendor, not to an application.
            let app_id = config.app_id.clone().unwrap_or_default();
            let api = ReleaseApi::new(build_client(&config)?, app_id);
            match cmd {
                RegistryCommands::Ls => handle_registries(&api),
                RegistryCommands::Logs { endpoint } => handle_registry_logs(&api, &endpoint),
            }
        }
    }
}

/// Default `releasectl=warn`; each `-v` raises it one level. `RUST_LOG` wins over both.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("releasectl={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(config_dir: &Path, overrides: Overrides) -> Result<ClientConfig> {
    let config = ClientConfig::load(config_dir)?.with_overrides(
        overrides.api_origin,
        overrides.token,
        overrides.app,
    );
    debug!(api_origin = %config.api_origin, app = ?config.app_id, "loaded configuration");
    Ok(config)
}

fn build_client(config: &ClientConfig) -> Result<HttpClient> {
    HttpClient::with_timeout(
        config.api_origin.as_str(),
        config.require_token()?,
        config.timeout(),
    )
}

fn print_result(output: String, result: &CmdResult) {
    print!("{}", output);
    print_messages(&result.messages);
}

fn handle_list(api: &ReleaseApi<HttpClient>) -> Result<()> {
    let result = api.list_channels()?;
    print_result(render_channels(&result.channels), &result);
    Ok(())
}

fn handle_create(api: &mut ReleaseApi<HttpClient>, name: &str, description: &str) -> Result<()> {
    let result = api.create_channel(name, description)?;
    print_result(render_channels(&result.channels), &result);
    Ok(())
}

fn handle_archive(api: &mut ReleaseApi<HttpClient>, channel_id: &str) -> Result<()> {
    let result = api.archive_channel(channel_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_inspect(api: &mut ReleaseApi<HttpClient>, channel: &str) -> Result<()> {
    let result = api.inspect_channel(channel)?;
    if let Some(channel) = &result.channel {
        print_result(render_channel_attrs(channel), &result);
    }
    Ok(())
}

fn handle_releases(api: &mut ReleaseApi<HttpClient>, channel: &str) -> Result<()> {
    let result = api.channel_releases(channel)?;
    print_result(render_releases(&result.releases), &result);
    Ok(())
}

fn handle_ensure(api: &mut ReleaseApi<HttpClient>, name: &str, description: &str) -> Result<()> {
    let result = api.ensure_channel(name, description)?;
    if let Some(channel) = &result.channel {
        print_result(render_channel_attrs(channel), &result);
    }
    Ok(())
}

fn handle_registries(api: &ReleaseApi<HttpClient>) -> Result<()> {
    let result = api.list_registries()?;
    print_result(render_registries(&result.registries), &result);
    Ok(())
}

fn handle_registry_logs(api: &ReleaseApi<HttpClient>, endpoint: &str) -> Result<()> {
    let result = api.registry_logs(endpoint)?;
    print_result(render_registry_logs(&result.registry_logs), &result);
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = releasectl::api::config(config_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(key, value)| format!("{} = {}", key, value))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration."));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
