//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all releasectl operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Binds** an application ID so callers don't thread it through every call
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, format, or exit. Those belong to the CLI.
//!
//! ## Generic Over PlatformClient
//!
//! `ReleaseApi<P: PlatformClient>` is generic over the platform backend:
//! - Production: `ReleaseApi<HttpClient>`
//! - Testing: `ReleaseApi<InMemoryPlatform>`
//!
//! API tests verify dispatch and argument passing only; command logic is
//! tested in the command modules.

use crate::commands;
use crate::error::Result;
use crate::platform::PlatformClient;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade, bound to one application.
pub struct ReleaseApi<P: PlatformClient> {
    client: P,
    app_id: String,
}

impl<P: PlatformClient> ReleaseApi<P> {
    pub fn new(client: P, app_id: impl Into<String>) -> Self {
        Self {
            client,
            app_id: app_id.into(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn client(&self) -> &P {
        &self.client
    }

    pub fn list_channels(&self) -> Result<CmdResult> {
        commands::list::run(&self.client, &self.app_id)
    }

    pub fn create_channel(&mut self, name: &str, description: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.client, &self.app_id, name, description)
    }

    pub fn archive_channel(&mut self, channel_id: &str) -> Result<CmdResult> {
        commands::archive::run(&mut self.client, &self.app_id, channel_id)
    }

    pub fn inspect_channel(&mut self, name_or_id: &str) -> Result<CmdResult> {
        commands::inspect::run(&mut self.client, &self.app_id, name_or_id)
    }

    pub fn channel_releases(&mut self, name_or_id: &str) -> Result<CmdResult> {
        commands::releases::run(&mut self.client, &self.app_id, name_or_id)
    }

    pub fn ensure_channel(&mut self, name_or_id: &str, description: &str) -> Result<CmdResult> {
        commands::ensure::run(&mut self.client, &self.app_id, name_or_id, description)
    }

    pub fn list_registries(&self) -> Result<CmdResult> {
        commands::registries::list(&self.client)
    }

    pub fn registry_logs(&self, endpoint: &str) -> Result<CmdResult> {
        commands::registries::logs(&self.client, endpoint)
    }
}

/// Reads or updates the persisted client configuration.
///
/// Configuration never touches the platform, so it lives outside [`ReleaseApi`].
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}
