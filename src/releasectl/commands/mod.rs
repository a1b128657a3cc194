use crate::config::ClientConfig;
use crate::model::{Channel, ChannelRelease, Registry, RegistryLog};

pub mod archive;
pub mod config;
pub mod create;
pub mod ensure;
pub mod helpers;
pub mod inspect;
pub mod list;
pub mod registries;
pub mod releases;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub channels: Vec<Channel>,
    pub channel: Option<Channel>,
    pub releases: Vec<ChannelRelease>,
    pub registries: Vec<Registry>,
    pub registry_logs: Vec<RegistryLog>,
    pub config: Option<ClientConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_channels(mut self, channels: Vec<Channel>) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn with_releases(mut self, releases: Vec<ChannelRelease>) -> Self {
        self.releases = releases;
        self
    }

    pub fn with_registries(mut self, registries: Vec<Registry>) -> Self {
        self.registries = registries;
        self
    }

    pub fn with_registry_logs(mut self, logs: Vec<RegistryLog>) -> Self {
        self.registry_logs = logs;
        self
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }
}
