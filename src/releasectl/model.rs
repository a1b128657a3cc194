use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallCommands {
    pub existing: String,
    pub embedded: String,
    pub airgap: String,
}

/// A release track of an application, as handed to callers once resolved.
///
/// `id` is unique; `name` is unique only by convention, which is why lookups
/// by name can be ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub release_sequence: i64,
    pub release_label: String,
    pub is_archived: bool,
    pub install_commands: Option<InstallCommands>,
}

impl Channel {
    pub fn matches(&self, name_or_id: &str) -> bool {
        self.id == name_or_id || self.name == name_or_id
    }
}

/// A channel as the platform lists it, carrying its display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppChannel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub position: i64,
    pub release_sequence: i64,
    pub release_label: String,
    pub is_archived: bool,
    pub install_commands: Option<InstallCommands>,
}

impl AppChannel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: i64) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            slug: name.to_lowercase().replace(' ', "-"),
            name,
            description: String::new(),
            position,
            release_sequence: 0,
            release_label: String::new(),
            is_archived: false,
            install_commands: None,
        }
    }
}

impl From<AppChannel> for Channel {
    fn from(c: AppChannel) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            slug: c.slug,
            release_sequence: c.release_sequence,
            release_label: c.release_label,
            is_archived: c.is_archived,
            install_commands: c.install_commands,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRelease {
    pub channel_sequence: i64,
    pub release_sequence: i64,
    pub semver: String,
    pub release_notes: String,
    pub created: Option<DateTime<Utc>>,
    pub released_at: Option<DateTime<Utc>>,
    // Only these two change after publication.
    pub airgap_build_status: Option<String>,
    pub airgap_build_error: Option<String>,
}

impl ChannelRelease {
    pub fn new(channel_sequence: i64, release_sequence: i64) -> Self {
        Self {
            channel_sequence,
            release_sequence,
            semver: String::new(),
            release_notes: String::new(),
            created: None,
            released_at: None,
            airgap_build_status: None,
            airgap_build_error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    pub provider: String,
    pub endpoint: String,
    pub auth_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryLog {
    pub created_at: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub action: String,
    pub status: Option<String>,
    pub success: bool,
}
