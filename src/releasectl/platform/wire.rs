//! JSON shapes exchanged with the vendor API.
//!
//! The v1 channel endpoints use PascalCase field names, the v3 registry
//! endpoints camelCase. Fields the platform omits fall back to defaults so a
//! sparse response still decodes.

use crate::model::{AppChannel, ChannelRelease, InstallCommands, Registry, RegistryLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Go servers encode nil slices as `null`; treat that like an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WireInstallCommands {
    pub existing: String,
    pub embedded: String,
    pub airgap: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WireAppChannel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub position: i64,
    pub release_sequence: i64,
    pub release_label: String,
    pub is_archived: bool,
    pub install_commands: Option<WireInstallCommands>,
}

impl From<WireAppChannel> for AppChannel {
    fn from(w: WireAppChannel) -> Self {
        Self {
            id: w.id,
            name: w.name,
            description: w.description,
            slug: w.slug,
            position: w.position,
            release_sequence: w.release_sequence,
            release_label: w.release_label,
            is_archived: w.is_archived,
            install_commands: w.install_commands.map(|ic| InstallCommands {
                existing: ic.existing,
                embedded: ic.embedded,
                airgap: ic.airgap,
            }),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WireChannelRelease {
    pub channel_sequence: i64,
    pub release_sequence: i64,
    #[serde(alias = "Version")]
    pub semver: String,
    pub release_notes: String,
    pub created: Option<DateTime<Utc>>,
    pub released_at: Option<DateTime<Utc>>,
    pub airgap_build_status: Option<String>,
    pub airgap_build_error: Option<String>,
}

impl From<WireChannelRelease> for ChannelRelease {
    fn from(w: WireChannelRelease) -> Self {
        Self {
            channel_sequence: w.channel_sequence,
            release_sequence: w.release_sequence,
            semver: w.semver,
            release_notes: w.release_notes,
            created: w.created,
            released_at: w.released_at,
            airgap_build_status: w.airgap_build_status.filter(|s| !s.is_empty()),
            airgap_build_error: w.airgap_build_error.filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetChannelResponse {
    pub channel: WireAppChannel,
    #[serde(deserialize_with = "null_as_empty")]
    pub releases: Vec<WireChannelRelease>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateChannelBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireRegistry {
    pub provider: String,
    pub endpoint: String,
    pub auth_type: String,
}

impl From<WireRegistry> for Registry {
    fn from(w: WireRegistry) -> Self {
        Self {
            provider: w.provider,
            endpoint: w.endpoint,
            auth_type: w.auth_type,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListRegistriesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub external_registries: Vec<WireRegistry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireRegistryLog {
    pub created_at: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub action: String,
    pub status: Option<String>,
    pub success: bool,
}

impl From<WireRegistryLog> for RegistryLog {
    fn from(w: WireRegistryLog) -> Self {
        Self {
            created_at: w.created_at,
            image: w.image.filter(|s| !s.is_empty()),
            action: w.action,
            status: w.status.filter(|s| !s.is_empty()),
            success: w.success,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RegistryLogsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logs: Vec<WireRegistryLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_v1_channel() {
        let json = r#"{"Id":"ch-1","Name":"Stable","Position":2,"ReleaseSequence":9}"#;
        let wire: WireAppChannel = serde_json::from_str(json).unwrap();
        let channel = AppChannel::from(wire);

        assert_eq!(channel.id, "ch-1");
        assert_eq!(channel.name, "Stable");
        assert_eq!(channel.position, 2);
        assert_eq!(channel.release_sequence, 9);
        assert!(channel.description.is_empty());
        assert!(channel.install_commands.is_none());
    }

    #[test]
    fn decodes_install_commands() {
        let json = r#"{"Id":"ch-1","Name":"Stable","InstallCommands":
            {"Existing":"kubectl kots install app","Embedded":"curl embedded","Airgap":"curl airgap"}}"#;
        let channel = AppChannel::from(serde_json::from_str::<WireAppChannel>(json).unwrap());

        let commands = channel.install_commands.unwrap();
        assert_eq!(commands.existing, "kubectl kots install app");
        assert_eq!(commands.embedded, "curl embedded");
        assert_eq!(commands.airgap, "curl airgap");
    }

    #[test]
    fn release_accepts_version_alias_and_blank_airgap_fields() {
        let json = r#"{"ChannelSequence":4,"ReleaseSequence":11,"Version":"1.2.0",
            "Created":"2024-03-01T10:00:00Z","AirgapBuildStatus":"","AirgapBuildError":""}"#;
        let release = ChannelRelease::from(serde_json::from_str::<WireChannelRelease>(json).unwrap());

        assert_eq!(release.semver, "1.2.0");
        assert!(release.created.is_some());
        assert!(release.released_at.is_none());
        assert!(release.airgap_build_status.is_none());
        assert!(release.airgap_build_error.is_none());
    }

    #[test]
    fn create_body_uses_pascal_case() {
        let body = CreateChannelBody {
            name: "Beta",
            description: "early adopters",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Name": "Beta", "Description": "early adopters"})
        );
    }

    #[test]
    fn null_lists_decode_as_empty() {
        let resp: GetChannelResponse =
            serde_json::from_str(r#"{"Channel":{"Id":"ch-1"},"Releases":null}"#).unwrap();
        assert_eq!(resp.channel.id, "ch-1");
        assert!(resp.releases.is_empty());

        let resp: ListRegistriesResponse =
            serde_json::from_str(r#"{"external_registries":null}"#).unwrap();
        assert!(resp.external_registries.is_empty());

        let resp: RegistryLogsResponse = serde_json::from_str(r#"{"logs":null}"#).unwrap();
        assert!(resp.logs.is_empty());

        let resp: RegistryLogsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.logs.is_empty());
    }

    #[test]
    fn registry_log_blank_optionals_become_none() {
        let json = r#"{"logs":[{"createdAt":"2024-05-02T08:30:00Z","image":"","action":"pull","status":null,"success":true}]}"#;
        let resp: RegistryLogsResponse = serde_json::from_str(json).unwrap();
        let log = RegistryLog::from(resp.logs.into_iter().next().unwrap());

        assert!(log.image.is_none());
        assert!(log.status.is_none());
        assert_eq!(log.action, "pull");
        assert!(log.success);
    }
}
