use super::{sort_by_position, sort_newest_first, PlatformClient};
use crate::error::{ReleaseError, Result};
use crate::model::{AppChannel, ChannelRelease, Registry, RegistryLog};
use std::cell::Cell;
use std::collections::HashMap;

/// In-memory platform for testing and development.
/// Does NOT talk to any server.
///
/// Channels are kept in insertion order (deliberately unsorted) so ordering
/// guarantees are exercised on every read. Call counters let tests assert on
/// exact request sequences.
#[derive(Default)]
pub struct InMemoryPlatform {
    channels: HashMap<String, Vec<AppChannel>>,
    releases: HashMap<String, Vec<ChannelRelease>>,
    registries: Vec<Registry>,
    registry_logs: HashMap<String, Vec<RegistryLog>>,
    next_id: usize,
    // Simulates a platform whose creates are not immediately visible.
    hide_created: bool,
    fail_creates: bool,
    list_calls: Cell<usize>,
    create_calls: usize,
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, app_id: &str, channel: AppChannel) -> Self {
        self.insert_channel(app_id, channel);
        self
    }

    pub fn with_releases(mut self, channel_id: &str, releases: Vec<ChannelRelease>) -> Self {
        self.releases.insert(channel_id.to_string(), releases);
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registries.push(registry);
        self
    }

    pub fn with_registry_logs(mut self, endpoint: &str, logs: Vec<RegistryLog>) -> Self {
        self.registry_logs.insert(endpoint.to_string(), logs);
        self
    }

    pub fn hiding_created_channels(mut self) -> Self {
        self.hide_created = true;
        self
    }

    /// Every create is counted and then rejected with a 500.
    pub fn failing_creates(mut self) -> Self {
        self.fail_creates = true;
        self
    }

    pub fn insert_channel(&mut self, app_id: &str, channel: AppChannel) {
        self.channels
            .entry(app_id.to_string())
            .or_default()
            .push(channel);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls
    }

    fn find_channel(&self, app_id: &str, channel_id: &str) -> Option<&AppChannel> {
        self.channels
            .get(app_id)?
            .iter()
            .find(|c| c.id == channel_id)
    }
}

impl PlatformClient for InMemoryPlatform {
    fn list_channels(&self, app_id: &str) -> Result<Vec<AppChannel>> {
        self.list_calls.set(self.list_calls.get() + 1);
        let mut channels = self.channels.get(app_id).cloned().unwrap_or_default();
        sort_by_position(&mut channels);
        Ok(channels)
    }

    fn create_channel(&mut self, app_id: &str, name: &str, description: &str) -> Result<()> {
        self.create_calls += 1;
        if self.fail_creates {
            return Err(ReleaseError::Status {
                op: "CreateChannel",
                method: reqwest::Method::POST,
                endpoint: format!("/v1/app/{}/channel", app_id),
                status: 500,
            });
        }
        if self.hide_created {
            return Ok(());
        }

        self.next_id += 1;
        let position = self.channels.get(app_id).map_or(0, |c| c.len() as i64);
        let mut channel = AppChannel::new(format!("created-{}", self.next_id), name, position);
        channel.description = description.to_string();
        self.insert_channel(app_id, channel);
        Ok(())
    }

    fn archive_channel(&mut self, app_id: &str, channel_id: &str) -> Result<()> {
        let channel = self
            .channels
            .get_mut(app_id)
            .and_then(|list| list.iter_mut().find(|c| c.id == channel_id))
            .ok_or(ReleaseError::NotFound)?;
        channel.is_archived = true;
        Ok(())
    }

    fn get_channel(
        &self,
        app_id: &str,
        channel_id: &str,
    ) -> Result<(AppChannel, Vec<ChannelRelease>)> {
        let channel = self
            .find_channel(app_id, channel_id)
            .cloned()
            .ok_or(ReleaseError::NotFound)?;
        let mut releases = self.releases.get(channel_id).cloned().unwrap_or_default();
        sort_newest_first(&mut releases);
        Ok((channel, releases))
    }

    fn list_registries(&self) -> Result<Vec<Registry>> {
        Ok(self.registries.clone())
    }

    fn registry_logs(&self, endpoint: &str) -> Result<Vec<RegistryLog>> {
        Ok(self.registry_logs.get(endpoint).cloned().unwrap_or_default())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const APP: &str = "app-1";

    /// Three channels with unique names, inserted out of position order.
    pub fn standard_platform() -> InMemoryPlatform {
        InMemoryPlatform::new()
            .with_channel(APP, AppChannel::new("ch-unstable", "Unstable", 2))
            .with_channel(APP, AppChannel::new("ch-stable", "Stable", 0))
            .with_channel(APP, AppChannel::new("ch-beta", "Beta", 1))
    }

    /// Two distinct channels sharing the name "Beta".
    pub fn duplicate_name_platform() -> InMemoryPlatform {
        InMemoryPlatform::new()
            .with_channel(APP, AppChannel::new("ch-beta-1", "Beta", 0))
            .with_channel(APP, AppChannel::new("ch-beta-2", "Beta", 1))
    }
}
