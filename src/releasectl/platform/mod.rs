//! # Platform Layer
//!
//! This module defines the boundary between releasectl and the remote vendor
//! API. The [`PlatformClient`] trait lets the command layer run against
//! different backends.
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: Production client speaking JSON over HTTPS
//!   - One blocking round trip per call, no retries
//!   - Status contracts per endpoint (200 for reads/creates, 204 for archive)
//!
//! - [`memory::InMemoryPlatform`]: In-memory double for testing
//!   - Holds channels, releases and registries in plain collections
//!   - Counts calls so tests can assert on request sequences
//!
//! ## Ordering
//!
//! The platform returns channels and releases in no particular order.
//! Every implementation hands them back sorted, so callers never re-sort:
//! - channels ascending by server-assigned position ([`sort_by_position`])
//! - releases newest first by channel sequence ([`sort_newest_first`])

use crate::error::Result;
use crate::model::{AppChannel, ChannelRelease, Registry, RegistryLog};

pub mod http;
pub mod memory;
pub mod wire;

/// Remote operations releasectl depends on.
///
/// Failures are reported as-is; implementations never retry.
pub trait PlatformClient {
    /// List every channel of an application, ascending by position.
    fn list_channels(&self, app_id: &str) -> Result<Vec<AppChannel>>;

    /// Create a channel. The platform does not echo the created channel back.
    fn create_channel(&mut self, app_id: &str, name: &str, description: &str) -> Result<()>;

    /// Archive a channel by ID. An absent channel yields [`crate::error::ReleaseError::NotFound`].
    fn archive_channel(&mut self, app_id: &str, channel_id: &str) -> Result<()>;

    /// Fetch a channel together with its release history, newest first.
    fn get_channel(
        &self,
        app_id: &str,
        channel_id: &str,
    ) -> Result<(AppChannel, Vec<ChannelRelease>)>;

    /// List the external registries configured for the vendor.
    fn list_registries(&self) -> Result<Vec<Registry>>;

    /// Fetch the audit log of one registry endpoint.
    fn registry_logs(&self, endpoint: &str) -> Result<Vec<RegistryLog>>;
}

pub fn sort_by_position(channels: &mut [AppChannel]) {
    channels.sort_by_key(|c| c.position);
}

pub fn sort_newest_first(releases: &mut [ChannelRelease]) {
    releases.sort_by(|a, b| b.channel_sequence.cmp(&a.channel_sequence));
}
