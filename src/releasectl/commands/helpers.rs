use crate::error::{ReleaseError, Result};
use crate::model::Channel;
use crate::platform::PlatformClient;
use tracing::{debug, info};

pub fn all_channels<P: PlatformClient>(client: &P, app_id: &str) -> Result<Vec<Channel>> {
    let channels = client.list_channels(app_id)?;
    Ok(channels.into_iter().map(Channel::from).collect())
}

/// Finds the one channel whose ID or name equals `name_or_id`.
///
/// Returns `Ok(None)` when nothing matches. Several matches can only come
/// from a shared name, and are refused rather than guessed at.
pub fn find_channel<P: PlatformClient>(
    client: &P,
    app_id: &str,
    name_or_id: &str,
) -> Result<Option<Channel>> {
    let mut matching: Vec<Channel> = all_channels(client, app_id)?
        .into_iter()
        .filter(|c| c.matches(name_or_id))
        .collect();

    debug!(candidate = name_or_id, matches = matching.len(), "channel lookup");
    match matching.len() {
        0 => Ok(None),
        1 => Ok(matching.pop()),
        _ => Err(ReleaseError::AmbiguousChannel(name_or_id.to_string())),
    }
}

/// Resolves a channel by name or ID, optionally creating it when absent.
///
/// Creation is followed by exactly one more lookup, since the platform does
/// not return the created channel. If that lookup still finds nothing the
/// result is [`ReleaseError::ChannelNotFound`].
pub fn resolve_channel<P: PlatformClient>(
    client: &mut P,
    app_id: &str,
    name_or_id: &str,
    description: &str,
    create: bool,
) -> Result<Channel> {
    if let Some(channel) = find_channel(&*client, app_id, name_or_id)? {
        return Ok(channel);
    }
    if !create {
        return Err(ReleaseError::ChannelNotFound(name_or_id.to_string()));
    }

    info!(name = name_or_id, app = app_id, "channel not found, creating it");
    client.create_channel(app_id, name_or_id, description)?;

    find_channel(&*client, app_id, name_or_id)?
        .ok_or_else(|| ReleaseError::ChannelNotFound(name_or_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::AppChannel;
    use crate::platform::memory::fixtures::*;
    use crate::platform::memory::InMemoryPlatform;

    #[test]
    fn resolves_by_exact_name() {
        let mut platform = standard_platform();
        let channel = resolve_channel(&mut platform, APP, "Beta", "", false).unwrap();
        assert_eq!(channel.id, "ch-beta");
    }

    #[test]
    fn resolves_by_exact_id() {
        let mut platform = standard_platform();
        let channel = resolve_channel(&mut platform, APP, "ch-unstable", "", false).unwrap();
        assert_eq!(channel.name, "Unstable");
    }

    #[test]
    fn every_unique_channel_resolves_to_itself() {
        let mut platform = standard_platform();
        for (id, name) in [
            ("ch-stable", "Stable"),
            ("ch-beta", "Beta"),
            ("ch-unstable", "Unstable"),
        ] {
            assert_eq!(
                resolve_channel(&mut platform, APP, name, "", false).unwrap().id,
                id
            );
            assert_eq!(
                resolve_channel(&mut platform, APP, id, "", false).unwrap().name,
                name
            );
        }
        assert_eq!(platform.create_calls(), 0);
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let mut platform = standard_platform();
        let err = resolve_channel(&mut platform, APP, "beta", "", false).unwrap_err();
        assert!(matches!(err, ReleaseError::ChannelNotFound(ref n) if n == "beta"));
    }

    #[test]
    fn missing_without_create_is_not_found() {
        let mut platform = standard_platform();
        let err = resolve_channel(&mut platform, APP, "Nightly", "", false).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("\"Nightly\""));
        assert_eq!(platform.create_calls(), 0);
        assert_eq!(platform.list_calls(), 1);
    }

    #[test]
    fn missing_with_create_creates_once_and_looks_up_once_more() {
        let mut platform = standard_platform();
        let channel =
            resolve_channel(&mut platform, APP, "Nightly", "daily builds", true).unwrap();

        assert_eq!(channel.name, "Nightly");
        assert_eq!(channel.description, "daily builds");
        assert_eq!(platform.create_calls(), 1);
        assert_eq!(platform.list_calls(), 2);
    }

    #[test]
    fn created_but_invisible_channel_is_not_found_without_retrying() {
        let mut platform = InMemoryPlatform::new().hiding_created_channels();
        let err = resolve_channel(&mut platform, APP, "Ghost", "", true).unwrap_err();

        assert!(matches!(err, ReleaseError::ChannelNotFound(ref n) if n == "Ghost"));
        assert_eq!(platform.create_calls(), 1);
        assert_eq!(platform.list_calls(), 2);
    }

    #[test]
    fn create_failure_is_returned_unchanged() {
        let mut platform = standard_platform().failing_creates();
        let err = resolve_channel(&mut platform, APP, "Nightly", "", true).unwrap_err();

        assert!(matches!(
            err,
            ReleaseError::Status {
                op: "CreateChannel",
                status: 500,
                ..
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(platform.create_calls(), 1);
        assert_eq!(platform.list_calls(), 1);
    }

    #[test]
    fn existing_channel_resolves_even_when_creates_fail() {
        let mut platform = standard_platform().failing_creates();
        let channel = resolve_channel(&mut platform, APP, "Stable", "", true).unwrap();

        assert_eq!(channel.id, "ch-stable");
        assert_eq!(platform.create_calls(), 0);
    }

    #[test]
    fn shared_name_is_ambiguous_regardless_of_create() {
        for create in [false, true] {
            let mut platform = duplicate_name_platform();
            let err = resolve_channel(&mut platform, APP, "Beta", "", create).unwrap_err();

            assert_eq!(err.kind(), ErrorKind::Ambiguous);
            assert_eq!(
                err.to_string(),
                "channel \"Beta\" is ambiguous, please use channel ID"
            );
            assert_eq!(platform.create_calls(), 0);
        }
    }

    #[test]
    fn id_still_disambiguates_shared_names() {
        let mut platform = duplicate_name_platform();
        let channel = resolve_channel(&mut platform, APP, "ch-beta-2", "", false).unwrap();
        assert_eq!(channel.id, "ch-beta-2");
    }

    #[test]
    fn id_of_one_equal_to_name_of_another_is_ambiguous() {
        let mut platform = InMemoryPlatform::new()
            .with_channel(APP, AppChannel::new("stable", "Production", 0))
            .with_channel(APP, AppChannel::new("ch-2", "stable", 1));
        let err = resolve_channel(&mut platform, APP, "stable", "", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Ambiguous);
    }
}
