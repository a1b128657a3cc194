use releasectl::api::ReleaseApi;
use releasectl::error::{ErrorKind, ReleaseError};
use releasectl::model::{AppChannel, ChannelRelease};
use releasectl::platform::memory::InMemoryPlatform;

const APP: &str = "app-1";

fn platform() -> InMemoryPlatform {
    InMemoryPlatform::new()
        .with_channel(APP, AppChannel::new("ch-3", "Unstable", 2))
        .with_channel(APP, AppChannel::new("ch-1", "Stable", 0))
        .with_channel(APP, AppChannel::new("ch-2", "Beta", 1))
        .with_releases(
            "ch-1",
            vec![
                ChannelRelease::new(4, 10),
                ChannelRelease::new(6, 14),
                ChannelRelease::new(5, 12),
            ],
        )
}

#[test]
fn test_channels_are_listed_in_position_order() {
    let api = ReleaseApi::new(platform(), APP);
    let ids: Vec<_> = api
        .list_channels()
        .unwrap()
        .channels
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec!["ch-1", "ch-2", "ch-3"]);
}

#[test]
fn test_release_history_is_newest_first() {
    let mut api = ReleaseApi::new(platform(), APP);
    let result = api.channel_releases("Stable").unwrap();

    assert_eq!(result.channel.unwrap().name, "Stable");
    let seqs: Vec<_> = result.releases.iter().map(|r| r.channel_sequence).collect();
    assert_eq!(seqs, vec![6, 5, 4]);
}

#[test]
fn test_ensure_creates_once_then_reuses() {
    let mut api = ReleaseApi::new(platform(), APP);

    let first = api.ensure_channel("Nightly", "nightly builds").unwrap();
    let second = api.ensure_channel("Nightly", "ignored").unwrap();

    assert_eq!(first.channel, second.channel);
    assert_eq!(api.client().create_calls(), 1);
    assert_eq!(api.list_channels().unwrap().channels.len(), 4);
}

#[test]
fn test_create_then_inspect() {
    let mut api = ReleaseApi::new(platform(), APP);
    let created = api.create_channel("Edge", "bleeding").unwrap();
    assert_eq!(created.channels.len(), 4);

    let inspected = api.inspect_channel("Edge").unwrap().channel.unwrap();
    assert_eq!(inspected.description, "bleeding");
}

#[test]
fn test_duplicate_names_require_an_id() {
    let platform = platform().with_channel(APP, AppChannel::new("ch-4", "Beta", 3));
    let mut api = ReleaseApi::new(platform, APP);

    let err = api.inspect_channel("Beta").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Ambiguous);

    let by_id = api.inspect_channel("ch-4").unwrap().channel.unwrap();
    assert_eq!(by_id.name, "Beta");
}

#[test]
fn test_archive_unknown_id_is_not_found() {
    let mut api = ReleaseApi::new(platform(), APP);
    let err = api.archive_channel("ch-404").unwrap_err();
    assert!(matches!(err, ReleaseError::NotFound));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
