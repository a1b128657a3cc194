use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Channel;
use crate::platform::PlatformClient;

use super::helpers::resolve_channel;

/// Resolves a channel and returns it with its release history, newest first.
pub fn run<P: PlatformClient>(client: &mut P, app_id: &str, name_or_id: &str) -> Result<CmdResult> {
    let resolved = resolve_channel(client, app_id, name_or_id, "", false)?;
    let (channel, releases) = client.get_channel(app_id, &resolved.id)?;

    Ok(CmdResult::default()
        .with_channel(Channel::from(channel))
        .with_releases(releases))
}
