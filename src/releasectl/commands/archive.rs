use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::platform::PlatformClient;

/// Archives a channel by ID. An unknown ID surfaces as
/// [`crate::error::ReleaseError::NotFound`] from the platform.
pub fn run<P: PlatformClient>(client: &mut P, app_id: &str, channel_id: &str) -> Result<CmdResult> {
    client.archive_channel(app_id, channel_id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Channel {} successfully archived",
        channel_id
    )));
    Ok(result)
}
