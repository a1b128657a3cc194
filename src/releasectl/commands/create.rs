use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::platform::PlatformClient;

use super::helpers::all_channels;

/// Creates a channel and returns the application's channels afterwards.
pub fn run<P: PlatformClient>(
    client: &mut P,
    app_id: &str,
    name: &str,
    description: &str,
) -> Result<CmdResult> {
    client.create_channel(app_id, name, description)?;
    let channels = all_channels(&*client, app_id)?;

    let mut result = CmdResult::default().with_channels(channels);
    result.add_message(CmdMessage::success(format!("Channel created: {}", name)));
    Ok(result)
}
