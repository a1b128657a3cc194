use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::platform::PlatformClient;

use super::helpers::resolve_channel;

/// Resolves a channel by name or ID, creating it under that name when absent.
pub fn run<P: PlatformClient>(
    client: &mut P,
    app_id: &str,
    name_or_id: &str,
    description: &str,
) -> Result<CmdResult> {
    let channel = resolve_channel(client, app_id, name_or_id, description, true)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Using channel {} ({})",
        channel.name, channel.id
    )));
    Ok(result.with_channel(channel))
}
