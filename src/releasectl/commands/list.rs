use crate::commands::CmdResult;
use crate::error::Result;
use crate::platform::PlatformClient;

use super::helpers::all_channels;

pub fn run<P: PlatformClient>(client: &P, app_id: &str) -> Result<CmdResult> {
    let channels = all_channels(client, app_id)?;
    Ok(CmdResult::default().with_channels(channels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::fixtures::*;
    use crate::platform::memory::InMemoryPlatform;

    #[test]
    fn lists_channels_in_position_order() {
        let platform = standard_platform();
        let result = run(&platform, APP).unwrap();

        let names: Vec<_> = result.channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Stable", "Beta", "Unstable"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_app_lists_nothing() {
        let platform = InMemoryPlatform::new();
        let result = run(&platform, APP).unwrap();
        assert!(result.channels.is_empty());
    }
}
