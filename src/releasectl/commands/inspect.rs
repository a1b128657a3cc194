use crate::commands::CmdResult;
use crate::error::Result;
use crate::platform::PlatformClient;

use super::helpers::resolve_channel;

pub fn run<P: PlatformClient>(client: &mut P, app_id: &str, name_or_id: &str) -> Result<CmdResult> {
    let channel = resolve_channel(client, app_id, name_or_id, "", false)?;
    Ok(CmdResult::default().with_channel(channel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::platform::memory::fixtures::*;

    #[test]
    fn inspects_by_name() {
        let mut platform = standard_platform();
        let result = run(&mut platform, APP, "Stable").unwrap();
        assert_eq!(result.channel.unwrap().id, "ch-stable");
    }

    #[test]
    fn never_creates() {
        let mut platform = standard_platform();
        let err = run(&mut platform, APP, "Nightly").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(platform.create_calls(), 0);
    }
}
