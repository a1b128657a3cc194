use crate::commands::CmdResult;
use crate::error::Result;
use crate::platform::PlatformClient;

pub fn list<P: PlatformClient>(client: &P) -> Result<CmdResult> {
    let registries = client.list_registries()?;
    Ok(CmdResult::default().with_registries(registries))
}

pub fn logs<P: PlatformClient>(client: &P, endpoint: &str) -> Result<CmdResult> {
    let logs = client.registry_logs(endpoint)?;
    Ok(CmdResult::default().with_registry_logs(logs))
}
