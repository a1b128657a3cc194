use clap::{ArgAction, Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "releasectl", bin_name = "releasectl", version = get_version())]
#[command(about = "Manage application release channels and registries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Application ID to operate on
    #[arg(long, global = true, env = "RELEASECTL_APP", help_heading = "Options")]
    pub app: Option<String>,

    /// API token sent with every request
    #[arg(
        long,
        global = true,
        env = "RELEASECTL_API_TOKEN",
        hide_env_values = true,
        help_heading = "Options"
    )]
    pub token: Option<String>,

    /// Base URL of the vendor API
    #[arg(long, global = true, env = "RELEASECTL_API_ORIGIN", help_heading = "Options")]
    pub api_origin: Option<String>,

    /// Verbose output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage release channels
    #[command(subcommand)]
    Channel(ChannelCommands),

    /// Inspect external registries
    #[command(subcommand)]
    Registry(RegistryCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (api-origin, api-token, app, timeout)
        key: Option<String>,

        /// Value to set (omit to show the current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChannelCommands {
    /// List all channels of the application
    #[command(alias = "list")]
    Ls,

    /// Create a channel, then list all channels
    Create {
        /// Name of the new channel
        #[arg(long)]
        name: String,

        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Archive a channel by ID
    #[command(alias = "archive")]
    Rm {
        /// ID of the channel to archive
        channel_id: String,
    },

    /// Show full details for a channel
    Inspect {
        /// Channel name or ID
        channel: String,
    },

    /// Show a channel's release history, newest first
    Releases {
        /// Channel name or ID
        channel: String,
    },

    /// Resolve a channel by name or ID, creating it if it does not exist
    Ensure {
        /// Channel name (or ID of an existing channel)
        name: String,

        /// Description used if the channel is created
        #[arg(long, default_value = "")]
        description: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RegistryCommands {
    /// List external registries
    #[command(alias = "list")]
    Ls,

    /// Show the audit log of a registry endpoint
    Logs {
        /// Registry endpoint, e.g. index.docker.io
        endpoint: String,
    },
}
