//! # CLI Behavior
//!
//! This is **one possible UI client** for releasectl, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the `releasectl` library.
//!
//! ## Connection Settings
//!
//! Every remote command needs an API token; channel commands also need an
//! application ID. Both come from flags, environment variables, or the
//! persisted config file, in that order (see `releasectl config`).
//!
//! ## Output
//!
//! Tables go to stdout. Diagnostics (`-v`, `-vv`, or `RUST_LOG`) go to stderr
//! so piping a table never picks up log lines.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Table layout and template rendering
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
