//! # releasectl Architecture
//!
//! releasectl is a client library for an application release platform that
//! happens to ship with a CLI. It manages release channels (named tracks an
//! application's releases are promoted through) and reads external registry
//! data.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, bound to one application      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, including channel name resolution        │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Platform Layer (platform/)                                 │
//! │  - Abstract PlatformClient trait                            │
//! │  - HttpClient (production), InMemoryPlatform (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Channel Resolution
//!
//! Users refer to channels by name or by ID. Names are not guaranteed unique,
//! so a name shared by several channels is an error rather than a guess, and
//! the caller is asked to use the ID. See `commands/helpers.rs`.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Diagnostics go through `tracing`, and the CLI decides
//! where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests against `InMemoryPlatform`.
//! 2. **Platform**: `HttpClient` against `mockito` servers.
//! 3. **API**: dispatch tests.
//! 4. **CLI**: renderer tests plus `assert_cmd` runs of the binary.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod platform;
