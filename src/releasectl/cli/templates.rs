//! # CLI Templates
//!
//! Output is rendered through minijinja templates kept in stand-alone files,
//! which are easier to edit and diff than string literals in code. They are
//! pulled in here as constants.
//!
//! Templates use explicit line breaks: each row emits its own `\n`, and no
//! trailing newline is relied upon. Column layout is computed in Rust before
//! rendering, so templates only decide structure and style names.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const CHANNEL_ATTRS_TEMPLATE: &str = include_str!("templates/channel_attrs.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
