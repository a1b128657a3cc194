//! Styles for the releasectl CLI.
//!
//! Templates refer to styles by semantic name (`header`, `time`, ...) through
//! the `style` filter; the actual colors live only here. Unknown names render
//! as plain text.
use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADER: &str = "header";
    pub const MUTED: &str = "muted";
    pub const TIME: &str = "time";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub static THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    let muted = Style::new().color256(246);

    HashMap::from([
        (names::HEADER, Style::new().bold()),
        (names::MUTED, muted.clone()),
        (names::TIME, muted.clone().italic()),
        (names::SUCCESS, Style::new().green()),
        (names::INFO, muted),
    ])
});

/// Applies a named style. `use_color == false` returns the text untouched.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match THEME.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        _ => text.to_string(),
    }
}
