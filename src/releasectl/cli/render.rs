//! # Rendering Module
//!
//! Turns command results into terminal text. Templates (see `templates.rs`)
//! are rendered with minijinja and a `style` filter backed by `console`.
//!
//! ## Layout
//!
//! Column layout stays in Rust because it needs Unicode-aware widths. Tables
//! are aligned the way a tab writer aligns them: every column but the last is
//! padded to its widest cell plus [`COLUMN_GAP`] spaces. Optional fields
//! render as empty cells, never as placeholders.
//!
//! Every public renderer has an `*_internal` twin taking `use_color`, so tests
//! can force plain output. `None` means "detect from stdout".

use super::styles::{self, names};
use super::templates::{
    CHANNEL_ATTRS_TEMPLATE, MESSAGES_TEMPLATE, TABLE_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use chrono::{DateTime, Utc};
use console::Term;
use minijinja::{Environment, Value};
use releasectl::api::{CmdMessage, MessageLevel};
use releasectl::model::{Channel, ChannelRelease, Registry, RegistryLog};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const COLUMN_GAP: usize = 4;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Serialize)]
struct TableData {
    header: String,
    rows: Vec<String>,
}

#[derive(Serialize)]
struct InstallCommandEntry {
    label: &'static str,
    command: String,
}

#[derive(Serialize)]
struct ChannelAttrsData {
    rows: Vec<String>,
    install_commands: Vec<InstallCommandEntry>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    let use_color = use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());

    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    env.add_template("output", template)?;
    env.get_template("output")?.render(data)
}

/// Aligns rows into lines. The first row is usually the header and takes
/// part in the width computation like any other.
pub fn align_columns(rows: &[Vec<String>]) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if i + 1 < row.len() {
                    let pad = widths[i] - cell.width() + COLUMN_GAP;
                    line.push_str(&" ".repeat(pad));
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}

fn render_table(header: &[&str], rows: Vec<Vec<String>>, use_color: Option<bool>) -> String {
    let mut all_rows = Vec::with_capacity(rows.len() + 1);
    all_rows.push(header.iter().map(|h| h.to_string()).collect());
    all_rows.extend(rows);

    let mut lines = align_columns(&all_rows).into_iter();
    let data = TableData {
        header: lines.next().unwrap_or_default(),
        rows: lines.collect(),
    };

    render_template(TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_channels(channels: &[Channel]) -> String {
    render_channels_internal(channels, None)
}

fn render_channels_internal(channels: &[Channel], use_color: Option<bool>) -> String {
    let rows = channels
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.name.clone(),
                c.release_sequence.to_string(),
                c.release_label.clone(),
            ]
        })
        .collect();
    render_table(&["ID", "NAME", "RELEASE", "VERSION"], rows, use_color)
}

pub fn render_channel_attrs(channel: &Channel) -> String {
    render_channel_attrs_internal(channel, None)
}

fn render_channel_attrs_internal(channel: &Channel, use_color: Option<bool>) -> String {
    let rows = vec![
        vec!["ID:".to_string(), channel.id.clone()],
        vec!["NAME:".to_string(), channel.name.clone()],
        vec!["DESCRIPTION:".to_string(), channel.description.clone()],
        vec!["RELEASE:".to_string(), channel.release_sequence.to_string()],
        vec!["VERSION:".to_string(), channel.release_label.clone()],
    ];

    let install_commands = match &channel.install_commands {
        Some(cmds) => [
            ("EXISTING:", &cmds.existing),
            ("EMBEDDED:", &cmds.embedded),
            ("AIRGAP:", &cmds.airgap),
        ]
        .into_iter()
        .filter(|(_, command)| !command.trim().is_empty())
        .map(|(label, command)| InstallCommandEntry {
            label,
            command: command.trim().replace('\n', "\n    "),
        })
        .collect(),
        None => Vec::new(),
    };

    let data = ChannelAttrsData {
        rows: align_columns(&rows),
        install_commands,
    };

    render_template(CHANNEL_ATTRS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_releases(releases: &[ChannelRelease]) -> String {
    render_releases_internal(releases, None)
}

fn render_releases_internal(releases: &[ChannelRelease], use_color: Option<bool>) -> String {
    let rows = releases
        .iter()
        .map(|r| {
            vec![
                r.channel_sequence.to_string(),
                r.release_sequence.to_string(),
                r.released_at.map(format_time_ago).unwrap_or_default(),
                r.semver.clone(),
                r.airgap_build_status.clone().unwrap_or_default(),
            ]
        })
        .collect();
    render_table(
        &[
            "CHANNEL_SEQUENCE",
            "RELEASE_SEQUENCE",
            "RELEASED",
            "VERSION",
            "AIRGAP",
        ],
        rows,
        use_color,
    )
}

pub fn render_registries(registries: &[Registry]) -> String {
    render_registries_internal(registries, None)
}

fn render_registries_internal(registries: &[Registry], use_color: Option<bool>) -> String {
    let rows = registries
        .iter()
        .map(|r| vec![r.provider.clone(), r.endpoint.clone(), r.auth_type.clone()])
        .collect();
    render_table(&["PROVIDER", "ENDPOINT", "AUTHTYPE"], rows, use_color)
}

pub fn render_registry_logs(logs: &[RegistryLog]) -> String {
    render_registry_logs_internal(logs, None)
}

fn render_registry_logs_internal(logs: &[RegistryLog], use_color: Option<bool>) -> String {
    let rows = logs
        .iter()
        .map(|l| {
            vec![
                l.created_at
                    .map(|t| t.format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
                l.image.clone().unwrap_or_default(),
                l.action.clone(),
                l.status.clone().unwrap_or_default(),
                l.success.to_string(),
            ]
        })
        .collect();
    render_table(
        &["DATE", "IMAGE", "ACTION", "STATUS", "SUCCESS"],
        rows,
        use_color,
    )
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_internal(lines, empty_message, None)
}

fn render_text_list_internal(
    lines: &[String],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Renders command messages with level-specific styles.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| {
                let style = match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                };
                MessageData {
                    content: msg.content.clone(),
                    style: style.to_string(),
                }
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
