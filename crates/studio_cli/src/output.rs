//! Terminal output: styled text for humans, one JSON object per line for
//! machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for channel listings
//! - `indicatif` for spinners while waiting on the host or the service

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    JSON_MODE.store(matches!(format, OutputFormat::Json), Ordering::Relaxed);
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn render_json(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg {
        level,
        message,
        data,
    };
    serde_json::to_string(&msg).unwrap_or_else(|_| {
        serde_json::json!({ "level": level, "message": message }).to_string()
    })
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    println!("{}", render_json(level, message, data));
}

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", render_json("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        emit_json("info", key, Some(&data));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

const NO_OUTPUT: &str = "(no output)";

#[derive(Debug, PartialEq, Eq)]
enum StdoutBlock<'a> {
    Output(&'a str),
    /// Ran and printed nothing; still shown so it differs from "not run yet"
    Empty,
}

fn stdout_block(stdout: Option<&str>) -> Option<StdoutBlock<'_>> {
    let out = stdout?.trim_end();
    Some(if out.is_empty() {
        StdoutBlock::Empty
    } else {
        StdoutBlock::Output(out)
    })
}

/// Result of a command run: stdout and stderr blocks, or one JSON record.
pub fn command_result(command: &str, stdout: Option<&str>, stderr: Option<&str>) {
    if is_json() {
        let data = serde_json::json!({
            "command": command,
            "success": stderr.is_none(),
            "stdout": stdout,
            "stderr": stderr,
        });
        emit_json("data", command, Some(&data));
        return;
    }
    match stdout_block(stdout) {
        Some(StdoutBlock::Output(out)) => println!("{out}"),
        Some(StdoutBlock::Empty) => println!("{}", style(NO_OUTPUT).dim()),
        None => {}
    }
    if let Some(err) = stderr {
        eprintln!("{}", style(err).red());
    }
}

pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn table_header(table: &mut Table, col1: &str, col2: &str) {
    table.set_header(vec![
        Cell::new(col1).fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(col2).fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
}

pub fn table_row(table: &mut Table, name: &str, desc: &str) {
    table.add_row(vec![Cell::new(name).fg(Color::Green), Cell::new(desc)]);
}

/// Prints the table, or an items array in JSON mode.
pub fn table_print(table: &Table, items: &[(&str, &str)]) {
    if is_json() {
        let items: Vec<_> = items
            .iter()
            .map(|(name, desc)| serde_json::json!({ "name": name, "description": desc }))
            .collect();
        let data = serde_json::json!({ "items": items });
        emit_json("list", "", Some(&data));
    } else {
        println!("{table}");
    }
}

/// Hidden in JSON mode so stdout stays one record per line.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    if is_json() {
        emit_json("success", message, None);
    } else {
        println!("{} {}", style("✓").green(), message);
    }
}

pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    if is_json() {
        emit_json("error", message, None);
    } else {
        eprintln!("{} {}", style("✗").red(), message);
    }
}
