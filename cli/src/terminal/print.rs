use basics_common::config::Config;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "basics::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Applies the color settings from `cfg`. Call once before printing.
pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
}

pub fn banner(cfg: &Config) {
    if !cfg.show_headers() {
        return;
    }

    let text_content: String = format!("⟦ BASICS v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let side: usize = TOTAL_WIDTH.saturating_sub(text_width) / 2;
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(side).color(colors::SEPARATOR);

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, cfg: &Config) {
    if !cfg.show_headers() {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

/// `expr = result`, decorated unless running at `-qq`.
pub fn result_line(expr: &str, result: i32, cfg: &Config) {
    if !cfg.decorate_results() {
        print(&format!("{} = {}", expr, result));
        return;
    }

    let eq: ColoredString = "=".color(colors::SEPARATOR);
    let value: ColoredString = result.to_string().color(colors::ACCENT).bold();
    print_status(format!("{} {} {}", expr.color(colors::PRIMARY), eq, value));
}

pub fn greeting(msg: &str, cfg: &Config) {
    if cfg.decorate_results() {
        print_status(msg.color(colors::PRIMARY).to_string());
    } else {
        print(msg);
    }
}

pub fn demo_title(title: &str, cfg: &Config) {
    if cfg.decorate_results() {
        centerln(&title.color(colors::PRIMARY).bold().to_string());
    } else {
        print(title);
    }
}

pub fn demo_line(line: &str, cfg: &Config) {
    if cfg.decorate_results() {
        print_status(line);
    } else {
        print(line);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn end_of_program(cfg: &Config) {
    if !cfg.show_headers() {
        return;
    }
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
