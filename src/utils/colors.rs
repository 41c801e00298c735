/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Paid → green, pending → red.
pub fn color_for_paid(paid: bool) -> &'static str {
    if paid { GREEN } else { RED }
}

pub fn colorize_status(label: &str, paid: bool) -> String {
    format!("{}{}{}", color_for_paid(paid), label, RESET)
}

/// Grey out placeholder text such as "(empty)".
pub fn colorize_placeholder(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
