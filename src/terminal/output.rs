//! Boxed console output.
//!
//! Every box is `BOX_WIDTH` columns wide. The `*_line` builders return the
//! rendered row; the `box_*` printers write it to stdout.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";

pub const BOX_WIDTH: usize = 74;
const INNER: usize = BOX_WIDTH - 4;
const FLAG_COLUMN: usize = 27;

/// Clear screen and scrollback, cursor home.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active SGR attributes.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// `1234567` → `1,234,567`.
pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Visible width, skipping SGR escape sequences.
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut escaped = false;
    for c in s.chars() {
        match (escaped, c) {
            (false, '\x1b') => escaped = true,
            (true, 'm') => escaped = false,
            (true, _) => {}
            (false, _) => width += 1,
        }
    }
    width
}

pub fn top_line(title: &str) -> String {
    if title.is_empty() {
        return format!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let head = format!("─ {title} ");
    let rest = (BOX_WIDTH - 2).saturating_sub(head.chars().count());
    format!("┌{head}{}┐", "─".repeat(rest))
}

pub fn content_line(content: &str) -> String {
    let pad = INNER.saturating_sub(visible_width(content));
    format!("│ {content}{} │", " ".repeat(pad))
}

pub fn centered_line(content: &str) -> String {
    let pad = INNER.saturating_sub(visible_width(content));
    let left = pad / 2;
    format!("│ {}{content}{} │", " ".repeat(left), " ".repeat(pad - left))
}

pub fn box_top(title: &str) {
    println!("{}", top_line(title));
}

pub fn box_line(content: &str) {
    println!("{}", content_line(content));
}

pub fn box_line_center(content: &str) {
    println!("{}", centered_line(content));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Help row: flag in a fixed column, description word-wrapped beside it.
pub fn box_opt(flag: &str, desc: &str) {
    for row in option_lines(flag, desc) {
        println!("{row}");
    }
}

fn option_lines(flag: &str, desc: &str) -> Vec<String> {
    let desc_width = INNER - FLAG_COLUMN;
    let mut wrapped: Vec<String> = Vec::new();
    for word in desc.split_whitespace() {
        match wrapped.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= desc_width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => wrapped.push(word.to_string()),
        }
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    let flag: String = flag.chars().take(FLAG_COLUMN).collect();
    wrapped
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 { flag.as_str() } else { "" };
            let lead_pad = FLAG_COLUMN - lead.chars().count();
            let pad = desc_width.saturating_sub(line.chars().count());
            format!("│ {lead}{}{line}{} │", " ".repeat(lead_pad), " ".repeat(pad))
        })
        .collect()
}

pub fn print_centered(text: &str) {
    let width = text.chars().count();
    let left = BOX_WIDTH.saturating_sub(width) / 2;
    let right = BOX_WIDTH.saturating_sub(left + width);
    print!("{}{text}{}\r\n", " ".repeat(left), " ".repeat(right));
    flush();
}

/// Three rows of a box whose interior fills left to right with `percent`,
/// `stats` centered inside. Raw-mode safe (`\r\n` line ends).
pub fn progress_lines(percent: f32, stats: &str) -> [String; 3] {
    let inner = BOX_WIDTH - 2;
    let filled = if percent >= 100.0 {
        inner
    } else {
        ((percent.max(0.0) / 100.0) * inner as f32) as usize
    };
    let empty = inner - filled;

    let text: Vec<char> = stats.chars().take(inner).collect();
    let offset = (inner - text.len()) / 2;
    let mut body = vec![' '; inner];
    body[offset..offset + text.len()].copy_from_slice(&text);
    let done: String = body[..filled].iter().collect();
    let todo: String = body[filled..].iter().collect();

    let (tl, tr, ml, mr, bl, br) = match (filled, empty) {
        (0, _) => ("┌", "┐", "│", "│", "└", "┘"),
        (_, 0) => ("▗", "▖", "▐", "▌", "▝", "▘"),
        _ => ("▗", "┐", "▐", "│", "▝", "┘"),
    };
    let middle = if filled > 0 {
        format!("{ml}\x1b[7m{done}{RESET}{todo}{mr}")
    } else {
        format!("{ml}{todo}{mr}")
    };

    [
        format!("{tl}{}{}{tr}", "▄".repeat(filled), "─".repeat(empty)),
        middle,
        format!("{bl}{}{}{br}", "▀".repeat(filled), "─".repeat(empty)),
    ]
}

pub fn progress_bar_box(percent: f32, stats: &str) {
    for row in progress_lines(percent, stats) {
        print!("\r{row}\r\n");
    }
    flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(1_234_567, "1,234,567")]
    fn numbers_are_grouped(#[case] n: usize, #[case] expected: &str) {
        assert_eq!(format_number(n), expected);
    }

    #[test]
    fn rows_are_box_width() {
        assert_eq!(top_line("").chars().count(), BOX_WIDTH);
        assert_eq!(top_line("Profile").chars().count(), BOX_WIDTH);
        assert_eq!(content_line("name: carlos").chars().count(), BOX_WIDTH);
        assert_eq!(centered_line("a | b").chars().count(), BOX_WIDTH);
    }

    #[test]
    fn escapes_do_not_count_towards_width() {
        let plain = content_line("General:");
        let styled = content_line(&format!("{UNDERLINE}General{RESET}:"));
        assert_eq!(visible_width(&plain), visible_width(&styled));
    }

    #[test]
    fn long_descriptions_wrap_under_the_description_column() {
        let rows = option_lines("  --relative <SPEC>", &"word ".repeat(20));
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|r| r.chars().count() == BOX_WIDTH));
        assert!(rows[1].starts_with(&format!("│ {}", " ".repeat(FLAG_COLUMN))));
    }

    #[rstest]
    #[case(0.0)]
    #[case(42.0)]
    #[case(100.0)]
    fn progress_rows_keep_their_width(#[case] pct: f32) {
        for row in progress_lines(pct, "12 of 100 • 12.0%") {
            assert_eq!(visible_width(&row), BOX_WIDTH);
        }
    }
}
