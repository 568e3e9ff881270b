//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, entropy estimate.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 54;

/// Box top with optional title: ┌─ Title ───────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                    │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Centered box content line: │       content       │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// Two columns, left text and right text pushed to the edge.
pub fn box_line_split(left: &str, right: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let gap = inner_width.saturating_sub(console_width(left) + console_width(right));
    format!("│ {}{}{} │", left, " ".repeat(gap), right)
}

/// Horizontal rule inside a box.
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// Box bottom: └───────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width, skipping ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_lines_have_fixed_width() {
        for line in [
            box_top("Password Generator"),
            box_top(""),
            box_line("Length: 12"),
            box_line_center("aB3dE9"),
            box_line_split("[l] Include Letters", "[x]"),
            box_rule(),
            box_bottom(),
        ] {
            assert_eq!(console_width(&line), BOX_WIDTH, "{line}");
        }
    }

    #[test]
    fn console_width_skips_escapes() {
        assert_eq!(console_width("\x1b[4mhi\x1b[0m"), 2);
    }

    #[test]
    fn entropy_bits() {
        assert_eq!(calculate_entropy(10, 0), 0.0);
        assert!((calculate_entropy(12, 62) - 71.45).abs() < 0.01);
        assert_eq!(entropy_strength(calculate_entropy(6, 10)), "Weak");
        assert_eq!(entropy_strength(calculate_entropy(12, 62)), "Strong");
        assert_eq!(entropy_strength(calculate_entropy(20, 87)), "Very Strong");
    }
}
