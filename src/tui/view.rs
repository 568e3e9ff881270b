//! Widget rendering.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::pass::{GenerationConfig, charset};
use crate::terminal::{
    box_bottom, box_line, box_line_center, box_line_split, box_rule, box_top, calculate_entropy,
    entropy_strength,
};

use super::{Style, WidgetState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: Style,
}

impl Line {
    fn new(text: String, style: Style) -> Self {
        Self { text, style }
    }
}

const EMPTY_FIELD: &str = "(select at least one character set)";

/// Lay out the widget for a state. `source` names the entropy source.
pub fn lines(state: &WidgetState, source: &str) -> Vec<Line> {
    use Style::*;

    let config = state.config();
    let mut out = Vec::with_capacity(20);

    out.push(Line::new(box_top("Password Generator"), Frame));
    out.push(Line::new(box_line(""), Frame));

    let field = if state.password().is_empty() {
        EMPTY_FIELD
    } else {
        state.password().as_str()
    };
    out.push(Line::new(box_line_center(field), Field));

    let copy = if state.copied() {
        "Copied!"
    } else {
        "[c] Copy to Clipboard"
    };
    out.push(Line::new(box_line_center(copy), CopyButton));
    if let Some(err) = state.copy_error() {
        out.push(Line::new(box_line_center(err), Error));
    }

    out.push(Line::new(box_rule(), Frame));
    out.push(Line::new(
        box_line_split(&format!("Length: {}", config.length), &slider(config.length)),
        Frame,
    ));
    out.push(Line::new(
        box_line_split("[l] Include Letters", checkbox(config.include_letters)),
        Frame,
    ));
    out.push(Line::new(
        box_line_split("[n] Include Numbers", checkbox(config.include_numbers)),
        Frame,
    ));
    out.push(Line::new(
        box_line_split("[s] Include Symbols", checkbox(config.include_symbols)),
        Frame,
    ));
    out.push(Line::new(box_rule(), Frame));

    let bits = calculate_entropy(state.password().len(), charset::size(config));
    out.push(Line::new(
        box_line(&format!("Entropy: {:.1} bits ({})", bits, entropy_strength(bits))),
        Frame,
    ));
    out.push(Line::new(box_line(&format!("Source: {source}")), Frame));
    out.push(Line::new(box_line(""), Frame));
    out.push(Line::new(
        box_line_center("[g] Generate Password"),
        GenerateButton,
    ));
    out.push(Line::new(
        box_line_center(&format!(
            "[t] Switch to {} Mode",
            state.theme().switch_label()
        )),
        ThemeButton,
    ));
    out.push(Line::new(box_bottom(), Frame));
    out.push(Line::new(
        "←/→ length • Enter generate • q quit".to_string(),
        Hint,
    ));

    out
}

/// Slider track from MIN_LENGTH to MAX_LENGTH.
pub fn slider(length: usize) -> String {
    let mut track = String::from("◀ ");
    for n in GenerationConfig::MIN_LENGTH..=GenerationConfig::MAX_LENGTH {
        track.push(if n <= length { '■' } else { '·' });
    }
    track.push_str(" ▶");
    track
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// Draw the widget in full. Called after every state change.
pub fn draw<W: Write>(out: &mut W, state: &WidgetState, source: &str) -> io::Result<()> {
    let theme = state.theme();

    queue!(
        out,
        SetBackgroundColor(theme.background()),
        Clear(ClearType::All),
        MoveTo(0, 0)
    )?;

    for (row, line) in lines(state, source).iter().enumerate() {
        let (fg, bg) = theme.colors(line.style);
        queue!(
            out,
            MoveTo(2, row as u16 + 1),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
            Print(&line.text),
        )?;
    }

    queue!(out, ResetColor)?;
    out.flush()
}
