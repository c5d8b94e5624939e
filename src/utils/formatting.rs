//! Formatting utilities used for console output.

use ansi_term::{Colour, Style};

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

pub fn dim(s: &str) -> String {
    Colour::Fixed(244).paint(s).to_string()
}

/// Render a control as enabled (green) or disabled (grey), e.g. `[Check In]`.
pub fn control(label: &str, enabled: bool) -> String {
    let text = format!("[{}]", label);
    if enabled {
        Colour::Green.bold().paint(text).to_string()
    } else {
        dim(&text)
    }
}

/// Colour used for the state badge in the prompt.
pub fn state_colour(idle: bool, paused: bool) -> Colour {
    if idle {
        Colour::Blue
    } else if paused {
        Colour::Yellow
    } else {
        Colour::Green
    }
}
