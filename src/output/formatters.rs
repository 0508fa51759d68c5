//! Formatting utilities for terminal output

use crate::core::Word;

/// Render `word` with the character at `position` wrapped in brackets
///
/// Used to show which letter changed at each step of a ladder.
#[must_use]
pub fn mark_position(word: &Word, position: usize) -> String {
    let mut result = String::with_capacity(word.text().len() + 2);
    for (i, ch) in word.text().chars().enumerate() {
        if i == position {
            result.push('[');
            result.push(ch);
            result.push(']');
        } else {
            result.push(ch);
        }
    }
    result
}

/// Describe a single ladder step, e.g. `cat -> c[o]t`
#[must_use]
pub fn describe_step(from: &Word, to: &Word) -> String {
    match from.first_difference(to) {
        Some(position) => format!("{from} -> {}", mark_position(to, position)),
        None => format!("{from} -> {to}"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
