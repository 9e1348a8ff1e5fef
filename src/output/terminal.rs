//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::gate::Verification;
use crate::types::{LeakEstimate, Mode};

/// Format a verification result for human-readable terminal output.
///
/// Shows the access decision, the measured duration, and the remaining
/// attempt budget.
pub fn format_verification(verification: &Verification, mode: Mode) -> String {
    let mut output = String::new();

    let header = if verification.outcome.matched {
        format!("{} {}", "\u{2713}".green().bold(), "ACCESS GRANTED".green().bold())
    } else {
        format!("{} {}", "\u{2717}".red().bold(), "ACCESS DENIED".red().bold())
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let mode_str = format!("Mode: {}", format_mode(mode));
    output.push_str(&format_box_line(&mode_str));

    let elapsed_str = format!("Elapsed: {} ms", verification.sample.elapsed.as_millis());
    output.push_str(&format_box_line(&elapsed_str));

    let attempts_str = format!("Attempts remaining: {}", verification.attempts_remaining);
    let attempts_colored = if verification.attempts_remaining == 0 {
        attempts_str.red().to_string()
    } else {
        attempts_str
    };
    output.push_str(&format_box_line(&attempts_colored));

    output.push_str(&format_box_bottom());
    output
}

/// Format a leak estimate for human-readable terminal output.
///
/// This is the diagnostic view of what the elapsed time gave away. Under the
/// leaky comparator the estimate narrates the vulnerability; under the
/// constant-time comparator the duration carries no per-position information
/// and the report says so.
pub fn format_leak_report(estimate: &LeakEstimate, mode: Mode) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&"TIMING ANALYSIS".bold().to_string()));
    output.push_str(&format_box_separator());

    match mode {
        Mode::Leaky => {
            let count_str = format!(
                "Correct characters estimated: {}",
                estimate.correct_prefix_len
            );
            let count_colored = if estimate.correct_prefix_len > 0 {
                count_str.red().to_string()
            } else {
                count_str.green().to_string()
            };
            output.push_str(&format_box_line(&count_colored));

            if !estimate.recovered_prefix.is_empty() {
                let prefix_str = format!(
                    "Recovered prefix: {}",
                    estimate.recovered_prefix.red().bold()
                );
                output.push_str(&format_box_line(&prefix_str));
            }

            output.push_str(&format_box_separator());
            output.push_str(&format_box_line("Comparison stops at the first wrong"));
            output.push_str(&format_box_line("character, so elapsed time reveals"));
            output.push_str(&format_box_line("verification progress digit by digit."));
        }
        Mode::ConstantTime => {
            output.push_str(&format_box_line(
                &"Constant-time mode: no prefix leaked".green().to_string(),
            ));
            output.push_str(&format_box_separator());
            output.push_str(&format_box_line("Every position is inspected on every"));
            output.push_str(&format_box_line("attempt; elapsed time depends only on"));
            output.push_str(&format_box_line("input length, not on match progress."));
        }
    }

    output.push_str(&format_box_bottom());
    output
}

/// Format a Mode for display.
fn format_mode(mode: Mode) -> String {
    match mode {
        Mode::Leaky => "Leaky (early exit)".red().to_string(),
        Mode::ConstantTime => "Constant-time".green().to_string(),
    }
}

// Box drawing helpers

const BOX_WIDTH: usize = 48;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
