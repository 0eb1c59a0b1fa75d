//! Stateless presentation helpers.
//!
//! Every helper writes complete lines to the given sink and returns the I/O
//! result. Colors come from `colored`, which honours `NO_COLOR`/`CLICOLOR`.

use colored::Colorize;
use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{self, Clear, ClearType};
use std::fmt::Display;
use std::io::{self, Write};

/// Banner width used when the terminal size is unknown.
pub const DEFAULT_WIDTH: usize = 80;

/// Current terminal width in columns, or [`DEFAULT_WIDTH`].
#[must_use]
pub fn terminal_width() -> usize {
    terminal::size()
        .ok()
        .map(|(cols, _)| usize::from(cols))
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Pads ` title` with spaces to `width` characters. Longer titles are kept whole.
#[must_use]
pub fn banner_line(title: &str, width: usize) -> String {
    let inner = width.saturating_sub(1);
    format!(" {title:<inner$}")
}

/// Full-width highlighted title bar.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn banner(out: &mut (impl Write + ?Sized), title: &str) -> io::Result<()> {
    let line = banner_line(title, terminal_width());
    writeln!(out, "{}", line.white().on_blue().bold())
}

/// Full-width error bar.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn error_banner(out: &mut (impl Write + ?Sized), message: &str) -> io::Result<()> {
    let line = banner_line(&format!("Error: {message}"), terminal_width());
    writeln!(out, "{}", line.white().on_red().bold())
}

/// A titled list, or a single `No <noun>.` line when `items` is empty.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn titled_list<T: Display>(
    out: &mut (impl Write + ?Sized),
    title: &str,
    items: &[T],
    noun: &str,
) -> io::Result<()> {
    writeln!(out, "{}", title.cyan().bold())?;

    if items.is_empty() {
        return writeln!(out, "  {}", format!("No {noun}.").dimmed());
    }

    for item in items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}

/// A `label: value` line with the value emphasised.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn field(out: &mut (impl Write + ?Sized), label: &str, value: impl Display) -> io::Result<()> {
    writeln!(out, "  {label}: {}", value.to_string().yellow())
}

/// `yes` / `no`.
#[must_use]
pub const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Clears the screen and homes the cursor.
///
/// # Errors
/// Returns the sink's I/O error.
pub fn clear_screen(out: &mut (impl Write + ?Sized)) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        plain();
        let mut out = Vec::new();
        f(&mut out).expect("write to vec");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn banner_line_fills_the_width() {
        let line = banner_line("Users", 20);
        assert_eq!(line.chars().count(), 20);
        assert!(line.starts_with(" Users"));
    }

    #[test]
    fn banner_line_keeps_long_titles() {
        assert_eq!(banner_line("A very long title", 5), " A very long title");
        assert_eq!(banner_line("", 0), " ");
    }

    #[test]
    fn empty_list_prints_single_placeholder() {
        let text = render(|out| titled_list::<String>(out, "Domains", &[], "domains"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["Domains", "  No domains."]);
    }

    #[test]
    fn list_prints_one_line_per_item() {
        let text = render(|out| titled_list(out, "Groups", &["Staff", "Sales"], "groups"));
        assert_eq!(text, "Groups\n  - Staff\n  - Sales\n");
        assert!(!text.contains("No groups."));
    }

    #[test]
    fn field_prints_label_and_value() {
        let text = render(|out| field(out, "Local node ID", 7));
        assert_eq!(text, "  Local node ID: 7\n");
    }

    #[test]
    fn error_banner_mentions_the_message() {
        let text = render(|out| error_banner(out, "snapshot missing"));
        assert!(text.starts_with(" Error: snapshot missing"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn clear_screen_emits_escape_sequence() {
        let text = render(|out| clear_screen(out));
        assert!(text.contains("\u{1b}[2J"));
    }

    #[test]
    fn yes_no_maps_flags() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
