//! Table rendering for terminal output.
//!
//! On a terminal, columns are aligned, colored and fitted to the screen
//! width; otherwise rows are written tab-separated for scripts. Widths use
//! Unicode display width so CJK titles line up.

use std::io::{self, Write};

use crossterm::style::{Color, ResetColor, SetForegroundColor};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width assumed when the terminal size cannot be queried.
const DEFAULT_WIDTH: usize = 80;

const COLUMN_SEPARATOR: &str = "  ";

/// Current terminal width in columns.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| usize::from(cols))
        .ok()
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

struct Field {
    text: String,
    color: Option<Color>,
}

/// Row-oriented table printer.
pub struct TablePrinter<W: Write> {
    out: W,
    is_tty: bool,
    max_width: usize,
    rows: Vec<Vec<Field>>,
    current: Vec<Field>,
}

impl<W: Write> TablePrinter<W> {
    pub fn new(out: W, is_tty: bool, max_width: usize) -> Self {
        Self {
            out,
            is_tty,
            max_width,
            rows: Vec::new(),
            current: Vec::new(),
        }
    }

    pub fn add_field(&mut self, text: impl Into<String>) {
        self.push(text.into(), None);
    }

    /// Add a field that is colored when writing to a terminal.
    pub fn add_colored_field(&mut self, text: impl Into<String>, color: Color) {
        self.push(text.into(), Some(color));
    }

    pub fn end_row(&mut self) {
        if !self.current.is_empty() {
            self.rows.push(std::mem::take(&mut self.current));
        }
    }

    /// Write all rows. A row left open is ended first.
    pub fn render(mut self) -> io::Result<()> {
        self.end_row();
        if self.is_tty {
            self.render_tty()?;
        } else {
            self.render_plain()?;
        }
        self.out.flush()
    }

    fn push(&mut self, text: String, color: Option<Color>) {
        self.current.push(Field { text, color });
    }

    fn render_plain(&mut self) -> io::Result<()> {
        for row in &self.rows {
            let line: Vec<&str> = row.iter().map(|f| f.text.as_str()).collect();
            writeln!(self.out, "{}", line.join("\t"))?;
        }
        Ok(())
    }

    fn render_tty(&mut self) -> io::Result<()> {
        let widths = fit_widths(&self.column_widths(), self.max_width);

        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, field) in row.iter().enumerate() {
                if i > 0 {
                    write!(self.out, "{COLUMN_SEPARATOR}")?;
                }
                let width = widths.get(i).copied().unwrap_or(0);
                let text = if i == last {
                    // No trailing padding on the last column.
                    truncate_with_ellipsis(&field.text, width)
                } else {
                    pad_or_truncate(&field.text, width)
                };
                match field.color {
                    Some(color) => write!(
                        self.out,
                        "{}{}{}",
                        SetForegroundColor(color),
                        text,
                        ResetColor
                    )?,
                    None => write!(self.out, "{text}")?,
                }
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            for (i, field) in row.iter().enumerate() {
                let w = field.text.width();
                match widths.get_mut(i) {
                    Some(existing) => *existing = (*existing).max(w),
                    None => widths.push(w),
                }
            }
        }
        widths
    }
}

/// Shrink the last column so the whole row fits in `max_width`.
///
/// Leading columns keep their natural width; the last column gets whatever is
/// left (possibly zero).
fn fit_widths(natural: &[usize], max_width: usize) -> Vec<usize> {
    let Some((&last, leading)) = natural.split_last() else {
        return Vec::new();
    };
    let used: usize =
        leading.iter().sum::<usize>() + COLUMN_SEPARATOR.len() * leading.len();

    let mut widths = leading.to_vec();
    widths.push(last.min(max_width.saturating_sub(used)));
    widths
}

/// Truncates a string to fit within the specified display width.
/// Uses Unicode width for proper handling of wide characters (e.g., CJK).
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Truncates to `width`, marking the cut with "..." when there is room for it.
fn truncate_with_ellipsis(s: &str, width: usize) -> String {
    if s.width() <= width {
        s.to_string()
    } else if width < 3 {
        truncate_to_width(s, width)
    } else {
        format!("{}...", truncate_to_width(s, width - 3))
    }
}

/// Pads or truncates a string to exactly the specified display width.
fn pad_or_truncate(s: &str, width: usize) -> String {
    let text = truncate_with_ellipsis(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}
