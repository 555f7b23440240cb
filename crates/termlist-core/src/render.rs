use crate::error::Result;
use crate::field::FieldAccessor;
use crate::options::DisplayOptions;
use crate::selection::SelectionSet;
use crate::state::ListState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::io::Write;

/// Cursor home followed by clear screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
/// Cursor up one line followed by clear line.
pub const ERASE_LINE_UP: &str = "\x1b[A\x1b[2K";

/// One full screen of list output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
    cursor_line: Option<usize>,
    cursor_style: Style,
}

impl Frame {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index into [`Frame::lines`] of the row under the cursor.
    pub fn cursor_line(&self) -> Option<usize> {
        self.cursor_line
    }

    /// The frame as plain text, one newline-terminated line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Clears the screen and writes the frame.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
        out.write_all(self.to_text().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

impl Widget for &Frame {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for (dy, line) in self.lines.iter().take(area.height as usize).enumerate() {
            let y = area.y + dy as u16;
            let style = if self.cursor_line == Some(dy) {
                self.cursor_style
            } else {
                Style::default()
            };
            if style != Style::default() {
                buf.set_style(Rect::new(area.x, y, area.width, 1), style);
            }
            buf.set_stringn(area.x, y, line, area.width as usize, style);
        }
    }
}

/// Lays out `state` as a frame.
///
/// Passing a selection renders the selectable variant: a selection column follows the cursor
/// gutter, and the header gains a label for it.
pub fn render_frame<T, A>(
    state: &ListState<T>,
    options: &DisplayOptions,
    accessor: &A,
    selection: Option<&SelectionSet>,
) -> Frame
where
    A: FieldAccessor<T> + ?Sized,
{
    let width = options.field_width;
    let blank_gutter = " ".repeat(options.gutter_width());
    let mut lines = Vec::with_capacity(state.len() + 1);

    if options.show_header {
        let mut line = blank_gutter.clone();
        if selection.is_some() {
            push_padded(&mut line, &options.selection_label, width);
        }
        for name in &options.fields {
            push_padded(&mut line, name, width);
        }
        lines.push(line);
    }

    let mut cursor_line = None;
    if state.is_empty() {
        lines.push(format!("{blank_gutter}{}", options.empty_message));
    }
    for (i, item) in state.items().iter().enumerate() {
        let mut line = if i == state.cursor() {
            cursor_line = Some(lines.len());
            options.cursor_marker.clone()
        } else {
            blank_gutter.clone()
        };
        if let Some(selection) = selection {
            let marker = options.selection_markers.for_state(selection.contains(i));
            push_padded(&mut line, marker, width);
        }
        for name in &options.fields {
            push_padded(&mut line, &accessor.get(item, name), width);
        }
        lines.push(line);
    }

    log::trace!("rendered frame: {} lines", lines.len());
    Frame {
        lines,
        cursor_line,
        cursor_style: options.cursor_style,
    }
}

/// Writes a bare clear screen.
pub fn clear_screen<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Erases the last `lines` lines above the cursor, for hosts that print prompts between frames.
pub fn erase_lines<W: Write + ?Sized>(out: &mut W, lines: usize) -> Result<()> {
    for _ in 0..lines {
        out.write_all(ERASE_LINE_UP.as_bytes())?;
    }
    out.write_all(b"\r")?;
    out.flush()?;
    Ok(())
}

fn push_padded(line: &mut String, value: &str, width: usize) {
    use std::fmt::Write as _;
    let _ = write!(line, "{value:<width$}");
}
