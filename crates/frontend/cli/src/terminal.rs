//! Text terminal front-end
//!
//! [`TerminalRenderer`] turns the pixel rows used by the menu layout into
//! terminal lines and centres each one in a fixed width. Left-aligned text
//! keeps its margin, scaled from a 640 pixel wide screen. [`LineInput`]
//! reads one line per input sample and resolves key names through the
//! configured [`KeyBindings`].

use crate::settings::KeyBindings;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use menu_core::logging::{log, LogCategory, LogLevel};
use menu_core::{MenuButtons, MenuError, MenuInput, MenuRenderer};
use std::io::{self, BufRead, Write};

pub const DEFAULT_WIDTH: usize = 60;

const SCREEN_WIDTH: i32 = 640;

fn render_error(e: io::Error) -> MenuError {
    MenuError::Render(e.to_string())
}

#[derive(Debug, Clone)]
struct Line {
    x: Option<i32>,
    y: i32,
    text: String,
    highlighted: bool,
}

/// Menu renderer writing to a terminal or any other byte sink.
///
/// In ANSI mode each frame clears the screen and the selected item is drawn
/// in reverse video. Plain mode appends frames separated by a rule and marks
/// the selected item with `>` `<`.
pub struct TerminalRenderer<W: Write> {
    out: W,
    width: usize,
    line_height: i32,
    ansi: bool,
    pending: Vec<Line>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, ansi: bool) -> Self {
        Self {
            out,
            width: DEFAULT_WIDTH,
            line_height: 24,
            ansi,
            pending: Vec::new(),
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Pixel distance between two terminal rows
    pub fn with_line_height(mut self, line_height: i32) -> Self {
        self.line_height = line_height.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn centered(&self, text: &str) -> String {
        let len = text.chars().count();
        let pad = self.width.saturating_sub(len) / 2;
        format!("{}{}", " ".repeat(pad), text)
    }

    fn indented(&self, x: i32, text: &str) -> String {
        let column = x.clamp(0, SCREEN_WIDTH) as usize * self.width / SCREEN_WIDTH as usize;
        format!("{}{}", " ".repeat(column), text)
    }

    /// Frame lines in row order, with blank rows for vertical gaps
    fn rows(&self) -> Vec<Option<&Line>> {
        let mut lines: Vec<&Line> = self.pending.iter().collect();
        lines.sort_by_key(|l| l.y);

        let mut rows = Vec::new();
        let mut last_y: Option<i32> = None;
        for line in lines {
            if let Some(prev) = last_y {
                let gap = (line.y - prev) / self.line_height;
                for _ in 1..gap {
                    rows.push(None);
                }
            }
            rows.push(Some(line));
            last_y = Some(line.y);
        }
        rows
    }

    fn write_frame(&mut self) -> io::Result<()> {
        let rows = self.rows();
        let mut text = Vec::with_capacity(rows.len());
        for row in rows {
            text.push(match row {
                None => (String::new(), false),
                Some(line) if line.highlighted && !self.ansi => {
                    (self.centered(&format!("> {} <", line.text)), false)
                }
                Some(Line { x: Some(x), text: body, .. }) => (self.indented(*x, body), false),
                Some(line) => (self.centered(&line.text), line.highlighted),
            });
        }

        if self.ansi {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            writeln!(self.out, "{}", "-".repeat(self.width))?;
        }
        for (line, reverse) in text {
            if reverse {
                queue!(self.out, Print(line.reverse()), Print("\r\n"))?;
            } else if self.ansi {
                queue!(self.out, Print(line), Print("\r\n"))?;
            } else {
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> MenuRenderer for TerminalRenderer<W> {
    fn clear_screen(&mut self) {
        self.pending.clear();
    }

    fn write_centered(&mut self, y: i32, text: &str) {
        self.pending.push(Line {
            x: None,
            y,
            text: text.to_string(),
            highlighted: false,
        });
    }

    fn write_centered_highlighted(&mut self, y: i32, text: &str) {
        self.pending.push(Line {
            x: None,
            y,
            text: text.to_string(),
            highlighted: true,
        });
    }

    fn write_at(&mut self, x: i32, y: i32, text: &str) {
        self.pending.push(Line {
            x: Some(x),
            y,
            text: text.to_string(),
            highlighted: false,
        });
    }

    fn present_frame(&mut self) -> Result<(), MenuError> {
        self.write_frame().map_err(render_error)?;
        self.pending.clear();
        Ok(())
    }
}

/// Line-oriented key input: every line read is one sample.
///
/// Keys on a line are separated by `+` or spaces and pressed together; an
/// empty line counts as confirm.
pub struct LineInput<B: BufRead> {
    reader: B,
    keys: KeyBindings,
}

impl<B: BufRead> LineInput<B> {
    pub fn new(reader: B, keys: KeyBindings) -> Self {
        Self { reader, keys }
    }
}

impl<B: BufRead> MenuInput for LineInput<B> {
    fn read_buttons(&mut self) -> Result<MenuButtons, MenuError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(MenuError::InputClosed);
        }

        let (sample, unknown) = self.keys.parse_sample(line.trim());
        if !unknown.is_empty() {
            log(LogCategory::Input, LogLevel::Warn, || {
                format!("unknown keys ignored: {}", unknown.join(", "))
            });
        }
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::render::draw_menu;
    use menu_core::MenuLayout;
    use std::io::Cursor;

    fn plain_output(labels: &[&str], selected: usize) -> String {
        let mut r = TerminalRenderer::new(Vec::new(), false).with_width(20);
        let labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        draw_menu(&mut r, &MenuLayout::default(), "Title", &labels, selected).unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_frame_marks_selection() {
        let out = plain_output(&["One", "Two"], 1);
        assert!(out.contains("> Two <"));
        assert!(!out.contains("> One <"));
        assert!(out.starts_with(&"-".repeat(20)));
    }

    #[test]
    fn test_plain_frame_centres_text() {
        let out = plain_output(&["abcd"], 0);
        let title = out.lines().nth(1).unwrap();
        // (20 - 5) / 2
        assert_eq!(title, "       Title");
    }

    #[test]
    fn test_left_aligned_text_keeps_margin() {
        let mut r = TerminalRenderer::new(Vec::new(), false).with_width(64);
        r.write_centered(134, "Head");
        r.write_at(100, 158, "Body");
        r.present_frame().unwrap();
        let out = String::from_utf8(r.into_inner()).unwrap();
        // 100 / 640 of 64 columns
        assert_eq!(out.lines().nth(2), Some("          Body"));
    }

    #[test]
    fn test_ansi_frame_clears_screen() {
        let mut r = TerminalRenderer::new(Vec::new(), true);
        r.write_centered_highlighted(10, "Item");
        r.present_frame().unwrap();
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.starts_with("\u{1b}[2J"));
        assert!(out.contains("Item"));
    }

    #[test]
    fn test_line_input_reads_samples() {
        let reader = Cursor::new("down\n\nup+x\nbogus\n");
        let mut input = LineInput::new(reader, KeyBindings::default());
        assert_eq!(input.read_buttons().unwrap(), MenuButtons::DOWN);
        assert_eq!(input.read_buttons().unwrap(), MenuButtons::CONFIRM);
        assert_eq!(
            input.read_buttons().unwrap(),
            MenuButtons::UP | MenuButtons::CANCEL
        );
        assert_eq!(input.read_buttons().unwrap(), MenuButtons::NONE);
        assert!(matches!(input.read_buttons(), Err(MenuError::InputClosed)));
    }
}
