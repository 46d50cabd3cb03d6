//! Scrolling read-only text pages (ROM header screen and the like)

use crate::input::{MenuButtons, MenuInput};
use crate::render::{MenuLayout, MenuRenderer};
use crate::MenuError;

/// Lines shown at once
pub const PAGE_LINES: usize = 8;

const FOOTER: &str = "Press A to Continue";

/// Scroll state over a list of lines
#[derive(Debug, Clone)]
pub struct InfoPager {
    header: String,
    lines: Vec<String>,
    offset: usize,
}

impl InfoPager {
    pub fn new(header: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            header: header.into(),
            lines,
            offset: 0,
        }
    }

    /// Index of the first visible line
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(PAGE_LINES)
    }

    /// Visible window
    pub fn visible(&self) -> &[String] {
        let end = (self.offset + PAGE_LINES).min(self.lines.len());
        &self.lines[self.offset..end]
    }

    /// Apply one input sample, returning `(close, redraw)`
    fn step(&mut self, buttons: MenuButtons) -> (bool, bool) {
        let mut redraw = false;
        if self.offset < self.max_offset() && buttons.contains(MenuButtons::DOWN) {
            self.offset += 1;
            redraw = true;
        }
        if self.offset > 0 && buttons.contains(MenuButtons::UP) {
            self.offset -= 1;
            redraw = true;
        }
        let close = buttons.contains(MenuButtons::CONFIRM) || buttons.contains(MenuButtons::CANCEL);
        (close, redraw)
    }

    fn draw<R: MenuRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        layout: &MenuLayout,
    ) -> Result<(), MenuError> {
        renderer.clear_screen();
        let mut y = layout.title_y;
        renderer.write_centered(y, &self.header);
        y += 2 * layout.line_height;

        for line in self.visible() {
            renderer.write_at(layout.text_x, y, line);
            y += layout.line_height;
        }

        y += layout.line_height;
        renderer.write_centered(y, FOOTER);
        renderer.present_frame()
    }

    /// Block until confirm or cancel, scrolling on up/down
    pub fn show<I, R>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
        layout: &MenuLayout,
    ) -> Result<(), MenuError>
    where
        I: MenuInput + ?Sized,
        R: MenuRenderer + ?Sized,
    {
        let mut redraw = true;
        loop {
            if redraw {
                self.draw(renderer, layout)?;
            }
            let (close, moved) = self.step(input.read_buttons()?);
            if close {
                return Ok(());
            }
            redraw = moved;
        }
    }
}
