//! Text rendering for menu screens
//!
//! The renderer itself is a platform collaborator; this module only decides
//! where the title and items go on a 640x480-style screen and which item is
//! highlighted.

use crate::MenuError;

/// Minimal text output a menu needs from the platform
pub trait MenuRenderer {
    /// Wipe the back buffer
    fn clear_screen(&mut self);

    /// Draw `text` horizontally centred at row `y`
    fn write_centered(&mut self, y: i32, text: &str);

    /// Same as [`MenuRenderer::write_centered`] with the highlight colour
    fn write_centered_highlighted(&mut self, y: i32, text: &str);

    /// Draw `text` left-aligned starting at column `x` of row `y`
    fn write_at(&mut self, x: i32, y: i32, text: &str);

    /// Show the finished frame
    fn present_frame(&mut self) -> Result<(), MenuError>;
}

impl<T: MenuRenderer + ?Sized> MenuRenderer for &mut T {
    fn clear_screen(&mut self) {
        (**self).clear_screen()
    }

    fn write_centered(&mut self, y: i32, text: &str) {
        (**self).write_centered(y, text)
    }

    fn write_centered_highlighted(&mut self, y: i32, text: &str) {
        (**self).write_centered_highlighted(y, text)
    }

    fn write_at(&mut self, x: i32, y: i32, text: &str) {
        (**self).write_at(x, y, text)
    }

    fn present_frame(&mut self) -> Result<(), MenuError> {
        (**self).present_frame()
    }
}

/// Vertical placement of a menu frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    /// Row of the title line
    pub title_y: i32,
    /// Top of the area the item list is centred in
    pub list_top: i32,
    /// Height of the area the item list is centred in
    pub list_height: i32,
    /// Font height
    pub line_height: i32,
    /// Left margin of free text such as info pages
    pub text_x: i32,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            title_y: 134,
            list_top: 130,
            list_height: 310,
            line_height: 24,
            text_x: 100,
        }
    }
}

impl MenuLayout {
    /// Row of the first item when `count` items are shown
    pub fn first_item_y(&self, count: usize) -> i32 {
        let used = self.line_height * count as i32;
        ((self.list_height - used) >> 1) + self.list_top
    }

    /// Row of item `index` when `count` items are shown
    pub fn item_y(&self, index: usize, count: usize) -> i32 {
        self.first_item_y(count) + index as i32 * self.line_height
    }
}

/// Draw one complete menu frame with `selected` highlighted
pub fn draw_menu<R: MenuRenderer + ?Sized>(
    renderer: &mut R,
    layout: &MenuLayout,
    title: &str,
    labels: &[String],
    selected: usize,
) -> Result<(), MenuError> {
    renderer.clear_screen();
    renderer.write_centered(layout.title_y, title);

    let count = labels.len();
    for (i, label) in labels.iter().enumerate() {
        let y = layout.item_y(i, count);
        if i == selected {
            renderer.write_centered_highlighted(y, label);
        } else {
            renderer.write_centered(y, label);
        }
    }

    renderer.present_frame()
}

/// A single line written to a [`RecordingRenderer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Left edge, or `None` for centred text
    pub x: Option<i32>,
    pub y: i32,
    pub text: String,
    pub highlighted: bool,
}

/// Renderer that keeps every presented frame in memory.
///
/// Used by tests and by headless runs that only want a transcript.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pending: Vec<RenderedLine>,
    frames: Vec<Vec<RenderedLine>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every presented frame, oldest first
    pub fn frames(&self) -> &[Vec<RenderedLine>] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&[RenderedLine]> {
        self.frames.last().map(|f| f.as_slice())
    }

    /// Text of the highlighted line in the last frame
    pub fn highlighted(&self) -> Option<&str> {
        self.last_frame()?
            .iter()
            .find(|l| l.highlighted)
            .map(|l| l.text.as_str())
    }

    /// True if any presented frame contains a line with exactly `text`
    pub fn has_shown(&self, text: &str) -> bool {
        self.frames.iter().flatten().any(|l| l.text == text)
    }
}

impl MenuRenderer for RecordingRenderer {
    fn clear_screen(&mut self) {
        self.pending.clear();
    }

    fn write_centered(&mut self, y: i32, text: &str) {
        self.pending.push(RenderedLine {
            x: None,
            y,
            text: text.to_string(),
            highlighted: false,
        });
    }

    fn write_centered_highlighted(&mut self, y: i32, text: &str) {
        self.pending.push(RenderedLine {
            x: None,
            y,
            text: text.to_string(),
            highlighted: true,
        });
    }

    fn write_at(&mut self, x: i32, y: i32, text: &str) {
        self.pending.push(RenderedLine {
            x: Some(x),
            y,
            text: text.to_string(),
            highlighted: false,
        });
    }

    fn present_frame(&mut self) -> Result<(), MenuError> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_centres_items() {
        let layout = MenuLayout::default();
        // 8 items of 24px: (310 - 192) / 2 + 130
        assert_eq!(layout.first_item_y(8), 189);
        assert_eq!(layout.item_y(1, 8), 213);
    }

    #[test]
    fn test_layout_overflow_moves_list_up() {
        let layout = MenuLayout::default();
        // Lists taller than the area start above it
        assert!(layout.first_item_y(20) < layout.list_top);
    }

    #[test]
    fn test_draw_menu_highlights_selection() {
        let mut renderer = RecordingRenderer::new();
        let labels = vec!["One".to_string(), "Two".to_string(), "Three".to_string()];
        draw_menu(&mut renderer, &MenuLayout::default(), "Title", &labels, 1).unwrap();

        let frame = renderer.last_frame().unwrap();
        assert_eq!(frame.len(), 4);
        assert_eq!(frame[0].text, "Title");
        assert_eq!(frame[0].y, 134);
        assert!(!frame[1].highlighted);
        assert!(frame[2].highlighted);
        assert_eq!(renderer.highlighted(), Some("Two"));
    }

    #[test]
    fn test_clear_discards_pending_lines() {
        let mut renderer = RecordingRenderer::new();
        renderer.write_centered(10, "stale");
        renderer.clear_screen();
        renderer.write_centered(20, "fresh");
        renderer.present_frame().unwrap();
        assert!(!renderer.has_shown("stale"));
        assert!(renderer.has_shown("fresh"));
    }
}
