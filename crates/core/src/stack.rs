//! Explicit navigation stack
//!
//! Each nested screen pushes a frame holding its own [`Selection`] on entry
//! and pops it on exit, so the parent's highlighted item is untouched by
//! whatever the child does.

use crate::logging::{log, LogCategory, LogLevel};
use crate::navigator::Selection;
use crate::MenuError;

#[derive(Debug, Default)]
pub struct NavStack {
    frames: Vec<Selection>,
}

impl NavStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a screen starting at `initial`; returns the new depth
    pub fn push(&mut self, initial: Selection) -> usize {
        self.frames.push(initial);
        let depth = self.frames.len();
        log(LogCategory::Navigation, LogLevel::Trace, || {
            format!("enter depth {} at item {}", depth, initial.index())
        });
        depth
    }

    /// Leave the current screen, returning its final selection
    pub fn pop(&mut self) -> Result<Selection, MenuError> {
        let frame = self.frames.pop().ok_or(MenuError::StackUnderflow)?;
        log(LogCategory::Navigation, LogLevel::Trace, || {
            format!("leave depth {} at item {}", self.frames.len() + 1, frame.index())
        });
        Ok(frame)
    }

    /// Selection of the innermost screen
    pub fn current(&self) -> Option<Selection> {
        self.frames.last().copied()
    }

    pub fn current_mut(&mut self) -> Result<&mut Selection, MenuError> {
        self.frames.last_mut().ok_or(MenuError::StackUnderflow)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
