//! Text menu navigation engine.
//!
//! Screens are plain label lists rebuilt by the caller on every visit. The
//! [`MenuDriver`] renders them, polls input and returns a [`MenuOutcome`];
//! nesting is tracked with an explicit [`NavStack`].

pub mod input;
pub mod logging;
pub mod navigator;
pub mod pager;
pub mod render;
pub mod stack;

pub use input::{MenuButton, MenuButtons, MenuInput, ScriptedInput};
pub use navigator::{Direction, MenuDriver, MenuOutcome, MenuScreen, Navigator, Selection};
pub use pager::InfoPager;
pub use render::{MenuLayout, MenuRenderer, RecordingRenderer};
pub use stack::NavStack;

use thiserror::Error;

/// Failures of the collaborators a menu depends on.
///
/// Navigation results (confirm, cancel, adjust) are never errors.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Input error: {0}")]
    Input(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Input closed")]
    InputClosed,
    #[error("Menu screen has no items")]
    EmptyScreen,
    #[error("Navigation stack underflow")]
    StackUnderflow,
}

impl From<std::io::Error> for MenuError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => MenuError::InputClosed,
            _ => MenuError::Input(e.to_string()),
        }
    }
}
