//! Menu input abstraction
//!
//! Menus only care about six logical buttons. Platform layers (keyboard,
//! joypad, scripted test input) translate whatever they read into a
//! [`MenuButtons`] sample and hand it to the navigator one sample at a time.

use crate::MenuError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Logical menu buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuButton {
    Up,
    Down,
    /// A button
    Confirm,
    /// B button
    Cancel,
    /// Right on the d-pad, only meaningful on fast-move screens
    AltConfirm,
    /// Left on the d-pad, only meaningful on fast-move screens
    AltCancel,
}

impl MenuButton {
    /// All buttons, in evaluation order
    pub const ALL: [MenuButton; 6] = [
        MenuButton::Up,
        MenuButton::Down,
        MenuButton::Confirm,
        MenuButton::Cancel,
        MenuButton::AltConfirm,
        MenuButton::AltCancel,
    ];

    fn bit(self) -> u16 {
        match self {
            MenuButton::Up => 0x0001,
            MenuButton::Down => 0x0002,
            MenuButton::Confirm => 0x0004,
            MenuButton::Cancel => 0x0008,
            MenuButton::AltConfirm => 0x0010,
            MenuButton::AltCancel => 0x0020,
        }
    }
}

/// One input sample: the set of buttons pressed since the previous read
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MenuButtons(u16);

impl MenuButtons {
    pub const NONE: MenuButtons = MenuButtons(0);
    pub const UP: MenuButtons = MenuButtons(0x0001);
    pub const DOWN: MenuButtons = MenuButtons(0x0002);
    pub const CONFIRM: MenuButtons = MenuButtons(0x0004);
    pub const CANCEL: MenuButtons = MenuButtons(0x0008);
    pub const ALT_CONFIRM: MenuButtons = MenuButtons(0x0010);
    pub const ALT_CANCEL: MenuButtons = MenuButtons(0x0020);

    const MASK: u16 = 0x003F;

    /// Build a sample from raw bits, dropping unknown bits
    pub fn from_bits(bits: u16) -> Self {
        MenuButtons(bits & Self::MASK)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every button in `other` is pressed in this sample
    pub fn contains(self, other: MenuButtons) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn is_pressed(self, button: MenuButton) -> bool {
        self.0 & button.bit() != 0
    }

    /// Iterate over the pressed buttons
    pub fn pressed(self) -> impl Iterator<Item = MenuButton> {
        MenuButton::ALL
            .into_iter()
            .filter(move |b| self.is_pressed(*b))
    }
}

impl From<MenuButton> for MenuButtons {
    fn from(button: MenuButton) -> Self {
        MenuButtons(button.bit())
    }
}

impl BitOr for MenuButtons {
    type Output = MenuButtons;

    fn bitor(self, rhs: MenuButtons) -> MenuButtons {
        MenuButtons(self.0 | rhs.0)
    }
}

impl BitOrAssign for MenuButtons {
    fn bitor_assign(&mut self, rhs: MenuButtons) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for MenuButtons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.pressed()).finish()
    }
}

/// Source of menu input samples.
///
/// `read_buttons` blocks until a new sample is available. It is the only
/// point where a menu loop suspends.
pub trait MenuInput {
    fn read_buttons(&mut self) -> Result<MenuButtons, MenuError>;
}

impl<T: MenuInput + ?Sized> MenuInput for &mut T {
    fn read_buttons(&mut self) -> Result<MenuButtons, MenuError> {
        (**self).read_buttons()
    }
}

impl<T: MenuInput + ?Sized> MenuInput for Box<T> {
    fn read_buttons(&mut self) -> Result<MenuButtons, MenuError> {
        (**self).read_buttons()
    }
}

/// Pre-recorded input, replayed one sample per read.
///
/// Returns [`MenuError::InputClosed`] once the script runs out so a
/// runaway menu loop terminates instead of spinning forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    samples: VecDeque<MenuButtons>,
    reads: usize,
}

impl ScriptedInput {
    pub fn new<I>(samples: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MenuButtons>,
    {
        Self {
            samples: samples.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    /// Append a sample to the end of the script
    pub fn push(&mut self, sample: impl Into<MenuButtons>) {
        self.samples.push_back(sample.into());
    }

    /// Samples not consumed yet
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }

    /// Number of samples consumed so far
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl MenuInput for ScriptedInput {
    fn read_buttons(&mut self) -> Result<MenuButtons, MenuError> {
        let sample = self.samples.pop_front().ok_or(MenuError::InputClosed)?;
        self.reads += 1;
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_combine() {
        let sample = MenuButtons::UP | MenuButtons::CONFIRM;
        assert!(sample.contains(MenuButtons::UP));
        assert!(sample.contains(MenuButtons::CONFIRM));
        assert!(!sample.contains(MenuButtons::DOWN));
        assert!(!sample.contains(MenuButtons::NONE));
        assert!(sample.is_pressed(MenuButton::Up));
    }

    #[test]
    fn test_from_bits_drops_unknown() {
        let sample = MenuButtons::from_bits(0xFF04);
        assert_eq!(sample, MenuButtons::CONFIRM);
    }

    #[test]
    fn test_pressed_order() {
        let sample = MenuButtons::ALT_CANCEL | MenuButtons::DOWN;
        let pressed: Vec<_> = sample.pressed().collect();
        assert_eq!(pressed, vec![MenuButton::Down, MenuButton::AltCancel]);
    }

    #[test]
    fn test_button_names_serialize() {
        let json = serde_json::to_string(&MenuButton::AltCancel).unwrap();
        assert_eq!(json, "\"AltCancel\"");
        let sample: MenuButtons = serde_json::from_str("36").unwrap();
        assert_eq!(sample, MenuButtons::CONFIRM | MenuButtons::ALT_CANCEL);
    }

    #[test]
    fn test_scripted_input_runs_out() {
        let mut input = ScriptedInput::new([MenuButton::Down, MenuButton::Confirm]);
        assert_eq!(input.read_buttons().unwrap(), MenuButtons::DOWN);
        assert_eq!(input.read_buttons().unwrap(), MenuButtons::CONFIRM);
        assert_eq!(input.reads(), 2);
        assert!(matches!(input.read_buttons(), Err(MenuError::InputClosed)));
    }
}
