//! Emulator options hub

use super::{MenuSession, RETURN_TITLE};
use crate::host::Host;
use menu_core::logging::{log, LogCategory, LogLevel};
use menu_core::{MenuError, MenuInput, MenuOutcome, MenuRenderer, Selection};

const ITEMS: [&str; 5] = [
    "Video Options",
    "Sound Options",
    "System Options",
    "Controls Options",
    "Game Genie Codes",
];

impl<I: MenuInput, R: MenuRenderer, H: Host> MenuSession<I, R, H> {
    /// Options hub; the configuration is saved when it is left
    pub fn options_menu(&mut self) -> Result<(), MenuError> {
        self.in_frame(Selection::default(), Self::options_screen)
            .map(|(value, _)| value)
    }

    fn options_screen(&mut self) -> Result<(), MenuError> {
        loop {
            match self.visit(RETURN_TITLE, ITEMS.to_vec(), false)? {
                MenuOutcome::Cancelled => break,
                MenuOutcome::Confirmed(0) => self.video_menu()?,
                MenuOutcome::Confirmed(1) => self.sound_menu()?,
                MenuOutcome::Confirmed(2) => self.system_menu()?,
                MenuOutcome::Confirmed(3) => self.controls_menu()?,
                MenuOutcome::Confirmed(_) => self.host.edit_cheats(),
                MenuOutcome::Adjusted(..) => {}
            }
        }

        if let Err(e) = self.host.save_config(&self.config) {
            log(LogCategory::Config, LogLevel::Warn, || {
                format!("failed to save settings: {}", e)
            });
            self.host.prompt("Unable to save settings");
        }

        Ok(())
    }
}
