//! Root menu

use super::MenuSession;
use crate::host::Host;
use crate::settings::SettingsError;
use menu_core::logging::{log, LogCategory, LogLevel};
use menu_core::{InfoPager, MenuError, MenuInput, MenuOutcome, MenuRenderer, Selection};
use std::path::Path;

const ITEMS: [&str; 8] = [
    "Play Game",
    "Game Infos",
    "Hard Reset",
    "Load New Game",
    "File Management",
    "Emulator Options",
    "Return to Loader",
    "System Reboot",
];

const ROM_INFO_HEADER: &str = "ROM Header Information";

/// BIOS value that allows booting without a cartridge
const BIOS_BOOTABLE: u8 = 3;

/// How the main menu was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuExit {
    /// Go back to the running game
    Resume,
    ReturnToLoader,
    Reboot,
}

/// Result of a full front-end run: the menu's own result and the final
/// settings save, which is attempted either way
#[derive(Debug)]
pub struct RunOutcome {
    pub menu: Result<MainMenuExit, MenuError>,
    pub saved: Result<(), SettingsError>,
}

impl<I: MenuInput, R: MenuRenderer, H: Host> MenuSession<I, R, H> {
    fn main_title(&self) -> String {
        if self.host.rom_loaded() && self.host.sram_modified() {
            "*** SRAM has been modified ***".to_string()
        } else {
            format!("{} FPS", self.host.frames_per_second())
        }
    }

    fn show_rom_info(&mut self) -> Result<(), MenuError> {
        let mut pager = InfoPager::new(ROM_INFO_HEADER, self.host.rom_info());
        self.driver.page(&mut pager)
    }

    /// Run the menu until the game resumes or the front-end is left
    pub fn main_menu(&mut self) -> Result<MainMenuExit, MenuError> {
        self.in_frame(Selection::default(), Self::main_screen)
            .map(|(value, _)| value)
    }

    /// Run the main menu, then write the configuration to `path` however
    /// the menu ended
    pub fn run_and_save(&mut self, path: &Path) -> RunOutcome {
        let menu = self.main_menu();
        let saved = self.config.save_to(path);
        RunOutcome { menu, saved }
    }

    fn main_screen(&mut self) -> Result<MainMenuExit, MenuError> {
        let exit = loop {
            let title = self.main_title();
            let item = match self.visit(&title, ITEMS.to_vec(), false)? {
                MenuOutcome::Cancelled => 0,
                MenuOutcome::Confirmed(item) => item,
                MenuOutcome::Adjusted(..) => continue,
            };

            match item {
                0 => {
                    if self.host.rom_loaded() {
                        break MainMenuExit::Resume;
                    }
                }
                1 => self.show_rom_info()?,
                2 => {
                    if self.host.rom_loaded() || self.config.bios_enabled == BIOS_BOOTABLE {
                        self.host.hard_reset(&self.config);
                        break MainMenuExit::Resume;
                    }
                }
                3 => {
                    self.load_menu()?;
                    *self.stack.current_mut()? = Selection::default();
                }
                4 => {
                    if self.file_menu()? {
                        break MainMenuExit::Resume;
                    }
                }
                5 => self.options_menu()?,
                6 => break MainMenuExit::ReturnToLoader,
                _ => break MainMenuExit::Reboot,
            }
        };

        if exit != MainMenuExit::Resume {
            self.host.shutdown();
        }
        log(LogCategory::Navigation, LogLevel::Info, || {
            format!("main menu left with {:?}", exit)
        });

        Ok(exit)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{repeat, session, session_with};
    use super::*;
    use crate::host::{HeadlessHost, HostCall};
    use crate::settings::Config;
    use menu_core::{MenuButtons, MenuDriver, RecordingRenderer, ScriptedInput};

    #[test]
    fn test_resume_needs_rom() {
        let samples = vec![
            MenuButtons::CONFIRM,
            MenuButtons::CANCEL,
            MenuButtons::UP,
            MenuButtons::CONFIRM,
        ];
        let mut s = session(samples, HeadlessHost::new());
        assert_eq!(s.main_menu().unwrap(), MainMenuExit::Reboot);
        assert!(s.host().called(&HostCall::Shutdown));
        assert_eq!(s.depth(), 0);
    }

    #[test]
    fn test_cancel_resumes_with_rom() {
        let mut s = session(
            vec![MenuButtons::CANCEL],
            HeadlessHost::new().with_rom_loaded(true),
        );
        assert_eq!(s.main_menu().unwrap(), MainMenuExit::Resume);
        assert!(!s.host().called(&HostCall::Shutdown));
    }

    #[test]
    fn test_title_shows_fps_or_sram_warning() {
        let mut host = HeadlessHost::new().with_rom_loaded(true);
        host.sram_modified = true;
        let mut s = session(vec![MenuButtons::CANCEL], host);
        s.main_menu().unwrap();
        assert!(s
            .driver()
            .renderer()
            .has_shown("*** SRAM has been modified ***"));

        let host = HeadlessHost::new().with_rom_loaded(true);
        let mut s = session(vec![MenuButtons::CANCEL], host);
        s.main_menu().unwrap();
        assert!(s.driver().renderer().has_shown("60 FPS"));
    }

    #[test]
    fn test_hard_reset_with_bios() {
        let mut config = Config::default();
        config.bios_enabled = BIOS_BOOTABLE;
        let samples = vec![MenuButtons::DOWN, MenuButtons::DOWN, MenuButtons::CONFIRM];
        let mut s = session_with(samples, HeadlessHost::new(), config);
        assert_eq!(s.main_menu().unwrap(), MainMenuExit::Resume);
        assert!(s.host().called(&HostCall::HardReset));
    }

    #[test]
    fn test_hard_reset_ignored_without_rom() {
        let samples = vec![
            MenuButtons::DOWN,
            MenuButtons::DOWN,
            MenuButtons::CONFIRM,
            MenuButtons::DOWN,
            MenuButtons::DOWN,
            MenuButtons::DOWN,
            MenuButtons::DOWN,
            MenuButtons::CONFIRM,
        ];
        let mut s = session(samples, HeadlessHost::new());
        assert_eq!(s.main_menu().unwrap(), MainMenuExit::ReturnToLoader);
        assert!(!s.host().called(&HostCall::HardReset));
    }

    #[test]
    fn test_selection_resets_after_load_menu() {
        let mut samples = repeat(MenuButtons::DOWN, 3);
        samples.push(MenuButtons::CONFIRM);
        samples.push(MenuButtons::CANCEL);
        samples.push(MenuButtons::UP);
        samples.push(MenuButtons::CONFIRM);
        let mut s = session(samples, HeadlessHost::new());
        // up from the reset selection wraps to the last item
        assert_eq!(s.main_menu().unwrap(), MainMenuExit::Reboot);
        assert_eq!(s.driver().renderer().highlighted(), Some("System Reboot"));
    }

    #[test]
    fn test_rom_info_pager() {
        let mut host = HeadlessHost::new().with_rom_loaded(true);
        host.rom_info = vec!["Console type: SEGA MEGA DRIVE".to_string()];
        let samples = vec![
            MenuButtons::DOWN,
            MenuButtons::CONFIRM,
            MenuButtons::CONFIRM,
            MenuButtons::UP,
            MenuButtons::CONFIRM,
        ];
        let mut s = session(samples, host);
        assert_eq!(s.main_menu().unwrap(), MainMenuExit::Resume);
        let r = s.driver().renderer();
        assert!(r.has_shown(ROM_INFO_HEADER));
        assert!(r.has_shown("Console type: SEGA MEGA DRIVE"));
    }

    #[test]
    fn test_file_transfer_resumes() {
        let mut host = HeadlessHost::new().with_rom_loaded(true);
        host.media_available = true;
        let mut samples = repeat(MenuButtons::DOWN, 4);
        samples.extend(repeat(MenuButtons::CONFIRM, 3));
        let mut s = session(samples, host);
        assert_eq!(s.main_menu().unwrap(), MainMenuExit::Resume);
        assert!(s
            .host()
            .calls()
            .iter()
            .any(|c| matches!(c, HostCall::Transfer(..))));
    }

    #[test]
    fn test_input_error_unwinds_stack() {
        // main > Emulator Options > Video Options, then the script runs out
        let samples = vec![
            MenuButtons::UP,
            MenuButtons::UP,
            MenuButtons::UP,
            MenuButtons::CONFIRM,
            MenuButtons::CONFIRM,
        ];
        let mut s = session(samples, HeadlessHost::new());
        assert!(matches!(s.main_menu(), Err(MenuError::InputClosed)));
        assert_eq!(s.depth(), 0);
        assert!(s.driver().renderer().has_shown("Aspect: ORIGINAL"));
    }

    /// Scripted input that fails like a broken stdin once the script ends
    struct BrokenInput(ScriptedInput);

    impl MenuInput for BrokenInput {
        fn read_buttons(&mut self) -> Result<MenuButtons, MenuError> {
            self.0
                .read_buttons()
                .map_err(|_| MenuError::Input("stream did not contain valid UTF-8".to_string()))
        }
    }

    #[test]
    fn test_settings_saved_after_input_failure() {
        let path = std::env::temp_dir().join("genmenu_run_and_save.json");
        let _ = std::fs::remove_file(&path);

        // Emulator Options > Sound Options, nudge PSG volume, then input breaks
        let input = BrokenInput(ScriptedInput::new([
            MenuButtons::UP,
            MenuButtons::UP,
            MenuButtons::UP,
            MenuButtons::CONFIRM,
            MenuButtons::DOWN,
            MenuButtons::CONFIRM,
            MenuButtons::ALT_CONFIRM,
        ]));
        let driver = MenuDriver::new(input, RecordingRenderer::new());
        let mut s = MenuSession::new(driver, HeadlessHost::new(), Config::default());

        let run = s.run_and_save(&path);
        assert!(matches!(run.menu, Err(MenuError::Input(_))));
        assert!(run.saved.is_ok());
        assert_eq!(s.depth(), 0);
        assert!(!s.host().called(&HostCall::SaveConfig));
        assert_eq!(Config::load_from(&path).psg_preamp, 1.51);

        let _ = std::fs::remove_file(&path);
    }
}
