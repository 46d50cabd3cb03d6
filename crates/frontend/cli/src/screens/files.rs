//! File management: SRAM and save state transfers

use super::{MenuSession, RETURN_TITLE};
use crate::host::{Host, SaveKind, Transfer};
use menu_core::{MenuError, MenuInput, MenuOutcome, MenuRenderer, Selection};

/// The load/save screen opens on its last item
const LOAD_SAVE_START: usize = 2;

const MANAGERS: [&str; 2] = ["SRAM Manager", "STATE Manager"];

impl<I: MenuInput, R: MenuRenderer, H: Host> MenuSession<I, R, H> {
    /// SRAM / STATE manager picker.
    ///
    /// Returns true when a transfer succeeded and the game should resume.
    pub fn file_menu(&mut self) -> Result<bool, MenuError> {
        self.in_frame(Selection::default(), Self::file_screen)
            .map(|(value, _)| value)
    }

    fn file_screen(&mut self) -> Result<bool, MenuError> {
        let resume = loop {
            let kind = match self.visit(RETURN_TITLE, MANAGERS.to_vec(), false)? {
                MenuOutcome::Cancelled => break false,
                MenuOutcome::Confirmed(0) => SaveKind::Sram,
                MenuOutcome::Confirmed(_) => SaveKind::State,
                MenuOutcome::Adjusted(..) => continue,
            };
            if self.load_save_menu(kind)? {
                break true;
            }
        };

        Ok(resume)
    }

    /// Device picker plus save/load for one kind of backup memory
    pub fn load_save_menu(&mut self, kind: SaveKind) -> Result<bool, MenuError> {
        self.in_frame(Selection::new(LOAD_SAVE_START), |s| s.load_save_screen(kind))
            .map(|(value, _)| value)
    }

    fn load_save_screen(&mut self, kind: SaveKind) -> Result<bool, MenuError> {
        let resume = loop {
            let labels = vec![
                format!("Device: {}", self.device.label()),
                format!("Save {}", kind.label()),
                format!("Load {}", kind.label()),
            ];
            let transfer = match self.visit(RETURN_TITLE, labels, false)? {
                MenuOutcome::Cancelled => break false,
                MenuOutcome::Confirmed(0) => {
                    self.device = self.device.next();
                    continue;
                }
                MenuOutcome::Confirmed(1) => Transfer::Save,
                MenuOutcome::Confirmed(_) => Transfer::Load,
                MenuOutcome::Adjusted(..) => continue,
            };
            if self.host.transfer(kind, transfer, self.device) {
                break true;
            }
        };

        Ok(resume)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::session;
    use super::*;
    use crate::host::{HeadlessHost, HostCall};
    use crate::settings::StorageDevice;
    use menu_core::MenuButtons;

    #[test]
    fn test_load_save_opens_on_load_item() {
        let mut s = session(vec![MenuButtons::CANCEL], HeadlessHost::new());
        assert!(!s.load_save_menu(SaveKind::Sram).unwrap());
        assert_eq!(s.driver().renderer().highlighted(), Some("Load SRAM"));
        assert_eq!(s.depth(), 0);
    }

    #[test]
    fn test_device_cycles_and_persists() {
        let samples = vec![
            MenuButtons::DOWN,
            MenuButtons::CONFIRM,
            MenuButtons::CANCEL,
            MenuButtons::CANCEL,
        ];
        let mut s = session(samples, HeadlessHost::new());
        s.load_save_menu(SaveKind::State).unwrap();
        assert!(s.driver().renderer().has_shown("Device: MCARD A"));
        s.load_save_menu(SaveKind::State).unwrap();
        let frame = s.driver().renderer().last_frame().unwrap();
        assert_eq!(frame[1].text, "Device: MCARD A");
    }

    #[test]
    fn test_failed_transfer_stays_on_screen() {
        let samples = vec![MenuButtons::CONFIRM, MenuButtons::CANCEL];
        let mut s = session(samples, HeadlessHost::new());
        assert!(!s.load_save_menu(SaveKind::Sram).unwrap());
        assert!(s.host().called(&HostCall::Transfer(
            SaveKind::Sram,
            Transfer::Load,
            StorageDevice::SdCard
        )));
    }

    #[test]
    fn test_successful_transfer_resumes() {
        let mut host = HeadlessHost::new();
        host.media_available = true;
        let samples = vec![
            MenuButtons::DOWN,
            MenuButtons::CONFIRM,
            MenuButtons::UP,
            MenuButtons::CONFIRM,
        ];
        let mut s = session(samples, host);
        assert!(s.file_menu().unwrap());
        assert!(s.host().called(&HostCall::Transfer(
            SaveKind::State,
            Transfer::Save,
            StorageDevice::SdCard
        )));
        assert_eq!(s.depth(), 0);
    }
}
