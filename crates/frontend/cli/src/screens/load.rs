//! ROM loading

use super::{MenuSession, RETURN_TITLE};
use crate::host::{Host, RomSource};
use menu_core::{MenuError, MenuInput, MenuOutcome, MenuRenderer};

const ITEMS: [&str; 4] = [
    "Load Recent",
    "Load from SDCARD",
    "Load from DVD",
    "Stop DVD Motor",
];

impl<I: MenuInput, R: MenuRenderer, H: Host> MenuSession<I, R, H> {
    /// ROM source picker. Leaves once a ROM loads or on cancel; the
    /// highlighted item is remembered for the next visit.
    pub fn load_menu(&mut self) -> Result<(), MenuError> {
        let ((), selection) = self.in_frame(self.load_selection, Self::load_screen)?;
        self.load_selection = selection;
        Ok(())
    }

    fn load_screen(&mut self) -> Result<(), MenuError> {
        loop {
            let source = match self.visit(RETURN_TITLE, ITEMS.to_vec(), false)? {
                MenuOutcome::Cancelled => break,
                MenuOutcome::Confirmed(0) => RomSource::History,
                MenuOutcome::Confirmed(1) => RomSource::SdCard,
                MenuOutcome::Confirmed(2) => RomSource::Dvd,
                MenuOutcome::Confirmed(_) => {
                    self.host.stop_dvd_motor();
                    continue;
                }
                MenuOutcome::Adjusted(..) => continue,
            };
            if self.host.load_rom(source) {
                break;
            }
        }

        Ok(())
    }
}
