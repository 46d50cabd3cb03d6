//! System options

use super::{adjustment, MenuSession, RETURN_TITLE};
use crate::host::Host;
use crate::settings::{auto_device_label, next_auto_device, SVP_CYCLES_MAX};
use menu_core::{Direction, MenuError, MenuInput, MenuRenderer, Selection};

/// Step the SVP cycle count, wrapping at both ends of `0..=1500`
pub(crate) fn scrub_svp_cycles(cycles: u32, direction: Direction) -> u32 {
    match direction {
        Direction::Increase if cycles >= SVP_CYCLES_MAX => 0,
        Direction::Increase => cycles + 1,
        Direction::Decrease if cycles == 0 => SVP_CYCLES_MAX,
        Direction::Decrease => cycles - 1,
    }
}

impl<I: MenuInput, R: MenuRenderer, H: Host> MenuSession<I, R, H> {
    fn system_labels(&self) -> Vec<String> {
        let c = &self.config;
        vec![
            format!("Region: {}", c.region.label()),
            format!("Force DTACK: {}", if c.force_dtack { "Y" } else { "N" }),
            format!(
                "Use BIOS: {}",
                if c.bios_enabled & 1 != 0 { "ON" } else { "OFF" }
            ),
            format!("SVP Cycles: {}", c.svp_cycles),
            format!("Auto SRAM: {}", auto_device_label(c.sram_auto)),
            format!("Auto FREEZE: {}", auto_device_label(c.freeze_auto)),
        ]
    }

    pub fn system_menu(&mut self) -> Result<(), MenuError> {
        self.in_frame(Selection::default(), Self::system_screen)
            .map(|(value, _)| value)
    }

    fn system_screen(&mut self) -> Result<(), MenuError> {
        loop {
            let labels = self.system_labels();
            let Some((item, direction)) = adjustment(self.visit(RETURN_TITLE, labels, true)?) else {
                break;
            };

            match (item, direction) {
                (0, Direction::Increase) => {
                    self.config.region = self.config.region.next();
                    if self.host.rom_loaded() {
                        self.host.apply_region(&self.config);
                    }
                }
                (1, Direction::Increase) => self.config.force_dtack = !self.config.force_dtack,
                (2, Direction::Increase) => {
                    self.config.bios_enabled ^= 1;
                    self.host.reset_system();
                }
                (3, d) => self.config.svp_cycles = scrub_svp_cycles(self.config.svp_cycles, d),
                (4, Direction::Increase) => {
                    self.config.sram_auto = next_auto_device(self.config.sram_auto)
                }
                (5, Direction::Increase) => {
                    self.config.freeze_auto = next_auto_device(self.config.freeze_auto)
                }
                _ => {}
            }
        }

        Ok(())
    }
}
