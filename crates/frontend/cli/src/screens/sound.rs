//! Sound options

use super::{adjustment, on_off, MenuSession, RETURN_TITLE};
use crate::host::Host;
use crate::settings::{BOOST_MAX, PREAMP_MAX};
use menu_core::logging::{log, LogCategory, LogLevel};
use menu_core::{Direction, MenuError, MenuInput, MenuRenderer, Selection};

const PREAMP_STEP: f64 = 0.01;

/// Step a preamp by 0.01, wrapping past either end of `0.0..=5.0`
pub(crate) fn scrub_preamp(value: f64, direction: Direction) -> f64 {
    let stepped = value + PREAMP_STEP * f64::from(direction.sign());
    // keep the value on the 0.01 grid so labels stay stable
    let stepped = (stepped * 100.0).round() / 100.0;
    if stepped < 0.0 {
        PREAMP_MAX
    } else if stepped > PREAMP_MAX {
        0.0
    } else {
        stepped
    }
}

impl<I: MenuInput, R: MenuRenderer, H: Host> MenuSession<I, R, H> {
    fn sound_labels(&self) -> Vec<String> {
        let c = &self.config;
        vec![
            format!("PSG Volume: {:.2}", c.psg_preamp),
            format!("FM Volume: {:.2}", c.fm_preamp),
            format!("Volume Boost: {}X", c.boost),
            format!("LowPass Filter: {}", on_off(c.filter)),
            format!("HQ YM2612: {}", on_off(c.hq_fm)),
            format!("FM core: {}", if c.fm_core { "GENS" } else { "MAME" }),
        ]
    }

    pub fn sound_menu(&mut self) -> Result<(), MenuError> {
        self.in_frame(Selection::default(), Self::sound_screen)
            .map(|(value, _)| value)
    }

    fn sound_screen(&mut self) -> Result<(), MenuError> {
        loop {
            let labels = self.sound_labels();
            let outcome = self.visit(RETURN_TITLE, labels, true)?;
            let Some((item, direction)) = adjustment(outcome) else {
                break;
            };

            match (item, direction) {
                (0, d) => self.config.psg_preamp = scrub_preamp(self.config.psg_preamp, d),
                (1, d) => self.config.fm_preamp = scrub_preamp(self.config.fm_preamp, d),
                (2, Direction::Increase) => {
                    self.config.boost = if self.config.boost >= BOOST_MAX {
                        0
                    } else {
                        self.config.boost + 1
                    };
                }
                (3, Direction::Increase) => self.config.filter = !self.config.filter,
                (4, Direction::Increase) => {
                    self.config.hq_fm = !self.config.hq_fm;
                    if self.host.rom_loaded() {
                        self.host.reinit_audio(&self.config);
                    }
                }
                (5, Direction::Increase) => {
                    self.config.fm_core = !self.config.fm_core;
                    self.config.reset_preamps();
                    if self.host.rom_loaded() {
                        self.host.reinit_audio(&self.config);
                    }
                }
                _ => {}
            }

            log(LogCategory::Config, LogLevel::Debug, || {
                format!("sound item {} {:?}", item, direction)
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::session;
    use super::*;
    use crate::host::{HeadlessHost, HostCall};
    use menu_core::MenuButtons;

    #[test]
    fn test_scrub_preamp_steps() {
        assert_eq!(scrub_preamp(1.0, Direction::Increase), 1.01);
        assert_eq!(scrub_preamp(1.0, Direction::Decrease), 0.99);
    }

    #[test]
    fn test_scrub_preamp_wraps() {
        assert_eq!(scrub_preamp(0.0, Direction::Decrease), PREAMP_MAX);
        assert_eq!(scrub_preamp(PREAMP_MAX, Direction::Increase), 0.0);
    }

    #[test]
    fn test_scrub_preamp_stays_on_grid() {
        let mut value = 0.0;
        for _ in 0..150 {
            value = scrub_preamp(value, Direction::Increase);
        }
        assert_eq!(format!("{:.2}", value), "1.50");
        assert_eq!(value, 1.5);
    }

    #[test]
    fn test_sound_menu_scrubs_psg_volume() {
        let mut s = session(
            vec![MenuButtons::ALT_CONFIRM, MenuButtons::ALT_CONFIRM, MenuButtons::CANCEL],
            HeadlessHost::new(),
        );
        s.sound_menu().unwrap();
        assert_eq!(s.config().psg_preamp, 1.52);
        assert_eq!(s.depth(), 0);
        assert!(s.driver().renderer().has_shown("PSG Volume: 1.52"));
    }

    #[test]
    fn test_sound_menu_boost_wraps() {
        let mut samples = vec![MenuButtons::DOWN, MenuButtons::DOWN];
        samples.extend(vec![MenuButtons::CONFIRM; 4]);
        samples.push(MenuButtons::CANCEL);
        let mut s = session(samples, HeadlessHost::new());
        s.sound_menu().unwrap();
        // default boost is 1: 2, 3, 4, 0
        assert_eq!(s.config().boost, 0);
    }

    #[test]
    fn test_fm_core_toggle_resets_preamps() {
        let samples = vec![MenuButtons::UP, MenuButtons::CONFIRM, MenuButtons::CANCEL];
        let mut s = session(samples, HeadlessHost::new().with_rom_loaded(true));
        s.sound_menu().unwrap();
        assert!(s.config().fm_core);
        assert_eq!(s.config().psg_preamp, 2.5);
        assert_eq!(s.config().fm_preamp, 1.0);
        assert!(s.host().called(&HostCall::ReinitAudio));
    }

    #[test]
    fn test_hq_fm_without_rom_skips_audio() {
        let mut samples = vec![MenuButtons::DOWN; 4];
        samples.push(MenuButtons::CONFIRM);
        samples.push(MenuButtons::CANCEL);
        let mut s = session(samples, HeadlessHost::new());
        s.sound_menu().unwrap();
        assert!(!s.config().hq_fm);
        assert!(s.host().calls().is_empty());
    }
}
