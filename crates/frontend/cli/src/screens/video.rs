//! Video options

use super::{adjustment, on_off, MenuSession, RETURN_TITLE};
use crate::host::Host;
use crate::settings::{RenderMode, TvMode};
use menu_core::logging::{log, LogCategory, LogLevel};
use menu_core::{Direction, MenuError, MenuInput, MenuRenderer, Selection};

/// `+05` / `-12` style offset
fn signed(value: i32) -> String {
    format!("{}{:02}", if value < 0 { "-" } else { "+" }, value.abs())
}

impl<I: MenuInput, R: MenuRenderer, H: Host> MenuSession<I, R, H> {
    fn video_labels(&self) -> Vec<String> {
        let c = &self.config;
        let mut labels = vec![
            format!("Aspect: {}", if c.aspect { "ORIGINAL" } else { "STRETCH" }),
            format!("Render: {}", c.render.label()),
            format!("TV Mode: {}", c.tv_mode.label()),
            format!("Texture Filter: {}", on_off(c.filtering)),
            format!("NTSC Filter: {}", c.ntsc.label()),
            format!("Borders: {}", on_off(c.overscan)),
            format!("Center X: {}", signed(c.xshift)),
            format!("Center Y: {}", signed(c.yshift)),
        ];
        // scaling only applies to stretched output
        if !c.aspect {
            labels.push(format!("Scale  X: {:02}", c.xscale * 2));
            labels.push(format!("Scale  Y: {:02}", c.yscale * 2));
        }
        labels
    }

    fn cycle_render_mode(&mut self) {
        self.config.render = self.config.render.next();
        if self.config.render == RenderMode::Progressive {
            if self.host.has_component_cable() {
                self.config.tv_mode = TvMode::Hz60;
            } else {
                log(LogCategory::Config, LogLevel::Info, || {
                    "progressive output needs a component cable".to_string()
                });
                self.config.render = RenderMode::Original;
            }
        }
    }

    pub fn video_menu(&mut self) -> Result<(), MenuError> {
        self.in_frame(Selection::default(), Self::video_screen)
            .map(|(value, _)| value)
    }

    fn video_screen(&mut self) -> Result<(), MenuError> {
        loop {
            let labels = self.video_labels();
            let Some((item, direction)) = adjustment(self.visit(RETURN_TITLE, labels, true)?) else {
                break;
            };
            let step = direction.sign();

            let viewport = match (item, direction) {
                (0, Direction::Increase) => {
                    self.config.aspect = !self.config.aspect;
                    true
                }
                (1, Direction::Increase) => {
                    self.cycle_render_mode();
                    true
                }
                (2, Direction::Increase) => {
                    // progressive output is 60Hz only
                    if self.config.render != RenderMode::Progressive {
                        self.config.tv_mode = self.config.tv_mode.next();
                    }
                    false
                }
                (3, Direction::Increase) => {
                    self.config.filtering = !self.config.filtering;
                    true
                }
                (4, Direction::Increase) => {
                    self.config.ntsc = self.config.ntsc.next();
                    true
                }
                (5, Direction::Increase) => {
                    self.config.overscan = !self.config.overscan;
                    true
                }
                (6, _) => {
                    self.config.xshift += step;
                    true
                }
                (7, _) => {
                    self.config.yshift += step;
                    true
                }
                (8, _) => {
                    self.config.xscale += step;
                    true
                }
                (9, _) => {
                    self.config.yscale += step;
                    true
                }
                _ => false,
            };

            if viewport {
                self.host.viewport_changed(&self.config);
            }
        }

        Ok(())
    }
}
