//! Controller options
//!
//! Port systems follow the peripheral rules of the console: only one port
//! can hold a mouse, light guns only fit port 2 and the 4-Way Play adapter
//! takes both ports at once. Player assignments map emulated players to
//! host controllers; two players never share a device and port when the
//! screen is left or another player is selected.

use super::{on_off, MenuSession, RETURN_TITLE};
use crate::host::Host;
use crate::settings::{ControllerDevice, PadType, PlayerInput, PortSystem, MAX_PLAYERS};
use menu_core::logging::{log, LogCategory, LogLevel};
use menu_core::{MenuError, MenuInput, MenuOutcome, MenuRenderer, Selection};

/// Host controller ports per device kind
const HOST_PORTS: u8 = 4;

const JCART_PROMPT: &str = "JCART detected !";

/// Next system for port 1; light guns are skipped
pub(crate) fn cycle_port1(systems: &mut [PortSystem; 2]) {
    let other = systems[1];
    let mut next = systems[0].successor();
    while let Some(system) = next {
        let skip = matches!(system, PortSystem::Menacer | PortSystem::Justifier)
            || (system == PortSystem::Mouse && other == PortSystem::Mouse);
        if !skip {
            break;
        }
        next = system.successor();
    }

    *systems = match next {
        Some(PortSystem::WayPlay) => [PortSystem::WayPlay, PortSystem::WayPlay],
        Some(system) => [system, other],
        None => [PortSystem::None, PortSystem::Gamepad],
    };
}

/// Next system for port 2
pub(crate) fn cycle_port2(systems: &mut [PortSystem; 2]) {
    let other = systems[0];
    let mut next = systems[1].successor();
    if next == Some(PortSystem::Mouse) && other == PortSystem::Mouse {
        next = PortSystem::Mouse.successor();
    }

    *systems = match next {
        Some(PortSystem::WayPlay) => [PortSystem::WayPlay, PortSystem::WayPlay],
        Some(system) => [other, system],
        None => [PortSystem::Gamepad, PortSystem::None],
    };
}

/// Unassign every other player mapped to the same device and port as `player`
pub(crate) fn clear_duplicates(inputs: &mut [PlayerInput; MAX_PLAYERS], player: usize) {
    let current = inputs[player];
    for (i, input) in inputs.iter_mut().enumerate() {
        if i != player && input.device == current.device && input.port == current.port {
            input.device = ControllerDevice::None;
            input.port = (i % 4) as u8;
        }
    }
}

/// Move `input` to the next connected controller.
///
/// GameCube pads are always assumed present. Wii controllers are probed
/// port by port; once a kind runs out of ports the next kind is tried from
/// port 0, and after classic controllers the player falls back to its own
/// GameCube port.
pub(crate) fn cycle_device<F>(input: &mut PlayerInput, player: usize, available: F)
where
    F: Fn(ControllerDevice, u8) -> bool,
{
    match input.device {
        ControllerDevice::None => {
            input.device = ControllerDevice::GameCube;
            return;
        }
        ControllerDevice::GameCube => {
            input.device = ControllerDevice::Wiimote;
            input.port = 0;
        }
        _ => input.port += 1,
    }

    for (device, fallback) in [
        (ControllerDevice::Wiimote, ControllerDevice::Nunchuk),
        (ControllerDevice::Nunchuk, ControllerDevice::Classic),
        (ControllerDevice::Classic, ControllerDevice::GameCube),
    ] {
        if input.device != device {
            continue;
        }
        while input.port < HOST_PORTS && !available(device, input.port) {
            input.port += 1;
        }
        if input.port >= HOST_PORTS {
            input.device = fallback;
            input.port = if fallback == ControllerDevice::GameCube {
                (player % 4) as u8
            } else {
                0
            };
        }
    }
}

fn device_label(input: &PlayerInput) -> String {
    match input.device {
        ControllerDevice::None => "Device: NONE".to_string(),
        device => format!("Device: {} {}", device.label(), input.port + 1),
    }
}

impl<I: MenuInput, R: MenuRenderer, H: Host> MenuSession<I, R, H> {
    fn controls_labels(&self, player: usize) -> Vec<String> {
        let c = &self.config;
        let input = &c.inputs[player];
        let jcart = self.host.jcart() && player > 1;
        vec![
            format!("Port 1: {}", c.port_systems[0].label()),
            format!("Port 2: {}", c.port_systems[1].label()),
            format!("Gun Cursor: {}", on_off(c.gun_cursor)),
            format!("Invert Mouse: {}", on_off(c.invert_mouse)),
            format!(
                "Set Player: {}{}",
                player + 1,
                if jcart { "-JCART" } else { "" }
            ),
            device_label(input),
            match input.pad_type {
                PadType::ThreeButtons => "Type: 3BUTTONS".to_string(),
                PadType::SixButtons => "Type: 6BUTTONS".to_string(),
            },
            "Configure Input".to_string(),
        ]
    }

    fn change_port(&mut self, port: usize) {
        if self.host.jcart() {
            self.host.prompt(JCART_PROMPT);
            return;
        }
        if port == 0 {
            cycle_port1(&mut self.config.port_systems);
        } else {
            cycle_port2(&mut self.config.port_systems);
        }
        log(LogCategory::Config, LogLevel::Debug, || {
            format!("port systems now {:?}", self.config.port_systems)
        });
        self.host.reset_io(&self.config);
    }

    pub fn controls_menu(&mut self) -> Result<(), MenuError> {
        self.in_frame(Selection::default(), Self::controls_screen)
            .map(|(value, _)| value)
    }

    fn controls_screen(&mut self) -> Result<(), MenuError> {
        let mut player = 0;

        loop {
            let max_players = self.config.max_players(self.host.jcart()).max(1);
            if player >= max_players {
                if player != 0 {
                    let first = self.config.inputs[0];
                    let current = self.config.inputs[player];
                    if first.device == current.device && first.port == current.port {
                        self.config.inputs[0].device = ControllerDevice::None;
                        self.config.inputs[0].port = 0;
                    }
                }
                player = 0;
            }

            // Wiimotes only provide three buttons
            if self.config.inputs[player].device == ControllerDevice::Wiimote {
                self.config.inputs[player].pad_type = PadType::ThreeButtons;
            }

            let labels = self.controls_labels(player);
            let item = match self.visit(RETURN_TITLE, labels, false)? {
                MenuOutcome::Cancelled => break,
                MenuOutcome::Confirmed(item) => item,
                MenuOutcome::Adjusted(..) => continue,
            };

            match item {
                0 | 1 => self.change_port(item),
                2 => self.config.gun_cursor = !self.config.gun_cursor,
                3 => self.config.invert_mouse = !self.config.invert_mouse,
                4 => {
                    clear_duplicates(&mut self.config.inputs, player);
                    player = (player + 1) % max_players;
                }
                5 => {
                    let host = &self.host;
                    cycle_device(&mut self.config.inputs[player], player, |device, port| {
                        host.controller_available(device, port)
                    });
                }
                6 => {
                    let input = &mut self.config.inputs[player];
                    if input.device != ControllerDevice::Wiimote {
                        input.pad_type = input.pad_type.toggled();
                        self.host.reset_io(&self.config);
                    }
                }
                7 => {
                    let input = self.config.inputs[player];
                    self.host.configure_pad(player, &input);
                }
                _ => {}
            }
        }

        clear_duplicates(&mut self.config.inputs, player);
        Ok(())
    }
}
