//! Bridge between the menus and the emulator they configure
//!
//! Screens never touch the emulation core directly. Everything that would
//! reinitialise audio, reset the console or read a memory card goes through
//! [`Host`]. [`HeadlessHost`] is the implementation used when no core is
//! attached: it tracks the little state the menus query and logs the rest.

use crate::settings::{Config, ControllerDevice, PlayerInput, SettingsError, StorageDevice};
use menu_core::logging::{log, LogCategory, LogLevel};
use std::collections::HashSet;
use std::path::PathBuf;

/// Backup memory kinds the file manager handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveKind {
    Sram,
    State,
}

impl SaveKind {
    pub fn label(self) -> &'static str {
        match self {
            SaveKind::Sram => "SRAM",
            SaveKind::State => "State",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transfer {
    Save,
    Load,
}

/// Where a ROM comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RomSource {
    History,
    SdCard,
    Dvd,
}

/// Emulator services the menus call into.
///
/// Methods returning `bool` report whether the calling screen should close
/// and hand control back to its parent.
pub trait Host {
    fn rom_loaded(&self) -> bool;
    fn sram_modified(&self) -> bool;
    fn frames_per_second(&self) -> u32;
    /// A J-Cart game is inserted; its extra ports replace the port settings
    fn jcart(&self) -> bool;
    fn has_component_cable(&self) -> bool;
    fn controller_available(&self, device: ControllerDevice, port: u8) -> bool;
    /// Lines for the ROM header screen
    fn rom_info(&self) -> Vec<String>;

    /// Modal message
    fn prompt(&mut self, message: &str);
    fn reinit_audio(&mut self, config: &Config);
    fn apply_region(&mut self, config: &Config);
    fn reset_system(&mut self);
    /// Full power cycle of the emulated console
    fn hard_reset(&mut self, config: &Config);
    fn viewport_changed(&mut self, config: &Config);
    fn reset_io(&mut self, config: &Config);
    fn configure_pad(&mut self, player: usize, input: &PlayerInput);
    fn edit_cheats(&mut self);
    fn load_rom(&mut self, source: RomSource) -> bool;
    fn stop_dvd_motor(&mut self);
    fn transfer(&mut self, kind: SaveKind, transfer: Transfer, device: StorageDevice) -> bool;
    fn save_config(&mut self, config: &Config) -> Result<(), SettingsError>;
    /// Flush backup memory and stop the core before leaving the front-end
    fn shutdown(&mut self);
}

/// Host calls recorded by [`HeadlessHost`]
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Prompt(String),
    ReinitAudio,
    ApplyRegion,
    ResetSystem,
    HardReset,
    ViewportChanged,
    ResetIo,
    ConfigurePad(usize, PlayerInput),
    EditCheats,
    LoadRom(RomSource),
    StopDvdMotor,
    Transfer(SaveKind, Transfer, StorageDevice),
    SaveConfig,
    Shutdown,
}

/// Host without an emulation core behind it
#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub rom_loaded: bool,
    pub sram_modified: bool,
    pub fps: u32,
    pub jcart: bool,
    pub component_cable: bool,
    /// (device, port) pairs reported as connected
    pub controllers: HashSet<(ControllerDevice, u8)>,
    pub rom_info: Vec<String>,
    /// Whether `load_rom` and `transfer` succeed
    pub media_available: bool,
    /// Where `save_config` writes; nothing is written when unset
    pub config_path: Option<PathBuf>,
    calls: Vec<HostCall>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            fps: 60,
            ..Default::default()
        }
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn with_rom_loaded(mut self, loaded: bool) -> Self {
        self.rom_loaded = loaded;
        self
    }

    /// Every call made so far, oldest first
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn called(&self, call: &HostCall) -> bool {
        self.calls.contains(call)
    }

    fn record(&mut self, call: HostCall) {
        log(LogCategory::Host, LogLevel::Info, || format!("{:?}", call));
        self.calls.push(call);
    }
}

impl Host for HeadlessHost {
    fn rom_loaded(&self) -> bool {
        self.rom_loaded
    }

    fn sram_modified(&self) -> bool {
        self.sram_modified
    }

    fn frames_per_second(&self) -> u32 {
        self.fps
    }

    fn jcart(&self) -> bool {
        self.jcart
    }

    fn has_component_cable(&self) -> bool {
        self.component_cable
    }

    fn controller_available(&self, device: ControllerDevice, port: u8) -> bool {
        self.controllers.contains(&(device, port))
    }

    fn rom_info(&self) -> Vec<String> {
        if self.rom_info.is_empty() && !self.rom_loaded {
            return vec!["No game loaded".to_string()];
        }
        self.rom_info.clone()
    }

    fn prompt(&mut self, message: &str) {
        self.record(HostCall::Prompt(message.to_string()));
    }

    fn reinit_audio(&mut self, _config: &Config) {
        self.record(HostCall::ReinitAudio);
    }

    fn apply_region(&mut self, _config: &Config) {
        self.record(HostCall::ApplyRegion);
    }

    fn reset_system(&mut self) {
        self.record(HostCall::ResetSystem);
    }

    fn hard_reset(&mut self, _config: &Config) {
        self.record(HostCall::HardReset);
    }

    fn viewport_changed(&mut self, _config: &Config) {
        self.record(HostCall::ViewportChanged);
    }

    fn reset_io(&mut self, _config: &Config) {
        self.record(HostCall::ResetIo);
    }

    fn configure_pad(&mut self, player: usize, input: &PlayerInput) {
        self.record(HostCall::ConfigurePad(player, *input));
    }

    fn edit_cheats(&mut self) {
        self.record(HostCall::EditCheats);
    }

    fn load_rom(&mut self, source: RomSource) -> bool {
        self.record(HostCall::LoadRom(source));
        if self.media_available {
            self.rom_loaded = true;
            self.sram_modified = false;
        }
        self.media_available
    }

    fn stop_dvd_motor(&mut self) {
        self.record(HostCall::StopDvdMotor);
    }

    fn transfer(&mut self, kind: SaveKind, transfer: Transfer, device: StorageDevice) -> bool {
        self.record(HostCall::Transfer(kind, transfer, device));
        if !self.media_available {
            let verb = match transfer {
                Transfer::Save => "save",
                Transfer::Load => "load",
            };
            self.prompt(&format!(
                "Unable to {} {} on {}",
                verb,
                kind.label(),
                device.label()
            ));
            return false;
        }
        if kind == SaveKind::Sram {
            self.sram_modified = false;
        }
        true
    }

    fn save_config(&mut self, config: &Config) -> Result<(), SettingsError> {
        self.record(HostCall::SaveConfig);
        match &self.config_path {
            Some(path) => config.save_to(path),
            None => Ok(()),
        }
    }

    fn shutdown(&mut self) {
        self.record(HostCall::Shutdown);
    }
}
