//! Persisted front-end configuration
//!
//! Everything the option screens edit lives in [`Config`], stored as
//! `config.json` next to the executable unless another path is given.

use menu_core::{MenuButton, MenuButtons};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Console region override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    Auto,
    Usa,
    Europe,
    Japan,
}

impl Region {
    pub fn next(self) -> Self {
        match self {
            Region::Auto => Region::Usa,
            Region::Usa => Region::Europe,
            Region::Europe => Region::Japan,
            Region::Japan => Region::Auto,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::Auto => "AUTO",
            Region::Usa => " USA",
            Region::Europe => " EUR",
            Region::Japan => " JAP",
        }
    }
}

/// Where SRAM and save states are read from and written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StorageDevice {
    #[default]
    SdCard,
    MemoryCardA,
    MemoryCardB,
}

impl StorageDevice {
    pub fn next(self) -> Self {
        match self {
            StorageDevice::SdCard => StorageDevice::MemoryCardA,
            StorageDevice::MemoryCardA => StorageDevice::MemoryCardB,
            StorageDevice::MemoryCardB => StorageDevice::SdCard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StorageDevice::SdCard => "SDCARD",
            StorageDevice::MemoryCardA => "MCARD A",
            StorageDevice::MemoryCardB => "MCARD B",
        }
    }
}

/// Automatic load/save target; `None` disables it.
///
/// Cycles SDCARD, MCARD A, MCARD B, OFF.
pub fn next_auto_device(current: Option<StorageDevice>) -> Option<StorageDevice> {
    match current {
        None => Some(StorageDevice::SdCard),
        Some(StorageDevice::MemoryCardB) => None,
        Some(device) => Some(device.next()),
    }
}

pub fn auto_device_label(device: Option<StorageDevice>) -> &'static str {
    device.map_or("OFF", StorageDevice::label)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    #[default]
    Original,
    Interlaced,
    Progressive,
}

impl RenderMode {
    pub fn next(self) -> Self {
        match self {
            RenderMode::Original => RenderMode::Interlaced,
            RenderMode::Interlaced => RenderMode::Progressive,
            RenderMode::Progressive => RenderMode::Original,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Original => "ORIGINAL",
            RenderMode::Interlaced => "INTERLACED",
            RenderMode::Progressive => "PROGRESSIVE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TvMode {
    #[default]
    Hz60,
    Hz50,
    /// Follow the game's region
    Auto,
}

impl TvMode {
    pub fn next(self) -> Self {
        match self {
            TvMode::Hz60 => TvMode::Hz50,
            TvMode::Hz50 => TvMode::Auto,
            TvMode::Auto => TvMode::Hz60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TvMode::Hz60 => "60HZ",
            TvMode::Hz50 => "50HZ",
            TvMode::Auto => "50/60HZ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NtscFilter {
    #[default]
    Off,
    Composite,
    SVideo,
    Rgb,
}

impl NtscFilter {
    pub fn next(self) -> Self {
        match self {
            NtscFilter::Off => NtscFilter::Composite,
            NtscFilter::Composite => NtscFilter::SVideo,
            NtscFilter::SVideo => NtscFilter::Rgb,
            NtscFilter::Rgb => NtscFilter::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NtscFilter::Off => "OFF",
            NtscFilter::Composite => "COMPOSITE",
            NtscFilter::SVideo => "S-VIDEO",
            NtscFilter::Rgb => "RGB",
        }
    }
}

/// Peripheral plugged into one of the two console ports.
///
/// [`PortSystem::successor`] gives the cycling order used by the controls
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PortSystem {
    None,
    #[default]
    Gamepad,
    Mouse,
    /// Light gun, port 2 only
    Menacer,
    /// Light guns, port 2 only
    Justifier,
    TeamPlayer,
    /// EA 4-Way Play, occupies both ports
    WayPlay,
}

impl PortSystem {
    /// Following system, `None` after the last one
    pub fn successor(self) -> Option<Self> {
        match self {
            PortSystem::None => Some(PortSystem::Gamepad),
            PortSystem::Gamepad => Some(PortSystem::Mouse),
            PortSystem::Mouse => Some(PortSystem::Menacer),
            PortSystem::Menacer => Some(PortSystem::Justifier),
            PortSystem::Justifier => Some(PortSystem::TeamPlayer),
            PortSystem::TeamPlayer => Some(PortSystem::WayPlay),
            PortSystem::WayPlay => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PortSystem::None => "NONE",
            PortSystem::Gamepad => "GAMEPAD",
            PortSystem::Mouse => "MOUSE",
            PortSystem::Menacer => "MENACER",
            PortSystem::Justifier => "JUSTIFIERS",
            PortSystem::TeamPlayer => "TEAMPLAYER",
            PortSystem::WayPlay => "4-WAYPLAY",
        }
    }
}

/// Physical controller a player is mapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ControllerDevice {
    #[default]
    None,
    GameCube,
    Wiimote,
    Nunchuk,
    Classic,
}

impl ControllerDevice {
    pub fn label(self) -> &'static str {
        match self {
            ControllerDevice::None => "NONE",
            ControllerDevice::GameCube => "GAMECUBE",
            ControllerDevice::Wiimote => "WIIMOTE",
            ControllerDevice::Nunchuk => "NUNCHUK",
            ControllerDevice::Classic => "CLASSIC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PadType {
    #[default]
    ThreeButtons,
    SixButtons,
}

impl PadType {
    pub fn toggled(self) -> Self {
        match self {
            PadType::ThreeButtons => PadType::SixButtons,
            PadType::SixButtons => PadType::ThreeButtons,
        }
    }
}

/// Number of emulated players that can be assigned a controller
pub const MAX_PLAYERS: usize = 8;

/// Controller assignment for one emulated player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    pub device: ControllerDevice,
    /// Controller port on the host, 0-3
    pub port: u8,
    pub pad_type: PadType,
}

/// Terminal key names for each menu button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub confirm: Vec<String>,
    pub cancel: Vec<String>,
    pub alt_confirm: Vec<String>,
    pub alt_cancel: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: keys(&["w", "k", "up"]),
            down: keys(&["s", "j", "down"]),
            confirm: keys(&["z", "enter"]),
            cancel: keys(&["x", "q", "back"]),
            alt_confirm: keys(&["d", "l", "right"]),
            alt_cancel: keys(&["a", "h", "left"]),
        }
    }
}

impl KeyBindings {
    /// Button bound to `key` (case-insensitive)
    pub fn resolve(&self, key: &str) -> Option<MenuButton> {
        let key = key.to_ascii_lowercase();
        let bound = |names: &[String]| names.iter().any(|n| n.eq_ignore_ascii_case(&key));
        if bound(&self.up) {
            Some(MenuButton::Up)
        } else if bound(&self.down) {
            Some(MenuButton::Down)
        } else if bound(&self.confirm) {
            Some(MenuButton::Confirm)
        } else if bound(&self.cancel) {
            Some(MenuButton::Cancel)
        } else if bound(&self.alt_confirm) {
            Some(MenuButton::AltConfirm)
        } else if bound(&self.alt_cancel) {
            Some(MenuButton::AltCancel)
        } else {
            None
        }
    }

    /// Parse one input sample such as `"s"` or `"w+z"`.
    ///
    /// An empty sample means the enter key. Unknown keys are returned in
    /// the error list and contribute nothing to the sample.
    pub fn parse_sample(&self, text: &str) -> (MenuButtons, Vec<String>) {
        let text = text.trim();
        if text.is_empty() {
            let sample = self.resolve("enter").map(MenuButtons::from).unwrap_or_default();
            return (sample, Vec::new());
        }

        let mut sample = MenuButtons::NONE;
        let mut unknown = Vec::new();
        for key in text.split(|c: char| c == '+' || c.is_whitespace()) {
            if key.is_empty() {
                continue;
            }
            match self.resolve(key) {
                Some(button) => sample |= MenuButtons::from(button),
                None => unknown.push(key.to_string()),
            }
        }
        (sample, unknown)
    }

    /// Parse a comma separated list of samples
    pub fn parse_script(&self, script: &str) -> Result<Vec<MenuButtons>, String> {
        script
            .split(',')
            .map(|item| {
                let (sample, unknown) = self.parse_sample(item);
                if unknown.is_empty() {
                    Ok(sample)
                } else {
                    Err(format!("unknown key(s) in script: {}", unknown.join(", ")))
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Sound
    pub psg_preamp: f64,
    pub fm_preamp: f64,
    pub boost: u8,
    pub filter: bool,
    pub hq_fm: bool,
    /// true: GENS YM2612 core, false: MAME core
    pub fm_core: bool,

    // System
    pub region: Region,
    pub force_dtack: bool,
    /// Bit 0: BIOS enabled, bit 1: BIOS image found
    pub bios_enabled: u8,
    pub svp_cycles: u32,
    pub sram_auto: Option<StorageDevice>,
    pub freeze_auto: Option<StorageDevice>,

    // Video
    /// true: original aspect ratio, false: stretched
    pub aspect: bool,
    pub render: RenderMode,
    pub tv_mode: TvMode,
    pub filtering: bool,
    pub ntsc: NtscFilter,
    pub overscan: bool,
    pub xshift: i32,
    pub yshift: i32,
    pub xscale: i32,
    pub yscale: i32,

    // Controls
    pub port_systems: [PortSystem; 2],
    pub gun_cursor: bool,
    pub invert_mouse: bool,
    pub inputs: [PlayerInput; MAX_PLAYERS],

    pub keys: KeyBindings,
}

pub const PREAMP_MAX: f64 = 5.0;
pub const BOOST_MAX: u8 = 4;
pub const SVP_CYCLES_MAX: u32 = 1500;

impl Default for Config {
    fn default() -> Self {
        let mut inputs = [PlayerInput::default(); MAX_PLAYERS];
        for (i, input) in inputs.iter_mut().enumerate() {
            input.port = (i % 4) as u8;
            if i < 4 {
                input.device = ControllerDevice::GameCube;
            }
        }

        Self {
            psg_preamp: 1.5,
            fm_preamp: 1.0,
            boost: 1,
            filter: false,
            hq_fm: true,
            fm_core: false,
            region: Region::Auto,
            force_dtack: false,
            bios_enabled: 0,
            svp_cycles: 800,
            sram_auto: None,
            freeze_auto: None,
            aspect: true,
            render: RenderMode::Original,
            tv_mode: TvMode::Hz60,
            filtering: true,
            ntsc: NtscFilter::Off,
            overscan: true,
            xshift: 0,
            yshift: 0,
            xscale: 0,
            yscale: 0,
            port_systems: [PortSystem::Gamepad, PortSystem::Gamepad],
            gun_cursor: true,
            invert_mouse: false,
            inputs,
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// `config.json` next to the executable
    pub fn default_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("config.json");
        path
    }

    /// Read and parse `path`; `Ok(None)` when the file does not exist
    pub fn try_load_from(path: &Path) -> Result<Option<Self>, SettingsError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Load from `path`, falling back to defaults if the file is missing or
    /// unreadable
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Reset both preamps to the values matching the selected FM core
    pub fn reset_preamps(&mut self) {
        self.psg_preamp = if self.fm_core { 2.5 } else { 1.5 };
        self.fm_preamp = 1.0;
    }

    /// Number of players the connected peripherals provide
    pub fn max_players(&self, jcart: bool) -> usize {
        let port1 = match self.port_systems[0] {
            PortSystem::Gamepad | PortSystem::Mouse => 1,
            PortSystem::TeamPlayer | PortSystem::WayPlay => 4,
            _ => 0,
        };
        // 4-Way Play players are already counted on port 1
        let port2 = match self.port_systems[1] {
            PortSystem::Gamepad | PortSystem::Mouse | PortSystem::Menacer => 1,
            PortSystem::Justifier => 2,
            PortSystem::TeamPlayer => 4,
            PortSystem::None | PortSystem::WayPlay => 0,
        };
        port1 + port2 + if jcart { 2 } else { 0 }
    }
}
