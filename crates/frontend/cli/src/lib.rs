//! Genesis console menu front-end
//!
//! Option screens for a Genesis/Mega Drive emulator front-end, built on the
//! `menu_core` navigation engine, plus a line-based terminal backend used by
//! the `genmenu` binary.

pub mod host;
pub mod screens;
pub mod settings;
pub mod terminal;

pub use host::{HeadlessHost, Host};
pub use screens::{MainMenuExit, MenuSession, RunOutcome};
pub use settings::Config;
