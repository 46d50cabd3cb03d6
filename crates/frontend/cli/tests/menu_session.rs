//! End-to-end runs of the option screens through the public API

use menu_cli::host::HostCall;
use menu_cli::settings::{Config, KeyBindings, Region};
use menu_cli::terminal::{LineInput, TerminalRenderer};
use menu_cli::{HeadlessHost, MainMenuExit, MenuSession};
use menu_core::{MenuDriver, MenuError, RecordingRenderer, ScriptedInput};
use std::io::Cursor;

fn scripted(script: &str) -> ScriptedInput {
    let samples = KeyBindings::default().parse_script(script).unwrap();
    ScriptedInput::new(samples)
}

#[test]
fn test_change_region_and_save() {
    let path = std::env::temp_dir().join("genmenu_session_region.json");
    let _ = std::fs::remove_file(&path);

    // Emulator Options > System Options > Region, back out, reboot
    let input = scripted(
        "down,down,down,down,down,enter,down,down,enter,enter,back,back,down,down,enter",
    );
    let host = HeadlessHost::new().with_config_path(path.clone());
    let driver = MenuDriver::new(input, RecordingRenderer::new());
    let mut session = MenuSession::new(driver, host, Config::default());

    assert_eq!(session.main_menu().unwrap(), MainMenuExit::Reboot);
    assert_eq!(session.config().region, Region::Usa);
    assert_eq!(session.depth(), 0);

    let host = session.host();
    assert!(host.called(&HostCall::SaveConfig));
    assert_eq!(host.calls().last(), Some(&HostCall::Shutdown));
    // no game loaded, so the region is not pushed to the core
    assert!(!host.called(&HostCall::ApplyRegion));

    let saved = Config::load_from(&path);
    assert_eq!(saved.region, Region::Usa);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_script_exhaustion_reports_input_closed() {
    let driver = MenuDriver::new(scripted("down,down"), RecordingRenderer::new());
    let mut session = MenuSession::new(driver, HeadlessHost::new(), Config::default());
    assert!(matches!(session.main_menu(), Err(MenuError::InputClosed)));
}

#[test]
fn test_terminal_transcript() {
    let input = LineInput::new(Cursor::new("s\ns\nz\nx\n\n"), KeyBindings::default());
    let renderer = TerminalRenderer::new(Vec::new(), false);
    let host = HeadlessHost::new().with_rom_loaded(true);
    let driver = MenuDriver::new(input, renderer);
    let mut session = MenuSession::new(driver, host, Config::default());

    // Hard Reset resumes straight away with a game loaded
    assert_eq!(session.main_menu().unwrap(), MainMenuExit::Resume);
    let (driver, host, _) = session.into_parts();
    assert!(host.called(&HostCall::HardReset));

    let (_, renderer) = driver.into_parts();
    let transcript = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(transcript.contains("60 FPS"));
    assert!(transcript.contains("> Hard Reset <"));
}
