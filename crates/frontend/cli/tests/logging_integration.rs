//! Menu logging routed to a file while screens run

use menu_cli::settings::Config;
use menu_cli::{HeadlessHost, MenuSession};
use menu_core::logging::{LogCategory, LogConfig, LogLevel};
use menu_core::{MenuButtons, MenuDriver, RecordingRenderer, ScriptedInput};
use std::time::Duration;

#[test]
fn test_navigation_logged_to_file() {
    let path = std::env::temp_dir().join("genmenu_logging_integration.log");
    let _ = std::fs::remove_file(&path);

    let config = LogConfig::global();
    config.reset();
    config.set_level(LogCategory::Navigation, LogLevel::Debug);
    config.set_level(LogCategory::Host, LogLevel::Info);
    config.set_log_file(path.clone()).unwrap();

    let input = ScriptedInput::new([MenuButtons::UP, MenuButtons::CONFIRM]);
    let driver = MenuDriver::new(input, RecordingRenderer::new());
    let mut session = MenuSession::new(driver, HeadlessHost::new(), Config::default());
    session.main_menu().unwrap();

    // the writer thread flushes after every message
    let mut contents = String::new();
    for _ in 0..200 {
        contents = std::fs::read_to_string(&path).unwrap_or_default();
        if contents.contains("Shutdown") {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    config.clear_log_file();
    config.reset();
    let _ = std::fs::remove_file(&path);

    assert!(contents.contains("[Navigation]"), "log was: {}", contents);
    assert!(contents.contains("Shutdown"), "log was: {}", contents);
}
