use anyhow::{Context, Result};
use clap::Parser;
use menu_cli::settings::Config;
use menu_cli::terminal::{LineInput, TerminalRenderer};
use menu_cli::{HeadlessHost, MainMenuExit, MenuSession};
use menu_core::logging::{LogConfig, LogLevel};
use menu_core::{MenuDriver, MenuError, MenuInput, ScriptedInput};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "genmenu", about = "Genesis emulator option menus in a terminal")]
struct Args {
    /// Settings file (defaults to config.json next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Menu log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "off")]
    log_level: String,

    /// Write menu logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Comma separated key presses to replay instead of reading stdin,
    /// e.g. "down,down,enter,back"
    #[arg(long)]
    script: Option<String>,

    /// Pretend a game is loaded so Play Game and Hard Reset work
    #[arg(long, default_value_t = false)]
    rom_loaded: bool,

    /// Plain text frames without ANSI escapes
    #[arg(long, default_value_t = false)]
    plain: bool,
}

fn setup_logging(args: &Args) -> Result<()> {
    let level: LogLevel = args
        .log_level
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let logs = LogConfig::global();
    logs.set_global_level(level);
    if let Some(path) = &args.log_file {
        logs.set_log_file(path.clone())
            .with_context(|| format!("opening log file {}", path.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    setup_logging(&args)?;

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load_from(&config_path);
    log::info!("settings loaded from {}", config_path.display());

    let input: Box<dyn MenuInput> = match &args.script {
        Some(script) => {
            let samples = config
                .keys
                .parse_script(script)
                .map_err(|e| anyhow::anyhow!(e))?;
            Box::new(ScriptedInput::new(samples))
        }
        None => Box::new(LineInput::new(io::stdin().lock(), config.keys.clone())),
    };

    let ansi = !args.plain && args.script.is_none() && io::stdout().is_terminal();
    let renderer = TerminalRenderer::new(io::stdout(), ansi);

    let host = HeadlessHost::new()
        .with_config_path(config_path.clone())
        .with_rom_loaded(args.rom_loaded);

    let mut session = MenuSession::new(MenuDriver::new(input, renderer), host, config);
    let run = session.run_and_save(&config_path);
    let saved = run
        .saved
        .with_context(|| format!("saving settings to {}", config_path.display()));

    let exit = match run.menu {
        Ok(exit) => Some(exit),
        Err(MenuError::InputClosed) => {
            log::info!("input closed, leaving menu");
            None
        }
        Err(e) => {
            if let Err(save_error) = &saved {
                log::error!("{:#}", save_error);
            }
            return Err(e).context("menu failed");
        }
    };
    saved?;

    match exit {
        Some(MainMenuExit::Resume) => println!("Resuming game"),
        Some(MainMenuExit::ReturnToLoader) => println!("Returning to loader"),
        Some(MainMenuExit::Reboot) => println!("Rebooting system"),
        None => {}
    }

    LogConfig::global().clear_log_file();
    Ok(())
}
