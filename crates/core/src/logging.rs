//! Logging for the menu engine and the screens built on it.
//!
//! # Architecture
//!
//! - **LogConfig**: process-wide configuration stored in atomics
//! - **LogLevel**: Off < Error < Warn < Info < Debug < Trace
//! - **LogCategory**: Input, Navigation, Render, Config, Host
//! - **log()**: lazily formats and writes a message when its category is enabled
//!
//! A category with its own level ignores the global level; a category left
//! at `Off` falls back to the global level. Each category is rate limited
//! over a one second sliding window so a held button cannot flood the
//! output. Messages go to stderr, or to a file written by a background
//! thread once [`LogConfig::set_log_file`] has been called.
//!
//! ```rust
//! use menu_core::logging::{log, LogCategory, LogLevel};
//!
//! log(LogCategory::Navigation, LogLevel::Debug, || {
//!     format!("selection moved to {}", 3)
//! });
//! ```

use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Sender};
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

/// Verbosity of a message or a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    fn from_u8(val: u8) -> Self {
        match val {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Off,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Case-insensitive name or digit
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" | "0" => Ok(LogLevel::Off),
            "error" | "err" | "1" => Ok(LogLevel::Error),
            "warn" | "warning" | "2" => Ok(LogLevel::Warn),
            "info" | "3" => Ok(LogLevel::Info),
            "debug" | "4" => Ok(LogLevel::Debug),
            "trace" | "5" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Area of the front-end a message comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    /// Raw button samples
    Input,
    /// Screen entry/exit, selection and outcomes
    Navigation,
    /// Frame output
    Render,
    /// Settings changes and persistence
    Config,
    /// Calls into the emulator host
    Host,
}

impl LogCategory {
    pub const ALL: [LogCategory; 5] = [
        LogCategory::Input,
        LogCategory::Navigation,
        LogCategory::Render,
        LogCategory::Config,
        LogCategory::Host,
    ];

    const COUNT: usize = Self::ALL.len();

    fn index(self) -> usize {
        match self {
            LogCategory::Input => 0,
            LogCategory::Navigation => 1,
            LogCategory::Render => 2,
            LogCategory::Config => 3,
            LogCategory::Host => 4,
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panic while logging must not take logging down for everyone else
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
struct Window {
    stamps: VecDeque<Instant>,
    dropped: usize,
}

/// Sliding one-second window per category
struct RateLimiter {
    max_per_second: AtomicUsize,
    window: Duration,
    windows: Mutex<[Window; LogCategory::COUNT]>,
}

impl RateLimiter {
    fn new(max_per_second: usize) -> Self {
        Self {
            max_per_second: AtomicUsize::new(max_per_second),
            window: Duration::from_secs(1),
            windows: Mutex::new(Default::default()),
        }
    }

    /// Returns whether the message may be written, plus the number of
    /// messages dropped since the last one that got through.
    fn admit(&self, category: LogCategory) -> (bool, Option<usize>) {
        let now = Instant::now();
        let mut windows = lock(&self.windows);
        let w = &mut windows[category.index()];

        while let Some(&front) = w.stamps.front() {
            if now.duration_since(front) > self.window {
                w.stamps.pop_front();
            } else {
                break;
            }
        }

        if w.stamps.len() < self.max_per_second.load(Ordering::Relaxed) {
            w.stamps.push_back(now);
            let dropped = std::mem::take(&mut w.dropped);
            (true, (dropped > 0).then_some(dropped))
        } else {
            w.dropped += 1;
            (false, None)
        }
    }
}

/// Global logging configuration
pub struct LogConfig {
    global_level: AtomicU8,
    levels: [AtomicU8; LogCategory::COUNT],
    file_sender: Mutex<Option<Sender<String>>>,
    file_enabled: AtomicBool,
    limiter: RateLimiter,
}

impl LogConfig {
    /// Everything off, 60 messages per second per category
    fn new() -> Self {
        Self {
            global_level: AtomicU8::new(LogLevel::Off as u8),
            levels: Default::default(),
            file_sender: Mutex::new(None),
            file_enabled: AtomicBool::new(false),
            limiter: RateLimiter::new(60),
        }
    }

    /// Process-wide instance
    pub fn global() -> &'static Self {
        static INSTANCE: OnceLock<LogConfig> = OnceLock::new();
        INSTANCE.get_or_init(LogConfig::new)
    }

    pub fn set_global_level(&self, level: LogLevel) {
        self.global_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn global_level(&self) -> LogLevel {
        LogLevel::from_u8(self.global_level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, category: LogCategory, level: LogLevel) {
        self.levels[category.index()].store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self, category: LogCategory) -> LogLevel {
        LogLevel::from_u8(self.levels[category.index()].load(Ordering::Relaxed))
    }

    /// Whether a `level` message in `category` passes the configured levels
    pub fn should_log(&self, category: LogCategory, level: LogLevel) -> bool {
        if level == LogLevel::Off {
            return false;
        }
        match self.level(category) {
            LogLevel::Off => level <= self.global_level(),
            threshold => level <= threshold,
        }
    }

    /// Turn everything back off
    pub fn reset(&self) {
        self.set_global_level(LogLevel::Off);
        for category in LogCategory::ALL {
            self.set_level(category, LogLevel::Off);
        }
    }

    pub fn set_rate_limit(&self, max_per_second: usize) {
        self.limiter
            .max_per_second
            .store(max_per_second, Ordering::Relaxed);
    }

    pub fn rate_limit(&self) -> usize {
        self.limiter.max_per_second.load(Ordering::Relaxed)
    }

    /// Append messages to `path` from a background writer thread.
    ///
    /// Replaces any previous log file; the old writer exits once its
    /// sender is dropped.
    pub fn set_log_file(&self, path: PathBuf) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let (sender, receiver) = channel::<String>();

        thread::Builder::new()
            .name("menu-log-writer".to_string())
            .spawn(move || {
                while let Ok(message) = receiver.recv() {
                    let _ = writeln!(file, "{}", message);
                    let _ = file.flush();
                }
            })?;

        *lock(&self.file_sender) = Some(sender);
        self.file_enabled.store(true, Ordering::Relaxed);
        Ok(())
    }

    /// Stop writing to the log file and go back to stderr
    pub fn clear_log_file(&self) {
        *lock(&self.file_sender) = None;
        self.file_enabled.store(false, Ordering::Relaxed);
    }

    fn write_message(&self, message: String) {
        if self.file_enabled.load(Ordering::Relaxed) {
            if let Some(sender) = lock(&self.file_sender).as_ref() {
                // Writer thread gone: fall back to stderr
                if let Err(unsent) = sender.send(message) {
                    eprintln!("{}", unsent.0);
                }
                return;
            }
        }
        eprintln!("{}", message);
    }
}

/// Log a lazily built message.
///
/// `message_fn` only runs when the category and level are enabled and the
/// category is under its rate limit.
pub fn log<F>(category: LogCategory, level: LogLevel, message_fn: F)
where
    F: FnOnce() -> String,
{
    let config = LogConfig::global();
    if !config.should_log(category, level) {
        return;
    }

    let (allowed, dropped) = config.limiter.admit(category);
    if let Some(count) = dropped {
        config.write_message(format!(
            "[{:?}] rate limit exceeded, {} message(s) dropped",
            category, count
        ));
    }
    if allowed {
        config.write_message(format!("[{:?}] {}", category, message_fn()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("off".parse::<LogLevel>(), Ok(LogLevel::Off));
        assert_eq!("ERR".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert_eq!("Warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("3".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("TRACE".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Off < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_category_level_overrides_global() {
        let config = LogConfig::new();
        config.set_global_level(LogLevel::Error);
        config.set_level(LogCategory::Navigation, LogLevel::Debug);

        assert!(config.should_log(LogCategory::Navigation, LogLevel::Debug));
        assert!(!config.should_log(LogCategory::Navigation, LogLevel::Trace));

        // Input has no level of its own
        assert!(config.should_log(LogCategory::Input, LogLevel::Error));
        assert!(!config.should_log(LogCategory::Input, LogLevel::Warn));
    }

    #[test]
    fn test_off_messages_never_logged() {
        let config = LogConfig::new();
        config.set_global_level(LogLevel::Trace);
        assert!(!config.should_log(LogCategory::Config, LogLevel::Off));
    }

    #[test]
    fn test_reset() {
        let config = LogConfig::new();
        config.set_global_level(LogLevel::Trace);
        config.set_level(LogCategory::Host, LogLevel::Info);
        config.reset();
        assert_eq!(config.global_level(), LogLevel::Off);
        assert_eq!(config.level(LogCategory::Host), LogLevel::Off);
    }

    #[test]
    fn test_rate_limiter_per_category() {
        let limiter = RateLimiter::new(5);
        for _ in 0..5 {
            assert!(limiter.admit(LogCategory::Input).0);
        }
        assert!(!limiter.admit(LogCategory::Input).0);
        assert!(limiter.admit(LogCategory::Render).0);
    }

    #[test]
    fn test_rate_limiter_reports_dropped_after_window() {
        let limiter = RateLimiter::new(2);
        limiter.admit(LogCategory::Navigation);
        limiter.admit(LogCategory::Navigation);
        for _ in 0..4 {
            limiter.admit(LogCategory::Navigation);
        }

        std::thread::sleep(Duration::from_millis(1100));

        let (allowed, dropped) = limiter.admit(LogCategory::Navigation);
        assert!(allowed);
        assert_eq!(dropped, Some(4));
    }

    #[test]
    fn test_rate_limit_setting() {
        let config = LogConfig::new();
        assert_eq!(config.rate_limit(), 60);
        config.set_rate_limit(10);
        assert_eq!(config.rate_limit(), 10);
    }
}
