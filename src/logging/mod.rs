
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;
use strum_macros::Display;

/// Directory used for session logs when none is configured.
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum LogLevel {
    #[strum(to_string = "INFO")]
    Info,
    #[strum(to_string = "WARN")]
    Warn,
    #[strum(to_string = "ERROR")]
    Error,
}

/// Where a message goes. Warnings and errors reach stderr, info reaches stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

impl LogTarget {
    fn console(self) -> bool {
        matches!(self, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
    }

    fn file(self) -> bool {
        matches!(self, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
    }
}

trait LogSink: Send + Sync {
    fn write_line(&self, level: LogLevel, line: &str);
}

struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write_line(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Info => println!("{line}"),
            LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
        }
    }
}

struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    /// Opens `weekplan-<YYYYmmdd-HHMMSS>.log` under `dir`, creating the directory.
    fn open(dir: &Path) -> std::io::Result<(Self, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("weekplan-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((
            Self {
                file: Mutex::new(file),
            },
            path,
        ))
    }
}

impl LogSink for FileSink {
    fn write_line(&self, _level: LogLevel, line: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }
}

/// Lazily opened session file; the first file-bound message creates it.
struct SessionFile {
    dir: PathBuf,
    opened: Option<(Arc<dyn LogSink>, PathBuf)>,
    failed: bool,
}

impl SessionFile {
    fn sink(&mut self) -> Option<Arc<dyn LogSink>> {
        if let Some((sink, _)) = &self.opened {
            return Some(sink.clone());
        }
        if self.failed {
            return None;
        }
        match FileSink::open(&self.dir) {
            Ok((sink, path)) => {
                let sink: Arc<dyn LogSink> = Arc::new(sink);
                self.opened = Some((sink.clone(), path));
                Some(sink)
            }
            Err(err) => {
                self.failed = true;
                eprintln!("WARN: Could not open a log file in {}; file logging is off. ({err})", self.dir.display());
                None
            }
        }
    }
}

/// Session logger shared by the REPL, the planner observer and the command handlers.
#[derive(Clone)]
pub struct Logger {
    console: Option<Arc<dyn LogSink>>,
    session_file: Arc<Mutex<SessionFile>>,
    file_enabled: Arc<AtomicBool>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::with_dir(DEFAULT_LOG_DIR)
    }

    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            console: Some(Arc::new(ConsoleSink)),
            session_file: Arc::new(Mutex::new(SessionFile {
                dir: dir.as_ref().to_path_buf(),
                opened: None,
                failed: false,
            })),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Logger that only writes to its session file.
    pub fn quiet(dir: impl AsRef<Path>) -> Self {
        Self {
            console: None,
            ..Self::with_dir(dir)
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target.console() {
            if let Some(console) = &self.console {
                console.write_line(level, message);
            }
        }
        if !target.file() || !self.file_logging_enabled() {
            return;
        }
        let sink = match self.session_file.lock() {
            Ok(mut file) => file.sink(),
            Err(_) => None,
        };
        if let Some(sink) = sink {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            sink.write_line(level, &format!("[{timestamp}] {level:<5} {message}"));
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Moves future log files to `dir`. Ignored once a file has been opened.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut file) = self.session_file.lock() {
            if file.opened.is_none() {
                file.dir = dir.as_ref().to_path_buf();
                file.failed = false;
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.session_file.lock().ok().map(|f| f.dir.clone())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.session_file
            .lock()
            .ok()
            .and_then(|f| f.opened.as_ref().map(|(_, path)| path.clone()))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("log_dir", &self.log_dir())
            .field("log_path", &self.log_path())
            .finish()
    }
}
