use crate::config::Config;
use crate::core::session::Session;
use crate::core::types::DayOfWeek;
use crate::errors::Result;
use crate::logging::Logger;
use crate::planner::{LoggerObserver, Planner};
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub session: Session,
    pub logger: Logger,
    /// Day targeted by `show`, `place`, `edit` and friends when none is given.
    pub selected_day: DayOfWeek,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub saves_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(
        config_path: PathBuf,
        saves_dir: PathBuf,
        logs_dir: PathBuf,
    ) -> Result<Self> {
        let config = Config::load_from(&config_path)?;
        let session = if config.seed_defaults() {
            Session::with_defaults()?
        } else {
            Session::new()
        };

        let logger = Logger::with_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            selected_day: config.default_day(),
            config,
            session,
            logger,
            startup_displayed: false,
            config_path,
            saves_dir,
            logs_dir,
        })
    }

    /// Planner over the session using the configured search window, logging every change.
    pub fn planner(&mut self) -> Result<Planner<'_>> {
        let window = self.config.slot_window()?;
        let observer = LoggerObserver {
            logger: self.logger.clone(),
        };
        Ok(Planner::new(&mut self.session, window).with_observer(Box::new(observer)))
    }

    /// `name` as given when it contains a path separator, otherwise inside the saves directory.
    pub fn resolve_save_path(&self, name: &str) -> PathBuf {
        let path = PathBuf::from(name);
        if path.components().count() > 1 || path.is_absolute() {
            path
        } else {
            self.saves_dir.join(path)
        }
    }
}
