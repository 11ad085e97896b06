//! Calendar configuration loaded from TOML.
//!
//! ```toml
//! [settings]
//! weekStart = "sunday"
//! weekName = "starWeek"
//!
//! [workdays]
//! holidays = ["2024-05-01"]
//! additional_workdays = ["2024-04-28"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::CalendarResult;
use crate::models::settings::Settings;
use crate::services::workday::WorkdayTable;

const CONFIG_FILE: &str = "calendar.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub settings: Settings,
    pub workdays: WorkdayTable,
}

impl CalendarConfig {
    pub fn from_toml(content: &str) -> CalendarResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read the config at `path`.
    pub fn load(path: &Path) -> CalendarResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!(
            "Loaded calendar config from {} ({} holidays, {} additional workdays)",
            path.display(),
            config.workdays.holidays.len(),
            config.workdays.additional_workdays.len()
        );
        Ok(config)
    }

    /// Read the config at `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No calendar config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load calendar config: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Default config location in the user's config directory.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "CalendarLayout", "CalendarLayout") {
            dirs.config_dir().join(CONFIG_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for config");
            PathBuf::from(CONFIG_FILE)
        }
    }
}
