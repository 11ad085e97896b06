// Settings module
// Month view preferences

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Number of leading cells before `first` in a row that starts on this day.
    pub fn offset_of(self, first: Weekday) -> u32 {
        match self {
            WeekStart::Monday => first.num_days_from_monday(),
            WeekStart::Sunday => first.num_days_from_sunday(),
        }
    }
}

impl std::str::FromStr for WeekStart {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            other => Err(format!("Unknown week start '{}'", other)),
        }
    }
}

/// How weekday headers are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeekNameStyle {
    /// 周一 … 周日
    #[default]
    Week,
    /// 星期一 … 星期日
    StarWeek,
}

impl WeekNameStyle {
    fn prefix(self) -> &'static str {
        match self {
            WeekNameStyle::Week => "周",
            WeekNameStyle::StarWeek => "星期",
        }
    }
}

const WEEKDAY_NAMES: [&str; 7] = ["一", "二", "三", "四", "五", "六", "日"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub week_start: WeekStart,
    pub week_name: WeekNameStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Monday,
            week_name: WeekNameStyle::Week,
        }
    }
}

impl Settings {
    /// Header labels for the seven grid columns, in column order.
    pub fn weekday_labels(&self) -> Vec<String> {
        let prefix = self.week_name.prefix();
        let mut names: Vec<&str> = WEEKDAY_NAMES.to_vec();
        if self.week_start == WeekStart::Sunday {
            names.rotate_right(1);
        }
        names
            .into_iter()
            .map(|name| format!("{}{}", prefix, name))
            .collect()
    }
}
