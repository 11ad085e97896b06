//! Festival lookup by solar or lunar month/day.

use std::collections::HashMap;

/// Resolves festival titles for month/day pairs.
pub trait FestivalLookup {
    /// Title of the Gregorian festival on `month`/`day`, if any.
    fn lookup_solar(&self, month: u32, day: u32) -> Option<&str>;

    /// Title of the lunar festival on `lunar_month`/`lunar_day`, if any.
    fn lookup_lunar(&self, lunar_month: u32, lunar_day: u32) -> Option<&str>;

    /// Solar festival first, then the lunar one, else an empty string.
    fn festival_name(&self, month: u32, day: u32, lunar: Option<(u32, u32)>) -> String {
        if let Some(title) = self.lookup_solar(month, day) {
            return title.to_string();
        }
        lunar
            .and_then(|(lunar_month, lunar_day)| self.lookup_lunar(lunar_month, lunar_day))
            .map(str::to_string)
            .unwrap_or_default()
    }
}

const SOLAR_FESTIVALS: &[(u32, u32, &str)] = &[
    (1, 1, "元旦节"),
    (2, 14, "情人节"),
    (3, 8, "妇女节"),
    (3, 12, "植树节"),
    (4, 1, "愚人节"),
    (4, 4, "清明节"),
    (5, 1, "劳动节"),
    (5, 4, "青年节"),
    (5, 12, "护士节"),
    (6, 1, "儿童节"),
    (7, 1, "建党节"),
    (8, 1, "建军节"),
    (9, 10, "教师节"),
    (10, 1, "国庆节"),
    (12, 24, "平安夜"),
    (12, 25, "圣诞节"),
];

const LUNAR_FESTIVALS: &[(u32, u32, &str)] = &[
    (1, 1, "春节"),
    (1, 15, "元宵节"),
    (2, 2, "龙抬头"),
    (5, 5, "端午节"),
    (7, 7, "七夕节"),
    (7, 15, "中元节"),
    (8, 15, "中秋节"),
    (9, 9, "重阳节"),
    (10, 1, "寒衣节"),
    (10, 15, "下元节"),
    (12, 8, "腊八节"),
    (12, 23, "北方小年"),
    (12, 24, "南方小年"),
    (12, 30, "除夕"),
];

/// Table-backed festival lookup.
#[derive(Debug, Clone, Default)]
pub struct FestivalTable {
    solar: HashMap<(u32, u32), String>,
    lunar: HashMap<(u32, u32), String>,
}

impl FestivalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in Chinese solar and lunar festivals.
    pub fn chinese() -> Self {
        let mut table = Self::new();
        for &(month, day, title) in SOLAR_FESTIVALS {
            table.insert_solar(month, day, title);
        }
        for &(month, day, title) in LUNAR_FESTIVALS {
            table.insert_lunar(month, day, title);
        }
        table
    }

    pub fn insert_solar(&mut self, month: u32, day: u32, title: impl Into<String>) {
        self.solar.insert((month, day), title.into());
    }

    pub fn insert_lunar(&mut self, lunar_month: u32, lunar_day: u32, title: impl Into<String>) {
        self.lunar.insert((lunar_month, lunar_day), title.into());
    }
}

impl FestivalLookup for FestivalTable {
    fn lookup_solar(&self, month: u32, day: u32) -> Option<&str> {
        self.solar
            .get(&(month, day))
            .map(String::as_str)
            .filter(|title| !title.is_empty())
    }

    fn lookup_lunar(&self, lunar_month: u32, lunar_day: u32) -> Option<&str> {
        self.lunar
            .get(&(lunar_month, lunar_day))
            .map(String::as_str)
            .filter(|title| !title.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_festival_takes_priority() {
        let table = FestivalTable::chinese();
        // National Day coincides with the lunar 寒衣节 key
        assert_eq!(table.festival_name(10, 1, Some((10, 1))), "国庆节");
    }

    #[test]
    fn test_lunar_festival_used_without_solar() {
        let table = FestivalTable::chinese();
        assert_eq!(table.festival_name(2, 10, Some((1, 1))), "春节");
    }

    #[test]
    fn test_no_festival_is_empty() {
        let table = FestivalTable::chinese();
        assert_eq!(table.festival_name(3, 3, Some((2, 3))), "");
        assert_eq!(table.festival_name(3, 3, None), "");
    }

    #[test]
    fn test_empty_titles_are_ignored() {
        let mut table = FestivalTable::new();
        table.insert_solar(6, 6, "");
        table.insert_lunar(5, 1, "Custom");
        assert_eq!(table.festival_name(6, 6, Some((5, 1))), "Custom");
    }
}
