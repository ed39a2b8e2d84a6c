//! Calendar month cursor.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// A calendar year-month, e.g. `2026-10`.
///
/// Backed by the first day of the month, so every value is a real calendar
/// month. Serialized as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// Build from a year and a 1-based month. Returns `None` for out-of-range values.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// The month containing `date`.
    pub fn from_date<D: Datelike>(date: D) -> Self {
        // day 1 always exists for a month that already has `date`
        let first_day = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .unwrap_or(NaiveDate::MIN);
        Self { first_day }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The following month, rolling December over into January.
    ///
    /// Saturates at the last month chrono can represent.
    pub fn succ(&self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }

    /// The preceding month, rolling January back into December.
    ///
    /// Saturates at the first month chrono can represent.
    pub fn pred(&self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }

    /// Whether `date` falls inside this month.
    pub fn contains<D: Datelike>(&self, date: D) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// French display label, e.g. `"octobre 2026"`.
    pub fn label_fr(&self) -> String {
        let name = MONTHS_FR[self.month0()];
        format!("{} {}", name, self.year())
    }

    fn month0(&self) -> usize {
        self.first_day.month0() as usize
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid year-month '{0}', expected YYYY-MM")]
pub struct ParseYearMonthError(pub String);

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseYearMonthError(s.to_string());
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        YearMonth::new(year, month).ok_or_else(err)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ParseYearMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
