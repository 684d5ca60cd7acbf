//! Selection set and extraction of the selected dates.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::SelectionError;

/// Identity of a calendar day, independent of time of day.
///
/// Ordering follows calendar order. Displays as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DateKey {
    /// Turn the key back into a date.
    pub fn to_date(self) -> Result<NaiveDate, SelectionError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| SelectionError::MalformedIdentity(self.to_string()))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(DateKey::from)
            .map_err(|_| SelectionError::MalformedIdentity(s.to_string()))
    }
}

/// Set of selected days with toggle semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: HashSet<DateKey>,
}

impl Selection {
    /// Add the day if absent, remove it otherwise.
    pub fn toggle(&mut self, date: NaiveDate) {
        let key = DateKey::from(date);
        if !self.keys.remove(&key) {
            self.keys.insert(key);
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.keys.contains(&DateKey::from(date))
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selected dates in ascending calendar order.
    ///
    /// Fails only if a stored key does not name a real day, which means the
    /// set was filled with something other than picker dates.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, SelectionError> {
        let mut dates = self
            .keys
            .iter()
            .map(|key| key.to_date())
            .collect::<Result<Vec<_>, _>>()?;
        dates.sort();
        dates.dedup();
        Ok(dates)
    }
}
