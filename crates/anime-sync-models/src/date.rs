use serde::{Deserialize, Serialize};

/// Partial calendar date as AniList reports it: any component may be absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FuzzyDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl FuzzyDate {
    pub fn new(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    pub fn is_unknown(&self) -> bool {
        self.year.is_none()
    }

    /// `YYYY-MM-DD`, with missing month/day defaulted to 01.
    /// None when the year itself is unknown.
    pub fn iso_date(&self) -> Option<String> {
        let year = self.year?;
        Some(format!(
            "{:04}-{:02}-{:02}",
            year,
            self.month.unwrap_or(1),
            self.day.unwrap_or(1)
        ))
    }

    /// Ordering key where an unknown year sorts after every known date.
    pub fn sort_key(&self) -> (i32, u32, u32) {
        match self.year {
            Some(year) => (year, self.month.unwrap_or(1), self.day.unwrap_or(1)),
            None => (i32::MAX, u32::MAX, u32::MAX),
        }
    }
}
