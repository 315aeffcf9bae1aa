use chrono::{Datelike, NaiveDate, Utc};

/// Highest year that still renders as a four digit, string-comparable timestamp.
pub const MAX_YEAR: u32 = 9999;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid year")]
pub struct InvalidYear;

/// Parse a year path segment. Anything that is not a non-negative integer is rejected.
pub fn parse_year(segment: &str) -> Result<u32, InvalidYear> {
    segment.parse().map_err(|_| InvalidYear)
}

/// Inclusive `created_time` bounds for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearWindow {
    year: u32,
    start: String,
    end: String,
}

impl YearWindow {
    pub fn new(year: u32) -> Result<Self, InvalidYear> {
        if year == 0 || year > MAX_YEAR {
            return Err(InvalidYear);
        }
        Ok(Self {
            year,
            start: format!("{year:04}-01-01T00:00:00Z"),
            end: format!("{year:04}-12-31T23:59:59Z"),
        })
    }

    /// Window for the requested year, where `None` or `0` means the year `today` falls in.
    pub fn resolve(requested: Option<u32>, today: NaiveDate) -> Result<Self, InvalidYear> {
        match requested {
            Some(year) if year != 0 => Self::new(year),
            _ => {
                let current = u32::try_from(today.year()).map_err(|_| InvalidYear)?;
                Self::new(current)
            }
        }
    }

    pub fn for_request(requested: Option<u32>) -> Result<Self, InvalidYear> {
        Self::resolve(requested, Utc::now().date_naive())
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn contains(&self, created_time: &str) -> bool {
        self.start.as_str() <= created_time && created_time <= self.end.as_str()
    }

    pub fn starts_after(&self, created_time: &str) -> bool {
        created_time < self.start.as_str()
    }
}
