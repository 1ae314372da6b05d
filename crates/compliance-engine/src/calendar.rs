use chrono::{Datelike, NaiveDate};

/// Month (1-based) on which a new edition of the rent-reference tables takes effect
pub const REFERENCE_CUTOVER_MONTH: u32 = 7;

/// Earliest edition of the rent-reference tables
pub const EARLIEST_REFERENCE_YEAR: i32 = 2019;

/// Calendar date from which a statutory rule applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl EffectiveDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// True if `date` falls on or after this effective date
    pub fn is_reached_by(&self, date: NaiveDate) -> bool {
        (date.year(), date.month(), date.day()) >= (self.year, self.month, self.day)
    }
}

/// Edition of the rent-reference tables applicable to a lease starting on `start`.
///
/// A lease signed between July 1st of year N and June 30th of year N+1 uses
/// edition N. Leases older than the first published edition use that edition.
pub fn determine_reference_year(start: NaiveDate) -> i32 {
    let year = if start.month() >= REFERENCE_CUTOVER_MONTH {
        start.year()
    } else {
        start.year() - 1
    };

    year.max(EARLIEST_REFERENCE_YEAR)
}
