//! Month arithmetic and the window of browsable monthly archives.
//!
//! All month boundaries are computed on the UTC calendar. "Now" is always
//! passed in by the caller (see [`Clock`]) so the valid window can be
//! recomputed, and tested, at any instant.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// English month names, indexed by `month - 1`.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// November 2021, the month of the first hiring discussion.
pub const EPOCH: Month = Month {
    year: 2021,
    month: 11,
};

/// A calendar month with no day or time component.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month from a year and a 1-based month number.
    ///
    /// Returns `None` if `month` is outside `1..=12` or the year is outside
    /// the range chrono can represent.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// Truncate any date or date-time to its month.
    #[must_use]
    pub fn normalize<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// 1-based month number.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Full English month name, e.g. `"November"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// The 1st of the month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MAX)
    }

    /// Midnight at the start of the month.
    #[must_use]
    pub fn start(self) -> NaiveDateTime {
        self.first_day().and_time(NaiveTime::MIN)
    }

    /// The following month.
    #[must_use]
    pub const fn succ(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month.
    #[must_use]
    pub const fn pred(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Number of months from `self` to `other` (negative if `other` is earlier).
    #[must_use]
    pub fn months_until(self, other: Self) -> i64 {
        (i64::from(other.year) - i64::from(self.year)) * 12 + i64::from(other.month)
            - i64::from(self.month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_display(*self, false))
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[must_use]
pub fn is_above_epoch(month: Month) -> bool {
    month >= EPOCH
}

/// Whether the month starts strictly after `now`.
#[must_use]
pub fn is_future(month: Month, now: DateTime<Utc>) -> bool {
    month.start() > now.naive_utc()
}

/// Whether the month has a browsable archive at `now`.
#[must_use]
pub fn is_valid(month: Month, now: DateTime<Utc>) -> bool {
    is_above_epoch(month) && !is_future(month, now)
}

/// Every valid month from [`EPOCH`] through the month containing `now`,
/// oldest first.
///
/// Empty if `now` precedes the epoch.
#[must_use]
pub fn enumerate_valid_months(now: DateTime<Utc>) -> Vec<Month> {
    let mut months = Vec::new();
    let mut month = EPOCH;
    while is_valid(month, now) {
        months.push(month);
        month = month.succ();
    }
    months
}

/// Human-readable month label: `"November 2021"`, or `"Nov 2021"` when `short`.
#[must_use]
pub fn format_display(month: Month, short: bool) -> String {
    let name = month.name();
    let name = if short { &name[..3] } else { name };
    format!("{name} {}", month.year)
}

/// Canonical page path for a month, e.g. `/hiring/2021/november`.
#[must_use]
pub fn route_path(month: Month) -> String {
    format!("/hiring/{}/{}", month.year, month.name().to_lowercase())
}

/// A month parsed from route segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMonth {
    pub month: Month,
    /// Whether the segments were already in the form produced by [`route_path`].
    pub canonical: bool,
}

/// Parse the `{year}/{month}` segments of a board path.
///
/// The month may be a full or three-letter English name in any case, or a
/// zero-based number in `0..=11` as used by older board links. Anything else
/// yields `None`.
#[must_use]
pub fn parse_route(year: &str, month: &str) -> Option<RouteMonth> {
    let year_num: i32 = year.parse().ok()?;

    let (month_num, canonical_month) = if let Ok(n) = month.parse::<u32>() {
        (n.checked_add(1)?, false)
    } else {
        let index = MONTH_NAMES.iter().position(|name| {
            name.eq_ignore_ascii_case(month) || name[..3].eq_ignore_ascii_case(month)
        })?;
        let canonical = MONTH_NAMES[index].to_lowercase() == month;
        (index as u32 + 1, canonical)
    };

    let parsed = Month::new(year_num, month_num)?;
    Some(RouteMonth {
        month: parsed,
        canonical: canonical_month && year == year_num.to_string(),
    })
}
