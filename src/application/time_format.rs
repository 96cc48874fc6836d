// Time formatter - Human readable distances between build timestamps
use chrono::{DateTime, Datelike, Months, NaiveDateTime, TimeDelta, Utc};
use thiserror::Error;

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;
const MINUTES_IN_YEAR: i64 = 525600;

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("malformed timestamp '{value}'")]
    MalformedTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("estimate of {seconds}s from {start} is outside the supported date range")]
    OutOfRange { start: DateTime<Utc>, seconds: i64 },
}

#[derive(Debug, Clone, Copy)]
pub struct RelativeOptions {
    /// Use second-level wording for distances under two minutes
    pub include_seconds: bool,
    /// Append "ago" or prepend "in" depending on direction
    pub add_suffix: bool,
}

impl Default for RelativeOptions {
    fn default() -> Self {
        Self {
            include_seconds: true,
            add_suffix: true,
        }
    }
}

/// Parse a CI timestamp. Accepts RFC 3339, a naive ISO date-time (read as
/// UTC) and the compact `20170301T100000+0000` form.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TimeError> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_str(trimmed, "%Y%m%dT%H%M%S%z") {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|source| TimeError::MalformedTimestamp {
            value: value.to_string(),
            source,
        })
}

/// Strict distance between two instants, using the largest whole unit.
/// Example: "5 minutes", "2 hours", "45 seconds"
pub fn elapsed_between(start: DateTime<Utc>, finish: DateTime<Utc>) -> String {
    let seconds = (finish - start).num_seconds().abs();
    let minutes = seconds / 60;

    if minutes < 1 {
        units(seconds, "second")
    } else if minutes < 60 {
        units(minutes, "minute")
    } else if minutes < MINUTES_IN_DAY {
        units(minutes / 60, "hour")
    } else if minutes < MINUTES_IN_MONTH {
        units(minutes / MINUTES_IN_DAY, "day")
    } else if minutes < MINUTES_IN_YEAR {
        units(minutes / MINUTES_IN_MONTH, "month")
    } else {
        units(minutes / MINUTES_IN_YEAR, "year")
    }
}

/// Approximate distance from `now` to `instant`.
/// Example: "5 minutes ago", "in about 2 hours", "less than 10 seconds ago"
pub fn relative_to_now(
    instant: DateTime<Utc>,
    now: DateTime<Utc>,
    options: RelativeOptions,
) -> String {
    let is_future = instant > now;
    let (earlier, later) = if is_future { (now, instant) } else { (instant, now) };

    let distance = approximate_distance(earlier, later, options.include_seconds);

    if !options.add_suffix {
        distance
    } else if is_future {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

pub fn estimated_finish(
    start: DateTime<Utc>,
    estimated_total_seconds: i64,
) -> Result<DateTime<Utc>, TimeError> {
    TimeDelta::try_seconds(estimated_total_seconds)
        .and_then(|estimate| start.checked_add_signed(estimate))
        .ok_or(TimeError::OutOfRange {
            start,
            seconds: estimated_total_seconds,
        })
}

fn approximate_distance(
    earlier: DateTime<Utc>,
    later: DateTime<Utc>,
    include_seconds: bool,
) -> String {
    let seconds = (later - earlier).num_seconds();
    let minutes = rounded_div(seconds, 60);

    if minutes < 2 {
        return if include_seconds {
            match seconds {
                s if s < 5 => "less than 5 seconds".to_string(),
                s if s < 10 => "less than 10 seconds".to_string(),
                s if s < 20 => "less than 20 seconds".to_string(),
                s if s < 40 => "half a minute".to_string(),
                s if s < 60 => "less than a minute".to_string(),
                _ => units(1, "minute"),
            }
        } else if minutes == 0 {
            "less than a minute".to_string()
        } else {
            units(minutes, "minute")
        };
    }

    if minutes < 45 {
        units(minutes, "minute")
    } else if minutes < 90 {
        format!("about {}", units(1, "hour"))
    } else if minutes < MINUTES_IN_DAY {
        format!("about {}", units(rounded_div(minutes, 60), "hour"))
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        units(1, "day")
    } else if minutes < MINUTES_IN_MONTH {
        units(rounded_div(minutes, MINUTES_IN_DAY), "day")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        format!("about {}", units(rounded_div(minutes, MINUTES_IN_MONTH), "month"))
    } else {
        let months = calendar_months_between(earlier, later);
        if months < 12 {
            units(rounded_div(minutes, MINUTES_IN_MONTH), "month")
        } else {
            let years = months / 12;
            match months % 12 {
                r if r < 3 => format!("about {}", units(years, "year")),
                r if r < 9 => format!("over {}", units(years, "year")),
                _ => format!("almost {}", units(years + 1, "year")),
            }
        }
    }
}

/// Whole calendar months from `earlier` to `later`, not counting a partial last month
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());

    if months > 0 {
        let shifted = u32::try_from(months)
            .ok()
            .and_then(|m| earlier.checked_add_months(Months::new(m)));
        if shifted.is_some_and(|shifted| shifted > later) {
            months -= 1;
        }
    }
    months
}

// Round half up for non-negative values
fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

fn units(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
