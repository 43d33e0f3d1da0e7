//! UTC calendar date with string parsing.

use std::fmt;
use std::str::FromStr;

use natal_time::UtcTime;
use serde::{Deserialize, Serialize};

use crate::error::NatalError;

/// A calendar date and time of day, UTC unless passed as a local time.
///
/// Parses from `YYYY-MM-DDThh:mm`, optionally followed by `:ss`, fractional
/// seconds and a trailing `Z`. A space may stand in for the `T`. Range
/// checks happen when the date is used, not when it is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub min: u32,
    pub sec: f64,
}

impl UtcDate {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            min,
            sec,
        }
    }
}

impl From<UtcDate> for UtcTime {
    fn from(d: UtcDate) -> Self {
        UtcTime::new(d.year, d.month, d.day, d.hour, d.min, d.sec)
    }
}

impl From<UtcTime> for UtcDate {
    fn from(t: UtcTime) -> Self {
        UtcDate::new(t.year, t.month, t.day, t.hour, t.minute, t.second)
    }
}

impl fmt::Display for UtcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
            self.year, self.month, self.day, self.hour, self.min, self.sec
        )
    }
}

fn parse_field<T: FromStr>(s: &str, name: &str, input: &str) -> Result<T, NatalError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(NatalError::DateParse(format!("invalid {name} '{s}' in '{input}'")));
    }
    s.parse()
        .map_err(|_| NatalError::DateParse(format!("invalid {name} '{s}' in '{input}'")))
}

impl FromStr for UtcDate {
    type Err = NatalError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = s
            .split_once(['T', ' '])
            .ok_or_else(|| NatalError::DateParse(format!("expected YYYY-MM-DDThh:mm, got '{input}'")))?;

        let date_parts: Vec<&str> = date.split('-').collect();
        let [year, month, day] = date_parts[..] else {
            return Err(NatalError::DateParse(format!("invalid date '{date}' in '{input}'")));
        };

        let time_parts: Vec<&str> = time.split(':').collect();
        let (hour, min, sec) = match time_parts[..] {
            [h, m] => (h, m, None),
            [h, m, s] => (h, m, Some(s)),
            _ => {
                return Err(NatalError::DateParse(format!(
                    "invalid time '{time}' in '{input}'"
                )));
            }
        };

        Ok(UtcDate {
            year: parse_field(year, "year", input)?,
            month: parse_field(month, "month", input)?,
            day: parse_field(day, "day", input)?,
            hour: parse_field(hour, "hour", input)?,
            min: parse_field(min, "minute", input)?,
            sec: match sec {
                Some(s) => parse_field(s, "second", input)?,
                None => 0.0,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full() {
        let d: UtcDate = "2024-03-20T12:30:45Z".parse().unwrap();
        assert_eq!(d, UtcDate::new(2024, 3, 20, 12, 30, 45.0));
    }

    #[test]
    fn parse_without_seconds_or_zone() {
        let d: UtcDate = "1982-08-18T16:54".parse().unwrap();
        assert_eq!(d, UtcDate::new(1982, 8, 18, 16, 54, 0.0));
    }

    #[test]
    fn parse_fractional_seconds_and_space() {
        let d: UtcDate = "2000-02-14 22:11:07.25".parse().unwrap();
        assert_eq!(d.sec, 7.25);
        assert_eq!(d.hour, 22);
    }

    #[test]
    fn out_of_range_parses_but_is_not_checked() {
        let d: UtcDate = "1990-13-01T00:00".parse().unwrap();
        assert_eq!(d.month, 13);
    }

    #[test]
    fn malformed_rejected() {
        for s in [
            "",
            "2024-03-20",
            "2024-03T12:00",
            "2024-03-20T12",
            "2024-03-20T12:00:00:00",
            "2024-0x-20T12:00",
            "2024-03-20T-1:00",
            "2024-03-20T12:00:1e3",
        ] {
            assert!(
                matches!(s.parse::<UtcDate>(), Err(NatalError::DateParse(_))),
                "accepted '{s}'"
            );
        }
    }

    #[test]
    fn display_format() {
        let d = UtcDate::new(2000, 2, 14, 22, 11, 0.0);
        assert_eq!(d.to_string(), "2000-02-14T22:11:00.000Z");
    }

    #[test]
    fn converts_to_utc_time() {
        let t: UtcTime = UtcDate::new(2000, 1, 1, 12, 0, 0.0).into();
        assert_eq!(t, UtcTime::new(2000, 1, 1, 12, 0, 0.0));
        assert_eq!(UtcDate::from(t), UtcDate::new(2000, 1, 1, 12, 0, 0.0));
    }
}
