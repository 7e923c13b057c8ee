use serde::{Deserialize, Serialize};
use std::fmt;

/// An hours/minutes pair as typed into one of the form fields.
///
/// Values handed out by [`parse_time`] always carry minutes in `0..60`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    #[serde(rename = "h")]
    pub hours: u32,
    #[serde(rename = "m")]
    pub minutes: u32,
}

impl TimeValue {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTime {
    pub value: TimeValue,
    /// Set when the typed text had to be carried or clamped.
    pub normalized: bool,
}

/// Parses `"H:MM"`, `"H:M"` or a bare minute count.
///
/// Anything unreadable is zero. Out-of-range minutes are carried into hours,
/// negative totals are clamped to `00:00`.
pub fn parse_time(raw: &str) -> ParsedTime {
    let raw = raw.trim();

    let (mut hours, mut minutes) = match raw.split_once(':') {
        Some((hh, rest)) => {
            let mm = rest.split(':').next().unwrap_or("0");
            (leading_int(hh), leading_int(mm))
        }
        None => (0, leading_int(raw)),
    };
    let mut normalized = false;

    if !(0..60).contains(&minutes) {
        let total = hours.saturating_mul(60).saturating_add(minutes);
        if total >= 0 {
            hours = total / 60;
            minutes = total % 60;
        } else {
            hours = 0;
            minutes = 0;
        }
        normalized = true;
    }
    if hours < 0 {
        hours = 0;
        normalized = true;
    }

    ParsedTime {
        value: TimeValue {
            hours: u32::try_from(hours).unwrap_or(u32::MAX),
            minutes: minutes as u32,
        },
        normalized,
    }
}

// Lenient read: optional sign, then the leading run of digits. Zero if none.
fn leading_int(part: &str) -> i64 {
    let s = part.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(h: u32, m: u32, normalized: bool) -> ParsedTime {
        ParsedTime {
            value: TimeValue::new(h, m),
            normalized,
        }
    }

    #[test]
    fn in_range_values_parse_unchanged() {
        for h in 0..30 {
            for m in 0..60 {
                assert_eq!(parse_time(&format!("{}:{:02}", h, m)), parsed(h, m, false));
            }
        }
    }

    #[test]
    fn single_digit_minutes_are_accepted() {
        assert_eq!(parse_time("7:5"), parsed(7, 5, false));
        assert_eq!(parse_time("7:"), parsed(7, 0, false));
    }

    #[test]
    fn minutes_past_sixty_carry_into_hours() {
        for h in 0..10 {
            for m in 60..400 {
                assert_eq!(
                    parse_time(&format!("{}:{}", h, m)),
                    parsed(h + m / 60, m % 60, true)
                );
            }
        }
        assert_eq!(parse_time("9:75"), parsed(10, 15, true));
    }

    #[test]
    fn negative_totals_clamp_to_zero() {
        assert_eq!(parse_time("-5"), parsed(0, 0, true));
        assert_eq!(parse_time("1:-90"), parsed(0, 0, true));
        assert_eq!(parse_time("-3:-1"), parsed(0, 0, true));
    }

    #[test]
    fn negative_hours_with_valid_minutes_keep_minutes() {
        assert_eq!(parse_time("-1:30"), parsed(0, 30, true));
    }

    #[test]
    fn negative_minutes_borrow_from_hours() {
        assert_eq!(parse_time("2:-30"), parsed(1, 30, true));
    }

    #[test]
    fn unreadable_input_is_zero_without_flag() {
        for raw in ["", "   ", "abc", ":", "x:y", "--"] {
            assert_eq!(parse_time(raw), parsed(0, 0, false), "input {:?}", raw);
        }
    }

    #[test]
    fn bare_number_is_minutes() {
        assert_eq!(parse_time("9"), parsed(0, 9, false));
        assert_eq!(parse_time("90"), parsed(1, 30, true));
    }

    #[test]
    fn trailing_garbage_and_whitespace_are_ignored() {
        assert_eq!(parse_time("  8:15  "), parsed(8, 15, false));
        assert_eq!(parse_time("8h:15min"), parsed(8, 15, false));
        assert_eq!(parse_time("8:15:59"), parsed(8, 15, false));
        assert_eq!(parse_time("8: 15"), parsed(8, 15, false));
    }

    #[test]
    fn formatted_values_reparse_identically() {
        for raw in ["9:75", "0:0", "23:59", "100:5", "-5", "125", "1:-1"] {
            let first = parse_time(raw);
            let again = parse_time(&first.value.to_string());
            assert_eq!(again.value, first.value);
            assert!(!again.normalized);
        }
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeValue::new(7, 5).to_string(), "07:05");
        assert_eq!(TimeValue::new(123, 0).to_string(), "123:00");
    }

    #[test]
    fn serializes_as_h_and_m() {
        let json = serde_json::to_string(&TimeValue::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"h":1,"m":2}"#);
    }
}
