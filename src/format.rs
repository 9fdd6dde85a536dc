//! Display Formatting
//!
//! Counter and timestamp formatting used by the blocks.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

/// Suffix appended to abbreviated counters
pub const WAN_SUFFIX: &str = "k";

/// Abbreviated large-number display
#[derive(Debug, Clone, PartialEq)]
pub enum WanDisplay {
    /// Undefined, zero or non-numeric input
    Empty,
    /// Value shown as-is
    Plain(String),
    /// `floor(value / 10000)`, rendered with [`WAN_SUFFIX`]
    Abbreviated(i64),
}

impl fmt::Display for WanDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WanDisplay::Empty => Ok(()),
            WanDisplay::Plain(s) => f.write_str(s),
            WanDisplay::Abbreviated(n) => write!(f, "{}{}", n, WAN_SUFFIX),
        }
    }
}

/// Abbreviate a counter: values above 10000 become `floor(v / 10000)` + `k`.
///
/// Only the active-user counter goes through this; new users use
/// [`format_thousands`].
pub fn format_wan(value: Option<f64>) -> WanDisplay {
    let v = match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => return WanDisplay::Empty,
    };
    if v > 10000.0 {
        WanDisplay::Abbreviated((v / 10000.0).floor() as i64)
    } else {
        WanDisplay::Plain(format_plain(v))
    }
}

/// Integer-valued floats print without a fractional part
fn format_plain(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Thousands-grouped integer (`0,0`); undefined or non-numeric input renders `0`
pub fn format_thousands(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() => v,
        _ => return "0".to_string(),
    };
    // round half up, like Math.round
    let rounded = (v + 0.5).floor() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// `YYYY-MM-DD HH:mm` in the given zone
pub fn format_timestamp_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    ts.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
}

/// `YYYY-MM-DD HH:mm` in local time
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    format_timestamp_in(ts, &chrono::Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_wan_examples() {
        assert_eq!(format_wan(Some(15000.0)), WanDisplay::Abbreviated(1));
        assert_eq!(format_wan(Some(15000.0)).to_string(), "1k");
        assert_eq!(format_wan(Some(9999.0)).to_string(), "9999");
        assert_eq!(format_wan(Some(0.0)).to_string(), "");
    }

    #[test]
    fn test_format_wan_degrades_to_empty() {
        assert_eq!(format_wan(None), WanDisplay::Empty);
        assert_eq!(format_wan(Some(f64::NAN)), WanDisplay::Empty);
        assert_eq!(format_wan(Some(-0.0)), WanDisplay::Empty);
        assert_eq!(format_wan(Some(f64::INFINITY)), WanDisplay::Empty);
        assert_eq!(format_wan(Some(f64::NEG_INFINITY)), WanDisplay::Empty);
    }

    #[test]
    fn test_format_wan_boundaries() {
        // exactly 10000 is not abbreviated
        assert_eq!(format_wan(Some(10000.0)).to_string(), "10000");
        assert_eq!(format_wan(Some(10001.0)).to_string(), "1k");
        assert_eq!(format_wan(Some(199_999.0)).to_string(), "19k");
        assert_eq!(format_wan(Some(12.5)).to_string(), "12.5");
        assert_eq!(format_wan(Some(-20000.0)).to_string(), "-20000");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(Some(0.0)), "0");
        assert_eq!(format_thousands(Some(999.0)), "999");
        assert_eq!(format_thousands(Some(1000.0)), "1,000");
        assert_eq!(format_thousands(Some(1_234_567.0)), "1,234,567");
        assert_eq!(format_thousands(Some(1499.5)), "1,500");
        assert_eq!(format_thousands(Some(-1_234.0)), "-1,234");
        assert_eq!(format_thousands(None), "0");
        assert_eq!(format_thousands(Some(f64::NAN)), "0");
    }

    #[test]
    fn test_format_timestamp_in_zone() {
        let ts = DateTime::<Utc>::from_timestamp_millis(1_600_000_000_000).unwrap();
        assert_eq!(format_timestamp_in(&ts, &Utc), "2020-09-13 12:26");
        let plus8 = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(format_timestamp_in(&ts, &plus8), "2020-09-13 20:26");
    }
}
