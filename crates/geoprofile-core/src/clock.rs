// crates/geoprofile-core/src/clock.rs

//! Local time per time zone.
//!
//! The country directory lists zones as fixed offsets (`UTC`, `UTC+05:30`);
//! IANA names (`Europe/Paris`) are accepted as well.

use crate::model::ZoneClock;
use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const TIMEZONE_UNAVAILABLE: &str = "Timezone data not available.";

/// Converts `now` into `zone`. Conversion failure leaves `local_time` empty.
pub fn render_zone(zone: &str, now: DateTime<Utc>) -> ZoneClock {
    let trimmed = zone.trim();
    let local_time = if let Some(offset) = parse_utc_offset(trimmed) {
        Some(now.with_timezone(&offset).format(TIME_FORMAT).to_string())
    } else {
        trimmed
            .parse::<Tz>()
            .ok()
            .map(|tz| now.with_timezone(&tz).format(TIME_FORMAT).to_string())
    };
    ZoneClock {
        zone: zone.to_string(),
        local_time,
    }
}

pub fn render_zones(zones: &[String], now: DateTime<Utc>) -> Vec<ZoneClock> {
    zones.iter().map(|z| render_zone(z, now)).collect()
}

/// `UTC`, `UTC+HH:MM`, `UTC-HH:MM` (also `GMT` and `±HH` without minutes).
fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    let rest = s.strip_prefix("UTC").or_else(|| s.strip_prefix("GMT"))?;
    if rest.is_empty() {
        return FixedOffset::east_opt(0);
    }
    let (sign, digits) = match rest.as_bytes().first()? {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };
    let (h, m) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None => (digits, "0"),
    };
    // Signs were consumed above; `i32::parse` would accept a second one.
    if ![h, m].iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    let hours: i32 = h.parse().ok()?;
    let minutes: i32 = m.parse().ok()?;
    if hours > 14 || minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
