//! Resource age formatting

use chrono::{DateTime, Duration, Utc};

/// Placeholder for objects without a creation timestamp
pub const UNKNOWN_AGE: &str = "<unknown>";

/// Elapsed time since creation, clamped at zero
pub fn age(created: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (now - created).max(Duration::zero())
}

/// Age column text for an optional creation timestamp
pub fn format_age(created: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match created {
        Some(created) => human_duration(age(created, now)),
        None => UNKNOWN_AGE.to_string(),
    }
}

/// Short human readable duration in the style kubectl prints ages
pub fn human_duration(d: Duration) -> String {
    let seconds = d.num_seconds().max(0);
    if seconds < 60 * 2 {
        return format!("{}s", seconds);
    }

    let minutes = seconds / 60;
    if minutes < 10 {
        let s = seconds % 60;
        if s == 0 {
            return format!("{}m", minutes);
        }
        return format!("{}m{}s", minutes, s);
    } else if minutes < 60 * 3 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 8 {
        let m = minutes % 60;
        if m == 0 {
            return format!("{}h", hours);
        }
        return format!("{}h{}m", hours, m);
    } else if hours < 48 {
        return format!("{}h", hours);
    } else if hours < 24 * 8 {
        let h = hours % 24;
        if h == 0 {
            return format!("{}d", hours / 24);
        }
        return format!("{}d{}h", hours / 24, h);
    } else if hours < 24 * 365 * 2 {
        return format!("{}d", hours / 24);
    } else if hours < 24 * 365 * 8 {
        let days = (hours / 24) % 365;
        if days == 0 {
            return format!("{}y", hours / 24 / 365);
        }
        return format!("{}y{}d", hours / 24 / 365, days);
    }

    format!("{}y", hours / 24 / 365)
}
