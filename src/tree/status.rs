//! Status extraction helpers
//!
//! Best-effort reads of status fields from live objects. A field that is
//! missing or has an unexpected shape yields an empty summary.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::ValuePath;

/// Summary for requests and instances
///
/// Uses the last entry of `status.conditions` as `status/reason`. Objects
/// without conditions fall back to `status.phase`.
pub fn conditions_summary(obj: &Value) -> String {
    match last_condition(obj) {
        Some(condition) => join_parts(
            condition.str_at(&["status"]),
            condition.str_at(&["reason"]),
        ),
        None => join_parts(obj.str_at(&["status", "phase"]), None),
    }
}

/// Summary for ClusterServiceVersions: `phase/reason`
///
/// The last listed condition wins; without conditions the top-level
/// `status.phase` and `status.reason` are used.
pub fn version_summary(obj: &Value) -> String {
    match last_condition(obj) {
        Some(condition) => join_parts(
            condition.str_at(&["phase"]),
            condition.str_at(&["reason"]),
        ),
        None => join_parts(
            obj.str_at(&["status", "phase"]),
            obj.str_at(&["status", "reason"]),
        ),
    }
}

/// Raw `status.state` of a Subscription
pub fn subscription_state(obj: &Value) -> String {
    obj.str_at(&["status", "state"]).unwrap_or_default().to_string()
}

/// Name of the installed ClusterServiceVersion, if one is recorded
pub fn installed_version(obj: &Value) -> Option<&str> {
    obj.str_at(&["status", "installedCSV"])
        .filter(|name| !name.is_empty())
}

/// `metadata.creationTimestamp`
pub fn creation_timestamp(obj: &Value) -> Option<DateTime<Utc>> {
    obj.str_at(&["metadata", "creationTimestamp"])
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|ts| ts.with_timezone(&Utc))
}

fn last_condition(obj: &Value) -> Option<&Value> {
    obj.array_at(&["status", "conditions"])
        .and_then(|conditions| conditions.last())
}

fn join_parts(first: Option<&str>, second: Option<&str>) -> String {
    let first = first.filter(|s| !s.is_empty());
    let second = second.filter(|s| !s.is_empty());
    match (first, second) {
        (Some(a), Some(b)) => format!("{}/{}", a, b),
        (Some(a), None) | (None, Some(a)) => a.to_string(),
        (None, None) => String::new(),
    }
}
