//! Operation-report payload shapes and shaped snooze events.
//!
//! The platform logs every snooze/unsnooze as an operation report whose
//! `snooze` field maps PLUs to the details of that action. The analysis in
//! [`crate::analysis::snooze`] reshapes those reports into per-PLU events.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::id::Plu;

/// Action code carried by a snooze entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum SnoozeAction {
    /// The product was snoozed (code 1).
    Snooze,
    /// The product was unsnoozed (code 2).
    Unsnooze,
    /// Any other operation code the platform may emit.
    Other(i64),
}

impl From<i64> for SnoozeAction {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Snooze,
            2 => Self::Unsnooze,
            other => Self::Other(other),
        }
    }
}

impl From<SnoozeAction> for i64 {
    fn from(action: SnoozeAction) -> Self {
        match action {
            SnoozeAction::Snooze => 1,
            SnoozeAction::Unsnooze => 2,
            SnoozeAction::Other(code) => code,
        }
    }
}

/// The user recorded on an operation report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportUser {
    /// User ID, empty for system-generated reports.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: Option<String>,
}

/// Snooze details for one PLU within an operation report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnoozeEntry {
    /// When the snooze takes effect.
    #[serde(rename = "snoozeStart")]
    pub snooze_start: Option<DateTime<Utc>>,
    /// When the snooze expires.
    #[serde(rename = "snoozeEnd")]
    pub snooze_end: Option<DateTime<Utc>>,
    /// Action code: 1 = snooze, 2 = unsnooze.
    pub action: Option<SnoozeAction>,
    /// Identifier correlating snooze and unsnooze pairs.
    #[serde(rename = "snoozeId")]
    pub snooze_id: Option<String>,
    /// Channel links the action applied to, as the platform sent them.
    #[serde(rename = "channelLinks", default)]
    pub channel_links: serde_json::Value,
    /// Product display name at the time of the action.
    pub name: Option<String>,
    /// The PLU the entry is keyed under, echoed in the entry body.
    pub plu: Option<Plu>,
}

/// A single operation report from the reports endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationReport {
    /// Entity ID of the report.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// When the report was created.
    #[serde(rename = "_created")]
    pub created: Option<DateTime<Utc>>,
    /// Numeric operation type.
    #[serde(rename = "operationType")]
    pub operation_type: Option<i64>,
    /// The user who triggered the operation, if any.
    pub user: Option<ReportUser>,
    /// Snooze details per PLU touched by this operation.
    #[serde(default)]
    pub snooze: HashMap<Plu, SnoozeEntry>,
}

/// Who triggered a snooze event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnoozeActor {
    /// User ID, empty for system actors.
    pub id: String,
    /// Display name, or a system actor label.
    pub name: String,
}

/// One shaped snooze/unsnooze event for a single PLU.
#[derive(Debug, Clone, Serialize)]
pub struct SnoozeEvent {
    /// The operation report the event came from.
    pub report_id: String,
    /// The PLU the event applies to.
    pub plu: Plu,
    /// Product display name at the time of the action.
    pub name: String,
    /// What happened.
    pub action: Option<SnoozeAction>,
    /// Identifier correlating snooze and unsnooze pairs.
    pub snooze_id: Option<String>,
    /// When the snooze takes effect.
    pub snooze_start: Option<DateTime<Utc>>,
    /// When the snooze expires.
    pub snooze_end: Option<DateTime<Utc>>,
    /// Channel links the action applied to.
    pub channels: serde_json::Value,
    /// Who triggered the event.
    pub actor: SnoozeActor,
    /// When the report was created.
    pub created: Option<DateTime<Utc>>,
}

/// UTC time window used to bound an operation-report query.
///
/// The fetch collaborator passes `start`/`stop` into the reports endpoint's
/// `_created` filter; the window itself performs no I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportWindow {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Exclusive upper bound.
    pub stop: DateTime<Utc>,
}

impl ReportWindow {
    /// Window covering the last `weeks` weeks, ending now.
    #[must_use]
    pub fn weeks_back(weeks: i64) -> Self {
        Self::weeks_before(Utc::now(), weeks)
    }

    /// Window covering `weeks` weeks ending at `stop`.
    #[must_use]
    pub fn weeks_before(stop: DateTime<Utc>, weeks: i64) -> Self {
        Self {
            start: stop - Duration::weeks(weeks),
            stop,
        }
    }

    /// True when `at` falls inside the window.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_upstream_report_shape() {
        let json = r#"{
            "_id": "op1",
            "_created": "2026-08-20T09:15:00Z",
            "operationType": 15,
            "user": {"id": "u1", "name": "Store Manager"},
            "snooze": {
                "123": {
                    "snoozeStart": "2026-08-20T09:15:00Z",
                    "snoozeEnd": "2026-08-21T00:00:00Z",
                    "action": 1,
                    "snoozeId": "sn-9",
                    "channelLinks": {"cl1": true},
                    "name": "Cola",
                    "plu": "123"
                }
            }
        }"#;
        let report: OperationReport = serde_json::from_str(json).expect("deserializes");
        assert_eq!(report.id, "op1");
        assert_eq!(report.operation_type, Some(15));
        let entry = report.snooze.get(&Plu::new("123")).expect("entry for plu");
        assert_eq!(entry.action, Some(SnoozeAction::Snooze));
        assert_eq!(entry.snooze_id.as_deref(), Some("sn-9"));
    }

    #[test]
    fn test_unknown_action_codes_are_preserved() {
        let action: SnoozeAction = serde_json::from_str("7").expect("deserializes");
        assert_eq!(action, SnoozeAction::Other(7));
        assert_eq!(serde_json::to_string(&action).expect("serializes"), "7");
    }

    #[test]
    fn test_report_window_bounds() {
        let stop = "2026-08-24T12:00:00Z"
            .parse::<DateTime<Utc>>()
            .expect("valid timestamp");
        let window = ReportWindow::weeks_before(stop, 1);
        assert_eq!(window.stop - window.start, Duration::weeks(1));
        assert!(window.contains(stop - Duration::days(3)));
        assert!(!window.contains(stop));
        assert!(!window.contains(stop - Duration::weeks(2)));
    }
}
