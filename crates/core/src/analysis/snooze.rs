//! Per-PLU snooze history from operation reports.

use chrono::{DateTime, NaiveTime, Utc};

use crate::types::{OperationReport, Plu, SnoozeAction, SnoozeActor, SnoozeEntry, SnoozeEvent};

/// Actor label for reports carrying no user (platform-generated).
const DEFAULT_ACTOR: &str = "DELIVERECT";
/// Actor label for snoozes placed by the automated scheduler.
const SCHEDULER_ACTOR: &str = "QUEST";

/// Shape the reports touching `plu` into a chronological event list.
///
/// Reports that do not mention the PLU are dropped. Events sort ascending by
/// report creation time, with undated reports first. Scheduler-placed
/// snoozes are re-attributed to the QUEST actor: those always carry a
/// midnight-UTC expiry, which is how the original reports distinguish them
/// from manual snoozes.
#[must_use]
pub fn snooze_events_for_plu(reports: &[OperationReport], plu: &Plu) -> Vec<SnoozeEvent> {
    if plu.is_empty() {
        return Vec::new();
    }
    let mut events: Vec<SnoozeEvent> = reports
        .iter()
        .filter_map(|report| {
            report
                .snooze
                .get(plu)
                .map(|entry| shape_event(report, entry, plu))
        })
        .collect();
    events.sort_by_key(|event| event.created);
    events
}

fn shape_event(report: &OperationReport, entry: &SnoozeEntry, plu: &Plu) -> SnoozeEvent {
    let actor = if entry.action == Some(SnoozeAction::Snooze)
        && entry.snooze_end.is_some_and(is_midnight_utc)
    {
        SnoozeActor {
            id: String::new(),
            name: SCHEDULER_ACTOR.to_owned(),
        }
    } else {
        SnoozeActor {
            id: report
                .user
                .as_ref()
                .map(|user| user.id.clone())
                .unwrap_or_default(),
            name: report
                .user
                .as_ref()
                .and_then(|user| user.name.clone())
                .unwrap_or_else(|| DEFAULT_ACTOR.to_owned()),
        }
    };
    SnoozeEvent {
        report_id: report.id.clone(),
        plu: entry.plu.clone().unwrap_or_else(|| plu.clone()),
        name: entry.name.clone().unwrap_or_default(),
        action: entry.action,
        snooze_id: entry.snooze_id.clone(),
        snooze_start: entry.snooze_start,
        snooze_end: entry.snooze_end,
        channels: entry.channel_links.clone(),
        actor,
        created: report.created,
    }
}

fn is_midnight_utc(at: DateTime<Utc>) -> bool {
    at.time() == NaiveTime::MIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReportUser;
    use std::collections::HashMap;

    fn at(timestamp: &str) -> DateTime<Utc> {
        timestamp.parse().expect("valid timestamp")
    }

    fn report(
        id: &str,
        created: &str,
        user: Option<ReportUser>,
        plu: &str,
        entry: SnoozeEntry,
    ) -> OperationReport {
        OperationReport {
            id: id.to_owned(),
            created: Some(at(created)),
            operation_type: Some(15),
            user,
            snooze: HashMap::from([(Plu::new(plu), entry)]),
        }
    }

    fn manual_user() -> Option<ReportUser> {
        Some(ReportUser {
            id: "u1".to_owned(),
            name: Some("Store Manager".to_owned()),
        })
    }

    #[test]
    fn test_filters_to_requested_plu_and_sorts_by_created() {
        let reports = vec![
            report(
                "op2",
                "2026-08-21T10:00:00Z",
                manual_user(),
                "123",
                SnoozeEntry {
                    action: Some(SnoozeAction::Unsnooze),
                    ..SnoozeEntry::default()
                },
            ),
            report(
                "op-other",
                "2026-08-20T08:00:00Z",
                manual_user(),
                "999",
                SnoozeEntry::default(),
            ),
            report(
                "op1",
                "2026-08-20T09:00:00Z",
                manual_user(),
                "123",
                SnoozeEntry {
                    action: Some(SnoozeAction::Snooze),
                    snooze_end: Some(at("2026-08-20T21:30:00Z")),
                    ..SnoozeEntry::default()
                },
            ),
        ];
        let events = snooze_events_for_plu(&reports, &Plu::new("123"));
        assert_eq!(events.len(), 2);
        assert_eq!(
            events.iter().map(|e| e.report_id.as_str()).collect::<Vec<_>>(),
            vec!["op1", "op2"]
        );
    }

    #[test]
    fn test_manual_snooze_keeps_user_attribution() {
        let reports = vec![report(
            "op1",
            "2026-08-20T09:00:00Z",
            manual_user(),
            "123",
            SnoozeEntry {
                action: Some(SnoozeAction::Snooze),
                snooze_end: Some(at("2026-08-20T21:30:00Z")),
                ..SnoozeEntry::default()
            },
        )];
        let events = snooze_events_for_plu(&reports, &Plu::new("123"));
        let event = events.first().expect("one event");
        assert_eq!(event.actor.name, "Store Manager");
        assert_eq!(event.actor.id, "u1");
    }

    #[test]
    fn test_midnight_expiry_snooze_is_attributed_to_scheduler() {
        let reports = vec![report(
            "op1",
            "2026-08-20T09:00:00Z",
            manual_user(),
            "123",
            SnoozeEntry {
                action: Some(SnoozeAction::Snooze),
                snooze_end: Some(at("2026-08-21T00:00:00Z")),
                ..SnoozeEntry::default()
            },
        )];
        let events = snooze_events_for_plu(&reports, &Plu::new("123"));
        let event = events.first().expect("one event");
        assert_eq!(event.actor.name, SCHEDULER_ACTOR);
        assert_eq!(event.actor.id, "");
    }

    #[test]
    fn test_midnight_unsnooze_is_not_rewritten() {
        let reports = vec![report(
            "op1",
            "2026-08-21T00:00:00Z",
            manual_user(),
            "123",
            SnoozeEntry {
                action: Some(SnoozeAction::Unsnooze),
                snooze_end: Some(at("2026-08-21T00:00:00Z")),
                ..SnoozeEntry::default()
            },
        )];
        let events = snooze_events_for_plu(&reports, &Plu::new("123"));
        assert_eq!(
            events.first().map(|e| e.actor.name.as_str()),
            Some("Store Manager")
        );
    }

    #[test]
    fn test_userless_report_defaults_actor() {
        let reports = vec![report(
            "op1",
            "2026-08-20T09:00:00Z",
            None,
            "123",
            SnoozeEntry {
                action: Some(SnoozeAction::Unsnooze),
                ..SnoozeEntry::default()
            },
        )];
        let events = snooze_events_for_plu(&reports, &Plu::new("123"));
        let event = events.first().expect("one event");
        assert_eq!(event.actor.name, DEFAULT_ACTOR);
        assert_eq!(event.actor.id, "");
    }

    #[test]
    fn test_empty_plu_yields_no_events() {
        let reports = vec![report(
            "op1",
            "2026-08-20T09:00:00Z",
            manual_user(),
            "",
            SnoozeEntry::default(),
        )];
        assert!(snooze_events_for_plu(&reports, &Plu::new("")).is_empty());
    }

    #[test]
    fn test_entry_plu_falls_back_to_query_plu() {
        let reports = vec![report(
            "op1",
            "2026-08-20T09:00:00Z",
            manual_user(),
            "123",
            SnoozeEntry::default(),
        )];
        let events = snooze_events_for_plu(&reports, &Plu::new("123"));
        assert_eq!(events.first().map(|e| e.plu.clone()), Some(Plu::new("123")));
    }
}
