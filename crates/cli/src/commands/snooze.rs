//! Snooze-history command.

use std::path::Path;

use retail_ops_core::analysis::snooze::snooze_events_for_plu;
use retail_ops_core::{OperationReport, Plu, SnoozeAction};

use super::{CommandError, load_items};

/// Show the chronological snooze/unsnooze history for one PLU.
pub fn run(reports: &Path, plu: &str) -> Result<(), CommandError> {
    let reports: Vec<OperationReport> = load_items(reports)?;
    let plu = Plu::from(plu);
    tracing::info!("Loaded {} operation reports", reports.len());

    let events = snooze_events_for_plu(&reports, &plu);
    if events.is_empty() {
        tracing::info!("No snooze events for PLU {plu}");
        return Ok(());
    }

    tracing::info!("{} snooze events for PLU {plu}:", events.len());
    for event in &events {
        let action = match event.action {
            Some(SnoozeAction::Snooze) => "SNOOZE".to_owned(),
            Some(SnoozeAction::Unsnooze) => "UNSNOOZE".to_owned(),
            Some(SnoozeAction::Other(code)) => format!("OTHER({code})"),
            None => "UNKNOWN".to_owned(),
        };
        tracing::info!(
            "  {} | {} | {} | until {} | by {}",
            event.created.map_or_else(|| "-".to_owned(), |t| t.to_rfc3339()),
            action,
            event.name,
            event
                .snooze_end
                .map_or_else(|| "-".to_owned(), |t| t.to_rfc3339()),
            event.actor.name,
        );
    }
    Ok(())
}
