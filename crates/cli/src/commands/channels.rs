//! Channel-link grouping command.

use std::path::Path;

use retail_ops_core::ChannelLink;
use retail_ops_core::analysis::channels::group_by_channel;

use super::{CommandError, load_items};

/// Group an exported channel-links listing per channel.
pub fn run(links: &Path) -> Result<(), CommandError> {
    let links: Vec<ChannelLink> = load_items(links)?;
    tracing::info!("Loaded {} channel links", links.len());

    let groups = group_by_channel(&links);
    tracing::info!("{} channels in use:", groups.len());
    for group in &groups {
        tracing::info!("  channel {}: {} links", group.channel, group.link_ids.len());
        for id in &group.link_ids {
            tracing::info!("    {id}");
        }
    }
    Ok(())
}
