//! Channel-link grouping.

use std::collections::HashMap;

use crate::types::{ChannelGroup, ChannelId, ChannelLink, ChannelLinkId};

/// Group channel links per channel, keeping first-seen channel order.
///
/// Links missing an id or a channel are skipped.
#[must_use]
pub fn group_by_channel(links: &[ChannelLink]) -> Vec<ChannelGroup> {
    let mut groups: Vec<ChannelGroup> = Vec::new();
    let mut slots: HashMap<ChannelId, usize> = HashMap::new();
    for link in links {
        let (Some(id), Some(channel)) = (link.id.as_ref(), link.channel) else {
            continue;
        };
        if id.is_empty() {
            continue;
        }
        let slot = *slots.entry(channel).or_insert_with(|| {
            groups.push(ChannelGroup {
                channel,
                link_ids: Vec::new(),
            });
            groups.len() - 1
        });
        if let Some(group) = groups.get_mut(slot) {
            group.link_ids.push(id.clone());
        }
    }
    groups
}

/// Link IDs for one channel, if any link referenced it.
#[must_use]
pub fn links_for_channel(groups: &[ChannelGroup], channel: ChannelId) -> Option<&[ChannelLinkId]> {
    groups
        .iter()
        .find(|group| group.channel == channel)
        .map(|group| group.link_ids.as_slice())
}
