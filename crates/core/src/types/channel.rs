//! Channel-link payload shapes.

use serde::{Deserialize, Serialize};

use super::id::{ChannelId, ChannelLinkId};

/// A channel link from the channel-links listing: one location's connection
/// to one ordering channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelLink {
    /// Entity ID of the link.
    #[serde(rename = "_id")]
    pub id: Option<ChannelLinkId>,
    /// Display name.
    pub name: Option<String>,
    /// Numeric backend ID of the channel this link belongs to.
    pub channel: Option<ChannelId>,
}

/// Channel links grouped under their parent channel.
///
/// Channel display names come from a separate integrations lookup owned by
/// the fetch collaborator; groups carry only the numeric channel ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelGroup {
    /// The channel the links belong to.
    pub channel: ChannelId,
    /// Entity IDs of every link on this channel.
    pub link_ids: Vec<ChannelLinkId>,
}
