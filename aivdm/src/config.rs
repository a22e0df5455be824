use serde::{Deserialize, Serialize};

use crate::reassembly::{DEFAULT_MAX_FRAGMENTS, DEFAULT_MAX_PENDING_GROUP_AGE};
use crate::tag_block::TagBlockStandard;

/// Decoder settings, passed explicitly to every stream reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderOptions {
    /// Grouping syntax expected in tag blocks
    pub tag_block_standard: TagBlockStandard,
    /// Discard lines whose tag block contains unknown fields
    pub strict_tag_blocks: bool,
    /// Newer groups started before an incomplete group is dropped
    pub max_pending_group_age: usize,
    /// Largest fragment count a multi-sentence group may declare
    pub max_fragments: u32,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            tag_block_standard: TagBlockStandard::Unspecified,
            strict_tag_blocks: false,
            max_pending_group_age: DEFAULT_MAX_PENDING_GROUP_AGE,
            max_fragments: DEFAULT_MAX_FRAGMENTS,
        }
    }
}
