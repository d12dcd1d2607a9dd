use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{ContentBlock, RawContent};

/// Lenient deserializer for message content.
///
/// Journals carry block types beyond the supported union (`image`, future
/// additions). Deserializing the content array wholesale would reject the
/// entire message over one such block, losing the recognized content next
/// to it. Instead each element is decoded independently and unrecognized
/// blocks are skipped; a message whose every block is unrecognized ends up
/// with zero blocks and is dropped by the parser like any other
/// content-free entry.
pub fn deserialize_raw_content<'de, D>(deserializer: D) -> Result<Option<RawContent>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(RawContent::Text(text))),
        Some(Value::Array(items)) => {
            let blocks: Vec<ContentBlock> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();
            Ok(Some(RawContent::Blocks(blocks)))
        }
        Some(_) => Err(Error::custom(
            "message content must be a string or an array of blocks",
        )),
    }
}
