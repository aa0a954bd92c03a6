use std::borrow::Cow;
use crate::utils::constants::ITEM_ID_PREFIX;

/// Builds the catalog id for a stream url. The url is percent-encoded so the id survives as a
/// single path segment; [`decode_item_id`] reverses it.
pub fn encode_item_id(stream_url: &str) -> String {
    format!("{ITEM_ID_PREFIX}{}", urlencoding::encode(stream_url))
}

/// Recovers the stream url from a catalog id.
///
/// Never fails: an id without the `custom_` prefix is decoded as a whole, and a tail that
/// does not decode to valid UTF-8 is returned untouched.
pub fn decode_item_id(item_id: &str) -> Cow<'_, str> {
    let encoded = item_id.strip_prefix(ITEM_ID_PREFIX).unwrap_or(item_id);
    urlencoding::decode(encoded).unwrap_or(Cow::Borrowed(encoded))
}
