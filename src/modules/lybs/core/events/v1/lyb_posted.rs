// Event payload: LybPostedV1.
//
// Records that a message was posted. `posttime` is the ordering key for listings.
// Timestamps are epoch milliseconds.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct LybPostedV1 {
    pub lyb_id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub posttime: i64,
}
