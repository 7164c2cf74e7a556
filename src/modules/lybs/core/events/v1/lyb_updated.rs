// Event payload: LybUpdatedV1.
//
// Carries every writable field after the change was merged, so replaying it never
// needs the previous values.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct LybUpdatedV1 {
    pub lyb_id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub updated_at: i64,
}
