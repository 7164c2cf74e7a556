#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct LybDeletedV1 {
    pub lyb_id: String,
    pub deleted_at: i64,
}
