#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteLyb {
    pub lyb_id: String,
    pub deleted_at: i64,
}
