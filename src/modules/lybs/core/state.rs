#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LybState {
    None,
    Posted {
        lyb_id: String,
        title: String,
        author: String,
        content: String,
        posttime: i64,
        updated_at: i64,
    },
    Deleted {
        lyb_id: String,
        deleted_at: i64,
    },
}

impl LybState {
    pub fn is_live(&self) -> bool {
        matches!(self, LybState::Posted { .. })
    }
}
