// Intent to change an existing message. A full update sets every field of
// `changes`; a partial update sets only the fields the client sent.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LybChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateLyb {
    pub lyb_id: String,
    pub changes: LybChanges,
    pub updated_at: i64,
}
