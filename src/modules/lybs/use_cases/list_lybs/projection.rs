// Read model for listing and retrieving Lybs.
//
// LybRow is what the projection store keeps; LybView is what queries hand out.
// `version` is the stream version of the last event folded into the row.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LybRow {
    pub lyb_id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub posttime: i64,
    pub updated_at: i64,
    pub version: i64,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LybView {
    pub lyb_id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub posttime: i64,
    pub updated_at: i64,
}

impl From<LybRow> for LybView {
    fn from(row: LybRow) -> Self {
        Self {
            lyb_id: row.lyb_id,
            title: row.title,
            author: row.author,
            content: row.content,
            posttime: row.posttime,
            updated_at: row.updated_at,
        }
    }
}

/// Changes carried by an update event, applied on top of an existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LybRowPatch {
    pub lyb_id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub updated_at: i64,
    pub version: i64,
    pub last_event_id: String,
}

impl LybRowPatch {
    pub fn apply_to(self, row: &mut LybRow) {
        row.title = self.title;
        row.author = self.author;
        row.content = self.content;
        row.updated_at = self.updated_at;
        row.version = self.version;
        row.last_event_id = Some(self.last_event_id);
    }
}
