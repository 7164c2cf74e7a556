// Intent to post a new message. Transport independent; `lyb_id` and `posttime`
// are assigned by the inbound adapter.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLyb {
    pub lyb_id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub posttime: i64,
}
