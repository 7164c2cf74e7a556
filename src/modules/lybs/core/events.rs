pub mod v1 {
    pub mod lyb_deleted;
    pub mod lyb_posted;
    pub mod lyb_updated;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum LybEvent {
    LybPostedV1(v1::lyb_posted::LybPostedV1),
    LybUpdatedV1(v1::lyb_updated::LybUpdatedV1),
    LybDeletedV1(v1::lyb_deleted::LybDeletedV1),
}

impl LybEvent {
    pub fn lyb_id(&self) -> &str {
        match self {
            LybEvent::LybPostedV1(e) => &e.lyb_id,
            LybEvent::LybUpdatedV1(e) => &e.lyb_id,
            LybEvent::LybDeletedV1(e) => &e.lyb_id,
        }
    }
}
