use crate::modules::lybs::core::events::LybEvent;
use crate::modules::lybs::core::rules::FieldErrors;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("lyb already exists")]
    AlreadyExists,

    #[error("lyb not found")]
    NotFound,

    #[error("invalid lyb: {0}")]
    Invalid(FieldErrors),
}

#[derive(Debug)]
pub enum Decision {
    Accepted { events: Vec<LybEvent> },
    Rejected { reason: DecideError },
}

impl Decision {
    pub fn accept(event: LybEvent) -> Self {
        Decision::Accepted {
            events: vec![event],
        }
    }

    pub fn reject(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }
}
