use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated caller. Every read and write is scoped to `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl Identity {
    pub fn id(&self) -> Uuid {
        self.user_id
    }
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestInput {
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}
