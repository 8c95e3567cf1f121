use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    /// Frontend route the notification points at.
    pub link: String,
    pub is_read: bool,
    pub created_at: jiff::Timestamp,
}

impl Notification {
    pub fn new(
        user_id: Uuid,
        message: impl Into<String>,
        link: impl Into<String>,
        now: jiff::Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            message: message.into(),
            link: link.into(),
            is_read: false,
            created_at: now,
        }
    }
}
