use serde::Serialize;
use uuid::Uuid;

use aeromed_core::models::notification::Notification;

use crate::error::StoreError;
use crate::store::Store;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inbox {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

impl Store {
    /// The user's notifications, newest first.
    pub async fn inbox(&self, user_id: Uuid) -> Inbox {
        let tables = self.tables.read().await;
        let mut notifications: Vec<Notification> = tables
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        // Stable sort keeps later insertions ahead on equal timestamps.
        notifications.reverse();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let unread_count = notifications.iter().filter(|n| !n.is_read).count();
        Inbox {
            notifications,
            unread_count,
        }
    }

    /// Mark one of the user's notifications as read.
    pub async fn mark_notification_read(
        &self,
        user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let notification = tables
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id && n.user_id == user_id)
            .ok_or(StoreError::NotFound {
                kind: "notification",
                id: notification_id,
            })?;
        notification.is_read = true;
        Ok(())
    }
}
