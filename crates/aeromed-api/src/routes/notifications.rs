use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use aeromed_audit::events::AuditEvent;
use aeromed_store::notifications::Inbox;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Message {
    message: &'static str,
}

pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Json<Inbox> {
    Json(state.store.inbox(user.id).await)
}

pub async fn mark_read(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Message>, ApiError> {
    state.store.mark_notification_read(user.id, id).await?;
    AuditEvent::new("read", "notification", id, user.id).emit();
    Ok(Json(Message {
        message: "Notification marked as read.",
    }))
}
