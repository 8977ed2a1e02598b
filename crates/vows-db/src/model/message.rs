use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

/// Guestbook entry. Hidden from the public list until approved.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::guest_message)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct GuestMessage {
    pub id: uuid::Uuid,
    pub guest_name: String,
    pub message: String,
    pub approved: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Submitted messages always start unapproved; `approved` is left to the
/// column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::guest_message)]
pub struct NewGuestMessage {
    pub id: uuid::Uuid,
    pub guest_name: String,
    pub message: String,
}
