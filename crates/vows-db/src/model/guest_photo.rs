use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::guest_photo)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct GuestPhoto {
    pub id: uuid::Uuid,
    pub url: String,
    pub caption: Option<String>,
    pub guest_name: Option<String>,
    pub approved: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::guest_photo)]
pub struct NewGuestPhoto {
    pub id: uuid::Uuid,
    pub url: String,
    pub caption: Option<String>,
    pub guest_name: Option<String>,
}
