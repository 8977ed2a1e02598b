use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::{enums::PopupKind, schema};

/// Promotional overlay. At most one row per `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::popup)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub id: uuid::Uuid,
    pub kind: PopupKind,
    pub image_url: String,
    pub is_active: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::popup)]
pub struct NewPopup {
    pub id: uuid::Uuid,
    pub kind: PopupKind,
    pub image_url: String,
    pub is_active: bool,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::popup)]
pub struct PopupChanges {
    pub kind: Option<PopupKind>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
}
