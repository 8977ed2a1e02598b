use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

/// Bridesmaid, groomsman, officiant, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::wedding_party_member)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct WeddingPartyMember {
    pub id: uuid::Uuid,
    pub name: String,
    pub role: String,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub display_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::wedding_party_member)]
pub struct NewWeddingPartyMember {
    pub id: uuid::Uuid,
    pub name: String,
    pub role: String,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::wedding_party_member)]
pub struct WeddingPartyMemberChanges {
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<Option<String>>,
    pub photo_url: Option<Option<String>>,
    pub display_order: Option<i32>,
}
