use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

/// The couple's public profile. At most one row exists.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::couple_info)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct CoupleInfo {
    pub id: uuid::Uuid,
    pub bride_name: String,
    pub groom_name: String,
    pub bride_description: Option<String>,
    pub groom_description: Option<String>,
    pub wedding_date: chrono::DateTime<chrono::Utc>,
    pub bride_photo_url: Option<String>,
    pub groom_photo_url: Option<String>,
    pub hero_image_url: Option<String>,
    pub love_story: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::couple_info)]
pub struct NewCoupleInfo {
    pub id: uuid::Uuid,
    pub bride_name: String,
    pub groom_name: String,
    pub bride_description: Option<String>,
    pub groom_description: Option<String>,
    pub wedding_date: chrono::DateTime<chrono::Utc>,
    pub bride_photo_url: Option<String>,
    pub groom_photo_url: Option<String>,
    pub hero_image_url: Option<String>,
    pub love_story: Option<String>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::couple_info)]
pub struct CoupleInfoChanges {
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub bride_description: Option<Option<String>>,
    pub groom_description: Option<Option<String>>,
    pub wedding_date: Option<chrono::DateTime<chrono::Utc>>,
    pub bride_photo_url: Option<Option<String>>,
    pub groom_photo_url: Option<Option<String>>,
    pub hero_image_url: Option<Option<String>>,
    pub love_story: Option<Option<String>>,
}
