use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::music_track)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct MusicTrack {
    pub id: uuid::Uuid,
    pub title: String,
    pub url: String,
    pub artist: Option<String>,
    pub duration_seconds: Option<i32>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::music_track)]
pub struct NewMusicTrack {
    pub id: uuid::Uuid,
    pub title: String,
    pub url: String,
    pub artist: Option<String>,
    pub duration_seconds: Option<i32>,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::music_track)]
pub struct MusicTrackChanges {
    pub title: Option<String>,
    pub url: Option<String>,
    pub artist: Option<Option<String>>,
    pub duration_seconds: Option<Option<i32>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
