use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::{enums::StreamPlatform, schema};

/// Livestream details shown on the public site. At most one row exists.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::livestream_info)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct LivestreamInfo {
    pub id: uuid::Uuid,
    pub is_active: bool,
    pub platform: StreamPlatform,
    pub stream_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub thumbnail_url: Option<String>,
    pub chat_enabled: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::livestream_info)]
pub struct NewLivestreamInfo {
    pub id: uuid::Uuid,
    pub is_active: bool,
    pub platform: StreamPlatform,
    pub stream_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub thumbnail_url: Option<String>,
    pub chat_enabled: bool,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::livestream_info)]
pub struct LivestreamInfoChanges {
    pub is_active: Option<bool>,
    pub platform: Option<StreamPlatform>,
    pub stream_url: Option<String>,
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub start_time: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub end_time: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub thumbnail_url: Option<Option<String>>,
    pub chat_enabled: Option<bool>,
}
